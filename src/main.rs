use anyhow::Result;

use opj_api_client::{config, logging, Services};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let settings = config::Settings::from_env()?;

    // Initialize logging
    logging::init_logging(&settings.env)?;

    tracing::info!(
        env = ?settings.env,
        mode = ?settings.mode,
        base_url = %settings.api_base_url,
        "Starting OPJ API client"
    );

    let services = Services::from_settings(&settings)?;

    let stats = services.projetos.dashboard_stats().await?;
    tracing::info!(
        total = stats.total_projetos,
        em_andamento = stats.projetos_em_andamento,
        finalizados = stats.projetos_finalizados,
        pendentes = stats.projetos_pendentes,
        "Dashboard stats"
    );

    let resumo = services.financeiro.resumo().await?;
    tracing::info!(
        receitas = resumo.total_receitas,
        despesas = resumo.total_despesas,
        saldo = resumo.saldo,
        pendentes = resumo.total_pendentes,
        "Finance summary"
    );

    Ok(())
}
