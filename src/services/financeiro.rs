//! Transactions and the finance summary.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use super::ResourceService;
use crate::api::{ListParams, ListResponse};
use crate::client::{HttpClient, RequestOptions};
use crate::domain::{AtualizacaoTransacao, NovaTransacao, ResumoFinanceiro, Transacao};
use crate::error::Result;
use crate::fixtures;
use crate::gateway::{simulate_latency, FixtureGateway};

#[async_trait]
pub trait ResumoSource: Send + Sync {
    async fn resumo(&self) -> Result<ResumoFinanceiro>;
}

/// `GET /financeiro/resumo`
pub struct LiveResumo {
    http: HttpClient,
}

#[async_trait]
impl ResumoSource for LiveResumo {
    async fn resumo(&self) -> Result<ResumoFinanceiro> {
        self.http.get("/financeiro/resumo", RequestOptions::new()).await
    }
}

#[async_trait]
impl ResumoSource for FixtureGateway<Transacao> {
    async fn resumo(&self) -> Result<ResumoFinanceiro> {
        simulate_latency(self.latency()).await;
        Ok(ResumoFinanceiro::from_transacoes(&self.snapshot()))
    }
}

#[derive(Clone)]
pub struct FinanceiroService {
    transacoes: ResourceService<Transacao>,
    resumo: Arc<dyn ResumoSource>,
}

impl FinanceiroService {
    pub fn new(transacoes: ResourceService<Transacao>, resumo: Arc<dyn ResumoSource>) -> Self {
        Self { transacoes, resumo }
    }

    pub fn live(http: HttpClient) -> Self {
        Self::new(ResourceService::live(http.clone()), Arc::new(LiveResumo { http }))
    }

    pub fn fixture(latency: Duration) -> Self {
        let store = FixtureGateway::new(fixtures::transacoes(), latency);
        Self::new(ResourceService::new(Arc::new(store.clone())), Arc::new(store))
    }

    pub async fn list(&self, params: Option<&ListParams>) -> Result<Vec<Transacao>> {
        self.transacoes.list(params).await
    }

    pub async fn list_page(&self, params: Option<&ListParams>) -> Result<ListResponse<Transacao>> {
        self.transacoes.list_page(params).await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Transacao> {
        self.transacoes.get_by_id(id).await
    }

    pub async fn find(&self, id: &str) -> Result<Option<Transacao>> {
        self.transacoes.find(id).await
    }

    pub async fn create(&self, payload: &NovaTransacao) -> Result<Transacao> {
        self.transacoes.create(payload).await
    }

    pub async fn update(&self, id: &str, payload: &AtualizacaoTransacao) -> Result<Transacao> {
        self.transacoes.update(id, payload).await
    }

    pub async fn remove(&self, id: &str) -> Result<()> {
        self.transacoes.remove(id).await
    }

    pub async fn resumo(&self) -> Result<ResumoFinanceiro> {
        self.resumo.resumo().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{StatusTransacao, TipoTransacao};

    #[tokio::test]
    async fn fixture_summary_matches_finance_page_totals() {
        let service = FinanceiroService::fixture(Duration::ZERO);

        assert_eq!(
            service.resumo().await.unwrap(),
            ResumoFinanceiro {
                total_receitas: 15500.0,
                total_despesas: 8000.0,
                saldo: 7500.0,
                total_pendentes: 500.0,
            }
        );
    }

    #[tokio::test]
    async fn new_expense_lowers_the_balance() {
        let service = FinanceiroService::fixture(Duration::ZERO);
        service
            .create(&NovaTransacao {
                descricao: "Frete de inversores".to_string(),
                tipo: TipoTransacao::Despesa,
                valor: 1200.0,
                data: "2024-01-22".to_string(),
                categoria: "Logística".to_string(),
                status: StatusTransacao::Pendente,
            })
            .await
            .unwrap();

        let resumo = service.resumo().await.unwrap();
        assert_eq!(resumo.total_despesas, 9200.0);
        assert_eq!(resumo.saldo, 6300.0);
        assert_eq!(resumo.total_pendentes, 1700.0);
    }
}
