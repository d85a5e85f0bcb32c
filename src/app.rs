use std::sync::Arc;
use std::time::Duration;

use crate::client::HttpClient;
use crate::config::{ApiMode, Settings};
use crate::error::Result;
use crate::fixtures;
use crate::services::{
    AuthService, BancoDadosService, CalendarioService, ConfiguracoesService, FinanceiroService,
    ProjetoService, ResourceService, ServicoService, UsuarioService,
};
use crate::session::{FileStore, Session};

/// Every domain service, wired to one backend.
///
/// The backend is fixed at construction time from [`Settings::mode`]; there is
/// no per-call switching.
#[derive(Clone)]
pub struct Services {
    pub settings: Settings,
    pub session: Session,
    pub http: HttpClient,
    pub auth: AuthService,
    pub projetos: ProjetoService,
    pub usuarios: UsuarioService,
    pub servicos: ServicoService,
    pub financeiro: FinanceiroService,
    pub calendario: CalendarioService,
    pub configuracoes: ConfiguracoesService,
    pub banco_dados: BancoDadosService,
}

impl Services {
    /// Builds the session from settings: a JSON file when `session_file` is
    /// set, process memory otherwise.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let session = match &settings.session_file {
            Some(path) => Session::new(
                Arc::new(FileStore::new(path.clone())),
                settings.auth_token_storage_key.clone(),
            ),
            None => Session::in_memory(settings.auth_token_storage_key.clone()),
        };

        Self::with_session(settings, session)
    }

    pub fn with_session(settings: &Settings, session: Session) -> Result<Self> {
        let http = HttpClient::new(
            &settings.api_base_url,
            Duration::from_secs(settings.http_timeout_seconds),
            session.clone(),
        )?;

        let services = match settings.mode {
            ApiMode::Live => Self::live(settings, session, http),
            ApiMode::Mock => Self::fixture(settings, session, http),
        };

        tracing::debug!(mode = ?settings.mode, base_url = %settings.api_base_url, "Services composed");
        Ok(services)
    }

    fn live(settings: &Settings, session: Session, http: HttpClient) -> Self {
        Self {
            settings: settings.clone(),
            auth: AuthService::live(http.clone()),
            projetos: ProjetoService::live(http.clone()),
            usuarios: ResourceService::live(http.clone()),
            servicos: ResourceService::live(http.clone()),
            financeiro: FinanceiroService::live(http.clone()),
            calendario: ResourceService::live(http.clone()),
            configuracoes: ConfiguracoesService::live(http.clone()),
            banco_dados: BancoDadosService::live(http.clone()),
            session,
            http,
        }
    }

    fn fixture(settings: &Settings, session: Session, http: HttpClient) -> Self {
        let latency = settings.mock_latency;

        Self {
            settings: settings.clone(),
            auth: AuthService::fixture(session.clone(), latency),
            projetos: ProjetoService::fixture(latency),
            usuarios: ResourceService::fixture(fixtures::usuarios(), latency),
            servicos: ResourceService::fixture(fixtures::servicos(), latency),
            financeiro: FinanceiroService::fixture(latency),
            calendario: ResourceService::fixture(fixtures::eventos(), latency),
            configuracoes: ConfiguracoesService::fixture(latency),
            banco_dados: BancoDadosService::fixture(latency),
            session,
            http,
        }
    }

    pub fn is_mock(&self) -> bool {
        self.settings.is_mock()
    }
}
