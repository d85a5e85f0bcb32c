//! Domain services.
//!
//! Each service is built once against either the live HTTP backend or the
//! in-memory fixtures; callers see the same operations either way.

pub mod auth;
pub mod banco_dados;
pub mod configuracoes;
pub mod financeiro;
pub mod projetos;
pub mod resource;

pub use auth::{AuthBackend, AuthService, FixtureAuth, LiveAuth};
pub use banco_dados::{BancoDadosService, DatabaseAdminBackend, FixtureDatabaseAdmin, LiveDatabaseAdmin};
pub use configuracoes::{ConfiguracoesService, FixtureSettings, LiveSettings, SettingsBackend};
pub use financeiro::{FinanceiroService, LiveResumo, ResumoSource};
pub use projetos::{DashboardStatsSource, LiveDashboardStats, ProjetoService};
pub use resource::ResourceService;

use crate::domain::{Evento, Servico, Usuario};

pub type UsuarioService = ResourceService<Usuario>;
pub type ServicoService = ResourceService<Servico>;
pub type CalendarioService = ResourceService<Evento>;
