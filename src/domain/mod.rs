//! Domain types and DTOs
//!
//! Wire-shaped records for every dashboard resource. JSON field names follow
//! the API (camelCase, Portuguese).

pub mod auth;
pub mod banco_dados;
pub mod calendario;
pub mod clientes;
pub mod configuracoes;
pub mod financeiro;
pub mod projetos;
pub mod servicos;
pub mod usuarios;

// Re-export commonly used types
pub use auth::*;
pub use banco_dados::*;
pub use calendario::*;
pub use clientes::*;
pub use configuracoes::*;
pub use financeiro::*;
pub use projetos::*;
pub use servicos::*;
pub use usuarios::*;
