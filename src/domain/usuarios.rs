//! Staff accounts managed from the dashboard

use serde::{Deserialize, Serialize};

use crate::client::Resource;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StatusUsuario {
    Ativo,
    Inativo,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    pub id: String,
    pub nome: String,
    pub email: String,
    pub telefone: String,
    pub cargo: String,
    pub departamento: String,
    pub status: StatusUsuario,
    pub data_admissao: String,
    /// Absent until the account signs in for the first time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ultimo_acesso: Option<String>,
    #[serde(default)]
    pub permissoes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NovoUsuario {
    pub nome: String,
    pub email: String,
    pub telefone: String,
    pub cargo: String,
    pub departamento: String,
    pub status: StatusUsuario,
    pub data_admissao: String,
    #[serde(default)]
    pub permissoes: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AtualizacaoUsuario {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cargo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departamento: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusUsuario>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_admissao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ultimo_acesso: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissoes: Option<Vec<String>>,
}

impl Resource for Usuario {
    type Create = NovoUsuario;
    type Update = AtualizacaoUsuario;

    const PATH: &'static str = "/usuarios";
    const NAME: &'static str = "usuario";

    fn id(&self) -> &str {
        &self.id
    }
}
