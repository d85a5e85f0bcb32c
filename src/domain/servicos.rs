//! Field service orders (maintenance, installation, inspection)

use serde::{Deserialize, Serialize};

use crate::client::Resource;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StatusServico {
    Pendente,
    EmAndamento,
    Concluido,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Servico {
    pub id: String,
    pub nome: String,
    /// Customer name, not a reference
    pub cliente: String,
    pub status: StatusServico,
    pub data: String,
    pub valor: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NovoServico {
    pub nome: String,
    pub cliente: String,
    pub status: StatusServico,
    pub data: String,
    pub valor: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AtualizacaoServico {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cliente: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusServico>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valor: Option<f64>,
}

impl Resource for Servico {
    type Create = NovoServico;
    type Update = AtualizacaoServico;

    const PATH: &'static str = "/servicos";
    const NAME: &'static str = "servico";

    fn id(&self) -> &str {
        &self.id
    }
}
