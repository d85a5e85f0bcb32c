//! Calendar events (installations, maintenance, meetings, inspections)

use serde::{Deserialize, Serialize};

use crate::client::Resource;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TipoEvento {
    Instalacao,
    Manutencao,
    Reuniao,
    Vistoria,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Evento {
    pub id: String,
    pub titulo: String,
    /// `YYYY-MM-DD`
    pub data: String,
    /// `HH:MM`
    pub hora: String,
    pub tipo: TipoEvento,
    pub local: String,
    #[serde(default)]
    pub participantes: Vec<String>,
    #[serde(default)]
    pub descricao: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NovoEvento {
    pub titulo: String,
    pub data: String,
    pub hora: String,
    pub tipo: TipoEvento,
    pub local: String,
    #[serde(default)]
    pub participantes: Vec<String>,
    #[serde(default)]
    pub descricao: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AtualizacaoEvento {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub titulo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hora: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo: Option<TipoEvento>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participantes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
}

impl Resource for Evento {
    type Create = NovoEvento;
    type Update = AtualizacaoEvento;

    const PATH: &'static str = "/calendario/eventos";
    const NAME: &'static str = "evento";

    fn id(&self) -> &str {
        &self.id
    }
}
