//! Solar installation projects
//!
//! A project embeds its customer, address and equipment by value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Cliente;
use crate::client::Resource;

/// Project status enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StatusProjeto {
    Pendente,
    EmAndamento,
    AguardandoAprovacao,
    Aprovado,
    Instalacao,
    Concluido,
    Cancelado,
}

impl Default for StatusProjeto {
    fn default() -> Self {
        Self::Pendente
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Endereco {
    pub cep: String,
    pub logradouro: String,
    pub numero: String,
    pub complemento: String,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
}

/// Compensation scheme for the generated energy
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Modalidade {
    GeracaoCompartilhada,
    Autoconsumo,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DadosProjeto {
    pub concessionaria: String,
    pub classe: String,
    pub integrador: String,
    pub modalidade: Modalidade,
    pub enquadramento: String,
    /// kWp
    pub potencia_sistema: f64,
    #[serde(rename = "protecaoCC")]
    pub protecao_cc: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DadosTecnicos {
    /// Volts
    pub tensao: u32,
    pub numero_fases: u32,
    pub ramal: String,
    pub disjuntor: String,
    /// Watts
    pub carga_instalada: f64,
}

/// PV module line item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Modulo {
    pub id: String,
    pub fabricante: String,
    pub modelo: String,
    pub potencia: f64,
    pub quantidade: u32,
    pub potencia_pico: f64,
}

/// Inverter line item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Inversor {
    pub id: String,
    pub fabricante: String,
    pub modelo: String,
    pub potencia: f64,
    pub quantidade: u32,
    pub potencia_total: f64,
}

/// Share of the generated credits assigned to one consumer unit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DivisaoCreditos {
    pub percentual: f64,
    pub uc: String,
    pub classe: String,
    pub endereco: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StatusEtapa {
    Concluido,
    EmAndamento,
    Pendente,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineItem {
    pub id: String,
    pub etapa: String,
    pub data: String,
    pub status: StatusEtapa,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Documento {
    pub id: String,
    pub nome: String,
    pub tipo: String,
    pub data_upload: String,
    /// Bytes
    pub tamanho: u64,
}

/// Project entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Projeto {
    pub id: String,
    pub protocolo: String,
    pub cliente: Cliente,
    pub endereco: Endereco,
    pub dados_projeto: DadosProjeto,
    pub dados_tecnicos: DadosTecnicos,
    pub modulos: Vec<Modulo>,
    pub inversores: Vec<Inversor>,
    pub divisao_creditos: Vec<DivisaoCreditos>,
    pub timeline: Vec<TimelineItem>,
    pub documentos: Vec<Documento>,
    pub status: StatusProjeto,
    pub data_criacao: String,
    pub data_atualizacao: String,
}

/// Request DTO for creating a project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NovoProjeto {
    pub protocolo: String,
    pub cliente: Cliente,
    pub endereco: Endereco,
    pub dados_projeto: DadosProjeto,
    pub dados_tecnicos: DadosTecnicos,
    #[serde(default)]
    pub modulos: Vec<Modulo>,
    #[serde(default)]
    pub inversores: Vec<Inversor>,
    #[serde(default)]
    pub divisao_creditos: Vec<DivisaoCreditos>,
    #[serde(default)]
    pub timeline: Vec<TimelineItem>,
    #[serde(default)]
    pub documentos: Vec<Documento>,
    #[serde(default)]
    pub status: StatusProjeto,
}

/// Request DTO for updating a project
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AtualizacaoProjeto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocolo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cliente: Option<Cliente>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endereco: Option<Endereco>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dados_projeto: Option<DadosProjeto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dados_tecnicos: Option<DadosTecnicos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modulos: Option<Vec<Modulo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inversores: Option<Vec<Inversor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divisao_creditos: Option<Vec<DivisaoCreditos>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Vec<TimelineItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentos: Option<Vec<Documento>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusProjeto>,
}

impl Resource for Projeto {
    type Create = NovoProjeto;
    type Update = AtualizacaoProjeto;

    const PATH: &'static str = "/projetos";
    const NAME: &'static str = "projeto";

    fn id(&self) -> &str {
        &self.id
    }

    fn on_create(record: &mut Map<String, Value>, now: DateTime<Utc>) {
        let stamp = Value::String(now.to_rfc3339());
        record.insert("dataCriacao".to_string(), stamp.clone());
        record.insert("dataAtualizacao".to_string(), stamp);
    }

    fn on_update(record: &mut Map<String, Value>, now: DateTime<Utc>) {
        record.insert("dataAtualizacao".to_string(), Value::String(now.to_rfc3339()));
    }
}

/// Dashboard counters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_projetos: u64,
    pub projetos_em_andamento: u64,
    pub projetos_finalizados: u64,
    pub projetos_pendentes: u64,
}

impl DashboardStats {
    pub fn from_projetos(projetos: &[Projeto]) -> Self {
        let count = |status: StatusProjeto| {
            projetos.iter().filter(|p| p.status == status).count() as u64
        };

        Self {
            total_projetos: projetos.len() as u64,
            projetos_em_andamento: count(StatusProjeto::EmAndamento),
            projetos_finalizados: count(StatusProjeto::Concluido),
            projetos_pendentes: count(StatusProjeto::Pendente),
        }
    }
}
