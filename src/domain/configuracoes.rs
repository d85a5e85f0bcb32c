//! Company-wide system settings (a singleton, not a collection)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Tema {
    Dark,
    Light,
    Auto,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FrequenciaBackup {
    Diario,
    Semanal,
    Mensal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConfiguracoesSistema {
    // Geral
    pub nome_empresa: String,
    pub cnpj: String,
    pub telefone: String,
    pub email: String,
    pub endereco: String,

    // Notificações
    pub email_notificacoes: bool,
    pub sms_notificacoes: bool,
    pub notificacoes_projetos: bool,
    pub notificacoes_financeiro: bool,
    pub notificacoes_servicos: bool,

    // Sistema
    pub tema: Tema,
    pub idioma: String,
    pub fuso_horario: String,
    pub formato_data: String,

    // Backup
    pub backup_automatico: bool,
    pub frequencia_backup: FrequenciaBackup,
    /// Days, kept as text on the wire
    pub retencao_backup: String,
}

/// Partial settings update; only present fields are sent and applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AtualizacaoConfiguracoes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome_empresa: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnpj: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endereco: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_notificacoes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_notificacoes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notificacoes_projetos: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notificacoes_financeiro: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notificacoes_servicos: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tema: Option<Tema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idioma: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuso_horario: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formato_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_automatico: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequencia_backup: Option<FrequenciaBackup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retencao_backup: Option<String>,
}
