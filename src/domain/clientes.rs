use serde::{Deserialize, Serialize};

/// Customer snapshot, embedded by value in each project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Cliente {
    pub id: String,
    pub nome: String,
    pub cpf_cnpj: String,
    pub telefone: String,
    pub email: String,
}
