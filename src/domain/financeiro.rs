//! Financial transactions and the balance summary

use serde::{Deserialize, Serialize};

use crate::client::Resource;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TipoTransacao {
    Receita,
    Despesa,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StatusTransacao {
    Pago,
    Pendente,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transacao {
    pub id: String,
    pub descricao: String,
    pub tipo: TipoTransacao,
    pub valor: f64,
    pub data: String,
    pub categoria: String,
    pub status: StatusTransacao,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NovaTransacao {
    pub descricao: String,
    pub tipo: TipoTransacao,
    pub valor: f64,
    pub data: String,
    pub categoria: String,
    pub status: StatusTransacao,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AtualizacaoTransacao {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo: Option<TipoTransacao>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusTransacao>,
}

impl Resource for Transacao {
    type Create = NovaTransacao;
    type Update = AtualizacaoTransacao;

    const PATH: &'static str = "/financeiro/transacoes";
    const NAME: &'static str = "transacao";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Totals shown on the finance page
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResumoFinanceiro {
    pub total_receitas: f64,
    pub total_despesas: f64,
    pub saldo: f64,
    /// Sum of unpaid entries, income and expense alike
    pub total_pendentes: f64,
}

impl ResumoFinanceiro {
    pub fn from_transacoes(transacoes: &[Transacao]) -> Self {
        let sum = |pred: &dyn Fn(&Transacao) -> bool| -> f64 {
            transacoes.iter().filter(|t| pred(t)).map(|t| t.valor).sum()
        };

        let total_receitas = sum(&|t| t.tipo == TipoTransacao::Receita);
        let total_despesas = sum(&|t| t.tipo == TipoTransacao::Despesa);

        Self {
            total_receitas,
            total_despesas,
            saldo: total_receitas - total_despesas,
            total_pendentes: sum(&|t| t.status == StatusTransacao::Pendente),
        }
    }
}
