// ==========================================
// QMS Retorno - Registro de retorno + resultado de classificação
// ==========================================
// ReturnRecord é o item classificado persistido.
// ClassificationResult é derivado (peso + especificação +
// conjunto de regras) e nunca persistido como tal.
// ==========================================

use crate::domain::rule::ClassificationRule;
use crate::domain::types::Destination;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==========================================
// ReturnRecord - item retornado classificado
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnRecord {
    pub return_id: String,
    pub toner_id: String,
    /// 0 = cliente não identificado (sentinela válida, não erro).
    pub client_id: i64,
    /// Filial de origem do retorno.
    pub branch: String,
    pub destination: Destination,
    /// Peso medido do cartucho no recebimento (g).
    pub weight_g: f64,
    pub return_date: NaiveDate,
    /// Valor recuperado estimado (R$); None quando o destino
    /// não retorna ao estoque ou quando não informado.
    pub recovered_value: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl ReturnRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        toner_id: impl Into<String>,
        client_id: i64,
        branch: impl Into<String>,
        destination: Destination,
        weight_g: f64,
        return_date: NaiveDate,
        recovered_value: Option<f64>,
    ) -> Self {
        Self {
            return_id: Uuid::new_v4().to_string(),
            toner_id: toner_id.into(),
            client_id,
            branch: branch.into(),
            destination,
            weight_g,
            return_date,
            recovered_value,
            created_at: Utc::now(),
        }
    }
}

// ==========================================
// ClassificationResult - saída derivada do motor
// ==========================================
// Fluxo: peso medido + especificação -> percentual restante ->
// faixa correspondente -> valor recuperado (somente Estoque).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// max(0, peso_medido - peso_vazio), em gramas.
    pub remaining_weight_g: f64,
    /// Percentual da gramatura restante; pode passar de 100 com
    /// dados mestres ruins (ver config `clamp_percent`).
    pub remaining_percent: f64,
    /// Primeira faixa (ordem de inserção) que contém o percentual;
    /// None quando as faixas configuradas deixam lacuna.
    pub matched_rule: Option<ClassificationRule>,
    /// Calculado apenas quando o destino sugerido é Estoque.
    pub recovered_value: Option<f64>,
}

impl ClassificationResult {
    /// Destino sugerido, quando alguma faixa casou.
    pub fn suggested_destination(&self) -> Option<&Destination> {
        self.matched_rule.as_ref().map(|r| &r.destination)
    }

    /// Orientação da faixa, quando alguma faixa casou.
    pub fn guidance(&self) -> Option<&str> {
        self.matched_rule.as_ref().map(|r| r.guidance.as_str())
    }
}
