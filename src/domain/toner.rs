// ==========================================
// QMS Retorno - Modelo de toner (especificação do produto)
// ==========================================
// Dados mestres mantidos pelo colaborador de inventário.
// Todos os campos numéricos são não-negativos; um modelo
// auto-criado na importação nasce com especificação zerada
// até ser completado pelo usuário.
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==========================================
// TonerModel - especificação do produto
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TonerModel {
    pub toner_id: String,
    pub name: String,
    /// Peso do cartucho vazio (g).
    pub empty_weight_g: f64,
    /// Gramatura: peso total de toner com carga cheia (g).
    pub total_capacity_g: f64,
    /// Capacidade nominal de impressão (folhas).
    pub sheet_capacity: f64,
    /// Valor por folha impressa (R$).
    pub value_per_sheet: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TonerModel {
    pub fn new(
        name: impl Into<String>,
        empty_weight_g: f64,
        total_capacity_g: f64,
        sheet_capacity: f64,
        value_per_sheet: f64,
    ) -> Self {
        let now = Utc::now();
        Self {
            toner_id: Uuid::new_v4().to_string(),
            name: name.into(),
            empty_weight_g,
            total_capacity_g,
            sheet_capacity,
            value_per_sheet,
            created_at: now,
            updated_at: now,
        }
    }

    /// Modelo criado automaticamente pela importação quando o nome
    /// não resolve para nenhum cadastro (especificação zerada).
    pub fn auto_created(name: impl Into<String>) -> Self {
        Self::new(name, 0.0, 0.0, 0.0, 0.0)
    }
}
