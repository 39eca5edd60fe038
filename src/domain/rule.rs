// ==========================================
// QMS Retorno - Regras de classificação (faixas)
// ==========================================
// Uma regra mapeia um intervalo de percentual de gramatura
// restante para um destino sugerido + texto de orientação.
//
// Contrato de ordenação: o conjunto é uma lista ORDENADA e a
// classificação usa a primeira faixa que contém o percentual
// (ordem de inserção). Sobreposição e lacunas entre faixas são
// permitidas de propósito: flexibilidade de negócio, não defeito.
// ==========================================

use crate::domain::types::Destination;
use serde::{Deserialize, Serialize};

// ==========================================
// ClassificationRule - faixa de classificação
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationRule {
    pub rule_id: String,
    pub destination: Destination,
    /// Limite inferior, inclusivo, em percentual (0-100).
    pub min_percent: f64,
    /// Limite superior, inclusivo. Invariante: min_percent <= max_percent.
    pub max_percent: f64,
    /// Orientação exibida ao usuário quando a faixa é sugerida.
    pub guidance: String,
}

impl ClassificationRule {
    pub fn new(
        rule_id: impl Into<String>,
        destination: Destination,
        min_percent: f64,
        max_percent: f64,
        guidance: impl Into<String>,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            destination,
            min_percent,
            max_percent,
            guidance: guidance.into(),
        }
    }

    /// Teste de pertencimento com limites inclusivos nas duas pontas.
    pub fn contains(&self, percent: f64) -> bool {
        percent >= self.min_percent && percent <= self.max_percent
    }
}

/// Conjunto padrão de 4 faixas (restaurado por "restaurar padrões").
///
/// | Faixa   | Destino     |
/// |---------|-------------|
/// | 0-30    | Estoque     |
/// | 31-70   | Uso Interno |
/// | 71-90   | Garantia    |
/// | 91-100  | Descarte    |
pub fn default_rules() -> Vec<ClassificationRule> {
    vec![
        ClassificationRule::new(
            "padrao-estoque",
            Destination::Estoque,
            0.0,
            30.0,
            "Toner pouco utilizado: retornar ao estoque para reaproveitamento.",
        ),
        ClassificationRule::new(
            "padrao-uso-interno",
            Destination::UsoInterno,
            31.0,
            70.0,
            "Uso parcial: direcionar para impressoras de uso interno.",
        ),
        ClassificationRule::new(
            "padrao-garantia",
            Destination::Garantia,
            71.0,
            90.0,
            "Alto consumo com retorno: avaliar acionamento de garantia junto ao fornecedor.",
        ),
        ClassificationRule::new(
            "padrao-descarte",
            Destination::Descarte,
            91.0,
            100.0,
            "Toner esgotado: encaminhar para descarte/reciclagem.",
        ),
    ]
}
