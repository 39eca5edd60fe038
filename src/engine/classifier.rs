// ==========================================
// QMS Retorno - Motor de classificação por faixa
// ==========================================
// Responsabilidade: mapear percentual de gramatura restante para
// a faixa correspondente + orquestrar o fluxo peso -> resultado
// Entrada: percentual + conjunto ORDENADO de regras
// Saída: primeira faixa que contém o percentual (ou nenhuma)
// ==========================================
// Restrição: função pura sobre dados em memória, sem I/O,
// sem retry. Lacuna entre faixas NÃO é erro: retorna None e o
// chamador deixa o destino em aberto para o usuário decidir.
// ==========================================

use crate::domain::retorno::ClassificationResult;
use crate::domain::rule::ClassificationRule;
use crate::domain::toner::TonerModel;
use crate::engine::recovery::RecoveryCalculator;

// ==========================================
// ClassificationEngine
// ==========================================
pub struct ClassificationEngine {
    calculator: RecoveryCalculator,
}

impl ClassificationEngine {
    pub fn new(calculator: RecoveryCalculator) -> Self {
        Self { calculator }
    }

    pub fn calculator(&self) -> &RecoveryCalculator {
        &self.calculator
    }

    /// Varre as regras na ordem persistida e retorna a PRIMEIRA cuja
    /// faixa inclusiva [min, max] contém o percentual.
    ///
    /// Sobreposição de faixas é resolvida pela ordem (primeira vence);
    /// lacuna resulta em None.
    pub fn classify<'a>(
        &self,
        remaining_percent: f64,
        rules: &'a [ClassificationRule],
    ) -> Option<&'a ClassificationRule> {
        rules.iter().find(|rule| rule.contains(remaining_percent))
    }

    /// Fluxo completo: peso medido + especificação -> resultado derivado
    ///
    /// # Etapas
    /// 1. gramatura restante = max(0, peso - peso_vazio)
    /// 2. percentual = restante / gramatura_total * 100 (0 se total = 0)
    /// 3. faixa = primeira regra que contém o percentual
    /// 4. valor recuperado = só quando o destino da faixa é Estoque
    pub fn evaluate(
        &self,
        current_weight_g: f64,
        toner: &TonerModel,
        rules: &[ClassificationRule],
    ) -> ClassificationResult {
        let remaining_weight_g = self
            .calculator
            .compute_remaining(current_weight_g, toner.empty_weight_g);
        let remaining_percent = self
            .calculator
            .compute_percent(remaining_weight_g, toner.total_capacity_g);

        let matched_rule = self.classify(remaining_percent, rules).cloned();

        let recovered_value = matched_rule.as_ref().and_then(|rule| {
            self.calculator.compute_recovered_value(
                remaining_percent,
                toner.sheet_capacity,
                toner.value_per_sheet,
                &rule.destination,
            )
        });

        ClassificationResult {
            remaining_weight_g,
            remaining_percent,
            matched_rule,
            recovered_value,
        }
    }
}

impl Default for ClassificationEngine {
    fn default() -> Self {
        Self::new(RecoveryCalculator::default())
    }
}
