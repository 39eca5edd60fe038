// ==========================================
// QMS Retorno - Calculadora de recuperação
// ==========================================
// Responsabilidade: derivar gramatura restante, percentual e
// valor recuperado a partir do peso medido + especificação
// Entrada: pesos em gramas, capacidade em folhas, valor por folha
// Saída: números derivados (nunca persiste, nunca faz I/O)
// ==========================================
// Restrição: todas as funções são totais; entrada ausente ou
// inválida já chega coagida para 0 pela camada de formulário,
// e divisão por zero é tratada aqui (retorna 0)
// ==========================================

use crate::domain::types::Destination;

// ==========================================
// RecoveryCalculator
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct RecoveryCalculator {
    /// Trava o percentual em [0, 100]. Desligado por padrão: acima de
    /// 100 indica gramatura cadastrada menor que a real (dado mestre
    /// ruim) e o número é mantido visível para o usuário investigar.
    pub clamp_percent: bool,
}

impl Default for RecoveryCalculator {
    fn default() -> Self {
        Self {
            clamp_percent: false,
        }
    }
}

impl RecoveryCalculator {
    pub fn new(clamp_percent: bool) -> Self {
        Self { clamp_percent }
    }

    /// Gramatura restante: max(0, peso_medido - peso_vazio)
    ///
    /// Peso medido abaixo do peso vazio (balança descalibrada,
    /// cadastro errado) resulta em 0, nunca em negativo.
    pub fn compute_remaining(&self, current_weight_g: f64, empty_weight_g: f64) -> f64 {
        (current_weight_g - empty_weight_g).max(0.0)
    }

    /// Percentual da gramatura restante
    ///
    /// # Casos de borda
    /// - total_capacity_g == 0 -> 0 (sem divisão por zero)
    /// - restante > capacidade -> acima de 100, a menos que
    ///   clamp_percent esteja ligado
    pub fn compute_percent(&self, remaining_weight_g: f64, total_capacity_g: f64) -> f64 {
        if total_capacity_g == 0.0 {
            return 0.0;
        }
        let percent = remaining_weight_g / total_capacity_g * 100.0;
        if self.clamp_percent {
            percent.clamp(0.0, 100.0)
        } else {
            percent.max(0.0)
        }
    }

    /// Valor recuperado estimado (R$)
    ///
    /// Só existe recuperação monetária quando o destino retorna o toner
    /// ao estoque utilizável; qualquer outro destino -> None.
    ///
    /// Fórmula: folhas_restantes = percentual/100 * capacidade_folhas;
    /// valor = folhas_restantes * valor_por_folha, travado em >= 0.
    pub fn compute_recovered_value(
        &self,
        remaining_percent: f64,
        sheet_capacity: f64,
        value_per_sheet: f64,
        destination: &Destination,
    ) -> Option<f64> {
        if !destination.is_estoque() {
            return None;
        }
        let remaining_sheets = remaining_percent / 100.0 * sheet_capacity;
        Some((remaining_sheets * value_per_sheet).max(0.0))
    }
}
