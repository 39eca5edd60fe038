// ==========================================
// QMS Retorno - Tipos de importação em lote
// ==========================================
// RawReturnRow carrega os valores crus de uma linha da planilha
// (CSV/Excel) antes de qualquer normalização. O número de linha já
// é o exibido ao usuário: 1-based e com o cabeçalho descontado
// (linha de dados i -> i + 2).
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// RawReturnRow - linha crua da planilha
// ==========================================
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawReturnRow {
    /// Nome do modelo de toner (resolvido por nome, sem caixa/espaços).
    pub toner_name: Option<String>,
    /// Identificador do cliente, cru; vazio/inválido vira 0.
    pub client_id_raw: Option<String>,
    /// Peso medido (g); ausente vira o padrão configurado.
    pub weight_g: Option<f64>,
    /// Data do retorno, crua: ISO, DD/MM/YYYY, serial de planilha etc.
    pub return_date_raw: Option<String>,
    /// Destino informado; ausente vira o padrão configurado.
    pub destination_raw: Option<String>,
    /// Filial; ausente vira o padrão configurado.
    pub branch_raw: Option<String>,
    /// Valor recuperado informado na planilha (monetário cru).
    pub recovered_value_raw: Option<String>,
    /// Número de linha exibido (1-based, cabeçalho já descontado).
    pub row_number: usize,
}

// ==========================================
// ImportReport - resultado consolidado do lote
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportReport {
    /// Linhas persistidas com sucesso.
    pub imported_count: usize,
    /// Linhas que falharam (a falha fica na linha, o lote continua).
    pub error_count: usize,
    /// Mensagens legíveis, uma por linha com falha, com o número exibido.
    pub errors: Vec<String>,
    /// Linhas cuja data não parseou e caiu no fallback "hoje".
    pub fallback_date_count: usize,
}

impl ImportReport {
    /// Total de linhas processadas (sucesso + erro).
    pub fn processed(&self) -> usize {
        self.imported_count + self.error_count
    }

    /// Primeiras `n` mensagens de erro, para exibição resumida.
    pub fn first_errors(&self, n: usize) -> &[String] {
        &self.errors[..self.errors.len().min(n)]
    }
}
