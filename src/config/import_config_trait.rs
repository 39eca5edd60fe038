// ==========================================
// QMS Retorno - Trait de configuração da importação
// ==========================================
// Responsabilidade: interface de leitura de configuração usada
// pelo motor de classificação/importação (permite mock em teste)
// ==========================================

use crate::domain::types::Destination;
use async_trait::async_trait;
use std::error::Error;

// ==========================================
// ImportConfigReader Trait
// ==========================================
#[async_trait]
pub trait ImportConfigReader: Send + Sync {
    // ===== Cálculo de percentual =====

    /// Trava o percentual restante em [0, 100]?
    ///
    /// Padrão: false. Percentual acima de 100 é mantido visível como
    /// indício de dados mestres ruins (gramatura menor que o real)
    async fn get_clamp_percent(&self) -> Result<bool, Box<dyn Error>>;

    // ===== Padrões de linha da importação =====

    /// Destino aplicado quando a planilha não informa (padrão: Estoque)
    async fn get_default_destination(&self) -> Result<Destination, Box<dyn Error>>;

    /// Filial aplicada quando a planilha não informa (padrão: "Matriz")
    async fn get_default_branch(&self) -> Result<String, Box<dyn Error>>;

    /// Peso aplicado quando a planilha não informa (padrão: 100 g)
    async fn get_default_weight_g(&self) -> Result<f64, Box<dyn Error>>;
}
