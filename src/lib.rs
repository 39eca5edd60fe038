// ==========================================
// QMS Retorno - Biblioteca central
// ==========================================
// Stack: Rust + SQLite
// Posição no sistema: núcleo de decisão (classificação de
// retornos de toner + importação em lote); UI e autenticação
// ficam fora deste crate
// ==========================================

// ==========================================
// Declaração de módulos
// ==========================================

// Camada de domínio - entidades e tipos
pub mod domain;

// Camada de repositório - acesso a dados
pub mod repository;

// Camada de motores - regras de negócio
pub mod engine;

// Camada de configuração
pub mod config;

// Infraestrutura de banco (inicialização de conexão/PRAGMA)
pub mod db;

// Sistema de logs
pub mod logging;

// ==========================================
// Reexporta os tipos centrais
// ==========================================

// Domínio
pub use domain::{
    default_rules, ClassificationResult, ClassificationRule, Destination, ImportReport,
    RawReturnRow, ReturnRecord, TonerModel,
};

// Motores
pub use engine::{
    ClassificationEngine, ImportProgressListener, NoOpProgressListener, RecoveryCalculator,
    ReturnImporter,
};

// Repositórios
pub use repository::{ReturnImportRepositoryImpl, ReturnRepository, RuleStore, TonerRepository};

// Configuração
pub use config::{ConfigManager, ImportConfigReader};

// ==========================================
// Constantes do sistema
// ==========================================

// Versão
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Nome do sistema
pub const APP_NAME: &str = "QMS Retorno";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
