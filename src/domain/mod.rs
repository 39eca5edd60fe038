// ==========================================
// QMS Retorno - Camada de domínio
// ==========================================
// Responsabilidade: entidades, tipos e resultados derivados.
// Restrição: sem acesso a dados, sem lógica de motor.
// ==========================================

pub mod import;
pub mod retorno;
pub mod rule;
pub mod toner;
pub mod types;

// Reexporta os tipos centrais
pub use import::{ImportReport, RawReturnRow};
pub use retorno::{ClassificationResult, ReturnRecord};
pub use rule::{default_rules, ClassificationRule};
pub use toner::TonerModel;
pub use types::Destination;
