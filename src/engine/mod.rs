// ==========================================
// QMS Retorno - Camada de motores
// ==========================================
// Responsabilidade: regras de negócio, sem montar SQL
// Restrição: motores não acessam banco diretamente (Repository)
// ==========================================

pub mod classifier;
pub mod events;
pub mod exporter;
pub mod importer;
pub mod normalizer;
pub mod recovery;

// Reexporta os motores centrais
pub use classifier::ClassificationEngine;
pub use events::{ImportProgressListener, LogProgressListener, NoOpProgressListener};
pub use exporter::{export_returns_csv, ExportRow};
pub use importer::{ReturnImporter, PROGRESS_INTERVAL};
pub use normalizer::{
    normalize_client_id, normalize_date, normalize_date_with_today, normalize_monetary,
    NormalizedDate,
};
pub use recovery::RecoveryCalculator;
