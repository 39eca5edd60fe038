// ==========================================
// QMS Retorno - Camada de repositório
// ==========================================
// Responsabilidade: acesso a dados, escondendo detalhes do banco
// Restrição: Repository não contém lógica de negócio
// Restrição: toda consulta é parametrizada (sem SQL injection)
// ==========================================

pub mod error;
pub mod import_repo;
pub mod import_repo_impl;
pub mod return_repo;
pub mod rule_repo;
pub mod toner_repo;

// Reexporta os repositórios centrais
pub use error::{RepositoryError, RepositoryResult};
pub use import_repo::ReturnImportRepository;
pub use import_repo_impl::ReturnImportRepositoryImpl;
pub use return_repo::ReturnRepository;
pub use rule_repo::{RuleStore, RULES_CONFIG_KEY};
pub use toner_repo::TonerRepository;
