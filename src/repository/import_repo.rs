// ==========================================
// QMS Retorno - Repository Trait da importação
// ==========================================
// Responsabilidade: interface de acesso a dados usada pelo
// motor de importação em lote (sem lógica de negócio)
// Restrição: Repository não contém regra de negócio, só CRUD
// ==========================================

use crate::domain::retorno::ReturnRecord;
use crate::domain::rule::ClassificationRule;
use crate::domain::toner::TonerModel;
use async_trait::async_trait;
use std::error::Error;

// ==========================================
// ReturnImportRepository Trait
// ==========================================
// Uso: acesso a dados da importação de retornos
// Implementação: ReturnImportRepositoryImpl (rusqlite)
#[async_trait]
pub trait ReturnImportRepository: Send + Sync {
    // ===== Catálogo de toners =====

    /// Busca modelo de toner por nome (sem caixa, sem espaços nas pontas)
    ///
    /// # Retorno
    /// - Ok(Some): modelo encontrado
    /// - Ok(None): nome não cadastrado
    async fn find_toner_by_name(
        &self,
        name: &str,
    ) -> Result<Option<TonerModel>, Box<dyn Error>>;

    /// Cadastra um modelo de toner (usado no auto-cadastro da importação)
    async fn create_toner(&self, toner: TonerModel) -> Result<TonerModel, Box<dyn Error>>;

    // ===== Registros de retorno =====

    /// Persiste um registro de retorno classificado
    async fn insert_return(&self, record: ReturnRecord) -> Result<(), Box<dyn Error>>;

    // ===== Conjunto de regras =====

    /// Carrega o conjunto de regras vigente (ordem persistida)
    async fn load_rules(&self) -> Result<Vec<ClassificationRule>, Box<dyn Error>>;
}
