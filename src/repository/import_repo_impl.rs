// ==========================================
// QMS Retorno - Implementação rusqlite do repositório de importação
// ==========================================
// Composição: delega para TonerRepository, ReturnRepository e
// RuleStore sobre a MESMA conexão (um arquivo de banco por app)
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::retorno::ReturnRecord;
use crate::domain::rule::ClassificationRule;
use crate::domain::toner::TonerModel;
use crate::repository::import_repo::ReturnImportRepository;
use crate::repository::return_repo::ReturnRepository;
use crate::repository::rule_repo::RuleStore;
use crate::repository::toner_repo::TonerRepository;
use async_trait::async_trait;
use rusqlite::Connection;
use std::error::Error;
use std::sync::{Arc, Mutex};

// ==========================================
// ReturnImportRepositoryImpl
// ==========================================
pub struct ReturnImportRepositoryImpl {
    toners: TonerRepository,
    returns: ReturnRepository,
    rules: RuleStore,
}

impl ReturnImportRepositoryImpl {
    /// Cria a implementação abrindo uma conexão própria
    pub fn new(db_path: &str) -> Result<Self, Box<dyn Error>> {
        let conn = open_sqlite_connection(db_path)?;
        Self::from_connection(Arc::new(Mutex::new(conn)))
    }

    /// Cria a implementação sobre uma conexão compartilhada
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            toners: TonerRepository::from_connection(Arc::clone(&conn))?,
            returns: ReturnRepository::from_connection(Arc::clone(&conn))?,
            rules: RuleStore::from_connection(conn)?,
        })
    }
}

#[async_trait]
impl ReturnImportRepository for ReturnImportRepositoryImpl {
    async fn find_toner_by_name(
        &self,
        name: &str,
    ) -> Result<Option<TonerModel>, Box<dyn Error>> {
        Ok(self.toners.find_by_name(name)?)
    }

    async fn create_toner(&self, toner: TonerModel) -> Result<TonerModel, Box<dyn Error>> {
        self.toners.insert(&toner)?;
        Ok(toner)
    }

    async fn insert_return(&self, record: ReturnRecord) -> Result<(), Box<dyn Error>> {
        self.returns.insert(&record)?;
        Ok(())
    }

    async fn load_rules(&self) -> Result<Vec<ClassificationRule>, Box<dyn Error>> {
        Ok(self.rules.load()?)
    }
}
