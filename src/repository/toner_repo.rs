// ==========================================
// QMS Retorno - Repositório de modelos de toner
// ==========================================
// Responsabilidade: tabela toner_model (dados mestres do produto)
// Observação: a resolução por nome é case-insensitive e ignora
// espaços nas pontas (contrato da importação em lote)
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::toner::TonerModel;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};

pub struct TonerRepository {
    conn: Arc<Mutex<Connection>>,
}

impl TonerRepository {
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        let repo = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        repo.ensure_table()?;
        Ok(repo)
    }

    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> RepositoryResult<Self> {
        let repo = Self { conn };
        repo.ensure_table()?;
        Ok(repo)
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// Garante a existência da tabela (cria se necessário)
    fn ensure_table(&self) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS toner_model (
              toner_id TEXT PRIMARY KEY,
              name TEXT NOT NULL,
              empty_weight_g REAL NOT NULL DEFAULT 0,
              total_capacity_g REAL NOT NULL DEFAULT 0,
              sheet_capacity REAL NOT NULL DEFAULT 0,
              value_per_sheet REAL NOT NULL DEFAULT 0,
              created_at TEXT NOT NULL,
              updated_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_toner_model_name
              ON toner_model(name);
            "#,
        )?;
        Ok(())
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<TonerModel> {
        Ok(TonerModel {
            toner_id: row.get(0)?,
            name: row.get(1)?,
            empty_weight_g: row.get(2)?,
            total_capacity_g: row.get(3)?,
            sheet_capacity: row.get(4)?,
            value_per_sheet: row.get(5)?,
            created_at: row.get::<_, DateTime<Utc>>(6)?,
            updated_at: row.get::<_, DateTime<Utc>>(7)?,
        })
    }

    const SELECT_COLUMNS: &'static str = "toner_id, name, empty_weight_g, total_capacity_g, \
         sheet_capacity, value_per_sheet, created_at, updated_at";

    /// Insere um modelo de toner
    pub fn insert(&self, toner: &TonerModel) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO toner_model (
                toner_id, name, empty_weight_g, total_capacity_g,
                sheet_capacity, value_per_sheet, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                toner.toner_id,
                toner.name,
                toner.empty_weight_g,
                toner.total_capacity_g,
                toner.sheet_capacity,
                toner.value_per_sheet,
                toner.created_at,
                toner.updated_at,
            ],
        )?;
        Ok(())
    }

    /// Busca por id
    pub fn get(&self, toner_id: &str) -> RepositoryResult<Option<TonerModel>> {
        let conn = self.get_conn()?;
        let sql = format!(
            "SELECT {} FROM toner_model WHERE toner_id = ?1",
            Self::SELECT_COLUMNS
        );
        let result = conn.query_row(&sql, params![toner_id], Self::map_row);
        match result {
            Ok(toner) => Ok(Some(toner)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Busca por nome, sem distinção de caixa e ignorando espaços nas pontas
    pub fn find_by_name(&self, name: &str) -> RepositoryResult<Option<TonerModel>> {
        let conn = self.get_conn()?;
        let sql = format!(
            "SELECT {} FROM toner_model \
             WHERE LOWER(TRIM(name)) = LOWER(TRIM(?1)) \
             ORDER BY created_at ASC LIMIT 1",
            Self::SELECT_COLUMNS
        );
        let result = conn.query_row(&sql, params![name], Self::map_row);
        match result {
            Ok(toner) => Ok(Some(toner)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Lista todos os modelos, por nome
    pub fn list(&self) -> RepositoryResult<Vec<TonerModel>> {
        let conn = self.get_conn()?;
        let sql = format!(
            "SELECT {} FROM toner_model ORDER BY name ASC",
            Self::SELECT_COLUMNS
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([], Self::map_row)?;
        let mut toners = Vec::new();
        for row in rows {
            toners.push(row?);
        }
        Ok(toners)
    }

    /// Total de modelos cadastrados
    pub fn count(&self) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM toner_model", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
