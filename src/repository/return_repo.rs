// ==========================================
// QMS Retorno - Repositório de registros de retorno
// ==========================================
// Responsabilidade: tabela return_record (itens classificados)
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::retorno::ReturnRecord;
use crate::domain::types::Destination;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};

pub struct ReturnRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ReturnRepository {
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
            CREATE TABLE IF NOT EXISTS return_record (
              return_id TEXT PRIMARY KEY,
              toner_id TEXT NOT NULL,
              client_id INTEGER NOT NULL DEFAULT 0,
              branch TEXT NOT NULL,
              destination TEXT NOT NULL,
              weight_g REAL NOT NULL,
              return_date TEXT NOT NULL,
              recovered_value REAL,
              created_at TEXT NOT NULL,
              FOREIGN KEY (toner_id) REFERENCES toner_model(toner_id)
            );

            CREATE INDEX IF NOT EXISTS idx_return_record_toner
              ON return_record(toner_id);
            CREATE INDEX IF NOT EXISTS idx_return_record_date
              ON return_record(return_date DESC);
            "#,
        )?;
        Ok(())
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<ReturnRecord> {
        Ok(ReturnRecord {
            return_id: row.get(0)?,
            toner_id: row.get(1)?,
            client_id: row.get(2)?,
            branch: row.get(3)?,
            destination: Destination::from(row.get::<_, String>(4)?),
            weight_g: row.get(5)?,
            return_date: row.get::<_, NaiveDate>(6)?,
            recovered_value: row.get(7)?,
            created_at: row.get::<_, DateTime<Utc>>(8)?,
        })
    }

    /// Insere um registro de retorno classificado
    pub fn insert(&self, record: &ReturnRecord) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO return_record (
                return_id, toner_id, client_id, branch, destination,
                weight_g, return_date, recovered_value, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                record.return_id,
                record.toner_id,
                record.client_id,
                record.branch,
                record.destination.label(),
                record.weight_g,
                record.return_date,
                record.recovered_value,
                record.created_at,
            ],
        )?;
        Ok(())
    }

    /// Total de retornos registrados
    pub fn count(&self) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM return_record", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Retornos mais recentes (por data do retorno)
    pub fn list_recent(&self, limit: usize) -> RepositoryResult<Vec<ReturnRecord>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT return_id, toner_id, client_id, branch, destination,
                   weight_g, return_date, recovered_value, created_at
            FROM return_record
            ORDER BY return_date DESC, created_at DESC
            LIMIT ?1
            "#,
        )?;
        let rows = stmt.query_map(params![limit as i64], Self::map_row)?;
        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }
}
