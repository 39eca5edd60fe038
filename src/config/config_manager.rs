// ==========================================
// QMS Retorno - Gerenciador de configuração
// ==========================================
// Responsabilidade: carregar e consultar configuração
// Armazenamento: tabela config_kv (key-value + escopo)
// ==========================================

use crate::config::import_config_trait::ImportConfigReader;
use crate::db::open_sqlite_connection;
use crate::domain::types::Destination;
use async_trait::async_trait;
use rusqlite::{params, Connection};
use std::error::Error;
use std::sync::{Arc, Mutex};

// ==========================================
// ConfigManager
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// Cria um ConfigManager abrindo conexão própria
    pub fn new(db_path: &str) -> Result<Self, Box<dyn Error>> {
        let conn = open_sqlite_connection(db_path)?;

        let manager = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        manager.ensure_table()?;
        Ok(manager)
    }

    /// Cria um ConfigManager sobre uma conexão compartilhada
    ///
    /// Para manter comportamento uniforme, reaplica os PRAGMAs
    /// unificados na conexão recebida (idempotente).
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Result<Self, Box<dyn Error>> {
        {
            let conn_guard = conn
                .lock()
                .map_err(|e| format!("falha ao obter lock: {}", e))?;
            crate::db::configure_sqlite_connection(&conn_guard)?;
        }

        let manager = Self { conn };
        manager.ensure_table()?;
        Ok(manager)
    }

    /// Garante a existência da tabela config_kv (compartilhada com o RuleStore)
    fn ensure_table(&self) -> Result<(), Box<dyn Error>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| format!("falha ao obter lock: {}", e))?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS config_kv (
              scope_id TEXT NOT NULL,
              key TEXT NOT NULL,
              value TEXT NOT NULL,
              updated_at TEXT NOT NULL DEFAULT (datetime('now')),
              PRIMARY KEY (scope_id, key)
            );
            "#,
        )?;
        Ok(())
    }

    /// Lê um valor da tabela config_kv (scope_id='global')
    ///
    /// # Retorno
    /// - Some(String): valor configurado
    /// - None: chave ausente
    fn get_config_value(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| format!("falha ao obter lock: {}", e))?;

        let result = conn.query_row(
            "SELECT value FROM config_kv WHERE scope_id = 'global' AND key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(Box::new(e)),
        }
    }

    /// Lê um valor com default quando a chave está ausente
    fn get_config_or_default(&self, key: &str, default: &str) -> Result<String, Box<dyn Error>> {
        Ok(self
            .get_config_value(key)?
            .unwrap_or_else(|| default.to_string()))
    }

    /// Grava um valor no escopo global (UPSERT)
    pub fn set_config_value(&self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| format!("falha ao obter lock: {}", e))?;

        conn.execute(
            "INSERT INTO config_kv (scope_id, key, value) VALUES ('global', ?1, ?2)
             ON CONFLICT(scope_id, key) DO UPDATE SET value = ?2",
            params![key, value],
        )?;
        Ok(())
    }
}

// ==========================================
// Implementação do ImportConfigReader
// ==========================================
#[async_trait]
impl ImportConfigReader for ConfigManager {
    async fn get_clamp_percent(&self) -> Result<bool, Box<dyn Error>> {
        let value = self.get_config_or_default(config_keys::CLAMP_PERCENT, "false")?;
        Ok(value.trim().eq_ignore_ascii_case("true"))
    }

    async fn get_default_destination(&self) -> Result<Destination, Box<dyn Error>> {
        let value = self.get_config_or_default(config_keys::DEFAULT_DESTINATION, "Estoque")?;
        Ok(Destination::from(value))
    }

    async fn get_default_branch(&self) -> Result<String, Box<dyn Error>> {
        self.get_config_or_default(config_keys::DEFAULT_BRANCH, "Matriz")
    }

    async fn get_default_weight_g(&self) -> Result<f64, Box<dyn Error>> {
        let value = self.get_config_or_default(config_keys::DEFAULT_WEIGHT_G, "100")?;
        Ok(value.trim().parse::<f64>().unwrap_or(100.0))
    }
}

// ==========================================
// Chaves de configuração
// ==========================================
pub mod config_keys {
    // Cálculo de percentual
    pub const CLAMP_PERCENT: &str = "clamp_percent";

    // Padrões de linha da importação
    pub const DEFAULT_DESTINATION: &str = "default_destination";
    pub const DEFAULT_BRANCH: &str = "default_branch";
    pub const DEFAULT_WEIGHT_G: &str = "default_weight_g";
}
