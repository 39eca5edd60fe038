// ==========================================
// QMS Retorno - Repositório do conjunto de regras
// ==========================================
// Responsabilidade: persistir o conjunto de faixas de classificação
// Armazenamento: tabela config_kv (key-value + escopo), chave fixa
// `classification_rules`, valor = JSON do conjunto inteiro
// ==========================================
// Contrato: leitura/escrita sempre do conjunto COMPLETO (sem
// atualização parcial por regra); "restaurar padrões" grava o
// conjunto fixo de 4 faixas. Nenhuma validação de limites ou
// sobreposição é aplicada ao salvar.
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::rule::{default_rules, ClassificationRule};
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

/// Chave fixa do blob do conjunto de regras em config_kv
pub const RULES_CONFIG_KEY: &str = "classification_rules";

// ==========================================
// RuleStore - conjunto de regras persistido
// ==========================================
pub struct RuleStore {
    conn: Arc<Mutex<Connection>>,
}

impl RuleStore {
    /// Cria um RuleStore abrindo conexão própria
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.ensure_table()?;
        Ok(store)
    }

    /// Cria um RuleStore sobre uma conexão compartilhada
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> RepositoryResult<Self> {
        let store = Self { conn };
        store.ensure_table()?;
        Ok(store)
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// Garante a existência da tabela config_kv
    fn ensure_table(&self) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
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

    /// Carrega o conjunto de regras na ordem persistida
    ///
    /// # Retorno
    /// - Conjunto persistido; ou
    /// - Conjunto padrão quando nada foi persistido ainda, ou quando o
    ///   blob persistido não deserializa (logado em warn, sem falhar)
    pub fn load(&self) -> RepositoryResult<Vec<ClassificationRule>> {
        let raw = {
            let conn = self.get_conn()?;
            let result = conn.query_row(
                "SELECT value FROM config_kv WHERE scope_id = 'global' AND key = ?1",
                params![RULES_CONFIG_KEY],
                |row| row.get::<_, String>(0),
            );
            match result {
                Ok(value) => Some(value),
                Err(rusqlite::Error::QueryReturnedNoRows) => None,
                Err(e) => return Err(e.into()),
            }
        };

        match raw {
            None => Ok(default_rules()),
            Some(json) => match serde_json::from_str::<Vec<ClassificationRule>>(&json) {
                Ok(rules) => Ok(rules),
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        "blob de regras persistido inválido, usando conjunto padrão"
                    );
                    Ok(default_rules())
                }
            },
        }
    }

    /// Substitui o conjunto persistido inteiro (UPSERT único)
    ///
    /// A ordem do vetor é a ordem de classificação (primeira faixa que
    /// contém o percentual vence). Faixas sobrepostas ou com lacunas são
    /// aceitas sem validação.
    pub fn save(&self, rules: &[ClassificationRule]) -> RepositoryResult<()> {
        let json = serde_json::to_string(rules)?;
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO config_kv (scope_id, key, value, updated_at)
            VALUES ('global', ?1, ?2, datetime('now'))
            ON CONFLICT(scope_id, key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
            params![RULES_CONFIG_KEY, json],
        )?;
        Ok(())
    }

    /// Restaura e persiste o conjunto padrão de 4 faixas
    pub fn restore_defaults(&self) -> RepositoryResult<Vec<ClassificationRule>> {
        let rules = default_rules();
        self.save(&rules)?;
        tracing::info!(count = rules.len(), "conjunto de regras restaurado ao padrão");
        Ok(rules)
    }
}
