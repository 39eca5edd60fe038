// ==========================================
// QMS Retorno - Inicialização de conexões SQLite
// ==========================================
// Objetivo:
// - Unificar o PRAGMA de todas as Connection::open (evitar
//   módulos com foreign_keys ligado e outros não)
// - Unificar busy_timeout para reduzir erros de busy esporádicos
// ==========================================

use rusqlite::Connection;
use std::path::PathBuf;
use std::time::Duration;

/// busy_timeout padrão (milissegundos)
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Configura os PRAGMAs unificados de uma conexão SQLite
///
/// Observação:
/// - foreign_keys precisa ser ligado por conexão
/// - busy_timeout precisa ser configurado por conexão
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// Abre uma conexão SQLite já com a configuração unificada
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// Caminho padrão do banco local (diretório de dados do usuário).
///
/// Usado pelo binário de importação quando nenhum caminho é passado;
/// a biblioteca em si sempre recebe o caminho explicitamente.
pub fn default_db_path() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("toner-retorno-qms").join("retorno.db")
}
