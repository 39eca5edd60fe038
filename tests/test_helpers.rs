// ==========================================
// Auxiliares de teste
// ==========================================
// Responsabilidade: banco temporário para testes de integração
// (as tabelas são criadas pelos próprios repositórios via
// ensure_table; aqui só nasce o arquivo)
// ==========================================

use std::error::Error;
use tempfile::NamedTempFile;

/// Cria um banco SQLite temporário para testes
///
/// # Retorno
/// - NamedTempFile: arquivo temporário (precisa permanecer vivo)
/// - String: caminho do banco
pub fn create_test_db() -> Result<(NamedTempFile, String), Box<dyn Error>> {
    let temp_file = NamedTempFile::new()?;
    let db_path = temp_file
        .path()
        .to_str()
        .ok_or("caminho temporário inválido")?
        .to_string();
    Ok((temp_file, db_path))
}
