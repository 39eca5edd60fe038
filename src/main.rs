// ==========================================
// QMS Retorno - Importador de linha de comando
// ==========================================
// Uso: retorno-import <arquivo.csv|arquivo.xlsx> [caminho-do-banco]
// Lê a planilha, classifica cada retorno pelo conjunto de regras
// vigente e persiste no banco local
// ==========================================

use anyhow::{bail, Context, Result};
use std::sync::Arc;
use toner_retorno_qms::config::ConfigManager;
use toner_retorno_qms::db::default_db_path;
use toner_retorno_qms::engine::{LogProgressListener, ReturnImporter};
use toner_retorno_qms::logging;
use toner_retorno_qms::repository::ReturnImportRepositoryImpl;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - importação de retornos", toner_retorno_qms::APP_NAME);
    tracing::info!("versão: {}", toner_retorno_qms::VERSION);
    tracing::info!("==================================================");

    let mut args = std::env::args().skip(1);
    let file_path = match args.next() {
        Some(path) => path,
        None => bail!("uso: retorno-import <arquivo.csv|arquivo.xlsx> [caminho-do-banco]"),
    };

    let db_path = match args.next() {
        Some(path) => path,
        None => {
            let path = default_db_path();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("criando diretório {}", parent.display()))?;
            }
            path.to_string_lossy().into_owned()
        }
    };
    tracing::info!(db_path = %db_path, "usando banco de dados");

    let repo = ReturnImportRepositoryImpl::new(&db_path)
        .map_err(|e| anyhow::anyhow!("falha ao abrir repositório: {}", e))?;
    let config = ConfigManager::new(&db_path)
        .map_err(|e| anyhow::anyhow!("falha ao abrir configuração: {}", e))?;

    let importer = ReturnImporter::new(Arc::new(repo), Arc::new(config));
    let listener = LogProgressListener;

    let report = if file_path.to_lowercase().ends_with(".csv") {
        importer.import_from_csv(&file_path, &listener).await
    } else {
        importer.import_from_xlsx(&file_path, &listener).await
    }
    .map_err(|e| anyhow::anyhow!("importação falhou: {}", e))?;

    println!("Importados: {}", report.imported_count);
    println!("Erros:      {}", report.error_count);
    if report.fallback_date_count > 0 {
        println!(
            "Atenção: {} linha(s) com data ilegível receberam a data de hoje",
            report.fallback_date_count
        );
    }
    // Resumo com as primeiras mensagens; a lista completa fica no relatório
    for message in report.first_errors(10) {
        println!("  - {}", message);
    }
    if report.error_count > report.first_errors(10).len() {
        println!("  ... e mais {} erro(s)", report.error_count - 10);
    }

    Ok(())
}
