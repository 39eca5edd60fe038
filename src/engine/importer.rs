// ==========================================
// QMS Retorno - Motor de importação de retornos
// ==========================================
// Responsabilidade: CSV/Excel -> linhas cruas -> normalização ->
// resolução/auto-cadastro de toner -> classificação -> persistência
// Restrição: sem lógica de UI; todo acesso a banco via Repository
// ==========================================
// Modelo de execução: sequencial, linha a linha, na ordem da
// planilha. Sem fan-out paralelo: o auto-cadastro de toner por nome
// criaria duplicatas sob corrida. Falha em uma linha conta no
// relatório e o lote CONTINUA; só falha de colaborador no nível do
// lote (ex.: carregar regras) aborta a operação inteira.
// ==========================================

use crate::config::ImportConfigReader;
use crate::domain::import::{ImportReport, RawReturnRow};
use crate::domain::retorno::ReturnRecord;
use crate::domain::rule::ClassificationRule;
use crate::domain::toner::TonerModel;
use crate::domain::types::Destination;
use crate::engine::classifier::ClassificationEngine;
use crate::engine::events::ImportProgressListener;
use crate::engine::normalizer::{normalize_client_id, normalize_date_with_today, normalize_monetary};
use crate::engine::recovery::RecoveryCalculator;
use crate::repository::import_repo::ReturnImportRepository;
use calamine::{open_workbook_auto, Data, Reader};
use chrono::{Local, NaiveDate};
use std::error::Error;
use std::sync::Arc;
use tracing::instrument;

/// Cadência de notificação de progresso (linhas processadas)
pub const PROGRESS_INTERVAL: usize = 50;

// ==========================================
// Padrões de lote (carregados da configuração uma vez por lote)
// ==========================================
struct BatchDefaults {
    destination: Destination,
    branch: String,
    weight_g: f64,
}

// ==========================================
// ReturnImporter - motor de importação
// ==========================================
/// Motor de importação em lote de retornos
///
/// # Responsabilidades
/// 1. Ler arquivo CSV/Excel em linhas cruas
/// 2. Normalizar campos (data, valor monetário, id de cliente)
/// 3. Resolver modelo de toner por nome (auto-cadastro quando ausente)
/// 4. Classificar pelo conjunto de regras vigente e derivar valor
/// 5. Persistir cada registro via Repository
/// 6. Consolidar o relatório do lote (importados / erros / fallbacks)
pub struct ReturnImporter<R: ?Sized, C>
where
    R: ReturnImportRepository,
    C: ImportConfigReader,
{
    repo: Arc<R>,
    config: Arc<C>,
}

impl<R: ?Sized, C> ReturnImporter<R, C>
where
    R: ReturnImportRepository,
    C: ImportConfigReader,
{
    pub fn new(repo: Arc<R>, config: Arc<C>) -> Self {
        Self { repo, config }
    }

    /// Importa retornos a partir de um arquivo CSV (entrada principal)
    ///
    /// # Colunas esperadas (com cabeçalho)
    /// 0. modelo do toner
    /// 1. id do cliente
    /// 2. peso medido (g)
    /// 3. data do retorno
    /// 4. destino
    /// 5. filial
    /// 6. valor recuperado (opcional)
    pub async fn import_from_csv(
        &self,
        file_path: &str,
        listener: &dyn ImportProgressListener,
    ) -> Result<ImportReport, Box<dyn Error>> {
        let rows = Self::parse_csv(file_path)?;
        self.import_rows(rows, listener).await
    }

    /// Importa retornos a partir de um arquivo Excel (.xlsx/.xls)
    ///
    /// Mesmo layout de colunas do CSV; células de data em formato
    /// numérico chegam como serial de planilha e são convertidas pelo
    /// normalizador.
    pub async fn import_from_xlsx(
        &self,
        file_path: &str,
        listener: &dyn ImportProgressListener,
    ) -> Result<ImportReport, Box<dyn Error>> {
        let rows = Self::parse_xlsx(file_path)?;
        self.import_rows(rows, listener).await
    }

    /// Processa um lote de linhas cruas já extraídas da planilha
    ///
    /// # Fluxo
    /// 1. Carrega configuração e conjunto de regras (uma vez por lote)
    /// 2. Processa cada linha em sequência, na ordem de entrada
    /// 3. Falha de linha -> mensagem com o número exibido, lote segue
    /// 4. Progresso a cada 50 linhas + uma vez na conclusão
    #[instrument(skip(self, rows, listener), fields(total = rows.len()))]
    pub async fn import_rows(
        &self,
        rows: Vec<RawReturnRow>,
        listener: &dyn ImportProgressListener,
    ) -> Result<ImportReport, Box<dyn Error>> {
        let total = rows.len();
        let today = Local::now().date_naive();

        // Falha aqui é fatal para o lote: sem regras/config não há como
        // classificar nenhuma linha.
        let clamp_percent = self.config.get_clamp_percent().await?;
        let defaults = BatchDefaults {
            destination: self.config.get_default_destination().await?,
            branch: self.config.get_default_branch().await?,
            weight_g: self.config.get_default_weight_g().await?,
        };
        let rules = self.repo.load_rules().await?;
        let engine = ClassificationEngine::new(RecoveryCalculator::new(clamp_percent));

        let mut report = ImportReport::default();
        // usize::MAX garante a notificação de conclusão em lote vazio
        let mut last_notified = usize::MAX;

        for row in rows {
            let row_number = row.row_number;
            match self
                .process_row(row, &engine, &rules, &defaults, today)
                .await
            {
                Ok(date_fell_back) => {
                    report.imported_count += 1;
                    if date_fell_back {
                        report.fallback_date_count += 1;
                    }
                }
                Err(e) => {
                    report.error_count += 1;
                    report.errors.push(format!("Linha {}: {}", row_number, e));
                }
            }

            let processed = report.processed();
            if processed % PROGRESS_INTERVAL == 0 {
                listener.on_progress(processed, total);
                last_notified = processed;
            }
        }

        // Conclusão: só notifica se o laço ainda não reportou o total
        // (lote múltiplo exato de 50 já saiu com processed == total)
        if last_notified != report.processed() {
            listener.on_progress(report.processed(), total);
        }
        tracing::info!(
            imported = report.imported_count,
            errors = report.error_count,
            fallback_dates = report.fallback_date_count,
            "lote de importação concluído"
        );

        Ok(report)
    }

    /// Processa uma linha: normaliza, resolve o toner, classifica e persiste
    ///
    /// # Retorno
    /// - Ok(true): linha importada e a data caiu no fallback "hoje"
    /// - Ok(false): linha importada com data parseada
    /// - Err: falha da linha (entra no relatório, lote continua)
    async fn process_row(
        &self,
        row: RawReturnRow,
        engine: &ClassificationEngine,
        rules: &[ClassificationRule],
        defaults: &BatchDefaults,
        today: NaiveDate,
    ) -> Result<bool, Box<dyn Error>> {
        // === Nome do toner: único campo realmente obrigatório ===
        let toner_name = row
            .toner_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or("modelo de toner não informado")?;

        // === Resolução por nome, com auto-cadastro ===
        let toner = match self.repo.find_toner_by_name(toner_name).await? {
            Some(toner) => toner,
            None => {
                tracing::warn!(
                    toner_name,
                    row = row.row_number,
                    "modelo de toner não cadastrado, criando automaticamente"
                );
                self.repo
                    .create_toner(TonerModel::auto_created(toner_name))
                    .await?
            }
        };

        // === Normalização dos demais campos ===
        let client_id = normalize_client_id(row.client_id_raw.as_deref());
        let weight_g = row.weight_g.unwrap_or(defaults.weight_g);
        let normalized_date = normalize_date_with_today(row.return_date_raw.as_deref(), today);
        if normalized_date.fallback {
            tracing::warn!(
                row = row.row_number,
                raw = row.return_date_raw.as_deref().unwrap_or(""),
                "data ilegível, usando a data de hoje"
            );
        }
        let destination = row
            .destination_raw
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Destination::from)
            .unwrap_or_else(|| defaults.destination.clone());
        let branch = row
            .branch_raw
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| defaults.branch.clone());

        // === Classificação + valor recuperado ===
        // O valor informado na planilha tem precedência; na ausência,
        // deriva-se do percentual restante para o destino escolhido.
        let classification = engine.evaluate(weight_g, &toner, rules);
        let informed_value = row
            .recovered_value_raw
            .as_deref()
            .and_then(normalize_monetary);
        let recovered_value = informed_value.or_else(|| {
            engine.calculator().compute_recovered_value(
                classification.remaining_percent,
                toner.sheet_capacity,
                toner.value_per_sheet,
                &destination,
            )
        });

        let record = ReturnRecord::new(
            &toner.toner_id,
            client_id,
            branch,
            destination,
            weight_g,
            normalized_date.date,
            recovered_value,
        );
        self.repo.insert_return(record).await?;

        Ok(normalized_date.fallback)
    }

    // ==========================================
    // Leitura de arquivos
    // ==========================================

    /// Lê um CSV (com cabeçalho) em linhas cruas
    fn parse_csv(file_path: &str) -> Result<Vec<RawReturnRow>, Box<dyn Error>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(file_path)?;

        let mut rows = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            let record = result?;
            // +2: numeração 1-based e cabeçalho descontado
            let row_number = row_idx + 2;

            rows.push(RawReturnRow {
                toner_name: Self::get_string_field(&record, 0),
                client_id_raw: Self::get_string_field(&record, 1),
                weight_g: Self::get_f64_field(&record, 2),
                return_date_raw: Self::get_string_field(&record, 3),
                destination_raw: Self::get_string_field(&record, 4),
                branch_raw: Self::get_string_field(&record, 5),
                recovered_value_raw: Self::get_string_field(&record, 6),
                row_number,
            });
        }

        Ok(rows)
    }

    /// Lê a primeira planilha de um arquivo Excel em linhas cruas
    fn parse_xlsx(file_path: &str) -> Result<Vec<RawReturnRow>, Box<dyn Error>> {
        let mut workbook = open_workbook_auto(file_path)?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or("arquivo Excel sem planilhas")??;

        let mut rows = Vec::new();
        for (row_idx, cells) in range.rows().enumerate() {
            if row_idx == 0 {
                continue; // cabeçalho
            }
            // Pula linhas completamente em branco (sobras do range do Excel)
            if cells
                .iter()
                .all(|cell| matches!(cell, Data::Empty) || cell.to_string().trim().is_empty())
            {
                continue;
            }
            // row_idx já conta o cabeçalho; +1 para numeração 1-based
            let row_number = row_idx + 1;

            rows.push(RawReturnRow {
                toner_name: Self::get_cell_string(cells, 0),
                client_id_raw: Self::get_cell_string(cells, 1),
                weight_g: Self::get_cell_f64(cells, 2),
                return_date_raw: Self::get_cell_string(cells, 3),
                destination_raw: Self::get_cell_string(cells, 4),
                branch_raw: Self::get_cell_string(cells, 5),
                recovered_value_raw: Self::get_cell_string(cells, 6),
                row_number,
            });
        }

        Ok(rows)
    }

    // ==========================================
    // Auxiliares: extração de campos
    // ==========================================

    fn get_string_field(record: &csv::StringRecord, index: usize) -> Option<String> {
        record
            .get(index)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    fn get_f64_field(record: &csv::StringRecord, index: usize) -> Option<f64> {
        record.get(index).and_then(|s| s.trim().parse::<f64>().ok())
    }

    /// Célula de Excel como texto cru (números viram a forma textual
    /// que o normalizador sabe interpretar, inclusive serial de data)
    fn get_cell_string(cells: &[Data], index: usize) -> Option<String> {
        let text = match cells.get(index)? {
            Data::String(s) => s.trim().to_string(),
            Data::Float(f) => {
                if f.fract() == 0.0 {
                    format!("{}", *f as i64)
                } else {
                    f.to_string()
                }
            }
            Data::Int(i) => i.to_string(),
            Data::DateTime(dt) => dt.as_f64().to_string(),
            Data::DateTimeIso(s) => s.clone(),
            Data::Bool(b) => b.to_string(),
            Data::Empty | Data::Error(_) | Data::DurationIso(_) => return None,
        };
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    fn get_cell_f64(cells: &[Data], index: usize) -> Option<f64> {
        match cells.get(index)? {
            Data::Float(f) => Some(*f),
            Data::Int(i) => Some(*i as f64),
            Data::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }
}

// ==========================================
// Testes
// ==========================================
