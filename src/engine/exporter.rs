// ==========================================
// QMS Retorno - Exportação de retornos em CSV
// ==========================================
// Responsabilidade: transformar registros classificados em CSV
// (cabeçalho + uma linha por retorno, datas ISO, valores com 2 casas)
// ==========================================

use crate::domain::retorno::ReturnRecord;
use std::error::Error;
use std::io::Write;

/// Linha de exportação já com o nome do modelo resolvido
#[derive(Debug, Clone)]
pub struct ExportRow {
    pub record: ReturnRecord,
    pub toner_name: String,
}

impl ExportRow {
    pub fn new(record: ReturnRecord, toner_name: impl Into<String>) -> Self {
        Self {
            record,
            toner_name: toner_name.into(),
        }
    }
}

/// Escreve os retornos em CSV no writer recebido
///
/// # Colunas
/// data;modelo;cliente;filial;destino;peso_g;valor_recuperado
/// (separador padrão vírgula; valor vazio = não informado)
pub fn export_returns_csv<W: Write>(out: W, rows: &[ExportRow]) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_writer(out);

    writer.write_record([
        "data_retorno",
        "modelo",
        "id_cliente",
        "filial",
        "destino",
        "peso_g",
        "valor_recuperado",
    ])?;

    for row in rows {
        let record = &row.record;
        writer.write_record([
            record.return_date.format("%Y-%m-%d").to_string(),
            row.toner_name.clone(),
            record.client_id.to_string(),
            record.branch.clone(),
            record.destination.label().to_string(),
            format!("{:.1}", record.weight_g),
            record
                .recovered_value
                .map(|v| format!("{:.2}", v))
                .unwrap_or_default(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::Destination;
    use chrono::NaiveDate;

    #[test]
    fn test_export_header_and_values() {
        let record = ReturnRecord::new(
            "toner-1",
            1234,
            "Matriz",
            Destination::Estoque,
            125.5,
            NaiveDate::from_ymd_opt(2024, 6, 16).unwrap(),
            Some(13.8),
        );
        let rows = vec![ExportRow::new(record, "HP 85A")];

        let mut buf = Vec::new();
        export_returns_csv(&mut buf, &rows).unwrap();
        let csv = String::from_utf8(buf).unwrap();

        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "data_retorno,modelo,id_cliente,filial,destino,peso_g,valor_recuperado"
        );
        assert_eq!(
            lines.next().unwrap(),
            "2024-06-16,HP 85A,1234,Matriz,Estoque,125.5,13.80"
        );
    }

    #[test]
    fn test_export_missing_value_is_empty() {
        let record = ReturnRecord::new(
            "toner-2",
            0,
            "Filial Sul",
            Destination::Descarte,
            90.0,
            NaiveDate::from_ymd_opt(2024, 6, 16).unwrap(),
            None,
        );
        let rows = vec![ExportRow::new(record, "Brother TN-1060")];

        let mut buf = Vec::new();
        export_returns_csv(&mut buf, &rows).unwrap();
        let csv = String::from_utf8(buf).unwrap();
        assert!(csv.lines().nth(1).unwrap().ends_with(",90.0,"));
    }
}
