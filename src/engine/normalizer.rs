// ==========================================
// QMS Retorno - Normalizador da importação
// ==========================================
// Responsabilidade: normalizar datas, valores monetários e id de
// cliente vindos de planilha (CSV/Excel) para tipos do domínio
// ==========================================
// Restrição: data impossível de parsear NUNCA bloqueia a linha:
// cai para "hoje" com flag de fallback, e o chamador decide como
// avisar/contar. Valor monetário ilegível vira None ("não
// informado"), distinto de 0 ("recuperação zero").
// ==========================================

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Dias entre 1899-12-30 (época serial de planilha) e 1970-01-01
const SERIAL_EPOCH_OFFSET_DAYS: f64 = 25_569.0;

/// Maior serial de planilha válido (9999-12-31). Números acima disso
/// não são data serial (ex.: "20240616" digitado sem separadores).
const SERIAL_MAX_DAYS: f64 = 2_958_465.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

// ==========================================
// NormalizedDate - data com marca de fallback
// ==========================================
// A substituição silenciosa vira resultado marcado: o importador
// conta os fallbacks em vez de engolir a troca.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedDate {
    pub date: NaiveDate,
    /// true quando a entrada não parseou e a data é "hoje"
    pub fallback: bool,
}

impl NormalizedDate {
    fn parsed(date: NaiveDate) -> Self {
        Self {
            date,
            fallback: false,
        }
    }

    fn fallback(today: NaiveDate) -> Self {
        Self {
            date: today,
            fallback: true,
        }
    }
}

/// Normaliza uma data crua de planilha usando a data local como fallback
pub fn normalize_date(raw: Option<&str>) -> NormalizedDate {
    normalize_date_with_today(raw, Local::now().date_naive())
}

/// Normaliza uma data crua de planilha
///
/// # Ordem de prioridade
/// 1. ISO `YYYY-MM-DD` (aceita dia/mês com 1-2 dígitos), passa direto
/// 2. Número serial de planilha (dias desde 1899-12-30, convertido via
///    `(serial - 25569) * 86400` segundos desde a época Unix)
/// 3. `DD/MM/YYYY`
/// 4. `DD-MM-YYYY`
/// 5. `YYYY/MM/DD`
/// 6. Parse genérico (RFC3339 / `YYYY-MM-DD HH:MM:SS`)
/// 7. Fallback: `today`, com `fallback = true`
pub fn normalize_date_with_today(raw: Option<&str>, today: NaiveDate) -> NormalizedDate {
    let raw = match raw {
        Some(s) if !s.trim().is_empty() => s.trim(),
        _ => return NormalizedDate::fallback(today),
    };

    // 1. ISO (também cobre YYYY-M-D com 1-2 dígitos)
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return NormalizedDate::parsed(date);
    }

    // 2. Serial de planilha (Excel grava datas como número de dias)
    if let Ok(serial) = raw.parse::<f64>() {
        if let Some(date) = serial_to_date(serial) {
            return NormalizedDate::parsed(date);
        }
        return NormalizedDate::fallback(today);
    }

    // 3-5. Formatos com separador explícito
    for format in ["%d/%m/%Y", "%d-%m-%Y", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return NormalizedDate::parsed(date);
        }
    }

    // 6. Parse genérico: datas com componente de hora
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return NormalizedDate::parsed(dt.date_naive());
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return NormalizedDate::parsed(dt.date());
        }
    }

    // 7. Fallback deliberado: não bloquear a importação por uma data ruim
    NormalizedDate::fallback(today)
}

/// Converte serial de planilha (dias desde 1899-12-30) em data
fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial <= 0.0 || serial > SERIAL_MAX_DAYS {
        return None;
    }
    let seconds = (serial - SERIAL_EPOCH_OFFSET_DAYS) * SECONDS_PER_DAY;
    DateTime::from_timestamp(seconds.round() as i64, 0).map(|dt| dt.date_naive())
}

/// Normaliza um valor monetário cru de planilha
///
/// Aceita o formato brasileiro ("R$ 1.234,56") e o formato com ponto
/// decimal ("1234.56"). Retorna None para vazio, ilegível ou negativo:
/// "não informado" não é o mesmo que "recuperação zero".
pub fn normalize_monetary(raw: &str) -> Option<f64> {
    let mut s = raw.trim();
    if s.is_empty() {
        return None;
    }

    // Remove o prefixo de moeda
    if let Some(rest) = s.strip_prefix("R$").or_else(|| s.strip_prefix("r$")) {
        s = rest.trim();
    }

    // Separadores: com vírgula presente, pontos são de milhar e a
    // vírgula é o decimal; sem vírgula, o ponto já é decimal.
    let normalized = if s.contains(',') {
        s.replace('.', "").replace(',', ".")
    } else {
        s.to_string()
    };

    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Some(value),
        _ => None,
    }
}

/// Normaliza o identificador numérico de cliente
///
/// Vazio ou ilegível vira 0: "cliente não identificado" é uma
/// sentinela válida do domínio, não um erro de importação.
pub fn normalize_client_id(raw: Option<&str>) -> i64 {
    let raw = match raw {
        Some(s) if !s.trim().is_empty() => s.trim(),
        _ => return 0,
    };

    if let Ok(id) = raw.parse::<i64>() {
        return id;
    }
    // Planilhas às vezes entregam inteiros como "123.0"
    if let Ok(value) = raw.parse::<f64>() {
        if value.is_finite() {
            return value.trunc() as i64;
        }
    }
    0
}
