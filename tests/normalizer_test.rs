// ==========================================
// QMS Retorno - Testes do normalizador de importação
// ==========================================
// Propriedades: data ilegível NUNCA falha (fallback marcado);
// monetário ilegível/negativo vira None; id de cliente vazio
// vira a sentinela 0
// ==========================================

use chrono::{Local, NaiveDate};
use toner_retorno_qms::engine::{
    normalize_client_id, normalize_date, normalize_date_with_today, normalize_monetary,
};

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 29).unwrap()
}

// ==========================================
// Datas
// ==========================================

#[test]
fn test_date_iso_passes_through() {
    let result = normalize_date_with_today(Some("2024-06-16"), fixed_today());
    assert_eq!(result.date, NaiveDate::from_ymd_opt(2024, 6, 16).unwrap());
    assert!(!result.fallback);
}

#[test]
fn test_date_brazilian_day_first() {
    let expected = NaiveDate::from_ymd_opt(2024, 6, 16).unwrap();
    assert_eq!(
        normalize_date_with_today(Some("16/06/2024"), fixed_today()).date,
        expected
    );
    assert_eq!(
        normalize_date_with_today(Some("16-06-2024"), fixed_today()).date,
        expected
    );
}

#[test]
fn test_date_year_first_with_short_components() {
    assert_eq!(
        normalize_date_with_today(Some("2024/6/16"), fixed_today()).date,
        NaiveDate::from_ymd_opt(2024, 6, 16).unwrap()
    );
    assert_eq!(
        normalize_date_with_today(Some("2024-6-1"), fixed_today()).date,
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    );
}

#[test]
fn test_date_spreadsheet_serial() {
    // Serial Excel: dias desde 1899-12-30; 45459 = 2024-06-16
    let result = normalize_date_with_today(Some("45459"), fixed_today());
    assert_eq!(result.date, NaiveDate::from_ymd_opt(2024, 6, 16).unwrap());
    assert!(!result.fallback);

    // Serial com fração de dia (hora embutida)
    let result = normalize_date_with_today(Some("45459.75"), fixed_today());
    assert_eq!(result.date, NaiveDate::from_ymd_opt(2024, 6, 16).unwrap());
}

#[test]
fn test_date_unparseable_falls_back_to_today_flagged() {
    for raw in ["não é uma data", "2024-99-99", "//", "abc"] {
        let result = normalize_date_with_today(Some(raw), fixed_today());
        assert_eq!(result.date, fixed_today(), "entrada: {:?}", raw);
        assert!(result.fallback, "entrada: {:?}", raw);
    }
}

#[test]
fn test_date_missing_falls_back() {
    assert!(normalize_date_with_today(None, fixed_today()).fallback);
    assert!(normalize_date_with_today(Some(""), fixed_today()).fallback);
    assert!(normalize_date_with_today(Some("   "), fixed_today()).fallback);
}

#[test]
fn test_date_default_entry_point_uses_local_today() {
    let result = normalize_date(Some("isto não parseia"));
    assert_eq!(result.date, Local::now().date_naive());
    assert!(result.fallback);
}

// ==========================================
// Monetário
// ==========================================

#[test]
fn test_monetary_brazilian_format() {
    assert_eq!(normalize_monetary("R$ 1.234,56"), Some(1234.56));
    assert_eq!(normalize_monetary("r$ 1.234,56"), Some(1234.56));
    assert_eq!(normalize_monetary("1.234,56"), Some(1234.56));
    assert_eq!(normalize_monetary("13,80"), Some(13.8));
}

#[test]
fn test_monetary_dot_decimal_format() {
    assert_eq!(normalize_monetary("1234.56"), Some(1234.56));
    assert_eq!(normalize_monetary("R$13.8"), Some(13.8));
}

#[test]
fn test_monetary_empty_means_not_provided() {
    // None = "não informado"; 0 = "recuperação zero"; são diferentes
    assert_eq!(normalize_monetary(""), None);
    assert_eq!(normalize_monetary("  "), None);
    assert_eq!(normalize_monetary("R$"), None);
    assert_eq!(normalize_monetary("0"), Some(0.0));
}

#[test]
fn test_monetary_negative_or_garbage_is_none() {
    assert_eq!(normalize_monetary("-13,80"), None);
    assert_eq!(normalize_monetary("R$ -1,00"), None);
    assert_eq!(normalize_monetary("grátis"), None);
}

// ==========================================
// Id de cliente
// ==========================================

#[test]
fn test_client_id_parses_or_zero() {
    assert_eq!(normalize_client_id(Some("1234")), 1234);
    assert_eq!(normalize_client_id(Some("123.0")), 123);
    assert_eq!(normalize_client_id(Some("")), 0);
    assert_eq!(normalize_client_id(Some("sem cadastro")), 0);
    assert_eq!(normalize_client_id(None), 0);
}
