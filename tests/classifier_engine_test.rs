// ==========================================
// QMS Retorno - Testes do motor de classificação
// ==========================================
// Propriedades: primeira faixa na ordem persistida vence; limites
// inclusivos nas duas pontas; lacuna -> None (não é erro)
// ==========================================

use toner_retorno_qms::domain::rule::{default_rules, ClassificationRule};
use toner_retorno_qms::domain::toner::TonerModel;
use toner_retorno_qms::domain::types::Destination;
use toner_retorno_qms::engine::{ClassificationEngine, RecoveryCalculator};

fn engine() -> ClassificationEngine {
    ClassificationEngine::default()
}

// ==========================================
// classify: varredura em ordem com limites inclusivos
// ==========================================

#[test]
fn test_default_rules_band_edges() {
    let rules = default_rules();
    let engine = engine();

    // Pontas de cada faixa padrão
    let cases = [
        (0.0, Destination::Estoque),
        (30.0, Destination::Estoque),
        (31.0, Destination::UsoInterno),
        (70.0, Destination::UsoInterno),
        (71.0, Destination::Garantia),
        (90.0, Destination::Garantia),
        (91.0, Destination::Descarte),
        (100.0, Destination::Descarte),
    ];
    for (percent, expected) in cases {
        let rule = engine
            .classify(percent, &rules)
            .unwrap_or_else(|| panic!("percentual {} deveria casar", percent));
        assert_eq!(rule.destination, expected, "percentual {}", percent);
    }
}

#[test]
fn test_default_rules_gap_between_bands() {
    // O conjunto padrão tem lacuna entre 30 e 31 (ex.: 30,5)
    let rules = default_rules();
    assert!(engine().classify(30.5, &rules).is_none());
}

#[test]
fn test_percent_above_100_matches_nothing_by_default() {
    let rules = default_rules();
    assert!(engine().classify(120.0, &rules).is_none());
}

#[test]
fn test_overlapping_bands_first_match_wins() {
    // Sobreposição é permitida; desempate pela ordem de inserção
    let rules = vec![
        ClassificationRule::new("primeira", Destination::Garantia, 20.0, 80.0, ""),
        ClassificationRule::new("segunda", Destination::Estoque, 0.0, 100.0, ""),
    ];
    let engine = engine();

    assert_eq!(engine.classify(50.0, &rules).unwrap().rule_id, "primeira");
    assert_eq!(engine.classify(10.0, &rules).unwrap().rule_id, "segunda");
    assert_eq!(engine.classify(90.0, &rules).unwrap().rule_id, "segunda");
}

#[test]
fn test_reordering_rules_changes_outcome() {
    // A ordem é contratual: invertendo o conjunto, muda o resultado
    let mut rules = vec![
        ClassificationRule::new("a", Destination::Garantia, 0.0, 100.0, ""),
        ClassificationRule::new("b", Destination::Estoque, 0.0, 100.0, ""),
    ];
    let engine = engine();
    assert_eq!(engine.classify(50.0, &rules).unwrap().rule_id, "a");

    rules.reverse();
    assert_eq!(engine.classify(50.0, &rules).unwrap().rule_id, "b");
}

#[test]
fn test_empty_rule_set_matches_nothing() {
    assert!(engine().classify(50.0, &[]).is_none());
}

// ==========================================
// evaluate: fluxo completo peso -> resultado
// ==========================================

#[test]
fn test_evaluate_reference_scenario() {
    // 125,5 g medido, 100 g vazio, gramatura 85 g -> 25,5 g restantes
    // -> 30% -> faixa Estoque -> R$ 13,80 (2300 folhas a R$ 0,02)
    let toner = TonerModel::new("HP 85A", 100.0, 85.0, 2300.0, 0.02);
    let result = engine().evaluate(125.5, &toner, &default_rules());

    assert!((result.remaining_weight_g - 25.5).abs() < 1e-9);
    assert!((result.remaining_percent - 30.0).abs() < 0.1);
    assert_eq!(
        result.suggested_destination(),
        Some(&Destination::Estoque)
    );
    assert!(result.guidance().unwrap().contains("estoque"));
    assert!((result.recovered_value.unwrap() - 13.8).abs() < 0.05);
}

#[test]
fn test_evaluate_no_recovery_outside_estoque() {
    // 80% restante -> faixa Garantia -> sem valor recuperado
    let toner = TonerModel::new("HP 85A", 100.0, 85.0, 2300.0, 0.02);
    let result = engine().evaluate(168.0, &toner, &default_rules());

    assert_eq!(result.suggested_destination(), Some(&Destination::Garantia));
    assert_eq!(result.recovered_value, None);
}

#[test]
fn test_evaluate_weight_below_empty() {
    // Peso medido menor que o vazio: restante 0, cai na faixa 0-30
    let toner = TonerModel::new("HP 85A", 100.0, 85.0, 2300.0, 0.02);
    let result = engine().evaluate(80.0, &toner, &default_rules());

    assert_eq!(result.remaining_weight_g, 0.0);
    assert_eq!(result.remaining_percent, 0.0);
    assert_eq!(result.suggested_destination(), Some(&Destination::Estoque));
    assert_eq!(result.recovered_value, Some(0.0));
}

#[test]
fn test_evaluate_clamped_percent_lands_in_top_band() {
    // Com clamp ligado, dado mestre ruim (restante > gramatura) vira
    // 100% e cai na última faixa em vez de não casar
    let toner = TonerModel::new("Genérico", 50.0, 85.0, 2300.0, 0.02);
    let engine = ClassificationEngine::new(RecoveryCalculator::new(true));
    let result = engine.evaluate(200.0, &toner, &default_rules());

    assert_eq!(result.remaining_percent, 100.0);
    assert_eq!(result.suggested_destination(), Some(&Destination::Descarte));
}
