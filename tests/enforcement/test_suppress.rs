// Suppression through configuration
use burnish_core::config::BurnishConfig;
use burnish_enforce::engine::Engine;
use burnish_enforce::suppress::SuppressionManager;
use burnish_lexer::PhpTokenizer;

use crate::common::{default_engine, fixture};

#[test]
fn test_suppressed_code_is_neither_reported_nor_fixed() {
    let mut config = BurnishConfig::default();
    config.suppress = vec!["NoDeclare".to_string(), "SpaceAfterFn".to_string()];
    let engine = Engine::with_config(Box::new(PhpTokenizer::new()), &config).fixing(true);

    let report = engine.run("messy.php", &fixture("messy.php"));

    assert!(!report.fixed_text.contains("strict_types"));
    assert!(report.fixed_text.contains("fn($rows)"));
    assert!(report.fixed_text.contains("@phan-return"));
    assert!(report.violations.is_empty());
}

#[test]
fn test_suppression_manager_overrides_config() {
    let engine = default_engine(false)
        .suppressions(SuppressionManager::from_codes(["NoNewCarbon"]));

    let report = engine.run("dates.php", &fixture("dates.php"));

    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].code, "NoCarbonStaticMethods");
}

#[test]
fn test_disabled_rule_does_not_run() {
    let mut config = BurnishConfig::default();
    config.rules.banned_date_instantiation = false;
    let engine = Engine::with_config(Box::new(PhpTokenizer::new()), &config);

    let report = engine.run("dates.php", &fixture("dates.php"));

    assert!(report.violations.is_empty());
    assert!(!engine.rule_names().contains(&"Dates.BannedDateInstantiation"));
}
