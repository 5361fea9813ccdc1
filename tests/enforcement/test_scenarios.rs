// End-to-end fixes performed by the built-in rules
use burnish_enforce::rules::{OpeningBrace, RequireStrictTypes, ShortFunctionSpacing};
use burnish_enforce::types::FixStatus;
use pretty_assertions::assert_eq;

use crate::common::{default_engine, engine_with, fixture};

#[test]
fn test_blank_lines_after_class_opener_are_removed() {
    let source = "<?php\nclass Invoice\n{\n\n\n    private $total;\n}\n";
    let engine = engine_with(vec![Box::new(OpeningBrace)], true);

    let report = engine.run("Invoice.php", source);

    assert_eq!(
        report.fixed_text,
        "<?php\nclass Invoice\n{\n    private $total;\n}\n"
    );
    assert!(report.changed);
    assert!(report.stabilized);

    let detected = engine_with(vec![Box::new(OpeningBrace)], false).run("Invoice.php", source);
    assert_eq!(detected.violations.len(), 1);
    assert_eq!(detected.violations[0].code, "OpenBraceFollowedByBlankLine");
    assert_eq!(
        detected.violations[0].message,
        "Opening brace must not be succeeded by a blank line"
    );
}

#[test]
fn test_missing_strict_types_reaches_fixed_point_in_two_passes() {
    let engine = engine_with(vec![Box::new(RequireStrictTypes)], true);

    let report = engine.run("a.php", "<?php\necho 'hi';\n");
    assert_eq!(report.fixed_text, "<?php\ndeclare(strict_types=1);echo 'hi';\n");
    assert_eq!(report.passes, 2);
    assert!(report.violations.is_empty());

    let again = engine.run("a.php", &report.fixed_text);
    assert!(again.violations.is_empty());
    assert_eq!(again.passes, 1);
    assert!(!again.changed);
}

#[test]
fn test_correct_spacing_after_fn_is_untouched() {
    let source = "<?php\n$double = fn ($x) => $x * 2;\n";
    let engine = engine_with(vec![Box::new(ShortFunctionSpacing)], true);

    let report = engine.run("a.php", source);

    assert!(report.violations.is_empty());
    assert_eq!(report.passes, 1);
    assert_eq!(report.fixed_text, source);
    assert!(!report.changed);
}

#[test]
fn test_all_rules_fix_messy_file() {
    let report = default_engine(true).run("messy.php", &fixture("messy.php"));

    assert_eq!(report.fixed_text, fixture("messy.fixed.php"));
    assert_eq!(report.passes, 2);
    assert!(report.stabilized);
    assert!(report.violations.is_empty());
}

#[test]
fn test_check_mode_lists_every_rule_in_token_order() {
    let report = default_engine(false).run("messy.php", &fixture("messy.php"));

    let codes: Vec<&str> = report.violations.iter().map(|v| v.code.as_str()).collect();
    assert_eq!(
        codes,
        vec![
            "NoDeclare",
            "OpenBraceFollowedByBlankLine",
            "FancyPhanReturnTypeFound",
            "SpaceAfterFn",
        ]
    );
    assert!(report
        .violations
        .iter()
        .all(|v| v.fixable && v.status == FixStatus::Unattempted));
    assert_eq!(report.passes, 1);
    assert_eq!(report.fixed_text, fixture("messy.php"));
}

#[test]
fn test_banned_dates_are_reported_not_fixed() {
    let source = fixture("dates.php");
    let report = default_engine(true).run("dates.php", &source);

    let codes: Vec<&str> = report.violations.iter().map(|v| v.code.as_str()).collect();
    assert_eq!(codes, vec!["NoNewCarbon", "NoCarbonStaticMethods", "NoNewCarbon"]);
    assert!(report
        .violations
        .iter()
        .all(|v| v.status == FixStatus::NotFixable));
    assert_eq!(report.fixed_text, source);
    assert_eq!(report.passes, 1);
    assert_eq!(report.unresolved().count(), 3);
}
