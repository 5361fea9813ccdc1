// Two rules claiming the same token in one pass
use burnish_enforce::rules::ShortFunctionSpacing;
use burnish_enforce::types::FixStatus;
use pretty_assertions::assert_eq;

use crate::common::engine_with;
use crate::common::rules::LowercaseFn;

const SOURCE: &str = "<?php\n$f = FN($x) => $x;\n";

#[test]
fn test_first_registered_rule_wins_the_token() {
    let engine = engine_with(
        vec![Box::new(ShortFunctionSpacing), Box::new(LowercaseFn)],
        true,
    )
    .max_passes(1);

    let report = engine.run("a.php", SOURCE);

    assert_eq!(report.fixed_text, "<?php\n$f = FN ($x) => $x;\n");
    let statuses: Vec<(&str, FixStatus)> = report
        .violations
        .iter()
        .map(|v| (v.code.as_str(), v.status))
        .collect();
    assert_eq!(
        statuses,
        vec![
            ("SpaceAfterFn", FixStatus::Fixed),
            ("LowercaseFn", FixStatus::Conflicted),
        ]
    );
    assert!(!report.stabilized);
}

#[test]
fn test_registration_order_decides_the_winner() {
    let engine = engine_with(
        vec![Box::new(LowercaseFn), Box::new(ShortFunctionSpacing)],
        true,
    )
    .max_passes(1);

    let report = engine.run("a.php", SOURCE);

    assert_eq!(report.fixed_text, "<?php\n$f = fn($x) => $x;\n");
    assert_eq!(report.violations[0].status, FixStatus::Fixed);
    assert_eq!(report.violations[1].status, FixStatus::Conflicted);
}

#[test]
fn test_conflicted_fix_lands_in_a_later_pass() {
    let engine = engine_with(
        vec![Box::new(ShortFunctionSpacing), Box::new(LowercaseFn)],
        true,
    );

    let report = engine.run("a.php", SOURCE);

    assert_eq!(report.fixed_text, "<?php\n$f = fn ($x) => $x;\n");
    assert_eq!(report.passes, 3);
    assert!(report.stabilized);
    assert!(report.violations.is_empty());
}
