// Pass counts, oscillation and the pass ceiling
use burnish_enforce::engine::DEFAULT_MAX_PASSES;
use burnish_enforce::rules::{OpeningBrace, RequireStrictTypes, ShortFunctionSpacing};
use pretty_assertions::assert_eq;

use crate::common::engine_with;
use crate::common::rules::{GrowForever, SwapVariables};

#[test]
fn test_independent_fixes_converge_in_two_passes() {
    let engine = engine_with(
        vec![
            Box::new(RequireStrictTypes),
            Box::new(OpeningBrace),
            Box::new(ShortFunctionSpacing),
        ],
        true,
    );
    let source = "<?php\nclass A\n{\n\n    public function f()\n    {\n        return fn($x) => $x;\n    }\n}\n";

    let report = engine.run("a.php", source);

    assert_eq!(report.passes, 2);
    assert!(report.stabilized);
    assert!(report.warning.is_none());
}

#[test]
fn test_oscillating_fix_stops_when_text_repeats() {
    let engine = engine_with(vec![Box::new(SwapVariables)], true);
    let source = "<?php\n$a = $b;\n";

    let report = engine.run("a.php", source);

    assert_eq!(report.passes, 2);
    assert_eq!(report.fixed_text, source);
    assert!(!report.stabilized);
    assert!(report.warning.as_deref().unwrap().contains("oscillate"));
}

#[test]
fn test_pass_ceiling_returns_partial_progress() {
    let engine = engine_with(vec![Box::new(GrowForever)], true).max_passes(3);

    let report = engine.run("a.php", "<?php\necho 1;\n");

    assert_eq!(report.passes, 3);
    assert_eq!(report.fixed_text, "<?php\necho 1;;;;\n");
    assert!(!report.stabilized);
    assert_eq!(
        report.warning.as_deref(),
        Some("did not stabilize after 3 passes")
    );
}

#[test]
fn test_default_ceiling_applies() {
    let engine = engine_with(vec![Box::new(GrowForever)], true);
    let report = engine.run("a.php", "<?php\necho 1;\n");
    assert_eq!(report.passes, DEFAULT_MAX_PASSES);
}

#[test]
fn test_check_mode_runs_one_pass_even_when_fixes_exist() {
    let engine = engine_with(vec![Box::new(GrowForever)], false);
    let report = engine.run("a.php", "<?php\necho 1;\n");
    assert_eq!(report.passes, 1);
    assert!(report.stabilized);
    assert_eq!(report.violations.len(), 1);
}
