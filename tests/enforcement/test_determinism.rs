// Repeat runs and already-clean inputs
use pretty_assertions::assert_eq;

use crate::common::{default_engine, fixture};

const SAMPLES: &[&str] = &["clean.php", "messy.php", "messy.fixed.php", "dates.php"];

#[test]
fn test_repeat_runs_are_identical() {
    for fixing in [false, true] {
        let engine = default_engine(fixing);
        for name in SAMPLES {
            let source = fixture(name);
            let first = engine.run(name, &source);
            let second = engine.run(name, &source);
            assert_eq!(first, second, "{} (fixing: {})", name, fixing);
        }
    }
}

#[test]
fn test_separate_engines_agree() {
    for name in SAMPLES {
        let source = fixture(name);
        assert_eq!(
            default_engine(true).run(name, &source),
            default_engine(true).run(name, &source)
        );
    }
}

#[test]
fn test_clean_file_is_a_fixed_point() {
    let source = fixture("clean.php");
    let report = default_engine(true).run("clean.php", &source);

    assert!(report.violations.is_empty(), "{:?}", report.violations);
    assert_eq!(report.fixed_text, source);
    assert_eq!(report.passes, 1);
    assert!(!report.changed);
}

#[test]
fn test_fixing_twice_changes_nothing_more() {
    let engine = default_engine(true);
    for name in SAMPLES {
        let once = engine.run(name, &fixture(name));
        let twice = engine.run(name, &once.fixed_text);
        assert_eq!(twice.fixed_text, once.fixed_text, "{}", name);
        assert_eq!(twice.passes, 1, "{}", name);
        assert!(!twice.changed, "{}", name);
    }
}
