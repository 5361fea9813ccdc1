// Walking a project and fixing it in parallel
use burnish_enforce::batch::{run_batch, FileOutcome};
use burnish_enforce::cancel::CancellationToken;
use burnish_lexer::walker::SourceWalker;
use pretty_assertions::assert_eq;

use crate::common::{create_project, default_engine, fixture};

#[test]
fn test_batch_over_walked_project() {
    let messy = fixture("messy.php");
    let clean = fixture("clean.php");
    let (_dir, root) = create_project(&[
        ("src/Report.php", messy.as_str()),
        ("src/Clock.php", clean.as_str()),
        ("vendor/lib/Dep.php", messy.as_str()),
        ("README.md", "# docs\n"),
        (".burnishignore", "vendor/\n"),
    ]);

    let sources = SourceWalker::new(&root).walk();
    assert_eq!(sources.len(), 2);

    let outcomes = run_batch(&default_engine(true), &sources, &CancellationToken::new());

    assert_eq!(outcomes.len(), 2);
    for (outcome, path) in outcomes.iter().zip(&sources) {
        assert_eq!(outcome.path(), path.display().to_string());
    }
    let clock = outcomes[0].report().unwrap();
    assert!(clock.path.ends_with("Clock.php"));
    assert!(!clock.changed);
    let report = outcomes[1].report().unwrap();
    assert!(report.changed);
    assert_eq!(report.fixed_text, fixture("messy.fixed.php"));
}

#[test]
fn test_batch_isolates_unreadable_file() {
    let (_dir, root) = create_project(&[("a.php", "<?php\n\ndeclare(strict_types=1);\n")]);
    let missing = root.join("gone.php");
    let present = root.join("a.php");

    let outcomes = run_batch(
        &default_engine(false),
        &[missing, present],
        &CancellationToken::new(),
    );

    assert!(matches!(outcomes[0], FileOutcome::Failed { .. }));
    assert!(outcomes[1].report().unwrap().violations.is_empty());
}

#[test]
fn test_batch_reports_serialize_as_json() {
    let (_dir, root) = create_project(&[("a.php", "<?php\necho 1;\n")]);
    let outcomes = run_batch(
        &default_engine(false),
        &[root.join("a.php")],
        &CancellationToken::new(),
    );

    let json = serde_json::to_value(&outcomes).unwrap();
    assert_eq!(json[0]["outcome"], "processed");
    assert_eq!(json[0]["violations"][0]["code"], "NoDeclare");
    assert_eq!(json[0]["violations"][0]["status"], "unattempted");
    assert!(json[0].get("warning").is_none());
}
