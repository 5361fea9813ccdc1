// Tests for `burnish check`
use std::fs;
use std::process::Command;

use crate::common::{burnish_bin, create_project, fixture};

#[test]
fn test_check_prints_one_line_per_violation() {
    let messy = fixture("messy.php");
    let (_dir, root) = create_project(&[("src/Report.php", messy.as_str())]);

    let output = Command::new(burnish_bin())
        .args(["check", "src"])
        .current_dir(&root)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4, "stdout: {}", stdout);
    assert!(lines[0].starts_with("src/Report.php:1:1 NoDeclare "));
    assert!(lines.iter().all(|l| l.ends_with("[fixable]")));
    assert_eq!(fs::read_to_string(root.join("src/Report.php")).unwrap(), messy);
}

#[test]
fn test_check_json_output() {
    let dates = fixture("dates.php");
    let (_dir, root) = create_project(&[("dates.php", dates.as_str())]);

    let output = Command::new(burnish_bin())
        .args(["--json", "check", "dates.php"])
        .current_dir(&root)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let outcomes = json.as_array().unwrap();
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0]["outcome"], "processed");
    assert_eq!(outcomes[0]["violations"].as_array().unwrap().len(), 3);
    assert_eq!(outcomes[0]["violations"][0]["fixable"], false);
}

#[test]
fn test_check_respects_config_suppress() {
    let (_dir, root) = create_project(&[
        ("a.php", "<?php\necho 1;\n"),
        (".burnish/burnish.json", r#"{ "suppress": ["NoDeclare"] }"#),
    ]);

    let output = Command::new(burnish_bin())
        .arg("check")
        .current_dir(&root)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_check_suppress_flag() {
    let (_dir, root) = create_project(&[("a.php", "<?php\necho 1;\n")]);

    let output = Command::new(burnish_bin())
        .args(["check", "--suppress", "NoDeclare"])
        .current_dir(&root)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
}
