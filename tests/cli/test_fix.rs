// Tests for `burnish fix`
use std::fs;
use std::process::Command;

use pretty_assertions::assert_eq;

use crate::common::{burnish_bin, create_project, fixture};

#[test]
fn test_fix_rewrites_files_in_place() {
    let messy = fixture("messy.php");
    let clean = fixture("clean.php");
    let (_dir, root) = create_project(&[
        ("src/Report.php", messy.as_str()),
        ("src/Clock.php", clean.as_str()),
    ]);

    let output = Command::new(burnish_bin())
        .arg("fix")
        .current_dir(&root)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        fs::read_to_string(root.join("src/Report.php")).unwrap(),
        fixture("messy.fixed.php")
    );
    assert_eq!(fs::read_to_string(root.join("src/Clock.php")).unwrap(), clean);
}

#[test]
fn test_fix_dry_run_writes_nothing() {
    let messy = fixture("messy.php");
    let (_dir, root) = create_project(&[("Report.php", messy.as_str())]);

    let output = Command::new(burnish_bin())
        .args(["fix", "--dry-run", "Report.php"])
        .current_dir(&root)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(fs::read_to_string(root.join("Report.php")).unwrap(), messy);
}

#[test]
fn test_fix_json_carries_fixed_text() {
    let (_dir, root) = create_project(&[("a.php", "<?php\n$f = fn($x) => $x;\n")]);

    let output = Command::new(burnish_bin())
        .args(["fix", "--json", "--dry-run"])
        .current_dir(&root)
        .output()
        .unwrap();

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json[0]["fixed_text"],
        "<?php\ndeclare(strict_types=1);$f = fn ($x) => $x;\n"
    );
    assert_eq!(json[0]["changed"], true);
    assert_eq!(json[0]["passes"], 2);
    assert_eq!(json[0]["stabilized"], true);
}

#[test]
fn test_fix_max_passes_leaves_file_unstable() {
    let messy = fixture("messy.php");
    let (_dir, root) = create_project(&[("Report.php", messy.as_str())]);

    let output = Command::new(burnish_bin())
        .args(["fix", "--max-passes", "1"])
        .current_dir(&root)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        fs::read_to_string(root.join("Report.php")).unwrap(),
        fixture("messy.fixed.php")
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("warning: did not stabilize after 1 passes"));
}
