// Exit code contract: 0 clean, 1 violations, 2 setup or I/O failure
use std::process::Command;

use crate::common::{burnish_bin, create_project};

fn run_in(root: &std::path::Path, args: &[&str]) -> Option<i32> {
    Command::new(burnish_bin())
        .args(args)
        .current_dir(root)
        .output()
        .unwrap()
        .status
        .code()
}

#[test]
fn test_clean_project_exits_zero() {
    let (_dir, root) = create_project(&[("a.php", "<?php\n\ndeclare(strict_types=1);\n")]);
    assert_eq!(run_in(&root, &["check"]), Some(0));
    assert_eq!(run_in(&root, &["fix"]), Some(0));
}

#[test]
fn test_missing_path_exits_two() {
    let (_dir, root) = create_project(&[]);
    assert_eq!(run_in(&root, &["check", "nope"]), Some(2));
    assert_eq!(run_in(&root, &["fix", "nope"]), Some(2));
}

#[test]
fn test_broken_explicit_config_exits_two() {
    let (_dir, root) = create_project(&[("a.php", "<?php\n"), ("bad.json", "{ nope")]);
    assert_eq!(run_in(&root, &["--config", "bad.json", "check"]), Some(2));
}

#[test]
fn test_broken_default_config_falls_back() {
    let (_dir, root) = create_project(&[
        ("a.php", "<?php\n\ndeclare(strict_types=1);\n"),
        (".burnish/burnish.json", "{ nope"),
    ]);
    assert_eq!(run_in(&root, &["check"]), Some(0));
}

#[test]
fn test_unfixable_violation_exits_one_after_fix() {
    let (_dir, root) = create_project(&[(
        "a.php",
        "<?php\n\ndeclare(strict_types=1);\n$d = new Carbon();\n",
    )]);
    assert_eq!(run_in(&root, &["fix"]), Some(1));
}

#[test]
fn test_usage_error_exits_two() {
    let (_dir, root) = create_project(&[]);
    assert_eq!(run_in(&root, &["check", "--max-passes", "2"]), Some(2));
}
