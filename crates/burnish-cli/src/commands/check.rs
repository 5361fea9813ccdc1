use burnish_enforce::batch::{run_batch, FileOutcome};
use burnish_enforce::cancel::CancellationToken;

use super::{build_engine, collect_sources, load_config, print_outcomes, RunOptions};

/// Run `burnish check`: report violations, touch nothing.
///
/// Exit codes: 0 clean, 1 violations found, 2 a file or the config failed.
pub fn run(opts: RunOptions) -> i32 {
    let mut config = match load_config("check", opts.config.as_deref()) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let sources = match collect_sources("check", &opts.paths, &config) {
        Ok(s) => s,
        Err(code) => return code,
    };
    let engine = build_engine(&mut config, &opts.suppress);

    let outcomes = run_batch(&engine, &sources, &CancellationToken::new());
    print_outcomes(&outcomes, opts.json);

    let (failed, violations) = tally(&outcomes);
    if !opts.json {
        eprintln!(
            "burnish check: {} file(s), {} violation(s)",
            outcomes.len(),
            violations
        );
    }
    exit_code(failed, violations)
}

fn tally(outcomes: &[FileOutcome]) -> (usize, usize) {
    let failed = outcomes
        .iter()
        .filter(|o| matches!(o, FileOutcome::Failed { .. }))
        .count();
    let violations = outcomes
        .iter()
        .filter_map(FileOutcome::report)
        .map(|r| r.violations.len())
        .sum();
    (failed, violations)
}

fn exit_code(failed: usize, violations: usize) -> i32 {
    if failed > 0 {
        2
    } else if violations > 0 {
        1
    } else {
        0
    }
}
