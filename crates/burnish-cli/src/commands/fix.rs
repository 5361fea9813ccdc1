use std::path::Path;

use burnish_enforce::batch::{run_batch, FileOutcome};
use burnish_enforce::cancel::CancellationToken;

use super::{build_engine, collect_sources, load_config, print_outcomes, RunOptions};

/// Run `burnish fix`: converge every file and write the changed ones back.
/// A file that hit the pass ceiling still gets its best-effort text.
///
/// Exit codes: 0 every file clean and stable, 1 violations remain or a file
/// did not stabilize, 2 a file could not be read or written.
pub fn run(opts: RunOptions, max_passes: Option<u32>, dry_run: bool) -> i32 {
    let mut config = match load_config("fix", opts.config.as_deref()) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let sources = match collect_sources("fix", &opts.paths, &config) {
        Ok(s) => s,
        Err(code) => return code,
    };
    let mut engine = build_engine(&mut config, &opts.suppress).fixing(true);
    if let Some(n) = max_passes {
        engine = engine.max_passes(n);
    }

    let outcomes = run_batch(&engine, &sources, &CancellationToken::new());

    let mut failed = false;
    let mut written = 0usize;
    let mut remaining = 0usize;
    let mut unstable = false;
    for outcome in &outcomes {
        let report = match outcome {
            FileOutcome::Processed(report) => report,
            FileOutcome::Failed { .. } => {
                failed = true;
                continue;
            }
            FileOutcome::Cancelled { .. } => continue,
        };
        remaining += report.unresolved().count();
        unstable |= !report.stabilized;
        if !report.changed || dry_run {
            continue;
        }
        match std::fs::write(Path::new(&report.path), &report.fixed_text) {
            Ok(()) => written += 1,
            Err(e) => {
                eprintln!("burnish fix: failed to write {}: {}", report.path, e);
                failed = true;
            }
        }
    }

    print_outcomes(&outcomes, opts.json);
    if !opts.json {
        let verb = if dry_run { "would fix" } else { "fixed" };
        let changed = outcomes
            .iter()
            .filter_map(FileOutcome::report)
            .filter(|r| r.changed)
            .count();
        eprintln!(
            "burnish fix: {} {} file(s), {} violation(s) remain",
            verb,
            if dry_run { changed } else { written },
            remaining
        );
    }

    if failed {
        2
    } else if remaining > 0 || unstable {
        1
    } else {
        0
    }
}
