use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;

use crate::cancel::CancellationToken;
use crate::engine::Engine;
use crate::types::FileReport;

/// Result for one file of a batch.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FileOutcome {
    Processed(FileReport),
    Failed { path: String, error: String },
    Cancelled { path: String },
}

impl FileOutcome {
    pub fn path(&self) -> &str {
        match self {
            FileOutcome::Processed(report) => &report.path,
            FileOutcome::Failed { path, .. } | FileOutcome::Cancelled { path } => path,
        }
    }

    pub fn report(&self) -> Option<&FileReport> {
        match self {
            FileOutcome::Processed(report) => Some(report),
            _ => None,
        }
    }
}

/// Run `engine` over every file in parallel. Output order matches `paths`.
///
/// A file that cannot be read becomes a `Failed` entry; the rest of the
/// batch carries on.
pub fn run_batch(
    engine: &Engine,
    paths: &[PathBuf],
    cancel: &CancellationToken,
) -> Vec<FileOutcome> {
    log::debug!(
        "running {} file(s), fixing: {}",
        paths.len(),
        engine.is_fixing()
    );
    paths
        .par_iter()
        .map(|path| run_file(engine, path, cancel))
        .collect()
}

fn run_file(engine: &Engine, path: &Path, cancel: &CancellationToken) -> FileOutcome {
    let display = path.display().to_string();
    if cancel.is_cancelled() {
        return FileOutcome::Cancelled { path: display };
    }
    match std::fs::read_to_string(path) {
        Ok(source) => FileOutcome::Processed(engine.run_cancellable(&display, &source, cancel)),
        Err(e) => {
            log::warn!("cannot read {}: {}", display, e);
            FileOutcome::Failed {
                path: display,
                error: e.to_string(),
            }
        }
    }
}
