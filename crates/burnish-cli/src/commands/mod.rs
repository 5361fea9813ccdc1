pub mod check;
pub mod fix;

use std::path::{Path, PathBuf};

use burnish_core::config::BurnishConfig;
use burnish_enforce::batch::FileOutcome;
use burnish_enforce::engine::Engine;
use burnish_enforce::types::FileReport;
use burnish_lexer::walker::SourceWalker;
use burnish_lexer::PhpTokenizer;

/// Options shared by `check` and `fix`.
pub struct RunOptions {
    pub json: bool,
    pub config: Option<PathBuf>,
    pub paths: Vec<PathBuf>,
    pub suppress: Vec<String>,
}

/// Load the config: an explicit file must parse, the default location falls
/// back to defaults.
pub(crate) fn load_config(cmd: &str, explicit: Option<&Path>) -> Result<BurnishConfig, i32> {
    if let Some(path) = explicit {
        return BurnishConfig::from_file(path).map_err(|e| {
            eprintln!("burnish {}: {}", cmd, e);
            2
        });
    }
    let cwd = std::env::current_dir().map_err(|e| {
        eprintln!("burnish {}: failed to get current directory: {}", cmd, e);
        2
    })?;
    Ok(BurnishConfig::load(&cwd.join(".burnish")))
}

/// Expand the requested paths into a sorted list of PHP sources.
pub(crate) fn collect_sources(
    cmd: &str,
    paths: &[PathBuf],
    config: &BurnishConfig,
) -> Result<Vec<PathBuf>, i32> {
    let roots = if paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        paths.to_vec()
    };
    for root in &roots {
        if !root.exists() {
            eprintln!("burnish {}: no such file or directory: {}", cmd, root.display());
            return Err(2);
        }
    }
    let sources = SourceWalker::with_roots(roots, &config.ignore_patterns).walk();
    log::debug!("{} source file(s) selected", sources.len());
    Ok(sources)
}

pub(crate) fn build_engine(config: &mut BurnishConfig, suppress: &[String]) -> Engine {
    config.suppress.extend(suppress.iter().cloned());
    Engine::with_config(Box::new(PhpTokenizer::new()), config)
}

/// One line per violation: `path:line:col CODE message [fixable]`.
pub(crate) fn format_report_human(report: &FileReport) -> String {
    let mut out = String::new();
    for v in &report.violations {
        out.push_str(&format!(
            "{}:{}:{} {} {}",
            report.path, v.line, v.column, v.code, v.message
        ));
        if v.fixable {
            out.push_str(" [fixable]");
        }
        out.push('\n');
    }
    if let Some(warning) = &report.warning {
        out.push_str(&format!("{}: warning: {}\n", report.path, warning));
    }
    out
}

pub(crate) fn print_outcomes(outcomes: &[FileOutcome], json: bool) {
    if json {
        match serde_json::to_string_pretty(outcomes) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("burnish: failed to serialize output: {}", e),
        }
        return;
    }
    for outcome in outcomes {
        match outcome {
            FileOutcome::Processed(report) => print!("{}", format_report_human(report)),
            FileOutcome::Failed { path, error } => eprintln!("{}: error: {}", path, error),
            FileOutcome::Cancelled { path } => eprintln!("{}: skipped (cancelled)", path),
        }
    }
}
