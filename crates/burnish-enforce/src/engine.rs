use std::collections::HashSet;

use burnish_core::buffer::Tokenizer;
use burnish_core::config::BurnishConfig;
use burnish_core::hash::content_hash;

use crate::cancel::CancellationToken;
use crate::dispatcher::Dispatcher;
use crate::rule::Rule;
use crate::rules;
use crate::suppress::SuppressionManager;
use crate::types::{FileReport, Violation};

pub const DEFAULT_MAX_PASSES: u32 = 10;

/// Convergence loop: tokenize, dispatch, commit, repeat until a pass stages
/// nothing or the pass ceiling is reached.
///
/// The engine holds no per-file state, so one instance serves every worker
/// in a batch.
pub struct Engine {
    tokenizer: Box<dyn Tokenizer>,
    dispatcher: Dispatcher,
    suppressions: SuppressionManager,
    max_passes: u32,
    fixing: bool,
}

impl Engine {
    /// An engine in check mode with the given rules, in registration order.
    pub fn new(tokenizer: Box<dyn Tokenizer>, rules: Vec<Box<dyn Rule>>) -> Self {
        Self {
            tokenizer,
            dispatcher: Dispatcher::new(rules),
            suppressions: SuppressionManager::new(),
            max_passes: DEFAULT_MAX_PASSES,
            fixing: false,
        }
    }

    /// An engine running the built-in rules enabled in `config`.
    pub fn with_config(tokenizer: Box<dyn Tokenizer>, config: &BurnishConfig) -> Self {
        Self {
            tokenizer,
            dispatcher: Dispatcher::new(rules::default_rules(config)),
            suppressions: SuppressionManager::from_codes(config.suppress.iter().cloned()),
            max_passes: config.effective_max_passes(),
            fixing: false,
        }
    }

    pub fn fixing(mut self, enabled: bool) -> Self {
        self.fixing = enabled;
        self
    }

    pub fn max_passes(mut self, max_passes: u32) -> Self {
        self.max_passes = max_passes.max(1);
        self
    }

    pub fn suppressions(mut self, suppressions: SuppressionManager) -> Self {
        self.suppressions = suppressions;
        self
    }

    pub fn is_fixing(&self) -> bool {
        self.fixing
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.dispatcher.rule_names()
    }

    pub fn run(&self, path: &str, source: &str) -> FileReport {
        self.run_cancellable(path, source, &CancellationToken::new())
    }

    /// Like [`run`](Self::run), stopping between passes once `cancel` fires.
    pub fn run_cancellable(
        &self,
        path: &str,
        source: &str,
        cancel: &CancellationToken,
    ) -> FileReport {
        let mut text = source.to_string();
        let mut seen: HashSet<String> = HashSet::new();
        seen.insert(content_hash(&text));
        let mut passes: u32 = 0;

        loop {
            passes += 1;
            let buffer = self.tokenizer.tokenize(&text);
            let pass = self
                .dispatcher
                .run_pass(&buffer, path, self.fixing, &self.suppressions);
            let staged = pass.fixer.staged_count();
            log::debug!(
                "{}: pass {} found {} violation(s), {} staged fix(es)",
                path,
                passes,
                pass.reporter.total(),
                staged
            );

            if !self.fixing || staged == 0 {
                let violations = pass.reporter.into_violations();
                return finish(path, source, text, violations, passes, None);
            }

            let mut reporter = pass.reporter;
            let outcome = pass.fixer.commit(&buffer);
            reporter.resolve(&outcome);
            let violations = reporter.into_violations();
            text = outcome.text;

            if !seen.insert(content_hash(&text)) {
                let warning = format!(
                    "fixes oscillate: pass {} reproduced an earlier text",
                    passes
                );
                log::warn!("{}: {}", path, warning);
                return finish(path, source, text, violations, passes, Some(warning));
            }

            if passes >= self.max_passes {
                let warning = format!("did not stabilize after {} passes", passes);
                log::warn!("{}: {}", path, warning);
                return finish(path, source, text, violations, passes, Some(warning));
            }

            if cancel.is_cancelled() {
                let warning = format!("cancelled after {} passes", passes);
                log::debug!("{}: {}", path, warning);
                return finish(path, source, text, violations, passes, Some(warning));
            }
        }
    }
}

fn finish(
    path: &str,
    source: &str,
    fixed_text: String,
    violations: Vec<Violation>,
    passes: u32,
    warning: Option<String>,
) -> FileReport {
    FileReport {
        path: path.to_string(),
        changed: fixed_text != source,
        fixed_text,
        violations,
        passes,
        stabilized: warning.is_none(),
        warning,
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
