use std::collections::HashMap;

use burnish_core::buffer::TokenBuffer;
use burnish_core::token::TokenKind;

use crate::fixer::Fixer;
use crate::reporter::Reporter;
use crate::rule::{Flow, Rule, RuleContext};
use crate::suppress::SuppressionManager;

/// Everything one pass produced.
#[derive(Debug)]
pub struct PassOutput {
    pub reporter: Reporter,
    pub fixer: Fixer,
}

/// Rule registry keyed by token kind.
///
/// Registration order is preserved: for any token, interested rules run in
/// the order they were registered.
pub struct Dispatcher {
    rules: Vec<Box<dyn Rule>>,
    by_kind: HashMap<TokenKind, Vec<usize>>,
}

impl Dispatcher {
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        let mut by_kind: HashMap<TokenKind, Vec<usize>> = HashMap::new();
        for (n, rule) in rules.iter().enumerate() {
            for kind in rule.interested_kinds() {
                let list = by_kind.entry(*kind).or_default();
                if !list.contains(&n) {
                    list.push(n);
                }
            }
        }
        Self { rules, by_kind }
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// One forward scan over `buffer`, invoking interested rules per token.
    pub fn run_pass(
        &self,
        buffer: &TokenBuffer,
        path: &str,
        fixing: bool,
        suppressions: &SuppressionManager,
    ) -> PassOutput {
        let mut reporter = Reporter::new();
        let mut fixer = Fixer::for_buffer(buffer);
        let mut resume_at = vec![0usize; self.rules.len()];

        for (index, token) in buffer.iter().enumerate() {
            let Some(interested) = self.by_kind.get(&token.kind) else {
                continue;
            };
            for &n in interested {
                if index < resume_at[n] {
                    continue;
                }
                let rule = &self.rules[n];
                let reported = reporter.total();
                let opened = fixer.changeset_count();
                let mut ctx = RuleContext::new(
                    buffer,
                    path,
                    rule.name(),
                    fixing,
                    &mut reporter,
                    &mut fixer,
                    suppressions,
                );
                match rule.process(&mut ctx, index) {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::SkipTo(target)) => resume_at[n] = target.max(index + 1),
                    Err(e) => {
                        log::warn!(
                            "{}: {} failed at token {}: {}",
                            path,
                            rule.name(),
                            index,
                            e
                        );
                        // nothing this call staged may commit
                        fixer.abandon_since(opened);
                        reporter.unstage_since(reported);
                    }
                }
            }
        }

        PassOutput { reporter, fixer }
    }
}
