use std::collections::HashSet;

/// Violation codes that are dropped before reaching the reporter.
///
/// A suppressed code is neither reported nor fixed: the rule's fix closure
/// never runs, so suppressed findings cannot keep the convergence loop busy.
#[derive(Debug, Default, Clone)]
pub struct SuppressionManager {
    suppressed_codes: HashSet<String>,
}

impl SuppressionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            suppressed_codes: codes.into_iter().map(Into::into).collect(),
        }
    }

    /// Add a code to suppress (e.g. "SpaceAfterFn").
    pub fn suppress(&mut self, code: &str) {
        self.suppressed_codes.insert(code.to_string());
    }

    pub fn is_suppressed(&self, code: &str) -> bool {
        self.suppressed_codes.contains(code)
    }

    /// Number of active suppressions.
    pub fn count(&self) -> usize {
        self.suppressed_codes.len()
    }
}
