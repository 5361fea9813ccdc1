use crate::fixer::CommitOutcome;
use crate::types::{ChangesetId, FixStatus, Violation};

/// Pass-scoped, ordered violation list.
///
/// Reports are never merged: two findings for the same token and code are
/// both kept.
#[derive(Debug, Default)]
pub struct Reporter {
    violations: Vec<Violation>,
    changesets: Vec<Option<ChangesetId>>,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a violation. Returns its position in the report.
    pub fn report(&mut self, violation: Violation) -> usize {
        self.violations.push(violation);
        self.changesets.push(None);
        self.violations.len() - 1
    }

    /// Append a fixable violation backed by the staged changeset `changeset`.
    pub fn report_fixable(&mut self, mut violation: Violation, changeset: ChangesetId) -> usize {
        violation.fixable = true;
        violation.status = FixStatus::Staged;
        let at = self.report(violation);
        self.changesets[at] = Some(changeset);
        at
    }

    /// Settle staged violations against a commit: applied changesets become
    /// `Fixed`, rejected ones take the status of their error.
    pub fn resolve(&mut self, outcome: &CommitOutcome) {
        for (violation, changeset) in self.violations.iter_mut().zip(&self.changesets) {
            let Some(id) = changeset else { continue };
            if violation.status != FixStatus::Staged {
                continue;
            }
            violation.status = match outcome.error_for(*id) {
                Some(err) => err.status(),
                None if outcome.applied.contains(id) => FixStatus::Fixed,
                None => FixStatus::Unattempted,
            };
        }
    }

    /// Reset violations reported at or after position `mark` whose fix was
    /// staged. Their changesets no longer count.
    pub fn unstage_since(&mut self, mark: usize) {
        let tail = self.violations.iter_mut().zip(&mut self.changesets).skip(mark);
        for (violation, changeset) in tail {
            if violation.status == FixStatus::Staged {
                violation.status = FixStatus::Unattempted;
                *changeset = None;
            }
        }
    }

    pub fn total(&self) -> usize {
        self.violations.len()
    }

    pub fn fixable_count(&self) -> usize {
        self.violations.iter().filter(|v| v.fixable).count()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}
