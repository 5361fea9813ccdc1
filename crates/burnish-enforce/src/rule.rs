//! The rule capability interface and the context rules run in.

use burnish_core::buffer::TokenBuffer;
use burnish_core::token::TokenKind;

use crate::fixer::Fixer;
use crate::reporter::Reporter;
use crate::suppress::SuppressionManager;
use crate::types::{ChangesetId, Edit, FixError, FixStatus, Violation};

/// What the dispatcher should do after a rule processed a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Do not invoke this rule again for tokens before the given index.
    SkipTo(usize),
}

/// A self-contained check over the token stream.
///
/// Rules hold configuration only. Everything about the file being checked
/// arrives through the [`RuleContext`] on each call.
pub trait Rule: Send + Sync {
    /// Stable identifier, `Category.Name`.
    fn name(&self) -> &'static str;

    /// Token kinds this rule is invoked for.
    fn interested_kinds(&self) -> &[TokenKind];

    fn process(&self, ctx: &mut RuleContext<'_>, index: usize) -> Result<Flow, FixError>;
}

/// Per-invocation view handed to [`Rule::process`].
pub struct RuleContext<'a> {
    buffer: &'a TokenBuffer,
    path: &'a str,
    rule: &'a str,
    fixing: bool,
    reporter: &'a mut Reporter,
    fixer: &'a mut Fixer,
    suppressions: &'a SuppressionManager,
}

impl<'a> RuleContext<'a> {
    pub fn new(
        buffer: &'a TokenBuffer,
        path: &'a str,
        rule: &'a str,
        fixing: bool,
        reporter: &'a mut Reporter,
        fixer: &'a mut Fixer,
        suppressions: &'a SuppressionManager,
    ) -> Self {
        Self {
            buffer,
            path,
            rule,
            fixing,
            reporter,
            fixer,
            suppressions,
        }
    }

    /// The snapshot for this pass. The reference outlives the context borrow,
    /// so tokens can be read while reporting.
    pub fn buffer(&self) -> &'a TokenBuffer {
        self.buffer
    }

    pub fn path(&self) -> &str {
        self.path
    }

    pub fn is_fixing(&self) -> bool {
        self.fixing
    }

    fn violation(&self, index: usize, code: &str, message: String, fixable: bool) -> Violation {
        let (line, column) = self
            .buffer
            .get(index)
            .map_or((0, 0), |t| (t.line, t.column));
        Violation {
            code: code.to_string(),
            rule: self.rule.to_string(),
            message,
            token_index: index,
            line,
            column,
            fixable,
            status: if fixable {
                FixStatus::Unattempted
            } else {
                FixStatus::NotFixable
            },
        }
    }

    /// Report a violation that has no fix.
    pub fn add_error(&mut self, index: usize, code: &str, message: impl Into<String>) {
        if self.suppressions.is_suppressed(code) {
            return;
        }
        let violation = self.violation(index, code, message.into(), false);
        self.reporter.report(violation);
    }

    /// Report a fixable violation and, when fixing, stage its fix.
    ///
    /// `build` runs inside one changeset opened for this violation. Every
    /// edit it makes (including those made by helpers it calls) shares that
    /// changeset, so the fix applies whole or not at all. Returns whether the
    /// fix was staged.
    ///
    /// Conflicts and out-of-range targets are settled here by marking the
    /// violation; only an unscoped edit is passed back to the caller.
    pub fn add_fixable_error<F>(
        &mut self,
        index: usize,
        code: &str,
        message: impl Into<String>,
        build: F,
    ) -> Result<bool, FixError>
    where
        F: FnOnce(&mut ChangesetScope<'_>) -> Result<(), FixError>,
    {
        if self.suppressions.is_suppressed(code) {
            return Ok(false);
        }
        let violation = self.violation(index, code, message.into(), true);
        if !self.fixing {
            self.reporter.report(violation);
            return Ok(false);
        }

        let id = self.fixer.begin_changeset(self.rule);
        let built = build(&mut ChangesetScope {
            fixer: &mut *self.fixer,
            id,
        });
        let closed = match built {
            Ok(()) => self.fixer.end_changeset(id),
            Err(err) => {
                self.fixer.abandon(id);
                Err(err)
            }
        };

        match closed {
            Ok(0) => {
                self.reporter.report(violation);
                Ok(false)
            }
            Ok(_) => {
                self.reporter.report_fixable(violation, id);
                Ok(true)
            }
            Err(FixError::UnscopedEdit) => {
                self.reporter.report(violation);
                Err(FixError::UnscopedEdit)
            }
            Err(err) => {
                log::warn!(
                    "{}: {} fix for {} at token {} dropped: {}",
                    self.path,
                    self.rule,
                    code,
                    index,
                    err
                );
                let mut violation = violation;
                violation.status = err.status();
                self.reporter.report(violation);
                Ok(false)
            }
        }
    }
}

/// Edit handle bound to one open changeset.
pub struct ChangesetScope<'f> {
    fixer: &'f mut Fixer,
    id: ChangesetId,
}

impl ChangesetScope<'_> {
    pub fn stage(&mut self, edit: Edit) -> Result<(), FixError> {
        self.fixer.stage(self.id, edit)
    }

    pub fn replace(&mut self, index: usize, text: impl Into<String>) -> Result<(), FixError> {
        self.stage(Edit::replace(index, text))
    }

    pub fn insert_before(&mut self, index: usize, text: impl Into<String>) -> Result<(), FixError> {
        self.stage(Edit::insert_before(index, text))
    }

    pub fn insert_after(&mut self, index: usize, text: impl Into<String>) -> Result<(), FixError> {
        self.stage(Edit::insert_after(index, text))
    }

    pub fn delete(&mut self, index: usize) -> Result<(), FixError> {
        self.stage(Edit::delete(index))
    }
}
