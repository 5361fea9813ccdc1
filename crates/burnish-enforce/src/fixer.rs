//! Transactional fixer.
//!
//! Edits are grouped into changesets. Every token index may be claimed by at
//! most one changeset per pass; a changeset that loses a claim is poisoned and
//! dropped whole when it is closed. Nothing touches the token buffer until
//! [`Fixer::commit`], which renders a fresh source text in one left-to-right
//! walk.

use std::collections::{BTreeMap, HashMap};

use burnish_core::buffer::TokenBuffer;

use crate::types::{ChangesetId, Edit, EditKind, FixError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Open,
    Closed,
    Dropped,
}

#[derive(Debug)]
struct Changeset {
    rule: String,
    edits: Vec<Edit>,
    state: State,
    /// First failure seen while open. A poisoned changeset never commits.
    poison: Option<FixError>,
}

/// Result of [`Fixer::commit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitOutcome {
    pub text: String,
    pub applied: Vec<ChangesetId>,
    pub rejected: Vec<(ChangesetId, FixError)>,
}

impl CommitOutcome {
    pub fn error_for(&self, id: ChangesetId) -> Option<&FixError> {
        self.rejected
            .iter()
            .find(|(rejected, _)| *rejected == id)
            .map(|(_, e)| e)
    }
}

/// Pass-scoped edit staging area for one token buffer.
#[derive(Debug)]
pub struct Fixer {
    len: usize,
    changesets: Vec<Changeset>,
    claims: HashMap<usize, ChangesetId>,
}

impl Fixer {
    /// A fixer for a buffer holding `len` tokens.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            changesets: Vec::new(),
            claims: HashMap::new(),
        }
    }

    pub fn for_buffer(buffer: &TokenBuffer) -> Self {
        Self::new(buffer.len())
    }

    pub fn begin_changeset(&mut self, rule: &str) -> ChangesetId {
        let id = ChangesetId(self.changesets.len());
        self.changesets.push(Changeset {
            rule: rule.to_string(),
            edits: Vec::new(),
            state: State::Open,
            poison: None,
        });
        id
    }

    pub fn is_open(&self, id: ChangesetId) -> bool {
        self.changesets
            .get(id.0)
            .map_or(false, |cs| cs.state == State::Open)
    }

    /// Stage `edit` in the open changeset `id`, claiming its token index.
    pub fn stage(&mut self, id: ChangesetId, edit: Edit) -> Result<(), FixError> {
        if !self.is_open(id) {
            return Err(FixError::UnscopedEdit);
        }
        if let Some(err) = &self.changesets[id.0].poison {
            return Err(err.clone());
        }

        let index = edit.index;
        let failure = if index >= self.len {
            Some(FixError::InvalidEditTarget {
                index,
                len: self.len,
            })
        } else {
            match self.claims.get(&index) {
                Some(&held_by) if held_by == id && self.deletes(id, index) => {
                    Some(FixError::InvalidEditTarget {
                        index,
                        len: self.len,
                    })
                }
                Some(&held_by) => Some(FixError::EditConflict { index, held_by }),
                None => None,
            }
        };

        if let Some(err) = failure {
            log::debug!(
                "changeset {} ({}) poisoned: {}",
                id,
                self.changesets[id.0].rule,
                err
            );
            self.release(id);
            self.changesets[id.0].poison = Some(err.clone());
            return Err(err);
        }

        self.claims.insert(index, id);
        self.changesets[id.0].edits.push(edit);
        Ok(())
    }

    pub fn replace(
        &mut self,
        id: ChangesetId,
        index: usize,
        text: impl Into<String>,
    ) -> Result<(), FixError> {
        self.stage(id, Edit::replace(index, text))
    }

    pub fn insert_before(
        &mut self,
        id: ChangesetId,
        index: usize,
        text: impl Into<String>,
    ) -> Result<(), FixError> {
        self.stage(id, Edit::insert_before(index, text))
    }

    pub fn insert_after(
        &mut self,
        id: ChangesetId,
        index: usize,
        text: impl Into<String>,
    ) -> Result<(), FixError> {
        self.stage(id, Edit::insert_after(index, text))
    }

    pub fn delete(&mut self, id: ChangesetId, index: usize) -> Result<(), FixError> {
        self.stage(id, Edit::delete(index))
    }

    /// Close changeset `id`. Returns the number of staged edits, or the error
    /// that poisoned it, in which case the changeset is dropped.
    pub fn end_changeset(&mut self, id: ChangesetId) -> Result<usize, FixError> {
        if !self.is_open(id) {
            return Err(FixError::UnscopedEdit);
        }
        let cs = &mut self.changesets[id.0];
        match cs.poison.clone() {
            Some(err) => {
                cs.state = State::Dropped;
                cs.edits.clear();
                Err(err)
            }
            None => {
                cs.state = State::Closed;
                Ok(cs.edits.len())
            }
        }
    }

    /// Drop changeset `id` and free every token it claimed.
    pub fn abandon(&mut self, id: ChangesetId) {
        if id.0 >= self.changesets.len() {
            return;
        }
        self.release(id);
        let cs = &mut self.changesets[id.0];
        cs.state = State::Dropped;
        cs.edits.clear();
    }

    /// Drop every changeset opened at or after position `mark`.
    pub fn abandon_since(&mut self, mark: usize) {
        for n in mark..self.changesets.len() {
            self.abandon(ChangesetId(n));
        }
    }

    /// Number of changesets opened so far, usable as a mark for
    /// [`Fixer::abandon_since`].
    pub fn changeset_count(&self) -> usize {
        self.changesets.len()
    }

    /// Closed changesets holding at least one edit.
    pub fn staged_count(&self) -> usize {
        self.changesets
            .iter()
            .filter(|cs| cs.state == State::Closed && !cs.edits.is_empty())
            .count()
    }

    /// Whether changeset `id` already removed token `index`.
    fn deletes(&self, id: ChangesetId, index: usize) -> bool {
        self.changesets[id.0]
            .edits
            .iter()
            .any(|e| e.index == index && e.kind == EditKind::Delete)
    }

    fn release(&mut self, id: ChangesetId) {
        self.claims.retain(|_, holder| *holder != id);
    }

    /// Apply every closed changeset to `buffer` and render the new text.
    ///
    /// Changesets still open are discarded. Each closed changeset is checked
    /// again against `buffer` and either applies in full or not at all.
    pub fn commit(self, buffer: &TokenBuffer) -> CommitOutcome {
        let mut applied = Vec::new();
        let mut rejected = Vec::new();
        let mut edits: BTreeMap<usize, (ChangesetId, &Edit)> = BTreeMap::new();

        for (n, cs) in self.changesets.iter().enumerate() {
            let id = ChangesetId(n);
            match cs.state {
                State::Dropped => continue,
                State::Open => {
                    log::warn!("discarding changeset {} ({}) left open at commit", id, cs.rule);
                    rejected.push((id, FixError::UnscopedEdit));
                    continue;
                }
                State::Closed if cs.edits.is_empty() => continue,
                State::Closed => {}
            }

            match validate(id, cs, &edits, buffer.len()) {
                Ok(()) => {
                    for edit in &cs.edits {
                        edits.insert(edit.index, (id, edit));
                    }
                    applied.push(id);
                }
                Err(err) => {
                    log::warn!("rejecting changeset {} ({}): {}", id, cs.rule, err);
                    rejected.push((id, err));
                }
            }
        }

        let text = if edits.is_empty() {
            buffer.to_source()
        } else {
            render(buffer, &edits)
        };

        log::debug!(
            "committed {} changeset(s), {} edit(s), {} rejected",
            applied.len(),
            edits.len(),
            rejected.len()
        );

        CommitOutcome {
            text,
            applied,
            rejected,
        }
    }
}

fn render(buffer: &TokenBuffer, edits: &BTreeMap<usize, (ChangesetId, &Edit)>) -> String {
    let mut text = String::with_capacity(buffer.iter().map(|t| t.text.len()).sum());
    for (index, token) in buffer.iter().enumerate() {
        match edits.get(&index) {
            Some((_, edit)) => edit.apply(&token.text, &mut text),
            None => text.push_str(&token.text),
        }
    }
    text
}

fn validate(
    id: ChangesetId,
    cs: &Changeset,
    taken: &BTreeMap<usize, (ChangesetId, &Edit)>,
    len: usize,
) -> Result<(), FixError> {
    let mut mine: Vec<&Edit> = Vec::with_capacity(cs.edits.len());
    for edit in &cs.edits {
        let index = edit.index;
        if index >= len {
            return Err(FixError::InvalidEditTarget { index, len });
        }
        if let Some((held_by, _)) = taken.get(&index) {
            return Err(FixError::EditConflict {
                index,
                held_by: *held_by,
            });
        }
        if let Some(earlier) = mine.iter().find(|e| e.index == index) {
            return Err(match earlier.kind {
                EditKind::Delete => FixError::InvalidEditTarget { index, len },
                _ => FixError::EditConflict { index, held_by: id },
            });
        }
        mine.push(edit);
    }
    Ok(())
}

#[cfg(test)]
#[path = "fixer_tests.rs"]
mod tests;
