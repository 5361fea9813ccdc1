//! Token search over a buffer snapshot.
//!
//! Every query is a pure function of the buffer. Bounds are token indices:
//! `from` is inclusive and `to` is exclusive. Reaching the end of the search
//! range yields `None`, which callers treat as an ordinary outcome.

use crate::buffer::TokenBuffer;
use crate::token::{Token, TokenKind};

impl TokenBuffer {
    /// Nearest index at or after `from` whose kind is in `kinds`
    /// (or, with `exclude`, whose kind is *not* in `kinds`).
    pub fn find_next(
        &self,
        kinds: &[TokenKind],
        from: usize,
        to: Option<usize>,
        exclude: bool,
    ) -> Option<usize> {
        self.find_next_where(kinds, from, to, exclude, |_| true)
    }

    /// Like [`find_next`](Self::find_next), additionally requiring `accept` to hold
    /// for the matched token.
    pub fn find_next_where<F>(
        &self,
        kinds: &[TokenKind],
        from: usize,
        to: Option<usize>,
        exclude: bool,
        accept: F,
    ) -> Option<usize>
    where
        F: Fn(&Token) -> bool,
    {
        let end = to.map_or(self.len(), |t| t.min(self.len()));
        (from..end).find(|&i| {
            let tok = &self[i];
            kinds.contains(&tok.kind) != exclude && accept(tok)
        })
    }

    /// Nearest index at or before `from` (and strictly after `to`, when given)
    /// whose kind is in `kinds`, or not in `kinds` with `exclude`.
    pub fn find_previous(
        &self,
        kinds: &[TokenKind],
        from: usize,
        to: Option<usize>,
        exclude: bool,
    ) -> Option<usize> {
        self.find_previous_where(kinds, from, to, exclude, |_| true)
    }

    pub fn find_previous_where<F>(
        &self,
        kinds: &[TokenKind],
        from: usize,
        to: Option<usize>,
        exclude: bool,
        accept: F,
    ) -> Option<usize>
    where
        F: Fn(&Token) -> bool,
    {
        if self.is_empty() {
            return None;
        }
        let start = from.min(self.len() - 1);
        let lower = to.map_or(0, |t| t + 1);
        if lower > start {
            return None;
        }
        (lower..=start).rev().find(|&i| {
            let tok = &self[i];
            kinds.contains(&tok.kind) != exclude && accept(tok)
        })
    }

    /// First index at or after `from` that is not plain whitespace.
    pub fn next_non_whitespace(&self, from: usize) -> Option<usize> {
        self.find_next(&[TokenKind::Whitespace], from, None, true)
    }

    /// Last index at or before `from` that is not plain whitespace.
    pub fn previous_non_whitespace(&self, from: usize) -> Option<usize> {
        self.find_previous(&[TokenKind::Whitespace], from, None, true)
    }
}
