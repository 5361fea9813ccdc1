use std::ops::Index;

use crate::token::Token;

// ---------------------------------------------------------------------------
// Tokenizer contract
// ---------------------------------------------------------------------------

/// Turns source text into an ordered token buffer.
///
/// Implementations must be total (every input produces a buffer) and
/// deterministic (identical input produces an identical buffer). They must be
/// `Send + Sync` so one tokenizer can serve every rayon worker in a batch.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, source: &str) -> TokenBuffer;
}

// ---------------------------------------------------------------------------
// Token buffer
// ---------------------------------------------------------------------------

/// The arena of tokens for one pass.
///
/// A buffer is never mutated once built. Fixes produce new source text which
/// is tokenized into a fresh buffer for the next pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenBuffer {
    tokens: Vec<Token>,
}

impl TokenBuffer {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Concatenated text of the tokens in `start..=end`. Out-of-range bounds are clamped.
    pub fn text_between(&self, start: usize, end: usize) -> String {
        if self.tokens.is_empty() || start > end {
            return String::new();
        }
        let end = end.min(self.tokens.len() - 1);
        self.tokens
            .get(start..=end)
            .map(|slice| slice.iter().map(|t| t.text.as_str()).collect())
            .unwrap_or_default()
    }

    /// Reassemble the source the buffer was built from.
    pub fn to_source(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }
}

impl Index<usize> for TokenBuffer {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenBuffer {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
