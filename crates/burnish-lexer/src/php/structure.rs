//! Bracket matching and owner linking.
//!
//! Runs once over the finished token list and fills in the scope and
//! parenthesis pointers. Unbalanced brackets are left unlinked.

use burnish_core::token::{Token, TokenKind, SCOPE_OWNERS};

pub(crate) fn link(tokens: &mut [Token]) {
    link_parens(tokens);
    link_braces(tokens);
    link_scope_owners(tokens);
}

fn link_parens(tokens: &mut [Token]) {
    let mut stack: Vec<usize> = Vec::new();
    for i in 0..tokens.len() {
        match tokens[i].kind {
            TokenKind::OpenParenthesis => stack.push(i),
            TokenKind::CloseParenthesis => {
                let Some(open) = stack.pop() else { continue };
                for idx in [open, i] {
                    tokens[idx].paren_opener = Some(open);
                    tokens[idx].paren_closer = Some(i);
                }
                for owner in paren_owners(tokens, open) {
                    tokens[owner].paren_opener = Some(open);
                    tokens[owner].paren_closer = Some(i);
                }
            }
            _ => {}
        }
    }
}

/// Tokens that own the parenthesis at `open`: `declare`, `fn`, or a
/// function name together with its `function` keyword.
fn paren_owners(tokens: &[Token], open: usize) -> Vec<usize> {
    let Some(prev) = previous_code(tokens, open) else {
        return vec![];
    };
    match tokens[prev].kind {
        TokenKind::Declare | TokenKind::Fn | TokenKind::Function => vec![prev],
        TokenKind::String => match previous_code(tokens, prev) {
            Some(kw) if tokens[kw].kind == TokenKind::Function => vec![prev, kw],
            _ => vec![],
        },
        _ => vec![],
    }
}

fn previous_code(tokens: &[Token], before: usize) -> Option<usize> {
    (0..before)
        .rev()
        .find(|&i| !matches!(tokens[i].kind, TokenKind::Whitespace | TokenKind::Comment))
}

fn link_braces(tokens: &mut [Token]) {
    let mut stack: Vec<usize> = Vec::new();
    for i in 0..tokens.len() {
        match tokens[i].kind {
            TokenKind::OpenCurlyBracket => stack.push(i),
            TokenKind::CloseCurlyBracket => {
                let Some(open) = stack.pop() else { continue };
                for idx in [open, i] {
                    tokens[idx].scope_opener = Some(open);
                    tokens[idx].scope_closer = Some(i);
                }
            }
            _ => {}
        }
    }
}

/// A scope owner's body is the first `{` after it, unless a `;` comes first
/// (abstract and interface methods have no body).
fn link_scope_owners(tokens: &mut [Token]) {
    for i in 0..tokens.len() {
        if !SCOPE_OWNERS.contains(&tokens[i].kind) {
            continue;
        }
        let body = (i + 1..tokens.len()).find(|&j| {
            matches!(
                tokens[j].kind,
                TokenKind::OpenCurlyBracket | TokenKind::Semicolon
            )
        });
        let Some(open) = body.filter(|&j| tokens[j].kind == TokenKind::OpenCurlyBracket) else {
            continue;
        };
        // An unmatched brace leaves the owner unlinked.
        if let Some(close) = tokens[open].scope_closer {
            tokens[i].scope_opener = Some(open);
            tokens[i].scope_closer = Some(close);
        }
    }
}
