//! A tokenizer for the subset of PHP that burnish rules inspect.
//!
//! The lexer is total: unrecognised input becomes `Unknown` tokens, and the
//! concatenated token texts always reproduce the input byte for byte.

mod doc_comment;
mod structure;

use burnish_core::buffer::{TokenBuffer, Tokenizer};
use burnish_core::token::{Token, TokenKind};

const OPERATOR_CHARS: &str = "+-*/%<>!&|^~?.@=";

/// Reference [`Tokenizer`] for PHP sources.
#[derive(Debug, Default, Clone, Copy)]
pub struct PhpTokenizer;

impl PhpTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for PhpTokenizer {
    fn tokenize(&self, source: &str) -> TokenBuffer {
        let mut tokens = Lexer::new(source).run();
        structure::link(&mut tokens);
        TokenBuffer::new(tokens)
    }
}

pub(crate) struct Lexer<'s> {
    src: &'s str,
    pos: usize,
    line: u32,
    column: u32,
    tokens: Vec<Token>,
}

impl<'s> Lexer<'s> {
    fn new(src: &'s str) -> Self {
        Self {
            src,
            pos: 0,
            line: 1,
            column: 1,
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Token> {
        let mut in_php = false;
        while self.pos < self.src.len() {
            if in_php {
                in_php = self.php_token();
            } else {
                in_php = self.inline_html();
            }
        }
        self.tokens
    }

    // -- cursor helpers --

    pub(crate) fn rest(&self) -> &'s str {
        &self.src[self.pos..]
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub(crate) fn peek_at(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    /// Emit the text between the cursor and `end` (a byte offset) as one token.
    pub(crate) fn push(&mut self, kind: TokenKind, end: usize) -> usize {
        let text = &self.src[self.pos..end];
        self.tokens
            .push(Token::new(kind, text, self.line, self.column));
        for c in text.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos = end;
        self.tokens.len() - 1
    }

    /// Byte offset after consuming chars from the cursor while `pred` holds.
    pub(crate) fn scan_while<F: Fn(char) -> bool>(&self, from: usize, pred: F) -> usize {
        let mut end = from;
        for c in self.src[from..].chars() {
            if !pred(c) {
                break;
            }
            end += c.len_utf8();
        }
        end
    }

    // -- inline html and tags --

    fn inline_html(&mut self) -> bool {
        match find_open_tag(self.rest()) {
            Some(0) => {
                let mut end = self.pos + 5;
                let after = &self.src[end..];
                if after.starts_with("\r\n") {
                    end += 2;
                } else if after.starts_with('\n') || after.starts_with(' ') || after.starts_with('\t') {
                    end += 1;
                }
                self.push(TokenKind::OpenTag, end);
                true
            }
            Some(offset) => {
                self.push(TokenKind::InlineHtml, self.pos + offset);
                false
            }
            None => {
                self.push(TokenKind::InlineHtml, self.src.len());
                false
            }
        }
    }

    /// Lex one token of PHP code. Returns whether we are still in PHP mode.
    fn php_token(&mut self) -> bool {
        let rest = self.rest();
        let Some(c) = self.peek() else {
            return false;
        };

        if rest.starts_with("?>") {
            let mut end = self.pos + 2;
            if self.src[end..].starts_with('\n') {
                end += 1;
            }
            self.push(TokenKind::CloseTag, end);
            return false;
        }

        if matches!(c, ' ' | '\t' | '\r' | '\n') {
            self.whitespace();
        } else if rest.starts_with("/**") && rest[3..].starts_with(|ch: char| ch.is_whitespace()) {
            self.doc_comment();
        } else if rest.starts_with("/*") {
            let end = rest[2..]
                .find("*/")
                .map_or(self.src.len(), |i| self.pos + 2 + i + 2);
            self.push(TokenKind::Comment, end);
        } else if rest.starts_with("//") || c == '#' {
            self.line_comment();
        } else if c == '$' && self.peek_at(1).map_or(false, is_ident_start) {
            let end = self.scan_while(self.pos + 1, is_ident_char);
            self.push(TokenKind::Variable, end);
        } else if is_ident_start(c) || c == '\\' {
            self.identifier();
        } else if c.is_ascii_digit() {
            self.number();
        } else if c == '\'' || c == '"' {
            self.quoted(c);
        } else {
            self.punctuation(c);
        }
        true
    }

    fn whitespace(&mut self) {
        let mut end = self.pos;
        for c in self.rest().chars() {
            match c {
                '\n' => {
                    end += 1;
                    break;
                }
                ' ' | '\t' | '\r' => end += 1,
                _ => break,
            }
        }
        self.push(TokenKind::Whitespace, end);
    }

    fn line_comment(&mut self) {
        let rest = self.rest();
        let mut end = rest.len();
        if let Some(nl) = rest.find('\n') {
            end = nl;
        }
        if let Some(close) = rest[..end].find("?>") {
            end = close;
        }
        self.push(TokenKind::Comment, self.pos + end);
    }

    fn identifier(&mut self) {
        let end = self.scan_while(self.pos, |ch| is_ident_char(ch) || ch == '\\');
        let word = &self.src[self.pos..end];
        let after_member_access = matches!(
            self.last_significant_kind(),
            Some(TokenKind::DoubleColon) | Some(TokenKind::ObjectOperator)
        );
        let kind = if after_member_access {
            TokenKind::String
        } else {
            TokenKind::keyword(word).unwrap_or(TokenKind::String)
        };
        self.push(kind, end);
    }

    fn number(&mut self) {
        let rest = self.rest();
        if rest.starts_with("0x") || rest.starts_with("0X") || rest.starts_with("0b") || rest.starts_with("0B") {
            let end = self.scan_while(self.pos + 2, |ch| ch.is_ascii_alphanumeric() || ch == '_');
            self.push(TokenKind::LNumber, end);
            return;
        }
        let mut end = self.scan_while(self.pos, |ch| ch.is_ascii_digit() || ch == '_');
        let mut kind = TokenKind::LNumber;
        let tail = &self.src[end..];
        if tail.starts_with('.') && tail[1..].starts_with(|ch: char| ch.is_ascii_digit()) {
            end = self.scan_while(end + 1, |ch| ch.is_ascii_digit() || ch == '_');
            kind = TokenKind::DNumber;
        }
        let tail = &self.src[end..];
        if tail.starts_with(|ch: char| ch == 'e' || ch == 'E') {
            let mut exp = end + 1;
            if self.src[exp..].starts_with(|ch: char| ch == '+' || ch == '-') {
                exp += 1;
            }
            if self.src[exp..].starts_with(|ch: char| ch.is_ascii_digit()) {
                end = self.scan_while(exp, |ch| ch.is_ascii_digit());
                kind = TokenKind::DNumber;
            }
        }
        self.push(kind, end);
    }

    fn quoted(&mut self, quote: char) {
        let mut end = self.pos + 1;
        let mut escaped = false;
        let mut closed = false;
        for c in self.src[end..].chars() {
            end += c.len_utf8();
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == quote {
                closed = true;
                break;
            }
        }
        if !closed {
            end = self.src.len();
        }
        self.push(TokenKind::ConstantEncapsedString, end);
    }

    fn punctuation(&mut self, c: char) {
        let rest = self.rest();
        let fixed = [
            ("::", TokenKind::DoubleColon),
            ("=>", TokenKind::DoubleArrow),
            ("->", TokenKind::ObjectOperator),
        ];
        for (text, kind) in fixed {
            if rest.starts_with(text) {
                self.push(kind, self.pos + text.len());
                return;
            }
        }

        let single = match c {
            '{' => Some(TokenKind::OpenCurlyBracket),
            '}' => Some(TokenKind::CloseCurlyBracket),
            '(' => Some(TokenKind::OpenParenthesis),
            ')' => Some(TokenKind::CloseParenthesis),
            '[' => Some(TokenKind::OpenSquareBracket),
            ']' => Some(TokenKind::CloseSquareBracket),
            ';' => Some(TokenKind::Semicolon),
            ',' => Some(TokenKind::Comma),
            ':' => Some(TokenKind::Colon),
            '=' if !rest.starts_with("==") => Some(TokenKind::Equal),
            _ => None,
        };
        if let Some(kind) = single {
            self.push(kind, self.pos + 1);
            return;
        }

        if OPERATOR_CHARS.contains(c) {
            let mut end = self.pos;
            for ch in rest.chars() {
                let here = &self.src[end..];
                let starts_other = end > self.pos
                    && (here.starts_with("//")
                        || here.starts_with("/*")
                        || here.starts_with("?>")
                        || here.starts_with("=>")
                        || here.starts_with("->"));
                if !OPERATOR_CHARS.contains(ch) || starts_other {
                    break;
                }
                end += ch.len_utf8();
            }
            self.push(TokenKind::Operator, end);
            return;
        }

        self.push(TokenKind::Unknown, self.pos + c.len_utf8());
    }

    fn last_significant_kind(&self) -> Option<TokenKind> {
        self.tokens
            .iter()
            .rev()
            .map(|t| t.kind)
            .find(|k| !matches!(k, TokenKind::Whitespace | TokenKind::Comment))
    }
}

fn find_open_tag(text: &str) -> Option<usize> {
    let lower = text.to_ascii_lowercase();
    lower.find("<?php")
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
