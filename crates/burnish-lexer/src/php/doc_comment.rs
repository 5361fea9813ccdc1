use burnish_core::token::TokenKind;

use super::Lexer;

impl<'s> Lexer<'s> {
    /// Split a `/** ... */` block into doc-comment tokens.
    ///
    /// Newlines are always their own `DocCommentWhitespace` token, so the
    /// indent run in front of a star can be read off a single token.
    pub(super) fn doc_comment(&mut self) {
        let opener = self.push(TokenKind::DocCommentOpenTag, self.pos + 3);

        while let Some(c) = self.peek() {
            let rest = self.rest();
            if rest.starts_with("*/") {
                let closer = self.push(TokenKind::DocCommentCloseTag, self.pos + 2);
                self.tokens[opener].comment_opener = Some(opener);
                self.tokens[opener].comment_closer = Some(closer);
                self.tokens[closer].comment_opener = Some(opener);
                self.tokens[closer].comment_closer = Some(closer);
                return;
            }

            match c {
                '\n' => {
                    self.push(TokenKind::DocCommentWhitespace, self.pos + 1);
                }
                '\r' if rest.starts_with("\r\n") => {
                    self.push(TokenKind::DocCommentWhitespace, self.pos + 2);
                }
                ' ' | '\t' | '\r' => {
                    let end = self.scan_while(self.pos, |ch| matches!(ch, ' ' | '\t' | '\r'));
                    self.push(TokenKind::DocCommentWhitespace, end);
                }
                '*' => {
                    self.push(TokenKind::DocCommentStar, self.pos + 1);
                }
                '@' if self.peek_at(1).map_or(false, |ch| ch.is_alphabetic()) => {
                    let end = self.scan_while(self.pos + 1, |ch| {
                        ch.is_alphanumeric() || matches!(ch, '_' | '-' | '\\')
                    });
                    self.push(TokenKind::DocCommentTag, end);
                }
                _ => self.doc_string(),
            }
        }
        // Unterminated comment: the tokens stand without a closer.
    }

    /// Text up to the end of the line or the closing `*/`, minus trailing blanks.
    fn doc_string(&mut self) {
        let rest = self.rest();
        let mut len = rest.find('\n').unwrap_or(rest.len());
        if let Some(close) = rest[..len].find("*/") {
            len = close;
        }
        let trimmed = rest[..len].trim_end_matches(|ch: char| matches!(ch, ' ' | '\t' | '\r'));
        let len = if trimmed.is_empty() { len } else { trimmed.len() };
        self.push(TokenKind::DocCommentString, self.pos + len);
    }
}
