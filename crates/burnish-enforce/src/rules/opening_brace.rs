use burnish_core::token::TokenKind;

use crate::rule::{Flow, Rule, RuleContext};
use crate::types::FixError;

/// A class, trait or interface body must not start with a blank line.
pub struct OpeningBrace;

impl Rule for OpeningBrace {
    fn name(&self) -> &'static str {
        "Classes.OpeningBrace"
    }

    fn interested_kinds(&self) -> &[TokenKind] {
        &[TokenKind::Class, TokenKind::Trait, TokenKind::Interface]
    }

    fn process(&self, ctx: &mut RuleContext<'_>, index: usize) -> Result<Flow, FixError> {
        let buf = ctx.buffer();
        let done = Flow::SkipTo(buf.len());

        let Some(opener) = buf[index].scope_opener else {
            return Ok(Flow::Continue);
        };
        let Some(next) = buf.next_non_whitespace(opener + 1) else {
            return Ok(done);
        };

        let opener_line = buf[opener].line;
        let next_line = buf[next].line;
        if next_line <= opener_line + 1 {
            return Ok(done);
        }

        ctx.add_fixable_error(
            opener,
            "OpenBraceFollowedByBlankLine",
            "Opening brace must not be succeeded by a blank line",
            |fix| {
                for x in opener + 1..next {
                    let line = buf[x].line;
                    if line == opener_line {
                        // keep the brace's own newline
                        continue;
                    }
                    if line == next_line {
                        // keep the indent of the first statement
                        break;
                    }
                    fix.delete(x)?;
                }
                Ok(())
            },
        )?;

        Ok(done)
    }
}
