use burnish_core::token::TokenKind;

use crate::rule::{Flow, Rule, RuleContext};
use crate::types::FixError;

/// Arrow functions take exactly one space after `fn`.
pub struct ShortFunctionSpacing;

enum Gap {
    Newline,
    Spaces(u32),
}

impl Rule for ShortFunctionSpacing {
    fn name(&self) -> &'static str {
        "Functions.ShortFunctionSpacing"
    }

    fn interested_kinds(&self) -> &[TokenKind] {
        &[TokenKind::Fn]
    }

    fn process(&self, ctx: &mut RuleContext<'_>, index: usize) -> Result<Flow, FixError> {
        let buf = ctx.buffer();
        let Some(after) = buf.get(index + 1) else {
            return Ok(Flow::Continue);
        };

        let gap = match after.kind {
            TokenKind::Whitespace if after.ends_line() => Gap::Newline,
            TokenKind::Whitespace => Gap::Spaces(after.length),
            TokenKind::OpenParenthesis => Gap::Spaces(0),
            _ => return Ok(Flow::Continue),
        };

        let found = match gap {
            Gap::Spaces(1) => return Ok(Flow::Continue),
            Gap::Spaces(n) => n.to_string(),
            Gap::Newline => "newline".to_string(),
        };
        let insert = matches!(gap, Gap::Spaces(0));

        ctx.add_fixable_error(
            index,
            "SpaceAfterFn",
            format!("Expected 1 space after FN keyword; {} found", found),
            |fix| {
                if insert {
                    fix.insert_after(index, " ")
                } else {
                    fix.replace(index + 1, " ")
                }
            },
        )?;
        Ok(Flow::Continue)
    }
}
