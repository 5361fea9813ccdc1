use burnish_core::token::TokenKind;

use crate::rule::{Flow, Rule, RuleContext};
use crate::types::FixError;

const STATEMENT: &str = "declare(strict_types=1);";

/// Every file must open with `declare(strict_types=1);`.
pub struct RequireStrictTypes;

impl Rule for RequireStrictTypes {
    fn name(&self) -> &'static str {
        "PHP.RequireStrictTypes"
    }

    fn interested_kinds(&self) -> &[TokenKind] {
        &[TokenKind::OpenTag]
    }

    fn process(&self, ctx: &mut RuleContext<'_>, index: usize) -> Result<Flow, FixError> {
        let buf = ctx.buffer();
        let done = Flow::SkipTo(buf.len());

        let Some(declare) = buf.find_next(&[TokenKind::Declare], index + 1, None, false) else {
            ctx.add_fixable_error(index, "NoDeclare", "declare statement not found in file", |fix| {
                fix.insert_after(index, STATEMENT)
            })?;
            return Ok(done);
        };

        let end = buf[declare].paren_closer.unwrap_or(declare);
        let text = buf.text_between(declare, end);

        if text == "declare(strict_types=0)" {
            let number = buf.find_next(&[TokenKind::LNumber], declare, Some(end + 1), false);
            ctx.add_fixable_error(
                index,
                "NoDeclareStrictTypes",
                "declare strict_types is set to false",
                |fix| match number {
                    Some(n) => fix.replace(n, "1"),
                    None => Ok(()),
                },
            )?;
        } else if text != "declare(strict_types=1)" {
            ctx.add_fixable_error(
                index,
                "NoDeclareStrictTypes",
                "declare strict_types statement not found in file",
                |fix| fix.insert_before(declare, STATEMENT),
            )?;
        }

        Ok(done)
    }
}
