//! Small rules used to provoke engine behaviour the built-in rules never do.

use burnish_core::token::TokenKind;
use burnish_enforce::rule::{Flow, Rule, RuleContext};
use burnish_enforce::types::FixError;

/// Lowercases an uppercase `FN` keyword in place.
///
/// Targets the same token `Functions.ShortFunctionSpacing` inserts after, so
/// the two collide whenever `FN(` appears.
pub struct LowercaseFn;

impl Rule for LowercaseFn {
    fn name(&self) -> &'static str {
        "Test.LowercaseFn"
    }

    fn interested_kinds(&self) -> &[TokenKind] {
        &[TokenKind::Fn]
    }

    fn process(&self, ctx: &mut RuleContext<'_>, index: usize) -> Result<Flow, FixError> {
        let text = ctx.buffer()[index].text.as_str();
        if text != "fn" {
            let lowered = text.to_lowercase();
            ctx.add_fixable_error(index, "LowercaseFn", "fn must be lowercase", |fix| {
                fix.replace(index, lowered)
            })?;
        }
        Ok(Flow::Continue)
    }
}

/// Swaps `$a` and `$b` every pass. Never converges.
pub struct SwapVariables;

impl Rule for SwapVariables {
    fn name(&self) -> &'static str {
        "Test.SwapVariables"
    }

    fn interested_kinds(&self) -> &[TokenKind] {
        &[TokenKind::Variable]
    }

    fn process(&self, ctx: &mut RuleContext<'_>, index: usize) -> Result<Flow, FixError> {
        let swapped = match ctx.buffer()[index].text.as_str() {
            "$a" => "$b",
            "$b" => "$a",
            _ => return Ok(Flow::Continue),
        };
        ctx.add_fixable_error(index, "SwapVariables", "swap", |fix| {
            fix.replace(index, swapped)
        })?;
        Ok(Flow::Continue)
    }
}

/// Appends one `;` to the first `;` of the file every pass, so the text
/// grows without ever repeating.
pub struct GrowForever;

impl Rule for GrowForever {
    fn name(&self) -> &'static str {
        "Test.GrowForever"
    }

    fn interested_kinds(&self) -> &[TokenKind] {
        &[TokenKind::Semicolon]
    }

    fn process(&self, ctx: &mut RuleContext<'_>, index: usize) -> Result<Flow, FixError> {
        let end = ctx.buffer().len();
        ctx.add_fixable_error(index, "GrowForever", "more", |fix| {
            fix.insert_after(index, ";")
        })?;
        Ok(Flow::SkipTo(end))
    }
}
