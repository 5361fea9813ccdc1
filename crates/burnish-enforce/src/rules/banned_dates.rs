use burnish_core::token::TokenKind;

use crate::rule::{Flow, Rule, RuleContext};
use crate::types::FixError;

/// Bans instantiating, or calling static methods on, raw date classes.
/// Report only: the replacement facade call cannot be derived from tokens.
pub struct BannedDateInstantiation {
    banned: Vec<String>,
}

impl BannedDateInstantiation {
    pub fn new(banned: Vec<String>) -> Self {
        Self { banned }
    }

    fn is_banned(&self, name: &str) -> bool {
        let short = name.rsplit('\\').next().unwrap_or(name);
        self.banned.iter().any(|b| b == short)
    }
}

impl Rule for BannedDateInstantiation {
    fn name(&self) -> &'static str {
        "Dates.BannedDateInstantiation"
    }

    fn interested_kinds(&self) -> &[TokenKind] {
        &[TokenKind::New, TokenKind::String]
    }

    fn process(&self, ctx: &mut RuleContext<'_>, index: usize) -> Result<Flow, FixError> {
        let buf = ctx.buffer();
        let is_new = buf[index].kind == TokenKind::New;

        let class = if is_new {
            buf.find_next(&[TokenKind::String], index + 1, None, false)
        } else {
            Some(index)
        };
        let Some(class) = class else {
            return Ok(Flow::Continue);
        };
        let name = buf[class].text.as_str();
        if !self.is_banned(name) {
            return Ok(Flow::Continue);
        }

        if is_new {
            ctx.add_error(
                index,
                "NoNewCarbon",
                format!("Usage of 'new {}' is banned. Use the Date facade instead", name),
            );
        }

        let static_call = buf
            .next_non_whitespace(class + 1)
            .filter(|&colon| buf[colon].kind == TokenKind::DoubleColon)
            .and_then(|colon| buf.next_non_whitespace(colon + 1))
            .and_then(|method| buf.next_non_whitespace(method + 1))
            .map_or(false, |paren| buf[paren].kind == TokenKind::OpenParenthesis);

        if static_call {
            ctx.add_error(
                index,
                "NoCarbonStaticMethods",
                format!("Usage of static methods on {} is banned. Use Date facade instead", name),
            );
        }

        Ok(Flow::Continue)
    }
}
