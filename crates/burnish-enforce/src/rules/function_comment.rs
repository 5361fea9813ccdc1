use burnish_core::buffer::TokenBuffer;
use burnish_core::token::{TokenKind, METHOD_PREFIXES};

use crate::rule::{Flow, Rule, RuleContext};
use crate::types::FixError;

/// Function doc comments must keep phan array shapes out of `@return`.
///
/// `@return array{a: int}` becomes `@return array` plus a
/// `@phan-return array{a: int}` line. Comments holding only `@inheritDoc`
/// are not inspected.
pub struct FunctionComment;

impl Rule for FunctionComment {
    fn name(&self) -> &'static str {
        "Commenting.FunctionComment"
    }

    fn interested_kinds(&self) -> &[TokenKind] {
        &[TokenKind::Function]
    }

    fn process(&self, ctx: &mut RuleContext<'_>, index: usize) -> Result<Flow, FixError> {
        let buf = ctx.buffer();
        let Some((start, end)) = doc_comment_before(buf, index) else {
            return Ok(Flow::Continue);
        };

        let text = buf.text_between(start, end);
        let lines: Vec<&str> = text.split('\n').map(str::trim).collect();
        if lines.len() == 3 && lines[1] == "* @inheritDoc" {
            return Ok(Flow::Continue);
        }

        let Some(tag) = buf.find_next_where(
            &[TokenKind::DocCommentTag],
            start,
            Some(end),
            false,
            |t| t.text == "@return",
        ) else {
            return Ok(Flow::Continue);
        };
        let Some(value) = buf.find_next(&[TokenKind::DocCommentString], tag, Some(tag + 3), false) else {
            return Ok(Flow::Continue);
        };
        let return_type = buf[value].text.as_str();
        if !(return_type.contains("array{") || return_type.contains("array<")) {
            return Ok(Flow::Continue);
        }

        let line_offset = (buf[value].line - buf[start].line) as usize;
        let phan_line = lines
            .get(line_offset)
            .map(|l| l.replacen("@return", "@phan-return", 1))
            .unwrap_or_else(|| format!("* @phan-return {}", return_type));
        let indent = " ".repeat(star_indent(buf, start, tag));

        ctx.add_fixable_error(
            value,
            "FancyPhanReturnTypeFound",
            "Fancy phan return found at normal return type in doc comment",
            |fix| fix.replace(value, format!("array\n{}{}", indent, phan_line)),
        )?;
        Ok(Flow::Continue)
    }
}

/// Open and close tag of the doc comment documenting the declaration at
/// `index`, looking past whitespace and method modifiers.
fn doc_comment_before(buf: &TokenBuffer, index: usize) -> Option<(usize, usize)> {
    let mut skip = METHOD_PREFIXES.to_vec();
    skip.push(TokenKind::Whitespace);
    let end = buf.find_previous(&skip, index.checked_sub(1)?, None, true)?;
    if buf[end].kind != TokenKind::DocCommentCloseTag {
        return None;
    }
    let start = buf[end].comment_opener?;
    Some((start, end))
}

/// Width of the whitespace in front of the star on the tag's line.
fn star_indent(buf: &TokenBuffer, start: usize, tag: usize) -> usize {
    buf.find_previous(&[TokenKind::DocCommentStar], tag, Some(start), false)
        .and_then(|star| star.checked_sub(1))
        .filter(|&ws| ws > start && buf[ws].kind == TokenKind::DocCommentWhitespace)
        .map_or(0, |ws| buf[ws].length as usize)
}
