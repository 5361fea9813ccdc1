//! Built-in rules.
//!
//! - `PHP.RequireStrictTypes`: files must declare `strict_types=1`
//! - `Classes.OpeningBrace`: no blank line after a class-like opening brace
//! - `Functions.ShortFunctionSpacing`: exactly one space after `fn`
//! - `Dates.BannedDateInstantiation`: no `new Carbon` or `Carbon::now()`
//! - `Commenting.FunctionComment`: no phan-style array shapes under `@return`

pub mod banned_dates;
pub mod function_comment;
pub mod opening_brace;
pub mod require_strict_types;
pub mod short_function_spacing;

use burnish_core::config::BurnishConfig;

use crate::rule::Rule;

pub use banned_dates::BannedDateInstantiation;
pub use function_comment::FunctionComment;
pub use opening_brace::OpeningBrace;
pub use require_strict_types::RequireStrictTypes;
pub use short_function_spacing::ShortFunctionSpacing;

/// The enabled built-in rules, in their fixed registration order.
pub fn default_rules(config: &BurnishConfig) -> Vec<Box<dyn Rule>> {
    let toggles = &config.rules;
    let mut rules: Vec<Box<dyn Rule>> = Vec::new();
    if toggles.require_strict_types {
        rules.push(Box::new(RequireStrictTypes));
    }
    if toggles.opening_brace {
        rules.push(Box::new(OpeningBrace));
    }
    if toggles.short_function_spacing {
        rules.push(Box::new(ShortFunctionSpacing));
    }
    if toggles.banned_date_instantiation {
        rules.push(Box::new(BannedDateInstantiation::new(
            config.banned_date_classes.clone(),
        )));
    }
    if toggles.function_comment {
        rules.push(Box::new(FunctionComment));
    }
    rules
}
