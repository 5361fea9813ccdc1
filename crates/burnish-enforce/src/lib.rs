//! Rule dispatch, transactional fixing and the convergence loop for burnish.
//!
//! A pass tokenizes the current text, runs every interested rule over each
//! token, and commits the staged changesets into a new text. The engine
//! repeats passes until one stages nothing.
//!
//! Violation codes of the built-in rules:
//! - NoDeclare, NoDeclareStrictTypes: missing or wrong `strict_types`
//! - OpenBraceFollowedByBlankLine: blank line after a class-like `{`
//! - SpaceAfterFn: spacing after an arrow function's `fn`
//! - NoNewCarbon, NoCarbonStaticMethods: banned date classes
//! - FancyPhanReturnTypeFound: array shape under `@return`

pub mod types;
pub mod suppress;
pub mod cancel;
pub mod fixer;
pub mod reporter;
pub mod rule;
pub mod dispatcher;
pub mod engine;
pub mod batch;
pub mod rules;
