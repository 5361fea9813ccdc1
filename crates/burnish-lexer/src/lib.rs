//! Tokenization and file discovery for burnish.
//!
//! - [`php`]: [`PhpTokenizer`](php::PhpTokenizer), the reference implementation of
//!   [`Tokenizer`](burnish_core::buffer::Tokenizer)
//! - [`walker`]: gitignore-aware discovery of PHP sources

pub mod php;
pub mod walker;

pub use php::PhpTokenizer;
