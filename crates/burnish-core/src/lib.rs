//! Core types, token storage, and configuration for burnish.
//!
//! This crate provides the foundational data structures used across all burnish crates:
//! - [`token`]: the closed [`TokenKind`](token::TokenKind) vocabulary and the [`Token`](token::Token) value
//! - [`buffer`]: the immutable per-pass [`TokenBuffer`](buffer::TokenBuffer) and the [`Tokenizer`](buffer::Tokenizer) trait
//! - [`navigator`]: forward/backward token search over a buffer snapshot
//! - [`config`]: configuration loading from `.burnish/burnish.json`
//! - [`hash`]: deterministic content hashing (base62 of xxhash64)

pub mod buffer;
pub mod config;
pub mod hash;
pub mod navigator;
pub mod token;
