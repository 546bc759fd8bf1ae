//! # The scrawl format
//!
//!     scrawl is a lightweight inline markup dialect for short-form, user-authored
//!     text: posts, comments, and replies. One line is one unit of content, and
//!     all markup is resolved by punctuation position within the line:
//!
//!         ## a heading
//!         plain text with #hashtags, @user and ~club mentions
//!         > a quoted line
//!         - an unordered item
//!         3. an ordered item
//!         *[emphasis]* spans, {{links}}, and at line start:
//!         [[image] [{video} {[music}
//!         ----
//!
//!     This crate is the tokenizer only. It turns a source string plus a set of
//!     [feature flags](flags::Flags) into a flat stream of [tokens](token::Token)
//!     that a renderer consumes front to back; rendering, URI validation, and
//!     normalization live elsewhere.
//!
//!     Every token carries the exact substring that produced it, and the scanner
//!     is total: malformed markup degrades to literal text instead of failing.
//!     Disabling a family's flag turns its punctuation back into plain text.

pub mod detokenize;
pub mod flags;
pub mod scanner;
pub mod testing;
pub mod token;

pub use detokenize::detokenize;
pub use flags::Flags;
pub use scanner::{scan, Scanner};
pub use token::{Token, TokenKind};
