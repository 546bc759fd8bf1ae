//! # scrawl
//!
//! A tokenizer for the scrawl format.
//!
//! ## Usage
//!
//! Scanning is one call: pick the enabled markup families, get a token stream.
//!
//! ```rust-example
//! use scrawl::{scan, Flags};
//!
//! let tokens = scan("hello #world", Flags::HASHTAGS);
//! ```
//!
//! See the [scrawl] module for the format overview and the guarantees the
//! scanner makes (losslessness, determinism, flag independence).

pub mod scrawl;

pub use crate::scrawl::{detokenize, scan, Flags, Scanner, Token, TokenKind};
