//! Scanner entry points.
//!
//!     This module owns the driver loop: it feeds the input to the state machine
//!     one code point at a time, with a sentinel newline appended so that the last
//!     line flushes exactly like every other line. The transition logic lives in
//!     the `machine` submodule; this is the public surface.
//!
//!     Scanning is pure and total. The same `(text, flags)` always produces the
//!     same stream, no input can make it fail, and concatenating the raw fields of
//!     the stream reproduces `text + "\n"`.

mod machine;

use crate::scrawl::flags::Flags;
use crate::scrawl::token::Token;
use machine::Machine;

/// A configured scanner.
///
/// The only knob beyond the feature flags is `strict_rich_pairing`: by default
/// any emphasis delimiter closes any open rich span, as in the dialect's
/// reference behavior; strict pairing requires the close delimiter to match
/// the opener and degrades mismatches to literal text.
#[derive(Debug, Clone, Copy)]
pub struct Scanner {
    flags: Flags,
    strict_rich_pairing: bool,
}

impl Scanner {
    pub fn new(flags: Flags) -> Scanner {
        Scanner {
            flags,
            strict_rich_pairing: false,
        }
    }

    /// Require rich close delimiters to match their opener.
    pub fn strict_rich_pairing(mut self, strict: bool) -> Scanner {
        self.strict_rich_pairing = strict;
        self
    }

    /// Scan `text` into a token stream.
    pub fn scan(&self, text: &str) -> Vec<Token> {
        let mut machine = Machine::new(self.flags, self.strict_rich_pairing);
        for c in text.chars() {
            machine.step(c);
        }
        // Sentinel terminator; the output always ends with a Newline token.
        machine.step('\n');
        machine.into_tokens()
    }
}

/// Scan `text` with the given feature flags and default options.
pub fn scan(text: &str, flags: Flags) -> Vec<Token> {
    Scanner::new(flags).scan(text)
}
