//! Detokenizer for the scrawl format.
//!
//!     Converts a token stream back into the text it was scanned from. Because
//!     every token carries its exact source substring, this is a concatenation;
//!     the result of detokenizing a scanned stream is always the input text plus
//!     the sentinel newline.

use crate::scrawl::token::Token;

/// Reassemble source text from a token stream.
pub fn detokenize(tokens: &[Token]) -> String {
    let mut result = String::new();
    for token in tokens {
        result.push_str(&token.raw);
    }
    result
}
