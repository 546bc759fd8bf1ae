//! Testing utilities for token stream assertions.
//!
//!     Asserting on raw `Vec<Token>` literals gets noisy fast. These helpers keep
//!     test bodies focused on the stream shape:
//!
//!     - [tok] builds a token with less ceremony;
//!     - [kinds] projects a stream onto its kinds for shape-only assertions;
//!     - [render] lays a stream out one token per line (`KIND "raw"`), which is
//!       what the snapshot tests capture.

use crate::scrawl::token::{Token, TokenKind};

/// Shorthand token constructor for tests.
pub fn tok(kind: TokenKind, raw: &str) -> Token {
    Token::new(kind, raw)
}

/// The kinds of a stream, in order.
pub fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

/// Render a stream one token per line for snapshot tests.
///
/// Raw text is debug-escaped so newlines and quotes stay visible.
pub fn render(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&format!("{} {:?}\n", token.kind, token.raw));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_escapes_raw_text() {
        let rendered = render(&[
            tok(TokenKind::Line, "a b"),
            tok(TokenKind::Newline, "\n"),
        ]);
        assert_eq!(rendered, "line \"a b\"\nnewline \"\\n\"\n");
    }

    #[test]
    fn test_kinds_projection() {
        let stream = [
            tok(TokenKind::UlMarker, "- "),
            tok(TokenKind::Line, "x"),
            tok(TokenKind::Newline, "\n"),
        ];
        assert_eq!(
            kinds(&stream),
            vec![TokenKind::UlMarker, TokenKind::Line, TokenKind::Newline]
        );
    }
}
