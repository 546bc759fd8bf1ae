//! Token types emitted by the scrawl scanner.
//!
//!     The scanner produces a flat stream of (kind, raw) pairs. `raw` is always the
//!     exact substring of the input that produced the token, so concatenating the
//!     raw fields of a stream reproduces the scanned text. Downstream renderers
//!     consume the stream front to back without re-reading the source.
//!
//!     Marker tokens (headings, list bullets, reply/quote markers) carry their
//!     trailing space in `raw`; placeholder tokens (image, video, music, link)
//!     carry their delimiters. This keeps the renderer free of any knowledge of
//!     the dialect's punctuation.

use serde::{Deserialize, Serialize};

/// The kind of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Exactly one line terminator.
    Newline,
    /// A run of literal text.
    Line,
    /// Opening emphasis marker: delimiter + `[`, e.g. `*[`.
    RichOpen,
    /// Closing emphasis marker: `]` + delimiter, e.g. `]*`.
    RichClose,
    /// Unordered list bullet, literally `- `.
    UlMarker,
    /// Ordered list marker: digits + `. `, e.g. `3. `.
    OlMarker,
    /// Heading marker: 1 to 6 `#` plus the committing space.
    Heading,
    /// `#tag`.
    Hashtag,
    /// `@username`.
    UserMention,
    /// `~clubname`.
    ClubMention,
    /// Reply marker `> ` (mid-line or line start).
    ReplyMarker,
    /// Quote marker `> ` at line start.
    QuoteMarker,
    /// Image placeholder `[[uri]`.
    Image,
    /// Video placeholder `[{uri}`.
    Video,
    /// Music placeholder `{[uri}`.
    Music,
    /// Link placeholder `{{uri}}`.
    Link,
    /// A line of two or more hyphens.
    HorizontalRule,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Newline => "newline",
            TokenKind::Line => "line",
            TokenKind::RichOpen => "rich-open",
            TokenKind::RichClose => "rich-close",
            TokenKind::UlMarker => "ul-marker",
            TokenKind::OlMarker => "ol-marker",
            TokenKind::Heading => "heading",
            TokenKind::Hashtag => "hashtag",
            TokenKind::UserMention => "user-mention",
            TokenKind::ClubMention => "club-mention",
            TokenKind::ReplyMarker => "reply-marker",
            TokenKind::QuoteMarker => "quote-marker",
            TokenKind::Image => "image",
            TokenKind::Video => "video",
            TokenKind::Music => "music",
            TokenKind::Link => "link",
            TokenKind::HorizontalRule => "horizontal-rule",
        };
        write!(f, "{name}")
    }
}

/// One lexical unit of the scrawl dialect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub raw: String,
}

impl Token {
    pub fn new(kind: TokenKind, raw: impl Into<String>) -> Token {
        Token {
            kind,
            raw: raw.into(),
        }
    }
}
