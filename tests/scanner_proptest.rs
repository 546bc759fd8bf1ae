//! Property tests for the scanner's blanket guarantees: losslessness,
//! determinism, and flag independence hold for arbitrary input text (any code
//! points, including newlines and the dialect's own punctuation) under every
//! flag mask.

use proptest::prelude::*;
use scrawl::{detokenize, scan, Flags, TokenKind};

/// Arbitrary unicode text, newlines included.
fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..200).prop_map(|chars| chars.into_iter().collect())
}

fn arb_flags() -> impl Strategy<Value = Flags> {
    any::<u16>().prop_map(Flags::from_bits_truncate)
}

/// The flag a feature token's family is gated on.
fn required_flag(kind: TokenKind) -> Flags {
    match kind {
        TokenKind::Heading => Flags::HEADINGS,
        TokenKind::Hashtag => Flags::HASHTAGS,
        TokenKind::UserMention | TokenKind::ClubMention => Flags::MENTIONS,
        TokenKind::ReplyMarker => Flags::REPLIES,
        TokenKind::QuoteMarker => Flags::QUOTES,
        TokenKind::RichOpen | TokenKind::RichClose => Flags::RICH,
        TokenKind::Image | TokenKind::Video => Flags::MEDIA,
        TokenKind::Music => Flags::MUSIC,
        TokenKind::Link => Flags::LINKS,
        TokenKind::UlMarker | TokenKind::OlMarker => Flags::LISTS,
        TokenKind::HorizontalRule => Flags::HR,
        TokenKind::Line | TokenKind::Newline => Flags::NONE,
    }
}

proptest! {
    /// Concatenated raws reproduce the input plus the sentinel newline,
    /// whatever the input and whatever the mask.
    #[test]
    fn scanning_is_lossless(text in arb_text(), flags in arb_flags()) {
        let tokens = scan(&text, flags);
        prop_assert_eq!(detokenize(&tokens), format!("{text}\n"));
    }

    /// The same `(text, flags)` always yields the same stream.
    #[test]
    fn scanning_is_deterministic(text in arb_text(), flags in arb_flags()) {
        prop_assert_eq!(scan(&text, flags), scan(&text, flags));
    }

    /// A feature token never appears unless its family's flag is set.
    #[test]
    fn feature_tokens_require_their_flag(text in arb_text(), flags in arb_flags()) {
        for token in scan(&text, flags) {
            prop_assert!(
                flags.contains(required_flag(token.kind)),
                "token {:?} emitted under flags {:?}",
                token,
                flags
            );
        }
    }

    /// With the empty mask, every input collapses to lines and newlines.
    #[test]
    fn empty_mask_yields_plain_lines(text in arb_text()) {
        for token in scan(&text, Flags::NONE) {
            prop_assert!(matches!(token.kind, TokenKind::Line | TokenKind::Newline));
        }
    }

    /// Stream shape: newline raws are exactly `\n`, and no token is zero-width.
    #[test]
    fn no_zero_width_tokens(text in arb_text(), flags in arb_flags()) {
        for token in scan(&text, flags) {
            prop_assert!(!token.raw.is_empty());
            if token.kind == TokenKind::Newline {
                prop_assert_eq!(token.raw.as_str(), "\n");
            }
        }
    }

    /// Strict rich pairing never loses text either.
    #[test]
    fn strict_pairing_is_lossless(text in arb_text(), flags in arb_flags()) {
        let tokens = scrawl::Scanner::new(flags).strict_rich_pairing(true).scan(&text);
        prop_assert_eq!(detokenize(&tokens), format!("{text}\n"));
    }
}
