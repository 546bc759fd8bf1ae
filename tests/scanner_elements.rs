//! Per-family scanner tests: one markup element at a time, with its flag on
//! and off. The off cases pin the degrade-to-literal behavior: a disabled
//! family's trigger characters must come back as plain line text, never as a
//! feature token.

use rstest::rstest;
use scrawl::scrawl::testing::{kinds, tok};
use scrawl::{scan, Flags, TokenKind};

#[rstest]
#[case::heading("# title", Flags::HEADINGS, TokenKind::Heading)]
#[case::hashtag("#tag", Flags::HASHTAGS, TokenKind::Hashtag)]
#[case::user_mention("@ada", Flags::MENTIONS, TokenKind::UserMention)]
#[case::club_mention("~club", Flags::MENTIONS, TokenKind::ClubMention)]
#[case::reply("> ok", Flags::REPLIES, TokenKind::ReplyMarker)]
#[case::quote("> ok", Flags::QUOTES, TokenKind::QuoteMarker)]
#[case::rich_open("*[hi]*", Flags::RICH, TokenKind::RichOpen)]
#[case::rich_close("*[hi]*", Flags::RICH, TokenKind::RichClose)]
#[case::image("[[a.png]", Flags::MEDIA, TokenKind::Image)]
#[case::video("[{a.mp4}", Flags::MEDIA, TokenKind::Video)]
#[case::music("{[a.ogg}", Flags::MUSIC, TokenKind::Music)]
#[case::link("{{a.com}}", Flags::LINKS, TokenKind::Link)]
#[case::ul("- item", Flags::LISTS, TokenKind::UlMarker)]
#[case::ol("1. item", Flags::LISTS, TokenKind::OlMarker)]
#[case::hr("--", Flags::HR, TokenKind::HorizontalRule)]
fn element_is_recognized_with_its_flag(
    #[case] text: &str,
    #[case] flags: Flags,
    #[case] expected: TokenKind,
) {
    let tokens = scan(text, flags);
    assert!(
        kinds(&tokens).contains(&expected),
        "expected {expected} in {tokens:?}"
    );
}

#[rstest]
#[case::heading("# title", Flags::HEADINGS)]
#[case::hashtag("#tag", Flags::HASHTAGS)]
#[case::mentions("@ada ~club", Flags::MENTIONS)]
#[case::reply_quote("> ok", Flags::REPLIES | Flags::QUOTES)]
#[case::rich("*[hi]*", Flags::RICH)]
#[case::media("[[a.png]", Flags::MEDIA)]
#[case::music("{[a.ogg}", Flags::MUSIC)]
#[case::links("{{a.com}}", Flags::LINKS)]
#[case::lists("- item", Flags::LISTS)]
#[case::hr("--", Flags::HR)]
fn element_degrades_without_its_flag(#[case] text: &str, #[case] family: Flags) {
    let without = Flags::from_bits_truncate(Flags::ALL.bits() & !family.bits());
    let tokens = scan(text, without);
    for token in &tokens {
        assert_eq!(
            family_of(token.kind).bits() & family.bits(),
            0,
            "disabled family leaked: {token:?}"
        );
    }
}

/// The flag family a feature token belongs to (`NONE` for line/newline).
fn family_of(kind: TokenKind) -> Flags {
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

#[test]
fn unordered_list_marker_splits_from_item_text() {
    assert_eq!(
        scan("- item", Flags::LISTS),
        vec![
            tok(TokenKind::UlMarker, "- "),
            tok(TokenKind::Line, "item"),
            tok(TokenKind::Newline, "\n"),
        ]
    );
}

#[test]
fn rich_span_emits_open_body_close() {
    assert_eq!(
        scan("*[bold]*", Flags::RICH),
        vec![
            tok(TokenKind::RichOpen, "*["),
            tok(TokenKind::Line, "bold"),
            tok(TokenKind::RichClose, "]*"),
            tok(TokenKind::Newline, "\n"),
        ]
    );
}

#[test]
fn empty_input_is_a_single_newline() {
    assert_eq!(scan("", Flags::ALL), vec![tok(TokenKind::Newline, "\n")]);
}

#[test]
fn markup_degrades_to_plain_lines_without_flags() {
    assert_eq!(
        scan("#hi @you", Flags::NONE),
        vec![
            tok(TokenKind::Line, "#hi @you"),
            tok(TokenKind::Newline, "\n"),
        ]
    );
}

#[test]
fn heading_cap_folds_seventh_hash_into_the_line() {
    let tokens = scan("####### over", Flags::HEADINGS);
    assert_eq!(
        tokens,
        vec![
            tok(TokenKind::Line, "####### over"),
            tok(TokenKind::Newline, "\n"),
        ]
    );
}
