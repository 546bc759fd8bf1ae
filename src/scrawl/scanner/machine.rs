//! The scanner state machine.
//!
//!     One state transition per input character. Each transition either appends the
//!     character to the accumulator, flushes the accumulator as one or more tokens
//!     and starts a new one, or folds the character into a pending marker. Every
//!     branch accounts for every consumed character, so the concatenated raw fields
//!     of the output always reproduce the scanned text. Malformed markup never
//!     fails; it degrades to literal `Line` text.
//!
//!     States fall into a few behavioral groups:
//!
//!     - line-start dispatch (`LineStart`), the only state reachable after a
//!       newline, which routes the first character of a line into a family entry;
//!     - plain accumulation (`Line`, `Space`) — `Space` exists so that family
//!       markers are recognized immediately after whitespace, mirroring the
//!       line-start dispatch but flushing the accumulated text first;
//!     - one-character lookahead entries (`Hash`, `AtSign`, `Tilde`, `Gt*`,
//!       `Hyphen`, bracket/brace states) that commit to a family only after
//!       inspecting the next character, with the pending trigger held in the
//!       accumulator;
//!     - body captures (`Hashtag`, mentions, placeholder URIs, digit runs) that
//!       accumulate a payload until its terminator and emit a dedicated token.

use crate::scrawl::flags::Flags;
use crate::scrawl::token::{Token, TokenKind};

/// Emphasis delimiters accepted by the rich-span family.
fn is_rich_delim(c: char) -> bool {
    matches!(c, '*' | '%' | '_' | '^' | '~' | '+' | '&' | '`' | '=')
}

/// Characters accepted in hashtag and mention bodies.
fn is_body_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Headings run from `#` to `######`.
const MAX_HEADING_DEPTH: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Start of input or immediately after a newline token.
    LineStart,
    /// Literal text accumulation.
    Line,
    /// Literal accumulation inside a whitespace run; family markers may follow.
    Space,
    /// Counting leading `#` for heading depth. The hashes live in `depth`,
    /// not in the accumulator.
    LeadingHashes { depth: u8 },
    /// A single mid-line `#`, hashtag candidate.
    Hash,
    /// `@`, user mention candidate.
    AtSign,
    /// `~`, club mention candidate.
    Tilde,
    /// Pending rich delimiter, waiting for `[`.
    Rich { delim: char },
    /// Leading `>`, reply or quote marker candidate.
    GtAtStart,
    /// Mid-line `>`, reply marker candidate.
    Gt,
    /// Leading `[` (media entry).
    LeftBracketAtStart,
    /// Leading `{` (music or link entry).
    LeftBraceAtStart,
    /// Mid-line `{` (link entry).
    LeftBrace,
    /// `]`, rich close candidate.
    RightBracket,
    /// Leading `-`, list bullet or rule candidate.
    Hyphen,
    /// Two or more leading hyphens, horizontal rule candidate.
    HyphenRun,
    /// Leading digit run, ordered list candidate.
    Digits,
    /// Digits followed by `.`, waiting for the committing space.
    DigitsDot,
    /// `#` body capture.
    Hashtag,
    /// `@` body capture.
    UserMention,
    /// `~` body capture.
    ClubMention,
    /// `[[` body capture, closed by `]`.
    ImageUri,
    /// `[{` body capture, closed by `}`.
    VideoUri,
    /// `{[` body capture, closed by `}`.
    MusicUri,
    /// `{{` body capture, closed by `}}`.
    LinkUri,
    /// Saw one `}` inside a link body.
    LinkUriEnd,
}

/// The transition engine. All state is local to one scan.
pub(crate) struct Machine {
    flags: Flags,
    strict_rich_pairing: bool,
    state: State,
    /// Token under construction, including any pending lookahead trigger.
    buf: String,
    /// Delimiter of the currently open rich span, for strict pairing.
    open_rich: Option<char>,
    out: Vec<Token>,
}

impl Machine {
    pub(crate) fn new(flags: Flags, strict_rich_pairing: bool) -> Machine {
        Machine {
            flags,
            strict_rich_pairing,
            state: State::LineStart,
            buf: String::new(),
            open_rich: None,
            out: Vec::new(),
        }
    }

    pub(crate) fn into_tokens(self) -> Vec<Token> {
        self.out
    }

    fn emit(&mut self, kind: TokenKind, raw: impl Into<String>) {
        self.out.push(Token::new(kind, raw));
    }

    /// Flush the accumulator as a `Line` token. Empty accumulators produce
    /// nothing; zero-width `Line` tokens are never emitted.
    fn flush_line(&mut self) {
        if !self.buf.is_empty() {
            let raw = std::mem::take(&mut self.buf);
            self.emit(TokenKind::Line, raw);
        }
    }

    /// Flush, emit one newline token, and return to line-start dispatch.
    fn end_line(&mut self) {
        self.flush_line();
        self.emit(TokenKind::Newline, "\n");
        self.state = State::LineStart;
    }

    /// Append the character as literal text and continue in `Line`.
    fn literal(&mut self, c: char) {
        self.buf.push(c);
        self.state = State::Line;
    }

    /// Whether `c` starts a family at a mid-line dispatch position.
    fn can_enter_mid(&self, c: char) -> bool {
        match c {
            '#' => self.flags.contains(Flags::HASHTAGS),
            '@' => self.flags.contains(Flags::MENTIONS),
            '~' => self.flags.intersects(Flags::MENTIONS | Flags::RICH),
            '>' => self.flags.contains(Flags::REPLIES),
            ']' => self.flags.contains(Flags::RICH),
            '{' => self.flags.contains(Flags::LINKS),
            c if is_rich_delim(c) => self.flags.contains(Flags::RICH),
            _ => false,
        }
    }

    /// Enter the family `c` starts mid-line. Callers flush the accumulator
    /// first and only call this when `can_enter_mid` accepted the character.
    fn enter_mid(&mut self, c: char) {
        match c {
            '#' => {
                self.buf.push('#');
                self.state = State::Hash;
            }
            '@' => {
                self.buf.push('@');
                self.state = State::AtSign;
            }
            '~' if self.flags.contains(Flags::MENTIONS) => {
                self.buf.push('~');
                self.state = State::Tilde;
            }
            '>' => {
                self.buf.push('>');
                self.state = State::Gt;
            }
            ']' => {
                self.buf.push(']');
                self.state = State::RightBracket;
            }
            '{' => {
                self.buf.push('{');
                self.state = State::LeftBrace;
            }
            c => {
                self.state = State::Rich { delim: c };
            }
        }
    }

    /// Resolve a lookahead state whose pending trigger sits in the accumulator:
    /// re-dispatch into another family when the flags allow it, otherwise fold
    /// the character into literal text.
    fn redispatch_or_literal(&mut self, c: char) {
        if self.can_enter_mid(c) {
            self.flush_line();
            self.enter_mid(c);
        } else {
            self.literal(c);
        }
    }

    /// Consume one input character.
    pub(crate) fn step(&mut self, c: char) {
        match self.state {
            State::LineStart => self.on_line_start(c),
            State::Line => self.on_line(c),
            State::Space => self.on_space(c),
            State::LeadingHashes { depth } => self.on_leading_hashes(c, depth),
            State::Hash => self.on_hash(c),
            State::AtSign => self.on_mention_trigger(c, State::UserMention),
            State::Tilde => self.on_mention_trigger(c, State::ClubMention),
            State::Rich { delim } => self.on_rich(c, delim),
            State::GtAtStart => self.on_gt_at_start(c),
            State::Gt => self.on_gt(c),
            State::LeftBracketAtStart => self.on_left_bracket_at_start(c),
            State::LeftBraceAtStart => self.on_left_brace_at_start(c),
            State::LeftBrace => self.on_left_brace(c),
            State::RightBracket => self.on_right_bracket(c),
            State::Hyphen => self.on_hyphen(c),
            State::HyphenRun => self.on_hyphen_run(c),
            State::Digits => self.on_digits(c),
            State::DigitsDot => self.on_digits_dot(c),
            State::Hashtag => self.on_capture(c, TokenKind::Hashtag),
            State::UserMention => self.on_capture(c, TokenKind::UserMention),
            State::ClubMention => self.on_capture(c, TokenKind::ClubMention),
            State::ImageUri => self.on_uri(c, ']', TokenKind::Image),
            State::VideoUri => self.on_uri(c, '}', TokenKind::Video),
            State::MusicUri => self.on_uri(c, '}', TokenKind::Music),
            State::LinkUri => self.on_link_uri(c),
            State::LinkUriEnd => self.on_link_uri_end(c),
        }
    }

    fn on_line_start(&mut self, c: char) {
        match c {
            '\n' => {
                self.emit(TokenKind::Newline, "\n");
            }
            ' ' => {
                self.buf.push(' ');
                self.state = State::Space;
            }
            '#' => {
                if self.flags.contains(Flags::HEADINGS) {
                    self.state = State::LeadingHashes { depth: 1 };
                } else if self.flags.contains(Flags::HASHTAGS) {
                    self.buf.push('#');
                    self.state = State::Hash;
                } else {
                    self.literal(c);
                }
            }
            '@' => {
                if self.flags.contains(Flags::MENTIONS) {
                    self.buf.push('@');
                    self.state = State::AtSign;
                } else {
                    self.literal(c);
                }
            }
            '~' => {
                if self.flags.contains(Flags::MENTIONS) {
                    self.buf.push('~');
                    self.state = State::Tilde;
                } else if self.flags.contains(Flags::RICH) {
                    self.state = State::Rich { delim: '~' };
                } else {
                    self.literal(c);
                }
            }
            '>' => {
                if self.flags.intersects(Flags::REPLIES | Flags::QUOTES) {
                    self.buf.push('>');
                    self.state = State::GtAtStart;
                } else {
                    self.literal(c);
                }
            }
            '[' => {
                if self.flags.contains(Flags::MEDIA) {
                    self.buf.push('[');
                    self.state = State::LeftBracketAtStart;
                } else {
                    self.literal(c);
                }
            }
            ']' => {
                if self.flags.contains(Flags::RICH) {
                    self.buf.push(']');
                    self.state = State::RightBracket;
                } else {
                    self.literal(c);
                }
            }
            '{' => {
                if self.flags.intersects(Flags::MUSIC | Flags::LINKS) {
                    self.buf.push('{');
                    self.state = State::LeftBraceAtStart;
                } else {
                    self.literal(c);
                }
            }
            '-' => {
                if self.flags.intersects(Flags::LISTS | Flags::HR) {
                    self.buf.push('-');
                    self.state = State::Hyphen;
                } else {
                    self.literal(c);
                }
            }
            c if c.is_ascii_digit() => {
                if self.flags.contains(Flags::LISTS) {
                    self.buf.push(c);
                    self.state = State::Digits;
                } else {
                    self.literal(c);
                }
            }
            c if is_rich_delim(c) => {
                if self.flags.contains(Flags::RICH) {
                    self.state = State::Rich { delim: c };
                } else {
                    self.literal(c);
                }
            }
            c => self.literal(c),
        }
    }

    fn on_line(&mut self, c: char) {
        match c {
            '\n' => self.end_line(),
            ' ' => {
                self.buf.push(' ');
                self.state = State::Space;
            }
            ']' if self.flags.contains(Flags::RICH) => {
                self.flush_line();
                self.buf.push(']');
                self.state = State::RightBracket;
            }
            '{' if self.flags.contains(Flags::LINKS) => {
                self.flush_line();
                self.buf.push('{');
                self.state = State::LeftBrace;
            }
            c if is_rich_delim(c) && self.flags.contains(Flags::RICH) => {
                self.flush_line();
                self.state = State::Rich { delim: c };
            }
            c => self.buf.push(c),
        }
    }

    fn on_space(&mut self, c: char) {
        match c {
            '\n' => self.end_line(),
            ' ' => self.buf.push(' '),
            c if self.can_enter_mid(c) => {
                self.flush_line();
                self.enter_mid(c);
            }
            c => self.literal(c),
        }
    }

    fn on_leading_hashes(&mut self, c: char, depth: u8) {
        match c {
            '\n' => {
                self.buf = "#".repeat(depth as usize);
                self.end_line();
            }
            ' ' => {
                let mut raw = "#".repeat(depth as usize);
                raw.push(' ');
                self.emit(TokenKind::Heading, raw);
                self.state = State::Space;
            }
            '#' => {
                if depth == MAX_HEADING_DEPTH {
                    self.buf = "#".repeat(depth as usize + 1);
                    self.state = State::Line;
                } else {
                    self.state = State::LeadingHashes { depth: depth + 1 };
                }
            }
            c if is_rich_delim(c) && self.flags.contains(Flags::RICH) => {
                self.emit(TokenKind::Line, "#".repeat(depth as usize));
                self.state = State::Rich { delim: c };
            }
            '{' if self.flags.contains(Flags::LINKS) => {
                self.emit(TokenKind::Line, "#".repeat(depth as usize));
                self.buf.push('{');
                self.state = State::LeftBrace;
            }
            c => {
                if depth == 1 && self.flags.contains(Flags::HASHTAGS) && is_body_char(c) {
                    self.buf.push('#');
                    self.buf.push(c);
                    self.state = State::Hashtag;
                } else {
                    self.buf = "#".repeat(depth as usize);
                    self.literal(c);
                }
            }
        }
    }

    fn on_hash(&mut self, c: char) {
        match c {
            '\n' => self.end_line(),
            ' ' => {
                self.buf.push(' ');
                self.state = State::Space;
            }
            '#' => self.literal(c),
            c if is_rich_delim(c) && self.flags.contains(Flags::RICH) => {
                self.flush_line();
                self.state = State::Rich { delim: c };
            }
            '{' if self.flags.contains(Flags::LINKS) => {
                self.flush_line();
                self.buf.push('{');
                self.state = State::LeftBrace;
            }
            c if is_body_char(c) => {
                self.buf.push(c);
                self.state = State::Hashtag;
            }
            c => self.literal(c),
        }
    }

    /// Shared lookahead for `@` and `~`: a body character commits to the
    /// mention capture, anything else degrades.
    fn on_mention_trigger(&mut self, c: char, capture: State) {
        match c {
            '\n' => self.end_line(),
            ' ' => {
                self.buf.push(' ');
                self.state = State::Space;
            }
            c if is_rich_delim(c) && self.flags.contains(Flags::RICH) => {
                self.flush_line();
                self.state = State::Rich { delim: c };
            }
            '{' if self.flags.contains(Flags::LINKS) => {
                self.flush_line();
                self.buf.push('{');
                self.state = State::LeftBrace;
            }
            c if is_body_char(c) => {
                self.buf.push(c);
                self.state = capture;
            }
            c => self.literal(c),
        }
    }

    fn on_rich(&mut self, c: char, delim: char) {
        match c {
            '[' => {
                let mut raw = String::from(delim);
                raw.push('[');
                self.emit(TokenKind::RichOpen, raw);
                self.open_rich = Some(delim);
                self.state = State::Space;
            }
            '\n' => {
                self.buf.push(delim);
                self.end_line();
            }
            ' ' => {
                self.buf.push(delim);
                self.buf.push(' ');
                self.state = State::Space;
            }
            c if is_rich_delim(c) => {
                self.emit(TokenKind::Line, String::from(delim));
                self.state = State::Rich { delim: c };
            }
            '{' if self.flags.contains(Flags::LINKS) => {
                self.emit(TokenKind::Line, String::from(delim));
                self.buf.push('{');
                self.state = State::LeftBrace;
            }
            c => {
                self.buf.push(delim);
                self.literal(c);
            }
        }
    }

    fn on_gt_at_start(&mut self, c: char) {
        match c {
            ' ' => {
                let kind = if self.flags.contains(Flags::QUOTES) {
                    TokenKind::QuoteMarker
                } else {
                    TokenKind::ReplyMarker
                };
                self.buf.clear();
                self.emit(kind, "> ");
                self.state = State::LineStart;
            }
            '\n' => self.end_line(),
            c => self.redispatch_or_literal(c),
        }
    }

    fn on_gt(&mut self, c: char) {
        match c {
            ' ' => {
                self.buf.clear();
                self.emit(TokenKind::ReplyMarker, "> ");
                self.state = State::Space;
            }
            '\n' => self.end_line(),
            c => self.redispatch_or_literal(c),
        }
    }

    fn on_left_bracket_at_start(&mut self, c: char) {
        match c {
            '[' => {
                self.buf.push('[');
                self.state = State::ImageUri;
            }
            '{' => {
                self.buf.push('{');
                self.state = State::VideoUri;
            }
            '\n' => self.end_line(),
            ' ' => {
                self.buf.push(' ');
                self.state = State::Space;
            }
            c => self.redispatch_or_literal(c),
        }
    }

    fn on_left_brace_at_start(&mut self, c: char) {
        match c {
            '[' if self.flags.contains(Flags::MUSIC) => {
                self.buf.push('[');
                self.state = State::MusicUri;
            }
            '{' if self.flags.contains(Flags::LINKS) => {
                self.buf.push('{');
                self.state = State::LinkUri;
            }
            '\n' => self.end_line(),
            ' ' => {
                self.buf.push(' ');
                self.state = State::Space;
            }
            c => self.redispatch_or_literal(c),
        }
    }

    fn on_left_brace(&mut self, c: char) {
        match c {
            '{' => {
                self.buf.push('{');
                self.state = State::LinkUri;
            }
            '\n' => self.end_line(),
            ' ' => {
                self.buf.push(' ');
                self.state = State::Space;
            }
            c => self.redispatch_or_literal(c),
        }
    }

    fn on_right_bracket(&mut self, c: char) {
        match c {
            '\n' => self.end_line(),
            ' ' => {
                self.buf.push(' ');
                self.state = State::Space;
            }
            ']' => {
                // "]]" resolves the first bracket as literal and keeps waiting.
                self.flush_line();
                self.buf.push(']');
            }
            c if is_rich_delim(c) => {
                if self.strict_rich_pairing && self.open_rich != Some(c) {
                    self.literal(c);
                } else {
                    self.buf.clear();
                    let mut raw = String::from(']');
                    raw.push(c);
                    self.emit(TokenKind::RichClose, raw);
                    self.open_rich = None;
                    self.state = State::Line;
                }
            }
            c => self.redispatch_or_literal(c),
        }
    }

    fn on_hyphen(&mut self, c: char) {
        match c {
            ' ' => {
                if self.flags.contains(Flags::LISTS) {
                    self.buf.clear();
                    self.emit(TokenKind::UlMarker, "- ");
                    self.state = State::LineStart;
                } else {
                    self.buf.push(' ');
                    self.state = State::Space;
                }
            }
            '-' => {
                self.buf.push('-');
                self.state = if self.flags.contains(Flags::HR) {
                    State::HyphenRun
                } else {
                    State::Line
                };
            }
            '\n' => self.end_line(),
            c => self.redispatch_or_literal(c),
        }
    }

    fn on_hyphen_run(&mut self, c: char) {
        match c {
            '-' => self.buf.push('-'),
            '\n' => {
                let raw = std::mem::take(&mut self.buf);
                self.emit(TokenKind::HorizontalRule, raw);
                self.emit(TokenKind::Newline, "\n");
                self.state = State::LineStart;
            }
            ' ' => {
                self.buf.push(' ');
                self.state = State::Space;
            }
            c => self.redispatch_or_literal(c),
        }
    }

    fn on_digits(&mut self, c: char) {
        match c {
            c if c.is_ascii_digit() => self.buf.push(c),
            '.' => {
                self.buf.push('.');
                self.state = State::DigitsDot;
            }
            '\n' => self.end_line(),
            ' ' => {
                self.buf.push(' ');
                self.state = State::Space;
            }
            c => self.redispatch_or_literal(c),
        }
    }

    fn on_digits_dot(&mut self, c: char) {
        match c {
            ' ' => {
                let mut raw = std::mem::take(&mut self.buf);
                raw.push(' ');
                self.emit(TokenKind::OlMarker, raw);
                self.state = State::LineStart;
            }
            '\n' => self.end_line(),
            c => self.redispatch_or_literal(c),
        }
    }

    /// Hashtag and mention bodies: accumulate body characters, emit the capture
    /// on the first terminator, then resume in the state the terminator implies.
    fn on_capture(&mut self, c: char, kind: TokenKind) {
        match c {
            c if is_body_char(c) => self.buf.push(c),
            '\n' => {
                let raw = std::mem::take(&mut self.buf);
                self.emit(kind, raw);
                self.emit(TokenKind::Newline, "\n");
                self.state = State::LineStart;
            }
            ' ' => {
                let raw = std::mem::take(&mut self.buf);
                self.emit(kind, raw);
                self.buf.push(' ');
                self.state = State::Space;
            }
            ']' if self.flags.contains(Flags::RICH) => {
                let raw = std::mem::take(&mut self.buf);
                self.emit(kind, raw);
                self.buf.push(']');
                self.state = State::RightBracket;
            }
            '{' if self.flags.contains(Flags::LINKS) => {
                let raw = std::mem::take(&mut self.buf);
                self.emit(kind, raw);
                self.buf.push('{');
                self.state = State::LeftBrace;
            }
            c if is_rich_delim(c) && self.flags.contains(Flags::RICH) => {
                let raw = std::mem::take(&mut self.buf);
                self.emit(kind, raw);
                self.state = State::Rich { delim: c };
            }
            c => {
                let raw = std::mem::take(&mut self.buf);
                self.emit(kind, raw);
                self.literal(c);
            }
        }
    }

    /// Image, video, and music bodies: everything up to the closer is payload.
    /// A newline before the closer degrades the partial placeholder to text.
    fn on_uri(&mut self, c: char, closer: char, kind: TokenKind) {
        if c == closer {
            let mut raw = std::mem::take(&mut self.buf);
            raw.push(closer);
            self.emit(kind, raw);
            self.state = State::Line;
        } else if c == '\n' {
            self.end_line();
        } else {
            self.buf.push(c);
        }
    }

    fn on_link_uri(&mut self, c: char) {
        match c {
            '}' => {
                self.buf.push('}');
                self.state = State::LinkUriEnd;
            }
            '\n' => self.end_line(),
            c => self.buf.push(c),
        }
    }

    fn on_link_uri_end(&mut self, c: char) {
        match c {
            '}' => {
                let mut raw = std::mem::take(&mut self.buf);
                raw.push('}');
                self.emit(TokenKind::Link, raw);
                self.state = State::Line;
            }
            '\n' => self.end_line(),
            c => {
                // A single `}` stays in the body.
                self.buf.push(c);
                self.state = State::LinkUri;
            }
        }
    }
}
