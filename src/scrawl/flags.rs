//! Feature flags for the scrawl scanner.
//!
//!     Each flag enables one markup family. A character whose family is disabled
//!     falls back to plain line accumulation, so the same input can be scanned as
//!     anything from full scrawl down to plain text by narrowing the mask.
//!
//!     The u16 bit layout is an external compatibility contract (callers store and
//!     exchange masks as integers). Inside the crate the set is only ever queried
//!     through the named constants; raw bits appear at the serde boundary and in
//!     `bits`/`from_bits_truncate`.

use serde::{Deserialize, Serialize};

/// A set of enabled markup families.
///
/// Combine with `|`: `Flags::HASHTAGS | Flags::MENTIONS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Flags(u16);

impl Flags {
    /// No families enabled; every character is literal text.
    pub const NONE: Flags = Flags(0);
    /// Leading `#` runs start a heading.
    pub const HEADINGS: Flags = Flags(1 << 0);
    /// `#` starts a hashtag capture.
    pub const HASHTAGS: Flags = Flags(1 << 1);
    /// `@` starts a user mention, `~` a club mention.
    pub const MENTIONS: Flags = Flags(1 << 2);
    /// `>` starts a reply marker (line start or after whitespace).
    pub const REPLIES: Flags = Flags(1 << 3);
    /// Leading `>` reads as a quote marker (shares the entry with REPLIES).
    pub const QUOTES: Flags = Flags(1 << 4);
    /// Inline emphasis spans: delimiter + `[` ... `]` + delimiter.
    pub const RICH: Flags = Flags(1 << 5);
    /// `[[image]` / `[{video}` placeholders at line start.
    pub const MEDIA: Flags = Flags(1 << 6);
    /// `{[music}` placeholder at line start.
    pub const MUSIC: Flags = Flags(1 << 7);
    /// `{{link}}` placeholder anywhere.
    pub const LINKS: Flags = Flags(1 << 8);
    /// `- ` unordered and `1. ` ordered list markers at line start.
    pub const LISTS: Flags = Flags(1 << 9);
    /// Hyphens-only line as a horizontal rule.
    pub const HR: Flags = Flags(1 << 10);

    /// Every family enabled.
    pub const ALL: Flags = Flags(0b0000_0111_1111_1111);

    /// Whether every family in `other` is enabled in `self`.
    pub fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether at least one family in `other` is enabled in `self`.
    pub fn intersects(self, other: Flags) -> bool {
        self.0 & other.0 != 0
    }

    /// The raw mask, for callers that persist or exchange flags as integers.
    pub fn bits(self) -> u16 {
        self.0
    }

    /// Build a set from a raw mask, ignoring bits outside the defined layout.
    pub fn from_bits_truncate(bits: u16) -> Flags {
        Flags(bits & Flags::ALL.0)
    }
}

impl std::ops::BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

impl Default for Flags {
    fn default() -> Flags {
        Flags::NONE
    }
}
