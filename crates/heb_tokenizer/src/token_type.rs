//! Token classification flags.
//!
//! A token's type is a set, not a single kind: a Hebrew acronym is
//! `HEBREW | ACRONYM`, a number is `NON_HEBREW | NUMERIC`. The empty set
//! marks the end of the stream.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Classification flags for a single token.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TokenType: u8 {
        /// Hebrew letters, optionally with niqqud.
        const HEBREW = 1 << 0;
        /// Letters or digits outside the Hebrew letter range.
        const NON_HEBREW = 1 << 1;
        /// Contains at least one digit.
        const NUMERIC = 1 << 2;
        /// Ended by a hyphen joining it to the next word.
        const CONSTRUCT = 1 << 3;
        /// Contains a geresh or gershayim.
        const ACRONYM = 1 << 4;
    }
}

/// Size assertion: the flag set must stay one byte.
const _: () = assert!(std::mem::size_of::<TokenType>() == 1);

impl TokenType {
    /// The "no token" sentinel returned at end of stream.
    pub const END: Self = Self::empty();

    /// Returns `true` for the end-of-stream sentinel.
    #[inline]
    pub const fn is_end(self) -> bool {
        self.is_empty()
    }

    /// Analysis type string for search-engine token attributes.
    ///
    /// Hebrew tokens report their most specific marker: construct over
    /// acronym over plain Hebrew. Returns `None` for the sentinel.
    pub const fn signature(self) -> Option<&'static str> {
        if self.is_empty() {
            None
        } else if self.contains(Self::HEBREW) {
            if self.contains(Self::CONSTRUCT) {
                Some("<CONSTRUCT>")
            } else if self.contains(Self::ACRONYM) {
                Some("<ACRONYM>")
            } else {
                Some("<HEBREW>")
            }
        } else if self.contains(Self::NUMERIC) {
            Some("<NUM>")
        } else {
            Some("<NON_HEBREW>")
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("END");
        }
        bitflags::parser::to_writer(self, f)
    }
}
