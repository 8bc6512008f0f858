//! The tokenizer's output unit.

use std::fmt;

use crate::TokenType;

/// A single token produced by [`Tokenizer::next_token`](crate::Tokenizer::next_token).
///
/// `offset` and `len_in_source` are measured in characters of the original
/// input. `len_in_source` can differ from the character count of `text`:
/// a doubled geresh is folded into one gershayim, a geresh the preceding
/// letter does not accept is dropped, and trailing marks are trimmed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenType,
    pub text: String,
    /// Character offset of the first character of the token.
    pub offset: usize,
    /// Characters of input spanned by the token.
    pub len_in_source: usize,
}

impl Token {
    /// The end-of-stream sentinel: no flags, empty text.
    pub fn end() -> Self {
        Self::default()
    }

    /// Returns `true` for the end-of-stream sentinel.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.kind.is_end()
    }

    /// Character offset one past the end of the token in the input.
    #[inline]
    pub fn end_offset(&self) -> usize {
        self.offset + self.len_in_source
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] @{}", self.text, self.kind, self.offset)
    }
}
