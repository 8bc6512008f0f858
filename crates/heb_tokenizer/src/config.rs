//! Tokenizer configuration.

use thiserror::Error;

/// Characters requested from the source per read.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Longest word the downstream analyzer accepts (hspell's limit).
pub const DEFAULT_MAX_WORD_LENGTH: usize = 100;

/// Buffer sizes for a [`Tokenizer`](crate::Tokenizer).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// Characters requested from the source per read.
    pub chunk_size: usize,
    /// Longest token text, in characters. Longer runs are split: the
    /// character that would overflow is not dropped but starts the next token.
    pub max_word_length: usize,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig {
            chunk_size: DEFAULT_CHUNK_SIZE,
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
        }
    }
}

impl TokenizerConfig {
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    #[must_use]
    pub fn with_max_word_length(mut self, max_word_length: usize) -> Self {
        self.max_word_length = max_word_length;
        self
    }

    /// Reject sizes the tokenizer cannot make progress with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        if self.max_word_length == 0 {
            return Err(ConfigError::ZeroMaxWordLength);
        }
        Ok(())
    }
}

/// Rejected [`TokenizerConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("chunk size must be at least one character")]
    ZeroChunkSize,
    #[error("maximum word length must be at least one character")]
    ZeroMaxWordLength,
}
