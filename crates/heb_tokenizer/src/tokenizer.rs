//! Streaming tokenizer over a [`CharSource`].
//!
//! # Design
//!
//! The tokenizer keeps one chunk of input and a cursor into it. Each call to
//! [`Tokenizer::next_token`] pulls characters through the cursor, refilling
//! the chunk on demand, and feeds them to `classify`, which decides per
//! character whether it extends the token, is skipped, ends the token, or
//! belongs to the next token. In the last case the cursor steps back one
//! character; that is the only lookbehind the tokenizer needs, and it never
//! crosses a chunk boundary because the character was just read from the
//! current chunk.
//!
//! Geresh normalization happens on append. A geresh after a letter that does
//! not take one is held provisionally: a second geresh right after it turns
//! the pair into a gershayim (`''` is a common plain-text stand-in for `"`),
//! anything else discards it.

use std::convert::Infallible;
use std::mem;

use crate::chars::{
    accepts_geresh, is_digit, is_hebrew_letter, is_hebrew_or_niqqud, is_letter_or_digit, GERESH,
    GERSHAYIM, MAKAF,
};
use crate::config::{ConfigError, TokenizerConfig};
use crate::source::{CharSource, StrSource};
use crate::{Token, TokenType};

/// What to do with the character just read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    /// Add it to the token.
    Append,
    /// Drop it; no token has started yet.
    Skip,
    /// End the token; the character is consumed.
    Finish,
    /// End the token; the character starts the next one.
    PushBack,
}

/// Decide what `c` does to a token of type `kind` whose last character is
/// `last` (`None` while the token is empty). Flags implied by `c` are added
/// to `kind`.
fn classify(c: char, kind: &mut TokenType, last: Option<char>) -> Step {
    let Some(last) = last else {
        if is_hebrew_letter(c) {
            *kind |= TokenType::HEBREW;
            return Step::Append;
        }
        if is_letter_or_digit(c) {
            *kind |= TokenType::NON_HEBREW;
            if is_digit(c) {
                *kind |= TokenType::NUMERIC;
            }
            return Step::Append;
        }
        // Leading whitespace, punctuation, stray niqqud, fractions.
        return Step::Skip;
    };

    // Non-Hebrew runs are opaque: letters and digits of any other script.
    if kind.contains(TokenType::NON_HEBREW) {
        if is_hebrew_or_niqqud(c) {
            return Step::PushBack;
        }
        if is_letter_or_digit(c) {
            if is_digit(c) {
                *kind |= TokenType::NUMERIC;
            }
            return Step::Append;
        }
        return Step::Finish;
    }

    if is_hebrew_or_niqqud(c) {
        *kind |= TokenType::HEBREW;
        return Step::Append;
    }
    if is_letter_or_digit(c) {
        // No mixed-script tokens.
        return Step::PushBack;
    }
    match c {
        GERSHAYIM if is_hebrew_or_niqqud(last) => {
            *kind |= TokenType::ACRONYM;
            Step::Append
        }
        GERESH if is_hebrew_or_niqqud(last) || last == GERESH => {
            *kind |= TokenType::ACRONYM;
            Step::Append
        }
        MAKAF => {
            *kind |= TokenType::CONSTRUCT;
            Step::Finish
        }
        _ => Step::Finish,
    }
}

/// Streaming Hebrew tokenizer.
///
/// Bound to one [`CharSource`] at a time; [`reset`](Self::reset) rebinds it.
/// Not meant to be shared: every method takes `&mut self` except the
/// accessors.
pub struct Tokenizer<S> {
    source: S,
    config: TokenizerConfig,
    /// Current chunk; `chunk[..len]` came from the last read.
    chunk: Vec<char>,
    len: usize,
    /// Next unread index in `chunk`.
    pos: usize,
    /// Absolute offset of `chunk[0]` in the input.
    chunk_start: usize,
    /// The source returned an empty read; it is never asked again.
    exhausted: bool,
    /// Scratch buffer for the token being built.
    word: Vec<char>,
}

impl<S: CharSource> Tokenizer<S> {
    /// Tokenize `source` with the default configuration.
    pub fn new(source: S) -> Self {
        Self::build(source, TokenizerConfig::default())
    }

    pub fn with_config(source: S, config: TokenizerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(source, config))
    }

    fn build(source: S, config: TokenizerConfig) -> Self {
        Self {
            source,
            config,
            chunk: vec!['\0'; config.chunk_size],
            len: 0,
            pos: 0,
            chunk_start: 0,
            exhausted: false,
            word: Vec::with_capacity(config.max_word_length),
        }
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Characters consumed from the input so far.
    ///
    /// This counts every character the tokenizer has read past, including
    /// the separator that ended the last token. It is not the start of the
    /// last token; use [`Token::offset`] for that.
    pub fn offset(&self) -> usize {
        self.chunk_start + self.pos
    }

    /// Rebind to `source`, dropping all buffered input and restarting
    /// offsets at zero. Returns the previous source.
    pub fn reset(&mut self, source: S) -> S {
        tracing::debug!(consumed = self.offset(), "tokenizer reset");
        self.len = 0;
        self.pos = 0;
        self.chunk_start = 0;
        self.exhausted = false;
        self.word.clear();
        mem::replace(&mut self.source, source)
    }

    /// Extract the next token.
    ///
    /// Returns [`Token::end()`] once the input is exhausted, and again on
    /// every later call. Source faults are returned as-is; the tokenizer
    /// does not retry.
    pub fn next_token(&mut self) -> Result<Token, S::Error> {
        self.word.clear();
        let mut kind = TokenType::empty();
        let mut start = 0;
        let mut end = 0;
        // The last character of `word` is a geresh its letter does not take.
        let mut provisional_geresh = false;

        while let Some(c) = self.bump()? {
            let mut next_kind = kind;
            match classify(c, &mut next_kind, self.last_kept(provisional_geresh)) {
                Step::Skip => {}
                Step::Finish => {
                    kind = next_kind;
                    break;
                }
                Step::PushBack => {
                    self.pos -= 1;
                    break;
                }
                Step::Append => {
                    let first = self.word.is_empty();
                    if !self.append(c, &mut provisional_geresh) {
                        tracing::debug!(
                            max_word_length = self.config.max_word_length,
                            offset = start,
                            "token reached maximum length; splitting"
                        );
                        self.pos -= 1;
                        break;
                    }
                    let at = self.offset() - 1;
                    if first {
                        start = at;
                    }
                    end = at + 1;
                    kind = next_kind;
                }
            }
        }

        if self.word.is_empty() {
            return Ok(Token::end());
        }
        if provisional_geresh {
            self.word.pop();
        }
        Ok(self.finish(kind, start, end))
    }

    /// Last character of the word that will survive, looking past a
    /// provisional geresh.
    fn last_kept(&self, provisional_geresh: bool) -> Option<char> {
        let skip = usize::from(provisional_geresh);
        self.word.iter().rev().nth(skip).copied()
    }

    /// Read the next character, refilling the chunk when it runs out.
    fn bump(&mut self) -> Result<Option<char>, S::Error> {
        if self.pos >= self.len {
            if self.exhausted {
                return Ok(None);
            }
            self.chunk_start += self.len;
            self.len = 0;
            self.pos = 0;
            let n = self.source.read_chars(&mut self.chunk)?;
            if n == 0 {
                tracing::trace!(offset = self.chunk_start, "end of input");
                self.exhausted = true;
                return Ok(None);
            }
            self.len = n.min(self.chunk.len());
            tracing::trace!(
                chars = self.len,
                offset = self.chunk_start,
                "refilled input buffer"
            );
        }
        let c = self.chunk[self.pos];
        self.pos += 1;
        Ok(Some(c))
    }

    /// Add `c` to the word, applying geresh normalization.
    ///
    /// Returns `false` without changing the word if it is already at the
    /// maximum length.
    fn append(&mut self, c: char, provisional_geresh: &mut bool) -> bool {
        if c == GERESH {
            if let Some(&last) = self.word.last() {
                if last == GERESH {
                    if let Some(slot) = self.word.last_mut() {
                        *slot = GERSHAYIM;
                    }
                    *provisional_geresh = false;
                    return true;
                }
                if self.word.len() >= self.config.max_word_length {
                    return false;
                }
                *provisional_geresh = !accepts_geresh(last);
                self.word.push(c);
                return true;
            }
        } else if *provisional_geresh {
            self.word.pop();
            *provisional_geresh = false;
        }
        if self.word.len() >= self.config.max_word_length {
            return false;
        }
        self.word.push(c);
        true
    }

    /// Trim dangling marks and build the token.
    fn finish(&mut self, mut kind: TokenType, start: usize, end: usize) -> Token {
        if self.word.last() == Some(&GERSHAYIM) {
            self.word.pop();
        }
        if let &[.., before, GERESH] = self.word.as_slice() {
            if self.word.len() > 2 && !accepts_geresh(before) {
                self.word.pop();
            }
        }
        let has_marks = self.word.iter().any(|&c| c == GERESH || c == GERSHAYIM);
        kind.set(TokenType::ACRONYM, has_marks);

        Token {
            kind,
            text: self.word.iter().collect(),
            offset: start,
            len_in_source: end - start,
        }
    }
}

impl<'a> Tokenizer<StrSource<'a>> {
    /// Tokenize an in-memory string with the default configuration.
    pub fn for_text(text: &'a str) -> Self {
        Self::new(StrSource::new(text))
    }
}

impl<S: CharSource> Iterator for Tokenizer<S> {
    type Item = Result<Token, S::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(token) if token.is_end() => None,
            other => Some(other),
        }
    }
}

/// Tokenize an in-memory string.
pub fn tokenize(text: &str) -> Vec<Token> {
    Tokenizer::for_text(text)
        .map(|token| token.unwrap_or_else(|never: Infallible| match never {}))
        .collect()
}
