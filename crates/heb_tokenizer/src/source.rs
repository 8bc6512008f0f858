//! Pull-based character sources.
//!
//! The tokenizer never sees the whole input. It asks a [`CharSource`] for
//! up to one chunk of characters at a time and treats a zero-length read as
//! the end of input. Source faults are the source's own error type and
//! reach the caller of [`Tokenizer::next_token`](crate::Tokenizer::next_token)
//! unchanged.

use std::convert::Infallible;
use std::io::{self, Read};

use thiserror::Error;

/// A readable stream of characters.
pub trait CharSource {
    /// Fault raised by the underlying reader.
    type Error;

    /// Read up to `buf.len()` characters into `buf`.
    ///
    /// Returns the number of characters written. `Ok(0)` for a non-empty
    /// `buf` means the source is exhausted.
    fn read_chars(&mut self, buf: &mut [char]) -> Result<usize, Self::Error>;
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    type Error = S::Error;

    #[inline]
    fn read_chars(&mut self, buf: &mut [char]) -> Result<usize, Self::Error> {
        (**self).read_chars(buf)
    }
}

// === In-memory text ===

/// Characters of a borrowed string.
#[derive(Clone, Debug)]
pub struct StrSource<'a> {
    chars: std::str::Chars<'a>,
}

impl<'a> StrSource<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { chars: text.chars() }
    }
}

impl<'a> From<&'a str> for StrSource<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}

impl CharSource for StrSource<'_> {
    type Error = Infallible;

    fn read_chars(&mut self, buf: &mut [char]) -> Result<usize, Infallible> {
        let mut n = 0;
        for (slot, c) in buf.iter_mut().zip(self.chars.by_ref()) {
            *slot = c;
            n += 1;
        }
        Ok(n)
    }
}

// === UTF-8 byte readers ===

/// Bytes pulled from the reader per refill.
const DEFAULT_BYTE_CAPACITY: usize = 8192;

/// Longest UTF-8 sequence; the byte buffer must hold at least one.
const MAX_UTF8_LEN: usize = 4;

/// Fault raised by a [`ReaderSource`].
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("invalid UTF-8 sequence at byte {byte_offset}")]
    InvalidUtf8 { byte_offset: usize },
}

/// Decodes UTF-8 from any [`io::Read`].
///
/// Multi-byte sequences split across reads are carried over to the next
/// refill. Invalid or truncated sequences fail with
/// [`SourceError::InvalidUtf8`] once every character before them has been
/// delivered.
pub struct ReaderSource<R> {
    reader: R,
    bytes: Vec<u8>,
    /// Undecoded bytes are `bytes[start..end]`.
    start: usize,
    end: usize,
    /// Absolute byte offset of `bytes[start]`.
    byte_offset: usize,
    eof: bool,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self::with_capacity(reader, DEFAULT_BYTE_CAPACITY)
    }

    /// Use a byte buffer of `capacity` bytes (at least four).
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self {
            reader,
            bytes: vec![0; capacity.max(MAX_UTF8_LEN)],
            start: 0,
            end: 0,
            byte_offset: 0,
            eof: false,
        }
    }

    /// Bytes decoded so far.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Decode as many whole characters from the pending bytes as fit in `buf`.
    ///
    /// Only the first `buf.len()` characters' worth of bytes is validated; a
    /// sequence cut off at the end of that window waits for the next call.
    fn decode_pending(&mut self, buf: &mut [char]) -> Result<usize, SourceError> {
        let pending = &self.bytes[self.start..self.end];
        let window = &pending[..pending.len().min(buf.len().saturating_mul(MAX_UTF8_LEN))];
        let invalid = SourceError::InvalidUtf8 {
            byte_offset: self.byte_offset,
        };
        let text = match std::str::from_utf8(window) {
            Ok(text) => text,
            Err(e) if e.valid_up_to() == 0 && e.error_len().is_some() => return Err(invalid),
            Err(e) => std::str::from_utf8(&window[..e.valid_up_to()]).map_err(|_| invalid)?,
        };

        let mut n = 0;
        let mut advanced = 0;
        for (slot, c) in buf.iter_mut().zip(text.chars()) {
            *slot = c;
            n += 1;
            advanced += c.len_utf8();
        }
        self.start += advanced;
        self.byte_offset += advanced;
        Ok(n)
    }

    /// Move the undecoded tail to the front and read more bytes behind it.
    fn refill(&mut self) -> Result<(), SourceError> {
        self.bytes.copy_within(self.start..self.end, 0);
        self.end -= self.start;
        self.start = 0;
        loop {
            match self.reader.read(&mut self.bytes[self.end..]) {
                Ok(0) => {
                    self.eof = true;
                    return Ok(());
                }
                Ok(n) => {
                    self.end += n;
                    return Ok(());
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
    }
}

impl<R: Read> CharSource for ReaderSource<R> {
    type Error = SourceError;

    fn read_chars(&mut self, buf: &mut [char]) -> Result<usize, SourceError> {
        if buf.is_empty() {
            return Ok(0);
        }
        loop {
            let n = self.decode_pending(buf)?;
            if n > 0 {
                return Ok(n);
            }
            if self.eof {
                if self.start < self.end {
                    // Input ended inside a multi-byte sequence.
                    return Err(SourceError::InvalidUtf8 {
                        byte_offset: self.byte_offset,
                    });
                }
                return Ok(0);
            }
            self.refill()?;
        }
    }
}
