//! Streaming tokenizer for Hebrew text.
//!
//! Splits a character stream into tokens for a Hebrew morphological
//! analyzer. Hebrew words keep their niqqud, geresh and gershayim so the
//! analyzer can use them; hyphenated construct forms are split and flagged;
//! everything that is not Hebrew comes out as opaque letter-or-digit runs.
//!
//! Input is pulled through a fixed-size chunk from any [`CharSource`], so
//! the text never has to be in memory as a whole.
//!
//! ```
//! use heb_tokenizer::{tokenize, TokenType};
//!
//! let tokens = tokenize("בית-ספר של צה\"ל");
//! assert_eq!(tokens[0].text, "בית");
//! assert_eq!(tokens[0].kind, TokenType::HEBREW | TokenType::CONSTRUCT);
//! assert_eq!(tokens[3].text, "צה\"ל");
//! assert_eq!(tokens[3].kind, TokenType::HEBREW | TokenType::ACRONYM);
//! ```

pub mod chars;
mod config;
mod source;
mod token;
mod token_type;
mod tokenizer;

use std::sync::Once;

pub use config::{ConfigError, TokenizerConfig, DEFAULT_CHUNK_SIZE, DEFAULT_MAX_WORD_LENGTH};
pub use source::{CharSource, ReaderSource, SourceError, StrSource};
pub use token::Token;
pub use token_type::TokenType;
pub use tokenizer::{tokenize, Tokenizer};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set
/// (e.g. `RUST_LOG=heb_tokenizer=trace`), and leaves an already-installed
/// global subscriber in place.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
