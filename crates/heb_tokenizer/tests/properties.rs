//! Property-based tests for the tokenizer.
//!
//! Inputs are drawn from an alphabet weighted towards the characters the
//! classification rules care about: Hebrew letters (geresh-accepting and
//! not), niqqud, both quote marks, hyphens, Latin letters, digits and
//! separators.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::non_ascii_literal,
    reason = "Proptest macros and Hebrew inputs"
)]

use heb_tokenizer::chars::{is_hebrew_letter, is_letter_or_digit, is_niqqud, GERESH, GERSHAYIM};
use heb_tokenizer::{tokenize, ReaderSource, StrSource, Token, Tokenizer, TokenizerConfig};
use proptest::prelude::*;

fn alphabet() -> impl Strategy<Value = char> {
    prop_oneof![
        4 => prop::sample::select(vec!['א', 'ב', 'ד', 'ה', 'ו', 'ל', 'ם', 'ש']),
        2 => prop::sample::select(vec!['ג', 'ז', 'ח', 'צ', 'ץ']),
        1 => prop::sample::select(vec!['\u{05B0}', '\u{05B7}', '\u{05BC}', '\u{05C1}']),
        2 => Just(GERESH),
        1 => Just(GERSHAYIM),
        1 => Just('-'),
        2 => prop::sample::select(vec!['a', 'z', 'Q', 'é', 'я']),
        2 => prop::sample::select(vec!['0', '7', '9']),
        1 => prop::sample::select(vec!['½', '²']),
        2 => prop::sample::select(vec![' ', '\n', ',', '.', '!']),
    ]
}

fn text() -> impl Strategy<Value = String> {
    prop::collection::vec(alphabet(), 0..120).prop_map(|chars| chars.into_iter().collect())
}

fn lex_with(text: &str, config: TokenizerConfig) -> Vec<Token> {
    Tokenizer::with_config(StrSource::new(text), config)
        .expect("valid config")
        .map(Result::unwrap)
        .collect()
}

proptest! {
    /// Chunk size is invisible in the output.
    #[test]
    fn chunking_does_not_change_tokens(input in text(), chunk_size in 1usize..16) {
        let whole = tokenize(&input);
        let chunked = lex_with(&input, TokenizerConfig::default().with_chunk_size(chunk_size));
        prop_assert_eq!(whole, chunked);
    }

    /// Decoding from a byte reader gives the same tokens as reading a `&str`.
    #[test]
    fn reader_source_matches_str_source(input in text(), capacity in 4usize..12) {
        let from_reader: Vec<Token> = Tokenizer::new(ReaderSource::with_capacity(input.as_bytes(), capacity))
            .map(Result::unwrap)
            .collect();
        prop_assert_eq!(tokenize(&input), from_reader);
    }

    /// No token holds both a Hebrew letter and a non-Hebrew letter or digit.
    #[test]
    fn tokens_never_mix_scripts(input in text()) {
        for token in tokenize(&input) {
            let hebrew = token.text.chars().any(is_hebrew_letter);
            let foreign = token
                .text
                .chars()
                .any(|c| is_letter_or_digit(c) && !is_hebrew_letter(c) && !is_niqqud(c));
            prop_assert!(!(hebrew && foreign), "mixed token {:?}", token.text);
        }
    }

    /// Tokens come out in input order and never overlap.
    #[test]
    fn spans_are_ordered_and_disjoint(input in text()) {
        let tokens = tokenize(&input);
        let len = input.chars().count();
        let mut previous_end = 0;
        for token in &tokens {
            prop_assert!(token.offset >= previous_end);
            prop_assert!(token.len_in_source >= 1);
            prop_assert!(token.end_offset() <= len);
            previous_end = token.end_offset();
        }
    }

    /// Without quote marks nothing is normalized: every token is the exact
    /// slice of input it spans.
    #[test]
    fn tokens_are_input_slices_without_quotes(input in text()) {
        let input: String = input.chars().filter(|&c| c != GERESH && c != GERSHAYIM).collect();
        let chars: Vec<char> = input.chars().collect();
        for token in tokenize(&input) {
            let slice: String = chars[token.offset..token.end_offset()].iter().collect();
            prop_assert_eq!(&token.text, &slice);
        }
    }

    /// Every token respects the configured maximum length.
    #[test]
    fn max_word_length_is_respected(input in text(), max in 1usize..6) {
        for token in lex_with(&input, TokenizerConfig::default().with_max_word_length(max)) {
            prop_assert!(token.text.chars().count() <= max, "{:?} longer than {}", token.text, max);
            prop_assert!(!token.text.is_empty());
        }
    }

    /// After the last token the tokenizer keeps reporting end of stream.
    #[test]
    fn end_of_stream_is_sticky(input in text()) {
        let mut tokenizer = Tokenizer::for_text(&input);
        while !tokenizer.next_token().unwrap().is_end() {}
        let consumed = tokenizer.offset();
        prop_assert_eq!(consumed, input.chars().count());
        for _ in 0..3 {
            prop_assert_eq!(tokenizer.next_token().unwrap(), Token::end());
            prop_assert_eq!(tokenizer.offset(), consumed);
        }
    }

    /// A gershayim never dangles at the end of a token.
    #[test]
    fn no_trailing_gershayim(input in text()) {
        for token in tokenize(&input) {
            prop_assert!(!token.text.ends_with(GERSHAYIM), "{:?}", token.text);
        }
    }
}
