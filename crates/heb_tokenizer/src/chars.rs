//! Character classification tables.
//!
//! All tables are immutable constants shared by every [`Tokenizer`]
//! instance. The ranges and letter sets are normative data: changing them
//! changes which tokens the tokenizer produces.
//!
//! [`Tokenizer`]: crate::Tokenizer

use std::ops::RangeInclusive;

use unicode_general_category::{get_general_category, GeneralCategory};

/// Hebrew letters, Alef (U+05D0) through Tav (U+05EA), final forms included.
pub const HEBREW_LETTERS: RangeInclusive<char> = '\u{05D0}'..='\u{05EA}';

/// Niqqud and cantillation marks, U+05AF through U+05C4.
///
/// The range also covers maqaf, paseq and sof pasuq, which sit between the
/// vowel points in the Unicode block.
pub const NIQQUD: RangeInclusive<char> = '\u{05AF}'..='\u{05C4}';

/// Geresh, typed as a plain apostrophe.
pub const GERESH: char = '\'';

/// Gershayim, typed as a plain double quote.
pub const GERSHAYIM: char = '"';

/// Hyphen marking a construct-state compound (makaf in plain text).
pub const MAKAF: char = '-';

/// Letters whose sound a following geresh modifies (ג׳ ז׳ צ׳ ץ׳ ח׳).
pub const LETTERS_ACCEPTING_GERESH: [char; 5] = ['ז', 'ג', 'ץ', 'צ', 'ח'];

/// Punctuation that may separate a one-letter prefix from the word it is
/// attached to, as in `ה"שטיח` or `ו-לא`.
pub const CHARS_FOLLOWING_PREFIXES: [char; 3] = [GERSHAYIM, GERESH, MAKAF];

/// Returns `true` for a Hebrew letter (niqqud excluded).
#[inline]
pub fn is_hebrew_letter(c: char) -> bool {
    HEBREW_LETTERS.contains(&c)
}

/// Returns `true` for a niqqud or cantillation mark.
#[inline]
pub fn is_niqqud(c: char) -> bool {
    NIQQUD.contains(&c)
}

/// Returns `true` for anything that belongs inside a Hebrew word body.
#[inline]
pub fn is_hebrew_or_niqqud(c: char) -> bool {
    is_hebrew_letter(c) || is_niqqud(c)
}

/// Returns `true` if a geresh after `c` is a legitimate consonant modifier.
#[inline]
pub fn accepts_geresh(c: char) -> bool {
    LETTERS_ACCEPTING_GERESH.contains(&c)
}

/// Returns `true` for punctuation that may follow a prefix.
#[inline]
pub fn is_prefix_follower(c: char) -> bool {
    CHARS_FOLLOWING_PREFIXES.contains(&c)
}

/// Letter-or-digit by Unicode general category: any letter (`L*`) or a
/// decimal digit (`Nd`).
///
/// Combining marks are excluded even where Unicode counts them as
/// alphabetic, so niqqud never qualifies. Hebrew letters do; callers test
/// the Hebrew tables first.
#[inline]
pub fn is_letter_or_digit(c: char) -> bool {
    use GeneralCategory as Gc;
    matches!(
        get_general_category(c),
        Gc::UppercaseLetter
            | Gc::LowercaseLetter
            | Gc::TitlecaseLetter
            | Gc::ModifierLetter
            | Gc::OtherLetter
            | Gc::DecimalNumber
    )
}

/// Decimal digit (`Nd`) of any script. Fractions, superscripts and letter
/// numerals are not digits.
#[inline]
pub fn is_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
}
