//! Trigram extraction module.
//!
//! Provides extraction of padded 3-character sequences from Clean Text.
//! Characters are Unicode scalar values, so an astral character such as
//! an emoji counts as one character, not as two UTF-16 surrogate halves.
//! Tables built by counting UTF-16 code units disagree with this crate on
//! text containing such characters.

use core::iter;

use trigram_types::Trigram;

use super::input::RawText;
use super::normalizer::clean;

/// Boundary marker added before and after Clean Text.
pub const PADDING: char = ' ';

#[inline(always)]
fn slide<I, F>(mut chars: I, mut callback: F)
where
    I: Iterator<Item = char>,
    F: FnMut(Trigram),
{
    let (Some(mut c0), Some(mut c1)) = (chars.next(), chars.next()) else {
        return;
    };

    for c2 in chars {
        callback(Trigram::from_chars(c0, c1, c2));
        c0 = c1;
        c1 = c2;
    }
}

/// Extracts trigrams from `clean` padded with one [`PADDING`] on each side.
///
/// The padded string is never allocated. Empty input emits nothing, since
/// the two padding characters alone cannot form a trigram.
///
/// # Example
///
/// ```
/// use trigram_core::analyzer::trigram::extract_padded_trigrams;
///
/// let mut trigrams = Vec::new();
/// extract_padded_trigrams("test", |t| trigrams.push(t));
///
/// assert_eq!(trigrams, [" te", "tes", "est", "st "]);
/// ```
#[inline]
pub fn extract_padded_trigrams<F>(clean: &str, callback: F)
where
    F: FnMut(Trigram),
{
    let padded = iter::once(PADDING)
        .chain(clean.chars())
        .chain(iter::once(PADDING));
    slide(padded, callback);
}

/// Counts padded trigrams without extracting them.
///
/// Padding adds two characters and the window removes two, so this is the
/// character count of `clean`.
#[inline]
pub fn count_padded_trigrams(clean: &str) -> usize {
    clean.chars().count()
}

/// Cleans a raw value and returns its padded trigrams in text order.
///
/// Each astral character (outside the Basic Multilingual Plane) counts as a
/// single character: `trigrams("🌍")` yields one trigram, `" 🌍 "`.
///
/// # Example
///
/// ```
/// use trigram_core::trigrams;
///
/// assert_eq!(trigrams("te@st"), [" te", "te ", "e s", " st", "st "]);
/// assert!(trigrams("").is_empty());
/// ```
pub fn trigrams<V: RawText>(value: V) -> Vec<Trigram> {
    let clean = clean(value);
    let mut out = Vec::with_capacity(count_padded_trigrams(&clean));
    extract_padded_trigrams(&clean, |t| out.push(t));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_basic() {
        let mut trigrams = Vec::new();
        extract_padded_trigrams("test", |t| trigrams.push(t));
        assert_eq!(trigrams, [" te", "tes", "est", "st "]);
    }

    #[test]
    fn padded_short() {
        let mut trigrams = Vec::new();
        extract_padded_trigrams("", |t| trigrams.push(t));
        assert!(trigrams.is_empty());

        extract_padded_trigrams("a", |t| trigrams.push(t));
        assert_eq!(trigrams, [" a "]);
    }

    #[test]
    fn padded_count_matches_extraction() {
        for text in ["", "a", "ab", "test", "te st", "über café"] {
            let mut n = 0;
            extract_padded_trigrams(text, |_| n += 1);
            assert_eq!(n, count_padded_trigrams(text), "text {:?}", text);
        }
    }

    #[test]
    fn windows_are_chars_not_bytes() {
        let mut trigrams = Vec::new();
        extract_padded_trigrams("café", |t| trigrams.push(t));
        assert_eq!(trigrams, [" ca", "caf", "afé", "fé "]);
    }

    #[test]
    fn astral_char_is_one_char() {
        let out = trigrams("\u{1F30D}");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0], Trigram::from_chars(' ', '\u{1F30D}', ' '));
    }

    #[test]
    fn trigrams_literal() {
        assert_eq!(trigrams("test"), [" te", "tes", "est", "st "]);
    }

    #[test]
    fn trigrams_cleans_first() {
        let expected = [" te", "te ", "e s", " st", "st "];
        assert_eq!(trigrams("te@st"), expected);
        assert_eq!(trigrams("\nte\tst "), expected);
    }

    #[test]
    fn trigrams_empty_and_whitespace() {
        assert!(trigrams("").is_empty());
        assert!(trigrams(" \t\n ").is_empty());
        assert!(trigrams(None::<&str>).is_empty());
        assert!(trigrams("!?@").is_empty());
    }

    #[test]
    fn trigrams_length_is_clean_length() {
        for text in ["a", "Hello, World!", "über  café", "x y z"] {
            assert_eq!(trigrams(text).len(), clean(text).chars().count());
        }
    }
}
