//! Text cleaning for trigram profiles.
//!
//! Turns arbitrary input into Clean Text: ASCII punctuation, symbols and
//! digits (U+0021..=U+0040) are replaced by spaces, whitespace runs are
//! collapsed to one space, the ends are trimmed and the result is
//! lowercased.

use std::ops::RangeInclusive;

use super::input::RawText;

/// The fixed exclusion set: `!"#$%&'()*+,-./0123456789:;<=>?@`.
///
/// Pretrained frequency tables are keyed by trigrams produced with exactly
/// this set, so it is not configurable.
pub const EXCLUDED: RangeInclusive<char> = '\u{21}'..='\u{40}';

/// Returns `true` if `c` is in the exclusion set.
#[inline(always)]
pub const fn is_excluded(c: char) -> bool {
    matches!(c, '\u{21}'..='\u{40}')
}

/// Returns `true` if `c` is whitespace under the collapsing rules the
/// trigram tables were built with.
///
/// That set is Unicode `White_Space` without U+0085 (NEL), plus U+FEFF.
#[inline(always)]
pub fn is_collapsible_whitespace(c: char) -> bool {
    match c {
        '\u{85}' => false,
        '\u{FEFF}' => true,
        _ => c.is_whitespace(),
    }
}

#[inline(always)]
fn is_separator(c: char) -> bool {
    is_excluded(c) || is_collapsible_whitespace(c)
}

/// Text normalizer producing Clean Text.
///
/// Performs the following operations:
/// - Replaces every run of excluded characters with a single space
/// - Collapses consecutive whitespace (see [`is_collapsible_whitespace`]) into single spaces
/// - Removes leading/trailing whitespace
/// - Converts all characters to lowercase (Unicode-aware)
///
/// Letters above U+0040 and all non-ASCII characters other than whitespace
/// pass through untouched apart from lowercasing.
///
/// # Examples
///
/// ```
/// use trigram_core::analyzer::normalizer::TextNormalizer;
///
/// let normalizer = TextNormalizer::new();
/// assert_eq!(normalizer.normalize("  Some dirty  text. "), "some dirty text");
/// assert_eq!(normalizer.normalize("te@st 42"), "te st");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TextNormalizer;

impl TextNormalizer {
    /// Creates a new normalizer.
    pub const fn new() -> Self {
        Self
    }

    /// Normalizes text into an existing String buffer.
    ///
    /// Reuses the buffer's capacity if sufficient, growing only when necessary.
    /// Clears the buffer before writing.
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        let mut pending_space = false;
        for ch in input.chars() {
            if is_separator(ch) {
                // Leading separators never emit a space.
                pending_space = !out.is_empty();
                continue;
            }

            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(ch);
        }

        if out.is_ascii() {
            out.make_ascii_lowercase();
        } else {
            // Whole-string lowercasing keeps context rules such as final sigma.
            let lowered = out.to_lowercase();
            out.clear();
            out.push_str(&lowered);
        }
    }

    /// Normalizes text and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }
}

/// Cleans any raw value into Clean Text.
///
/// Absent values (`None`) produce the empty string; non-string values are
/// cleaned through their textual form.
///
/// # Example
///
/// ```
/// use trigram_core::clean;
///
/// assert_eq!(clean("Some dirty  text."), "some dirty text");
/// assert_eq!(clean(None::<&str>), "");
/// assert_eq!(clean(1234), "");
/// ```
pub fn clean<V: RawText>(value: V) -> String {
    TextNormalizer::new().normalize(&value.raw_text())
}
