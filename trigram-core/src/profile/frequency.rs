//! Trigram frequency counting.

use trigram_types::Trigram;

use super::FrequencyMap;
use crate::analyzer::input::RawText;
use crate::analyzer::normalizer::clean;
use crate::analyzer::trigram::{count_padded_trigrams, extract_padded_trigrams};

/// Adds the padded trigrams of `clean` to `map`, one count per occurrence.
///
/// `clean` should already be Clean Text. Existing counts are kept, which
/// lets callers merge several texts into one profile.
pub fn count_into(clean: &str, map: &mut FrequencyMap) {
    map.reserve(count_padded_trigrams(clean));
    extract_padded_trigrams(clean, |t: Trigram| {
        *map.entry(t).or_insert(0) += 1;
    });
}

/// Cleans a raw value and counts each distinct padded trigram.
///
/// The counts sum to the length of [`trigrams`](crate::trigrams) for the
/// same value.
///
/// # Example
///
/// ```
/// use trigram_core::as_dictionary;
/// use trigram_types::Trigram;
///
/// let counts = as_dictionary("testtest");
/// assert_eq!(counts[&Trigram::from_chars('t', 'e', 's')], 2);
/// assert_eq!(counts.values().sum::<usize>(), 8);
/// ```
pub fn as_dictionary<V: RawText>(value: V) -> FrequencyMap {
    let clean = clean(value);
    let mut map = FrequencyMap::default();
    count_into(&clean, &mut map);
    map
}
