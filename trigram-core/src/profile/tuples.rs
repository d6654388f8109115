//! Conversions between frequency mappings and sorted tuple lists.

use trigram_types::{ProfileConfig, TieBreak, TrigramTuple};

use super::frequency::as_dictionary;
use super::FrequencyMap;
use crate::analyzer::input::RawText;

/// Sorts tuples ascending by count.
///
/// Equal counts are ordered according to `tie_break`. [`TieBreak::Unordered`]
/// uses a stable sort on the count alone, so ties keep their input order.
pub fn sort_tuples(tuples: &mut [TrigramTuple], tie_break: TieBreak) {
    match tie_break {
        TieBreak::Lexical => {
            tuples.sort_unstable_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)))
        }
        TieBreak::Unordered => tuples.sort_by_key(|&(_, count)| count),
    }
}

/// Converts a frequency mapping into a tuple list sorted ascending by count.
pub fn into_tuples(map: FrequencyMap, config: ProfileConfig) -> Vec<TrigramTuple> {
    let mut tuples: Vec<TrigramTuple> = map.into_iter().collect();
    sort_tuples(&mut tuples, config.tie_break);
    log::trace!(
        "sorted {} trigram tuples ({:?} tie break)",
        tuples.len(),
        config.tie_break
    );
    tuples
}

/// Cleans a raw value and returns its trigram counts sorted ascending by count.
///
/// Uses [`ProfileConfig::default`], so equal counts are ordered by trigram.
///
/// # Example
///
/// ```
/// use trigram_core::as_tuples;
///
/// let tuples = as_tuples("testtest");
/// let rendered: Vec<String> = tuples
///     .iter()
///     .map(|(t, count)| format!("{t};{count}"))
///     .collect();
///
/// assert_eq!(rendered, [" te;1", "st ;1", "stt;1", "tte;1", "est;2", "tes;2"]);
/// ```
pub fn as_tuples<V: RawText>(value: V) -> Vec<TrigramTuple> {
    as_tuples_with(value, ProfileConfig::default())
}

/// Like [`as_tuples`], with an explicit configuration.
pub fn as_tuples_with<V: RawText>(value: V, config: ProfileConfig) -> Vec<TrigramTuple> {
    into_tuples(as_dictionary(value), config)
}

/// Builds a frequency mapping from a tuple list.
///
/// Tuples are applied in order, so a later tuple for the same trigram
/// overwrites an earlier one. The list does not need to be sorted.
///
/// # Example
///
/// ```
/// use trigram_core::{as_dictionary, as_tuples, tuples_as_dictionary};
///
/// let tuples = as_tuples("some text");
/// assert_eq!(tuples_as_dictionary(&tuples), as_dictionary("some text"));
/// ```
pub fn tuples_as_dictionary(tuples: &[TrigramTuple]) -> FrequencyMap {
    let mut map = FrequencyMap::default();
    map.reserve(tuples.len());

    for &(trigram, count) in tuples {
        if let Some(previous) = map.insert(trigram, count) {
            log::debug!(
                "duplicate trigram {:?} in tuple list, count {} replaced by {}",
                trigram.to_string(),
                previous,
                count
            );
        }
    }

    map
}
