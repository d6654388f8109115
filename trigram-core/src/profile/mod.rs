//! Trigram frequency profiles.
//!
//! A profile summarizes the padded trigrams of a text in one of two
//! interchangeable shapes:
//! - **Frequency mapping** ([`FrequencyMap`]): distinct trigram to count
//! - **Tuple list** (`Vec<TrigramTuple>`): `(trigram, count)` pairs sorted
//!   ascending by count
//!
//! [`tuples_as_dictionary`] turns a tuple list back into a mapping, so
//! `tuples_as_dictionary(&as_tuples(x)) == as_dictionary(x)` for any `x`.
//!
//! Nothing here holds state between calls; all types are `Send + Sync`.

use rustc_hash::FxHashMap;
use trigram_types::Trigram;

pub mod frequency;
pub mod tuples;

pub use frequency::{as_dictionary, count_into};
pub use tuples::{as_tuples, as_tuples_with, into_tuples, sort_tuples, tuples_as_dictionary};

/// Mapping from distinct trigram to its occurrence count.
pub type FrequencyMap = FxHashMap<Trigram, usize>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::normalizer::{clean, is_collapsible_whitespace, is_excluded};
    use crate::analyzer::trigram::trigrams;
    use proptest::prelude::*;
    use trigram_types::{ProfileConfig, TrigramTuple};

    pub(crate) fn tuples_of(pairs: &[(&str, usize)]) -> Vec<TrigramTuple> {
        pairs
            .iter()
            .map(|&(text, count)| (text.parse().expect("test trigram"), count))
            .collect()
    }

    pub(crate) fn map_of(pairs: &[(&str, usize)]) -> FrequencyMap {
        tuples_of(pairs).into_iter().collect()
    }

    // Mix of letters, the whole exclusion range, assorted whitespace and
    // non-ASCII text.
    const TEXT: &str = "[a-zA-Z!-@ \t\n\r\u{000B}\u{000C}\u{00A0}\u{2003}\u{FEFF}_~éÉßÜüΣσςΟİ你🌍]{0,48}";

    #[test]
    fn helpers_build_expected_shapes() {
        let map = map_of(&[("abc", 2), (" ab", 1)]);
        assert_eq!(map.len(), 2);
        assert_eq!(map[&Trigram::from_chars('a', 'b', 'c')], 2);
    }

    #[test]
    fn pipeline_literals() {
        assert_eq!(clean("Some dirty  text."), "some dirty text");
        assert_eq!(trigrams("test"), [" te", "tes", "est", "st "]);
        assert_eq!(
            as_dictionary("test"),
            map_of(&[(" te", 1), ("tes", 1), ("est", 1), ("st ", 1)])
        );
    }

    proptest! {
        #[test]
        fn clean_text_invariants(input in TEXT) {
            let out = clean(input.as_str());

            prop_assert!(!out.chars().any(is_excluded));
            prop_assert!(!out.contains("  "));
            prop_assert!(out.chars().filter(|&c| is_collapsible_whitespace(c)).all(|c| c == ' '));
            prop_assert!(!out.contains('\u{FEFF}'), "byte order mark left in {:?}", out);
            prop_assert!(!out.starts_with(' '));
            prop_assert!(!out.ends_with(' '));
            prop_assert_eq!(out.to_lowercase(), out.clone());
        }

        #[test]
        fn clean_is_idempotent(input in TEXT) {
            let once = clean(input.as_str());
            prop_assert_eq!(clean(once.as_str()), once);
        }

        #[test]
        fn trigram_count_is_clean_length(input in TEXT) {
            let expected = clean(input.as_str()).chars().count();
            prop_assert_eq!(trigrams(input.as_str()).len(), expected);
        }

        #[test]
        fn counts_sum_to_sequence_length(input in TEXT) {
            let map = as_dictionary(input.as_str());
            prop_assert_eq!(map.values().sum::<usize>(), trigrams(input.as_str()).len());
            prop_assert!(map.values().all(|&c| c > 0));
        }

        #[test]
        fn tuples_are_ascending(input in TEXT) {
            let tuples = as_tuples(input.as_str());
            prop_assert_eq!(tuples.len(), as_dictionary(input.as_str()).len());
            prop_assert!(tuples.windows(2).all(|w| w[0].1 <= w[1].1));
        }

        #[test]
        fn tuples_round_trip(input in TEXT) {
            let expected = as_dictionary(input.as_str());
            prop_assert_eq!(tuples_as_dictionary(&as_tuples(input.as_str())), expected.clone());

            let unordered = as_tuples_with(input.as_str(), ProfileConfig::unordered());
            prop_assert_eq!(tuples_as_dictionary(&unordered), expected);
        }
    }
}
