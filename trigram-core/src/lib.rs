//! Text cleaning and character trigram frequency profiles.
//!
//! The pipeline has four stages, each built on the previous one:
//!
//! 1. [`clean`]: strips `U+0021..=U+0040`, collapses whitespace, trims, lowercases
//! 2. [`trigrams`]: pads the clean text with one space on each side and
//!    slides a 3-character window over it
//! 3. [`as_dictionary`]: counts each distinct trigram
//! 4. [`as_tuples`] / [`tuples_as_dictionary`]: converts between the count
//!    mapping and a list of pairs sorted ascending by count
//!
//! ```
//! use trigram_core::{as_dictionary, as_tuples, clean, trigrams, tuples_as_dictionary};
//!
//! assert_eq!(clean("Some dirty  text."), "some dirty text");
//! assert_eq!(trigrams("test"), [" te", "tes", "est", "st "]);
//!
//! let counts = as_dictionary("testtest");
//! assert_eq!(counts.len(), 6);
//!
//! let tuples = as_tuples("testtest");
//! assert_eq!(tuples.last().map(|&(_, count)| count), Some(2));
//! assert_eq!(tuples_as_dictionary(&tuples), counts);
//! ```
//!
//! Every entry point accepts `impl RawText`; pass `None::<&str>` for an
//! absent value, which behaves like the empty string.

pub mod analyzer;
pub mod profile;

pub use analyzer::{clean, trigrams, RawText, TextNormalizer};
pub use profile::{as_dictionary, as_tuples, as_tuples_with, tuples_as_dictionary, FrequencyMap};
pub use trigram_types::{ProfileConfig, TieBreak, Trigram, TrigramError, TrigramTuple};
