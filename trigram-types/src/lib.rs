//! Core types for trigram frequency profiles.
//!
//! This crate provides the value types shared by the profile pipeline.
//! Keeping them separate ensures:
//!
//! - **Allocation-free keys**: a [`Trigram`] is a packed integer, not a `String`
//! - **Cross-crate compatibility**: pretrained tables and the pipeline share one key type
//! - **Clean boundaries**: no dependencies, no circular imports

#![warn(missing_docs)]

use core::fmt;
use core::str::FromStr;

/// Number of bits reserved per character inside a packed [`Trigram`].
///
/// Unicode scalar values top out at U+10FFFF, which fits in 21 bits.
const CHAR_BITS: u32 = 21;
const CHAR_MASK: u64 = (1 << CHAR_BITS) - 1;

/// A trigram (3-character sequence) packed into a 64-bit integer.
///
/// Characters are packed as: `(c0 << 42) | (c1 << 21) | c2`
/// This representation:
/// - Holds any three Unicode scalar values without allocation
/// - Is `Copy` and hashes as a single integer
/// - Orders the same way as comparing the three characters lexicographically
///
/// A character is a Unicode scalar value, not a UTF-16 code unit. An astral
/// character such as an emoji is one character here, so text containing
/// them yields fewer trigrams than a UTF-16 based counter would.
///
/// # Example
///
/// ```
/// use trigram_types::Trigram;
///
/// let t: Trigram = " te".parse().unwrap();
/// assert_eq!(t.chars(), [' ', 't', 'e']);
/// assert_eq!(t, " te");
/// assert_eq!(t.to_string(), " te");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Trigram(u64);

impl Trigram {
    /// Creates a trigram from three characters.
    #[inline(always)]
    pub const fn from_chars(c0: char, c1: char, c2: char) -> Self {
        Self(((c0 as u64) << (CHAR_BITS * 2)) | ((c1 as u64) << CHAR_BITS) | (c2 as u64))
    }

    /// Returns the three characters of this trigram.
    #[inline]
    pub fn chars(self) -> [char; 3] {
        [
            unpack((self.0 >> (CHAR_BITS * 2)) & CHAR_MASK),
            unpack((self.0 >> CHAR_BITS) & CHAR_MASK),
            unpack(self.0 & CHAR_MASK),
        ]
    }

    /// Returns the underlying packed value.
    #[inline(always)]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

// Every packed value originates from a `char`, so the fallback is unreachable.
#[inline(always)]
fn unpack(bits: u64) -> char {
    char::from_u32(bits as u32).unwrap_or(char::REPLACEMENT_CHARACTER)
}

impl From<[char; 3]> for Trigram {
    #[inline(always)]
    fn from([c0, c1, c2]: [char; 3]) -> Self {
        Self::from_chars(c0, c1, c2)
    }
}

impl From<Trigram> for [char; 3] {
    #[inline(always)]
    fn from(t: Trigram) -> Self {
        t.chars()
    }
}

impl FromStr for Trigram {
    type Err = TrigramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next(), chars.next()) {
            (Some(c0), Some(c1), Some(c2), None) => Ok(Self::from_chars(c0, c1, c2)),
            _ => Err(TrigramError::InvalidLength {
                length: s.chars().count(),
            }),
        }
    }
}

impl TryFrom<&str> for Trigram {
    type Error = TrigramError;

    #[inline]
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl PartialEq<str> for Trigram {
    fn eq(&self, other: &str) -> bool {
        other.parse::<Trigram>().is_ok_and(|t| t == *self)
    }
}

impl PartialEq<&str> for Trigram {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl fmt::Display for Trigram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [c0, c1, c2] = self.chars();
        write!(f, "{c0}{c1}{c2}")
    }
}

/// A `(trigram, count)` pair as produced by the tuple shape converter.
pub type TrigramTuple = (Trigram, usize);

/// Errors that can occur when building a [`Trigram`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrigramError {
    /// The text did not hold exactly three characters.
    InvalidLength {
        /// The number of characters actually found.
        length: usize,
    },
}

impl fmt::Display for TrigramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrigramError::InvalidLength { length } => {
                write!(f, "trigram must be exactly 3 characters, got {}", length)
            }
        }
    }
}

impl core::error::Error for TrigramError {}

/// Ordering applied among tuples whose counts are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Equal counts are ordered by trigram code points (deterministic).
    #[default]
    Lexical,
    /// Equal counts keep the iteration order of the frequency mapping.
    Unordered,
}

/// Profile conversion options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProfileConfig {
    /// Secondary ordering for tuples with equal counts.
    /// Default: [`TieBreak::Lexical`]
    pub tie_break: TieBreak,
}

impl ProfileConfig {
    /// Creates a configuration with fully deterministic tuple order.
    pub const fn lexical() -> Self {
        Self {
            tie_break: TieBreak::Lexical,
        }
    }

    /// Creates a configuration that sorts by count only.
    pub const fn unordered() -> Self {
        Self {
            tie_break: TieBreak::Unordered,
        }
    }
}
