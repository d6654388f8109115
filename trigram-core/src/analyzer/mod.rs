//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Input**: Reads any raw value (including absent ones) as text
//! - **Normalizer**: Cleans raw text into lowercase, single-spaced Clean Text
//! - **Trigram**: Extracts padded 3-character sequences from Clean Text

pub mod input;
pub mod normalizer;
pub mod trigram;

pub use input::RawText;
pub use normalizer::{clean, TextNormalizer};
pub use trigram::trigrams;
