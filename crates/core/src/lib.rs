//! Scansion core — phonetic analysis of lyrics and verse.
//!
//! Two analysis paths share one word-to-phoneme abstraction:
//!
//! - **Meter**: per-line syllable counts and stress patterns, classified
//!   into named metrical feet.
//! - **Rhyme**: end-rhyme scheme letters, rhyme-type classification,
//!   internal rhymes, and quality heuristics for lazy or clichéd pairs.
//!
//! Pronunciations come from an external JSON phonetic dictionary
//! ([`dictionary::PhoneticDictionary`]); out-of-dictionary words fall
//! back to spelling heuristics ([`estimate`]) and are marked as
//! estimated everywhere they surface.

pub mod analyze;
pub mod dictionary;
pub mod estimate;
pub mod meter;
pub mod rhyme;
pub mod text;
pub mod types;
