use serde::{Deserialize, Serialize};

/// Pronunciation record for one word.
///
/// `phones` are ARPABET symbols; vowel phones carry a trailing stress
/// digit (0 = unstressed, 1 = primary, 2 = secondary). `stress` holds one
/// digit per syllable, in order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhoneticEntry {
    pub phones: Vec<String>,
    /// Number of syllables; equals the number of stress-marked vowels
    pub syllables: usize,
    /// Per-syllable stress digits
    pub stress: Vec<u8>,
}

/// Where a word's pronunciation came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Dictionary,
    Estimated,
}

/// One word occurrence within a line, resolved to phonetics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordAnalysis {
    /// Original surface token, punctuation and case intact
    pub raw_token: String,
    /// Lowercased, `[a-z']`-only form used for all lookups
    pub cleaned_word: String,
    pub source: Source,
    pub entry: PhoneticEntry,
}

impl WordAnalysis {
    pub fn is_estimated(&self) -> bool {
        self.source == Source::Estimated
    }
}

/// Phonetic decomposition of a single line of text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineAnalysis {
    pub text: String,
    pub words: Vec<WordAnalysis>,
    /// Sum of per-word syllable counts
    pub syllable_count: usize,
    /// Per-word `/`/`u` blocks joined by spaces, `?` on estimated blocks
    pub stress_pattern: String,
}

/// Relationship between two words' rhyme-relevant phoneme tails.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RhymeType {
    Perfect,
    Slant,
    Eye,
    None,
}

impl RhymeType {
    /// Rhymes that count for scheme letters and retained pair lists.
    pub fn is_scheme_rhyme(self) -> bool {
        matches!(self, RhymeType::Perfect | RhymeType::Slant)
    }
}

impl std::fmt::Display for RhymeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RhymeType::Perfect => "perfect",
            RhymeType::Slant => "slant",
            RhymeType::Eye => "eye",
            RhymeType::None => "none",
        };
        write!(f, "{}", s)
    }
}

/// A retained rhyming word pair. Line indices are 1-based; internal
/// rhymes have `line1 == line2`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RhymePair {
    pub word1: String,
    pub word2: String,
    pub line1: usize,
    pub line2: usize,
    pub rhyme_type: RhymeType,
}
