//! Phonetic dictionary adapter.
//!
//! Loads a word -> pronunciation mapping from a JSON file:
//!
//! ```json
//! {
//!   "words": { "cat": { "phones": ["K", "AE1", "T"], "syllables": 1, "stress": [1] } },
//!   "phoneKey": { "vowels": ["AA", "AE", ...], "consonants": ["B", "CH", ...] }
//! }
//! ```
//!
//! Lookup misses are never errors; callers recover via the fallback
//! estimator. Only file/parse failures are fatal.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::types::PhoneticEntry;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed dictionary JSON in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Which phoneme symbols are vowels vs consonants.
#[derive(Debug, Clone, Deserialize)]
pub struct PhoneKey {
    pub vowels: Vec<String>,
    pub consonants: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DictionaryFile {
    words: HashMap<String, PhoneticEntry>,
    phone_key: PhoneKey,
}

/// In-memory phonetic dictionary with a vowel lookup table.
#[derive(Debug)]
pub struct PhoneticDictionary {
    words: HashMap<String, PhoneticEntry>,
    vowels: HashSet<String>,
}

impl PhoneticDictionary {
    /// Load a dictionary from a JSON file.
    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        let data = std::fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: DictionaryFile =
            serde_json::from_str(&data).map_err(|source| DictionaryError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::from_file(file))
    }

    /// Parse a dictionary from a JSON string (tests, embedded fixtures).
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let file: DictionaryFile = serde_json::from_str(json)?;
        Ok(Self::from_file(file))
    }

    fn from_file(file: DictionaryFile) -> Self {
        let mut words = HashMap::with_capacity(file.words.len());
        for (word, entry) in file.words {
            // Schema invariant: one stress digit per syllable
            if entry.stress.len() != entry.syllables {
                log::warn!(
                    "skipping dictionary entry '{}': {} stress digits for {} syllables",
                    word,
                    entry.stress.len(),
                    entry.syllables
                );
                continue;
            }
            words.insert(word.to_lowercase(), entry);
        }
        let vowels = file.phone_key.vowels.into_iter().collect();
        PhoneticDictionary { words, vowels }
    }

    /// Look up a cleaned (lowercase) word.
    pub fn lookup(&self, word: &str) -> Option<&PhoneticEntry> {
        self.words.get(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether a phone is a vowel, ignoring any trailing stress digit.
    pub fn is_vowel(&self, phone: &str) -> bool {
        self.vowels.contains(strip_stress(phone))
    }
}

/// Strip a trailing stress digit (0, 1, 2) from an ARPABET phone.
pub fn strip_stress(phone: &str) -> &str {
    phone.trim_end_matches(|c: char| c.is_ascii_digit())
}

/// Stress digit carried by a phone, if any.
pub fn stress_digit(phone: &str) -> Option<u8> {
    phone
        .as_bytes()
        .last()
        .filter(|b| b.is_ascii_digit())
        .map(|b| b - b'0')
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Small fixture dictionary shared by module tests.
    pub(crate) fn test_dict() -> PhoneticDictionary {
        PhoneticDictionary::from_json(
            r#"{
            "words": {
                "the":    { "phones": ["DH", "AH0"], "syllables": 1, "stress": [0] },
                "cat":    { "phones": ["K", "AE1", "T"], "syllables": 1, "stress": [1] },
                "sat":    { "phones": ["S", "AE1", "T"], "syllables": 1, "stress": [1] },
                "mat":    { "phones": ["M", "AE1", "T"], "syllables": 1, "stress": [1] },
                "on":     { "phones": ["AA1", "N"], "syllables": 1, "stress": [1] },
                "dog":    { "phones": ["D", "AO1", "G"], "syllables": 1, "stress": [1] },
                "log":    { "phones": ["L", "AO1", "G"], "syllables": 1, "stress": [1] },
                "light":  { "phones": ["L", "AY1", "T"], "syllables": 1, "stress": [1] },
                "night":  { "phones": ["N", "AY1", "T"], "syllables": 1, "stress": [1] },
                "bright": { "phones": ["B", "R", "AY1", "T"], "syllables": 1, "stress": [1] },
                "day":    { "phones": ["D", "EY1"], "syllables": 1, "stress": [1] },
                "way":    { "phones": ["W", "EY1"], "syllables": 1, "stress": [1] },
                "love":   { "phones": ["L", "AH1", "V"], "syllables": 1, "stress": [1] },
                "move":   { "phones": ["M", "UW1", "V"], "syllables": 1, "stress": [1] },
                "above":  { "phones": ["AH0", "B", "AH1", "V"], "syllables": 2, "stress": [0, 1] },
                "heart":  { "phones": ["HH", "AA1", "R", "T"], "syllables": 1, "stress": [1] },
                "apart":  { "phones": ["AH0", "P", "AA1", "R", "T"], "syllables": 2, "stress": [0, 1] },
                "fire":   { "phones": ["F", "AY1", "ER0"], "syllables": 2, "stress": [1, 0] },
                "desire": { "phones": ["D", "IH0", "Z", "AY1", "ER0"], "syllables": 3, "stress": [0, 1, 0] },
                "moon":   { "phones": ["M", "UW1", "N"], "syllables": 1, "stress": [1] },
                "soon":   { "phones": ["S", "UW1", "N"], "syllables": 1, "stress": [1] },
                "green":  { "phones": ["G", "R", "IY1", "N"], "syllables": 1, "stress": [1] },
                "win":    { "phones": ["W", "IH1", "N"], "syllables": 1, "stress": [1] },
                "running": { "phones": ["R", "AH1", "N", "IH0", "NG"], "syllables": 2, "stress": [1, 0] },
                "sunning": { "phones": ["S", "AH1", "N", "IH0", "NG"], "syllables": 2, "stress": [1, 0] },
                "nation":  { "phones": ["N", "EY1", "SH", "AH0", "N"], "syllables": 2, "stress": [1, 0] },
                "station": { "phones": ["S", "T", "EY1", "SH", "AH0", "N"], "syllables": 2, "stress": [1, 0] },
                "hmm":    { "phones": ["HH", "M"], "syllables": 1, "stress": [1] }
            },
            "phoneKey": {
                "vowels": ["AA", "AE", "AH", "AO", "AW", "AY", "EH", "ER", "EY", "IH", "IY", "OW", "OY", "UH", "UW"],
                "consonants": ["B", "CH", "D", "DH", "F", "G", "HH", "JH", "K", "L", "M", "N", "NG", "P", "R", "S", "SH", "T", "TH", "V", "W", "Y", "Z", "ZH"]
            }
        }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_lookup_hit_and_miss() {
        let dict = test_dict();
        assert!(dict.lookup("cat").is_some());
        assert!(dict.lookup("xyzzyplugh").is_none());
    }

    #[test]
    fn test_is_vowel_ignores_stress() {
        let dict = test_dict();
        assert!(dict.is_vowel("AE1"));
        assert!(dict.is_vowel("AH0"));
        assert!(dict.is_vowel("ER"));
        assert!(!dict.is_vowel("K"));
        assert!(!dict.is_vowel("NG"));
    }

    #[test]
    fn test_strip_stress() {
        assert_eq!(strip_stress("AE1"), "AE");
        assert_eq!(strip_stress("IY0"), "IY");
        assert_eq!(strip_stress("K"), "K");
    }

    #[test]
    fn test_stress_digit() {
        assert_eq!(stress_digit("AE1"), Some(1));
        assert_eq!(stress_digit("AH0"), Some(0));
        assert_eq!(stress_digit("ER2"), Some(2));
        assert_eq!(stress_digit("K"), None);
    }

    #[test]
    fn test_invalid_entry_skipped() {
        let dict = PhoneticDictionary::from_json(
            r#"{
            "words": {
                "bad": { "phones": ["B", "AE1", "D"], "syllables": 2, "stress": [1] },
                "good": { "phones": ["G", "UH1", "D"], "syllables": 1, "stress": [1] }
            },
            "phoneKey": { "vowels": ["AE", "UH"], "consonants": ["B", "D", "G"] }
        }"#,
        )
        .unwrap();
        assert!(dict.lookup("bad").is_none());
        assert!(dict.lookup("good").is_some());
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_malformed_json() {
        assert!(PhoneticDictionary::from_json("{ not json").is_err());
    }
}
