//! Pairwise rhyme classification.
//!
//! The dictionary path compares rhyme-relevant phoneme tails (from the
//! last stressed vowel onward); the spelling path is a defensive fallback
//! for words without entries.

use crate::dictionary::{stress_digit, strip_stress, PhoneticDictionary};
use crate::types::RhymeType;

/// ARPABET vowels close enough to carry a slant rhyme.
const SIMILAR_VOWEL_GROUPS: &[&[&str]] = &[
    &["IY", "IH", "EY"],
    &["EH", "AE"],
    &["AA", "AH", "AO"],
    &["OW", "UW", "UH"],
    &["AY", "OY"],
    &["AW", "OW"],
];

fn similar_vowels(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    SIMILAR_VOWEL_GROUPS
        .iter()
        .any(|group| group.contains(&a) && group.contains(&b))
}

/// Last `n` characters of a word (the whole word when shorter).
fn spelling_tail(word: &str, n: usize) -> &str {
    let len = word.chars().count();
    match word.char_indices().nth(len.saturating_sub(n)) {
        Some((i, _)) => &word[i..],
        None => word,
    }
}

/// Rhyme-relevant tail: phones from the last primary/secondary-stressed
/// vowel to the end. Falls back to the last vowel, then the full
/// sequence, so a consonant-only pronunciation still classifies.
fn rhyme_tail<'a>(dict: &PhoneticDictionary, phones: &'a [String]) -> &'a [String] {
    if let Some(i) = phones
        .iter()
        .rposition(|p| dict.is_vowel(p) && matches!(stress_digit(p), Some(1) | Some(2)))
    {
        return &phones[i..];
    }
    if let Some(i) = phones.iter().rposition(|p| dict.is_vowel(p)) {
        return &phones[i..];
    }
    phones
}

fn classify_by_phones(
    dict: &PhoneticDictionary,
    word1: &str,
    word2: &str,
    phones1: &[String],
    phones2: &[String],
) -> RhymeType {
    let tail1: Vec<&str> = rhyme_tail(dict, phones1)
        .iter()
        .map(|p| strip_stress(p))
        .collect();
    let tail2: Vec<&str> = rhyme_tail(dict, phones2)
        .iter()
        .map(|p| strip_stress(p))
        .collect();

    if tail1 == tail2 {
        return RhymeType::Perfect;
    }

    let v1 = tail1.iter().find(|p| dict.is_vowel(p));
    let v2 = tail2.iter().find(|p| dict.is_vowel(p));
    if let (Some(v1), Some(v2)) = (v1, v2) {
        if similar_vowels(v1, v2) {
            return RhymeType::Slant;
        }
    }

    if spelling_tail(word1, 3) == spelling_tail(word2, 3) {
        return RhymeType::Eye;
    }

    RhymeType::None
}

/// Spelling-only classification for words without dictionary entries.
fn classify_by_spelling(word1: &str, word2: &str) -> RhymeType {
    if spelling_tail(word1, 3) == spelling_tail(word2, 3) {
        RhymeType::Perfect
    } else if spelling_tail(word1, 2) == spelling_tail(word2, 2) {
        RhymeType::Slant
    } else {
        RhymeType::None
    }
}

/// Classify the rhyme relationship between two cleaned words.
///
/// Identical words never rhyme with themselves. The relation is
/// symmetric: `classify_rhyme(a, b) == classify_rhyme(b, a)`.
pub fn classify_rhyme(dict: &PhoneticDictionary, word1: &str, word2: &str) -> RhymeType {
    if word1 == word2 {
        return RhymeType::None;
    }

    match (dict.lookup(word1), dict.lookup(word2)) {
        (Some(e1), Some(e2)) => classify_by_phones(dict, word1, word2, &e1.phones, &e2.phones),
        _ => classify_by_spelling(word1, word2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::tests::test_dict;

    #[test]
    fn test_self_rhyme_excluded() {
        let dict = test_dict();
        for w in ["cat", "love", "glorp"] {
            assert_eq!(classify_rhyme(&dict, w, w), RhymeType::None);
        }
    }

    #[test]
    fn test_perfect_rhymes() {
        let dict = test_dict();
        assert_eq!(classify_rhyme(&dict, "light", "night"), RhymeType::Perfect);
        assert_eq!(classify_rhyme(&dict, "cat", "mat"), RhymeType::Perfect);
        assert_eq!(classify_rhyme(&dict, "love", "above"), RhymeType::Perfect);
        assert_eq!(classify_rhyme(&dict, "fire", "desire"), RhymeType::Perfect);
    }

    #[test]
    fn test_slant_rhyme_similar_vowel() {
        let dict = test_dict();
        // green (IY) vs win (IH): different tails, similar vowels
        assert_eq!(classify_rhyme(&dict, "green", "win"), RhymeType::Slant);
        // dog (AO G) vs on (AA N): AO and AA share a group
        assert_eq!(classify_rhyme(&dict, "dog", "on"), RhymeType::Slant);
    }

    #[test]
    fn test_eye_rhyme_spelling_match() {
        let dict = test_dict();
        // love (AH V) / move (UW V): tails differ, vowels share no
        // similarity group, but the last three letters agree
        assert_eq!(classify_rhyme(&dict, "love", "move"), RhymeType::Eye);
        assert_eq!(classify_rhyme(&dict, "move", "love"), RhymeType::Eye);
    }

    #[test]
    fn test_non_rhyme() {
        let dict = test_dict();
        assert_eq!(classify_rhyme(&dict, "mat", "log"), RhymeType::None);
        assert_eq!(classify_rhyme(&dict, "day", "moon"), RhymeType::None);
    }

    #[test]
    fn test_symmetry() {
        let dict = test_dict();
        let pairs = [
            ("light", "night"),
            ("green", "win"),
            ("mat", "log"),
            ("glorp", "blorp"),
            ("cat", "desire"),
        ];
        for (a, b) in pairs {
            assert_eq!(
                classify_rhyme(&dict, a, b),
                classify_rhyme(&dict, b, a),
                "pair ({}, {})",
                a,
                b
            );
        }
    }

    #[test]
    fn test_spelling_fallback() {
        let dict = test_dict();
        // Neither word has an entry: suffix comparison applies
        assert_eq!(classify_rhyme(&dict, "glorp", "blorp"), RhymeType::Perfect);
        assert_eq!(classify_rhyme(&dict, "glorp", "chirp"), RhymeType::Slant);
        assert_eq!(classify_rhyme(&dict, "glorp", "zzz"), RhymeType::None);
    }

    #[test]
    fn test_fallback_when_one_entry_missing() {
        let dict = test_dict();
        // "night" is in the dictionary, "zight" is not
        assert_eq!(classify_rhyme(&dict, "night", "zight"), RhymeType::Perfect);
    }

    #[test]
    fn test_no_vowel_pronunciation_uses_full_tail() {
        let dict = test_dict();
        // "hmm" has consonant-only phones; must not panic, must classify
        let t = classify_rhyme(&dict, "hmm", "cat");
        assert_eq!(t, RhymeType::None);
    }

    #[test]
    fn test_short_word_spelling_tail() {
        // Whole word compared when shorter than the window
        assert_eq!(spelling_tail("be", 3), "be");
        assert_eq!(spelling_tail("night", 3), "ght");
    }
}
