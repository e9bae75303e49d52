//! Heuristic pronunciation fallback for out-of-dictionary words.
//!
//! A best-effort approximation, not a linguistic analysis: syllables come
//! from vowel-group counting with two spelling adjustments, and stress
//! defaults to a front-stressed pattern. Entries produced here are tagged
//! `estimated` by callers and rendered with a trailing `?` in reports.

use crate::types::PhoneticEntry;

fn is_vowel_letter(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Estimate the syllable count of a word from its spelling.
///
/// Counts vowel-group onsets, then applies the silent-e rule and the
/// weak past-tense `ed` elision. Never returns less than 1.
pub fn estimate_syllables(word: &str) -> usize {
    let word = word.to_lowercase();

    let mut count = 0usize;
    let mut prev_was_vowel = false;
    for c in word.chars() {
        let v = is_vowel_letter(c);
        if v && !prev_was_vowel {
            count += 1;
        }
        prev_was_vowel = v;
    }

    // Silent e: "stone" is one syllable, but "table" keeps its -le
    if word.ends_with('e') && count > 1 && !word.ends_with("le") {
        count -= 1;
    }

    // Weak past tense: "walked" elides -ed, "wanted"/"added" do not
    if word.ends_with("ed") && !word.ends_with("ted") && !word.ends_with("ded") {
        count = count.saturating_sub(1);
    }

    count.max(1)
}

/// Default stress digits for an estimated word.
///
/// 1 syllable: stressed. 2: trochaic default. 3: dactylic default.
/// 4+: initial stress, rest unstressed.
pub fn estimate_stress(syllables: usize) -> Vec<u8> {
    let n = syllables.max(1);
    let mut stress = Vec::with_capacity(n);
    stress.push(1);
    stress.resize(n, 0);
    stress
}

/// Synthesize a `PhoneticEntry` for a word absent from the dictionary.
///
/// No phones are guessed; only syllable count and stress, which is all
/// the meter path needs. Rhyme classification falls back to spelling for
/// words without real entries.
pub fn estimate_entry(word: &str) -> PhoneticEntry {
    let syllables = estimate_syllables(word);
    PhoneticEntry {
        phones: Vec::new(),
        syllables,
        stress: estimate_stress(syllables),
    }
}
