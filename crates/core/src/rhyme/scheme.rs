//! End-rhyme scheme assignment and internal rhyme detection.

use serde::{Deserialize, Serialize};

use crate::dictionary::PhoneticDictionary;
use crate::text::{clean_word, end_word};
use crate::types::RhymePair;

use super::classify::classify_rhyme;

/// Scheme letters cycle A..Z then a..z.
fn scheme_letter(n: usize) -> char {
    if n < 26 {
        (b'A' + n as u8) as char
    } else {
        (b'a' + ((n - 26) % 26) as u8) as char
    }
}

/// Result of running the scheme assigner over a stanza.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemeAnalysis {
    /// One letter per input line.
    pub letters: Vec<char>,
    /// Every perfect/slant end-word pair found during assignment.
    pub end_pairs: Vec<RhymePair>,
    /// Retained pair count / max(1, lines - 1).
    pub density: f64,
}

impl SchemeAnalysis {
    pub fn scheme_string(&self) -> String {
        self.letters.iter().collect()
    }
}

/// Assign scheme letters to each line's end word.
///
/// Sequential and order-dependent, not a transitive closure: line `i`
/// takes the letter of the first prior line it rhymes with (perfect or
/// slant), scanning priors from the top. Every qualifying pair is
/// recorded, not just the one that decided the letter.
pub fn assign_scheme(dict: &PhoneticDictionary, lines: &[String]) -> SchemeAnalysis {
    let end_words: Vec<Option<String>> = lines.iter().map(|l| end_word(l)).collect();

    let mut letters: Vec<char> = Vec::with_capacity(lines.len());
    let mut end_pairs: Vec<RhymePair> = Vec::new();
    let mut next_free = 0usize;

    for i in 0..end_words.len() {
        let mut assigned: Option<char> = None;
        if let Some(word_i) = &end_words[i] {
            for j in 0..i {
                let Some(word_j) = &end_words[j] else {
                    continue;
                };
                let rhyme_type = classify_rhyme(dict, word_j, word_i);
                if rhyme_type.is_scheme_rhyme() {
                    end_pairs.push(RhymePair {
                        word1: word_j.clone(),
                        word2: word_i.clone(),
                        line1: j + 1,
                        line2: i + 1,
                        rhyme_type,
                    });
                    // First prior match decides the letter
                    if assigned.is_none() {
                        assigned = Some(letters[j]);
                    }
                }
            }
        }
        letters.push(assigned.unwrap_or_else(|| {
            let c = scheme_letter(next_free);
            next_free += 1;
            c
        }));
    }

    let denominator = std::cmp::max(1, lines.len().saturating_sub(1));
    let density = end_pairs.len() as f64 / denominator as f64;

    SchemeAnalysis {
        letters,
        end_pairs,
        density,
    }
}

/// Qualitative density label at fixed thresholds.
pub fn density_assessment(density: f64) -> &'static str {
    if density == 0.0 {
        "no end rhymes detected"
    } else if density < 0.3 {
        "sparse"
    } else if density < 0.6 {
        "moderate"
    } else {
        "dense"
    }
}

/// Find rhyming word pairs within a single line.
///
/// Considers every pair of word positions whose cleaned form is longer
/// than 2 characters; retains perfect and slant pairs. `line_index` is
/// 1-based and used for both ends of each pair.
pub fn find_internal_rhymes(
    dict: &PhoneticDictionary,
    line_index: usize,
    line: &str,
) -> Vec<RhymePair> {
    let words: Vec<String> = line
        .split_whitespace()
        .map(clean_word)
        .filter(|w| w.chars().count() > 2)
        .collect();

    let mut pairs = Vec::new();
    for a in 0..words.len() {
        for b in (a + 1)..words.len() {
            let rhyme_type = classify_rhyme(dict, &words[a], &words[b]);
            if rhyme_type.is_scheme_rhyme() {
                pairs.push(RhymePair {
                    word1: words[a].clone(),
                    word2: words[b].clone(),
                    line1: line_index,
                    line2: line_index,
                    rhyme_type,
                });
            }
        }
    }
    pairs
}
