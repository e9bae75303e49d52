//! Per-line phonetic decomposition.
//!
//! Splits a line into words, resolves each against the dictionary (or the
//! fallback estimator on a miss), and aggregates syllable totals and a
//! combined stress string.

use crate::dictionary::PhoneticDictionary;
use crate::estimate::estimate_entry;
use crate::text::clean_word;
use crate::types::{LineAnalysis, Source, WordAnalysis};

/// Stress digits rendered as `/` (stressed) and `u` (unstressed).
fn stress_markers(stress: &[u8]) -> String {
    stress
        .iter()
        .map(|&s| if s > 0 { '/' } else { 'u' })
        .collect()
}

/// Resolve one cleaned word to a `WordAnalysis`.
fn analyze_word(dict: &PhoneticDictionary, raw: &str, cleaned: String) -> WordAnalysis {
    match dict.lookup(&cleaned) {
        Some(entry) => WordAnalysis {
            raw_token: raw.to_string(),
            cleaned_word: cleaned,
            source: Source::Dictionary,
            entry: entry.clone(),
        },
        None => {
            log::debug!("dictionary miss, estimating: {}", cleaned);
            let entry = estimate_entry(&cleaned);
            WordAnalysis {
                raw_token: raw.to_string(),
                cleaned_word: cleaned,
                source: Source::Estimated,
                entry,
            }
        }
    }
}

/// Analyze one line of text.
pub fn analyze_line(dict: &PhoneticDictionary, line: &str) -> LineAnalysis {
    let mut words = Vec::new();
    for token in line.split_whitespace() {
        let cleaned = clean_word(token);
        if cleaned.is_empty() {
            continue;
        }
        words.push(analyze_word(dict, token, cleaned));
    }

    let syllable_count = words.iter().map(|w| w.entry.syllables).sum();
    let stress_pattern = words
        .iter()
        .map(|w| {
            let mut block = stress_markers(&w.entry.stress);
            if w.is_estimated() {
                block.push('?');
            }
            block
        })
        .collect::<Vec<_>>()
        .join(" ");

    LineAnalysis {
        text: line.to_string(),
        words,
        syllable_count,
        stress_pattern,
    }
}

/// Analyze each line independently.
pub fn analyze_lines(dict: &PhoneticDictionary, lines: &[String]) -> Vec<LineAnalysis> {
    lines.iter().map(|l| analyze_line(dict, l)).collect()
}
