//! Rhyme analysis: classification, scheme assignment, internal rhymes,
//! and quality heuristics over a stanza.

pub mod classify;
pub mod quality;
pub mod report;
pub mod scheme;

use serde::{Deserialize, Serialize};

use crate::dictionary::PhoneticDictionary;
use crate::types::RhymePair;

use self::quality::{check_pair, find_cliches, QualityLexicon, QualityWarning};
use self::scheme::{assign_scheme, find_internal_rhymes, SchemeAnalysis};

/// Complete rhyme analysis of one stanza.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RhymeAnalysis {
    pub scheme: SchemeAnalysis,
    pub internal_pairs: Vec<RhymePair>,
    pub warnings: Vec<QualityWarning>,
    pub cliches: Vec<(String, String)>,
}

/// Run the full rhyme pipeline: end-rhyme scheme, internal rhymes,
/// then quality heuristics over every retained pair.
pub fn analyze(
    dict: &PhoneticDictionary,
    lines: &[String],
    lexicon: &QualityLexicon,
) -> RhymeAnalysis {
    let scheme = assign_scheme(dict, lines);

    let mut internal_pairs = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        internal_pairs.extend(find_internal_rhymes(dict, i + 1, line));
    }

    let mut warnings = Vec::new();
    for pair in scheme.end_pairs.iter().chain(internal_pairs.iter()) {
        warnings.extend(check_pair(lexicon, pair));
    }

    let cliches = find_cliches(lexicon, &scheme.end_pairs);

    log::debug!(
        "rhyme analysis: {} end pairs, {} internal, {} warnings",
        scheme.end_pairs.len(),
        internal_pairs.len(),
        warnings.len()
    );

    RhymeAnalysis {
        scheme,
        internal_pairs,
        warnings,
        cliches,
    }
}
