//! Rhyme quality heuristics.
//!
//! Flags craft problems in retained rhyme pairs: gerund-on-gerund rhymes,
//! pairs drawn from the same semantic field, known lazy-rhyme clusters,
//! suffix-only rhymes, and well-worn cliché pairs. The word lists live in
//! an immutable `QualityLexicon` value passed in by the caller; there is
//! no global state.

use serde::{Deserialize, Serialize};

use crate::types::RhymePair;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityWarning {
    pub severity: Severity,
    pub word1: String,
    pub word2: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordGroup {
    pub name: String,
    pub words: Vec<String>,
}

impl WordGroup {
    fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

/// Fixed word lists driving the quality checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityLexicon {
    pub semantic_fields: Vec<WordGroup>,
    pub lazy_clusters: Vec<WordGroup>,
    pub rhyme_suffixes: Vec<String>,
    pub cliche_pairs: Vec<(String, String)>,
}

const SEMANTIC_FIELDS: &[(&str, &[&str])] = &[
    (
        "expressions",
        &["say", "tell", "speak", "talk", "shout", "call", "scream", "whisper", "sing"],
    ),
    (
        "motion",
        &["run", "walk", "fly", "ride", "roll", "fall", "rise", "climb", "dance", "spin"],
    ),
    (
        "cognition",
        &["know", "think", "mind", "dream", "believe", "wonder", "remember", "forget"],
    ),
    (
        "emotion",
        &["love", "heart", "soul", "pain", "tears", "cry", "ache", "feel", "hurt", "fear"],
    ),
];

const LAZY_CLUSTERS: &[(&str, &[&str])] = &[
    ("fire-desire", &["fire", "desire", "higher", "inspire"]),
    ("heart-apart", &["heart", "apart", "start", "part"]),
    ("love-above", &["love", "above", "dove", "glove"]),
    ("night-light", &["night", "light", "sight", "bright", "fight", "right", "tight"]),
    ("pain-rain", &["pain", "rain", "again", "remain", "chain"]),
    ("cry-die", &["cry", "die", "try", "fly", "sky", "why", "high"]),
];

const RHYME_SUFFIXES: &[&str] = &["tion", "sion", "ness", "ment", "able", "ible"];

const CLICHE_PAIRS: &[(&str, &str)] = &[
    ("love", "above"),
    ("heart", "apart"),
    ("fire", "desire"),
    ("pain", "rain"),
    ("night", "light"),
    ("moon", "june"),
    ("cry", "die"),
    ("tears", "fears"),
    ("dreams", "seems"),
    ("hold", "cold"),
];

impl Default for QualityLexicon {
    fn default() -> Self {
        let group = |(name, words): &(&str, &[&str])| WordGroup {
            name: name.to_string(),
            words: words.iter().map(|w| w.to_string()).collect(),
        };
        QualityLexicon {
            semantic_fields: SEMANTIC_FIELDS.iter().map(group).collect(),
            lazy_clusters: LAZY_CLUSTERS.iter().map(group).collect(),
            rhyme_suffixes: RHYME_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            cliche_pairs: CLICHE_PAIRS
                .iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect(),
        }
    }
}

/// Run the pair-level heuristics against one retained rhyme pair.
///
/// The gerund, semantic-field, and suffix checks are independent; a pair
/// can trigger several. Cluster matching stops at the first cluster that
/// holds both words.
pub fn check_pair(lexicon: &QualityLexicon, pair: &RhymePair) -> Vec<QualityWarning> {
    let (w1, w2) = (pair.word1.as_str(), pair.word2.as_str());
    let mut warnings = Vec::new();
    let warn = |severity, message: String| QualityWarning {
        severity,
        word1: w1.to_string(),
        word2: w2.to_string(),
        message,
    };

    if w1.ends_with("ing") && w2.ends_with("ing") {
        warnings.push(warn(
            Severity::Medium,
            "both words are -ing gerunds".to_string(),
        ));
    }

    if let Some(field) = lexicon
        .semantic_fields
        .iter()
        .find(|f| f.contains(w1) && f.contains(w2))
    {
        warnings.push(warn(
            Severity::Medium,
            format!("both words come from the same semantic field ({})", field.name),
        ));
    }

    // First cluster match wins
    if let Some(cluster) = lexicon
        .lazy_clusters
        .iter()
        .find(|c| c.contains(w1) && c.contains(w2))
    {
        warnings.push(warn(
            Severity::High,
            format!("lazy rhyme from the {} cluster", cluster.name),
        ));
    }

    for suffix in &lexicon.rhyme_suffixes {
        if w1.ends_with(suffix.as_str()) && w2.ends_with(suffix.as_str()) {
            let root1 = &w1[..w1.len() - suffix.len()];
            let root2 = &w2[..w2.len() - suffix.len()];
            if root1 != root2 {
                warnings.push(warn(
                    Severity::Low,
                    format!("suffix-only rhyme on -{}", suffix),
                ));
            }
            break;
        }
    }

    warnings
}

/// Check assigned end-rhyme pairs against the cliché list
/// (order-insensitive).
pub fn find_cliches(lexicon: &QualityLexicon, end_pairs: &[RhymePair]) -> Vec<(String, String)> {
    let mut found = Vec::new();
    for pair in end_pairs {
        let hit = lexicon.cliche_pairs.iter().any(|(a, b)| {
            (pair.word1 == *a && pair.word2 == *b) || (pair.word1 == *b && pair.word2 == *a)
        });
        if hit {
            found.push((pair.word1.clone(), pair.word2.clone()));
        }
    }
    found
}
