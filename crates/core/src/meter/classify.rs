//! Metrical foot classification of a line's stress pattern.

use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Meter {
    Iambic,
    Trochaic,
    Anapestic,
    Dactylic,
    Spondaic,
    MixedFree,
}

impl std::fmt::Display for Meter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Meter::Iambic => "iambic",
            Meter::Trochaic => "trochaic",
            Meter::Anapestic => "anapestic",
            Meter::Dactylic => "dactylic",
            Meter::Spondaic => "spondaic",
            Meter::MixedFree => "mixed/free",
        };
        write!(f, "{}", s)
    }
}

lazy_static::lazy_static! {
    /// Whole-line foot templates, checked in order; first match wins.
    ///
    /// Optional markers stand for a truncated final foot. Iambic feet
    /// end on their stress, so a trailing `u` would append to a complete
    /// foot rather than shorten one: an extra unstressed syllable after
    /// iambic feet is irregular and falls through to mixed/free.
    static ref FOOT_TEMPLATES: Vec<(Meter, Regex)> = vec![
        (Meter::Iambic,    Regex::new(r"^(u/)+$").unwrap()),
        (Meter::Trochaic,  Regex::new(r"^(/u)+/?$").unwrap()),
        (Meter::Anapestic, Regex::new(r"^(uu/)+u?u?$").unwrap()),
        (Meter::Dactylic,  Regex::new(r"^(/uu)+/?u?$").unwrap()),
        (Meter::Spondaic,  Regex::new(r"^(//)+/?$").unwrap()),
    ];
}

/// Classify a stress pattern string into a named meter.
///
/// Whitespace and `?` estimation markers are stripped first. The match is
/// against the entire cleaned pattern: a line that is mostly iambic but
/// has one irregular foot anywhere classifies as `mixed/free`.
pub fn classify_meter(stress_pattern: &str) -> Meter {
    let clean: String = stress_pattern
        .chars()
        .filter(|c| *c == '/' || *c == 'u')
        .collect();

    for (meter, re) in FOOT_TEMPLATES.iter() {
        if re.is_match(&clean) {
            return *meter;
        }
    }
    Meter::MixedFree
}
