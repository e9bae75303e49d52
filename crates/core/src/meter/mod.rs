//! Meter analysis: per-line classification plus whole-text statistics.

pub mod classify;
pub mod report;

use serde::{Deserialize, Serialize};

use crate::types::LineAnalysis;
use self::classify::{classify_meter, Meter};

/// Syllable variance (max - min) above which the meter is flagged as
/// possibly inconsistent.
pub const VARIANCE_WARN_THRESHOLD: usize = 4;

/// Aggregate syllable statistics and meter distribution across all lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeterSummary {
    pub line_count: usize,
    pub mean_syllables: f64,
    pub min_syllables: usize,
    pub max_syllables: usize,
    /// max - min
    pub variance: usize,
    pub inconsistent: bool,
    /// Per-line meter classification, in line order.
    pub line_meters: Vec<Meter>,
    /// (meter, line count) tally, descending by count.
    pub distribution: Vec<(Meter, usize)>,
}

/// Summarize syllable counts and meter classes across analyzed lines.
pub fn summarize(lines: &[LineAnalysis]) -> MeterSummary {
    let line_count = lines.len();
    let counts: Vec<usize> = lines.iter().map(|l| l.syllable_count).collect();
    let min_syllables = counts.iter().copied().min().unwrap_or(0);
    let max_syllables = counts.iter().copied().max().unwrap_or(0);
    let total: usize = counts.iter().sum();
    let mean_syllables = if line_count == 0 {
        0.0
    } else {
        total as f64 / line_count as f64
    };
    let variance = max_syllables - min_syllables;
    let inconsistent = variance > VARIANCE_WARN_THRESHOLD;
    if inconsistent {
        log::debug!("syllable variance {} exceeds threshold", variance);
    }

    let line_meters: Vec<Meter> = lines
        .iter()
        .map(|l| classify_meter(&l.stress_pattern))
        .collect();

    let mut tally: std::collections::BTreeMap<Meter, usize> = std::collections::BTreeMap::new();
    for m in &line_meters {
        *tally.entry(*m).or_default() += 1;
    }
    let mut distribution: Vec<(Meter, usize)> = tally.into_iter().collect();
    distribution.sort_by(|a, b| b.1.cmp(&a.1));

    MeterSummary {
        line_count,
        mean_syllables,
        min_syllables,
        max_syllables,
        variance,
        inconsistent,
        line_meters,
        distribution,
    }
}
