//! Plain-text meter report.

use std::fmt::Write;

use crate::types::LineAnalysis;

use super::{MeterSummary, VARIANCE_WARN_THRESHOLD};

/// Render the full meter report: summary stats, per-line breakdown,
/// meter distribution.
pub fn render(lines: &[LineAnalysis], summary: &MeterSummary) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Meter Analysis");
    let _ = writeln!(out, "==============");
    let _ = writeln!(out, "Lines:           {}", summary.line_count);
    let _ = writeln!(out, "Avg syllables:   {:.1}", summary.mean_syllables);
    let _ = writeln!(
        out,
        "Min / max:       {} / {}",
        summary.min_syllables, summary.max_syllables
    );
    if summary.inconsistent {
        let _ = writeln!(
            out,
            "Warning: syllable variance is {} (> {}); meter may be inconsistent",
            summary.variance, VARIANCE_WARN_THRESHOLD
        );
    }
    let _ = writeln!(out);

    for (i, line) in lines.iter().enumerate() {
        let meter = summary
            .line_meters
            .get(i)
            .map(|m| m.to_string())
            .unwrap_or_else(|| "mixed/free".to_string());
        let _ = writeln!(
            out,
            "Line {}: {} syllables, {}",
            i + 1,
            line.syllable_count,
            meter
        );
        let _ = writeln!(out, "  text:    {}", line.text);
        let _ = writeln!(out, "  stress:  {}", line.stress_pattern);

        let unknown: Vec<&str> = line
            .words
            .iter()
            .filter(|w| w.is_estimated())
            .map(|w| w.cleaned_word.as_str())
            .collect();
        if !unknown.is_empty() {
            let _ = writeln!(out, "  unknown: {} (estimated)", unknown.join(", "));
        }

        let breakdown: Vec<String> = line
            .words
            .iter()
            .map(|w| format!("{}({})", w.cleaned_word, w.entry.syllables))
            .collect();
        let _ = writeln!(out, "  words:   {}", breakdown.join(" "));
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "Meter distribution:");
    for (meter, count) in &summary.distribution {
        let _ = writeln!(out, "  {:<12} {}", meter.to_string(), count);
    }

    out
}
