//! Plain-text rhyme report.

use std::fmt::Write;

use crate::types::{RhymePair, RhymeType};

use super::quality::Severity;
use super::scheme::density_assessment;
use super::RhymeAnalysis;

const PREVIEW_CHARS: usize = 45;

/// Truncate a line preview to a fixed width.
fn preview(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    if chars.len() <= PREVIEW_CHARS {
        line.to_string()
    } else {
        let mut s: String = chars[..PREVIEW_CHARS - 3].iter().collect();
        s.push_str("...");
        s
    }
}

fn write_pairs(out: &mut String, pairs: &[&RhymePair]) {
    for p in pairs {
        let _ = if p.line1 == p.line2 {
            writeln!(out, "  {} / {} (line {})", p.word1, p.word2, p.line1)
        } else {
            writeln!(
                out,
                "  {} / {} (lines {}, {})",
                p.word1, p.word2, p.line1, p.line2
            )
        };
    }
}

/// Render the full rhyme report.
pub fn render(lines: &[String], analysis: &RhymeAnalysis) -> String {
    let mut out = String::new();
    let scheme = &analysis.scheme;

    let _ = writeln!(out, "Rhyme Analysis");
    let _ = writeln!(out, "==============");
    let _ = writeln!(out, "Scheme:          {}", scheme.scheme_string());
    let _ = writeln!(out, "End rhyme pairs: {}", scheme.end_pairs.len());
    let _ = writeln!(out, "Internal rhymes: {}", analysis.internal_pairs.len());
    let _ = writeln!(
        out,
        "Density:         {:.1}% ({})",
        scheme.density * 100.0,
        density_assessment(scheme.density)
    );
    let _ = writeln!(out);

    for (i, line) in lines.iter().enumerate() {
        let letter = scheme.letters.get(i).copied().unwrap_or('?');
        let _ = writeln!(out, "  [{}] {}", letter, preview(line));
    }
    let _ = writeln!(out);

    let perfect: Vec<&RhymePair> = scheme
        .end_pairs
        .iter()
        .filter(|p| p.rhyme_type == RhymeType::Perfect)
        .collect();
    if !perfect.is_empty() {
        let _ = writeln!(out, "Perfect end rhymes:");
        write_pairs(&mut out, &perfect);
    }

    let slant: Vec<&RhymePair> = scheme
        .end_pairs
        .iter()
        .filter(|p| p.rhyme_type == RhymeType::Slant)
        .collect();
    if !slant.is_empty() {
        let _ = writeln!(out, "Slant end rhymes:");
        write_pairs(&mut out, &slant);
    }

    if !analysis.internal_pairs.is_empty() {
        let _ = writeln!(out, "Internal rhymes:");
        let internal: Vec<&RhymePair> = analysis.internal_pairs.iter().collect();
        write_pairs(&mut out, &internal);
    }

    if !analysis.warnings.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Quality warnings:");
        for severity in [Severity::High, Severity::Medium, Severity::Low] {
            for w in analysis.warnings.iter().filter(|w| w.severity == severity) {
                let _ = writeln!(
                    out,
                    "  [{}] {} / {}: {}",
                    w.severity, w.word1, w.word2, w.message
                );
            }
        }
    }

    if !analysis.cliches.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Cliché rhymes:");
        for (a, b) in &analysis.cliches {
            let _ = writeln!(out, "  {} / {}", a, b);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::tests::test_dict;
    use crate::rhyme::analyze;
    use crate::rhyme::quality::QualityLexicon;

    fn report_for(text: &[&str]) -> String {
        let dict = test_dict();
        let lex = QualityLexicon::default();
        let lines: Vec<String> = text.iter().map(|s| s.to_string()).collect();
        let analysis = analyze(&dict, &lines, &lex);
        render(&lines, &analysis)
    }

    #[test]
    fn test_report_sections() {
        let r = report_for(&["my love", "from above"]);
        assert!(r.contains("Scheme:          AA"));
        assert!(r.contains("Perfect end rhymes:"));
        assert!(r.contains("love / above (lines 1, 2)"));
        assert!(r.contains("Cliché rhymes:"));
    }

    #[test]
    fn test_no_rhymes_assessment() {
        let r = report_for(&["the day", "the moon", "the heart", "hmm"]);
        assert!(r.contains("no end rhymes detected"));
        assert!(!r.contains("Perfect end rhymes:"));
    }

    #[test]
    fn test_warning_buckets_high_first() {
        let r = report_for(&["the fire", "my desire"]);
        assert!(r.contains("[high] fire / desire"));
    }

    #[test]
    fn test_preview_truncation() {
        let long = "a".repeat(60);
        let p = preview(&long);
        assert_eq!(p.chars().count(), PREVIEW_CHARS);
        assert!(p.ends_with("..."));
        assert_eq!(preview("short line"), "short line");
    }

    #[test]
    fn test_internal_pair_single_line_number() {
        let r = report_for(&["the cat sat here"]);
        assert!(r.contains("cat / sat (line 1)"));
    }
}
