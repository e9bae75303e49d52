//! Token cleaning and line splitting for lyric text.

/// Reduce a raw token to its lookup form: lowercase, `[a-z']` only.
///
/// Can return an empty string (e.g. a pure-punctuation token); callers
/// skip empty results rather than passing them downstream.
pub fn clean_word(token: &str) -> String {
    token
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || *c == '\'')
        .collect()
}

/// Cleaned form of the last word of a line, if the line has one.
pub fn end_word(line: &str) -> Option<String> {
    line.split_whitespace()
        .rev()
        .map(clean_word)
        .find(|w| !w.is_empty())
}

/// Split input text into trimmed, non-empty lines.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_word() {
        assert_eq!(clean_word("Hello,"), "hello");
        assert_eq!(clean_word("don't!"), "don't");
        assert_eq!(clean_word("(Night)"), "night");
        assert_eq!(clean_word("--"), "");
        assert_eq!(clean_word("it's..."), "it's");
    }

    #[test]
    fn test_end_word() {
        assert_eq!(end_word("the cat sat on the mat."), Some("mat".into()));
        assert_eq!(end_word("hello world --"), Some("world".into()));
        assert_eq!(end_word("!!! ???"), None);
        assert_eq!(end_word(""), None);
    }

    #[test]
    fn test_split_lines() {
        let lines = split_lines("one\n\n  two  \n\t\nthree\n");
        assert_eq!(lines, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_split_lines_empty() {
        assert!(split_lines("").is_empty());
        assert!(split_lines("\n \n").is_empty());
    }
}
