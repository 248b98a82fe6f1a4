//! Greedy word wrap against a measured line budget.
//!
//! Panel painters accumulate words left to right, measuring the candidate
//! line, and flush when the next word would overflow the budget. No
//! hyphenation, no look-ahead; a word wider than the whole budget keeps a
//! line to itself. Visual parity depends on this exact greedy behavior.

/// Layout budget for a slide's body text, in layout pixels at scale 1.
pub const DETAIL_BUDGET: f32 = 600.0;
/// Layout budget for list-column lines.
pub const COLUMN_BUDGET: f32 = 580.0;

/// Wrap `text` into lines whose measured width stays under `budget`.
/// `measure` returns the width of a candidate line in the same units.
pub fn wrap_words<F>(text: &str, budget: f32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{line} {word}")
        };
        if measure(&candidate) > budget && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        } else {
            line = candidate;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    // Ten units per character keeps the arithmetic readable.
    fn measure(s: &str) -> f32 {
        s.chars().count() as f32 * 10.0
    }

    #[test]
    fn test_short_text_is_one_line() {
        let lines = wrap_words("dust and echoes", 200.0, measure);
        assert_eq!(lines, vec!["dust and echoes"]);
    }

    #[test]
    fn test_flushes_on_overflow() {
        let lines = wrap_words("one two three four", 90.0, measure);
        // "one two" = 7 chars = 70; adding " three" overflows 90.
        assert_eq!(lines, vec!["one two", "three", "four"]);
    }

    #[test]
    fn test_overlong_word_keeps_its_own_line() {
        let lines = wrap_words("a incomprehensibilities b", 100.0, measure);
        assert_eq!(lines, vec!["a", "incomprehensibilities", "b"]);
    }

    #[test]
    fn test_no_hyphenation_ever() {
        let lines = wrap_words("spectrograph", 50.0, measure);
        assert_eq!(lines, vec!["spectrograph"]);
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        let lines = wrap_words("  pale   lantern  ", 500.0, measure);
        assert_eq!(lines, vec!["pale lantern"]);
    }

    #[test]
    fn test_empty_text_yields_no_lines() {
        assert!(wrap_words("", 100.0, measure).is_empty());
        assert!(wrap_words("   ", 100.0, measure).is_empty());
    }
}
