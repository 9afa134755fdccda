use std::collections::HashSet;

/// Substring that marks an auto-generated timestamp line.
const TIMESTAMP_MARKER: &str = "-->";

/// Configuration for the noise filter.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Lines whose entire content equals one of these phrases are dropped.
    /// Matching is exact: no trimming, case-folding, or substring checks.
    pub filler_words: HashSet<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        // The empty string is part of the lexicon: blank paragraphs are
        // removed here, not during extraction. Entries match verbatim,
        // trailing spaces included ("OK. Yeah, yeah. " is how the
        // transcription engine emits it).
        let filler_words = [
            "",
            "Uh-huh.",
            "Yeah. And so.",
            "OK. Yeah, yeah. ",
            "Umm.",
            "Yeah.",
            "Yeah, yeah.",
            "Awesome.",
            "OK. Yep.",
            "OK.",
            "Right.",
            "Right?",
            "OK. Yeah.",
            "So.",
            "Uh.",
            "Hmm.",
            "Hmm yeah.",
            "Yeah, cool.",
            "Ohh.",
            "Um",
            "Um?",
            "Umm?",
            "Cool.",
            "Mm-hmm.",
            "Mm hmm.",
            "Huh.",
            "Ohh uh-huh.",
            "Yeah. Wow.",
            "Ohh wow wow.",
        ]
        .into_iter()
        .map(str::to_string)
        .collect();

        Self { filler_words }
    }
}

impl FilterConfig {
    /// Replace the default lexicon with a caller-provided one.
    pub fn with_filler_words(filler_words: HashSet<String>) -> Self {
        Self { filler_words }
    }

    /// Keep blank lines by removing the empty string from the lexicon.
    pub fn keep_empty_lines(mut self) -> Self {
        self.filler_words.remove("");
        self
    }
}

/// Result of the noise filter.
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    /// Surviving lines, in input order.
    pub lines: Vec<String>,
    /// Number of timestamp lines dropped.
    pub timestamp_lines_dropped: usize,
    /// Number of exact filler-word lines dropped.
    pub filler_lines_dropped: usize,
}

/// Remove noise lines from the extracted sequence.
///
/// Two filters run in order: first any line containing the `-->` timestamp
/// marker is dropped, then any line whose entire content equals a configured
/// filler phrase. Both are order-preserving, and the whole pass is
/// idempotent.
pub fn filter_noise(lines: &[String], config: &FilterConfig) -> FilterOutcome {
    let mut timestamp_lines_dropped = 0;
    let without_timestamps: Vec<&String> = lines
        .iter()
        .filter(|line| {
            let is_timestamp = line.contains(TIMESTAMP_MARKER);
            if is_timestamp {
                timestamp_lines_dropped += 1;
            }
            !is_timestamp
        })
        .collect();

    let mut filler_lines_dropped = 0;
    let kept: Vec<String> = without_timestamps
        .into_iter()
        .filter(|line| {
            let is_filler = config.filler_words.contains(line.as_str());
            if is_filler {
                filler_lines_dropped += 1;
            }
            !is_filler
        })
        .cloned()
        .collect();

    FilterOutcome {
        lines: kept,
        timestamp_lines_dropped,
        filler_lines_dropped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_drops_timestamp_lines() {
        let input = lines(&[
            "Alice",
            "00:00:01.000 --> 00:00:04.000",
            "Hello there.",
        ]);
        let outcome = filter_noise(&input, &FilterConfig::default());

        assert_eq!(outcome.lines, lines(&["Alice", "Hello there."]));
        assert_eq!(outcome.timestamp_lines_dropped, 1);
    }

    #[test]
    fn test_filler_match_is_exact() {
        let input = lines(&["OK. Yeah.", "OK. Yeah. Actually no."]);
        let outcome = filter_noise(&input, &FilterConfig::default());

        // The exact phrase goes, the superstring stays.
        assert_eq!(outcome.lines, lines(&["OK. Yeah. Actually no."]));
        assert_eq!(outcome.filler_lines_dropped, 1);
    }

    #[test]
    fn test_trailing_space_entry_matches_verbatim() {
        let input = lines(&["OK. Yeah, yeah. ", "OK. Yeah, yeah."]);
        let outcome = filter_noise(&input, &FilterConfig::default());

        // Only the lexicon form with its trailing space is removed.
        assert_eq!(outcome.lines, lines(&["OK. Yeah, yeah."]));
    }

    #[test]
    fn test_drops_empty_lines_by_default() {
        let input = lines(&["Alice", "", "Hello."]);
        let outcome = filter_noise(&input, &FilterConfig::default());
        assert_eq!(outcome.lines, lines(&["Alice", "Hello."]));
    }

    #[test]
    fn test_keep_empty_lines_override() {
        let input = lines(&["Alice", "", "Hello."]);
        let config = FilterConfig::default().keep_empty_lines();
        let outcome = filter_noise(&input, &config);
        assert_eq!(outcome.lines, input);
    }

    #[test]
    fn test_idempotent() {
        let input = lines(&[
            "Alice",
            "0:01 --> 0:05",
            "Umm.",
            "Hello there.",
            "",
            "Bob",
            "Yeah.",
            "Fine.",
        ]);
        let config = FilterConfig::default();

        let once = filter_noise(&input, &config);
        let twice = filter_noise(&once.lines, &config);

        assert_eq!(once.lines, twice.lines);
        assert_eq!(twice.timestamp_lines_dropped, 0);
        assert_eq!(twice.filler_lines_dropped, 0);
    }

    #[test]
    fn test_preserves_relative_order() {
        let input = lines(&["c", "Umm.", "a", "b", "Yeah.", "c"]);
        let outcome = filter_noise(&input, &FilterConfig::default());
        assert_eq!(outcome.lines, lines(&["c", "a", "b", "c"]));
    }
}
