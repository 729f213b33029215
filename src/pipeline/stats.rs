//! Display statistics for a generated audiobook.

/// Approximate statistics about narrated text, shown alongside the player.
///
/// The duration estimate is `character_count / 200` minutes (integer
/// division) — a display-only approximation with no correctness guarantee
/// beyond the formula itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NarrationStats {
    /// Number of characters in the narrated text.
    pub character_count: usize,
    /// Number of whitespace-separated tokens.
    pub word_count: usize,
    /// Estimated listening time in whole minutes.
    pub estimated_duration_minutes: usize,
}

impl NarrationStats {
    /// Compute statistics for `text` (the tone-adapted text that was
    /// actually narrated).
    pub fn for_text(text: &str) -> Self {
        let character_count = text.chars().count();
        Self {
            character_count,
            word_count: text.split_whitespace().count(),
            estimated_duration_minutes: character_count / 200,
        }
    }
}

impl std::fmt::Display for NarrationStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} characters, ~{} words, ~{} minutes estimated duration",
            self.character_count, self.word_count, self.estimated_duration_minutes
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousand_chars_and_150_words_give_five_minutes() {
        // One 106-char word + 149 five-char words + 149 spaces = 1000 chars,
        // 150 whitespace-separated tokens.
        let mut words = vec!["a".repeat(106)];
        words.extend(std::iter::repeat("bcdef".to_string()).take(149));
        let text = words.join(" ");
        assert_eq!(text.chars().count(), 1000);
        assert_eq!(text.split_whitespace().count(), 150);

        let stats = NarrationStats::for_text(&text);
        assert_eq!(stats.character_count, 1000);
        assert_eq!(stats.word_count, 150);
        assert_eq!(stats.estimated_duration_minutes, 5);
    }

    #[test]
    fn short_text_rounds_down_to_zero_minutes() {
        let stats = NarrationStats::for_text("Hello world");
        assert_eq!(stats.character_count, 11);
        assert_eq!(stats.word_count, 2);
        assert_eq!(stats.estimated_duration_minutes, 0);
    }

    #[test]
    fn character_count_is_chars_not_bytes() {
        let stats = NarrationStats::for_text("héllo wörld");
        assert_eq!(stats.character_count, 11);
        assert_eq!(stats.word_count, 2);
    }

    #[test]
    fn display_lists_the_three_figures() {
        let stats = NarrationStats::for_text("one two three");
        let line = stats.to_string();
        assert!(line.contains("13 characters"));
        assert!(line.contains("~3 words"));
        assert!(line.contains("~0 minutes"));
    }
}
