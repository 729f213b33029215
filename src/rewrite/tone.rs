//! The closed set of narration tones.

use serde::{Deserialize, Serialize};

use crate::rewrite::transformer::RewriteError;

/// A named style directive controlling how input text is transformed before
/// narration.
///
/// The set is closed by design: the original tone tables were fixed
/// associative mappings with no runtime extension, and the boundary rejects
/// anything outside the three variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    /// Clear, professional narration.
    Neutral,
    /// Dramatic narration that builds tension.
    Suspenseful,
    /// Uplifting, motivational narration.
    Inspiring,
}

impl Tone {
    /// All tones, in the order they appear in the UI selector.
    pub const ALL: [Tone; 3] = [Tone::Neutral, Tone::Suspenseful, Tone::Inspiring];

    /// Display label used by the tone selector.
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Neutral => "Neutral",
            Tone::Suspenseful => "Suspenseful",
            Tone::Inspiring => "Inspiring",
        }
    }

    /// Fixed phrase prepended to the original text by the template rewriter.
    pub(crate) fn template_prefix(&self) -> &'static str {
        match self {
            Tone::Neutral => "In a clear and professional manner: ",
            Tone::Suspenseful => "With building tension and intrigue: ",
            Tone::Inspiring => "With great determination and hope: ",
        }
    }

    /// Fixed phrase appended after the original text by the template rewriter.
    pub(crate) fn template_suffix(&self) -> &'static str {
        match self {
            Tone::Neutral => "",
            Tone::Suspenseful => "... What happens next will surprise you.",
            Tone::Inspiring => " This is just the beginning of an incredible journey.",
        }
    }
}

impl Default for Tone {
    fn default() -> Self {
        Tone::Neutral
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Tone {
    type Err = RewriteError;

    /// Strict, case-insensitive parse.
    ///
    /// Unknown names are a caller bug (the UI only offers the closed set), so
    /// this errors instead of silently defaulting.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "neutral" => Ok(Tone::Neutral),
            "suspenseful" => Ok(Tone::Suspenseful),
            "inspiring" => Ok(Tone::Inspiring),
            other => Err(RewriteError::InvalidTone(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
