//! The closed set of narrator voices and their locale mapping.

use serde::{Deserialize, Serialize};

/// A named narrator persona controlling which synthesis language/locale is
/// used.
///
/// The mapping is a fixed table; the synthesis engine only consumes the
/// 2-letter language code, so all three current voices narrate in English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Voice {
    /// Female voice (US locale).
    Lisa,
    /// Male voice (UK locale).
    Michael,
    /// Female voice (Australian locale).
    Allison,
}

impl Voice {
    /// All voices, in the order they appear in the UI selector.
    pub const ALL: [Voice; 3] = [Voice::Lisa, Voice::Michael, Voice::Allison];

    /// The documented default voice used when a name cannot be resolved.
    pub const DEFAULT: Voice = Voice::Lisa;

    /// Display label used by the voice selector.
    pub fn label(&self) -> &'static str {
        match self {
            Voice::Lisa => "Lisa",
            Voice::Michael => "Michael",
            Voice::Allison => "Allison",
        }
    }

    /// Full locale tag for this voice.
    pub fn locale(&self) -> &'static str {
        match self {
            Voice::Lisa => "en-us",
            Voice::Michael => "en-uk",
            Voice::Allison => "en-au",
        }
    }

    /// The 2-letter language code consumed by the synthesis engine — the
    /// first segment of the locale tag.
    pub fn language(&self) -> &'static str {
        self.locale().split('-').next().unwrap_or("en")
    }

    /// Lenient, case-insensitive resolution of a voice name.
    ///
    /// Unknown names fall back to [`Voice::DEFAULT`] with a warning rather
    /// than failing, mirroring the lenient lookup of the voice table.
    pub fn parse_or_default(name: &str) -> Voice {
        match name.trim().to_ascii_lowercase().as_str() {
            "lisa" => Voice::Lisa,
            "michael" => Voice::Michael,
            "allison" => Voice::Allison,
            other => {
                log::warn!("unknown voice {other:?} — falling back to {}", Voice::DEFAULT);
                Voice::DEFAULT
            }
        }
    }
}

impl Default for Voice {
    fn default() -> Self {
        Voice::DEFAULT
    }
}

impl std::fmt::Display for Voice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_table_matches_voice_personas() {
        assert_eq!(Voice::Lisa.locale(), "en-us");
        assert_eq!(Voice::Michael.locale(), "en-uk");
        assert_eq!(Voice::Allison.locale(), "en-au");
    }

    #[test]
    fn language_is_first_locale_segment() {
        for voice in Voice::ALL {
            assert_eq!(voice.language(), "en");
        }
    }

    #[test]
    fn parse_resolves_known_names_case_insensitively() {
        assert_eq!(Voice::parse_or_default("MICHAEL"), Voice::Michael);
        assert_eq!(Voice::parse_or_default(" allison "), Voice::Allison);
    }

    #[test]
    fn unknown_name_falls_back_to_default() {
        assert_eq!(Voice::parse_or_default("Unknown"), Voice::DEFAULT);
        assert_eq!(Voice::parse_or_default(""), Voice::Lisa);
    }
}
