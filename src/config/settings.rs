//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files and shared across threads.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::rewrite::Tone;
use crate::tts::Voice;

use super::AppPaths;

// ---------------------------------------------------------------------------
// WatsonConfig
// ---------------------------------------------------------------------------

/// IBM Watson credentials and connection settings for the real rewrite
/// backend.
///
/// The credential triple is valid only when all three strings are non-empty.
/// Incomplete credentials never block the pipeline — the rewriter degrades
/// to the local template with a diagnostic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatsonConfig {
    /// IBM Cloud API key.
    pub api_key: String,
    /// watsonx.ai service URL (e.g. `https://us-south.ml.cloud.ibm.com`).
    pub service_url: String,
    /// watsonx project identifier.
    pub project_id: String,
    /// Model identifier sent to the generation endpoint.
    pub model: String,
    /// Maximum seconds to wait for a rewrite response before timing out.
    pub timeout_secs: u64,
}

impl Default for WatsonConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            service_url: String::new(),
            project_id: String::new(),
            model: "ibm/granite-13b-instruct-v2".into(),
            timeout_secs: 30,
        }
    }
}

impl WatsonConfig {
    /// Names of the credential fields that are still empty.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.api_key.is_empty() {
            missing.push("api_key");
        }
        if self.service_url.is_empty() {
            missing.push("service_url");
        }
        if self.project_id.is_empty() {
            missing.push("project_id");
        }
        missing
    }

    /// `true` when the whole credential triple is present.
    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }
}

// ---------------------------------------------------------------------------
// TtsConfig
// ---------------------------------------------------------------------------

/// Settings for the HTTP synthesis engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TtsConfig {
    /// Base URL of the translate-TTS endpoint.
    pub base_url: String,
    /// Maximum seconds to wait for synthesized audio before timing out.
    /// The engine call is the only unbounded-latency operation in the
    /// pipeline, so this is the bound.
    pub timeout_secs: u64,
    /// Request slow narration from the engine. Normal speed by default.
    pub slow: bool,
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://translate.google.com".into(),
            timeout_secs: 60,
            slow: false,
        }
    }
}

// ---------------------------------------------------------------------------
// NarrationConfig
// ---------------------------------------------------------------------------

/// Defaults pre-selected in the tone / voice pickers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NarrationConfig {
    pub default_tone: Tone,
    pub default_voice: Voice,
}

// ---------------------------------------------------------------------------
// UiConfig
// ---------------------------------------------------------------------------

/// Window appearance settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Last saved window position `(x, y)` in screen pixels. `None` means
    /// let the OS / window manager pick a position on first launch.
    pub window_position: Option<(f32, f32)>,
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use echoverse::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
///
/// // Modify and save
/// // config.save().unwrap();
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Watson credentials / real rewrite backend settings.
    pub watson: WatsonConfig,
    /// Synthesis engine settings.
    pub tts: TtsConfig,
    /// Default tone and voice selections.
    pub narration: NarrationConfig,
    /// Window settings.
    pub ui: UiConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet
    /// (first-run scenario) so callers never need to special-case a missing
    /// file.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path (useful for tests).
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Verify that a default `AppConfig` can be serialised to TOML and
    /// deserialised back without any data loss.
    #[test]
    fn round_trip_toml() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");

        let original = AppConfig::default();
        original.save_to(&path).expect("save");

        let loaded = AppConfig::load_from(&path).expect("load");

        assert_eq!(original.watson.api_key, loaded.watson.api_key);
        assert_eq!(original.watson.model, loaded.watson.model);
        assert_eq!(original.watson.timeout_secs, loaded.watson.timeout_secs);
        assert_eq!(original.tts.base_url, loaded.tts.base_url);
        assert_eq!(original.tts.timeout_secs, loaded.tts.timeout_secs);
        assert_eq!(original.tts.slow, loaded.tts.slow);
        assert_eq!(
            original.narration.default_tone,
            loaded.narration.default_tone
        );
        assert_eq!(
            original.narration.default_voice,
            loaded.narration.default_voice
        );
        assert_eq!(original.ui.window_position, loaded.ui.window_position);
    }

    /// `load_from` on a non-existent path must return `Default` without error.
    #[test]
    fn load_missing_returns_default() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nonexistent.toml");

        let config = AppConfig::load_from(&path).expect("should not error");

        assert!(config.watson.api_key.is_empty());
        assert_eq!(config.tts.base_url, "https://translate.google.com");
        assert_eq!(config.narration.default_tone, Tone::Neutral);
        assert_eq!(config.narration.default_voice, Voice::Lisa);
    }

    /// Verify default values.
    #[test]
    fn default_values() {
        let cfg = AppConfig::default();

        assert!(!cfg.watson.is_complete());
        assert_eq!(
            cfg.watson.missing(),
            vec!["api_key", "service_url", "project_id"]
        );
        assert_eq!(cfg.watson.model, "ibm/granite-13b-instruct-v2");
        assert_eq!(cfg.tts.timeout_secs, 60);
        assert!(!cfg.tts.slow);
        assert!(cfg.ui.window_position.is_none());
    }

    /// Verify that modified non-default values survive a round trip.
    #[test]
    fn round_trip_modified_values() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("modified.toml");

        let mut cfg = AppConfig::default();
        cfg.watson.api_key = "key-123".into();
        cfg.watson.service_url = "https://us-south.ml.cloud.ibm.com".into();
        cfg.watson.project_id = "proj-456".into();
        cfg.tts.base_url = "http://localhost:9100".into();
        cfg.tts.slow = true;
        cfg.narration.default_tone = Tone::Inspiring;
        cfg.narration.default_voice = Voice::Allison;
        cfg.ui.window_position = Some((120.0, 80.0));

        cfg.save_to(&path).expect("save");
        let loaded = AppConfig::load_from(&path).expect("load");

        assert!(loaded.watson.is_complete());
        assert_eq!(loaded.watson.project_id, "proj-456");
        assert_eq!(loaded.tts.base_url, "http://localhost:9100");
        assert!(loaded.tts.slow);
        assert_eq!(loaded.narration.default_tone, Tone::Inspiring);
        assert_eq!(loaded.narration.default_voice, Voice::Allison);
        assert_eq!(loaded.ui.window_position, Some((120.0, 80.0)));
    }

    #[test]
    fn missing_lists_only_empty_fields() {
        let cfg = WatsonConfig {
            api_key: "key".into(),
            ..WatsonConfig::default()
        };
        assert_eq!(cfg.missing(), vec!["service_url", "project_id"]);
    }
}
