//! The narrator — turns rewritten text into an [`AudioArtifact`].
//!
//! Resolves the voice to its language code, invokes the synthesis engine,
//! and wraps the returned stream into an in-memory artifact with a
//! timestamped filename. Blocking from the pipeline's point of view: the
//! only latency bound is the engine's configured request timeout.

use std::sync::Arc;

use crate::tts::artifact::AudioArtifact;
use crate::tts::engine::{SpeechSynthesizer, TtsError};
use crate::tts::voice::Voice;

/// Maps `(text, voice)` to a produced audio artifact by delegating to the
/// synthesis engine.
#[derive(Clone)]
pub struct Narrator {
    engine: Arc<dyn SpeechSynthesizer>,
    slow: bool,
}

impl Narrator {
    /// Create a narrator over `engine`.
    ///
    /// `slow` is the engine speed flag; the product default is normal speed.
    pub fn new(engine: Arc<dyn SpeechSynthesizer>, slow: bool) -> Self {
        Self { engine, slow }
    }

    /// Synthesize `text` with `voice` and return the audio artifact.
    ///
    /// The caller must pass non-empty text; an artifact is never constructed
    /// from an empty input.
    ///
    /// # Errors
    ///
    /// Any [`TtsError`] from the engine. The orchestrator converts these
    /// into a user-visible diagnostic and keeps the rewrite result.
    pub async fn narrate(&self, text: &str, voice: Voice) -> Result<AudioArtifact, TtsError> {
        debug_assert!(!text.is_empty(), "narrate called with empty text");

        let language = voice.language();
        log::debug!(
            "narrating {} chars with voice {voice} (language {language})",
            text.chars().count()
        );

        let bytes = self.engine.synthesize(text, language, self.slow).await?;
        Ok(AudioArtifact::mp3(bytes))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tts::engine::MockSynthesizer;

    #[tokio::test]
    async fn narrate_wraps_engine_bytes_into_mp3_artifact() {
        let narrator = Narrator::new(Arc::new(MockSynthesizer::ok(&[0xFF, 0xFB, 0x90])), false);

        let artifact = narrator.narrate("Hello world", Voice::Lisa).await.unwrap();
        assert_eq!(artifact.mime_type(), "audio/mp3");
        assert_eq!(artifact.playback(), &[0xFF, 0xFB, 0x90]);
        assert!(artifact.filename().starts_with("audiobook_"));
        assert!(artifact.filename().ends_with(".mp3"));
    }

    #[tokio::test]
    async fn narrate_propagates_engine_failure() {
        let narrator = Narrator::new(Arc::new(MockSynthesizer::failing()), false);

        let err = narrator.narrate("Hello", Voice::Michael).await.unwrap_err();
        assert!(matches!(err, TtsError::Http { .. }));
    }

    #[tokio::test]
    async fn every_voice_resolves_to_a_synthesizable_language() {
        let narrator = Narrator::new(Arc::new(MockSynthesizer::ok(&[1])), false);
        for voice in Voice::ALL {
            assert!(narrator.narrate("text", voice).await.is_ok());
        }
    }
}
