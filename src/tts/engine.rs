//! Core `SpeechSynthesizer` trait and the HTTP synthesis engine.
//!
//! # Overview
//!
//! [`SpeechSynthesizer`] is the opaque engine boundary: text plus a 2-letter
//! language code in, MP3 bytes out. It is object-safe and `Send + Sync` so
//! it can be held behind an `Arc<dyn SpeechSynthesizer>`.
//!
//! [`HttpTtsEngine`] is the production implementation. It speaks the
//! translate-TTS query protocol (`client=tw-ob`) that the original's gTTS
//! library wraps, against a base URL taken from [`TtsConfig`].
//!
//! [`MockSynthesizer`] (available under `#[cfg(test)]`) returns canned bytes
//! or a deterministic failure — useful for unit-testing the pipeline without
//! network access.

use async_trait::async_trait;
use thiserror::Error;

use crate::config::TtsConfig;

// ---------------------------------------------------------------------------
// TtsError
// ---------------------------------------------------------------------------

/// All errors that can arise from the synthesis subsystem.
#[derive(Debug, Clone, Error)]
pub enum TtsError {
    /// HTTP transport or connection error.
    #[error("synthesis request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("synthesis request timed out")]
    Timeout,

    /// The engine answered with a non-success HTTP status (for example an
    /// unsupported language code).
    #[error("synthesis engine returned HTTP {status}")]
    Http { status: u16 },

    /// The engine answered 2xx but with an empty body.
    #[error("synthesis engine returned no audio")]
    EmptyAudio,
}

impl From<reqwest::Error> for TtsError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TtsError::Timeout
        } else {
            TtsError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// SpeechSynthesizer trait
// ---------------------------------------------------------------------------

/// Object-safe, thread-safe interface for text-to-speech engines.
///
/// # Contract
///
/// - `text` is non-empty (the orchestrator guarantees this);
/// - `language` is a 2-letter code from the voice table;
/// - on success the returned buffer holds a complete MP3 stream.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize `text` in `language` and return the audio bytes.
    async fn synthesize(&self, text: &str, language: &str, slow: bool)
        -> Result<Vec<u8>, TtsError>;
}

// Compile-time assertion: Box<dyn SpeechSynthesizer> must be constructible.
const _: fn() = || {
    fn _assert_object_safe(_: Box<dyn SpeechSynthesizer>) {}
};

// ---------------------------------------------------------------------------
// HttpTtsEngine
// ---------------------------------------------------------------------------

/// Production synthesis engine speaking the translate-TTS query protocol.
///
/// The whole call is a single GET; the engine performs the acoustic
/// synthesis opaquely and streams back MP3 bytes. The per-request timeout
/// from [`TtsConfig`] is the only latency bound the pipeline imposes.
pub struct HttpTtsEngine {
    client: reqwest::Client,
    config: TtsConfig,
}

impl HttpTtsEngine {
    /// Build an `HttpTtsEngine` from application config.
    pub fn from_config(config: &TtsConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            config: config.clone(),
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for HttpTtsEngine {
    async fn synthesize(
        &self,
        text: &str,
        language: &str,
        slow: bool,
    ) -> Result<Vec<u8>, TtsError> {
        let url = format!(
            "{}/translate_tts",
            self.config.base_url.trim_end_matches('/')
        );

        let speed = if slow { "0.3" } else { "1" };

        let response = self
            .client
            .get(&url)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", language),
                ("ttsspeed", speed),
                ("q", text),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TtsError::Http {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(TtsError::EmptyAudio);
        }

        Ok(bytes.to_vec())
    }
}

// ---------------------------------------------------------------------------
// MockSynthesizer — test double
// ---------------------------------------------------------------------------

/// Canned synthesis engine for pipeline tests.
#[cfg(test)]
pub struct MockSynthesizer {
    response: Result<Vec<u8>, TtsError>,
}

#[cfg(test)]
impl MockSynthesizer {
    /// Always succeed with `bytes`.
    pub fn ok(bytes: &[u8]) -> Self {
        Self {
            response: Ok(bytes.to_vec()),
        }
    }

    /// Always fail as if the engine rejected the language code.
    pub fn failing() -> Self {
        Self {
            response: Err(TtsError::Http { status: 404 }),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl SpeechSynthesizer for MockSynthesizer {
    async fn synthesize(
        &self,
        _text: &str,
        _language: &str,
        _slow: bool,
    ) -> Result<Vec<u8>, TtsError> {
        self.response.clone()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_builds_without_panic() {
        let _engine = HttpTtsEngine::from_config(&TtsConfig::default());
    }

    #[tokio::test]
    async fn unreachable_engine_yields_request_error() {
        let config = TtsConfig {
            base_url: "http://127.0.0.1:1".into(),
            timeout_secs: 1,
            ..TtsConfig::default()
        };
        let engine = HttpTtsEngine::from_config(&config);

        let err = engine.synthesize("hello", "en", false).await.unwrap_err();
        assert!(matches!(err, TtsError::Request(_) | TtsError::Timeout));
    }

    #[tokio::test]
    async fn mock_ok_returns_canned_bytes() {
        let engine = MockSynthesizer::ok(&[1, 2, 3]);
        let bytes = engine.synthesize("hi", "en", false).await.unwrap();
        assert_eq!(bytes, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn mock_failing_returns_http_error() {
        let engine = MockSynthesizer::failing();
        let err = engine.synthesize("hi", "xx", false).await.unwrap_err();
        assert!(matches!(err, TtsError::Http { status: 404 }));
    }

    /// Verify that `HttpTtsEngine` is object-safe.
    #[test]
    fn engine_is_object_safe() {
        let engine: Box<dyn SpeechSynthesizer> =
            Box::new(HttpTtsEngine::from_config(&TtsConfig::default()));
        drop(engine);
    }
}
