//! Core `TextTransformer` trait and the `WatsonxTransformer` backend.
//!
//! `WatsonxTransformer` calls the IBM watsonx.ai text-generation endpoint
//! with a tone-conditioned prompt. All connection details come from
//! [`WatsonConfig`]; nothing is hardcoded. The default pipeline never
//! reaches it without complete credentials — see
//! [`FallbackTransformer`](crate::rewrite::FallbackTransformer).

use async_trait::async_trait;
use thiserror::Error;

use crate::config::WatsonConfig;
use crate::rewrite::tone::Tone;

// ---------------------------------------------------------------------------
// RewriteError
// ---------------------------------------------------------------------------

/// Errors that can occur while rewriting text.
#[derive(Debug, Error)]
pub enum RewriteError {
    /// A tone name outside the closed set reached the parsing boundary.
    #[error("unknown tone: {0}")]
    InvalidTone(String),

    /// One or more Watson credentials are absent; the real backend cannot be
    /// called. The message lists the missing field names.
    #[error("missing credentials: {0}")]
    MissingCredentials(String),

    /// HTTP transport or connection error.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("rewrite request timed out")]
    Timeout,

    /// The HTTP response could not be parsed as expected JSON.
    #[error("failed to parse rewrite response: {0}")]
    Parse(String),

    /// The backend returned a response with no usable text content.
    #[error("rewrite backend returned an empty response")]
    EmptyResponse,
}

impl From<reqwest::Error> for RewriteError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            RewriteError::Timeout
        } else {
            RewriteError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// RewriteResult
// ---------------------------------------------------------------------------

/// The paired original / tone-adapted text produced by a rewrite.
///
/// Created once per request and never mutated afterwards; the narrator and
/// the comparison view both consume it read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct RewriteResult {
    /// The text exactly as the caller supplied it.
    pub original: String,
    /// The tone that was applied.
    pub tone: Tone,
    /// The tone-adapted text. Non-empty whenever `original` is non-empty.
    pub rewritten: String,
}

// ---------------------------------------------------------------------------
// TextTransformer trait
// ---------------------------------------------------------------------------

/// Async trait for tone-conditioned text rewriting.
///
/// Implementors must be `Send + Sync` so they can be shared across threads
/// behind an `Arc<dyn TextTransformer>`. This is the single seam where a
/// real generative backend replaces the local template rewriter.
///
/// # Contract
///
/// - total over the empty string (return it unchanged or trivially wrapped);
/// - deterministic backends must return byte-identical output for identical
///   `(text, tone)` inputs.
#[async_trait]
pub trait TextTransformer: Send + Sync {
    async fn rewrite(&self, text: &str, tone: Tone) -> Result<RewriteResult, RewriteError>;
}

// Compile-time assertion: Box<dyn TextTransformer> must be constructible.
const _: fn() = || {
    fn _assert_object_safe(_: Box<dyn TextTransformer>) {}
};

// ---------------------------------------------------------------------------
// Tone prompts
// ---------------------------------------------------------------------------

/// Instruction sent to the generative backend, one per tone.
fn tone_instruction(tone: Tone) -> &'static str {
    match tone {
        Tone::Neutral => {
            "Rewrite the following text in a clear, neutral, and professional tone. \
             Maintain the original meaning and structure while making it suitable for \
             audiobook narration. Keep the same factual content but improve readability \
             and flow."
        }
        Tone::Suspenseful => {
            "Rewrite the following text with a suspenseful and engaging tone. Add \
             dramatic elements, build tension, and create intrigue while preserving the \
             core message. Use vivid descriptions and create anticipation suitable for \
             compelling audiobook narration."
        }
        Tone::Inspiring => {
            "Rewrite the following text with an inspiring and motivational tone. Enhance \
             the content with uplifting language, positive energy, and empowering \
             messages. Make it engaging and motivational while keeping the original \
             meaning intact."
        }
    }
}

/// Build the flat generation prompt for `(text, tone)`.
fn build_prompt(text: &str, tone: Tone) -> String {
    format!(
        "{}\n\nOriginal text:\n{}\n\nRewritten text:\n",
        tone_instruction(tone),
        text
    )
}

// ---------------------------------------------------------------------------
// WatsonxTransformer
// ---------------------------------------------------------------------------

/// Calls the watsonx.ai `/ml/v1/text/generation` endpoint.
///
/// # No hardcoded URLs
/// All connection details (`service_url`, `api_key`, `project_id`, `model`)
/// come exclusively from the [`WatsonConfig`] passed to
/// [`WatsonxTransformer::from_config`].
pub struct WatsonxTransformer {
    client: reqwest::Client,
    config: WatsonConfig,
}

impl WatsonxTransformer {
    /// Build a `WatsonxTransformer` from application config.
    ///
    /// The HTTP client is pre-configured with the per-request timeout from
    /// `config.timeout_secs`. A default (no-timeout) client is used as a
    /// last-resort fallback if the builder fails (should never happen in
    /// practice).
    pub fn from_config(config: &WatsonConfig) -> Self {
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
impl TextTransformer for WatsonxTransformer {
    /// Send `text` to the configured watsonx endpoint for rewriting.
    ///
    /// Returns [`RewriteError::MissingCredentials`] without issuing any
    /// request when the credential triple is incomplete.
    async fn rewrite(&self, text: &str, tone: Tone) -> Result<RewriteResult, RewriteError> {
        let missing = self.config.missing();
        if !missing.is_empty() {
            return Err(RewriteError::MissingCredentials(missing.join(", ")));
        }

        // Total over the empty string: nothing to rewrite, skip the request.
        if text.is_empty() {
            return Ok(RewriteResult {
                original: String::new(),
                tone,
                rewritten: String::new(),
            });
        }

        let url = format!(
            "{}/ml/v1/text/generation?version=2024-05-31",
            self.config.service_url.trim_end_matches('/')
        );

        let body = serde_json::json!({
            "model_id":   self.config.model,
            "project_id": self.config.project_id,
            "input":      build_prompt(text, tone),
            "parameters": {
                "decoding_method": "greedy",
                "max_new_tokens":  1024
            }
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RewriteError::Request(format!(
                "watsonx returned HTTP {}",
                response.status().as_u16()
            )));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| RewriteError::Parse(e.to_string()))?;

        let rewritten = json["results"][0]["generated_text"]
            .as_str()
            .ok_or(RewriteError::EmptyResponse)?
            .trim()
            .to_string();

        if rewritten.is_empty() {
            return Err(RewriteError::EmptyResponse);
        }

        Ok(RewriteResult {
            original: text.to_string(),
            tone,
            rewritten,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
