//! Local template rewriter — the simulated generative backend.
//!
//! A pure, deterministic lookup against a fixed table of three templates,
//! one per [`Tone`], each combining a fixed prefix/suffix phrase with the
//! verbatim original text. No network, no randomness. This is the path the
//! pipeline takes whenever the real backend is unavailable.

use async_trait::async_trait;

use crate::rewrite::tone::Tone;
use crate::rewrite::transformer::{RewriteError, RewriteResult, TextTransformer};

/// The simulated tone rewriter.
///
/// Output is always `prefix + text + suffix`, so for non-empty input the
/// rewritten text is non-empty, contains the original verbatim, and is at
/// least as long as the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateTransformer;

impl TemplateTransformer {
    pub fn new() -> Self {
        Self
    }

    /// Apply the tone template synchronously.
    ///
    /// Total over the empty string: `""` is returned trivially wrapped.
    pub fn apply(text: &str, tone: Tone) -> String {
        let prefix = tone.template_prefix();
        let suffix = tone.template_suffix();
        let mut out = String::with_capacity(prefix.len() + text.len() + suffix.len());
        out.push_str(prefix);
        out.push_str(text);
        out.push_str(suffix);
        out
    }
}

#[async_trait]
impl TextTransformer for TemplateTransformer {
    /// This implementation never returns `Err(_)`.
    async fn rewrite(&self, text: &str, tone: Tone) -> Result<RewriteResult, RewriteError> {
        Ok(RewriteResult {
            original: text.to_string(),
            tone,
            rewritten: Self::apply(text, tone),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
