//! Fallback transformer — wraps any [`TextTransformer`] and degrades to the
//! local template rewrite on error.
//!
//! When the underlying backend call fails for any reason
//! (`MissingCredentials`, `Request`, `Timeout`, `Parse`, `EmptyResponse`)
//! [`FallbackTransformer`] logs the diagnostic and returns the
//! [`TemplateTransformer`] result instead of propagating the error. Missing
//! credentials therefore never block the pipeline; the user just gets the
//! simulated rewrite.

use async_trait::async_trait;

use crate::rewrite::template::TemplateTransformer;
use crate::rewrite::tone::Tone;
use crate::rewrite::transformer::{RewriteError, RewriteResult, TextTransformer};

/// A transparent wrapper around any [`TextTransformer`] that never returns
/// an error — on failure it applies the tone template locally.
pub struct FallbackTransformer<T: TextTransformer> {
    inner: T,
}

impl<T: TextTransformer> FallbackTransformer<T> {
    /// Wrap `inner` with fallback behaviour.
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Return a reference to the wrapped transformer.
    pub fn inner(&self) -> &T {
        &self.inner
    }
}

#[async_trait]
impl<T: TextTransformer + Send + Sync> TextTransformer for FallbackTransformer<T> {
    /// Attempt the backend rewrite; apply the local template if any error
    /// occurs.
    ///
    /// This implementation **never** returns `Err(_)`.
    async fn rewrite(&self, text: &str, tone: Tone) -> Result<RewriteResult, RewriteError> {
        match self.inner.rewrite(text, tone).await {
            Ok(result) => Ok(result),
            Err(err) => {
                log::warn!("backend rewrite failed ({err}) — using the local {tone} template");
                TemplateTransformer::new().rewrite(text, tone).await
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
