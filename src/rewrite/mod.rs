//! Tone rewriting module for EchoVerse.
//!
//! This module provides:
//! * [`TextTransformer`] — async trait implemented by all rewrite backends.
//! * [`TemplateTransformer`] — local simulated rewrite (fixed tone templates).
//! * [`WatsonxTransformer`] — watsonx.ai generative backend (credential-gated).
//! * [`FallbackTransformer`] — wraps any backend; applies the template on failure.
//! * [`Tone`] / [`RewriteResult`] / [`RewriteError`] — supporting types.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use echoverse::rewrite::{FallbackTransformer, TextTransformer, Tone, WatsonxTransformer};
//! use echoverse::config::WatsonConfig;
//!
//! #[tokio::main]
//! async fn main() {
//!     // A rewriter that never fails: template fallback when watsonx is
//!     // unreachable or credentials are missing.
//!     let rewriter =
//!         FallbackTransformer::new(WatsonxTransformer::from_config(&WatsonConfig::default()));
//!
//!     let result = rewriter.rewrite("Hello world", Tone::Neutral).await.unwrap();
//!     println!("{}", result.rewritten);
//! }
//! ```

pub mod fallback;
pub mod template;
pub mod tone;
pub mod transformer;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use fallback::FallbackTransformer;
pub use template::TemplateTransformer;
pub use tone::Tone;
pub use transformer::{RewriteError, RewriteResult, TextTransformer, WatsonxTransformer};
