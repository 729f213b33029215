//! EchoVerse — tone-adaptive audiobook creation.
//!
//! Converts user-supplied text into a downloadable narrated MP3, optionally
//! rephrasing it into a selected tone first. The pipeline is two leaf
//! components sequenced by an orchestrator:
//!
//! * [`rewrite`] — tone-conditioned text transformation (local template, or
//!   watsonx with a template fallback);
//! * [`tts`] — narration via an opaque HTTP synthesis engine;
//! * [`pipeline`] — sequencing, partial-success handling, statistics.
//!
//! The egui window in [`app`] is presentation glue over the pipeline.

pub mod app;
pub mod config;
pub mod document;
pub mod pipeline;
pub mod rewrite;
pub mod tts;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use config::AppConfig;
pub use pipeline::{NarrationOutcome, NarrationStats, Orchestrator};
pub use rewrite::{
    FallbackTransformer, RewriteError, RewriteResult, TemplateTransformer, TextTransformer, Tone,
    WatsonxTransformer,
};
pub use tts::{AudioArtifact, HttpTtsEngine, Narrator, SpeechSynthesizer, TtsError, Voice};
