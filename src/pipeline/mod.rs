//! Pipeline orchestrator module for EchoVerse.
//!
//! Wires the tone rewriter and the narrator into one request-scoped
//! pipeline and exposes the channel protocol the UI speaks.
//!
//! # Architecture
//!
//! ```text
//! PipelineCommand (mpsc)
//!        │
//!        ▼
//! Orchestrator::run()        ← async tokio task
//!        │
//!        ├─ TextTransformer::rewrite   (template or watsonx + fallback)
//!        └─ Narrator::narrate          (HTTP synthesis engine)
//!        │
//!        ▼
//! PipelineResult (mpsc)      ← polled by egui update() each frame
//! ```

pub mod runner;
pub mod stats;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use runner::{NarrationOutcome, Orchestrator, PipelineCommand, PipelineResult};
pub use stats::NarrationStats;
