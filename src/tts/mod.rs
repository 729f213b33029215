//! Text-to-speech (narration) module.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────┐
//! │              SpeechSynthesizer (trait)             │
//! │                                                    │
//! │   ┌──────────┐      ┌──────────────┐               │
//! │   │  Voice   │      │ HttpTtsEngine │              │
//! │   │ - locale │─────▶│ - client      │              │
//! │   │ - lang   │      │ - base_url    │              │
//! │   └──────────┘      └──────┬───────┘               │
//! │                            │                       │
//! │                            ▼                       │
//! │                  ┌───────────────────┐             │
//! │                  │    Narrator       │             │
//! │                  │ text → artifact   │             │
//! │                  └───────────────────┘             │
//! └────────────────────────────────────────────────────┘
//! ```

pub mod artifact;
pub mod engine;
pub mod narrator;
pub mod voice;

// ── Public re-exports ──────────────────────────────────────────────────────

pub use artifact::{AudioArtifact, MP3_MIME};
pub use engine::{HttpTtsEngine, SpeechSynthesizer, TtsError};
pub use narrator::Narrator;
pub use voice::Voice;

// test-only re-export so the pipeline test module can import MockSynthesizer
// without `use echoverse::tts::engine::MockSynthesizer`.
#[cfg(test)]
pub use engine::MockSynthesizer;
