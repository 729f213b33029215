//! Pipeline orchestrator — sequences the tone rewriter and the narrator.
//!
//! # Pipeline flow
//!
//! ```text
//! PipelineCommand::Generate { text, tone, voice }
//!   ├─ text empty/whitespace           → EmptyInput        (not an error)
//!   └─ transformer.rewrite(text, tone) → RewriteComplete
//!        └─ narrator.narrate(rewritten, voice)
//!              ├─ Ok  → NarrationComplete { artifact, stats }
//!              └─ Err → NarrationFailed { message }         (rewrite kept)
//! ```
//!
//! Narration always narrates the **rewritten** text, never the original —
//! even for the Neutral tone. Partial success (text without audio) is a
//! first-class outcome: the comparison view must render even when audio
//! generation fails.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::pipeline::stats::NarrationStats;
use crate::rewrite::{RewriteResult, TextTransformer, Tone};
use crate::tts::{AudioArtifact, Narrator, Voice};

// ---------------------------------------------------------------------------
// Commands and results
// ---------------------------------------------------------------------------

/// Commands sent from the UI thread to the pipeline orchestrator.
#[derive(Debug, Clone)]
pub enum PipelineCommand {
    /// Run the full rewrite + narration pipeline for one request.
    Generate {
        text: String,
        tone: Tone,
        voice: Voice,
    },
}

/// Results / progress events delivered from the pipeline to the UI.
#[derive(Debug, Clone)]
pub enum PipelineResult {
    /// The pipeline accepted a generate command and started rewriting.
    Started,
    /// The input was empty or whitespace-only; nothing was produced. This is
    /// an informational outcome, not a failure.
    EmptyInput,
    /// Rewriting completed; narration is starting.
    RewriteComplete { result: RewriteResult },
    /// Narration completed; the request is done.
    NarrationComplete {
        artifact: AudioArtifact,
        stats: NarrationStats,
    },
    /// The synthesis engine failed. The rewrite result already delivered via
    /// [`PipelineResult::RewriteComplete`] remains valid.
    NarrationFailed { message: String },
    /// The rewrite backend failed and no fallback absorbed it.
    Error { message: String },
}

// ---------------------------------------------------------------------------
// NarrationOutcome
// ---------------------------------------------------------------------------

/// The composed result of one pipeline invocation.
///
/// All three fields are `None` for empty input. `rewrite` alone is `Some`
/// when narration failed. `stats` is present exactly when `audio` is.
#[derive(Debug, Clone, Default)]
pub struct NarrationOutcome {
    pub rewrite: Option<RewriteResult>,
    pub audio: Option<AudioArtifact>,
    pub stats: Option<NarrationStats>,
}

// ---------------------------------------------------------------------------
// Orchestrator
// ---------------------------------------------------------------------------

/// Drives the complete text → rewrite → narration pipeline.
///
/// One logical request at a time: the UI disables its generate button while
/// a request is in flight, and the orchestrator itself holds no state
/// between requests — each [`NarrationOutcome`] is request-scoped.
pub struct Orchestrator {
    transformer: Arc<dyn TextTransformer>,
    narrator: Narrator,
}

impl Orchestrator {
    /// Create a new orchestrator.
    ///
    /// * `transformer` — rewrite backend (usually a `FallbackTransformer`).
    /// * `narrator`    — narration front over the synthesis engine.
    pub fn new(transformer: Arc<dyn TextTransformer>, narrator: Narrator) -> Self {
        Self {
            transformer,
            narrator,
        }
    }

    /// Run the whole pipeline for one request and return the composed
    /// outcome.
    ///
    /// Never panics and never propagates an error: every failure mode is
    /// reflected in which fields of the outcome are populated (a transformer
    /// error without a fallback wrapper yields an empty outcome with a
    /// logged diagnostic).
    pub async fn process(&self, text: &str, tone: Tone, voice: Voice) -> NarrationOutcome {
        if text.trim().is_empty() {
            log::info!("pipeline: empty input — nothing to generate");
            return NarrationOutcome::default();
        }

        let rewrite = match self.transformer.rewrite(text, tone).await {
            Ok(result) => result,
            Err(e) => {
                log::error!("pipeline: rewrite failed: {e}");
                return NarrationOutcome::default();
            }
        };

        let (audio, stats) = match self.narrate_rewritten(&rewrite, voice).await {
            Ok((artifact, stats)) => (Some(artifact), Some(stats)),
            Err(message) => {
                log::warn!("pipeline: {message}");
                (None, None)
            }
        };

        NarrationOutcome {
            rewrite: Some(rewrite),
            audio,
            stats,
        }
    }

    /// Run the orchestrator until `command_rx` is closed.
    ///
    /// This is an `async fn` and should be spawned as a tokio task from
    /// `main()`. Every command produces a terminal result message; no
    /// failure escapes the loop.
    pub async fn run(
        self,
        mut command_rx: mpsc::Receiver<PipelineCommand>,
        result_tx: mpsc::Sender<PipelineResult>,
    ) {
        while let Some(cmd) = command_rx.recv().await {
            let PipelineCommand::Generate { text, tone, voice } = cmd;

            if text.trim().is_empty() {
                let _ = result_tx.send(PipelineResult::EmptyInput).await;
                continue;
            }

            let _ = result_tx.send(PipelineResult::Started).await;

            let rewrite = match self.transformer.rewrite(&text, tone).await {
                Ok(result) => result,
                Err(e) => {
                    let _ = result_tx
                        .send(PipelineResult::Error {
                            message: format!("Error rewriting text: {e}"),
                        })
                        .await;
                    continue;
                }
            };

            let _ = result_tx
                .send(PipelineResult::RewriteComplete {
                    result: rewrite.clone(),
                })
                .await;

            match self.narrate_rewritten(&rewrite, voice).await {
                Ok((artifact, stats)) => {
                    let _ = result_tx
                        .send(PipelineResult::NarrationComplete { artifact, stats })
                        .await;
                }
                Err(message) => {
                    // Non-fatal: the comparison view stays usable.
                    let _ = result_tx.send(PipelineResult::NarrationFailed { message }).await;
                }
            }
        }

        log::info!("pipeline: command channel closed, orchestrator shutting down");
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    /// Narrate the rewritten text and compute its statistics.
    ///
    /// The rewritten text is guaranteed non-empty here: the template wraps
    /// non-empty input with a non-empty prefix, and backend rewrites are
    /// rejected upstream when empty.
    async fn narrate_rewritten(
        &self,
        rewrite: &RewriteResult,
        voice: Voice,
    ) -> Result<(AudioArtifact, NarrationStats), String> {
        let artifact = self
            .narrator
            .narrate(&rewrite.rewritten, voice)
            .await
            .map_err(|e| format!("Error generating audio: {e}"))?;

        let stats = NarrationStats::for_text(&rewrite.rewritten);
        Ok((artifact, stats))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewrite::TemplateTransformer;
    use crate::tts::MockSynthesizer;

    fn make_orchestrator(synth: MockSynthesizer) -> Orchestrator {
        Orchestrator::new(
            Arc::new(TemplateTransformer::new()),
            Narrator::new(Arc::new(synth), false),
        )
    }

    // ---- process() ----

    #[tokio::test]
    async fn empty_input_yields_empty_outcome() {
        let orc = make_orchestrator(MockSynthesizer::ok(&[1]));
        let outcome = orc.process("", Tone::Neutral, Voice::Lisa).await;
        assert!(outcome.rewrite.is_none());
        assert!(outcome.audio.is_none());
        assert!(outcome.stats.is_none());
    }

    #[tokio::test]
    async fn whitespace_only_input_yields_empty_outcome() {
        let orc = make_orchestrator(MockSynthesizer::ok(&[1]));
        let outcome = orc.process("  \n\t  ", Tone::Inspiring, Voice::Allison).await;
        assert!(outcome.rewrite.is_none());
        assert!(outcome.audio.is_none());
    }

    #[tokio::test]
    async fn happy_path_produces_rewrite_audio_and_stats() {
        let orc = make_orchestrator(MockSynthesizer::ok(&[7, 7, 7]));
        let outcome = orc.process("Hello world", Tone::Neutral, Voice::Lisa).await;

        let rewrite = outcome.rewrite.expect("rewrite present");
        assert!(rewrite
            .rewritten
            .starts_with("In a clear and professional manner: "));
        assert!(rewrite.rewritten.contains("Hello world"));

        let audio = outcome.audio.expect("audio present");
        assert_eq!(audio.mime_type(), "audio/mp3");
        assert_eq!(audio.playback(), &[7, 7, 7]);

        let stats = outcome.stats.expect("stats present");
        assert_eq!(
            stats.character_count,
            rewrite.rewritten.chars().count()
        );
    }

    /// The narrator must receive the rewritten text, not the original — the
    /// stats therefore cover the wrapped text.
    #[tokio::test]
    async fn stats_are_computed_over_the_rewritten_text() {
        let orc = make_orchestrator(MockSynthesizer::ok(&[1]));
        let outcome = orc.process("abc", Tone::Suspenseful, Voice::Lisa).await;

        let rewrite = outcome.rewrite.unwrap();
        let stats = outcome.stats.unwrap();
        assert!(stats.character_count > 3);
        assert_eq!(stats.character_count, rewrite.rewritten.chars().count());
    }

    #[tokio::test]
    async fn synthesis_failure_keeps_the_rewrite() {
        let orc = make_orchestrator(MockSynthesizer::failing());
        let outcome = orc.process("Some story", Tone::Suspenseful, Voice::Michael).await;

        let rewrite = outcome.rewrite.expect("rewrite survives narration failure");
        assert!(rewrite.rewritten.contains("Some story"));
        assert!(outcome.audio.is_none());
        assert!(outcome.stats.is_none());
    }

    #[tokio::test]
    async fn unknown_voice_name_narrates_with_the_default_mapping() {
        let orc = make_orchestrator(MockSynthesizer::ok(&[1]));
        let voice = Voice::parse_or_default("Unknown");
        let outcome = orc.process("text", Tone::Neutral, voice).await;
        assert!(outcome.audio.is_some());
    }

    // ---- run() ----

    #[tokio::test]
    async fn run_emits_empty_input_without_starting() {
        let (cmd_tx, cmd_rx) = mpsc::channel(4);
        let (res_tx, mut res_rx) = mpsc::channel(8);
        let orc = make_orchestrator(MockSynthesizer::ok(&[1]));

        cmd_tx
            .send(PipelineCommand::Generate {
                text: "   ".into(),
                tone: Tone::Neutral,
                voice: Voice::Lisa,
            })
            .await
            .unwrap();
        drop(cmd_tx); // close channel so run() returns

        orc.run(cmd_rx, res_tx).await;

        assert!(matches!(res_rx.recv().await, Some(PipelineResult::EmptyInput)));
        assert!(res_rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn run_emits_started_rewrite_and_narration_in_order() {
        let (cmd_tx, cmd_rx) = mpsc::channel(4);
        let (res_tx, mut res_rx) = mpsc::channel(8);
        let orc = make_orchestrator(MockSynthesizer::ok(&[2, 4, 6]));

        cmd_tx
            .send(PipelineCommand::Generate {
                text: "Hello world".into(),
                tone: Tone::Neutral,
                voice: Voice::Lisa,
            })
            .await
            .unwrap();
        drop(cmd_tx);

        orc.run(cmd_rx, res_tx).await;

        assert!(matches!(res_rx.recv().await, Some(PipelineResult::Started)));

        match res_rx.recv().await {
            Some(PipelineResult::RewriteComplete { result }) => {
                assert_eq!(result.original, "Hello world");
                assert_eq!(result.tone, Tone::Neutral);
            }
            other => panic!("expected RewriteComplete, got {other:?}"),
        }

        match res_rx.recv().await {
            Some(PipelineResult::NarrationComplete { artifact, stats }) => {
                assert_eq!(artifact.download(), &[2, 4, 6]);
                assert!(stats.word_count >= 2);
            }
            other => panic!("expected NarrationComplete, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn run_reports_narration_failure_after_delivering_the_rewrite() {
        let (cmd_tx, cmd_rx) = mpsc::channel(4);
        let (res_tx, mut res_rx) = mpsc::channel(8);
        let orc = make_orchestrator(MockSynthesizer::failing());

        cmd_tx
            .send(PipelineCommand::Generate {
                text: "Doomed narration".into(),
                tone: Tone::Inspiring,
                voice: Voice::Allison,
            })
            .await
            .unwrap();
        drop(cmd_tx);

        orc.run(cmd_rx, res_tx).await;

        assert!(matches!(res_rx.recv().await, Some(PipelineResult::Started)));
        assert!(matches!(
            res_rx.recv().await,
            Some(PipelineResult::RewriteComplete { .. })
        ));
        match res_rx.recv().await {
            Some(PipelineResult::NarrationFailed { message }) => {
                assert!(message.contains("Error generating audio"));
            }
            other => panic!("expected NarrationFailed, got {other:?}"),
        }
    }
}
