//! EchoVerse desktop window — egui/eframe application.
//!
//! # Architecture
//!
//! [`EchoVerseApp`] is the top-level [`eframe::App`] that owns the UI state
//! and two channel endpoints:
//!
//! * `command_tx` — sends [`PipelineCommand`] to the pipeline orchestrator.
//! * `result_rx`  — receives [`PipelineResult`] from the orchestrator.
//!
//! The window collects `(text, tone, voice)`, triggers one `Generate`
//! command per button press, and renders the comparison view, the audio
//! section, and the statistics line as results arrive. Generation is
//! single-flight: the button is disabled while the pipeline is busy.
//!
//! # Sections
//!
//! | Section | Content |
//! |---------|---------|
//! | Input | Pasted text area + file path / Load button |
//! | Customization | Tone and voice selectors |
//! | Comparison | Original vs. tone-adapted text, side by side |
//! | Audio | Save (download) button + statistics line |
//! | Settings | Watson credentials, persisted to `settings.toml` |

use std::path::PathBuf;
use std::time::Duration;

use eframe::egui;
use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::document;
use crate::pipeline::{NarrationStats, PipelineCommand, PipelineResult};
use crate::rewrite::{RewriteResult, Tone};
use crate::tts::{AudioArtifact, Voice};

// ---------------------------------------------------------------------------
// PipelineState — UI-side state machine
// ---------------------------------------------------------------------------

/// Current state of the generation pipeline, as seen by the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineState {
    /// Waiting for the user to press Generate.
    Idle,
    /// The tone rewriter is running.
    Rewriting,
    /// The synthesis engine is producing audio.
    Narrating,
    /// The request finished (fully or partially — audio may be absent).
    Done,
    /// The rewrite backend failed outright.
    Error,
}

impl PipelineState {
    /// `true` while a request is in flight. The UI disables the Generate
    /// button in these states — the core assumes single-flight use.
    pub fn is_busy(&self) -> bool {
        matches!(self, PipelineState::Rewriting | PipelineState::Narrating)
    }

    /// A short status label for the header line.
    pub fn label(&self) -> &'static str {
        match self {
            PipelineState::Idle => "Idle",
            PipelineState::Rewriting => "Rewriting",
            PipelineState::Narrating => "Generating audio",
            PipelineState::Done => "Done",
            PipelineState::Error => "Error",
        }
    }
}

// ---------------------------------------------------------------------------
// EchoVerseApp
// ---------------------------------------------------------------------------

/// eframe application — the EchoVerse audiobook creator window.
pub struct EchoVerseApp {
    // ── Request inputs ───────────────────────────────────────────────────
    /// Text to narrate (pasted or loaded from a file).
    input_text: String,
    /// Path typed into the upload field.
    file_path: String,
    /// Selected tone.
    tone: Tone,
    /// Selected voice.
    voice: Voice,

    // ── Pipeline state ───────────────────────────────────────────────────
    pipeline_state: PipelineState,
    /// Latest rewrite, shown in the comparison view.
    rewrite: Option<RewriteResult>,
    /// Latest audio artifact, offered for download.
    artifact: Option<AudioArtifact>,
    /// Statistics for the latest artifact.
    stats: Option<NarrationStats>,
    /// Human-readable error for the Error state or a failed narration.
    error_message: Option<String>,
    /// Informational message (file loaded, audio saved, empty input…).
    info_message: Option<String>,

    // ── UI state ─────────────────────────────────────────────────────────
    show_settings: bool,
    /// Spinner animation phase (increases each frame).
    spinner_phase: f32,

    // ── Channels ─────────────────────────────────────────────────────────
    command_tx: mpsc::Sender<PipelineCommand>,
    result_rx: mpsc::Receiver<PipelineResult>,

    // ── Configuration ────────────────────────────────────────────────────
    /// Application configuration; the credentials section edits and saves it.
    config: AppConfig,
    /// Directory where Save writes audiobooks.
    output_dir: PathBuf,
}

impl EchoVerseApp {
    /// Create a new [`EchoVerseApp`].
    pub fn new(
        command_tx: mpsc::Sender<PipelineCommand>,
        result_rx: mpsc::Receiver<PipelineResult>,
        config: AppConfig,
        output_dir: PathBuf,
    ) -> Self {
        let tone = config.narration.default_tone;
        let voice = config.narration.default_voice;
        Self {
            input_text: String::new(),
            file_path: String::new(),
            tone,
            voice,
            pipeline_state: PipelineState::Idle,
            rewrite: None,
            artifact: None,
            stats: None,
            error_message: None,
            info_message: None,
            show_settings: false,
            spinner_phase: 0.0,
            command_tx,
            result_rx,
            config,
            output_dir,
        }
    }

    // ── Channel polling ──────────────────────────────────────────────────

    /// Drain all pending pipeline results (non-blocking).
    fn poll_results(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                PipelineResult::Started => {
                    self.pipeline_state = PipelineState::Rewriting;
                }
                PipelineResult::EmptyInput => {
                    self.pipeline_state = PipelineState::Idle;
                    self.info_message = Some("Please enter some text to continue.".into());
                }
                PipelineResult::RewriteComplete { result } => {
                    self.rewrite = Some(result);
                    self.pipeline_state = PipelineState::Narrating;
                }
                PipelineResult::NarrationComplete { artifact, stats } => {
                    self.artifact = Some(artifact);
                    self.stats = Some(stats);
                    self.pipeline_state = PipelineState::Done;
                }
                PipelineResult::NarrationFailed { message } => {
                    // Partial success: keep the rewrite, report the audio
                    // failure, stay usable.
                    self.artifact = None;
                    self.stats = None;
                    self.error_message = Some(message);
                    self.pipeline_state = PipelineState::Done;
                }
                PipelineResult::Error { message } => {
                    self.error_message = Some(message);
                    self.pipeline_state = PipelineState::Error;
                }
            }
        }
    }

    // ── Actions ──────────────────────────────────────────────────────────

    /// Send one Generate command and clear the previous request's output.
    fn start_generation(&mut self) {
        self.rewrite = None;
        self.artifact = None;
        self.stats = None;
        self.error_message = None;
        self.info_message = None;

        if self.input_text.trim().is_empty() {
            self.info_message = Some("Please enter some text to continue.".into());
            return;
        }

        let cmd = PipelineCommand::Generate {
            text: self.input_text.clone(),
            tone: self.tone,
            voice: self.voice,
        };
        if self.command_tx.try_send(cmd).is_ok() {
            self.pipeline_state = PipelineState::Rewriting;
        } else {
            self.error_message = Some("Pipeline is not available.".into());
        }
    }

    /// Load the file named in the path field into the text area.
    fn load_file(&mut self) {
        let path = PathBuf::from(self.file_path.trim());
        match document::load_text_file(&path) {
            Ok(text) => {
                self.input_text = text;
                self.info_message = Some(format!("File '{}' loaded.", path.display()));
                self.error_message = None;
            }
            Err(e) => {
                self.error_message = Some(format!("Error reading file: {e}"));
            }
        }
    }

    /// Write the artifact's download view into the output directory.
    fn save_audio(&mut self) {
        let Some(artifact) = &self.artifact else {
            return;
        };
        match artifact.save_to(&self.output_dir) {
            Ok(path) => {
                self.info_message = Some(format!("Audio saved to {}", path.display()));
            }
            Err(e) => {
                self.error_message = Some(format!("Failed to save audio: {e}"));
            }
        }
    }

    // ── Section renderers ────────────────────────────────────────────────

    /// Header: title, status label, settings toggle.
    fn draw_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("EchoVerse — AI Audiobook Creator");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Settings").clicked() {
                    self.show_settings = !self.show_settings;
                }
                let status = if self.pipeline_state.is_busy() {
                    format!("{} {}…", self.spinner_char(), self.pipeline_state.label())
                } else {
                    self.pipeline_state.label().to_string()
                };
                ui.label(egui::RichText::new(status).color(self.state_color()));
            });
        });
        ui.label("Transform your text into an expressive, downloadable audiobook.");
    }

    /// Input section: text area + file path field.
    fn draw_input(&mut self, ui: &mut egui::Ui) {
        ui.separator();
        ui.label(egui::RichText::new("Input Your Text").strong());

        egui::ScrollArea::vertical()
            .id_salt("input_area")
            .max_height(160.0)
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut self.input_text)
                        .desired_width(f32::INFINITY)
                        .desired_rows(8)
                        .hint_text("Enter the text you want to convert to an audiobook…"),
                );
            });

        ui.horizontal(|ui| {
            ui.label("Or load a .txt file:");
            ui.add(
                egui::TextEdit::singleline(&mut self.file_path)
                    .desired_width(320.0)
                    .hint_text("/path/to/story.txt"),
            );
            if ui.button("Load").clicked() {
                self.load_file();
            }
        });
    }

    /// Customization section: tone and voice selectors over the closed sets.
    fn draw_customization(&mut self, ui: &mut egui::Ui) {
        ui.separator();
        ui.label(egui::RichText::new("Customization Options").strong());

        ui.horizontal(|ui| {
            egui::ComboBox::from_label("Tone")
                .selected_text(self.tone.label())
                .show_ui(ui, |ui| {
                    for tone in Tone::ALL {
                        ui.selectable_value(&mut self.tone, tone, tone.label());
                    }
                });

            ui.add_space(24.0);

            egui::ComboBox::from_label("Voice")
                .selected_text(self.voice.label())
                .show_ui(ui, |ui| {
                    for voice in Voice::ALL {
                        ui.selectable_value(&mut self.voice, voice, voice.label());
                    }
                });
        });

        ui.add_space(6.0);
        let busy = self.pipeline_state.is_busy();
        if ui
            .add_enabled(!busy, egui::Button::new("Generate Audiobook"))
            .clicked()
        {
            self.start_generation();
        }
    }

    /// Side-by-side original / tone-adapted comparison.
    fn draw_comparison(&mut self, ui: &mut egui::Ui) {
        let Some(rewrite) = self.rewrite.clone() else {
            return;
        };

        ui.separator();
        ui.label(egui::RichText::new("Text Comparison").strong());

        ui.columns(2, |cols| {
            cols[0].label(egui::RichText::new("Original Text").italics());
            egui::ScrollArea::vertical()
                .id_salt("original_text")
                .max_height(180.0)
                .show(&mut cols[0], |ui| {
                    ui.label(rewrite.original.as_str());
                });

            cols[1].label(egui::RichText::new("Tone-Adapted Text").italics());
            egui::ScrollArea::vertical()
                .id_salt("rewritten_text")
                .max_height(180.0)
                .show(&mut cols[1], |ui| {
                    ui.label(rewrite.rewritten.as_str());
                });
        });
    }

    /// Audio section: download button + statistics line.
    fn draw_audio(&mut self, ui: &mut egui::Ui) {
        let Some(artifact) = self.artifact.clone() else {
            return;
        };

        ui.separator();
        ui.label(egui::RichText::new("Generated Audiobook").strong());

        ui.horizontal(|ui| {
            ui.label(format!(
                "{} ({} KiB, {})",
                artifact.filename(),
                artifact.len() / 1024,
                artifact.mime_type()
            ));
            if ui.button("Save Audio").clicked() {
                self.save_audio();
            }
        });

        if let Some(stats) = &self.stats {
            ui.label(
                egui::RichText::new(format!("Audio statistics: {stats}"))
                    .color(egui::Color32::from_rgb(140, 140, 140)),
            );
        }
    }

    /// Settings panel: Watson credentials, persisted on Save.
    fn draw_settings(&mut self, ui: &mut egui::Ui) {
        ui.separator();
        ui.label(egui::RichText::new("IBM Watson Credentials").strong());

        egui::Grid::new("credentials_grid")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label("API Key:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.config.watson.api_key)
                        .password(true)
                        .desired_width(320.0),
                );
                ui.end_row();

                ui.label("Service URL:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.config.watson.service_url)
                        .desired_width(320.0),
                );
                ui.end_row();

                ui.label("Project ID:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.config.watson.project_id)
                        .password(true)
                        .desired_width(320.0),
                );
                ui.end_row();
            });

        if ui.button("Save Settings").clicked() {
            if let Err(e) = self.config.save() {
                log::error!("failed to save settings: {e}");
                self.error_message = Some(format!("Failed to save settings: {e}"));
            } else {
                self.info_message =
                    Some("Settings saved. Restart to apply backend changes.".into());
            }
        }

        let missing = self.config.watson.missing();
        if !missing.is_empty() {
            ui.label(
                egui::RichText::new(format!(
                    "Missing credentials: {}. Rewrites use the local simulated transformation.",
                    missing.join(", ")
                ))
                .color(egui::Color32::from_rgb(255, 180, 80)),
            );
        }
    }

    /// Diagnostics: informational and error lines.
    fn draw_messages(&self, ui: &mut egui::Ui) {
        if let Some(msg) = &self.info_message {
            ui.label(egui::RichText::new(msg.as_str()).color(egui::Color32::from_rgb(110, 170, 255)));
        }
        if let Some(msg) = &self.error_message {
            ui.label(egui::RichText::new(msg.as_str()).color(egui::Color32::from_rgb(255, 120, 80)));
        }
    }

    // ── Helpers ──────────────────────────────────────────────────────────

    /// A simple rotating ASCII spinner character driven by `spinner_phase`.
    fn spinner_char(&self) -> char {
        let chars = ['|', '/', '-', '\\'];
        let idx = (self.spinner_phase as usize) % chars.len();
        chars[idx]
    }

    /// Accent colour for the current state.
    fn state_color(&self) -> egui::Color32 {
        match &self.pipeline_state {
            PipelineState::Idle => egui::Color32::from_rgb(140, 140, 140),
            PipelineState::Rewriting | PipelineState::Narrating => {
                egui::Color32::from_rgb(68, 136, 255)
            }
            PipelineState::Done => egui::Color32::from_rgb(80, 200, 120),
            PipelineState::Error => egui::Color32::from_rgb(255, 120, 80),
        }
    }
}

// ---------------------------------------------------------------------------
// eframe::App impl
// ---------------------------------------------------------------------------

impl eframe::App for EchoVerseApp {
    /// Called every frame by eframe. Polls the result channel, advances the
    /// spinner, then renders the page.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results();

        self.spinner_phase += 0.08;
        if self.spinner_phase >= 4.0 {
            self.spinner_phase = 0.0;
        }

        // Keep repainting while the pipeline works so results are picked up
        // promptly and the spinner animates.
        if self.pipeline_state.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(66));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.draw_header(ui);

                if self.show_settings {
                    self.draw_settings(ui);
                }

                self.draw_input(ui);
                self.draw_customization(ui);
                self.draw_messages(ui);
                self.draw_comparison(ui);
                self.draw_audio(ui);
            });
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        log::info!("EchoVerse window closing");
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn busy_states_are_exactly_the_two_processing_phases() {
        assert!(!PipelineState::Idle.is_busy());
        assert!(PipelineState::Rewriting.is_busy());
        assert!(PipelineState::Narrating.is_busy());
        assert!(!PipelineState::Done.is_busy());
        assert!(!PipelineState::Error.is_busy());
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(PipelineState::Idle.label(), "Idle");
        assert_eq!(PipelineState::Narrating.label(), "Generating audio");
    }
}
