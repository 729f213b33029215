//! Application entry point — EchoVerse.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Create [`tokio`] runtime (multi-thread, 2 workers).
//! 4. Build the rewrite backend from config — watsonx behind a template
//!    fallback when the credential triple is complete, plain template
//!    otherwise.
//! 5. Build the narrator over the HTTP synthesis engine.
//! 6. Create pipeline channels (`command`, `result`) and spawn the
//!    orchestrator on the tokio runtime.
//! 7. Run [`eframe::run_native`] — blocks the main thread until the window
//!    is closed.

use std::sync::Arc;

use tokio::sync::mpsc;

use echoverse::{
    app::EchoVerseApp,
    config::{AppConfig, AppPaths},
    pipeline::{Orchestrator, PipelineCommand, PipelineResult},
    rewrite::{FallbackTransformer, TemplateTransformer, TextTransformer, WatsonxTransformer},
    tts::{HttpTtsEngine, Narrator, SpeechSynthesizer},
};

use eframe::egui;

// ---------------------------------------------------------------------------
// Transformer selection
// ---------------------------------------------------------------------------

/// Build the rewrite backend for the loaded configuration.
///
/// Complete credentials select the watsonx backend wrapped in the template
/// fallback; anything less uses the local template directly, with a startup
/// diagnostic naming the missing fields.
fn build_transformer(config: &AppConfig) -> Arc<dyn TextTransformer> {
    if config.watson.is_complete() {
        log::info!("watsonx rewrite backend enabled ({})", config.watson.model);
        Arc::new(FallbackTransformer::new(WatsonxTransformer::from_config(
            &config.watson,
        )))
    } else {
        log::warn!(
            "missing credentials: {} — using the local simulated rewrite",
            config.watson.missing().join(", ")
        );
        Arc::new(TemplateTransformer::new())
    }
}

// ---------------------------------------------------------------------------
// Native options builder
// ---------------------------------------------------------------------------

fn native_options(config: &AppConfig) -> eframe::NativeOptions {
    let mut vp = egui::ViewportBuilder::default()
        .with_inner_size([880.0, 680.0])
        .with_min_inner_size([640.0, 480.0]);

    if let Some((x, y)) = config.ui.window_position {
        vp = vp.with_position(egui::pos2(x, y));
    }

    eframe::NativeOptions {
        viewport: vp,
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> eframe::Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("EchoVerse starting up");

    // 2. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });

    // 3. Tokio runtime (2 workers — rewrite + synthesis each take one)
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("failed to create tokio runtime");

    // 4. Rewrite backend
    let transformer = build_transformer(&config);

    // 5. Narrator over the HTTP synthesis engine
    let engine: Arc<dyn SpeechSynthesizer> = Arc::new(HttpTtsEngine::from_config(&config.tts));
    let narrator = Narrator::new(engine, config.tts.slow);

    // 6. Pipeline orchestrator
    let (command_tx, command_rx) = mpsc::channel::<PipelineCommand>(16);
    let (result_tx, result_rx) = mpsc::channel::<PipelineResult>(32);

    rt.spawn(Orchestrator::new(transformer, narrator).run(command_rx, result_tx));

    // 7. Build the egui app and run it (blocks until the window is closed)
    let output_dir = AppPaths::new().output_dir;
    let app = EchoVerseApp::new(command_tx, result_rx, config.clone(), output_dir);
    let options = native_options(&config);

    eframe::run_native("EchoVerse", options, Box::new(move |_cc| Ok(Box::new(app))))
}
