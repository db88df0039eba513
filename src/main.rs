//! SenseHub Pipeline Runner
//!
//! Demo entry point that wires the stub detectors, the keyword scorer,
//! and the stub action executor into one plugin manager, then walks a
//! full detect → score → act pass over every sense.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use plugin_keyword_scorer::KeywordScorer;
use plugin_sense_stubs::{
    HearingStub, LogActionStub, SightStub, SmellStub, TasteStub, TouchStub,
};
use sensehub_core::config::AppConfig;
use sensehub_core::error::AppError;
use sensehub_core::types::{Sense, Signal};
use sensehub_plugin::{HookPoint, PluginManager};

fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(&config) {
        tracing::error!("Pipeline error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("SENSEHUB_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());

    if !std::path::Path::new(&config_path).exists() {
        return Ok(AppConfig::default());
    }

    AppConfig::load(&config_path)
        .map_err(|e| AppError::internal(format!("Config load error: {}", e)))
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Register all demo plugins and run one full pipeline pass.
fn run(config: &AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting SenseHub v{}", env!("CARGO_PKG_VERSION"));

    let manager = PluginManager::new();

    manager.register_plugin(Arc::new(SightStub), Some("sight-stub"))?;
    manager.register_plugin(Arc::new(HearingStub), Some("hearing-stub"))?;
    manager.register_plugin(Arc::new(TouchStub), Some("touch-stub"))?;
    manager.register_plugin(Arc::new(TasteStub), Some("taste-stub"))?;
    manager.register_plugin(Arc::new(SmellStub), Some("smell-stub"))?;
    manager.register_plugin(
        Arc::new(KeywordScorer::from_config(&config.scoring)),
        Some("keyword-scorer"),
    )?;
    manager.register_plugin(Arc::new(LogActionStub), Some("log-action"))?;

    tracing::info!(plugins = manager.plugin_count(), "Plugins registered");

    let source = config.pipeline.source.as_str();
    let threshold = config.pipeline.action_threshold;

    for sense in Sense::detection_senses() {
        let signals = detect(&manager, sense, source)?;
        tracing::info!(sense = %sense, detected = signals.len(), "Detection complete");

        for signal in signals {
            let signal = Arc::new(signal);
            let opinions = manager.score_signal(Arc::clone(&signal))?;

            for scored in opinions {
                tracing::info!(
                    sense = %sense,
                    score = scored.score(),
                    tags = ?scored.tags(),
                    "Signal scored"
                );

                if scored.score() < threshold {
                    continue;
                }

                let results = manager.execute_action(Arc::new(scored))?;
                for result in &results {
                    tracing::info!(
                        action = %result.action_type,
                        success = result.success,
                        "Action executed"
                    );
                }
            }
        }
    }

    tracing::info!("Pipeline pass complete");
    Ok(())
}

/// Dispatch the detection hook matching a sense.
fn detect(manager: &PluginManager, sense: Sense, source: &str) -> Result<Vec<Signal>, AppError> {
    match HookPoint::detect_for(sense) {
        Some(hook) => manager.dispatcher().dispatch_detect(hook, source),
        None => Ok(Vec::new()),
    }
}
