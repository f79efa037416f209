//! HealthIA Daemon - symptom-based diagnosis API
//!
//! Loads the model artifacts once, then serves predictions over HTTP.

use anyhow::{Context, Result};
use clap::Parser;
use healthia_shared::{DiseaseCatalog, InferenceEngine};
use healthiad::cli::Cli;
use healthiad::config::Config;
use healthiad::server::{self, AppState};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    fmt().with_env_filter(filter).with_target(true).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_env_overrides()?;
    cli.apply(&mut config);
    config.validate()?;

    info!("HealthIA Daemon v{} starting", env!("CARGO_PKG_VERSION"));

    let catalog = DiseaseCatalog::builtin();
    let stats = catalog.stats();
    info!(
        "Disease catalog: {} samples, {} diseases",
        stats.sample_count, stats.disease_count
    );

    let paths = config.artifact_paths();
    let engine = match InferenceEngine::load(&paths, catalog) {
        Ok(engine) => {
            info!("Model bundle loaded: {} diseases", engine.labels().len());
            Some(engine)
        }
        Err(e) if !config.model.require_on_startup && !cli.check => {
            error!("Failed to load model bundle: {}", e);
            warn!("model.require_on_startup is false, serving without predictions");
            None
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!("failed to load model artifacts from {}", config.model.dir.display())
            })
        }
    };

    if cli.check {
        info!("Model artifacts in {} are valid", config.model.dir.display());
        return Ok(());
    }

    server::run(AppState::new(config, engine)).await
}
