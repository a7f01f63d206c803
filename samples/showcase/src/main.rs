//! Showcase Sample Application Entry Point

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use showcase::{ShowcaseConfig, ShowcaseError, run};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,showcase=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = match ShowcaseConfig::from_env() {
        Ok(config) => {
            tracing::info!(output = ?config.output, pause = config.pause, "Configuration loaded");
            config
        }
        Err(e) => {
            tracing::warn!("Failed to load configuration from environment: {e}");
            tracing::info!("Using default configuration");
            ShowcaseConfig::default()
        }
    };

    match execute(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Showcase failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn execute(config: &ShowcaseConfig) -> Result<(), ShowcaseError> {
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    let map = run(&mut writer, config.output)?;
    writer.flush()?;
    tracing::info!(entries = map.count(), "Showcase finished");

    if config.pause {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
    }
    Ok(())
}
