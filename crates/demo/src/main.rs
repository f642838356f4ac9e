use anyhow::{Context, Result};
use std::{
    fs::OpenOptions,
    io::{self, Write},
    sync::Arc,
};

use tracing_subscriber::{prelude::*, EnvFilter};
use vehicles_core::{build_fleet, demo, AppConfig, OutputFormat};

fn main() -> Result<()> {
    let config = AppConfig::load()?;
    init_logging(&config)?;

    let specs = config.fleet_specs();
    tracing::debug!(vehicles = specs.len(), output = ?config.output, "Configuration loaded");

    let mut fleet = build_fleet(&specs);
    let transcript = demo::run(&mut fleet);

    let rendered = match config.output {
        OutputFormat::Text => transcript.render(),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&transcript)
                .context("failed to serialize transcript")?;
            json.push('\n');
            json
        }
    };

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .context("failed to write transcript")?;
    stdout.flush().context("failed to flush stdout")
}

fn init_logging(config: &AppConfig) -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = build_env_filter(rust_log.as_deref(), &config.log_filter)?;

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(io::stderr);

    let file_layer = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_ansi(false)
                    .compact()
                    .with_writer(Arc::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(())
}

/// `RUST_LOG` wins over the configured directive; either must parse.
fn build_env_filter(rust_log: Option<&str>, log_filter: &str) -> Result<EnvFilter> {
    match rust_log.filter(|value| !value.trim().is_empty()) {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid {} value '{directives}'", EnvFilter::DEFAULT_ENV)),
        None => EnvFilter::try_new(log_filter)
            .with_context(|| format!("invalid log_filter '{log_filter}' in config")),
    }
}
