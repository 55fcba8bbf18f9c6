//! File logging setup.
//!
//! The terminal belongs to the renderer, so log output only ever goes to the
//! file named by `BLOCKTRIS_LOG_PATH`. Without it no subscriber is installed
//! and every `tracing` macro is a no-op.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::engine::EngineConfig;

/// Install the global subscriber. Returns whether logging is enabled.
pub fn init(config: &EngineConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_ref() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(LevelFilter::from_level(config.log_level))
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(true)
}
