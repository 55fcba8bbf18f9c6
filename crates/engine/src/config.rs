//! Runtime configuration from environment variables
//!
//! Missing or unparsable values fall back to the defaults.

use std::path::PathBuf;

use tracing::Level;

use crate::core::rng::{PieceSource, UniformSource};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Seed for a reproducible piece sequence; `None` draws from OS entropy
    pub seed: Option<u64>,
    pub muted: bool,
    /// Ring the terminal bell for line clears and game over
    pub bell: bool,
    /// Log file; logging is disabled when unset
    pub log_path: Option<PathBuf>,
    pub log_level: Level,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            muted: false,
            bell: true,
            log_path: None,
            log_level: Level::INFO,
        }
    }
}

impl EngineConfig {
    /// Create from `BLOCKTRIS_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`EngineConfig::from_env`] with an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let seed = lookup("BLOCKTRIS_SEED").and_then(|s| s.trim().parse().ok());

        let muted = lookup("BLOCKTRIS_MUTED")
            .and_then(|s| parse_flag(&s))
            .unwrap_or(defaults.muted);

        let bell = lookup("BLOCKTRIS_BELL")
            .and_then(|s| parse_flag(&s))
            .unwrap_or(defaults.bell);

        let log_path = lookup("BLOCKTRIS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        let log_level = lookup("BLOCKTRIS_LOG_LEVEL")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.log_level);

        Self {
            seed,
            muted,
            bell,
            log_path,
            log_level,
        }
    }

    /// Piece source honoring the configured seed
    pub fn piece_source(&self) -> Box<dyn PieceSource> {
        match self.seed {
            Some(seed) => Box::new(UniformSource::seeded(seed)),
            None => Box::new(UniformSource::from_entropy()),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
