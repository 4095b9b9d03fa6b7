//! Engine configuration, read from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) gives the
//! stock engine:
//!
//! ```toml
//! depth = 5
//! resign_threshold = -3000
//! draw_band = 50
//! # move_time_ms = 2000
//! # node_limit = 1000000
//!
//! [piece_values]
//! pawn = 100
//! knight = 320
//! bishop = 330
//! rook = 500
//! queen = 900
//! player_king = 5000
//! computer_king = -7500
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use chess_core::{DEFAULT_DEPTH, PieceValues, SearchLimits};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Lookahead in plies.
    pub depth: u8,
    pub piece_values: PieceValues,
    /// Resign when the Computer's outlook, measured from the kings-only
    /// baseline, falls below this.
    pub resign_threshold: i32,
    /// Outlooks in `-draw_band..=0` make the engine steer for a draw.
    pub draw_band: i32,
    pub move_time_ms: Option<u64>,
    pub node_limit: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            piece_values: PieceValues::default(),
            resign_threshold: -3000,
            draw_band: 50,
            move_time_ms: None,
            node_limit: None,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path`. A file that does not exist gives the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no engine config, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::Invalid("depth must be at least 1"));
        }
        if self.piece_values.player_king <= 0 {
            return Err(ConfigError::Invalid("player_king must be positive"));
        }
        if self.piece_values.computer_king >= 0 {
            return Err(ConfigError::Invalid("computer_king must be negative"));
        }
        if self.draw_band < 0 {
            return Err(ConfigError::Invalid("draw_band must not be negative"));
        }
        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Search limits for one move under this config.
    pub fn limits(&self) -> SearchLimits {
        let mut limits = SearchLimits::depth(self.depth);
        if let Some(ms) = self.move_time_ms {
            limits = limits.with_move_time(Duration::from_millis(ms));
        }
        if let Some(nodes) = self.node_limit {
            limits = limits.with_node_limit(nodes);
        }
        limits
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
