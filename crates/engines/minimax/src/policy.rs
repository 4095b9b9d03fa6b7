//! What to do with a search score: play on, resign, or steer for a draw.
//!
//! Scores sit on one signed scale offset by the two king sentinels, so a
//! level position with only kings left evaluates to the baseline rather than
//! zero. The policy works on the outlook, the score measured from that
//! baseline and flipped so that positive is good for the side asking.

use chess_core::{PieceValues, Side};

use crate::config::EngineConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stance {
    Play,
    Resign,
    /// Level or slightly worse: a draw is welcome.
    PreferDraw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResignPolicy {
    pub resign_threshold: i32,
    pub draw_band: i32,
    pub baseline: i32,
}

impl ResignPolicy {
    pub fn new(resign_threshold: i32, draw_band: i32, values: &PieceValues) -> Self {
        Self {
            resign_threshold,
            draw_band,
            baseline: values.baseline(),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.resign_threshold, config.draw_band, &config.piece_values)
    }

    pub fn outlook(&self, side: Side, score: i32) -> i32 {
        (score - self.baseline) * side.sign()
    }

    pub fn judge(&self, side: Side, score: i32) -> Stance {
        let outlook = self.outlook(side, score);
        if outlook < self.resign_threshold {
            Stance::Resign
        } else if (-self.draw_band..=0).contains(&outlook) {
            Stance::PreferDraw
        } else {
            Stance::Play
        }
    }
}

impl Default for ResignPolicy {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod policy_tests;
