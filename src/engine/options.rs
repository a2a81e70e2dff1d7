//! Configuration options for the engine

use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use std::str::FromStr;

/// Where finished sessions are kept
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaderboardLocation {
    Memory,
    File(PathBuf),
}

impl FromStr for LeaderboardLocation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => bail!("Empty leaderboard location"),
            "memory" => Ok(LeaderboardLocation::Memory),
            path => Ok(LeaderboardLocation::File(PathBuf::from(path))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Fixed rng seed, `None` for fresh randomness
    pub seed: Option<u64>,
    /// Whether a failing command stops the engine
    pub strict_mode: bool,
    /// Where finished sessions are saved
    pub leaderboard: LeaderboardLocation,
}

impl EngineOptions {
    /// Create new engine options with custom parameters
    pub fn new(seed: Option<u64>, strict_mode: bool, leaderboard: LeaderboardLocation) -> Self {
        Self {
            seed,
            strict_mode,
            leaderboard,
        }
    }

    /// Set an option from its protocol name and textual value
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "seed" => {
                self.seed = match value {
                    "none" => None,
                    v => Some(v.parse().context("invalid seed")?),
                }
            }
            "strictmode" => self.strict_mode = value.parse()?,
            "leaderboard" => self.leaderboard = value.parse()?,
            _ => bail!("Unknown option: {}", name),
        }

        Ok(())
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            seed: None,
            strict_mode: false,
            leaderboard: LeaderboardLocation::Memory,
        }
    }
}
