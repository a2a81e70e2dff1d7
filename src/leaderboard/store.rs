use super::{insert_ranked, LeaderboardStore, LEADERBOARD_KEY};
use crate::core::GameStats;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Leaderboard kept in a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Store named after the leaderboard key inside `dir`
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self::new(dir.as_ref().join(format!("{}.json", LEADERBOARD_KEY)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Vec<GameStats> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => return Vec::new(),
        };

        match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Failed to read leaderboard {:?}: {}", self.path, e);
                Vec::new()
            }
        }
    }
}

impl LeaderboardStore for JsonFileStore {
    fn save(&mut self, stats: &GameStats) -> Result<()> {
        let mut board = self.load();
        insert_ranked(&mut board, stats);

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {:?}", parent))?;
        }

        let json = serde_json::to_string_pretty(&board)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to save leaderboard to {:?}", self.path))
            .inspect_err(|e| log::error!("{:#}", e))?;

        log::info!("Saved session to leaderboard {:?}", self.path);
        Ok(())
    }

    fn entries(&self) -> Vec<GameStats> {
        self.load()
    }
}

/// Leaderboard that lives only as long as the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    board: Vec<GameStats>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LeaderboardStore for MemoryStore {
    fn save(&mut self, stats: &GameStats) -> Result<()> {
        insert_ranked(&mut self.board, stats);
        Ok(())
    }

    fn entries(&self) -> Vec<GameStats> {
        self.board.clone()
    }
}
