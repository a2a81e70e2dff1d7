//! Local leaderboard of finished sessions

mod store;

pub use store::{JsonFileStore, MemoryStore};

use crate::core::GameStats;
use anyhow::Result;

/// Entries kept on the board
pub const MAX_ENTRIES: usize = 10;

/// Storage key the board lives under
pub const LEADERBOARD_KEY: &str = "tetLeaderboard";

/// Persistence sink for session summaries
pub trait LeaderboardStore {
    /// Add a session and keep only the best [`MAX_ENTRIES`].
    fn save(&mut self, stats: &GameStats) -> Result<()>;

    /// Saved sessions, highest total won first.
    fn entries(&self) -> Vec<GameStats>;
}

/// Insert `stats` into an already ranked board.
pub fn insert_ranked(board: &mut Vec<GameStats>, stats: &GameStats) {
    board.push(stats.clone());
    board.sort_by(|a, b| b.total_won.cmp(&a.total_won));
    board.truncate(MAX_ENTRIES);
}
