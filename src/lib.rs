//! Hongbao - Engine for the lucky money envelope game

pub mod core;
pub mod engine;
pub mod leaderboard;
pub mod protocol;
pub mod trivia;
pub mod utils;

// Re-export commonly used items
pub use self::core::{distribute, redistribute, FundSpec, GameState};
pub use engine::Engine;
