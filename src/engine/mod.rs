mod engine;
mod options;
mod setup;

pub use engine::Engine;
pub use options::{EngineOptions, LeaderboardLocation};
pub use setup::GameSetup;
