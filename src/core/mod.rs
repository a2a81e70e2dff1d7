//! Core game representations and rules

pub mod difficulty;
pub mod display;
pub mod distribute;
pub mod fund;
pub mod game;
pub mod money;
pub mod stats;

pub use difficulty::Difficulty;
pub use distribute::{distribute, distribute_fund, equal_split, is_feasible, redistribute, OpenedSet};
pub use fund::FundSpec;
pub use game::{AnswerOutcome, GameMode, GameState, OpenOutcome, PendingChallenge};
pub use money::{format_amount, round_to_granularity, Amount, GRANULARITY};
pub use stats::{Achievement, EnvelopeRecord, GameStats};
