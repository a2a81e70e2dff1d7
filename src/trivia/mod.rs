//! Trivia questions gating envelopes in challenge mode

mod bank;
mod question;

pub use bank::QuestionBank;
pub use question::{parse_question_json, Question, NUM_CHOICES};

use crate::core::Difficulty;
use anyhow::Result;
use rand::rngs::StdRng;

/// Source of questions for a requested difficulty.
///
/// A failed request only aborts that one challenge; the envelope stays closed.
/// Providers that pick at random draw from the engine's rng so a seeded
/// session replays the same questions.
pub trait TriviaProvider {
    fn question(&mut self, difficulty: Difficulty, rng: &mut StdRng) -> Result<Question>;
}
