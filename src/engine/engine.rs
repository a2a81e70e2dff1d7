use crate::core::{AnswerOutcome, GameState, GameStats, OpenOutcome};
use crate::leaderboard::{JsonFileStore, LeaderboardStore, MemoryStore};
use crate::trivia::{QuestionBank, TriviaProvider};
use crate::utils::seeded_rng;

use super::options::{EngineOptions, LeaderboardLocation};
use super::setup::GameSetup;

use anyhow::{Context, Result};
use rand::rngs::StdRng;

/// Engine runs game sessions and wires them to their collaborators
pub struct Engine {
    pub options: EngineOptions,
    game: Option<GameState>,
    rng: StdRng,
    trivia: Box<dyn TriviaProvider>,
    leaderboard: Box<dyn LeaderboardStore>,
}

impl Engine {
    /// Create a new engine instance with default options
    pub fn new() -> Self {
        Self::with_collaborators(Box::new(QuestionBank::new()), Box::new(MemoryStore::new()))
    }

    /// Create an engine with custom question and leaderboard backends
    pub fn with_collaborators(
        trivia: Box<dyn TriviaProvider>,
        leaderboard: Box<dyn LeaderboardStore>,
    ) -> Self {
        let options = EngineOptions::default();
        Self {
            rng: seeded_rng(options.seed),
            options,
            game: None,
            trivia,
            leaderboard,
        }
    }

    /// Set engine options
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        self.options.set_option(name, value)?;

        match name {
            "seed" => self.rng = seeded_rng(self.options.seed),
            "leaderboard" => {
                self.leaderboard = match &self.options.leaderboard {
                    LeaderboardLocation::Memory => Box::new(MemoryStore::new()),
                    LeaderboardLocation::File(path) => Box::new(JsonFileStore::new(path)),
                }
            }
            _ => {}
        }

        Ok(())
    }

    /// Start a new session, discarding the current one.
    pub fn new_game(&mut self, setup: &GameSetup) -> Result<&GameState> {
        let spec = setup.to_spec()?;
        Ok(self.game.insert(GameState::new(spec, setup.mode, &mut self.rng)))
    }

    pub fn reset_game(&mut self) {
        self.game = None;
    }

    /// Open an envelope. In challenge mode this fetches a question and
    /// leaves it pending on the game; a failed fetch leaves the game as it was.
    pub fn open(&mut self, index: usize) -> Result<OpenOutcome> {
        let game = self.game.as_mut().context("No game in progress")?;
        let outcome = game.open(index)?;

        if let OpenOutcome::NeedsAnswer { index, difficulty } = outcome {
            let question = self
                .trivia
                .question(difficulty, &mut self.rng)
                .inspect_err(|e| log::warn!("Failed to fetch {} question: {:#}", difficulty, e))
                .context("could not fetch a question, the envelope stays closed")?;
            game.pose(index, question)?;
        }

        self.record_if_finished();
        Ok(outcome)
    }

    /// Answer the pending question of the current game.
    pub fn answer(&mut self, choice: usize) -> Result<AnswerOutcome> {
        let game = self.game.as_mut().context("No game in progress")?;
        let outcome = game.answer(choice, &mut self.rng)?;

        self.record_if_finished();
        Ok(outcome)
    }

    /// Give up on the pending question, returning the envelope it guarded.
    pub fn skip(&mut self) -> Result<Option<usize>> {
        let game = self.game.as_mut().context("No game in progress")?;
        Ok(game.abandon_challenge().map(|c| c.index))
    }

    pub fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    pub fn leaderboard(&self) -> Vec<GameStats> {
        self.leaderboard.entries()
    }

    pub fn display(&self) {
        match &self.game {
            Some(game) => println!("{}", game),
            None => println!("No game in progress"),
        }
    }

    fn record_if_finished(&mut self) {
        let Some(game) = self.game.as_mut() else {
            return;
        };
        if !game.is_finished() {
            return;
        }

        let stats = game.finish();
        if let Err(e) = self.leaderboard.save(&stats) {
            log::error!("Could not record finished game: {:#}", e);
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
