//! Game session state and rules

use super::{
    difficulty::Difficulty,
    distribute::{distribute_fund, redistribute, OpenedSet},
    fund::FundSpec,
    money::Amount,
    stats::GameStats,
};
use crate::trivia::{Question, NUM_CHOICES};

use anyhow::{bail, ensure, Context, Result};
use rand::Rng;
use std::str::FromStr;

/// How envelopes are opened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Envelopes open on request
    Normal,
    /// Each envelope is guarded by a trivia question
    Challenge,
}

impl FromStr for GameMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(GameMode::Normal),
            "challenge" => Ok(GameMode::Challenge),
            _ => bail!("Unknown game mode: {}", s),
        }
    }
}

/// A question waiting for an answer before its envelope opens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingChallenge {
    pub index: usize,
    pub difficulty: Difficulty,
    pub question: Question,
}

/// Result of asking to open an envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    Revealed { index: usize, amount: Amount },
    /// A question of this difficulty must be answered first
    NeedsAnswer { index: usize, difficulty: Difficulty },
}

/// Result of answering the pending question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct { index: usize, amount: Amount },
    /// The unopened envelopes were reshuffled
    Wrong { correct_answer: usize },
}

/// State of one lucky money session
#[derive(Debug, Clone)]
pub struct GameState {
    spec: FundSpec,
    mode: GameMode,
    amounts: Vec<Amount>,
    opened: OpenedSet,
    pending: Option<PendingChallenge>,
    stats: GameStats,
}

impl GameState {
    /// Start a session, splitting the fund once.
    pub fn new(spec: FundSpec, mode: GameMode, rng: &mut impl Rng) -> Self {
        let amounts = distribute_fund(&spec, rng);
        log::info!(
            "new {:?} game: {} across {} envelopes",
            mode,
            spec.total(),
            spec.packet_count()
        );

        Self {
            spec,
            mode,
            amounts,
            opened: OpenedSet::new(),
            pending: None,
            stats: GameStats::new(),
        }
    }

    /// Request an envelope. In normal mode it opens right away; in challenge
    /// mode the caller must fetch a question of the returned difficulty and
    /// [`pose`](Self::pose) it.
    pub fn open(&mut self, index: usize) -> Result<OpenOutcome> {
        self.check_closed(index)?;
        ensure!(self.pending.is_none(), "a question is already waiting for an answer");

        match self.mode {
            GameMode::Normal => {
                let amount = self.reveal(index);
                Ok(OpenOutcome::Revealed { index, amount })
            }
            GameMode::Challenge => {
                let difficulty = Difficulty::for_amount(self.amounts[index], self.spec.total());
                Ok(OpenOutcome::NeedsAnswer { index, difficulty })
            }
        }
    }

    /// Attach a fetched question to an envelope.
    pub fn pose(&mut self, index: usize, question: Question) -> Result<()> {
        ensure!(self.mode == GameMode::Challenge, "questions are only asked in challenge mode");
        self.check_closed(index)?;
        ensure!(self.pending.is_none(), "a question is already waiting for an answer");
        question.validate()?;

        let difficulty = Difficulty::for_amount(self.amounts[index], self.spec.total());
        self.pending = Some(PendingChallenge {
            index,
            difficulty,
            question,
        });
        Ok(())
    }

    /// Drop the pending question, leaving its envelope closed.
    pub fn abandon_challenge(&mut self) -> Option<PendingChallenge> {
        self.pending.take()
    }

    /// Answer the pending question. A correct answer opens the envelope; a
    /// wrong one redistributes the money left in unopened envelopes.
    pub fn answer(&mut self, choice: usize, rng: &mut impl Rng) -> Result<AnswerOutcome> {
        ensure!(choice < NUM_CHOICES, "choice {} out of range", choice);
        let challenge = self.pending.take().context("no question is waiting for an answer")?;

        let correct = challenge.question.is_correct(choice);
        self.stats.record_answer(correct);

        if correct {
            let amount = self.reveal(challenge.index);
            Ok(AnswerOutcome::Correct {
                index: challenge.index,
                amount,
            })
        } else {
            self.amounts = redistribute(&self.amounts, &self.opened, rng);
            Ok(AnswerOutcome::Wrong {
                correct_answer: challenge.question.correct_answer,
            })
        }
    }

    /// Evaluate achievements and return the final tally.
    pub fn finish(&mut self) -> GameStats {
        self.stats.finalize(self.spec.total());
        self.stats.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.opened.len() == self.amounts.len()
    }

    /// Money still sealed in unopened envelopes
    pub fn remaining_fund(&self) -> Amount {
        self.amounts
            .iter()
            .enumerate()
            .filter(|(i, _)| !self.opened.contains(i))
            .map(|(_, a)| a)
            .sum()
    }

    pub fn spec(&self) -> &FundSpec {
        &self.spec
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn amounts(&self) -> &[Amount] {
        &self.amounts
    }

    pub fn opened(&self) -> &OpenedSet {
        &self.opened
    }

    pub fn is_opened(&self, index: usize) -> bool {
        self.opened.contains(&index)
    }

    pub fn pending(&self) -> Option<&PendingChallenge> {
        self.pending.as_ref()
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    fn check_closed(&self, index: usize) -> Result<()> {
        ensure!(
            index < self.amounts.len(),
            "envelope {} does not exist, there are {}",
            index,
            self.amounts.len()
        );
        ensure!(!self.opened.contains(&index), "envelope {} is already open", index);
        Ok(())
    }

    fn reveal(&mut self, index: usize) -> Amount {
        let amount = self.amounts[index];
        self.opened.insert(index);
        self.stats.record_open(index, amount);
        amount
    }
}
