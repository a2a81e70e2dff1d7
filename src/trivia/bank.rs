//! Built-in offline question pool

use super::question::Question;
use super::TriviaProvider;
use crate::core::Difficulty;

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use rand::{prelude::*, rngs::StdRng};

type Entry = (Difficulty, &'static str, [&'static str; 4], usize);

lazy_static!(
    static ref QUESTIONS: Vec<Entry> = vec![
        (
            Difficulty::Easy,
            "What colour are lucky money envelopes traditionally?",
            ["A: Red", "B: White", "C: Black", "D: Grey"],
            0,
        ),
        (
            Difficulty::Easy,
            "Which calendar sets the date of the Lunar New Year?",
            ["A: Gregorian", "B: Lunisolar", "C: Julian", "D: Islamic"],
            1,
        ),
        (
            Difficulty::Easy,
            "How many animals are in the zodiac cycle?",
            ["A: 10", "B: 8", "C: 12", "D: 15"],
            2,
        ),
        (
            Difficulty::Easy,
            "Which flower is most associated with Tet in northern Vietnam?",
            ["A: Tulip", "B: Rose", "C: Sunflower", "D: Peach blossom"],
            3,
        ),
        (
            Difficulty::Medium,
            "What is the square sticky rice cake eaten at Tet called?",
            ["A: Banh chung", "B: Banh mi", "C: Pho", "D: Banh xeo"],
            0,
        ),
        (
            Difficulty::Medium,
            "Which flower decorates homes for Tet in southern Vietnam?",
            ["A: Lotus", "B: Yellow apricot blossom", "C: Orchid", "D: Lily"],
            1,
        ),
        (
            Difficulty::Medium,
            "What is the first visitor of the new year believed to bring?",
            ["A: Rain", "B: Debt", "C: The year's luck", "D: Nothing"],
            2,
        ),
        (
            Difficulty::Medium,
            "On which day do families see off the Kitchen Gods?",
            ["A: New Year's Day", "B: 1st of the 12th month", "C: 15th of the 1st month", "D: 23rd of the 12th month"],
            3,
        ),
        (
            Difficulty::Hard,
            "What does the five-fruit tray on the ancestral altar symbolise?",
            ["A: The five elements", "B: Five generations", "C: Five seasons", "D: Five rivers"],
            0,
        ),
        (
            Difficulty::Hard,
            "What is the name of the Tet custom of the first house visit?",
            ["A: Mung tuoi", "B: Xong dat", "C: Hai loc", "D: Don Tet"],
            1,
        ),
        (
            Difficulty::Hard,
            "Which animal replaces the Rabbit in the Vietnamese zodiac?",
            ["A: Fox", "B: Deer", "C: Cat", "D: Hare"],
            2,
        ),
        (
            Difficulty::Hard,
            "What is planted in front of houses to ward off evil spirits at Tet?",
            ["A: A pine tree", "B: A banana tree", "C: A rice stalk", "D: A bamboo pole"],
            3,
        ),
    ];
);

/// Serves questions from a fixed pool, picked at random per difficulty
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionBank;

impl QuestionBank {
    pub fn new() -> Self {
        Self
    }

    /// Number of pooled questions for a difficulty
    pub fn pool_size(difficulty: Difficulty) -> usize {
        QUESTIONS.iter().filter(|(d, ..)| *d == difficulty).count()
    }
}

impl TriviaProvider for QuestionBank {
    fn question(&mut self, difficulty: Difficulty, rng: &mut StdRng) -> Result<Question> {
        let (_, text, choices, correct) = QUESTIONS
            .iter()
            .filter(|(d, ..)| *d == difficulty)
            .choose(rng)
            .with_context(|| format!("no {} questions available", difficulty))?;

        Question::new(*text, *choices, *correct)
    }
}
