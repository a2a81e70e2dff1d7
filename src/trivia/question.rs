use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

/// Every question offers this many choices
pub const NUM_CHOICES: usize = 4;

/// A multiple choice question guarding an envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question: String,
    pub choices: Vec<String>,
    pub correct_answer: usize,
}

impl Question {
    pub fn new(question: impl Into<String>, choices: [&str; NUM_CHOICES], correct_answer: usize) -> Result<Self> {
        let question = Self {
            question: question.into(),
            choices: choices.iter().map(|c| c.to_string()).collect(),
            correct_answer,
        };
        question.validate()?;
        Ok(question)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(!self.question.trim().is_empty(), "question text is empty");
        ensure!(
            self.choices.len() == NUM_CHOICES,
            "expected {} choices, got {}",
            NUM_CHOICES,
            self.choices.len()
        );
        ensure!(
            self.correct_answer < NUM_CHOICES,
            "correct answer index {} out of range",
            self.correct_answer
        );
        Ok(())
    }

    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_answer
    }
}

/// Parse a question from generator output.
///
/// Generators tend to wrap the JSON object in a markdown code fence, so
/// fences and a leading `json` tag are stripped before parsing.
pub fn parse_question_json(text: &str) -> Result<Question> {
    let mut body = text.trim();

    if let Some(rest) = body.strip_prefix("```") {
        body = rest.trim_start();
        if body.get(..4).is_some_and(|tag| tag.eq_ignore_ascii_case("json")) {
            body = &body[4..];
        }
        body = body.trim_end().trim_end_matches("```");
    }

    let question: Question =
        serde_json::from_str(body.trim()).context("question is not valid JSON")?;
    question.validate()?;
    Ok(question)
}
