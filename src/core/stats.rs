//! Session statistics and achievements

use super::money::{format_amount, Amount};

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// A revealed envelope remembered for the results screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeRecord {
    pub amount: Amount,
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Achievement {
    LuckyDragon,
    QuizMaster,
    RiskTaker,
    FireStreak,
    MoneyMaker,
}

impl Achievement {
    pub fn all() -> [Achievement; 5] {
        [
            Achievement::LuckyDragon,
            Achievement::QuizMaster,
            Achievement::RiskTaker,
            Achievement::FireStreak,
            Achievement::MoneyMaker,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Achievement::LuckyDragon => "lucky-dragon",
            Achievement::QuizMaster => "quiz-master",
            Achievement::RiskTaker => "risk-taker",
            Achievement::FireStreak => "fire-streak",
            Achievement::MoneyMaker => "money-maker",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Achievement::LuckyDragon => "Lucky Dragon",
            Achievement::QuizMaster => "Quiz Master",
            Achievement::RiskTaker => "Risk Taker",
            Achievement::FireStreak => "Fire Streak",
            Achievement::MoneyMaker => "Money Maker",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Achievement::LuckyDragon => "Won the highest envelope",
            Achievement::QuizMaster => "Got all questions correct",
            Achievement::RiskTaker => "80% accuracy or higher",
            Achievement::FireStreak => "5+ correct answers in a row",
            Achievement::MoneyMaker => "Won over half the fund",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Achievement::LuckyDragon => "🐉",
            Achievement::QuizMaster => "🧠",
            Achievement::RiskTaker => "🎰",
            Achievement::FireStreak => "🔥",
            Achievement::MoneyMaker => "💰",
        }
    }

    fn is_earned(&self, stats: &GameStats, total_fund: Amount) -> bool {
        let answered = stats.total_challenges;
        let correct = stats.correct_answers;

        match self {
            Achievement::LuckyDragon => {
                let best = stats.best_envelope.map_or(0, |e| e.amount);
                best * 10 >= total_fund * 3
            }
            Achievement::QuizMaster => answered > 0 && correct == answered,
            Achievement::RiskTaker => answered > 0 && correct * 5 >= answered * 4,
            Achievement::FireStreak => stats.longest_streak >= 5,
            Achievement::MoneyMaker => stats.total_won * 2 >= total_fund,
        }
    }
}

/// Running tally of one game session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStats {
    pub total_won: Amount,
    pub total_challenges: u32,
    pub correct_answers: u32,
    #[serde(default)]
    pub current_streak: u32,
    pub longest_streak: u32,
    pub best_envelope: Option<EnvelopeRecord>,
    pub worst_envelope: Option<EnvelopeRecord>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    /// Milliseconds since the unix epoch when the session started
    pub timestamp: u64,
}

impl GameStats {
    pub fn new() -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        Self {
            total_won: 0,
            total_challenges: 0,
            correct_answers: 0,
            current_streak: 0,
            longest_streak: 0,
            best_envelope: None,
            worst_envelope: None,
            achievements: Vec::new(),
            timestamp,
        }
    }

    pub fn record_open(&mut self, index: usize, amount: Amount) {
        self.total_won += amount;

        let record = EnvelopeRecord { amount, index };
        if self.best_envelope.map_or(true, |best| amount > best.amount) {
            self.best_envelope = Some(record);
        }
        if self.worst_envelope.map_or(true, |worst| amount < worst.amount) {
            self.worst_envelope = Some(record);
        }
    }

    pub fn record_answer(&mut self, correct: bool) {
        self.total_challenges += 1;

        if correct {
            self.correct_answers += 1;
            self.current_streak += 1;
            self.longest_streak = self.longest_streak.max(self.current_streak);
        } else {
            self.current_streak = 0;
        }
    }

    /// Percentage of correct answers, rounded half up
    pub fn accuracy_rate(&self) -> u32 {
        if self.total_challenges == 0 {
            return 0;
        }
        (self.correct_answers * 200 + self.total_challenges) / (self.total_challenges * 2)
    }

    /// Evaluate achievements against the fund the session was played for.
    pub fn finalize(&mut self, total_fund: Amount) {
        self.achievements = Achievement::all()
            .into_iter()
            .filter(|a| a.is_earned(self, total_fund))
            .collect();
    }

    pub fn share_text(&self) -> String {
        format!(
            "🎉 I won {} in the Lucky Money Game! 🏮\n📊 Accuracy: {}%\n🔥 Longest Streak: {}\n🏆 Check the leaderboard!",
            format_amount(self.total_won),
            self.accuracy_rate(),
            self.longest_streak
        )
    }
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new()
    }
}
