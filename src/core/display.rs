use std::fmt;
use colored::Colorize;

use super::{
    game::{GameMode, GameState},
    money::format_amount,
    stats::GameStats,
};

/// Envelopes per row of the grid
const ROW_WIDTH: usize = 5;

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Mode: {}", self.mode())?;
        writeln!(f, "Fund: {} | Remaining: {}",
            format_amount(self.spec().total()).bright_yellow(),
            format_amount(self.remaining_fund()).bright_red())?;
        writeln!(f, "Opened: {}/{}", self.opened().len(), self.amounts().len())?;
        writeln!(f)?;

        for (i, amount) in self.amounts().iter().enumerate() {
            if i > 0 && i % ROW_WIDTH == 0 {
                writeln!(f)?;
            }

            let cell = if self.is_opened(i) {
                format!("{:>3}:{:>12}", i, format_amount(*amount)).bright_green()
            } else if self.pending().is_some_and(|p| p.index == i) {
                format!("{:>3}:{:>12}", i, "?").bright_yellow()
            } else {
                format!("{:>3}:{:>12}", i, "🧧").bright_red()
            };
            write!(f, "{} ", cell)?;
        }
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::Normal => write!(f, "normal"),
            GameMode::Challenge => write!(f, "challenge"),
        }
    }
}

impl fmt::Display for GameStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total won: {}", format_amount(self.total_won).bright_yellow())?;
        writeln!(f, "Accuracy: {}% ({}/{})",
            self.accuracy_rate(), self.correct_answers, self.total_challenges)?;
        writeln!(f, "Longest streak: {}", self.longest_streak)?;

        if let Some(best) = self.best_envelope {
            writeln!(f, "Best envelope: #{} {}", best.index, format_amount(best.amount).bright_green())?;
        }
        if let Some(worst) = self.worst_envelope {
            writeln!(f, "Worst envelope: #{} {}", worst.index, format_amount(worst.amount).bright_red())?;
        }

        for achievement in &self.achievements {
            writeln!(f, "{} {} - {}", achievement.emoji(), achievement.name().bold(), achievement.description())?;
        }

        Ok(())
    }
}
