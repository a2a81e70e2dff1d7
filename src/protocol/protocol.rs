//! Line protocol driving the engine

use std::io::{self, Write};
use anyhow::{bail, ensure, Context, Result};
use indoc::indoc;

use crate::{
    core::{format_amount, AnswerOutcome, OpenOutcome},
    engine::{Engine, GameSetup},
};

const IDENTITY: &str = indoc! {"
    id name Hongbao
    option name seed type string default none
    option name strictmode type check default false
    option name leaderboard type string default memory
    hongbaook"};

/// What the command loop should do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Handle a protocol command
pub fn handle_command(cmd: &str, engine: &mut Engine) -> Result<Flow> {
    let parts: Vec<&str> = cmd.split_whitespace().collect();

    if parts.is_empty() {
        return Ok(Flow::Continue);
    }

    match parts[0] {
        "hongbao" => {
            println!("{}", IDENTITY);
        }
        "isready" => {
            println!("readyok");
        }
        "setoption" => {
            ensure!(parts.len() == 5 && parts[1] == "name" && parts[3] == "value",
                "invalid setoption command");

            engine.set_option(parts[2], parts[4])?;
        }
        "newgame" => {
            let setup = parts[1..].join(" ").parse::<GameSetup>()?;
            let game = engine.new_game(&setup)?;

            println!("newgame {} envelopes {} {}",
                game.amounts().len(), format_amount(game.spec().total()), game.mode());
        }
        "open" => {
            ensure!(parts.len() == 2, "open command requires an envelope index");
            let index = parts[1].parse().context("invalid envelope index")?;

            match engine.open(index)? {
                OpenOutcome::Revealed { index, amount } => {
                    println!("reveal {} {}", index, amount);
                }
                OpenOutcome::NeedsAnswer { index, difficulty } => {
                    let challenge = engine.game()
                        .and_then(|g| g.pending())
                        .context("question missing after open")?;

                    println!("question {} {} {}", index, difficulty, challenge.question.question);
                    for (k, choice) in challenge.question.choices.iter().enumerate() {
                        println!("choice {} {}", k, choice);
                    }
                }
            }
            report_finish(engine);
        }
        "answer" => {
            ensure!(parts.len() == 2, "answer command requires a choice");
            let choice = parts[1].parse().context("invalid choice")?;

            match engine.answer(choice)? {
                AnswerOutcome::Correct { index, amount } => {
                    println!("correct");
                    println!("reveal {} {}", index, amount);
                }
                AnswerOutcome::Wrong { correct_answer } => {
                    println!("wrong {}", correct_answer);
                    println!("redistributed");
                }
            }
            report_finish(engine);
        }
        "skip" => {
            match engine.skip()? {
                Some(index) => println!("skipped {}", index),
                None => println!("info nothing to skip"),
            }
        }
        "amounts" => {
            let game = engine.game().context("No game in progress")?;
            let amounts = game.amounts().iter()
                .map(|a| a.to_string())
                .collect::<Vec<_>>()
                .join(",");
            println!("amounts {}", amounts);
        }
        "display" => {
            engine.display();
        }
        "stats" => {
            let game = engine.game().context("No game in progress")?;
            print!("{}", game.stats());
        }
        "share" => {
            let game = engine.game().context("No game in progress")?;
            println!("{}", game.stats().share_text());
        }
        "leaderboard" => {
            for (rank, entry) in engine.leaderboard().iter().enumerate() {
                println!("entry {} {} {}%", rank + 1, entry.total_won, entry.accuracy_rate());
            }
            println!("leaderboardok");
        }
        "reset" => {
            engine.reset_game();
        }
        "quit" => {
            return Ok(Flow::Quit);
        }
        cmd => {
            bail!("Unknown command: {}", cmd);
        }
    }

    io::stdout().flush()?;
    Ok(Flow::Continue)
}

fn report_finish(engine: &Engine) {
    if let Some(game) = engine.game().filter(|g| g.is_finished()) {
        println!("info finished totalwon {}", game.stats().total_won);
    }
}
