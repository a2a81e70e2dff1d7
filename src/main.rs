use anyhow::Result;
use hongbao::{
    protocol::{handle_command, parse_command, Flow},
    Engine,
};
use std::io::{self, BufRead};

fn main() -> Result<()> {
    env_logger::init();

    println!("Hongbao - Lucky Money Engine");

    let stdin = io::stdin();
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let input = line?;

        if let Some(cmd) = parse_command(&input) {
            match handle_command(&cmd, &mut engine) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(err) => {
                    if engine.options.strict_mode {
                        return Err(err);
                    } else {
                        eprintln!("{:#}", err);
                    }
                }
            }
        }
    }

    Ok(())
}
