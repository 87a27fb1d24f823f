use std::io::{self, BufRead, Write};

use colored::Colorize;

use rk_dice::{RollerConfig, RollerSession};

pub fn run(seed: Option<u64>) -> Result<(), String> {
    let mut config = RollerConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let pool_limit = config.pool_limit;
    let mut session = RollerSession::new(config);

    println!("  {} Dice Roller", "Starting".bold());
    println!("  Up to {pool_limit} dice per pool.");
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}
