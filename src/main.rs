//! Four Fold terminal front-end
//!
//! The session controller: renders the board and goal, reads player moves,
//! and maps core outcomes to status messages. All game rules live in the
//! library; this file is presentation only.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use four_fold::Settings;
use four_fold::game::{GameSession, Op, Outcome};

fn settings_path() -> PathBuf {
    std::env::var_os("FOUR_FOLD_SETTINGS")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("four-fold.json"))
}

fn main() {
    env_logger::init();

    let path = settings_path();
    let mut settings = Settings::load(&path);
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Starting session with seed {seed}");

    let mut session = GameSession::new(seed, settings.trace_enabled);

    println!("Four Fold - combine the four numbers to reach the goal.");
    println!("Moves look like `1 + 2` (slots 1-4, operators + - *).");
    println!("Commands: new, cheat, quit");
    print_round(&session);
    prompt();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        match line.trim() {
            "" => {}
            "quit" | "q" => break,
            "new" => {
                session.new_round();
                println!("Lets Play!");
                print_round(&session);
            }
            "cheat" => {
                let enabled = !session.trace_enabled();
                session.set_trace_enabled(enabled);
                settings.trace_enabled = enabled;
                println!(
                    "Cheat mode {} (takes effect next round).",
                    if enabled { "on" } else { "off" }
                );
            }
            input => match parse_move(input) {
                Some((first, op, second)) => play_move(&mut session, first, op, second),
                None => println!("Could not read that move. Try something like `1 + 2`."),
            },
        }
        prompt();
    }

    if let Err(err) = settings.save(&path) {
        log::warn!("Failed to save settings: {err}");
    }
    let tally = session.tally();
    println!("Final score: {} wins, {} losses.", tally.wins, tally.losses);
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}

/// Parse `"<slot> <op> <slot>"` with 1-based slot numbers.
fn parse_move(input: &str) -> Option<(usize, Op, usize)> {
    let mut parts = input.split_whitespace();
    let first = parts.next()?.parse::<usize>().ok()?;
    let op = Op::from_str(parts.next()?)?;
    let second = parts.next()?.parse::<usize>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((first.checked_sub(1)?, op, second.checked_sub(1)?))
}

fn play_move(session: &mut GameSession, first: usize, op: Op, second: usize) {
    match session.apply_operation(first, op, second) {
        Ok(result) => {
            println!("= {result}");
            print_board(session);
            match session.outcome() {
                Outcome::Win => {
                    println!("Congratulations! You win! Type `new` to play again.");
                }
                Outcome::Lose => {
                    println!("Sorry, you lost! Type `new` to play again.");
                }
                Outcome::Continue => {}
            }
        }
        Err(err) => println!("{err}"),
    }
}

fn print_round(session: &GameSession) {
    println!("\nGoal: {}", session.goal());
    print_board(session);
    for step in session.trace() {
        println!("  cheat: {step}");
    }
}

fn print_board(session: &GameSession) {
    let slots: Vec<String> = session
        .board()
        .iter()
        .enumerate()
        .map(|(i, slot)| match slot {
            Some(value) => format!("[{}] {}", i + 1, value),
            None => format!("[{}] -", i + 1),
        })
        .collect();
    println!("{}", slots.join("  "));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("1 + 2"), Some((0, Op::Add, 1)));
        assert_eq!(parse_move("4 * 3"), Some((3, Op::Mul, 2)));
        assert_eq!(parse_move("2 - 2"), Some((1, Op::Sub, 1)));
        assert_eq!(parse_move("0 + 2"), None);
        assert_eq!(parse_move("1 / 2"), None);
        assert_eq!(parse_move("1 + 2 3"), None);
        assert_eq!(parse_move("nope"), None);
    }
}
