//! Command-line shell for the Rock-Paper-Scissors engine.
//!
//! Two modes: `play` runs an interactive first-to-N match on the
//! console, `simulate` runs a scripted fixed-rounds match and prints
//! a report, optionally as JSON.

use console_player::ConsolePlayer;
use cycle_player::CyclePlayer;
use rand::rngs::StdRng;
use rand::SeedableRng;
use random_player::RandomPlayer;
use rps_core::{
    play_match, random_selection, resolve_round, MatchPolicy, MatchWinner, PlayerInput,
    RoundContext, ScoreTracker, Selection, Signal, Termination,
};
use scripted_player::ScriptedPlayer;
use std::env;
use std::process;

const DEFAULT_WIN_TARGET: u32 = 5;
const DEFAULT_ROUNDS: u32 = 5;

fn main() {
    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    let code = match args.first().map(String::as_str) {
        Some("play") => run_interactive(&args[1..]),
        Some("simulate") => run_simulation(&args[1..]),
        _ => {
            usage();
            2
        }
    };
    process::exit(code);
}

fn init_logging() {
    let _ = simplelog::TermLogger::init(
        log::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
}

fn usage() {
    eprintln!("usage: rps-cli play [--first-to N]");
    eprintln!("       rps-cli simulate [--rounds N] [--player random|cycle|scripted]");
    eprintln!("                        [--moves rock,paper,...] [--seed S] [--json]");
}

/// Interactive match against the computer, first to N wins.
fn run_interactive(args: &[String]) -> i32 {
    let target = match parse_u32(args, "--first-to", DEFAULT_WIN_TARGET) {
        Ok(target) if target > 0 => target,
        _ => {
            eprintln!("--first-to expects a positive number");
            return 2;
        }
    };

    println!("Rock, Paper, Scissors. First to {} wins takes the match.", target);

    let mut provider = ConsolePlayer::stdin();
    let mut rng = StdRng::from_entropy();
    let mut tracker = ScoreTracker::new(MatchPolicy::FirstTo(target));
    let mut round = 1u32;

    loop {
        let ctx = RoundContext {
            round,
            score: tracker.score(),
        };
        let player = match provider.next_selection(&ctx) {
            Signal::Play(selection) => selection,
            Signal::Cancel => {
                println!("Game cancelled. Final score: {}", tracker.score());
                return 0;
            }
        };

        let computer = match random_selection(&mut rng) {
            Ok(selection) => selection,
            Err(err) => {
                log::error!("aborting match: {}", err);
                return 1;
            }
        };

        let outcome = resolve_round(player, computer);
        println!("The computer played {}. {}", computer, outcome.message);
        tracker.record(outcome.winner);
        println!("{}", tracker.score());

        match tracker.match_result() {
            Ok(Some(winner)) => {
                announce(winner);
                return 0;
            }
            Ok(None) => {}
            Err(err) => {
                log::error!("aborting match: {}", err);
                return 1;
            }
        }
        round += 1;
    }
}

fn announce(winner: MatchWinner) {
    match winner {
        MatchWinner::Player => println!("You won the game! Congratulations!"),
        MatchWinner::Computer => println!("The computer won the game! Better luck next time!"),
        MatchWinner::Draw => println!("The match ends in a draw."),
    }
}

/// Scripted full match over a fixed number of rounds.
fn run_simulation(args: &[String]) -> i32 {
    let rounds = match parse_u32(args, "--rounds", DEFAULT_ROUNDS) {
        Ok(rounds) if rounds > 0 => rounds,
        _ => {
            eprintln!("--rounds expects a positive number");
            return 2;
        }
    };
    let seed = match flag_value(args, "--seed") {
        Some(raw) => match raw.parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                eprintln!("--seed expects a number");
                return 2;
            }
        },
        None => None,
    };

    let mut provider: Box<dyn PlayerInput> =
        match flag_value(args, "--player").unwrap_or("random") {
            "random" => Box::new(match seed {
                // Offset so the player and the computer draw
                // different streams from the same seed.
                Some(seed) => RandomPlayer::seeded(seed.wrapping_add(1)),
                None => RandomPlayer::new(),
            }),
            "cycle" => Box::new(CyclePlayer),
            "scripted" => {
                let raw = match flag_value(args, "--moves") {
                    Some(raw) => raw,
                    None => {
                        eprintln!("--player scripted requires --moves rock,paper,...");
                        return 2;
                    }
                };
                match parse_moves(raw) {
                    Ok(moves) => Box::new(ScriptedPlayer::new(moves)),
                    Err(bad) => {
                        eprintln!("not a valid selection in --moves: {:?}", bad);
                        return 2;
                    }
                }
            }
            other => {
                eprintln!("unknown player {:?}; expected random, cycle, or scripted", other);
                return 2;
            }
        };

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let report = match play_match(provider.as_mut(), &mut rng, MatchPolicy::FixedRounds(rounds)) {
        Ok(report) => report,
        Err(err) => {
            log::error!("simulation failed: {}", err);
            return 1;
        }
    };

    if has_flag(args, "--json") {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                log::error!("could not serialize the report: {}", err);
                return 1;
            }
        }
        return 0;
    }

    for record in &report.rounds {
        println!(
            "Round {}: you played {}, the computer played {}. {}",
            record.round, record.player, record.computer, record.message
        );
        println!("  {}", record.score);
    }
    println!("Final score: {}", report.score);
    match report.termination {
        Termination::Won(winner) => announce(winner),
        Termination::Cancelled => println!("Game cancelled before the match finished."),
    }
    0
}

fn flag_value<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.iter()
        .position(|arg| arg == name)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn has_flag(args: &[String], name: &str) -> bool {
    args.iter().any(|arg| arg == name)
}

fn parse_u32(args: &[String], name: &str, default: u32) -> Result<u32, ()> {
    match flag_value(args, name) {
        Some(raw) => raw.parse::<u32>().map_err(|_| ()),
        None => Ok(default),
    }
}

fn parse_moves(raw: &str) -> Result<Vec<Selection>, String> {
    raw.split(',')
        .map(|part| part.parse::<Selection>().map_err(|_| part.to_string()))
        .collect()
}
