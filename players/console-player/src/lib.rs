//! Interactive provider that prompts on the console.
//!
//! Re-prompts indefinitely on invalid input; end-of-input or an
//! explicit quit cancels the match.

use rps_core::{PlayerInput, RoundContext, Selection, Signal};
use std::io::{self, BufRead, BufReader, Stdin, Write};

/// Reads the player's selections line by line.
///
/// Generic over the reader so tests can feed canned input; live play
/// uses [`ConsolePlayer::stdin`].
pub struct ConsolePlayer<R> {
    input: R,
}

impl ConsolePlayer<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(io::stdin()))
    }
}

impl<R: BufRead> ConsolePlayer<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> PlayerInput for ConsolePlayer<R> {
    fn name(&self) -> &'static str {
        "console"
    }

    fn next_selection(&mut self, ctx: &RoundContext) -> Signal {
        loop {
            println!("Round {} ({})", ctx.round, ctx.score);
            print!("Rock, Paper, or Scissors? (q to quit) ");
            io::stdout().flush().ok();

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => return Signal::Cancel, // end of input
                Ok(_) => {}
                Err(err) => {
                    log::warn!("could not read player input: {}", err);
                    return Signal::Cancel;
                }
            }

            let trimmed = line.trim();
            if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
                return Signal::Cancel;
            }

            match trimmed.parse::<Selection>() {
                Ok(selection) => return Signal::Play(selection),
                Err(_) => {
                    println!("You didn't enter one of Rock, Paper, or Scissors!");
                }
            }
        }
    }
}
