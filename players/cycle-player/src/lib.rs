//! Deterministic provider that rotates through the selections.
//! The pattern is Rock, Paper, Scissors, repeating by round number.

use rps_core::{PlayerInput, RoundContext, Selection, Signal};

pub struct CyclePlayer;

impl PlayerInput for CyclePlayer {
    fn name(&self) -> &'static str {
        "cycle"
    }

    fn next_selection(&mut self, ctx: &RoundContext) -> Signal {
        Signal::Play(match ctx.round % 3 {
            1 => Selection::Rock,
            2 => Selection::Paper,
            _ => Selection::Scissors,
        })
    }
}
