//! Provider that plays a fixed sequence of selections, then cancels.
//! Backs scripted full-match simulations and cancellation tests.

use rps_core::{PlayerInput, RoundContext, Selection, Signal};

pub struct ScriptedPlayer {
    moves: Vec<Selection>,
    cursor: usize,
}

impl ScriptedPlayer {
    pub fn new(moves: Vec<Selection>) -> Self {
        Self { moves, cursor: 0 }
    }

    /// Selections still left to play.
    pub fn remaining(&self) -> usize {
        self.moves.len().saturating_sub(self.cursor)
    }
}

impl PlayerInput for ScriptedPlayer {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn next_selection(&mut self, _ctx: &RoundContext) -> Signal {
        match self.moves.get(self.cursor) {
            Some(&selection) => {
                self.cursor += 1;
                Signal::Play(selection)
            }
            None => Signal::Cancel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rps_core::Score;

    fn ctx() -> RoundContext {
        RoundContext {
            round: 1,
            score: Score::default(),
        }
    }

    #[test]
    fn plays_the_script_in_order() {
        let mut player =
            ScriptedPlayer::new(vec![Selection::Paper, Selection::Rock, Selection::Scissors]);
        assert_eq!(player.remaining(), 3);
        assert_eq!(player.next_selection(&ctx()), Signal::Play(Selection::Paper));
        assert_eq!(player.next_selection(&ctx()), Signal::Play(Selection::Rock));
        assert_eq!(
            player.next_selection(&ctx()),
            Signal::Play(Selection::Scissors)
        );
        assert_eq!(player.remaining(), 0);
    }

    #[test]
    fn cancels_once_the_script_runs_out() {
        let mut player = ScriptedPlayer::new(vec![Selection::Rock]);
        assert_eq!(player.next_selection(&ctx()), Signal::Play(Selection::Rock));
        assert_eq!(player.next_selection(&ctx()), Signal::Cancel);
        // Stays cancelled on repeated asks.
        assert_eq!(player.next_selection(&ctx()), Signal::Cancel);
    }

    #[test]
    fn empty_script_cancels_immediately() {
        let mut player = ScriptedPlayer::new(vec![]);
        assert_eq!(player.next_selection(&ctx()), Signal::Cancel);
    }
}
