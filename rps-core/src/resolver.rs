//! Round resolution: the single source of truth for who wins.

use crate::Selection;
use serde::{Deserialize, Serialize};

/// Who won a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundWinner {
    Player,
    Computer,
    Nobody,
}

/// The resolved result of one round. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub winner: RoundWinner,
    pub message: String,
}

/// Resolve one round of Rock-Paper-Scissors.
///
/// Pure and total over all nine selection pairs: identical selections
/// draw, otherwise whichever side holds the dominant selection wins.
/// Non-draw messages name the winning and beaten selections.
pub fn resolve_round(player: Selection, computer: Selection) -> Outcome {
    let winner = if player == computer {
        RoundWinner::Nobody
    } else if player.beats(computer) {
        RoundWinner::Player
    } else {
        RoundWinner::Computer
    };

    let message = match winner {
        RoundWinner::Nobody => "It's a draw.".to_string(),
        RoundWinner::Player => format!("You won! {} beats {}", player, computer),
        RoundWinner::Computer => format!("You lost! {} beats {}", computer, player),
    };

    Outcome { winner, message }
}
