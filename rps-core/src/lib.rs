//! Core rules for Rock-Paper-Scissors matches.
//!
//! This crate owns the dominance relation, score tracking, and the
//! match driver. Interactive surfaces live in the player crates and
//! the CLI; they feed selections in through the [`PlayerInput`] trait.

pub mod chooser;
pub mod error;
pub mod provider;
pub mod resolver;
pub mod score;
pub mod session;

pub use chooser::random_selection;
pub use error::GameError;
pub use provider::{PlayerInput, RoundContext, Signal};
pub use resolver::{resolve_round, Outcome, RoundWinner};
pub use score::{MatchPolicy, MatchWinner, Score, ScoreTracker};
pub use session::{play_match, MatchReport, RoundRecord, Termination};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three playable selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
    Rock,
    Paper,
    Scissors,
}

impl Selection {
    /// All selections, in canonical order.
    pub const ALL: [Selection; 3] = [Selection::Rock, Selection::Paper, Selection::Scissors];

    /// The dominance relation: Rock beats Scissors, Scissors beats
    /// Paper, Paper beats Rock. Everything else is a draw or a loss.
    pub fn beats(self, other: Selection) -> bool {
        matches!(
            (self, other),
            (Selection::Rock, Selection::Scissors)
                | (Selection::Scissors, Selection::Paper)
                | (Selection::Paper, Selection::Rock)
        )
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Rock => write!(f, "Rock"),
            Selection::Paper => write!(f, "Paper"),
            Selection::Scissors => write!(f, "Scissors"),
        }
    }
}

impl FromStr for Selection {
    type Err = GameError;

    /// Parses a raw selection, trimming whitespace and ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rock" => Ok(Selection::Rock),
            "paper" => Ok(Selection::Paper),
            "scissors" => Ok(Selection::Scissors),
            _ => Err(GameError::InvalidSelection(s.to_string())),
        }
    }
}

/// Whether a raw input names a selection after trimming and case
/// normalization. Anything else never reaches the round resolver.
pub fn is_valid_selection(input: &str) -> bool {
    input.parse::<Selection>().is_ok()
}
