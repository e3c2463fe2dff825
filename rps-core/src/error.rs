//! Error taxonomy for the game core.

use std::error::Error;
use std::fmt;

/// Everything that can go wrong while running a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Raw input did not name a selection. Recovered by re-prompting
    /// in interactive play, rejected outright everywhere else.
    InvalidSelection(String),
    /// The input source was dismissed without a value. Terminates the
    /// current match; not a retry condition.
    Cancelled,
    /// A rules or score-accounting invariant was violated. Always a
    /// programming error, never user input, and always fatal to the
    /// match.
    InternalConsistency(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidSelection(input) => {
                write!(f, "not a valid selection: {:?}", input)
            }
            GameError::Cancelled => write!(f, "input cancelled"),
            GameError::InternalConsistency(detail) => {
                write!(f, "internal consistency failure: {}", detail)
            }
        }
    }
}

impl Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_display_human_readable_text() {
        assert_eq!(
            GameError::InvalidSelection("lizard".to_string()).to_string(),
            "not a valid selection: \"lizard\""
        );
        assert_eq!(GameError::Cancelled.to_string(), "input cancelled");
        assert!(GameError::InternalConsistency("bad tally".to_string())
            .to_string()
            .contains("bad tally"));
    }
}
