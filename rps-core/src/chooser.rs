//! Uniform random selection for the computer opponent.

use crate::error::GameError;
use crate::Selection;

/// Re-export for callers that inject their own randomness.
pub use rand::RngCore;

/// Draw one of the three selections uniformly at random.
///
/// The RNG is injected so interactive play can use entropy while
/// simulations and tests stay reproducible. A residue outside `0..=2`
/// cannot happen; the arm exists so a bad draw fails loudly instead
/// of defaulting.
pub fn random_selection(rng: &mut dyn RngCore) -> Result<Selection, GameError> {
    match rng.next_u32() % 3 {
        0 => Ok(Selection::Rock),
        1 => Ok(Selection::Paper),
        2 => Ok(Selection::Scissors),
        n => {
            log::error!("random draw {} outside the selection range", n);
            Err(GameError::InternalConsistency(format!(
                "random draw {} outside the selection range",
                n
            )))
        }
    }
}
