//! The seam between the game rules and whatever supplies player input.

use crate::score::Score;
use crate::Selection;

/// Everything a provider may want to know before choosing.
#[derive(Debug, Clone, Copy)]
pub struct RoundContext {
    /// 1-indexed round number.
    pub round: u32,
    /// Running score entering this round.
    pub score: Score,
}

/// A provider either plays a selection or cancels the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Play(Selection),
    Cancel,
}

/// Source of the player's selections.
///
/// Implementations may block until input arrives (a console prompt)
/// or answer immediately (a script, a generator). Cancelling is an
/// intentional early exit, not an error.
pub trait PlayerInput {
    /// Display name for logs and announcements.
    fn name(&self) -> &'static str;

    /// Produce the next selection, or `Signal::Cancel` to abort the
    /// match at the last completed round.
    fn next_selection(&mut self, ctx: &RoundContext) -> Signal;
}
