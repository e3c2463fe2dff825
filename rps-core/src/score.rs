//! Score tracking and match-level evaluation.

use crate::error::GameError;
use crate::resolver::RoundWinner;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Running counters for a match. Monotonically non-decreasing until
/// the tracker is reset for a new match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player_wins: u32,
    pub computer_wins: u32,
    pub draws: u32,
}

impl Score {
    /// The counters always sum to the number of rounds played.
    pub fn rounds_played(&self) -> u32 {
        self.player_wins + self.computer_wins + self.draws
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player: {}, Computer: {}, Draws: {}",
            self.player_wins, self.computer_wins, self.draws
        )
    }
}

/// How a match is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPolicy {
    /// First side to reach this many round wins takes the match.
    FirstTo(u32),
    /// Exactly this many rounds are played, then totals are compared;
    /// equal win counters make the match a draw.
    FixedRounds(u32),
}

/// The winner of a whole match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchWinner {
    Player,
    Computer,
    Draw,
}

/// Owns the score for one match and decides when it is over.
///
/// Nothing else mutates the counters; the driver records one outcome
/// per round and asks for the match result afterwards.
#[derive(Debug, Clone)]
pub struct ScoreTracker {
    score: Score,
    rounds_recorded: u32,
    policy: MatchPolicy,
}

impl ScoreTracker {
    pub fn new(policy: MatchPolicy) -> Self {
        Self {
            score: Score::default(),
            rounds_recorded: 0,
            policy,
        }
    }

    /// Record one resolved round.
    pub fn record(&mut self, winner: RoundWinner) {
        match winner {
            RoundWinner::Player => self.score.player_wins += 1,
            RoundWinner::Computer => self.score.computer_wins += 1,
            RoundWinner::Nobody => self.score.draws += 1,
        }
        self.rounds_recorded += 1;
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_recorded
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Zero the counters for a fresh match under the same policy.
    pub fn reset(&mut self) {
        self.score = Score::default();
        self.rounds_recorded = 0;
    }

    /// Counter sums must track the rounds recorded exactly. A mismatch
    /// is a bug in the accounting, surfaced instead of reported past.
    fn check_accounting(&self) -> Result<(), GameError> {
        let summed = self.score.rounds_played();
        if summed != self.rounds_recorded {
            log::error!(
                "score counters sum to {} but {} rounds were recorded",
                summed,
                self.rounds_recorded
            );
            return Err(GameError::InternalConsistency(format!(
                "score counters sum to {} but {} rounds were recorded",
                summed, self.rounds_recorded
            )));
        }
        Ok(())
    }

    /// Evaluate the end-of-match condition under the tracker's policy.
    ///
    /// Returns `Ok(None)` while the match is still live.
    pub fn match_result(&self) -> Result<Option<MatchWinner>, GameError> {
        self.check_accounting()?;

        Ok(match self.policy {
            MatchPolicy::FirstTo(target) => {
                if self.score.player_wins >= target {
                    Some(MatchWinner::Player)
                } else if self.score.computer_wins >= target {
                    Some(MatchWinner::Computer)
                } else {
                    None
                }
            }
            MatchPolicy::FixedRounds(rounds) => {
                if self.rounds_recorded < rounds {
                    None
                } else if self.score.player_wins > self.score.computer_wins {
                    Some(MatchWinner::Player)
                } else if self.score.computer_wins > self.score.player_wins {
                    Some(MatchWinner::Computer)
                } else {
                    Some(MatchWinner::Draw)
                }
            }
        })
    }
}
