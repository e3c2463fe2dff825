//! Match driver: wires a provider, the computer, and the tracker.

use crate::chooser::random_selection;
use crate::error::GameError;
use crate::provider::{PlayerInput, RoundContext, Signal};
use crate::resolver::{resolve_round, RoundWinner};
use crate::score::{MatchPolicy, MatchWinner, Score, ScoreTracker};
use crate::Selection;
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Why a match stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    Won(MatchWinner),
    Cancelled,
}

/// One completed round as it happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: u32,
    pub player: Selection,
    pub computer: Selection,
    pub winner: RoundWinner,
    pub message: String,
    /// Running score after this round.
    pub score: Score,
}

/// Everything that happened in one match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub rounds: Vec<RoundRecord>,
    pub score: Score,
    pub termination: Termination,
}

/// Play a full match: ask the provider for a selection, draw the
/// computer's, resolve, record, evaluate, repeat.
///
/// A `Signal::Cancel` from the provider stops the loop immediately,
/// leaving the score at the last completed round. Internal
/// consistency failures propagate as errors and abort the match.
pub fn play_match(
    provider: &mut dyn PlayerInput,
    rng: &mut dyn RngCore,
    policy: MatchPolicy,
) -> Result<MatchReport, GameError> {
    let mut tracker = ScoreTracker::new(policy);
    let mut rounds = Vec::new();
    let mut round = 1u32;

    loop {
        let ctx = RoundContext {
            round,
            score: tracker.score(),
        };
        let player = match provider.next_selection(&ctx) {
            Signal::Play(selection) => selection,
            Signal::Cancel => {
                log::info!("{} cancelled after {} rounds", provider.name(), rounds.len());
                return Ok(MatchReport {
                    rounds,
                    score: tracker.score(),
                    termination: Termination::Cancelled,
                });
            }
        };

        let computer = random_selection(rng)?;
        let outcome = resolve_round(player, computer);
        tracker.record(outcome.winner);
        rounds.push(RoundRecord {
            round,
            player,
            computer,
            winner: outcome.winner,
            message: outcome.message,
            score: tracker.score(),
        });

        if let Some(winner) = tracker.match_result()? {
            return Ok(MatchReport {
                rounds,
                score: tracker.score(),
                termination: Termination::Won(winner),
            });
        }
        round += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Selection::{Paper, Rock, Scissors};

    /// Plays a fixed sequence, then cancels.
    struct Script {
        moves: Vec<Selection>,
        cursor: usize,
    }

    impl Script {
        fn new(moves: Vec<Selection>) -> Self {
            Self { moves, cursor: 0 }
        }
    }

    impl PlayerInput for Script {
        fn name(&self) -> &'static str {
            "script"
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

    /// Yields a fixed residue sequence so the computer's selections
    /// are known in advance (0 = Rock, 1 = Paper, 2 = Scissors).
    struct FixedRng {
        residues: Vec<u32>,
        cursor: usize,
    }

    impl FixedRng {
        fn new(residues: Vec<u32>) -> Self {
            Self {
                residues,
                cursor: 0,
            }
        }
    }

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            let value = self.residues[self.cursor % self.residues.len()];
            self.cursor += 1;
            value
        }

        fn next_u64(&mut self) -> u64 {
            self.next_u32() as u64
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for byte in dest {
                *byte = self.next_u32() as u8;
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    #[test]
    fn fixed_rounds_match_plays_out_and_names_a_winner() {
        // Player / computer pairs giving win, win, loss, draw, win.
        let mut provider = Script::new(vec![Rock, Paper, Rock, Scissors, Scissors]);
        let mut rng = FixedRng::new(vec![2, 0, 1, 2, 1]);

        let report = play_match(&mut provider, &mut rng, MatchPolicy::FixedRounds(5)).unwrap();

        assert_eq!(report.rounds.len(), 5);
        assert_eq!(
            report.score,
            Score {
                player_wins: 3,
                computer_wins: 1,
                draws: 1,
            }
        );
        assert_eq!(report.termination, Termination::Won(MatchWinner::Player));
    }

    #[test]
    fn threshold_match_stops_at_the_fifth_win() {
        // Rock always beats the computer's Scissors.
        let mut provider = Script::new(vec![Rock; 20]);
        let mut rng = FixedRng::new(vec![2]);

        let report = play_match(&mut provider, &mut rng, MatchPolicy::FirstTo(5)).unwrap();

        assert_eq!(report.rounds.len(), 5);
        assert_eq!(report.score.player_wins, 5);
        assert_eq!(report.termination, Termination::Won(MatchWinner::Player));
    }

    #[test]
    fn cancellation_keeps_the_score_at_the_last_completed_round() {
        let mut provider = Script::new(vec![Rock, Paper]);
        let mut rng = FixedRng::new(vec![2, 0]);

        let report = play_match(&mut provider, &mut rng, MatchPolicy::FixedRounds(5)).unwrap();

        assert_eq!(report.termination, Termination::Cancelled);
        assert_eq!(report.rounds.len(), 2);
        assert_eq!(report.score.rounds_played(), 2);
        assert_eq!(report.score.player_wins, 2);
    }

    #[test]
    fn immediate_cancellation_ends_with_an_empty_report() {
        let mut provider = Script::new(vec![]);
        let mut rng = FixedRng::new(vec![0]);

        let report = play_match(&mut provider, &mut rng, MatchPolicy::FirstTo(5)).unwrap();

        assert_eq!(report.termination, Termination::Cancelled);
        assert!(report.rounds.is_empty());
        assert_eq!(report.score, Score::default());
    }

    #[test]
    fn round_records_carry_running_scores() {
        let mut provider = Script::new(vec![Rock, Rock, Rock]);
        let mut rng = FixedRng::new(vec![2, 0, 1]); // win, draw...

        let report = play_match(&mut provider, &mut rng, MatchPolicy::FixedRounds(3)).unwrap();

        let mut expected = Score::default();
        for record in &report.rounds {
            match record.winner {
                RoundWinner::Player => expected.player_wins += 1,
                RoundWinner::Computer => expected.computer_wins += 1,
                RoundWinner::Nobody => expected.draws += 1,
            }
            assert_eq!(record.score, expected);
        }
        assert_eq!(report.score, expected);
    }
}
