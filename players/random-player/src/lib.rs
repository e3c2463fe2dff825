//! Provider that plays uniformly at random, like the computer does.
//! Useful for unattended simulations.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rps_core::{random_selection, PlayerInput, RoundContext, Signal};

pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded variant for reproducible simulations.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerInput for RandomPlayer {
    fn name(&self) -> &'static str {
        "random"
    }

    fn next_selection(&mut self, _ctx: &RoundContext) -> Signal {
        match random_selection(&mut self.rng) {
            Ok(selection) => Signal::Play(selection),
            // Unreachable in practice; surface it and stop the match.
            Err(err) => {
                log::error!("random player could not draw: {}", err);
                Signal::Cancel
            }
        }
    }
}
