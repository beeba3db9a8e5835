//! The computer opponent.

use crate::gesture::Gesture;

/// Draws the computer's moves uniformly at random.
pub struct ComputerPlayer {
    rng: fastrand::Rng,
}

impl Default for ComputerPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputerPlayer {
    /// Creates a player seeded from process entropy.
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Creates a player whose sequence of moves is fully determined by `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Returns [`Gesture::Rock`], [`Gesture::Paper`] or [`Gesture::Scissors`], each with
    /// probability 1/3.
    pub fn choose(&mut self) -> Gesture {
        Gesture::PLAYABLE[self.rng.usize(..Gesture::PLAYABLE.len())]
    }
}
