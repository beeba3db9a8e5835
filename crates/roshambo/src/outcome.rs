//! Game rules and scorekeeping.

use std::fmt;

use crate::gesture::Gesture;

/// The result of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    UserWins,
    ComputerWins,
    Tie,
    /// The player's hand shape was not recognized. Nobody scores.
    Invalid,
}

impl Outcome {
    /// The message shown to the player.
    pub fn message(self) -> &'static str {
        match self {
            Outcome::UserWins => "You win!",
            Outcome::ComputerWins => "Computer wins!",
            Outcome::Tie => "It's a tie!",
            Outcome::Invalid => "Invalid gesture! Try again.",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Cumulative score over the lifetime of the process.
///
/// Counters only ever increase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    user_wins: u32,
    computer_wins: u32,
    ties: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_wins(&self) -> u32 {
        self.user_wins
    }

    pub fn computer_wins(&self) -> u32 {
        self.computer_wins
    }

    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Total number of scored rounds. Invalid rounds are not counted.
    pub fn rounds(&self) -> u32 {
        self.user_wins + self.computer_wins + self.ties
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Score: You {} - {} Computer (Ties: {})",
            self.user_wins, self.computer_wins, self.ties
        )
    }
}

/// Decides the outcome of `user` playing against `computer` and updates `score` accordingly.
///
/// `user` must not be [`Gesture::None`]: a round without a detected hand is never resolved.
pub fn resolve(user: Gesture, computer: Gesture, score: &mut Score) -> Outcome {
    debug_assert_ne!(user, Gesture::None, "cannot resolve a round without a hand");

    if user == Gesture::Unknown {
        Outcome::Invalid
    } else if user == computer {
        score.ties += 1;
        Outcome::Tie
    } else if user.beats(computer) {
        score.user_wins += 1;
        Outcome::UserWins
    } else {
        score.computer_wins += 1;
        Outcome::ComputerWins
    }
}
