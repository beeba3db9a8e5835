//! The match state machine.
//!
//! A [`Session`] owns everything that outlives a single frame: the state of the current round,
//! the score and the history log. It is driven by three inputs:
//!
//! - [`Session::start_round`] (the player asked for a new round),
//! - [`Session::tick`] (one countdown interval elapsed),
//! - [`Session::observe`] (the hand detection result of the latest camera frame).
//!
//! A round counts down from [`Session::countdown_from`] to 0. While the countdown shows 0, the
//! first frame containing a hand captures the player's gesture and resolves the round. If the
//! next tick arrives before any hand was seen, the round expires unresolved.

use std::fmt;

use crate::computer::ComputerPlayer;
use crate::gesture::Gesture;
use crate::history::{HistoryEntry, HistoryLog};
use crate::landmark::HandLandmarks;
use crate::outcome::{self, Outcome, Score};

/// Identifies a round. Increases with every call to [`Session::start_round`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RoundId(u64);

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// State of the active round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// No round has been started yet.
    Idle,
    /// Counting down; the player's gesture is captured while the remaining count is 0.
    CountingDown(u32),
    /// The player's gesture was captured and the round has been scored.
    Resolved(HistoryEntry),
    /// The capture window passed without any hand in view. Nothing was scored.
    Expired,
}

impl RoundState {
    /// Whether a countdown tick would change this state.
    pub fn is_counting_down(&self) -> bool {
        matches!(self, RoundState::CountingDown(_))
    }

    /// The text shown in the countdown display.
    pub fn countdown_text(&self) -> String {
        match self {
            RoundState::CountingDown(0) => "SHOOT!".into(),
            RoundState::CountingDown(n) => n.to_string(),
            _ => String::new(),
        }
    }

    /// The main status line shown to the player.
    pub fn result_text(&self) -> &'static str {
        match self {
            RoundState::Idle => "Ready to play?",
            RoundState::CountingDown(_) | RoundState::Expired => "Get ready to show your gesture!",
            RoundState::Resolved(entry) => entry.outcome.message(),
        }
    }
}

/// Game state of one player session.
pub struct Session {
    state: RoundState,
    round: RoundId,
    countdown_from: u32,
    detected: Gesture,
    score: Score,
    history: HistoryLog,
    computer: ComputerPlayer,
}

impl Session {
    pub const DEFAULT_COUNTDOWN: u32 = 3;

    /// Creates a session with an entropy-seeded computer player and default settings.
    pub fn new() -> Self {
        Self::with_parts(
            ComputerPlayer::new(),
            HistoryLog::default(),
            Self::DEFAULT_COUNTDOWN,
        )
    }

    pub fn with_parts(computer: ComputerPlayer, history: HistoryLog, countdown_from: u32) -> Self {
        Self {
            state: RoundState::Idle,
            round: RoundId::default(),
            countdown_from,
            detected: Gesture::None,
            score: Score::new(),
            history,
            computer,
        }
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// The active (or last) round.
    pub fn round(&self) -> RoundId {
        self.round
    }

    pub fn countdown_from(&self) -> u32 {
        self.countdown_from
    }

    /// The gesture classified from the most recently observed frame.
    ///
    /// This follows the camera continuously and is independent of the captured gesture.
    pub fn detected(&self) -> Gesture {
        self.detected
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Starts a new round, discarding the state of the previous one.
    ///
    /// Can be called in any state, including in the middle of a countdown.
    pub fn start_round(&mut self) -> RoundId {
        self.round.0 += 1;
        self.state = RoundState::CountingDown(self.countdown_from);
        log::debug!("round {} started", self.round);
        self.round
    }

    /// Advances the countdown by one step.
    ///
    /// Returns `true` if the state changed. Ticks outside of a countdown are ignored.
    pub fn tick(&mut self) -> bool {
        match self.state {
            RoundState::CountingDown(0) => {
                log::warn!("round {}: no hand detected, round not scored", self.round);
                self.state = RoundState::Expired;
                true
            }
            RoundState::CountingDown(n) => {
                self.state = RoundState::CountingDown(n - 1);
                true
            }
            RoundState::Idle | RoundState::Resolved(_) | RoundState::Expired => false,
        }
    }

    /// Processes the hand detection result of one frame.
    ///
    /// While the countdown shows 0, the first frame with a hand resolves the round and the
    /// resulting [`HistoryEntry`] is returned. The round is resolved at most once; any later
    /// frames only update [`Session::detected`].
    pub fn observe(&mut self, hand: Option<&HandLandmarks>) -> Option<HistoryEntry> {
        self.detected = Gesture::detect(hand);

        if self.state != RoundState::CountingDown(0) || self.detected == Gesture::None {
            return None;
        }

        let user = self.detected;
        let computer = self.computer.choose();
        let outcome = outcome::resolve(user, computer, &mut self.score);
        let entry = HistoryEntry {
            user,
            computer,
            outcome,
        };
        self.history.record(entry);
        self.state = RoundState::Resolved(entry);

        log::info!("round {}: {entry}", self.round);
        Some(entry)
    }

    /// The outcome of the active round, if it has been resolved.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            RoundState::Resolved(entry) => Some(entry.outcome),
            _ => None,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::pose::hand_for;

    use super::*;

    fn session() -> Session {
        Session::with_parts(
            ComputerPlayer::with_seed(3),
            HistoryLog::default(),
            Session::DEFAULT_COUNTDOWN,
        )
    }

    fn count_down(session: &mut Session) {
        for _ in 0..session.countdown_from() {
            assert!(session.tick());
        }
        assert_eq!(*session.state(), RoundState::CountingDown(0));
    }

    #[test]
    fn countdown_sequence() {
        let mut s = session();
        assert_eq!(*s.state(), RoundState::Idle);
        assert!(!s.tick());

        s.start_round();
        let mut texts = vec![s.state().countdown_text()];
        while s.state().is_counting_down() {
            s.tick();
            texts.push(s.state().countdown_text());
        }
        assert_eq!(texts, ["3", "2", "1", "SHOOT!", ""]);
        assert_eq!(*s.state(), RoundState::Expired);
    }

    #[test]
    fn hand_before_zero_is_not_captured() {
        let mut s = session();
        s.start_round();
        let rock = hand_for(Gesture::Rock).unwrap();
        for _ in 0..3 {
            assert!(s.observe(Some(&rock)).is_none());
            assert_eq!(s.detected(), Gesture::Rock);
            s.tick();
        }
        assert!(s.history().is_empty());
        assert!(s.observe(Some(&rock)).is_some());
    }

    #[test]
    fn capture_fires_once() {
        let mut s = session();
        s.start_round();
        count_down(&mut s);

        let paper = hand_for(Gesture::Paper).unwrap();
        let first = s.observe(Some(&paper)).unwrap();
        assert_eq!(first.user, Gesture::Paper);
        assert!(s.observe(Some(&paper)).is_none());
        let scissors = hand_for(Gesture::Scissors).unwrap();
        assert!(s.observe(Some(&scissors)).is_none());

        assert_eq!(s.history().len(), 1);
        assert_eq!(s.score().rounds(), 1);
        assert_eq!(*s.state(), RoundState::Resolved(first));
        assert_eq!(s.detected(), Gesture::Scissors);

        // Late ticks from the countdown timer change nothing.
        assert!(!s.tick());
        assert_eq!(*s.state(), RoundState::Resolved(first));
    }

    #[test]
    fn no_hand_expires() {
        let mut s = session();
        s.start_round();
        count_down(&mut s);
        assert!(s.observe(None).is_none());
        assert_eq!(s.detected(), Gesture::None);
        assert!(s.tick());
        assert_eq!(*s.state(), RoundState::Expired);
        assert_eq!(s.state().result_text(), "Get ready to show your gesture!");

        // The window is closed: a hand showing up late is not captured.
        let rock = hand_for(Gesture::Rock).unwrap();
        assert!(s.observe(Some(&rock)).is_none());
        assert!(s.history().is_empty());
        assert_eq!(*s.score(), Score::new());
    }

    #[test]
    fn unknown_gesture_is_invalid() {
        let mut s = session();
        s.start_round();
        count_down(&mut s);
        let pointing = hand_for(Gesture::Unknown).unwrap();
        let entry = s.observe(Some(&pointing)).unwrap();
        assert_eq!(entry.outcome, Outcome::Invalid);
        assert_eq!(s.outcome(), Some(Outcome::Invalid));
        assert_eq!(*s.score(), Score::new());
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn restart_discards_outcome() {
        let mut s = session();
        let first = s.start_round();
        count_down(&mut s);
        s.observe(hand_for(Gesture::Rock).as_ref()).unwrap();
        assert!(s.outcome().is_some());

        let second = s.start_round();
        assert!(second > first);
        assert_eq!(*s.state(), RoundState::CountingDown(3));
        assert_eq!(s.outcome(), None);
        let second_again = s.start_round();
        assert!(second_again > second);
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.score().rounds(), 1);
    }

    #[test]
    fn restart_mid_countdown() {
        let mut s = session();
        s.start_round();
        s.tick();
        s.tick();
        assert_eq!(*s.state(), RoundState::CountingDown(1));
        s.start_round();
        assert_eq!(*s.state(), RoundState::CountingDown(3));
    }
}
