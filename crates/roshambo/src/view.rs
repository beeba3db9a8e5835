//! Presentation of the game state.

use crate::gesture::Gesture;
use crate::history::HistoryLog;
use crate::outcome::Score;
use crate::session::{RoundState, Session};

/// A read-only snapshot of everything a display needs, taken after each processed frame.
#[derive(Clone, Copy)]
pub struct Status<'a> {
    pub state: &'a RoundState,
    /// The gesture visible in the latest frame.
    pub detected: Gesture,
    pub score: &'a Score,
    pub history: &'a HistoryLog,
}

impl<'a> Status<'a> {
    pub fn of(session: &'a Session) -> Self {
        Self {
            state: session.state(),
            detected: session.detected(),
            score: session.score(),
            history: session.history(),
        }
    }

    pub fn countdown_text(&self) -> String {
        self.state.countdown_text()
    }

    pub fn result_text(&self) -> &'static str {
        self.state.result_text()
    }

    /// "You: … vs PC: …" for a resolved round.
    pub fn matchup_text(&self) -> Option<String> {
        match self.state {
            RoundState::Resolved(entry) => {
                Some(format!("You: {} vs PC: {}", entry.user, entry.computer))
            }
            _ => None,
        }
    }

    pub fn detected_text(&self) -> String {
        format!("Detected: {}", self.detected)
    }
}

/// Renders [`Status`] snapshots to the player.
pub trait View {
    fn render(&mut self, status: &Status<'_>);
}

impl<V: View + ?Sized> View for Box<V> {
    fn render(&mut self, status: &Status<'_>) {
        (**self).render(status)
    }
}

/// A [`View`] that renders through the `log` facade.
///
/// Frames arrive far more often than anything changes, so only lines that differ from the
/// previous render are logged.
#[derive(Default)]
pub struct LogView {
    countdown: String,
    result: &'static str,
    detected: Option<Gesture>,
    score: Option<Score>,
    recorded: u64,
}

impl LogView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl View for LogView {
    fn render(&mut self, status: &Status<'_>) {
        if self.detected != Some(status.detected) {
            log::debug!("{}", status.detected_text());
            self.detected = Some(status.detected);
        }

        let countdown = status.countdown_text();
        if countdown != self.countdown {
            if !countdown.is_empty() {
                log::info!("{countdown}");
            }
            self.countdown = countdown;
        }

        let result = status.result_text();
        if result != self.result {
            match status.matchup_text() {
                Some(matchup) => log::info!("{matchup} -> {result}"),
                None => log::info!("{result}"),
            }
            self.result = result;
        }

        if self.score != Some(*status.score) {
            log::info!("{}", status.score);
            self.score = Some(*status.score);
        }

        if status.history.recorded() != self.recorded {
            log::info!("Game History:");
            for entry in status.history.entries() {
                log::info!("  {entry}");
            }
            self.recorded = status.history.recorded();
        }
    }
}
