//! Game configuration.

use std::{env, time::Duration};

use anyhow::Context;

use crate::computer::ComputerPlayer;
use crate::history::HistoryLog;
use crate::session::Session;

/// Settings for a [`Game`](crate::game::Game).
#[derive(Debug, Clone)]
pub struct GameOptions {
    countdown_from: u32,
    pub(crate) countdown_interval: Duration,
    pub(crate) frame_interval: Duration,
    history_capacity: usize,
    pub(crate) mirror: bool,
    seed: Option<u64>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            countdown_from: Session::DEFAULT_COUNTDOWN,
            countdown_interval: Duration::from_secs(1),
            frame_interval: Duration::from_millis(10),
            history_capacity: HistoryLog::DEFAULT_CAPACITY,
            mirror: true,
            seed: None,
        }
    }
}

impl GameOptions {
    /// Reads overrides from the `ROSHAMBO_*` environment variables.
    ///
    /// See the crate documentation for the list of variables. Unset variables keep their default
    /// value; malformed ones are reported as errors.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut opts = Self::default();

        if let Ok(seed) = env::var("ROSHAMBO_SEED") {
            let seed = seed
                .parse()
                .with_context(|| format!("invalid ROSHAMBO_SEED '{seed}'"))?;
            opts = opts.seed(seed);
        }
        if let Ok(ms) = env::var("ROSHAMBO_FRAME_INTERVAL_MS") {
            let ms = ms
                .parse()
                .with_context(|| format!("invalid ROSHAMBO_FRAME_INTERVAL_MS '{ms}'"))?;
            opts = opts.frame_interval(Duration::from_millis(ms));
        }
        if env::var_os("ROSHAMBO_NO_MIRROR").is_some() {
            opts = opts.mirror(false);
        }

        Ok(opts)
    }

    /// Sets the number the countdown starts at.
    #[inline]
    pub fn countdown_from(mut self, countdown_from: u32) -> Self {
        self.countdown_from = countdown_from;
        self
    }

    /// Sets the time between two countdown steps.
    ///
    /// This is also the length of the capture window.
    #[inline]
    pub fn countdown_interval(mut self, interval: Duration) -> Self {
        self.countdown_interval = interval;
        self
    }

    /// Sets how often a camera frame is grabbed and processed.
    #[inline]
    pub fn frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    /// Sets the number of rounds kept in the history log.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    #[inline]
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "history capacity must be non-zero");
        self.history_capacity = capacity;
        self
    }

    /// Selects whether frames are mirrored (selfie view) before hand detection.
    #[inline]
    pub fn mirror(mut self, mirror: bool) -> Self {
        self.mirror = mirror;
        self
    }

    /// Seeds the computer player, making its moves reproducible.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The time between two processed camera frames.
    pub fn frame_period(&self) -> Duration {
        self.frame_interval
    }

    /// Creates a [`Session`] configured according to these options.
    pub fn session(&self) -> Session {
        let computer = match self.seed {
            Some(seed) => ComputerPlayer::with_seed(seed),
            None => ComputerPlayer::new(),
        };
        Session::with_parts(
            computer,
            HistoryLog::new(self.history_capacity),
            self.countdown_from,
        )
    }
}
