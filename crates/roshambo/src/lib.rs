//! Rock-Paper-Scissors played against the computer with hand gestures.
//!
//! Camera frames are handed to a [`HandDetector`], the detected hand is classified into a
//! [`Gesture`], and a [`Session`] runs the countdown, captures the player's move when the countdown
//! reaches zero, and keeps score.
//!
//! # Coordinates
//!
//! Hand landmarks use normalized image coordinates: X points to the right, Y points *down*, and
//! both lie in `[0, 1]`. A smaller Y value means the point is higher up in the image.
//!
//! # Environment Variables
//!
//! [`GameOptions::from_env`] reads the following variables:
//!
//! * `ROSHAMBO_SEED`: seeds the computer's move generator, making its choices reproducible.
//! * `ROSHAMBO_FRAME_INTERVAL_MS`: overrides the frame timer period (default: 10 ms).
//! * `ROSHAMBO_NO_MIRROR`: if set, camera frames are not mirrored before hand detection.
//!
//! Log output is controlled by `RUST_LOG`, see [`init_logger!`].
//!
//! [`HandDetector`]: video::HandDetector
//! [`Gesture`]: gesture::Gesture
//! [`Session`]: session::Session
//! [`GameOptions::from_env`]: options::GameOptions::from_env

use log::LevelFilter;

pub mod computer;
pub mod event;
pub mod game;
pub mod gesture;
pub mod history;
pub mod input;
pub mod landmark;
pub mod options;
pub mod outcome;
pub mod pose;
pub mod session;
pub mod ticker;
pub mod timer;
pub mod video;
pub mod view;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_CRATE_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and this crate log at *debug* level, everything else at *info*. `RUST_LOG`
/// is applied on top of that.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
