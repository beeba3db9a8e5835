//! Plays Rock-Paper-Scissors in the terminal.
//!
//! No camera or landmark model is bundled, so this runs against a synthetic camera and a scripted
//! hand that keeps cycling through gestures. Type `s` (or just press enter) to start a round and
//! `q` to quit.

use std::time::Duration;

use roshambo::game::Game;
use roshambo::gesture::Gesture;
use roshambo::input;
use roshambo::options::GameOptions;
use roshambo::video::{ScriptedHand, SyntheticCamera};
use roshambo::view::LogView;

/// How long the scripted hand holds each gesture.
const HOLD: Duration = Duration::from_millis(700);

const SCRIPT: &[Gesture] = &[
    Gesture::Rock,
    Gesture::Paper,
    Gesture::None,
    Gesture::Scissors,
    Gesture::Unknown,
];

fn main() -> anyhow::Result<()> {
    roshambo::init_logger!();

    let opts = GameOptions::from_env()?;
    let hand = ScriptedHand::with_timing(SCRIPT, HOLD, opts.frame_period());
    let game = Game::new(opts, SyntheticCamera::new(640, 480), hand, LogView::new());

    // Not joined: the reader blocks on stdin and ends with the process.
    let _stdin = input::spawn_stdin_reader(game.events())?;

    log::info!("press enter to start a round, 'q' to quit");
    let session = game.run()?;

    log::info!("final {}", session.score());
    Ok(())
}
