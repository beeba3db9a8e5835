//! Events processed by the game loop.

use crossbeam::channel::{self, Receiver, Sender};

use crate::session::RoundId;

/// A command issued by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start a new round, abandoning the current one.
    StartRound,
    /// Release the camera and exit.
    Quit,
}

/// Everything the game loop reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The frame timer fired: grab and process the next camera frame.
    ///
    /// At most one of these is ever pending.
    Frame,
    /// One countdown interval of `round` has elapsed.
    ///
    /// Ticks for any round but the active one are stale and must be ignored.
    CountdownTick { round: RoundId },
    Command(Command),
}

impl From<Command> for Event {
    fn from(cmd: Command) -> Self {
        Event::Command(cmd)
    }
}

/// Creates the event queue.
///
/// The queue is unbounded so that timer threads never block on a busy game loop. Frame requests
/// don't go through it; see [`frame_signal`].
pub fn queue() -> (Sender<Event>, Receiver<Event>) {
    channel::unbounded()
}

/// Creates the channel over which the frame timer requests [`Event::Frame`]s.
///
/// It holds at most one pending request. While the game loop is busy with a frame, further
/// requests are dropped with `try_send` instead of piling up behind it.
pub fn frame_signal() -> (Sender<()>, Receiver<()>) {
    channel::bounded(1)
}

#[cfg(test)]
mod tests {
    use crossbeam::channel::TrySendError;

    use super::*;

    #[test]
    fn frame_requests_coalesce() {
        let (tx, rx) = frame_signal();
        tx.try_send(()).unwrap();
        assert_eq!(tx.try_send(()), Err(TrySendError::Full(())));
        rx.recv().unwrap();
        assert!(rx.try_recv().is_err());
        tx.try_send(()).unwrap();
    }
}
