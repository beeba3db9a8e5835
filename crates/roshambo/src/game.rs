//! The game loop.
//!
//! All game state lives in a [`Session`] owned by [`Game`], which processes [`Event`]s one at a
//! time on the thread calling [`Game::run`]. Two [`Ticker`] threads drive it: one requesting a
//! camera frame every few milliseconds, and one counting down during a round. Neither touches the
//! session, so no locking is needed, and the session's own state checks guarantee that a round is
//! captured at most once no matter how the two timers interleave.
//!
//! Frame requests coalesce: if detecting a hand takes longer than the frame interval, the loop
//! simply runs at a lower frame rate, and countdown ticks and commands still get through.

use std::ops::ControlFlow;

use crossbeam::channel::{Receiver, Sender, TrySendError};
use crossbeam::select;

use crate::event::{self, Command, Event};
use crate::options::GameOptions;
use crate::session::{RoundId, Session};
use crate::ticker::Ticker;
use crate::timer::{FpsCounter, Timer};
use crate::video::{self, FrameSource, HandDetector};
use crate::view::{Status, View};

/// A game wired to a camera, a hand detector and a display.
pub struct Game<S, D, V> {
    source: S,
    detector: D,
    view: V,
    session: Session,
    opts: GameOptions,
    sender: Sender<Event>,
    queue: Receiver<Event>,
    countdown: Option<Ticker>,
    fps: FpsCounter,
    t_detect: Timer,
}

impl<S: FrameSource, D: HandDetector, V: View> Game<S, D, V> {
    pub fn new(opts: GameOptions, source: S, detector: D, view: V) -> Self {
        let (sender, queue) = event::queue();
        Self {
            source,
            detector,
            view,
            session: opts.session(),
            opts,
            sender,
            queue,
            countdown: None,
            fps: FpsCounter::new("game"),
            t_detect: Timer::new("detect"),
        }
    }

    /// Returns a sender that can be used to submit [`Command`]s (or any other [`Event`]) to the
    /// game loop.
    pub fn events(&self) -> Sender<Event> {
        self.sender.clone()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the game until a [`Command::Quit`] is received or the camera stream ends.
    ///
    /// Returns the final session so that the caller can report the score. The frame source is
    /// released when this returns.
    pub fn run(mut self) -> anyhow::Result<Session> {
        let (frame_requests, frames) = event::frame_signal();
        let frame_ticker = Ticker::builder(self.opts.frame_interval)
            .name("frame timer")
            .spawn(move |_| match frame_requests.try_send(()) {
                // Full: the previous request hasn't been handled yet.
                Ok(()) | Err(TrySendError::Full(())) => true,
                Err(TrySendError::Disconnected(())) => false,
            })?;

        self.render();

        let queue = self.queue.clone();
        loop {
            let event = select! {
                recv(queue) -> event => event?,
                recv(frames) -> frame => {
                    frame?;
                    Event::Frame
                }
            };
            if self.handle(event)?.is_break() {
                break;
            }
        }

        self.countdown = None;
        drop(frame_ticker);
        log::debug!("game loop exited");
        Ok(self.session)
    }

    /// Processes a single event.
    ///
    /// Returns [`ControlFlow::Break`] when the game should stop.
    pub fn handle(&mut self, event: Event) -> anyhow::Result<ControlFlow<()>> {
        match event {
            Event::Frame => return Ok(self.process_frame()),
            Event::CountdownTick { round } => self.countdown_tick(round),
            Event::Command(Command::StartRound) => self.start_round()?,
            Event::Command(Command::Quit) => {
                log::info!("quitting");
                return Ok(ControlFlow::Break(()));
            }
        }
        self.render();
        Ok(ControlFlow::Continue(()))
    }

    fn process_frame(&mut self) -> ControlFlow<()> {
        let mut frame = match self.source.read() {
            Ok(Some(frame)) => frame,
            Ok(None) => {
                log::info!("camera stream ended");
                return ControlFlow::Break(());
            }
            Err(e) => {
                log::warn!("failed to grab frame: {e:#}");
                return ControlFlow::Continue(());
            }
        };

        if self.opts.mirror {
            video::mirror(&mut frame);
        }

        let hand = self.t_detect.time(|| self.detector.detect(&frame));
        if self.session.observe(hand.as_ref()).is_some() {
            // The round is over; remaining ticks would be ignored anyway.
            self.countdown = None;
        }

        self.render();
        self.fps.tick_with([&mut self.t_detect]);
        ControlFlow::Continue(())
    }

    fn countdown_tick(&mut self, round: RoundId) {
        if round != self.session.round() {
            log::trace!("ignoring stale tick for round {round}");
            return;
        }

        self.session.tick();
        if !self.session.state().is_counting_down() {
            self.countdown = None;
        }
    }

    fn start_round(&mut self) -> anyhow::Result<()> {
        // Stop the previous round's countdown before its replacement starts.
        self.countdown = None;

        let round = self.session.start_round();
        let ticks = self.sender.clone();
        let ticker = Ticker::builder(self.opts.countdown_interval)
            .name("countdown")
            // One tick per step down to 0, plus one that closes the capture window.
            .limit(u64::from(self.session.countdown_from()) + 1)
            .spawn(move |_| ticks.send(Event::CountdownTick { round }).is_ok())?;
        self.countdown = Some(ticker);
        Ok(())
    }

    fn render(&mut self) {
        self.view.render(&Status::of(&self.session));
    }
}
