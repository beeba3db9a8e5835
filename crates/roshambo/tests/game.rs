//! Runs the full event loop with real timer threads.

use std::{
    sync::{Arc, Mutex},
    thread,
    time::{Duration, Instant},
};

use crossbeam::channel::Sender;
use roshambo::{
    event::{Command, Event},
    game::Game,
    gesture::Gesture,
    landmark::HandLandmarks,
    options::GameOptions,
    session::RoundState,
    video::{Frame, HandDetector, ScriptedHand, SyntheticCamera},
    view::{Status, View},
};

/// Remembers every distinct countdown text it was asked to render.
#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<String>>>);

impl View for Recorder {
    fn render(&mut self, status: &Status<'_>) {
        let text = status.countdown_text();
        let mut seen = self.0.lock().unwrap();
        if seen.last() != Some(&text) {
            seen.push(text);
        }
    }
}

fn opts() -> GameOptions {
    GameOptions::default()
        .seed(17)
        .frame_interval(Duration::from_millis(1))
        .countdown_interval(Duration::from_millis(50))
}

#[test]
fn plays_a_round() {
    // Roughly a second of frames, far longer than the countdown.
    let camera = SyntheticCamera::new(16, 16).limit(1000);
    let recorder = Recorder::default();
    let game = Game::new(
        opts(),
        camera,
        ScriptedHand::new([Gesture::Paper], 1),
        recorder.clone(),
    );
    game.events().send(Command::StartRound.into()).unwrap();

    let session = game.run().unwrap();

    let entry = match session.state() {
        RoundState::Resolved(entry) => *entry,
        other => panic!("round not resolved: {other:?}"),
    };
    assert_eq!(entry.user, Gesture::Paper);
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.score().rounds(), 1);

    let seen = recorder.0.lock().unwrap().clone();
    assert_eq!(seen, ["", "3", "2", "1", "SHOOT!", ""]);
}

#[test]
fn round_without_hand_expires() {
    let camera = SyntheticCamera::new(16, 16).limit(1000);
    let game = Game::new(
        opts(),
        camera,
        ScriptedHand::new([Gesture::None], 1),
        Recorder::default(),
    );
    game.events().send(Command::StartRound.into()).unwrap();

    let session = game.run().unwrap();
    assert_eq!(*session.state(), RoundState::Expired);
    assert!(session.history().is_empty());
}

#[test]
fn quit_command_stops_the_loop() {
    let game = Game::new(
        opts(),
        SyntheticCamera::new(16, 16),
        ScriptedHand::new([Gesture::Rock], 1),
        Recorder::default(),
    );
    let events = game.events();
    events.send(Command::StartRound.into()).unwrap();
    events.send(Command::Quit.into()).unwrap();

    let session = game.run().unwrap();
    assert_eq!(*session.state(), RoundState::CountingDown(3));
}

/// A detector that takes longer than a frame interval and watches the event queue meanwhile.
struct SlowHand {
    inner: ScriptedHand,
    delay: Duration,
    events: Arc<Mutex<Option<Sender<Event>>>>,
    max_queued: Arc<Mutex<usize>>,
}

impl SlowHand {
    fn new(gesture: Gesture, delay: Duration) -> Self {
        Self {
            inner: ScriptedHand::new([gesture], 1),
            delay,
            events: Arc::default(),
            max_queued: Arc::default(),
        }
    }
}

impl HandDetector for SlowHand {
    fn detect(&mut self, frame: &Frame) -> Option<HandLandmarks> {
        thread::sleep(self.delay);
        if let Some(events) = &*self.events.lock().unwrap() {
            let mut max = self.max_queued.lock().unwrap();
            *max = (*max).max(events.len());
        }
        self.inner.detect(frame)
    }
}

#[test]
fn slow_detection_does_not_back_up_events() {
    let hand = SlowHand::new(Gesture::Scissors, Duration::from_millis(10));
    let (events, max_queued) = (hand.events.clone(), hand.max_queued.clone());
    let game = Game::new(
        opts(),
        SyntheticCamera::new(16, 16).limit(40),
        hand,
        Recorder::default(),
    );
    *events.lock().unwrap() = Some(game.events());
    game.events().send(Command::StartRound.into()).unwrap();

    let session = game.run().unwrap();

    // Only countdown ticks and commands may be waiting, never a backlog of frames.
    let max = *max_queued.lock().unwrap();
    assert!(max < 5, "{max} events queued behind a frame");
    match session.state() {
        RoundState::Resolved(entry) => assert_eq!(entry.user, Gesture::Scissors),
        other => panic!("round not resolved: {other:?}"),
    }
}

#[test]
fn quit_is_prompt_while_detection_is_slow() {
    let game = Game::new(
        opts(),
        SyntheticCamera::new(16, 16),
        SlowHand::new(Gesture::Rock, Duration::from_millis(10)),
        Recorder::default(),
    );
    let events = game.events();
    let quitter = thread::spawn(move || {
        thread::sleep(Duration::from_millis(300));
        let sent = Instant::now();
        events.send(Command::Quit.into()).unwrap();
        sent
    });

    game.run().unwrap();
    let stopped = Instant::now();
    let sent = quitter.join().unwrap();
    let latency = stopped - sent;
    assert!(latency < Duration::from_millis(200), "quit took {latency:?}");
}
