//! Camera frames and hand detection.
//!
//! Both the video source and the hand landmark estimator are external to the game. They are
//! consumed through the [`FrameSource`] and [`HandDetector`] traits. This module also provides
//! [`SyntheticCamera`] and [`ScriptedHand`], which stand in for a real camera and landmark model.

use std::time::Duration;

use image::{imageops, Rgb, RgbImage};

use crate::gesture::Gesture;
use crate::landmark::HandLandmarks;
use crate::pose::HandPose;

/// A single camera image.
pub type Frame = RgbImage;

/// Supplies camera frames.
pub trait FrameSource {
    /// Reads the next frame.
    ///
    /// Returns `Ok(None)` when the stream has ended. Errors are treated as transient: the caller
    /// skips the frame and tries again on the next frame tick.
    fn read(&mut self) -> anyhow::Result<Option<Frame>>;
}

/// Finds a hand in a frame and estimates its landmarks.
pub trait HandDetector {
    /// Returns the landmarks of the most prominent hand in `frame`, or [`None`] if there is none.
    fn detect(&mut self, frame: &Frame) -> Option<HandLandmarks>;
}

impl<F: FrameSource + ?Sized> FrameSource for Box<F> {
    fn read(&mut self) -> anyhow::Result<Option<Frame>> {
        (**self).read()
    }
}

impl<D: HandDetector + ?Sized> HandDetector for Box<D> {
    fn detect(&mut self, frame: &Frame) -> Option<HandLandmarks> {
        (**self).detect(frame)
    }
}

/// Mirrors a frame so that the player sees themselves like in a mirror.
pub fn mirror(frame: &mut Frame) {
    imageops::flip_horizontal_in_place(frame);
}

/// A camera that produces uniformly colored frames.
pub struct SyntheticCamera {
    width: u32,
    height: u32,
    frames: u64,
    limit: Option<u64>,
}

impl SyntheticCamera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            frames: 0,
            limit: None,
        }
    }

    /// Ends the stream after `limit` frames.
    pub fn limit(self, limit: u64) -> Self {
        Self {
            limit: Some(limit),
            ..self
        }
    }
}

impl FrameSource for SyntheticCamera {
    fn read(&mut self) -> anyhow::Result<Option<Frame>> {
        if self.limit.map_or(false, |limit| self.frames >= limit) {
            return Ok(None);
        }
        self.frames += 1;

        // Slowly cycle the brightness so consecutive frames differ.
        let level = (self.frames % 256) as u8;
        Ok(Some(RgbImage::from_pixel(
            self.width,
            self.height,
            Rgb([level, level, level]),
        )))
    }
}

/// A fake hand detector that plays back a fixed sequence of gestures.
///
/// Each gesture is held for a number of frames before moving on to the next one. The sequence
/// repeats forever. [`Gesture::None`] entries produce frames without a hand.
pub struct ScriptedHand {
    script: Vec<Gesture>,
    hold: u32,
    frame: u64,
}

impl ScriptedHand {
    /// Creates a detector that shows each gesture in `script` for `hold` consecutive frames.
    ///
    /// # Panics
    ///
    /// Panics if `script` is empty or `hold` is 0.
    pub fn new(script: impl Into<Vec<Gesture>>, hold: u32) -> Self {
        let script = script.into();
        assert!(!script.is_empty(), "empty gesture script");
        assert!(hold > 0, "gestures must be held for at least one frame");
        Self {
            script,
            hold,
            frame: 0,
        }
    }

    /// Creates a detector that holds each gesture for `hold`, given frames arriving every
    /// `frame_interval`.
    pub fn with_timing(
        script: impl Into<Vec<Gesture>>,
        hold: Duration,
        frame_interval: Duration,
    ) -> Self {
        let frames = hold.as_nanos() / frame_interval.as_nanos().max(1);
        Self::new(script, frames.clamp(1, u32::MAX as u128) as u32)
    }

    /// The gesture that will be shown in the next frame.
    pub fn current(&self) -> Gesture {
        let step = (self.frame / u64::from(self.hold)) as usize;
        self.script[step % self.script.len()]
    }
}

impl HandDetector for ScriptedHand {
    fn detect(&mut self, _frame: &Frame) -> Option<HandLandmarks> {
        let gesture = self.current();
        self.frame += 1;

        if gesture == Gesture::None {
            return None;
        }

        // Wander around a bit so that the landmarks aren't identical every frame.
        let wobble = ((self.frame % 20) as f32 - 10.0) * 0.002;
        Some(
            HandPose::from_gesture(gesture)
                .at(0.5 + wobble, 0.8)
                .build(),
        )
    }
}
