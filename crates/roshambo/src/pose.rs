//! Synthetic hand poses.
//!
//! Builds plausible landmark sets of an upright right hand (as seen in a mirrored camera view)
//! with a chosen set of extended fingers. Used by the scripted detector in [`crate::video`] and
//! throughout the tests.

use crate::gesture::Gesture;
use crate::landmark::{HandLandmarks, LandmarkIdx, NUM_LANDMARKS};

/// Wrist position of a pose built without calling [`HandPose::at`].
const DEFAULT_WRIST: [f32; 2] = [0.5, 0.8];

/// Horizontal offset of each finger's column from the wrist.
const FINGER_COLUMNS: [f32; 4] = [-0.06, -0.01, 0.04, 0.09];

/// Y offsets from the wrist of MCP, PIP, DIP and tip for an extended finger.
const EXTENDED: [f32; 4] = [-0.25, -0.35, -0.42, -0.48];

/// Y offsets from the wrist of MCP, PIP, DIP and tip for a finger curled into the palm.
const CURLED: [f32; 4] = [-0.25, -0.32, -0.27, -0.22];

/// Builder for a synthetic [`HandLandmarks`] set.
#[derive(Debug, Clone, Copy)]
pub struct HandPose {
    wrist: [f32; 2],
    thumb: bool,
    fingers: [bool; 4],
}

impl Default for HandPose {
    fn default() -> Self {
        Self::new()
    }
}

impl HandPose {
    /// Starts with a closed fist (every finger curled).
    pub fn new() -> Self {
        Self {
            wrist: DEFAULT_WRIST,
            thumb: false,
            fingers: [false; 4],
        }
    }

    /// Returns a pose that [`classify`] maps to `gesture`.
    ///
    /// [`Gesture::Unknown`] yields a pointing index finger. [`Gesture::None`] has no hand, so it
    /// is treated the same way; use [`hand_for`] when the absence of a hand matters.
    ///
    /// [`classify`]: crate::gesture::classify
    pub fn from_gesture(gesture: Gesture) -> Self {
        let fingers = match gesture {
            Gesture::Rock => [false, false, false, false],
            Gesture::Paper => [true, true, true, true],
            Gesture::Scissors => [true, true, false, false],
            Gesture::Unknown | Gesture::None => [true, false, false, false],
        };
        Self {
            thumb: gesture == Gesture::Paper,
            fingers,
            ..Self::new()
        }
    }

    /// Moves the wrist to `(x, y)`, keeping the shape of the hand.
    pub fn at(self, x: f32, y: f32) -> Self {
        Self {
            wrist: [x, y],
            ..self
        }
    }

    pub fn thumb(self, extended: bool) -> Self {
        Self {
            thumb: extended,
            ..self
        }
    }

    pub fn index(self, extended: bool) -> Self {
        self.finger(0, extended)
    }

    pub fn middle(self, extended: bool) -> Self {
        self.finger(1, extended)
    }

    pub fn ring(self, extended: bool) -> Self {
        self.finger(2, extended)
    }

    pub fn pinky(self, extended: bool) -> Self {
        self.finger(3, extended)
    }

    fn finger(mut self, finger: usize, extended: bool) -> Self {
        self.fingers[finger] = extended;
        self
    }

    pub fn build(&self) -> HandLandmarks {
        use LandmarkIdx::*;

        let [wx, wy] = self.wrist;
        let mut positions = [[0.0; 3]; NUM_LANDMARKS];
        let mut set = |idx: LandmarkIdx, dx: f32, dy: f32| {
            positions[idx as usize] = [wx + dx, wy + dy, 0.0];
        };

        set(Wrist, 0.0, 0.0);

        // The thumb points outwards (towards smaller X) when extended and tucks in across the
        // palm otherwise.
        set(ThumbCmc, -0.06, -0.08);
        set(ThumbMcp, -0.10, -0.14);
        set(ThumbIp, -0.13, -0.18);
        if self.thumb {
            set(ThumbTip, -0.17, -0.20);
        } else {
            set(ThumbTip, -0.07, -0.20);
        }

        let joints = [
            [IndexFingerMcp, IndexFingerPip, IndexFingerDip, IndexFingerTip],
            [MiddleFingerMcp, MiddleFingerPip, MiddleFingerDip, MiddleFingerTip],
            [RingFingerMcp, RingFingerPip, RingFingerDip, RingFingerTip],
            [PinkyMcp, PinkyPip, PinkyDip, PinkyTip],
        ];
        for ((joints, column), extended) in joints.iter().zip(FINGER_COLUMNS).zip(self.fingers) {
            let offsets = if extended { EXTENDED } else { CURLED };
            for (joint, dy) in joints.iter().zip(offsets) {
                set(*joint, column, dy);
            }
        }

        HandLandmarks::new(positions)
    }
}

/// Returns the landmarks of a hand showing `gesture`, or [`None`] for [`Gesture::None`].
pub fn hand_for(gesture: Gesture) -> Option<HandLandmarks> {
    match gesture {
        Gesture::None => None,
        gesture => Some(HandPose::from_gesture(gesture).build()),
    }
}
