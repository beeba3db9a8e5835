//! Hand gesture classification.

use std::fmt;

use crate::landmark::{HandLandmarks, LandmarkIdx};

/// A classified hand shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    Rock,
    Paper,
    Scissors,
    /// A hand was detected, but its finger pattern matches none of the playable gestures.
    Unknown,
    /// No hand was detected.
    None,
}

impl Gesture {
    /// The gestures that can actually be played.
    pub const PLAYABLE: [Gesture; 3] = [Gesture::Rock, Gesture::Paper, Gesture::Scissors];

    /// Classifies the result of a hand detection, mapping "no hand" to [`Gesture::None`].
    pub fn detect(hand: Option<&HandLandmarks>) -> Self {
        match hand {
            Some(hand) => classify(hand),
            None => Gesture::None,
        }
    }

    /// Returns whether `self` wins against `other` under the usual cyclic rules.
    ///
    /// Only ever `true` when both gestures are playable.
    pub fn beats(self, other: Gesture) -> bool {
        matches!(
            (self, other),
            (Gesture::Rock, Gesture::Scissors)
                | (Gesture::Paper, Gesture::Rock)
                | (Gesture::Scissors, Gesture::Paper)
        )
    }

    pub fn is_playable(self) -> bool {
        Self::PLAYABLE.contains(&self)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Gesture::Rock => "Rock",
            Gesture::Paper => "Paper",
            Gesture::Scissors => "Scissors",
            Gesture::Unknown => "Unknown",
            Gesture::None => "None",
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extension state of every finger of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FingerStates {
    /// Whether the thumb sticks out sideways.
    ///
    /// This compares the horizontal positions of the thumb tip and the joint below it, so it is
    /// only meaningful for one handedness (a right hand in a mirrored view). It does not take part
    /// in [`classify`].
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerStates {
    /// Determines which fingers of `hand` are extended.
    ///
    /// A finger counts as extended when its tip is above (has a smaller Y coordinate than) its PIP
    /// joint.
    pub fn of(hand: &HandLandmarks) -> Self {
        use LandmarkIdx::*;

        let up = |tip: LandmarkIdx, pip: LandmarkIdx| hand.get(tip).y() < hand.get(pip).y();

        Self {
            thumb: hand.get(ThumbTip).x() < hand.get(ThumbIp).x(),
            index: up(IndexFingerTip, IndexFingerPip),
            middle: up(MiddleFingerTip, MiddleFingerPip),
            ring: up(RingFingerTip, RingFingerPip),
            pinky: up(PinkyTip, PinkyPip),
        }
    }

    /// Maps the four non-thumb fingers to a gesture.
    pub fn gesture(&self) -> Gesture {
        match (self.index, self.middle, self.ring, self.pinky) {
            (false, false, false, false) => Gesture::Rock,
            (true, true, false, false) => Gesture::Scissors,
            (true, true, true, true) => Gesture::Paper,
            _ => Gesture::Unknown,
        }
    }
}

/// Classifies a detected hand into [`Gesture::Rock`], [`Gesture::Paper`],
/// [`Gesture::Scissors`] or [`Gesture::Unknown`].
///
/// Never returns [`Gesture::None`]; use [`Gesture::detect`] when the hand may be absent.
pub fn classify(hand: &HandLandmarks) -> Gesture {
    FingerStates::of(hand).gesture()
}

#[cfg(test)]
mod tests {
    use crate::pose::HandPose;

    use super::*;

    fn pose(index: bool, middle: bool, ring: bool, pinky: bool) -> HandLandmarks {
        HandPose::new()
            .index(index)
            .middle(middle)
            .ring(ring)
            .pinky(pinky)
            .build()
    }

    #[test]
    fn decision_table() {
        assert_eq!(classify(&pose(false, false, false, false)), Gesture::Rock);
        assert_eq!(classify(&pose(true, true, false, false)), Gesture::Scissors);
        assert_eq!(classify(&pose(true, true, true, true)), Gesture::Paper);
        assert_eq!(classify(&pose(true, false, false, false)), Gesture::Unknown);
    }

    #[test]
    fn every_pattern_is_classified() {
        for bits in 0..16u8 {
            let fingers = [bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0];
            let hand = pose(fingers[0], fingers[1], fingers[2], fingers[3]);
            let gesture = classify(&hand);
            assert_ne!(gesture, Gesture::None);
            assert_eq!(classify(&hand), gesture, "classification must be stable");

            let expected = match fingers {
                [false, false, false, false] => Gesture::Rock,
                [true, true, false, false] => Gesture::Scissors,
                [true, true, true, true] => Gesture::Paper,
                _ => Gesture::Unknown,
            };
            assert_eq!(gesture, expected, "fingers {fingers:?}");
        }
    }

    #[test]
    fn thumb_does_not_affect_gesture() {
        for thumb in [false, true] {
            let hand = HandPose::new().thumb(thumb).build();
            assert_eq!(FingerStates::of(&hand).thumb, thumb);
            assert_eq!(classify(&hand), Gesture::Rock);

            let hand = HandPose::from_gesture(Gesture::Paper).thumb(thumb).build();
            assert_eq!(FingerStates::of(&hand).thumb, thumb);
            assert_eq!(classify(&hand), Gesture::Paper);
        }
    }

    #[test]
    fn no_hand_is_none() {
        assert_eq!(Gesture::detect(None), Gesture::None);
        let hand = HandPose::from_gesture(Gesture::Scissors).build();
        assert_eq!(Gesture::detect(Some(&hand)), Gesture::Scissors);
    }

    #[test]
    fn beats_is_cyclic() {
        for a in Gesture::PLAYABLE {
            assert!(!a.beats(a));
            let wins = Gesture::PLAYABLE.iter().filter(|b| a.beats(**b)).count();
            assert_eq!(wins, 1);
        }
        assert!(!Gesture::Unknown.beats(Gesture::Rock));
        assert!(!Gesture::Rock.beats(Gesture::Unknown));
    }
}
