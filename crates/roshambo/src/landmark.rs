//! Hand landmarks as produced by a 21-point hand pose estimator.

use std::fmt;

type Position = [f32; 3];

/// Number of landmarks in a [`HandLandmarks`] set.
pub const NUM_LANDMARKS: usize = 21;

/// A landmark in 3D space, in normalized image coordinates.
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy, Default)]
pub struct Landmark {
    pos: Position,
}

impl Landmark {
    pub fn new(position: Position) -> Self {
        Self { pos: position }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos[0]
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos[1]
    }
}

/// The full set of landmarks describing one detected hand.
///
/// Positions are normalized to the input frame: `x` and `y` lie in `[0, 1]` with `y` pointing
/// down, `z` is the depth relative to the wrist.
#[derive(Clone, PartialEq)]
pub struct HandLandmarks {
    positions: [Position; NUM_LANDMARKS],
}

impl HandLandmarks {
    /// Creates a landmark set from positions ordered by [`LandmarkIdx`].
    pub fn new(positions: [Position; NUM_LANDMARKS]) -> Self {
        Self { positions }
    }

    pub fn get(&self, idx: LandmarkIdx) -> Landmark {
        Landmark::new(self.positions[idx as usize])
    }
}

impl fmt::Debug for HandLandmarks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                LandmarkIdx::ALL
                    .iter()
                    .map(|idx| (idx, self.positions[*idx as usize])),
            )
            .finish()
    }
}

/// Names for the hand pose landmarks.
///
/// # Terminology
///
/// - **CMC**: [Carpometacarpal joint], the lowest joint of the thumb, located near the wrist.
/// - **MCP**: [Metacarpophalangeal joint], the lower joint forming the knuckles near the palm of
///   the hand.
/// - **IP**: Interphalangeal joint of the thumb, between its MCP and its tip.
/// - **PIP**: Proximal Interphalangeal joint, the joint between the MCP and DIP.
/// - **DIP**: Distal Interphalangeal joint, the highest joint of a finger.
/// - **Tip**: This landmark is just placed on the tip of the finger, above the DIP.
///
/// [Carpometacarpal joint]: https://en.wikipedia.org/wiki/Carpometacarpal_joint
/// [Metacarpophalangeal joint]: https://en.wikipedia.org/wiki/Metacarpophalangeal_joint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LandmarkIdx {
    Wrist,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexFingerMcp,
    IndexFingerPip,
    IndexFingerDip,
    IndexFingerTip,
    MiddleFingerMcp,
    MiddleFingerPip,
    MiddleFingerDip,
    MiddleFingerTip,
    RingFingerMcp,
    RingFingerPip,
    RingFingerDip,
    RingFingerTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}

impl LandmarkIdx {
    pub const ALL: [LandmarkIdx; NUM_LANDMARKS] = {
        use LandmarkIdx::*;
        [
            Wrist,
            ThumbCmc,
            ThumbMcp,
            ThumbIp,
            ThumbTip,
            IndexFingerMcp,
            IndexFingerPip,
            IndexFingerDip,
            IndexFingerTip,
            MiddleFingerMcp,
            MiddleFingerPip,
            MiddleFingerDip,
            MiddleFingerTip,
            RingFingerMcp,
            RingFingerPip,
            RingFingerDip,
            RingFingerTip,
            PinkyMcp,
            PinkyPip,
            PinkyDip,
            PinkyTip,
        ]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_match_order() {
        for (i, idx) in LandmarkIdx::ALL.iter().enumerate() {
            assert_eq!(*idx as usize, i);
        }
    }

    #[test]
    fn get_reads_by_name() {
        let mut positions = [[0.5, 0.5, 0.0]; NUM_LANDMARKS];
        positions[LandmarkIdx::PinkyTip as usize] = [0.25, 0.75, -0.5];
        let hand = HandLandmarks::new(positions);

        let tip = hand.get(LandmarkIdx::PinkyTip);
        assert_eq!((tip.x(), tip.y()), (0.25, 0.75));
        assert_eq!(hand.get(LandmarkIdx::Wrist), Landmark::new([0.5, 0.5, 0.0]));
    }
}
