use crate::constants::*;
use crate::landmarks::*;
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Gesture {
    #[default]
    None,
    Fist,
    OpenHand,
    Pointing,
    Moving,
}

impl Gesture {
    /// Gestures that spread the ensemble out onto the exploded shell.
    #[inline]
    pub fn is_exploded(self) -> bool {
        matches!(self, Gesture::OpenHand | Gesture::Moving)
    }

    pub fn label(self) -> &'static str {
        match self {
            Gesture::None => "none",
            Gesture::Fist => "fist",
            Gesture::OpenHand => "open_hand",
            Gesture::Pointing => "pointing",
            Gesture::Moving => "moving",
        }
    }
}

/// Classified gesture plus the hand's proxy location (middle-finger MCP).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureReading {
    pub gesture: Gesture,
    pub reference: Vec2,
}

impl Default for GestureReading {
    fn default() -> Self {
        Self {
            gesture: Gesture::None,
            reference: Vec2::from(NO_HAND_REFERENCE),
        }
    }
}

/// Per-digit extension flags, ordered thumb, index, middle, ring, pinky.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DigitStates {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl DigitStates {
    pub fn measure(hand: &LandmarkSet) -> Self {
        let finger = |tip: usize, pip: usize| {
            hand.wrist_distance(tip) > hand.wrist_distance(pip) * FINGER_EXTENDED_RATIO
        };
        Self {
            // The thumb's MCP sits close to the wrist, so it gets a looser ratio.
            thumb: hand.wrist_distance(THUMB_TIP)
                > hand.wrist_distance(THUMB_MCP) * THUMB_EXTENDED_RATIO,
            index: finger(INDEX_TIP, INDEX_PIP),
            middle: finger(MIDDLE_TIP, MIDDLE_PIP),
            ring: finger(RING_TIP, RING_PIP),
            pinky: finger(PINKY_TIP, PINKY_PIP),
        }
    }

    pub fn extended_count(&self) -> usize {
        [self.thumb, self.index, self.middle, self.ring, self.pinky]
            .iter()
            .filter(|e| **e)
            .count()
    }

    /// First match wins: pointing, open hand, fist, otherwise moving.
    pub fn gesture(&self) -> Gesture {
        if self.index && !self.middle && !self.ring && !self.pinky {
            return Gesture::Pointing;
        }
        match self.extended_count() {
            n if n >= OPEN_HAND_MIN_EXTENDED => Gesture::OpenHand,
            n if n <= FIST_MAX_EXTENDED => Gesture::Fist,
            _ => Gesture::Moving,
        }
    }
}

/// Stateless per-frame classification. An absent hand reads as `None` at the
/// frame centre.
pub fn classify(hand: Option<&LandmarkSet>) -> GestureReading {
    match hand {
        None => GestureReading::default(),
        Some(hand) => GestureReading {
            gesture: DigitStates::measure(hand).gesture(),
            reference: hand.point(MIDDLE_MCP),
        },
    }
}
