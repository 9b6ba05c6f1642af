//! Normalized 21-joint hand skeleton as delivered by a landmark detector.
//!
//! Coordinates are image-normalized: `x` grows to the right and `y` grows
//! downward, both nominally in \[0, 1\]. Detectors may report joints slightly
//! outside that range near the frame edges, so only non-finite values are
//! rejected.

use glam::Vec2;
use thiserror::Error;

pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

#[derive(Debug, Error, PartialEq)]
pub enum LandmarkError {
    #[error("expected 21 landmarks, got {0}")]
    WrongCount(usize),
    #[error("landmark {index} has a non-finite coordinate")]
    NonFinite { index: usize },
}

/// One frame's hand skeleton. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct LandmarkSet {
    points: [Vec2; LANDMARK_COUNT],
}

impl LandmarkSet {
    pub fn from_points(points: &[Vec2]) -> Result<Self, LandmarkError> {
        if points.len() != LANDMARK_COUNT {
            return Err(LandmarkError::WrongCount(points.len()));
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(LandmarkError::NonFinite { index });
        }
        let mut out = [Vec2::ZERO; LANDMARK_COUNT];
        out.copy_from_slice(points);
        Ok(Self { points: out })
    }

    #[inline]
    pub fn point(&self, index: usize) -> Vec2 {
        self.points[index]
    }

    /// Planar distance from a joint to the wrist.
    #[inline]
    pub fn wrist_distance(&self, index: usize) -> f32 {
        self.points[index].distance(self.points[WRIST])
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }
}

// Joint offsets along a digit's direction, measured from the wrist.
const FINGER_STRAIGHT: [f32; 4] = [0.10, 0.14, 0.18, 0.22];
const FINGER_CURLED: [f32; 4] = [0.10, 0.14, 0.12, 0.10];
const THUMB_STRAIGHT: [f32; 4] = [0.04, 0.08, 0.12, 0.16];
const THUMB_CURLED: [f32; 4] = [0.04, 0.08, 0.075, 0.07];

/// Build a plausible upright hand whose middle-finger MCP sits at `palm`.
///
/// `extended` is ordered thumb, index, middle, ring, pinky. Curled digits fold
/// their last two joints back toward the wrist so the tip ends up closer to
/// the wrist than the PIP (or MCP for the thumb).
pub fn synthetic_hand(extended: [bool; 5], palm: Vec2) -> LandmarkSet {
    let wrist = palm + Vec2::new(0.0, FINGER_STRAIGHT[0]);
    let directions = [
        Vec2::new(-0.8, -0.6),
        Vec2::new(-0.25, -1.0),
        Vec2::new(0.0, -1.0),
        Vec2::new(0.2, -1.0),
        Vec2::new(0.4, -1.0),
    ];
    let mut points = [Vec2::ZERO; LANDMARK_COUNT];
    points[WRIST] = wrist;
    for (digit, dir) in directions.iter().enumerate() {
        let dir = dir.normalize();
        let offsets = match (digit, extended[digit]) {
            (0, true) => THUMB_STRAIGHT,
            (0, false) => THUMB_CURLED,
            (_, true) => FINGER_STRAIGHT,
            (_, false) => FINGER_CURLED,
        };
        let first = 1 + digit * 4;
        for (k, off) in offsets.iter().enumerate() {
            points[first + k] = wrist + dir * *off;
        }
    }
    LandmarkSet { points }
}
