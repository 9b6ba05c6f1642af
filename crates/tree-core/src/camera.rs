//! Fixed scene camera.
//!
//! Only the eye and look-at target matter to the core: the focus point is
//! derived from them so the two can't disagree.

use crate::constants::*;
use glam::Vec3;

#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
        }
    }
}

impl Camera {
    /// World point `FOCUS_DISTANCE` units along the view direction.
    /// A degenerate camera (eye on target) looks down -Z.
    pub fn focus_point(&self) -> Vec3 {
        let forward = (self.target - self.eye).try_normalize().unwrap_or(Vec3::NEG_Z);
        self.eye + forward * FOCUS_DISTANCE
    }
}
