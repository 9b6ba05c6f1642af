use crate::constants::*;
use crate::gesture::Gesture;
use crate::transform::{lerp_f32, Transform};
use glam::{Quat, Vec3};

/// Star topper. Rises and grows when the tree bursts, spins slowly always.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub height: f32,
    pub scale: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl Default for Star {
    fn default() -> Self {
        Self {
            height: STAR_ASSEMBLED_Y,
            scale: STAR_ASSEMBLED_SCALE,
            yaw: 0.0,
            roll: 0.0,
        }
    }
}

impl Star {
    pub fn step(&mut self, gesture: Gesture, dt: f32, elapsed: f32) {
        let (target_y, target_scale) = if gesture.is_exploded() {
            (STAR_EXPLODED_Y, STAR_EXPLODED_SCALE)
        } else {
            (STAR_ASSEMBLED_Y, STAR_ASSEMBLED_SCALE)
        };
        let t = dt * STAR_SPEED;
        self.height = lerp_f32(self.height, target_y, t);
        self.scale = lerp_f32(self.scale, target_scale, t);
        self.yaw += dt * STAR_SPIN_RATE;
        self.roll = elapsed.sin() * STAR_WOBBLE;
    }

    pub fn transform(&self) -> Transform {
        Transform {
            translation: Vec3::new(0.0, self.height, 0.0),
            rotation: Quat::from_rotation_y(self.yaw) * Quat::from_rotation_z(self.roll),
            scale: Vec3::splat(self.scale),
        }
    }
}
