//! Photo panel poses.
//!
//! A focused photo must sit at a fixed world position in front of the camera
//! and face it, while its parent group keeps rotating. With the parent rotation
//! `P` and the desired world transform `(p_w, identity)`, the required local
//! transform is `(P⁻¹ · p_w, P⁻¹)`, so that `P · local = world`. The inverse of
//! the XYZ Euler group rotation is composed in [`euler_xyz_inverse`].

use crate::choreographer::{ChoreographyParams, GroupOrientation};
use crate::constants::*;
use crate::field::PhotoAnchor;
use crate::gesture::Gesture;
use crate::transform::{euler_xyz_inverse, lerp_f32, Transform};
use glam::{Mat3, Quat, Vec3};
use std::f32::consts::PI;

/// Local position and orientation that place a photo at `world` facing the
/// camera under the parent rotation `group`.
pub fn focus_local_target(group: GroupOrientation, world: Vec3) -> (Vec3, Quat) {
    let inverse = euler_xyz_inverse(group.euler());
    (inverse * world, inverse)
}

/// Orientation whose local +Z points from `from` toward `target`.
pub fn look_toward(from: Vec3, target: Vec3) -> Quat {
    let forward = (target - from).try_normalize().unwrap_or(Vec3::Z);
    let right = Vec3::Y.cross(forward).try_normalize().unwrap_or(Vec3::X);
    let up = forward.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, up, forward))
}

/// "Tree" orientation: face outward from the trunk, then the fixed tilt, then
/// a slow roll sway phased by height.
pub fn tree_orientation(anchor: &PhotoAnchor, elapsed: f32) -> Quat {
    let pos = anchor.assembled;
    let sway = (elapsed + pos.y).sin() * PHOTO_SWAY_AMPLITUDE;
    look_toward(pos, Vec3::new(0.0, pos.y, 0.0))
        * Quat::from_rotation_y(PI)
        * Quat::from_rotation_x(anchor.tilt_x)
        * Quat::from_rotation_z(anchor.tilt_z)
        * Quat::from_rotation_z(sway)
}

/// Mutable pose of one photo panel. Starts at the trunk with unit scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhotoPose {
    pub position: Vec3,
    pub orientation: Quat,
    pub scale: f32,
}

impl Default for PhotoPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            scale: PHOTO_INITIAL_SCALE,
        }
    }
}

/// Per-frame inputs shared by every photo.
#[derive(Clone, Copy, Debug)]
pub struct PoseContext {
    pub gesture: Gesture,
    pub group: GroupOrientation,
    pub dt: f32,
    pub elapsed: f32,
    /// Where a focused photo should end up, in world space.
    pub focus_world: Vec3,
    /// Same rates the particles use, so photos move with the ensemble.
    pub params: ChoreographyParams,
}

impl PhotoPose {
    pub fn step(&mut self, anchor: &PhotoAnchor, focused: bool, ctx: &PoseContext) {
        let params = &ctx.params;
        let tumble = ctx.dt * params.tumble_rate;
        let tumble_step = Quat::from_rotation_x(tumble) * Quat::from_rotation_y(tumble);

        let (target_pos, target_scale, speed, target_rot) = if focused {
            let (pos, rot) = focus_local_target(ctx.group, ctx.focus_world);
            (pos, PHOTO_FOCUS_SCALE, params.focus_speed, rot)
        } else if ctx.gesture.is_exploded() {
            // Both exploded gestures use the burst speed for photos.
            (
                anchor.exploded,
                PHOTO_SCALE,
                params.explode_speed,
                self.orientation * tumble_step,
            )
        } else {
            (
                anchor.assembled,
                PHOTO_SCALE,
                params.assemble_speed,
                tree_orientation(anchor, ctx.elapsed),
            )
        };

        let t = ctx.dt * speed;
        self.position = self.position.lerp(target_pos, t);
        self.scale = lerp_f32(self.scale, target_scale, t);

        if ctx.gesture == Gesture::OpenHand && !focused {
            // Free tumble rather than chasing a target redefined every frame.
            self.orientation = (self.orientation * tumble_step).normalize();
        } else {
            self.orientation = self.orientation.slerp(target_rot, t).normalize();
        }
    }

    pub fn transform(&self) -> Transform {
        Transform {
            translation: self.position,
            rotation: self.orientation,
            scale: Vec3::splat(self.scale),
        }
    }
}

/// One user photo: an opaque source handle plus its fixed anchors and pose.
#[derive(Clone, Debug)]
pub struct Photo {
    pub source: String,
    pub anchor: PhotoAnchor,
    pub pose: PhotoPose,
}
