//! Frame-level orchestration of everything that moves.

use crate::camera::Camera;
use crate::choreographer::{Choreographer, ChoreographyParams, GroupOrientation};
use crate::constants::SNOW_COUNT;
use crate::field::{Category, ParticleField, PhotoAnchor};
use crate::focus::FocusController;
use crate::gesture::GestureReading;
use crate::pose::{Photo, PhotoPose, PoseContext};
use crate::snow::Snow;
use crate::star::Star;
use crate::transform::{InstanceRaw, Transform};
use glam::Mat4;
use rand::prelude::*;

pub struct TreeScene {
    choreographer: Choreographer,
    focus: FocusController,
    photos: Vec<Photo>,
    star: Star,
    snow: Snow,
    camera: Camera,
    photo_rng: StdRng,
    elapsed: f32,
    reading: GestureReading,
}

fn sub_rng(seed: u64, stream: u64) -> StdRng {
    StdRng::seed_from_u64(seed ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

impl TreeScene {
    /// Reproducible scene: every random draw derives from `seed`.
    pub fn new(seed: u64, params: ChoreographyParams) -> Self {
        let field = ParticleField::generate(&mut sub_rng(seed, 1));
        Self {
            choreographer: Choreographer::new(field, params),
            focus: FocusController::new(seed ^ 0x5EED_F0C5),
            photos: Vec::new(),
            star: Star::default(),
            snow: Snow::new(SNOW_COUNT, sub_rng(seed, 2)),
            camera: Camera::default(),
            photo_rng: sub_rng(seed, 3),
            elapsed: 0.0,
            reading: GestureReading::default(),
        }
    }

    pub fn from_entropy() -> Self {
        Self::new(rand::random(), ChoreographyParams::default())
    }

    /// Append a photo and draw its anchors. Returns its index.
    pub fn add_photo(&mut self, source: impl Into<String>) -> usize {
        let photo = Photo {
            source: source.into(),
            anchor: PhotoAnchor::generate(&mut self.photo_rng),
            pose: PhotoPose::default(),
        };
        log::debug!(
            "[scene] photo {} '{}' anchored at ({:.2},{:.2},{:.2})",
            self.photos.len(),
            photo.source,
            photo.anchor.assembled.x,
            photo.anchor.assembled.y,
            photo.anchor.assembled.z
        );
        self.photos.push(photo);
        self.photos.len() - 1
    }

    /// Advance one frame. Negative or non-finite `dt` counts as zero.
    pub fn step(&mut self, reading: GestureReading, dt: f32) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.elapsed += dt;
        self.reading = reading;

        let focused = self.focus.update(reading.gesture, self.photos.len());
        self.choreographer.step(&reading, dt, self.elapsed);

        let ctx = PoseContext {
            gesture: reading.gesture,
            group: self.choreographer.group(),
            dt,
            elapsed: self.elapsed,
            focus_world: self.camera.focus_point(),
            params: self.choreographer.params,
        };
        for (i, photo) in self.photos.iter_mut().enumerate() {
            photo.pose.step(&photo.anchor, focused == Some(i), &ctx);
        }

        self.star.step(reading.gesture, dt, self.elapsed);
        self.snow.step(dt, self.elapsed);
    }

    pub fn reading(&self) -> GestureReading {
        self.reading
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn focused(&self) -> Option<usize> {
        self.focus.focused()
    }

    pub fn group(&self) -> GroupOrientation {
        self.choreographer.group()
    }

    /// Model matrix of the rotating ensemble (particles, photos, star).
    pub fn group_matrix(&self) -> Mat4 {
        Mat4::from_quat(self.choreographer.group().rotation())
    }

    pub fn field(&self) -> &ParticleField {
        self.choreographer.field()
    }

    pub fn choreographer(&self) -> &Choreographer {
        &self.choreographer
    }

    pub fn particle_transforms(&self, category: Category) -> &[Transform] {
        self.choreographer.transforms(category)
    }

    pub fn write_instances(&self, category: Category, out: &mut Vec<InstanceRaw>) {
        self.choreographer.write_instances(category, out);
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn photo_transforms(&self) -> impl Iterator<Item = Transform> + '_ {
        self.photos.iter().map(|p| p.pose.transform())
    }

    pub fn star(&self) -> &Star {
        &self.star
    }

    pub fn snow(&self) -> &Snow {
        &self.snow
    }
}
