//! Per-frame particle motion.
//!
//! The gesture picks a target set and a speed every frame; there is no hidden
//! transition state. Current positions and tumble angles live in flat,
//! pre-sized per-category buffers indexed by particle slot.

use crate::constants::*;
use crate::field::{Category, CategoryField, ParticleField};
use crate::gesture::{Gesture, GestureReading};
use crate::transform::{euler_xyz, euler_xyz_inverse, lerp_f32, InstanceRaw, Transform};
use glam::{Quat, Vec3};
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetSelector {
    Assembled,
    Exploded,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub target: TargetSelector,
    pub speed: f32,
}

/// Runtime-adjustable rates. Defaults match the tuned visuals.
#[derive(Clone, Copy, Debug)]
pub struct ChoreographyParams {
    pub assemble_speed: f32,
    pub explode_speed: f32,
    pub drift_speed: f32,
    pub focus_speed: f32,
    pub tumble_rate: f32,
    pub hand_rotation_gain: f32,
    pub hand_track_rate: f32,
    pub auto_yaw_rate: f32,
    pub pitch_relax_rate: f32,
}

impl Default for ChoreographyParams {
    fn default() -> Self {
        Self {
            assemble_speed: ASSEMBLE_SPEED,
            explode_speed: EXPLODE_SPEED,
            drift_speed: DRIFT_SPEED,
            focus_speed: FOCUS_SPEED,
            tumble_rate: PARTICLE_TUMBLE_RATE,
            hand_rotation_gain: HAND_ROTATION_GAIN,
            hand_track_rate: HAND_TRACK_RATE,
            auto_yaw_rate: AUTO_YAW_RATE,
            pitch_relax_rate: PITCH_RELAX_RATE,
        }
    }
}

impl ChoreographyParams {
    pub fn motion(&self, gesture: Gesture) -> Motion {
        match gesture {
            Gesture::None | Gesture::Fist | Gesture::Pointing => Motion {
                target: TargetSelector::Assembled,
                speed: self.assemble_speed,
            },
            Gesture::OpenHand => Motion {
                target: TargetSelector::Exploded,
                speed: self.explode_speed,
            },
            Gesture::Moving => Motion {
                target: TargetSelector::Exploded,
                speed: self.drift_speed,
            },
        }
    }
}

/// Gesture → (target, speed) with the default rates.
#[inline]
pub fn motion_for(gesture: Gesture) -> Motion {
    ChoreographyParams::default().motion(gesture)
}

/// Shared rotation of the whole ensemble. Roll is always zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GroupOrientation {
    pub pitch: f32,
    pub yaw: f32,
}

impl GroupOrientation {
    #[inline]
    pub fn euler(&self) -> Vec3 {
        Vec3::new(self.pitch, self.yaw, 0.0)
    }

    #[inline]
    pub fn rotation(&self) -> Quat {
        euler_xyz(self.euler())
    }

    #[inline]
    pub fn inverse(&self) -> Quat {
        euler_xyz_inverse(self.euler())
    }

    pub fn update(&mut self, reading: &GestureReading, dt: f32, params: &ChoreographyParams) {
        match reading.gesture {
            // Frozen so a focused photo doesn't drift.
            Gesture::Pointing => {}
            g if g.is_exploded() => {
                let target_pitch = (reading.reference.y - 0.5) * params.hand_rotation_gain;
                let target_yaw = (reading.reference.x - 0.5) * params.hand_rotation_gain;
                let t = dt * params.hand_track_rate;
                self.pitch = lerp_f32(self.pitch, target_pitch, t);
                self.yaw = lerp_f32(self.yaw, target_yaw, t);
            }
            _ => {
                self.yaw += dt * params.auto_yaw_rate;
                self.pitch = lerp_f32(self.pitch, 0.0, dt * params.pitch_relax_rate);
            }
        }
    }
}

/// Mutable per-slot buffers for one category.
#[derive(Clone, Debug)]
struct CategoryState {
    current: Vec<Vec3>,
    spin: Vec<Vec3>,
    transforms: Vec<Transform>,
}

impl CategoryState {
    fn new(field: &CategoryField) -> Self {
        let transforms = (0..field.len())
            .map(|i| Transform {
                translation: field.assembled[i],
                rotation: euler_xyz(Vec3::splat(i as f32)),
                scale: field.scales.get(i),
            })
            .collect();
        Self {
            current: field.assembled.clone(),
            spin: vec![Vec3::ZERO; field.len()],
            transforms,
        }
    }
}

pub struct Choreographer {
    pub params: ChoreographyParams,
    field: ParticleField,
    states: Vec<CategoryState>,
    group: GroupOrientation,
}

impl Choreographer {
    pub fn new(field: ParticleField, params: ChoreographyParams) -> Self {
        let states = field.categories.iter().map(CategoryState::new).collect();
        Self {
            params,
            field,
            states,
            group: GroupOrientation::default(),
        }
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn group(&self) -> GroupOrientation {
        self.group
    }

    fn slot(&self, category: Category) -> Option<usize> {
        self.field
            .categories
            .iter()
            .position(|c| c.category == category)
    }

    pub fn current_positions(&self, category: Category) -> &[Vec3] {
        match self.slot(category) {
            Some(i) => &self.states[i].current,
            None => &[],
        }
    }

    pub fn transforms(&self, category: Category) -> &[Transform] {
        match self.slot(category) {
            Some(i) => &self.states[i].transforms,
            None => &[],
        }
    }

    /// Advance the group orientation and every particle by `dt` seconds.
    pub fn step(&mut self, reading: &GestureReading, dt: f32, elapsed: f32) {
        self.group.update(reading, dt, &self.params);

        let motion = self.params.motion(reading.gesture);
        let tumbling = reading.gesture == Gesture::OpenHand;
        let t = dt * motion.speed;
        let spin_step = dt * self.params.tumble_rate;

        for (field, state) in self.field.categories.iter().zip(self.states.iter_mut()) {
            let targets = match motion.target {
                TargetSelector::Assembled => &field.assembled,
                TargetSelector::Exploded => &field.exploded,
            };
            for i in 0..field.len() {
                let pos = state.current[i].lerp(targets[i], t);
                state.current[i] = pos;

                let idx = i as f32;
                let (translation, angles) = if tumbling {
                    let spin = &mut state.spin[i];
                    spin.x = (spin.x + spin_step).rem_euclid(TAU);
                    spin.z = (spin.z + spin_step).rem_euclid(TAU);
                    let bob = (elapsed * BOB_FREQUENCY + idx).sin() * BOB_AMPLITUDE;
                    (pos + Vec3::Y * bob, Vec3::splat(idx) + *spin)
                } else {
                    // Index-derived static orientation, purely for variety.
                    (pos, Vec3::splat(idx))
                };
                state.transforms[i] = Transform {
                    translation,
                    rotation: euler_xyz(angles),
                    scale: field.scales.get(i),
                };
            }
        }
    }

    /// Append GPU instance records for `category` to `out`.
    pub fn write_instances(&self, category: Category, out: &mut Vec<InstanceRaw>) {
        let Some(slot) = self.slot(category) else {
            return;
        };
        let field = &self.field.categories[slot];
        out.extend(
            self.states[slot]
                .transforms
                .iter()
                .zip(field.colors.iter())
                .map(|(t, c)| InstanceRaw::new(t, *c)),
        );
    }
}
