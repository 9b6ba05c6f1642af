//! One-shot procedural generation of the decorative particle field.
//!
//! Each category gets a fixed number of particles with two fixed targets: a
//! point on a helical cone shell (assembled) and a point on a thick spherical
//! shell (exploded). Target data is immutable once generated and is laid out
//! as flat per-slot arrays.

use crate::constants::*;
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Ornament,
    Light,
    Gift,
    Diamond,
    Silver,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Ornament,
        Category::Light,
        Category::Gift,
        Category::Diamond,
        Category::Silver,
    ];

    pub fn count(self) -> usize {
        match self {
            Category::Ornament => ORNAMENT_COUNT,
            Category::Light => LIGHT_COUNT,
            Category::Gift => GIFT_COUNT,
            Category::Diamond => DIAMOND_COUNT,
            Category::Silver => SILVER_COUNT,
        }
    }

    pub fn palette(self) -> &'static [u32] {
        match self {
            Category::Ornament | Category::Diamond => &WARM_PALETTE,
            Category::Light => &LIGHT_PALETTE,
            Category::Gift => &GIFT_PALETTE,
            Category::Silver => &SILVER_PALETTE,
        }
    }

    /// Base scale range before the global shrink.
    pub fn scale_range(self) -> (f32, f32) {
        match self {
            Category::Ornament => (0.25, 0.50),
            Category::Light => (0.12, 0.22),
            Category::Gift => (0.20, 0.40),
            Category::Diamond => (0.20, 0.40),
            Category::Silver => (0.20, 0.45),
        }
    }

    pub fn radial_noise(self) -> f32 {
        match self {
            Category::Light => LIGHT_RADIAL_NOISE,
            _ => RADIAL_NOISE,
        }
    }

    #[inline]
    pub fn has_per_axis_scale(self) -> bool {
        self == Category::Gift
    }
}

/// Fixed per-particle scale; gifts are boxes with independent axis sizes.
#[derive(Clone, Debug)]
pub enum ScaleBuffer {
    Uniform(Vec<f32>),
    PerAxis(Vec<Vec3>),
}

impl ScaleBuffer {
    #[inline]
    pub fn get(&self, index: usize) -> Vec3 {
        match self {
            ScaleBuffer::Uniform(s) => Vec3::splat(s[index]),
            ScaleBuffer::PerAxis(s) => s[index],
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ScaleBuffer::Uniform(s) => s.len(),
            ScaleBuffer::PerAxis(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Read-only target data for one category.
#[derive(Clone, Debug)]
pub struct CategoryField {
    pub category: Category,
    pub assembled: Vec<Vec3>,
    pub exploded: Vec<Vec3>,
    pub scales: ScaleBuffer,
    pub colors: Vec<[f32; 3]>,
}

impl CategoryField {
    #[inline]
    pub fn len(&self) -> usize {
        self.assembled.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.assembled.is_empty()
    }
}

/// Radius of the tree cone at height `y`, shrinking from base to apex.
#[inline]
pub fn cone_radius(y: f32) -> f32 {
    TREE_APEX_RADIUS + (1.0 - (y + TREE_HALF_HEIGHT) / TREE_HEIGHT) * TREE_BASE_RADIUS_SPAN
}

/// Uniform point on a spherical shell with radius in `[min_r, min_r + span)`.
pub fn shell_point<R: Rng + ?Sized>(rng: &mut R, min_r: f32, span: f32) -> Vec3 {
    let theta = rng.gen::<f32>() * TAU;
    let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
    let r = min_r + rng.gen::<f32>() * span;
    Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    )
}

fn cone_point<R: Rng + ?Sized>(rng: &mut R, noise: f32) -> Vec3 {
    let y_norm = rng.gen::<f32>();
    let y = y_norm * TREE_HEIGHT - TREE_HALF_HEIGHT;
    let angle = y_norm * PI * SPIRAL_TURNS_FACTOR + rng.gen::<f32>() * FRAC_PI_2;
    let r = cone_radius(y) + (rng.gen::<f32>() - 0.5) * noise;
    Vec3::new(angle.cos() * r, y, angle.sin() * r)
}

/// Generate `count` particles for `category`.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, category: Category, count: usize) -> CategoryField {
    debug_assert!(count > 0, "particle categories are never empty");
    let mut assembled = Vec::with_capacity(count);
    let mut exploded = Vec::with_capacity(count);
    let mut colors = Vec::with_capacity(count);
    let mut uniform = Vec::new();
    let mut per_axis = Vec::new();
    let (lo, hi) = category.scale_range();
    let noise = category.radial_noise();
    let palette = category.palette();

    for _ in 0..count {
        assembled.push(cone_point(rng, noise));
        exploded.push(shell_point(rng, SHELL_MIN_RADIUS, SHELL_RADIUS_SPAN));

        let base = (lo + rng.gen::<f32>() * (hi - lo)) * GLOBAL_SCALE_SHRINK;
        if category.has_per_axis_scale() {
            let mut jitter = || 1.0 - GIFT_AXIS_JITTER + rng.gen::<f32>() * 2.0 * GIFT_AXIS_JITTER;
            per_axis.push(Vec3::new(base * jitter(), base * jitter(), base * jitter()));
        } else {
            uniform.push(base);
        }

        let hex = *palette.choose(rng).unwrap_or(&0xFFFFFF);
        colors.push(hex_to_rgb(hex));
    }

    let scales = if category.has_per_axis_scale() {
        ScaleBuffer::PerAxis(per_axis)
    } else {
        ScaleBuffer::Uniform(uniform)
    };
    CategoryField {
        category,
        assembled,
        exploded,
        scales,
        colors,
    }
}

/// All five categories, generated once at start-up.
#[derive(Clone, Debug)]
pub struct ParticleField {
    pub categories: Vec<CategoryField>,
}

impl ParticleField {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let categories = Category::ALL
            .iter()
            .map(|c| generate(rng, *c, c.count()))
            .collect::<Vec<_>>();
        log::info!(
            "[field] generated {} particles across {} categories",
            categories.iter().map(|c| c.len()).sum::<usize>(),
            categories.len()
        );
        Self { categories }
    }

    pub fn get(&self, category: Category) -> Option<&CategoryField> {
        self.categories.iter().find(|c| c.category == category)
    }

    pub fn total(&self) -> usize {
        self.categories.iter().map(|c| c.len()).sum()
    }
}

/// Fixed targets for one photo panel, drawn independently per photo.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhotoAnchor {
    pub assembled: Vec3,
    pub exploded: Vec3,
    /// Small fixed tilt about the panel's local x and z axes (radians).
    pub tilt_x: f32,
    pub tilt_z: f32,
}

impl PhotoAnchor {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let y = rng.gen::<f32>() * PHOTO_HEIGHT_SPAN + PHOTO_MIN_Y;
        let r = cone_radius(y) + PHOTO_RADIAL_OFFSET + rng.gen::<f32>() * PHOTO_RADIAL_JITTER;
        let angle = rng.gen::<f32>() * TAU;
        let assembled = Vec3::new(angle.cos() * r, y, angle.sin() * r);
        let exploded = shell_point(rng, PHOTO_SHELL_MIN_RADIUS, PHOTO_SHELL_RADIUS_SPAN);
        let tilt_x = (rng.gen::<f32>() - 0.5) * PHOTO_TILT_X_SPAN;
        let tilt_z = (rng.gen::<f32>() - 0.5) * PHOTO_TILT_Z_SPAN;
        Self {
            assembled,
            exploded,
            tilt_x,
            tilt_z,
        }
    }
}
