use crate::constants::*;
use glam::Vec3;
use rand::prelude::*;

/// World-space snowfall inside a cube around the origin.
pub struct Snow {
    positions: Vec<Vec3>,
    rng: StdRng,
}

fn scatter<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    (rng.gen::<f32>() - 0.5) * SNOW_BOX_SIZE
}

impl Snow {
    pub fn new(count: usize, mut rng: StdRng) -> Self {
        let positions = (0..count)
            .map(|_| Vec3::new(scatter(&mut rng), scatter(&mut rng), scatter(&mut rng)))
            .collect();
        Self { positions, rng }
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn step(&mut self, dt: f32, elapsed: f32) {
        for (i, p) in self.positions.iter_mut().enumerate() {
            p.y -= dt * SNOW_FALL_SPEED;
            if p.y < SNOW_FLOOR_Y {
                p.y = SNOW_CEILING_Y;
                p.x = scatter(&mut self.rng);
                p.z = scatter(&mut self.rng);
            }
            p.x += (elapsed * SNOW_SWAY_FREQUENCY + i as f32).sin() * SNOW_SWAY_RATE * dt;
        }
    }
}
