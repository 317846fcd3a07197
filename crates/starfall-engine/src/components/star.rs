use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::api::config::StarTuning;
use crate::api::types::Bounds;
use crate::components::roll;

/// A background star falling slowly down the canvas.
#[derive(Debug, Clone)]
pub struct Star {
    pub position: Vec2,
    pub size: u32,
    /// Pixels per tick, downward.
    pub fall_speed: f32,
    /// Owned so stars can wrap around independently of each other.
    rng: SmallRng,
}

impl Star {
    pub fn new(position: Vec2, size: u32, fall_speed: f32, seed: u64) -> Self {
        Self {
            position,
            size,
            fall_speed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn random(bounds: &Bounds, tuning: &StarTuning, rng: &mut impl Rng) -> Self {
        let position = Vec2::new(
            rng.gen_range(0..bounds.width) as f32,
            rng.gen_range(0..bounds.height) as f32,
        );
        let size = tuning.min_size + roll(rng, tuning.size_spread);
        let fall_speed = tuning.base_speed + roll(rng, tuning.speed_steps) as f32 * tuning.speed_step;
        Self::new(position, size, fall_speed, rng.gen())
    }

    /// Fall one tick. A star leaving the bottom edge reappears at the top
    /// in a new column.
    pub fn update(&mut self, bounds: &Bounds) {
        self.position.y += self.fall_speed;
        if self.position.y >= bounds.height as f32 {
            self.position.y = 0.0;
            self.position.x = self.rng.gen_range(0..bounds.width) as f32;
        }
    }
}
