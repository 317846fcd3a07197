use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::api::config::NebulaTuning;
use crate::api::types::Bounds;
use crate::components::color::{Rgba, NEBULA_PALETTE};

/// A point of the nebula stream. It accelerates toward the attractor,
/// never slows down, and respawns at a random spot once it arrives.
#[derive(Debug, Clone)]
pub struct NebulaParticle {
    pub position: Vec2,
    /// Accumulated every tick, reset only on respawn.
    pub velocity: Vec2,
    pub size: u32,
    /// Color shown for the current tick.
    pub color: Rgba,
    /// Index into [`NEBULA_PALETTE`].
    pub color_stage: usize,
    /// Progress from `color_stage` toward the next palette entry, in [0, 1).
    pub color_progress: f32,
    rng: SmallRng,
}

/// What happened to a particle during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleStep {
    Moved,
    Respawned,
}

impl NebulaParticle {
    pub fn new(position: Vec2, size: u32, seed: u64) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            size,
            color: NEBULA_PALETTE[0],
            color_stage: 0,
            color_progress: 0.0,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn random(bounds: &Bounds, tuning: &NebulaTuning, rng: &mut impl Rng) -> Self {
        let mut particle = Self::new(Vec2::ZERO, tuning.min_size, rng.gen());
        particle.size += crate::components::roll(rng, tuning.size_spread);
        particle.position = particle.random_point(bounds);
        particle
    }

    fn random_point(&mut self, bounds: &Bounds) -> Vec2 {
        Vec2::new(
            self.rng.gen_range(0..bounds.width) as f32,
            self.rng.gen_range(0..bounds.height) as f32,
        )
    }

    /// Advance one tick toward `attractor`.
    ///
    /// The respawn test uses the distance measured before moving, so a
    /// particle that passes through the attractor still respawns.
    pub fn update(&mut self, attractor: Vec2, bounds: &Bounds, tuning: &NebulaTuning) -> ParticleStep {
        let direction = attractor - self.position;
        let distance = direction.length();

        if distance > 0.0 {
            self.velocity += direction / distance * tuning.acceleration;
        }
        self.position += self.velocity;

        let step = if distance < tuning.respawn_threshold {
            self.position = self.random_point(bounds);
            self.velocity = Vec2::ZERO;
            if tuning.reroll_stage_on_respawn {
                self.color_stage = self.rng.gen_range(0..NEBULA_PALETTE.len());
            }
            ParticleStep::Respawned
        } else {
            ParticleStep::Moved
        };

        self.advance_color(tuning.color_step);
        step
    }

    /// Show the color for the current stage/progress, then move the
    /// transition forward, wrapping to the next palette stage at 1.0.
    fn advance_color(&mut self, color_step: f32) {
        let from = NEBULA_PALETTE[self.color_stage];
        let to = NEBULA_PALETTE[(self.color_stage + 1) % NEBULA_PALETTE.len()];
        self.color = from.lerp(to, self.color_progress).with_alpha(255);

        self.color_progress += color_step;
        if self.color_progress >= 1.0 {
            self.color_progress = 0.0;
            self.color_stage = (self.color_stage + 1) % NEBULA_PALETTE.len();
        }
    }
}
