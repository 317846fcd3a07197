use glam::Vec2;
use rand::Rng;

use crate::api::config::NebulaTuning;
use crate::api::types::Bounds;
use crate::components::nebula_particle::{NebulaParticle, ParticleStep};
use crate::systems::parallel;

/// The nebula particle population and its running respawn tally.
#[derive(Debug, Clone, Default)]
pub struct NebulaField {
    particles: Vec<NebulaParticle>,
    respawns: u64,
}

impl NebulaField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn random(count: u32, bounds: &Bounds, tuning: &NebulaTuning, rng: &mut impl Rng) -> Self {
        let particles = (0..count)
            .map(|_| NebulaParticle::random(bounds, tuning, rng))
            .collect();
        Self {
            particles,
            respawns: 0,
        }
    }

    pub fn push(&mut self, particle: NebulaParticle) {
        self.particles.push(particle);
    }

    /// Pull every particle one tick toward `attractor`.
    /// Returns how many particles respawned this tick.
    pub fn update(&mut self, attractor: Vec2, bounds: &Bounds, tuning: &NebulaTuning) -> usize {
        let respawned = parallel::count_mut(&mut self.particles, |p| {
            p.update(attractor, bounds, tuning) == ParticleStep::Respawned
        });
        self.respawns += respawned as u64;
        respawned
    }

    pub fn particles(&self) -> &[NebulaParticle] {
        &self.particles
    }

    /// Respawns since the field was created.
    pub fn respawns(&self) -> u64 {
        self.respawns
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
