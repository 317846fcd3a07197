use serde::{Deserialize, Serialize};

use crate::api::error::ConfigError;
use crate::api::types::{Bounds, PopulationCounts};
use crate::components::color::Rgba;

/// Configuration for a scene. Every field has a default, so a tuning file
/// only needs to name the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Logical canvas size (default: 640x480).
    pub bounds: Bounds,
    /// Initial population sizes (default: all zero).
    pub counts: PopulationCounts,
    /// Target tick duration in milliseconds (default: 16, ~60Hz).
    pub tick_ms: u64,
    /// How often frame statistics are reported, in milliseconds (default: 1000).
    pub report_interval_ms: u64,
    /// How long a destroyed body stays hidden, in milliseconds (default: 5000).
    pub respawn_delay_ms: u64,
    pub orbits: OrbitTuning,
    pub debris: DebrisTuning,
    pub nebula: NebulaTuning,
    pub stars: StarTuning,
    pub explosion: ExplosionTuning,
    pub singularity: SingularityTuning,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            counts: PopulationCounts::default(),
            tick_ms: 16,
            report_interval_ms: 1000,
            respawn_delay_ms: 5000,
            orbits: OrbitTuning::default(),
            debris: DebrisTuning::default(),
            nebula: NebulaTuning::default(),
            stars: StarTuning::default(),
            explosion: ExplosionTuning::default(),
            singularity: SingularityTuning::default(),
        }
    }
}

impl SceneConfig {
    /// Default tuning with the given population sizes.
    pub fn with_counts(counts: PopulationCounts) -> Self {
        Self {
            counts,
            ..Default::default()
        }
    }

    /// Parse a (possibly partial) config from a JSON string and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the ranges the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let result = self.check();
        if let Err(ref e) = result {
            log::warn!("{}", e);
        }
        result
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.bounds.width <= 0 || self.bounds.height <= 0 {
            return Err(ConfigError::invalid("bounds", "must have a positive width and height"));
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::invalid("tick_ms", "must be positive"));
        }
        if self.debris.min_speed <= 0 {
            return Err(ConfigError::invalid("debris.min_speed", "must be positive"));
        }
        let step = self.nebula.color_step;
        if step.is_nan() || step <= 0.0 || step > 1.0 {
            return Err(ConfigError::invalid("nebula.color_step", "must be in (0, 1]"));
        }
        let threshold = self.nebula.respawn_threshold;
        if threshold.is_nan() || threshold < 0.0 {
            return Err(ConfigError::invalid("nebula.respawn_threshold", "must not be negative"));
        }
        let ex = &self.explosion;
        if ex.step <= 0 {
            return Err(ConfigError::invalid("explosion.step", "must be positive"));
        }
        if ex.max_radius <= 0 {
            return Err(ConfigError::invalid("explosion.max_radius", "must be positive"));
        }
        if ex.mid_onset >= ex.max_radius {
            return Err(ConfigError::invalid("explosion.mid_onset", "must be below max_radius"));
        }
        if ex.inner_onset >= ex.max_radius {
            return Err(ConfigError::invalid("explosion.inner_onset", "must be below max_radius"));
        }
        if self.singularity.ring_step == 0 {
            return Err(ConfigError::invalid("singularity.ring_step", "must be positive"));
        }
        Ok(())
    }
}

/// Placement and randomization of orbiting bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitTuning {
    /// Orbit radius of the first body.
    pub base_radius: f32,
    /// Orbit radius added per body index.
    pub spacing: f32,
    /// Slowest angular speed, in radians per tick.
    pub base_speed: f32,
    /// Angular speed increment; a body gets `base_speed + k * speed_step`.
    pub speed_step: f32,
    /// Number of distinct speed increments `k`.
    pub speed_steps: u32,
    pub min_radius: u32,
    /// Bodies get `min_radius + [0, radius_spread)`.
    pub radius_spread: u32,
}

impl Default for OrbitTuning {
    fn default() -> Self {
        Self {
            base_radius: 50.0,
            spacing: 50.0,
            base_speed: 0.01,
            speed_step: 0.001,
            speed_steps: 10,
            min_radius: 10,
            radius_spread: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebrisTuning {
    pub min_radius: u32,
    pub radius_spread: u32,
    /// Per-axis speed is `min_speed + [0, speed_spread)` pixels per tick.
    pub min_speed: i32,
    pub speed_spread: u32,
    pub color: Rgba,
}

impl Default for DebrisTuning {
    fn default() -> Self {
        Self {
            min_radius: 5,
            radius_spread: 10,
            min_speed: 1,
            speed_spread: 3,
            color: Rgba::GREY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NebulaTuning {
    /// Velocity gained toward the attractor each tick.
    pub acceleration: f32,
    /// Particles closer than this to the attractor respawn.
    pub respawn_threshold: f32,
    /// Color transition progress added each tick.
    pub color_step: f32,
    /// Pick a random palette stage when a particle respawns.
    pub reroll_stage_on_respawn: bool,
    pub min_size: u32,
    pub size_spread: u32,
}

impl Default for NebulaTuning {
    fn default() -> Self {
        Self {
            acceleration: 0.05,
            respawn_threshold: 5.0,
            color_step: 0.02,
            reroll_stage_on_respawn: true,
            min_size: 1,
            size_spread: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarTuning {
    pub base_speed: f32,
    pub speed_step: f32,
    pub speed_steps: u32,
    pub min_size: u32,
    pub size_spread: u32,
    pub color: Rgba,
}

impl Default for StarTuning {
    fn default() -> Self {
        Self {
            base_speed: 0.1,
            speed_step: 0.01,
            speed_steps: 10,
            min_size: 1,
            size_spread: 2,
            color: Rgba::WHITE,
        }
    }
}

/// Staggered ring growth of an explosion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplosionTuning {
    pub max_radius: i32,
    /// Radius added to a growing ring each tick.
    pub step: i32,
    /// The middle ring starts once the outer ring is larger than this.
    pub mid_onset: i32,
    /// The inner ring starts once the middle ring is larger than this.
    pub inner_onset: i32,
}

impl Default for ExplosionTuning {
    fn default() -> Self {
        Self {
            max_radius: 30,
            step: 2,
            mid_onset: 5,
            inner_onset: 10,
        }
    }
}

/// Geometry of the central black hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SingularityTuning {
    pub core_radius: i32,
    pub ring_inner: i32,
    pub ring_outer: i32,
    pub ring_step: usize,
    /// Maximum per-point displacement of the rings, in pixels.
    pub ring_jitter: i32,
    pub disk_length: i32,
    pub disk_thickness: i32,
    pub disk_jitter: i32,
}

impl Default for SingularityTuning {
    fn default() -> Self {
        Self {
            core_radius: 50,
            ring_inner: 60,
            ring_outer: 80,
            ring_step: 5,
            ring_jitter: 2,
            disk_length: 200,
            disk_thickness: 7,
            disk_jitter: 3,
        }
    }
}
