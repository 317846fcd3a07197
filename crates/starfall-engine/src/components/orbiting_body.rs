use glam::Vec2;
use rand::Rng;

use crate::api::config::OrbitTuning;
use crate::components::color::Rgba;
use crate::components::roll;

/// A planet on a circular orbit around the scene center.
///
/// Bodies are never removed. A collision hides the body until `respawn_at`,
/// after which it picks up its orbit where it left off.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitingBody {
    /// Orbit center (shared by every body in the scene).
    pub center: Vec2,
    pub orbit_radius: f32,
    /// Current angle in radians. Unbounded; wraps through cos/sin.
    pub angle: f32,
    /// Radians added per tick.
    pub angular_speed: f32,
    /// Visual and collision radius.
    pub radius: u32,
    pub color: Rgba,
    pub visible: bool,
    /// Time (ms) at which a hidden body becomes visible again.
    pub respawn_at: u64,
}

impl OrbitingBody {
    pub fn new(center: Vec2, orbit_radius: f32, angle: f32, angular_speed: f32, radius: u32) -> Self {
        Self {
            center,
            orbit_radius,
            angle,
            angular_speed,
            radius,
            color: Rgba::WHITE,
            visible: true,
            respawn_at: 0,
        }
    }

    /// Body number `index` with a randomized phase, speed, size and color.
    /// Orbit radii are spaced deterministically by index.
    pub fn random(index: usize, center: Vec2, tuning: &OrbitTuning, rng: &mut impl Rng) -> Self {
        let orbit_radius = tuning.base_radius + index as f32 * tuning.spacing;
        // Whole numbers in [0, 360), used directly as radians.
        let angle = rng.gen_range(0..360) as f32;
        let angular_speed = tuning.base_speed + roll(rng, tuning.speed_steps) as f32 * tuning.speed_step;
        let radius = tuning.min_radius + roll(rng, tuning.radius_spread);
        let color = Rgba::rgb(rng.gen(), rng.gen(), rng.gen());
        Self::new(center, orbit_radius, angle, angular_speed, radius.max(1)).with_color(color)
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    /// Position on the orbit for the current angle.
    pub fn position(&self) -> Vec2 {
        self.center + self.orbit_radius * Vec2::new(self.angle.cos(), self.angle.sin())
    }

    /// Advance one tick. Visible bodies move along the orbit; hidden bodies
    /// only check whether their respawn time has come.
    pub fn update(&mut self, now: u64) {
        if self.visible {
            self.angle += self.angular_speed;
        } else if now >= self.respawn_at {
            self.visible = true;
            log::trace!("body respawned at {} ms", now);
        }
    }

    /// Hide the body for `delay` milliseconds starting at `now`.
    pub fn despawn(&mut self, now: u64, delay: u64) {
        self.visible = false;
        self.respawn_at = now.saturating_add(delay);
    }
}
