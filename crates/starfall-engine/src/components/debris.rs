use glam::{IVec2, Vec2};
use rand::Rng;

use crate::api::config::DebrisTuning;
use crate::api::types::Bounds;
use crate::components::color::Rgba;
use crate::components::roll;

/// An asteroid drifting in a straight line and bouncing off the canvas edges.
///
/// Integer position and velocity: the motion is exact, so any future state
/// can be predicted in closed form (see [`predict_axis`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Debris {
    pub position: IVec2,
    /// Pixels per tick, per axis. Never zero on either axis.
    pub velocity: IVec2,
    pub radius: u32,
    pub color: Rgba,
}

impl Debris {
    pub fn new(position: IVec2, velocity: IVec2, radius: u32) -> Self {
        Self {
            position,
            velocity,
            radius,
            color: Rgba::GREY,
        }
    }

    /// Debris strictly inside the canvas, moving toward +x/+y.
    pub fn random(bounds: &Bounds, tuning: &DebrisTuning, rng: &mut impl Rng) -> Self {
        let position = IVec2::new(
            rng.gen_range(1..bounds.width.max(2)),
            rng.gen_range(1..bounds.height.max(2)),
        );
        let velocity = IVec2::new(
            tuning.min_speed + roll(rng, tuning.speed_spread) as i32,
            tuning.min_speed + roll(rng, tuning.speed_spread) as i32,
        );
        let radius = tuning.min_radius + roll(rng, tuning.radius_spread);
        let mut debris = Self::new(position, velocity, radius);
        debris.color = tuning.color;
        debris
    }

    pub fn center(&self) -> Vec2 {
        self.position.as_vec2()
    }

    /// Move one tick, then reflect each axis that reached or crossed an edge.
    /// Position is not clamped: the debris may overshoot by up to one tick.
    pub fn update(&mut self, bounds: &Bounds) {
        self.position += self.velocity;
        if self.position.x <= 0 || self.position.x >= bounds.width {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y <= 0 || self.position.y >= bounds.height {
            self.velocity.y = -self.velocity.y;
        }
    }

    /// State after `ticks` updates, computed without stepping.
    /// Only valid while the starting position is strictly inside `bounds`.
    pub fn predict(&self, bounds: &Bounds, ticks: u64) -> (IVec2, IVec2) {
        let (x, dx) = predict_axis(self.position.x, self.velocity.x, bounds.width, ticks);
        let (y, dy) = predict_axis(self.position.y, self.velocity.y, bounds.height, ticks);
        (IVec2::new(x, y), IVec2::new(dx, dy))
    }
}

/// Closed form of the move-then-reflect rule along one axis.
///
/// Every reachable position is congruent to `start` modulo the speed, so the
/// motion is a triangle wave between the first such value `<= 0` and the
/// first such value `>= extent`. Requires `0 < start < extent` and a nonzero
/// velocity. Returns `(position, velocity)` after `ticks` steps.
pub fn predict_axis(start: i32, velocity: i32, extent: i32, ticks: u64) -> (i32, i32) {
    let speed = velocity.unsigned_abs() as i64;
    if speed == 0 {
        return (start, velocity);
    }
    let start = start as i64;
    let extent = extent as i64;

    let residue = start.rem_euclid(speed);
    let low = -(-residue).rem_euclid(speed);
    let high = extent + (residue - extent).rem_euclid(speed);
    let span = high - low;
    let period = 2 * span;

    // Unfold the wave: phase 0 sits on `low` heading up, `span` on `high`.
    let offset = start - low;
    let phase0 = if velocity > 0 { offset } else { period - offset };
    let travelled = (ticks % period as u64) as i64 * speed;
    let phase = (phase0 + travelled).rem_euclid(period);

    let position = if phase <= span { low + phase } else { low + period - phase };
    let speed = speed as i32;
    let velocity = if phase < span { speed } else { -speed };
    (position as i32, velocity)
}
