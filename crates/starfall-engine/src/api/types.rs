use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Logical canvas the simulation runs in.
/// The window backend maps it onto the real surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Center of the canvas. Orbits and the nebula attractor share it.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(640, 480)
    }
}

/// Initial population sizes, in command-line order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationCounts {
    pub nebula: u32,
    pub stars: u32,
    pub bodies: u32,
    pub debris: u32,
}

impl PopulationCounts {
    pub const fn new(nebula: u32, stars: u32, bodies: u32, debris: u32) -> Self {
        Self { nebula, stars, bodies, debris }
    }

    pub fn is_empty(&self) -> bool {
        self.nebula == 0 && self.stars == 0 && self.bodies == 0 && self.debris == 0
    }
}

/// A body/debris collision detected during a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionEvent {
    /// Index of the body (and of its paired explosion).
    pub body: usize,
    /// Where the body was when it was hit.
    pub at: Vec2,
    /// Time at which the body becomes visible again.
    pub respawn_at: u64,
}
