use glam::Vec2;

use crate::api::config::ExplosionTuning;

/// Lifecycle of an explosion slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExplosionPhase {
    /// Waiting for the paired body to be hit. Nothing is drawn.
    #[default]
    Idle,
    /// Rings are expanding.
    Growing,
}

/// Three expanding rings drawn where a body was destroyed.
///
/// The rings start one after another: the middle ring waits for the outer
/// ring to pass `mid_onset`, the inner ring waits for the middle ring to
/// pass `inner_onset`. The explosion ends once the inner ring reaches
/// `max_radius`. Rings are ordered `outer >= mid >= inner` at all times.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Explosion {
    pub position: Vec2,
    pub outer: i32,
    pub mid: i32,
    pub inner: i32,
    pub active: bool,
}

impl Explosion {
    pub fn phase(&self) -> ExplosionPhase {
        if self.active {
            ExplosionPhase::Growing
        } else {
            ExplosionPhase::Idle
        }
    }

    /// Start (or restart) the explosion at `at`.
    pub fn trigger(&mut self, at: Vec2) {
        self.position = at;
        self.outer = 1;
        self.mid = 0;
        self.inner = 0;
        self.active = true;
    }

    /// Grow the rings by one tick. Idle explosions are left untouched.
    pub fn advance(&mut self, tuning: &ExplosionTuning) {
        if !self.active {
            return;
        }
        let max = tuning.max_radius;

        if self.outer < max {
            self.outer += tuning.step;
        }
        // An inner ring never grows past the ring around it.
        if self.outer > tuning.mid_onset && self.mid < max {
            self.mid = (self.mid + tuning.step).min(self.outer);
        }
        if self.mid > tuning.inner_onset && self.inner < max {
            self.inner = (self.inner + tuning.step).min(self.mid);
        }

        if self.inner >= max {
            self.active = false;
        }
    }
}
