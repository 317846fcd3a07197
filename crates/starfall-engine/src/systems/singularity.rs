use glam::{IVec2, Vec2};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::api::config::SingularityTuning;
use crate::components::color::{Rgba, ACCRETION_DISK};
use crate::renderer::traits::Canvas;

/// The black hole at the center of the scene: a solid core, thin shimmering
/// rings and a flat accretion disk. Scenery only; nothing collides with it.
///
/// The shimmer is random per-pixel jitter. A fresh jitter seed is drawn on
/// every [`update`](Self::update), so one tick always renders the same
/// picture and consecutive ticks differ.
#[derive(Debug, Clone)]
pub struct Singularity {
    center: IVec2,
    tuning: SingularityTuning,
    frame_seed: u64,
    rng: SmallRng,
}

impl Singularity {
    pub fn new(center: Vec2, tuning: SingularityTuning, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        Self {
            center: center.as_ivec2(),
            tuning,
            frame_seed: rng.gen(),
            rng,
        }
    }

    pub fn update(&mut self) {
        self.frame_seed = self.rng.gen();
    }

    pub fn center(&self) -> IVec2 {
        self.center
    }

    pub fn render(&self, canvas: &mut impl Canvas) {
        let t = &self.tuning;
        let mut jitter = SmallRng::seed_from_u64(self.frame_seed);

        canvas.fill_circle(self.center.as_vec2(), t.core_radius as f32, Rgba::BLACK);

        for r in (t.ring_inner..=t.ring_outer).step_by(t.ring_step.max(1)) {
            let color = ring_color(r, t.ring_inner);
            let outer = r * r;
            let inner = (r - 1) * (r - 1);
            for w in -r..=r {
                for h in -r..=r {
                    let d = w * w + h * h;
                    if d <= outer && d > inner {
                        let p = self.center + IVec2::new(w, h) + offset(&mut jitter, t.ring_jitter);
                        canvas.draw_point(p.as_vec2(), color);
                    }
                }
            }
        }

        let half_len = t.disk_length / 2;
        let half_thick = t.disk_thickness / 2;
        for x in -half_len..=half_len {
            for y in -half_thick..=half_thick {
                let p = self.center + IVec2::new(x, y) + offset(&mut jitter, t.disk_jitter);
                canvas.draw_point(p.as_vec2(), ACCRETION_DISK);
            }
        }
    }
}

/// Warm ring color, fading out with distance from the innermost ring.
pub fn ring_color(radius: i32, innermost: i32) -> Rgba {
    let green = 165 + radius.rem_euclid(50);
    let alpha = 255 - (radius - innermost) * 2;
    Rgba::new(255, green.clamp(0, 255) as u8, 0, alpha.clamp(0, 255) as u8)
}

/// Random displacement in `[-amount, amount)` on each axis.
fn offset(rng: &mut SmallRng, amount: i32) -> IVec2 {
    if amount <= 0 {
        return IVec2::ZERO;
    }
    IVec2::new(rng.gen_range(-amount..amount), rng.gen_range(-amount..amount))
}
