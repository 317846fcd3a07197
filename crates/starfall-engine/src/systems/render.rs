use glam::{IVec2, Vec2};

use crate::components::color::{Rgba, EXPLOSION_INNER, EXPLOSION_MID, EXPLOSION_OUTER};
use crate::components::debris::Debris;
use crate::components::explosion::Explosion;
use crate::components::nebula_particle::NebulaParticle;
use crate::components::orbiting_body::OrbitingBody;
use crate::components::star::Star;
use crate::renderer::traits::Canvas;

/// Shaded disc: concentric circles from the rim inward, each darker the
/// further out it reaches. Hidden bodies draw nothing.
pub fn draw_body(body: &OrbitingBody, canvas: &mut impl Canvas) {
    if !body.visible {
        return;
    }
    let center = body.position();
    for i in 0..body.radius {
        let r = body.radius - i;
        canvas.fill_circle(center, r as f32, body.color.scaled(r, body.radius));
    }
}

/// Square of side `radius` centered on the debris.
pub fn draw_debris(debris: &Debris, canvas: &mut impl Canvas) {
    let side = debris.radius as i32;
    let origin = debris.position - IVec2::splat(side / 2);
    canvas.fill_rect(origin.as_vec2(), Vec2::splat(side as f32), debris.color.with_alpha(255));
}

pub fn draw_particle(particle: &NebulaParticle, canvas: &mut impl Canvas) {
    let size = particle.size as f32;
    canvas.fill_rect(particle.position.trunc(), Vec2::splat(size), particle.color);
}

pub fn draw_star(star: &Star, color: Rgba, canvas: &mut impl Canvas) {
    canvas.fill_circle(star.position.trunc(), star.size as f32, color);
}

/// Outer ring always, the others once they have started growing.
/// Idle explosions draw nothing.
pub fn draw_explosion(explosion: &Explosion, canvas: &mut impl Canvas) {
    if !explosion.active {
        return;
    }
    let at = explosion.position;
    canvas.fill_circle(at, explosion.outer as f32, EXPLOSION_OUTER);
    if explosion.mid > 0 {
        canvas.fill_circle(at, explosion.mid as f32, EXPLOSION_MID);
    }
    if explosion.inner > 0 {
        canvas.fill_circle(at, explosion.inner as f32, EXPLOSION_INNER);
    }
}
