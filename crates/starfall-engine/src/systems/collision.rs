use glam::Vec2;

use crate::api::types::CollisionEvent;
use crate::components::debris::Debris;
use crate::components::explosion::Explosion;
use crate::components::orbiting_body::OrbitingBody;
use crate::systems::parallel;

/// Two discs overlap when their centers are strictly closer than the sum of
/// their radii. Touching discs do not overlap.
pub fn overlaps(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    a.distance(b) < radius_a + radius_b
}

/// Whether `debris` hits `body`. Hidden bodies never collide.
pub fn collides(body: &OrbitingBody, debris: &Debris) -> bool {
    body.visible
        && overlaps(
            body.position(),
            body.radius as f32,
            debris.center(),
            debris.radius as f32,
        )
}

/// Apply a collision to body `index`: the body disappears for `delay` ms and
/// its explosion starts where the body was. Both happen together or not at all.
pub fn resolve(
    index: usize,
    body: &mut OrbitingBody,
    explosion: &mut Explosion,
    now: u64,
    delay: u64,
) -> CollisionEvent {
    let at = body.position();
    body.despawn(now, delay);
    explosion.trigger(at);
    CollisionEvent {
        body: index,
        at,
        respawn_at: body.respawn_at,
    }
}

/// Test every visible body against every piece of debris.
///
/// `bodies` and `explosions` are paired by index. A body is resolved at most
/// once per sweep, on the first debris that hits it. Debris is unaffected.
pub fn sweep(
    bodies: &mut [OrbitingBody],
    explosions: &mut [Explosion],
    debris: &[Debris],
    now: u64,
    delay: u64,
) -> Vec<CollisionEvent> {
    if debris.is_empty() {
        return Vec::new();
    }
    parallel::filter_map_pairs(bodies, explosions, |index, body, explosion| {
        debris
            .iter()
            .any(|d| collides(body, d))
            .then(|| resolve(index, body, explosion, now, delay))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::explosion::ExplosionPhase;
    use glam::IVec2;

    /// A body parked at a fixed point: zero orbit radius puts it on its center.
    fn parked(center: Vec2, radius: u32) -> OrbitingBody {
        OrbitingBody::new(center, 0.0, 0.0, 0.0, radius)
    }

    fn rock(x: i32, y: i32, radius: u32) -> Debris {
        Debris::new(IVec2::new(x, y), IVec2::new(1, 1), radius)
    }

    #[test]
    fn exactly_touching_does_not_collide() {
        // 10 + 5 = 15 apart
        let body = parked(Vec2::new(85.0, 100.0), 10);
        assert!(!collides(&body, &rock(100, 100, 5)));
    }

    #[test]
    fn just_inside_collides() {
        let body = parked(Vec2::new(85.001, 100.0), 10);
        assert!(collides(&body, &rock(100, 100, 5)));
    }

    #[test]
    fn diagonal_boundary_is_strict() {
        // 9-12-15 triangle: exactly 15 apart
        let body = parked(Vec2::new(91.0, 88.0), 10);
        assert!(!collides(&body, &rock(100, 100, 5)));
        let body = parked(Vec2::new(91.01, 88.01), 10);
        assert!(collides(&body, &rock(100, 100, 5)));
    }

    #[test]
    fn hidden_body_never_collides() {
        let mut body = parked(Vec2::new(100.0, 100.0), 10);
        body.despawn(0, 5000);
        assert!(!collides(&body, &rock(100, 100, 5)));
    }

    #[test]
    fn resolve_hides_body_and_starts_explosion() {
        let mut body = OrbitingBody::new(Vec2::new(320.0, 240.0), 100.0, 0.0, 0.01, 10);
        let mut explosion = Explosion::default();
        let event = resolve(3, &mut body, &mut explosion, 1000, 5000);

        assert!(!body.visible);
        assert_eq!(body.respawn_at, 6000);
        assert_eq!(explosion.phase(), ExplosionPhase::Growing);
        assert_eq!(explosion.position, Vec2::new(420.0, 240.0));
        assert_eq!((explosion.outer, explosion.mid, explosion.inner), (1, 0, 0));
        assert_eq!(event.body, 3);
        assert_eq!(event.at, explosion.position);
        assert_eq!(event.respawn_at, 6000);
    }

    #[test]
    fn sweep_reports_each_hit_body_once() {
        let mut bodies = vec![
            parked(Vec2::new(100.0, 100.0), 10),
            parked(Vec2::new(300.0, 300.0), 10),
            parked(Vec2::new(500.0, 100.0), 10),
        ];
        let mut explosions = vec![Explosion::default(); 3];
        let debris = vec![rock(100, 100, 5), rock(102, 100, 5), rock(500, 105, 5)];

        let events = sweep(&mut bodies, &mut explosions, &debris, 40, 5000);

        assert_eq!(events.iter().map(|e| e.body).collect::<Vec<_>>(), vec![0, 2]);
        assert!(!bodies[0].visible && bodies[1].visible && !bodies[2].visible);
        assert!(explosions[0].active && !explosions[1].active && explosions[2].active);
        assert!(events.iter().all(|e| e.respawn_at == 5040));
    }

    #[test]
    fn sweep_without_debris_is_noop() {
        let mut bodies = vec![parked(Vec2::ZERO, 10)];
        let mut explosions = vec![Explosion::default()];
        assert!(sweep(&mut bodies, &mut explosions, &[], 0, 5000).is_empty());
        assert!(bodies[0].visible);
    }

    #[test]
    fn second_sweep_skips_hidden_body() {
        let mut bodies = vec![parked(Vec2::new(100.0, 100.0), 10)];
        let mut explosions = vec![Explosion::default()];
        let debris = vec![rock(100, 100, 5)];
        assert_eq!(sweep(&mut bodies, &mut explosions, &debris, 0, 5000).len(), 1);
        assert!(sweep(&mut bodies, &mut explosions, &debris, 16, 5000).is_empty());
        assert_eq!(bodies[0].respawn_at, 5000);
    }
}
