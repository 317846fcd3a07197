use glam::{IVec2, Vec2};
use starfall_engine::{
    Debris, DrawBuffer, ExplosionPhase, OrbitingBody, PopulationCounts, RenderLayer, SceneConfig,
    SceneDirector,
};

/// One body parked at (420, 240) and one piece of debris sitting on it.
fn collision_scene() -> SceneDirector {
    let mut scene = SceneDirector::empty(SceneConfig::default()).unwrap();
    scene.spawn_body(OrbitingBody::new(Vec2::new(320.0, 240.0), 100.0, 0.0, 0.0, 10));
    scene.spawn_debris(Debris::new(IVec2::new(420, 240), IVec2::new(1, 1), 5));
    scene
}

#[test]
fn debris_hit_hides_body_and_starts_explosion() {
    let mut scene = collision_scene();
    let events = scene.update(0).to_vec();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].body, 0);
    assert_eq!(events[0].respawn_at, 5000);

    let body = &scene.bodies()[0];
    assert!(!body.visible);

    let explosion = &scene.explosions()[0];
    assert_eq!(explosion.phase(), ExplosionPhase::Growing);
    assert_eq!(explosion.outer, 1);
    assert_eq!(explosion.position, Vec2::new(420.0, 240.0));

    scene.update(16);
    assert_eq!(scene.explosions()[0].outer, 3);
    assert!(scene.last_collisions().is_empty());
}

#[test]
fn hidden_body_is_not_drawn_but_explosion_is() {
    let mut scene = collision_scene();
    scene.update(0);
    let mut buf = DrawBuffer::new();
    scene.render(&mut buf);
    assert_eq!(buf.count_in(RenderLayer::Bodies), 0);
    assert_eq!(buf.count_in(RenderLayer::Explosions), 1);
    assert_eq!(buf.count_in(RenderLayer::Debris), 1);
}

#[test]
fn body_respawns_exactly_at_respawn_time() {
    let mut scene = collision_scene();
    scene.update(0);

    // Let the debris drift away and the explosion burn out.
    for tick in 1..=40 {
        scene.update(tick * 100);
        assert!(!scene.bodies()[0].visible, "visible early at {} ms", tick * 100);
    }
    assert!(!scene.explosions()[0].active);

    scene.update(4999);
    assert!(!scene.bodies()[0].visible);

    scene.update(5000);
    assert!(scene.bodies()[0].visible);
    assert!(scene.last_collisions().is_empty());
}

#[test]
fn empty_scene_draws_no_entities() {
    let config = SceneConfig::with_counts(PopulationCounts::new(0, 0, 0, 0));
    let mut scene = SceneDirector::new(config, 1).unwrap();
    let mut buf = DrawBuffer::new();

    for tick in 0..120 {
        assert!(scene.update(tick * 16).is_empty());
        buf.clear();
        scene.render(&mut buf);
        assert_eq!(buf.entity_count(), 0);
        assert!(buf.count_in(RenderLayer::Singularity) > 0);
    }
    assert_eq!(scene.ticks(), 120);
}

#[test]
fn same_seed_same_frames() {
    let config = SceneConfig::with_counts(PopulationCounts::new(300, 100, 5, 20));
    let mut a = SceneDirector::new(config.clone(), 99).unwrap();
    let mut b = SceneDirector::new(config, 99).unwrap();
    let mut fa = DrawBuffer::new();
    let mut fb = DrawBuffer::new();

    for tick in 0..200 {
        let now = tick * 16;
        assert_eq!(a.update(now), b.update(now));
        fa.clear();
        fb.clear();
        a.render(&mut fa);
        b.render(&mut fb);
        assert_eq!(fa.as_bytes(), fb.as_bytes(), "frames differ at tick {}", tick);
    }
}

#[test]
fn debris_follows_closed_form_inside_scene() {
    let config = SceneConfig::with_counts(PopulationCounts::new(0, 0, 0, 25));
    let mut scene = SceneDirector::new(config, 5).unwrap();
    let bounds = scene.bounds();
    let start: Vec<Debris> = scene.debris().to_vec();

    for tick in 1..=3000u64 {
        scene.update(tick * 16);
        if tick % 250 == 0 {
            for (initial, now) in start.iter().zip(scene.debris()) {
                let (position, velocity) = initial.predict(&bounds, tick);
                assert_eq!(position, now.position);
                assert_eq!(velocity, now.velocity);
            }
        }
    }
}

#[test]
fn crowded_scene_keeps_explosions_ordered() {
    let config = SceneConfig::with_counts(PopulationCounts::new(50, 50, 6, 60));
    let mut scene = SceneDirector::new(config, 3).unwrap();
    let mut hits = 0;
    for tick in 0..2000 {
        hits += scene.update(tick * 16).len();
        for e in scene.explosions().iter().filter(|e| e.active) {
            assert!(e.outer >= e.mid && e.mid >= e.inner);
        }
        for (body, event) in scene
            .last_collisions()
            .iter()
            .map(|ev| (&scene.bodies()[ev.body], ev))
        {
            assert!(!body.visible);
            assert!(body.respawn_at >= event.respawn_at);
        }
    }
    assert!(hits > 0, "60 pieces of debris never hit anything");
}
