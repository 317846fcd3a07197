use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::api::config::SceneConfig;
use crate::api::error::ConfigError;
use crate::api::types::{Bounds, CollisionEvent};
use crate::components::debris::Debris;
use crate::components::explosion::Explosion;
use crate::components::layer::RenderLayer;
use crate::components::nebula_particle::NebulaParticle;
use crate::components::orbiting_body::OrbitingBody;
use crate::components::star::Star;
use crate::renderer::traits::Canvas;
use crate::systems::collision;
use crate::systems::nebula::NebulaField;
use crate::systems::parallel;
use crate::systems::render;
use crate::systems::singularity::Singularity;

/// Owns every entity of the scene and runs the per-tick pipeline.
///
/// Bodies and explosions are parallel vectors: explosion `i` belongs to
/// body `i`. Entities never hold references to each other.
pub struct SceneDirector {
    config: SceneConfig,
    attractor: Vec2,
    bodies: Vec<OrbitingBody>,
    explosions: Vec<Explosion>,
    debris: Vec<Debris>,
    stars: Vec<Star>,
    nebula: NebulaField,
    singularity: Singularity,
    collisions: Vec<CollisionEvent>,
    ticks: u64,
}

impl SceneDirector {
    /// Validate `config` and populate the scene from `seed`.
    /// The same config and seed always produce the same scene.
    pub fn new(config: SceneConfig, seed: u64) -> Result<Self, ConfigError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut scene = Self::empty(config)?;
        let bounds = scene.config.bounds;
        let center = bounds.center();
        let counts = scene.config.counts;

        for i in 0..counts.bodies as usize {
            let body = OrbitingBody::random(i, center, &scene.config.orbits, &mut rng);
            scene.spawn_body(body);
        }
        for _ in 0..counts.debris {
            let debris = Debris::random(&bounds, &scene.config.debris, &mut rng);
            scene.spawn_debris(debris);
        }
        for _ in 0..counts.stars {
            let star = Star::random(&bounds, &scene.config.stars, &mut rng);
            scene.spawn_star(star);
        }
        scene.nebula = NebulaField::random(counts.nebula, &bounds, &scene.config.nebula, &mut rng);
        scene.singularity = Singularity::new(center, scene.config.singularity, rng.gen());

        log::info!(
            "Scene ready: {}x{}, {} nebula, {} stars, {} bodies, {} debris (seed {})",
            bounds.width,
            bounds.height,
            counts.nebula,
            counts.stars,
            counts.bodies,
            counts.debris,
            seed
        );
        Ok(scene)
    }

    /// A validated scene with no entities. `config.counts` is ignored;
    /// populate it with the `spawn_*` methods.
    pub fn empty(config: SceneConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let center = config.bounds.center();
        let singularity = Singularity::new(center, config.singularity, 0);
        Ok(Self {
            config,
            attractor: center,
            bodies: Vec::new(),
            explosions: Vec::new(),
            debris: Vec::new(),
            stars: Vec::new(),
            nebula: NebulaField::new(),
            singularity,
            collisions: Vec::new(),
            ticks: 0,
        })
    }

    // ── Population ──────────────────────────────────────────────────

    /// Add a body together with its (idle) explosion slot.
    pub fn spawn_body(&mut self, body: OrbitingBody) -> usize {
        self.bodies.push(body);
        self.explosions.push(Explosion::default());
        self.bodies.len() - 1
    }

    pub fn spawn_debris(&mut self, debris: Debris) {
        self.debris.push(debris);
    }

    pub fn spawn_star(&mut self, star: Star) {
        self.stars.push(star);
    }

    pub fn spawn_particle(&mut self, particle: NebulaParticle) {
        self.nebula.push(particle);
    }

    // ── Tick ────────────────────────────────────────────────────────

    /// Advance the scene one tick at time `now` (ms).
    ///
    /// Order: nebula, stars, debris, bodies, explosion growth, then the
    /// collision sweep. A body hit this tick therefore has its explosion
    /// at `outer == 1` when the tick returns. Returns this tick's collisions.
    pub fn update(&mut self, now: u64) -> &[CollisionEvent] {
        let bounds = self.config.bounds;

        self.nebula.update(self.attractor, &bounds, &self.config.nebula);
        parallel::for_each_mut(&mut self.stars, |s| s.update(&bounds));
        parallel::for_each_mut(&mut self.debris, |d| d.update(&bounds));
        parallel::for_each_mut(&mut self.bodies, |b| b.update(now));

        let explosion = self.config.explosion;
        parallel::for_each_mut(&mut self.explosions, |e| e.advance(&explosion));
        self.singularity.update();

        self.collisions = collision::sweep(
            &mut self.bodies,
            &mut self.explosions,
            &self.debris,
            now,
            self.config.respawn_delay_ms,
        );
        for event in &self.collisions {
            log::debug!(
                "Body {} hit at ({:.1}, {:.1}), back at {} ms",
                event.body,
                event.at.x,
                event.at.y,
                event.respawn_at
            );
        }

        self.ticks += 1;
        &self.collisions
    }

    /// Draw the scene back to front.
    pub fn render(&self, canvas: &mut impl Canvas) {
        canvas.begin_layer(RenderLayer::Nebula);
        for particle in self.nebula.particles() {
            render::draw_particle(particle, canvas);
        }

        canvas.begin_layer(RenderLayer::Stars);
        for star in &self.stars {
            render::draw_star(star, self.config.stars.color, canvas);
        }

        canvas.begin_layer(RenderLayer::Singularity);
        self.singularity.render(canvas);

        canvas.begin_layer(RenderLayer::Bodies);
        for body in &self.bodies {
            render::draw_body(body, canvas);
        }

        canvas.begin_layer(RenderLayer::Explosions);
        for explosion in &self.explosions {
            render::draw_explosion(explosion, canvas);
        }

        canvas.begin_layer(RenderLayer::Debris);
        for debris in &self.debris {
            render::draw_debris(debris, canvas);
        }
    }

    // ── Accessors ───────────────────────────────────────────────────

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn bounds(&self) -> Bounds {
        self.config.bounds
    }

    /// The point nebula particles fall toward.
    pub fn attractor(&self) -> Vec2 {
        self.attractor
    }

    pub fn bodies(&self) -> &[OrbitingBody] {
        &self.bodies
    }

    pub fn explosions(&self) -> &[Explosion] {
        &self.explosions
    }

    pub fn debris(&self) -> &[Debris] {
        &self.debris
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn nebula(&self) -> &NebulaField {
        &self.nebula
    }

    pub fn singularity(&self) -> &Singularity {
        &self.singularity
    }

    /// Collisions detected by the most recent [`update`](Self::update).
    pub fn last_collisions(&self) -> &[CollisionEvent] {
        &self.collisions
    }

    /// Number of completed ticks.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
