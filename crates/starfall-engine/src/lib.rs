pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;

// Re-export key types at crate root for convenience
pub use api::config::{
    DebrisTuning, ExplosionTuning, NebulaTuning, OrbitTuning, SceneConfig, SingularityTuning,
    StarTuning,
};
pub use api::error::ConfigError;
pub use api::types::{Bounds, CollisionEvent, PopulationCounts};
pub use components::color::Rgba;
pub use components::debris::Debris;
pub use components::explosion::{Explosion, ExplosionPhase};
pub use components::layer::RenderLayer;
pub use components::nebula_particle::{NebulaParticle, ParticleStep};
pub use components::orbiting_body::OrbitingBody;
pub use components::star::Star;
pub use crate::core::scene::SceneDirector;
pub use crate::core::time::{Clock, FrameScheduler, FrameStats, ManualClock, MonotonicClock};
pub use renderer::draw_buffer::{DrawBuffer, DrawCommand};
pub use renderer::traits::Canvas;
pub use systems::nebula::NebulaField;
pub use systems::singularity::Singularity;
