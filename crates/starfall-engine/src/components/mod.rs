pub mod color;
pub mod debris;
pub mod explosion;
pub mod layer;
pub mod nebula_particle;
pub mod orbiting_body;
pub mod star;

use rand::Rng;

/// Uniform integer in `[0, spread)`, or 0 when the spread is empty.
pub(crate) fn roll<R: Rng>(rng: &mut R, spread: u32) -> u32 {
    if spread == 0 {
        0
    } else {
        rng.gen_range(0..spread)
    }
}
