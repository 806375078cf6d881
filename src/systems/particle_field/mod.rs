//! Particle Field - the ambient star field behind the intro
//!
//! Dots drift, flee the pointer, wrap around the canvas edges and are linked
//! by faint lines when close. Purely visual: nothing here can fail.

mod field;
mod particle;

pub use field::{Link, ParticleField};
pub use particle::Particle;
