//! Core - math, randomness and logging shared by every system

#[macro_use]
#[path = "utils/log.rs"]
pub mod log;
#[path = "utils/random.rs"]
pub mod random;
#[path = "math/vec2.rs"]
pub mod vec2;
#[path = "math/viewport.rs"]
pub mod viewport;

pub use random::Rng;
pub use vec2::Vec2;
pub use viewport::Viewport;
