//! Systems - the simulation pieces, each usable on its own
//!
//! - particle_field:    ambient star field
//! - rigid_body:        a single simulated UI element
//! - rigid_body_system: one-time materialization and the owned body set
//! - stepper:           per-frame antigravity physics
//! - interaction:       pointer drag override
//! - timeline:          entrance choreography

pub mod interaction;
pub mod particle_field;
pub mod rigid_body;
pub mod rigid_body_system;
pub mod stepper;
pub mod timeline;
