//! SimulatedBody - one floating UI element as a rigid body
//!
//! Geometry is a fixed axis-aligned box snapshotted from layout; only
//! position, velocity and rotation evolve.

mod body;

pub use body::{BodyId, SimulatedBody};
