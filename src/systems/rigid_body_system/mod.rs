//! Body Registry - turns measured UI elements into simulated bodies
//!
//! Bodies are created once, when antigravity mode activates, from a layout
//! snapshot. Later layout changes are never re-read: from that moment the
//! simulation owns position and writes it back every frame.

mod registry;
mod system;

pub use registry::{materialize_body, BodyMeasurement};
pub use system::{BodySet, MaterializeResult};
