//! Interaction Layer - single-pointer drag override
//!
//! A grabbed body is pinned: the stepper stops integrating it and the pointer
//! writes its position directly. On release it keeps momentum from the last
//! drag delta and gets a random spin.

mod drag;

pub use drag::DragController;
