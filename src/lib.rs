//! Antigravity Engine - intro overlay simulation in WASM
//!
//! Ambient particle field behind the logo, then an "antigravity" phase where
//! the floating elements become draggable rigid bodies.
//!
//! Architecture:
//! - core/          - Math, RNG, logging macros
//! - domain/        - Body categories and tunable settings
//! - systems/       - Particle field, bodies, stepper, drag, timeline
//! - simulation/    - IntroCore context + wasm facade
//! - dom/           - Browser driver (wasm32 only)

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use systems::interaction;
pub use systems::particle_field;
pub use systems::rigid_body;
pub use systems::rigid_body_system;
pub use systems::stepper;
pub use systems::timeline;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("antigravity engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::{BodyCategory, IntroSettings};
pub use simulation::{FrameStats, Intro, IntroCore};

#[cfg(target_arch = "wasm32")]
pub use dom::mount_intro;

// Category ids for `Intro::add_measurement`
#[wasm_bindgen]
pub fn category_letter() -> u8 { BodyCategory::Letter.id() }
#[wasm_bindgen]
pub fn category_icon() -> u8 { BodyCategory::Icon.id() }
#[wasm_bindgen]
pub fn category_badge() -> u8 { BodyCategory::Badge.id() }
