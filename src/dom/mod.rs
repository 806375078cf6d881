//! Browser driver - binds IntroCore to the intro overlay markup
//!
//! One `requestAnimationFrame` loop polls timeline cues, steps the core,
//! paints the particle canvas and writes body transforms back to the DOM.
//! Only built for wasm32.

mod canvas;
mod driver;
mod overlay;

pub use driver::mount_intro;
