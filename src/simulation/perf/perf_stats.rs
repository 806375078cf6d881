use wasm_bindgen::prelude::*;

/// Per-frame counters and timings, filled when perf metrics are enabled
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameStats {
    pub(super) frame: u64,
    pub(super) step_ms: f64,
    pub(super) field_ms: f64,
    pub(super) physics_ms: f64,
    pub(super) particles: u32,
    pub(super) bodies: u32,
    pub(super) pinned: u32,
    pub(super) pairs: u32,
    pub(super) contacts: u32,
    pub(super) impulses: u32,
    pub(super) wall_hits: u32,
}

impl FrameStats {
    pub(crate) fn reset(&mut self) {
        *self = FrameStats::default();
    }
}

#[wasm_bindgen]
impl FrameStats {
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn field_ms(&self) -> f64 { self.field_ms }
    #[wasm_bindgen(getter)]
    pub fn physics_ms(&self) -> f64 { self.physics_ms }
    #[wasm_bindgen(getter)]
    pub fn particles(&self) -> u32 { self.particles }
    #[wasm_bindgen(getter)]
    pub fn bodies(&self) -> u32 { self.bodies }
    #[wasm_bindgen(getter)]
    pub fn pinned(&self) -> u32 { self.pinned }
    #[wasm_bindgen(getter)]
    pub fn pairs(&self) -> u32 { self.pairs }
    #[wasm_bindgen(getter)]
    pub fn contacts(&self) -> u32 { self.contacts }
    #[wasm_bindgen(getter)]
    pub fn impulses(&self) -> u32 { self.impulses }
    #[wasm_bindgen(getter)]
    pub fn wall_hits(&self) -> u32 { self.wall_hits }
}
