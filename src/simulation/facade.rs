use wasm_bindgen::prelude::*;

use crate::domain::{BodyCategory, IntroSettings};
use crate::rigid_body_system::BodyMeasurement;

use super::perf_stats::FrameStats;
use super::IntroCore;

/// Pointers and lengths of the render buffers, valid until the next extract call
#[wasm_bindgen]
pub struct RenderLayout {
    bodies_ptr: u32,
    bodies_len_elements: u32,
    particles_ptr: u32,
    particles_len_elements: u32,
    links_ptr: u32,
    links_len_elements: u32,
}

#[wasm_bindgen]
impl RenderLayout {
    #[wasm_bindgen(getter)]
    pub fn bodies_ptr(&self) -> u32 { self.bodies_ptr }
    #[wasm_bindgen(getter)]
    pub fn bodies_len_elements(&self) -> u32 { self.bodies_len_elements }

    #[wasm_bindgen(getter)]
    pub fn particles_ptr(&self) -> u32 { self.particles_ptr }
    #[wasm_bindgen(getter)]
    pub fn particles_len_elements(&self) -> u32 { self.particles_len_elements }

    #[wasm_bindgen(getter)]
    pub fn links_ptr(&self) -> u32 { self.links_ptr }
    #[wasm_bindgen(getter)]
    pub fn links_len_elements(&self) -> u32 { self.links_len_elements }
}

#[wasm_bindgen]
pub struct Intro {
    core: IntroCore,
    /// Measurements queued by `add_measurement` until `materialize`
    pending: Vec<BodyMeasurement>,
}

#[wasm_bindgen]
impl Intro {
    /// Create a session with default settings
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, letter_count: u32, seed: u32) -> Self {
        Self {
            core: IntroCore::with_defaults(width, height, letter_count, seed),
            pending: Vec::new(),
        }
    }

    /// Create a session from a (partial) settings JSON document
    #[wasm_bindgen(js_name = withSettings)]
    pub fn with_settings(json: String, width: f32, height: f32, letter_count: u32, seed: u32) -> Result<Intro, JsValue> {
        let settings = IntroSettings::from_json(&json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self {
            core: IntroCore::new(settings, width, height, letter_count, seed),
            pending: Vec::new(),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.viewport().width }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.viewport().height }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// 0 idle, 1 running, 2 stopped
    #[wasm_bindgen(getter)]
    pub fn state(&self) -> u8 { self.core.state().id() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.core.bodies().len() as u32 }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.field().len() as u32 }

    #[wasm_bindgen(getter)]
    pub fn entered(&self) -> bool { self.core.is_entered() }

    #[wasm_bindgen(getter)]
    pub fn dragging(&self) -> Option<u32> { self.core.dragging() }

    pub fn settings_json(&self) -> String {
        self.core.settings().to_json()
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.core.resize(width, height);
    }

    pub fn reseed_field(&mut self) {
        self.core.reseed_field();
    }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Last frame's perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> FrameStats {
        self.core.perf_stats()
    }

    // === BODY API ===

    /// Queue one floating element's layout rect. Category: 0 letter, 1 icon, 2 badge.
    /// Returns false for an unknown category.
    pub fn add_measurement(&mut self, category: u8, left: f32, top: f32, width: f32, height: f32) -> bool {
        let Some(category) = BodyCategory::from_id(category) else {
            return false;
        };
        self.pending.push(BodyMeasurement::new(category, left, top, width, height));
        true
    }

    /// Turn queued measurements into bodies. Returns the number created.
    pub fn materialize(&mut self) -> u32 {
        let pending = std::mem::take(&mut self.pending);
        self.core.materialize(&pending).created
    }

    pub fn activate(&mut self) -> bool {
        self.core.activate()
    }

    /// Materialize queued measurements and start the stepper
    pub fn enter_antigravity(&mut self) -> bool {
        let pending = std::mem::take(&mut self.pending);
        self.core.enter_antigravity(&pending)
    }

    pub fn hit_test(&self, x: f32, y: f32) -> Option<u32> {
        self.core.hit_test(x, y)
    }

    // === POINTER API ===

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.core.set_pointer(x, y);
    }

    /// Press at (x, y) on `target`, or on whatever body is under the pointer.
    /// Returns the grabbed body id.
    pub fn pointer_down(&mut self, x: f32, y: f32, target: Option<u32>) -> Option<u32> {
        self.core.pointer_down(x, y, target)
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.core.pointer_move(x, y)
    }

    pub fn pointer_up(&mut self) -> Option<u32> {
        self.core.pointer_up()
    }

    // === TIMELINE API ===

    /// Visitor pressed Enter or clicked the enter button
    pub fn enter_site(&mut self, elapsed_ms: f64) -> bool {
        self.core.enter_site(elapsed_ms)
    }

    /// Cues due at `elapsed_ms`, as a JSON array of `{ kind, ... }` objects
    pub fn poll_cues_json(&mut self, elapsed_ms: f64) -> String {
        let cues = self.core.poll_cues(elapsed_ms);
        serde_json::to_string(cues).unwrap_or_else(|_| "[]".to_string())
    }

    // === FRAME API ===

    /// Advance one display frame. Returns whether another frame is wanted.
    pub fn step(&mut self) -> bool {
        self.core.step();
        self.core.wants_next_frame()
    }

    pub fn wants_next_frame(&self) -> bool {
        self.core.wants_next_frame()
    }

    // === RENDER API ===

    /// Refresh all render buffers and return where they live
    pub fn extract_render(&mut self) -> RenderLayout {
        let (bodies_ptr, bodies_len) = {
            let buf = self.core.extract_body_transforms();
            (buf.as_ptr() as u32, buf.len() as u32)
        };
        let (particles_ptr, particles_len) = {
            let buf = self.core.extract_particles();
            (buf.as_ptr() as u32, buf.len() as u32)
        };
        let (links_ptr, links_len) = {
            let buf = self.core.extract_links();
            (buf.as_ptr() as u32, buf.len() as u32)
        };
        RenderLayout {
            bodies_ptr,
            bodies_len_elements: bodies_len,
            particles_ptr,
            particles_len_elements: particles_len,
            links_ptr,
            links_len_elements: links_len,
        }
    }

    /// Copy of the body transforms: id, left, top, rotation, dragging per body
    pub fn body_transforms(&mut self) -> Vec<f32> {
        self.core.extract_body_transforms().to_vec()
    }

    /// Copy of the particle buffer: x, y, radius, alpha per particle
    pub fn particles(&mut self) -> Vec<f32> {
        self.core.extract_particles().to_vec()
    }

    /// Copy of the link buffer: x1, y1, x2, y2, alpha per link
    pub fn links(&mut self) -> Vec<f32> {
        self.core.extract_links().to_vec()
    }

    pub fn body_stride() -> usize { super::BODY_STRIDE }

    pub fn particle_stride() -> usize { super::PARTICLE_STRIDE }

    pub fn link_stride() -> usize { super::LINK_STRIDE }
}

impl Intro {
    /// Rust-side access for the DOM driver and tests
    pub fn core(&self) -> &IntroCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut IntroCore {
        &mut self.core
    }
}
