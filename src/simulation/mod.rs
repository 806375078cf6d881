//! IntroCore - the simulation context for one page session
//!
//! Owns every piece of mutable intro state: particle field, body set, stepper,
//! drag state, pointer, viewport, timeline, RNG and render buffers.
//! Lifecycle:
//! - created on mount (field running, stepper idle)
//! - antigravity: bodies materialized once, stepper running
//! - enter site: stepper stopped, field cancelled, exit cues scheduled
//!
//! Pure: nothing here touches the DOM. The wasm facade and the DOM driver
//! read results through the render pass.

use crate::core::{Rng, Vec2, Viewport};
use crate::domain::IntroSettings;
use crate::interaction::DragController;
use crate::particle_field::{Link, ParticleField};
use crate::rigid_body::{BodyId, SimulatedBody};
use crate::rigid_body_system::{BodyMeasurement, BodySet, MaterializeResult};
use crate::stepper::{PhysicsStepper, StepReport, StepperState};
use crate::timeline::{Cue, IntroTimeline};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::{Intro, RenderLayout};
pub use perf_stats::FrameStats;
pub use render_extract::{BodyTransform, BODY_STRIDE, LINK_STRIDE, PARTICLE_STRIDE};

/// Flat buffers handed to JS without copying
pub(crate) struct RenderBuffers {
    /// BODY_STRIDE floats per body
    pub(crate) body_transforms: Vec<f32>,
    /// PARTICLE_STRIDE floats per particle
    pub(crate) particles: Vec<f32>,
    /// LINK_STRIDE floats per link
    pub(crate) links: Vec<f32>,
    pub(crate) link_scratch: Vec<Link>,
}

/// What one frame did
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    pub field_advanced: bool,
    pub physics: StepReport,
}

pub struct IntroCore {
    settings: IntroSettings,
    viewport: Viewport,
    pointer: Option<Vec2>,

    field: ParticleField,
    field_active: bool,

    bodies: BodySet,
    stepper: PhysicsStepper,
    drag: DragController,

    timeline: IntroTimeline,
    cue_buffer: Vec<Cue>,

    rng: Rng,
    frame: u64,
    entered: bool,

    render: RenderBuffers,

    perf_enabled: bool,
    perf_stats: FrameStats,
}

impl IntroCore {
    /// New session for a `width` x `height` viewport with `letter_count` logo letters
    pub fn new(settings: IntroSettings, width: f32, height: f32, letter_count: u32, seed: u32) -> Self {
        init::create_intro_core(settings, width, height, letter_count, seed)
    }

    pub fn with_defaults(width: f32, height: f32, letter_count: u32, seed: u32) -> Self {
        Self::new(IntroSettings::default(), width, height, letter_count, seed)
    }

    pub fn settings(&self) -> &IntroSettings {
        &self.settings
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn state(&self) -> StepperState {
        self.stepper.state()
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }

    pub fn field_active(&self) -> bool {
        self.field_active
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn bodies(&self) -> &[SimulatedBody] {
        self.bodies.bodies()
    }

    pub fn body(&self, id: BodyId) -> Option<&SimulatedBody> {
        self.bodies.get(id)
    }

    pub fn dragging(&self) -> Option<BodyId> {
        self.drag.dragging()
    }

    // === SETTINGS ===

    pub fn resize(&mut self, width: f32, height: f32) {
        settings::resize(self, width, height);
    }

    /// Scatter a fresh particle set over the current viewport
    pub fn reseed_field(&mut self) {
        settings::reseed_field(self);
    }

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last frame's perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> FrameStats {
        settings::perf_stats(self)
    }

    // === COMMANDS ===

    /// One-time body snapshot; ignored after the first call
    pub fn materialize(&mut self, measurements: &[BodyMeasurement]) -> MaterializeResult {
        commands::materialize(self, measurements)
    }

    /// Idle -> Running
    pub fn activate(&mut self) -> bool {
        commands::activate(self)
    }

    /// Materialize and activate in one go, as the antigravity cue does
    pub fn enter_antigravity(&mut self, measurements: &[BodyMeasurement]) -> bool {
        commands::enter_antigravity(self, measurements)
    }

    pub fn hit_test(&self, x: f32, y: f32) -> Option<BodyId> {
        self.bodies.hit_test(Vec2::new(x, y))
    }

    /// Record the pointer without pressing (hover)
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        commands::set_pointer(self, x, y);
    }

    /// Press on `target` (already resolved by the host) or, if `None`, on whatever body is under the pointer
    pub fn pointer_down(&mut self, x: f32, y: f32, target: Option<BodyId>) -> Option<BodyId> {
        commands::pointer_down(self, x, y, target)
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        commands::pointer_move(self, x, y)
    }

    pub fn pointer_up(&mut self) -> Option<BodyId> {
        commands::pointer_up(self)
    }

    /// Visitor entered the site. Only the first call has an effect.
    pub fn enter_site(&mut self, elapsed_ms: f64) -> bool {
        commands::enter_site(self, elapsed_ms)
    }

    /// Cues due at `elapsed_ms` since mount
    pub fn poll_cues(&mut self, elapsed_ms: f64) -> &[Cue] {
        commands::poll_cues(self, elapsed_ms)
    }

    // === FRAME ===

    /// Advance field and bodies by one display frame
    pub fn step(&mut self) -> FrameOutcome {
        step::step(self)
    }

    /// False once nothing is left to animate or emit
    pub fn wants_next_frame(&self) -> bool {
        step::wants_next_frame(self)
    }

    // === RENDER ===

    /// Style values for every body, in body order
    pub fn body_transforms(&self) -> impl Iterator<Item = BodyTransform> + '_ {
        render_extract::body_transforms(self)
    }

    /// Links between nearby particles, valid until the next call
    pub fn collect_links(&mut self) -> &[Link] {
        render_extract::collect_links(self)
    }

    pub fn extract_body_transforms(&mut self) -> &[f32] {
        render_extract::extract_body_transforms(self)
    }

    pub fn extract_particles(&mut self) -> &[f32] {
        render_extract::extract_particles(self)
    }

    pub fn extract_links(&mut self) -> &[f32] {
        render_extract::extract_links(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
