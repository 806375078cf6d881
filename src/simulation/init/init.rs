use crate::core::{Rng, Viewport};
use crate::domain::IntroSettings;
use crate::interaction::DragController;
use crate::particle_field::ParticleField;
use crate::rigid_body_system::BodySet;
use crate::stepper::PhysicsStepper;
use crate::timeline::IntroTimeline;

use super::perf_stats::FrameStats;
use super::{IntroCore, RenderBuffers};

pub(super) fn create_intro_core(
    settings: IntroSettings,
    width: f32,
    height: f32,
    letter_count: u32,
    seed: u32,
) -> IntroCore {
    let viewport = Viewport::new(width, height);
    let mut rng = Rng::new(seed);

    let mut field = ParticleField::new(settings.field.clone());
    field.reinitialize(viewport.width, viewport.height, &mut rng);
    let particle_count = field.len();

    IntroCore {
        viewport,
        pointer: None,
        field,
        field_active: true,
        bodies: BodySet::new(),
        stepper: PhysicsStepper::new(settings.physics.clone()),
        drag: DragController::new(settings.drag.clone()),
        timeline: IntroTimeline::new(&settings.timeline, letter_count),
        cue_buffer: Vec::with_capacity(8),
        rng,
        frame: 0,
        entered: false,
        render: RenderBuffers {
            body_transforms: Vec::with_capacity(64 * super::BODY_STRIDE),
            particles: Vec::with_capacity(particle_count * super::PARTICLE_STRIDE),
            links: Vec::new(),
            link_scratch: Vec::new(),
        },
        perf_enabled: false,
        perf_stats: FrameStats::default(),
        settings,
    }
}
