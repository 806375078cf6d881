use super::perf_timer::PerfTimer;
use super::{FrameOutcome, IntroCore};

/// One display frame: field first, then bodies.
///
/// Pointer commands handled since the previous frame are already applied to
/// the body set, so this frame integrates against them.
pub(super) fn step(core: &mut IntroCore) -> FrameOutcome {
    let perf = core.perf_enabled;
    let step_timer = PerfTimer::start_if(perf);
    if perf {
        core.perf_stats.reset();
    }

    let mut outcome = FrameOutcome::default();
    let vp = core.viewport;

    if core.field_active {
        let timer = PerfTimer::start_if(perf);
        core.field.advance_frame(core.pointer, vp.width, vp.height);
        outcome.field_advanced = true;
        if let Some(t) = timer {
            core.perf_stats.field_ms = t.elapsed_ms();
        }
    }

    let timer = PerfTimer::start_if(perf);
    outcome.physics = core.stepper.step(core.bodies.bodies_mut(), core.pointer, vp);
    if let Some(t) = timer {
        core.perf_stats.physics_ms = t.elapsed_ms();
    }

    core.frame += 1;

    if let Some(t) = step_timer {
        let stats = &mut core.perf_stats;
        stats.step_ms = t.elapsed_ms();
        stats.frame = core.frame;
        stats.particles = core.field.len() as u32;
        stats.bodies = core.bodies.len() as u32;
        stats.pinned = core.bodies.bodies().iter().filter(|b| b.pinned).count() as u32;
        stats.pairs = outcome.physics.pairs.pairs;
        stats.contacts = outcome.physics.pairs.contacts;
        stats.impulses = outcome.physics.pairs.impulses;
        stats.wall_hits = outcome.physics.wall_hits;
    }

    outcome
}

pub(super) fn wants_next_frame(core: &IntroCore) -> bool {
    core.field_active || core.stepper.state().is_running() || !core.timeline.is_finished()
}
