use crate::core::Vec2;
use crate::rigid_body::BodyId;
use crate::rigid_body_system::{BodyMeasurement, MaterializeResult};
use crate::timeline::Cue;

use super::IntroCore;

pub(super) fn materialize(core: &mut IntroCore, measurements: &[BodyMeasurement]) -> MaterializeResult {
    if core.entered {
        return MaterializeResult::default();
    }
    let result = core
        .bodies
        .materialize(measurements, &core.settings.bodies, &mut core.rng);
    if result.created > 0 || result.skipped > 0 {
        console_log!(
            "antigravity: {} bodies materialized, {} skipped",
            result.created,
            result.skipped
        );
    }
    result
}

pub(super) fn activate(core: &mut IntroCore) -> bool {
    core.stepper.activate()
}

pub(super) fn enter_antigravity(core: &mut IntroCore, measurements: &[BodyMeasurement]) -> bool {
    if core.stepper.state() != crate::stepper::StepperState::Idle {
        return false;
    }
    materialize(core, measurements);
    activate(core)
}

pub(super) fn set_pointer(core: &mut IntroCore, x: f32, y: f32) {
    let pos = Vec2::new(x, y);
    // Touch and mouse glitches can report NaN; keep the last good position.
    if pos.is_finite() {
        core.pointer = Some(pos);
    }
}

pub(super) fn pointer_down(core: &mut IntroCore, x: f32, y: f32, target: Option<BodyId>) -> Option<BodyId> {
    set_pointer(core, x, y);
    if !core.stepper.state().is_running() {
        return None;
    }
    let pos = core.pointer?;
    let target = target.or_else(|| core.bodies.hit_test(pos));
    core.drag.pointer_down(&mut core.bodies, pos, target)
}

pub(super) fn pointer_move(core: &mut IntroCore, x: f32, y: f32) -> bool {
    set_pointer(core, x, y);
    let Some(pos) = core.pointer else {
        return false;
    };
    core.drag.pointer_move(&mut core.bodies, pos)
}

pub(super) fn pointer_up(core: &mut IntroCore) -> Option<BodyId> {
    core.drag.pointer_up(&mut core.bodies, &mut core.rng)
}

pub(super) fn enter_site(core: &mut IntroCore, elapsed_ms: f64) -> bool {
    if core.entered {
        return false;
    }
    core.entered = true;

    core.stepper.stop();
    // The particle loop is cancelled here and nowhere else.
    core.field_active = false;
    core.drag.cancel(&mut core.bodies);
    core.timeline.schedule_exit(elapsed_ms);

    console_log!("intro: entering site after {} frames", core.frame);
    true
}

pub(super) fn poll_cues(core: &mut IntroCore, elapsed_ms: f64) -> &[Cue] {
    core.cue_buffer.clear();
    core.timeline.poll(elapsed_ms, &mut core.cue_buffer);
    &core.cue_buffer
}
