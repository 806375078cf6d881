use crate::core::Viewport;

use super::perf_stats::FrameStats;
use super::IntroCore;

/// Bodies are re-contained by the next frame; particles keep drifting and wrap
/// against the new edges.
pub(super) fn resize(core: &mut IntroCore, width: f32, height: f32) {
    core.viewport = Viewport::new(width, height);
}

pub(super) fn reseed_field(core: &mut IntroCore) {
    let vp = core.viewport;
    core.field.reinitialize(vp.width, vp.height, &mut core.rng);
}

pub(super) fn enable_perf_metrics(core: &mut IntroCore, enabled: bool) {
    core.perf_enabled = enabled;
    if !enabled {
        core.perf_stats.reset();
    }
}

pub(super) fn perf_stats(core: &IntroCore) -> FrameStats {
    core.perf_stats.clone()
}
