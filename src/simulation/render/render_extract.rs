use crate::particle_field::Link;
use crate::rigid_body::{BodyId, SimulatedBody};

use super::IntroCore;

/// Floats per body: id, left, top, rotation (deg), dragging (0/1)
pub const BODY_STRIDE: usize = 5;
/// Floats per particle: x, y, radius, alpha
pub const PARTICLE_STRIDE: usize = 4;
/// Floats per link: x1, y1, x2, y2, alpha
pub const LINK_STRIDE: usize = 5;

/// Style values for one body's element
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyTransform {
    pub id: BodyId,
    pub left: f32,
    pub top: f32,
    /// Degrees
    pub rotation: f32,
    pub dragging: bool,
}

impl BodyTransform {
    pub fn from_body(body: &SimulatedBody) -> Self {
        let top_left = body.top_left();
        Self {
            id: body.id,
            left: top_left.x,
            top: top_left.y,
            rotation: body.rotation,
            dragging: body.pinned,
        }
    }
}

pub(super) fn body_transforms(core: &IntroCore) -> impl Iterator<Item = BodyTransform> + '_ {
    core.bodies.bodies().iter().map(BodyTransform::from_body)
}

pub(super) fn collect_links(core: &mut IntroCore) -> &[Link] {
    core.field.collect_links(&mut core.render.link_scratch);
    &core.render.link_scratch
}

pub(super) fn extract_body_transforms(core: &mut IntroCore) -> &[f32] {
    let buf = &mut core.render.body_transforms;
    buf.clear();
    for body in core.bodies.bodies() {
        let t = BodyTransform::from_body(body);
        buf.extend_from_slice(&[
            t.id as f32,
            t.left,
            t.top,
            t.rotation,
            if t.dragging { 1.0 } else { 0.0 },
        ]);
    }
    &core.render.body_transforms
}

pub(super) fn extract_particles(core: &mut IntroCore) -> &[f32] {
    let amplitude = core.field.settings().pulse_amplitude;
    let buf = &mut core.render.particles;
    buf.clear();
    for p in core.field.particles() {
        buf.extend_from_slice(&[p.pos.x, p.pos.y, p.radius, p.pulse_alpha(amplitude)]);
    }
    &core.render.particles
}

pub(super) fn extract_links(core: &mut IntroCore) -> &[f32] {
    core.field.collect_links(&mut core.render.link_scratch);
    let buf = &mut core.render.links;
    buf.clear();
    for link in &core.render.link_scratch {
        buf.extend_from_slice(&[link.a.x, link.a.y, link.b.x, link.b.y, link.alpha]);
    }
    &core.render.links
}
