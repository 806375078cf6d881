use crate::core::{Rng, Vec2};
use crate::domain::{BodyCategory, CategoryTable};
use crate::rigid_body::{BodyId, SimulatedBody};

/// Rendered bounding box of one element, read once after layout
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyMeasurement {
    pub category: BodyCategory,
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl BodyMeasurement {
    pub fn new(category: BodyCategory, left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { category, left, top, width, height }
    }

    /// Finite box with a positive area (detached or `display: none` nodes measure 0x0)
    pub fn is_valid(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }
}

/// Build a body from its measurement, with category mass and a small random kick.
///
/// Returns `None` for malformed measurements so the caller can skip them.
pub fn materialize_body(
    id: BodyId,
    m: &BodyMeasurement,
    table: &CategoryTable,
    rng: &mut Rng,
) -> Option<SimulatedBody> {
    if !m.is_valid() {
        return None;
    }
    let cat = table.get(m.category);
    let mut body = SimulatedBody::new(id, m.category, m.center(), Vec2::new(m.width, m.height), cat.mass);
    body.velocity = Vec2::new(rng.jitter(cat.jitter), rng.jitter(cat.jitter));
    body.angular_vel = rng.jitter(cat.spin);
    Some(body)
}
