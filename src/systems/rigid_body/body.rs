use crate::core::Vec2;
use crate::domain::BodyCategory;

/// Index of a body in its body set; also indexes the owning element on the host side.
pub type BodyId = u32;

#[derive(Clone, Debug, PartialEq)]
pub struct SimulatedBody {
    // === Identity ===
    pub id: BodyId,
    pub category: BodyCategory,

    // === Physics State ===
    /// Visual center (CSS pixels)
    pub pos: Vec2,
    /// Pixels per frame
    pub velocity: Vec2,
    /// Degrees
    pub rotation: f32,
    /// Degrees per frame
    pub angular_vel: f32,
    pub mass: f32,
    /// Held by the pointer; excluded from free integration and displacement
    pub pinned: bool,

    // === Shape ===
    half_extents: Vec2,
}

impl SimulatedBody {
    pub fn new(id: BodyId, category: BodyCategory, center: Vec2, size: Vec2, mass: f32) -> Self {
        Self {
            id,
            category,
            pos: center,
            velocity: Vec2::ZERO,
            rotation: 0.0,
            angular_vel: 0.0,
            mass,
            pinned: false,
            half_extents: size * 0.5,
        }
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.half_extents
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.half_extents.x * 2.0
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.half_extents.y * 2.0
    }

    /// Shorter side; drives the contact distance
    #[inline]
    pub fn min_side(&self) -> f32 {
        self.width().min(self.height())
    }

    /// Top-left corner for `left`/`top` styling
    #[inline]
    pub fn top_left(&self) -> Vec2 {
        self.pos - self.half_extents
    }

    /// Point inside the unrotated box
    pub fn contains(&self, point: Vec2) -> bool {
        let d = point - self.pos;
        d.x.abs() <= self.half_extents.x && d.y.abs() <= self.half_extents.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_comes_from_size() {
        let body = SimulatedBody::new(0, BodyCategory::Badge, Vec2::new(50.0, 40.0), Vec2::new(20.0, 60.0), 1.5);
        assert_eq!(body.width(), 20.0);
        assert_eq!(body.height(), 60.0);
        assert_eq!(body.min_side(), 20.0);
        assert_eq!(body.top_left(), Vec2::new(40.0, 10.0));
    }

    #[test]
    fn contains_checks_the_box() {
        let body = SimulatedBody::new(0, BodyCategory::Icon, Vec2::new(0.0, 0.0), Vec2::new(10.0, 4.0), 1.0);
        assert!(body.contains(Vec2::new(5.0, 2.0)));
        assert!(!body.contains(Vec2::new(5.1, 0.0)));
        assert!(!body.contains(Vec2::new(0.0, -2.5)));
    }
}
