use crate::core::Viewport;
use crate::rigid_body::SimulatedBody;

/// Wall bounce: clamp the box inside the viewport and reflect the crossing
/// velocity component, keeping `restitution` of it.
///
/// Returns true if any wall was hit. Pinned bodies are skipped.
pub fn contain(body: &mut SimulatedBody, viewport: Viewport, restitution: f32) -> bool {
    if body.pinned {
        return false;
    }
    let half = body.half_extents();
    let mut hit = false;

    if body.pos.x - half.x < 0.0 {
        body.pos.x = half.x;
        body.velocity.x *= -restitution;
        hit = true;
    }
    if body.pos.x + half.x > viewport.width {
        body.pos.x = viewport.width - half.x;
        body.velocity.x *= -restitution;
        hit = true;
    }
    if body.pos.y - half.y < 0.0 {
        body.pos.y = half.y;
        body.velocity.y *= -restitution;
        hit = true;
    }
    if body.pos.y + half.y > viewport.height {
        body.pos.y = viewport.height - half.y;
        body.velocity.y *= -restitution;
        hit = true;
    }
    hit
}

/// Position-only containment, used after collision separation.
pub fn clamp_inside(body: &mut SimulatedBody, viewport: Viewport) {
    if body.pinned {
        return;
    }
    let half = body.half_extents();
    body.pos.x = clamp_axis(body.pos.x, half.x, viewport.width);
    body.pos.y = clamp_axis(body.pos.y, half.y, viewport.height);
}

/// Same precedence as `contain`: a box wider than the viewport ends at the far edge.
#[inline]
fn clamp_axis(pos: f32, half: f32, extent: f32) -> f32 {
    let mut p = pos;
    if p - half < 0.0 {
        p = half;
    }
    if p + half > extent {
        p = extent - half;
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vec2;
    use crate::domain::BodyCategory;

    fn body(x: f32, y: f32, vx: f32, vy: f32) -> SimulatedBody {
        let mut b = SimulatedBody::new(0, BodyCategory::Letter, Vec2::new(x, y), Vec2::new(20.0, 30.0), 3.0);
        b.velocity = Vec2::new(vx, vy);
        b
    }

    #[test]
    fn left_wall_clamps_and_bounces() {
        let vp = Viewport::new(400.0, 300.0);
        let mut b = body(5.0, 150.0, -2.0, 0.0);
        assert!(contain(&mut b, vp, 0.6));
        assert_eq!(b.pos.x, 10.0);
        assert!((b.velocity.x - 1.2).abs() < 1e-6);
    }

    #[test]
    fn bottom_wall_clamps_and_bounces() {
        let vp = Viewport::new(400.0, 300.0);
        let mut b = body(200.0, 295.0, 0.0, 5.0);
        assert!(contain(&mut b, vp, 0.6));
        assert_eq!(b.pos.y, 285.0);
        assert!((b.velocity.y + 3.0).abs() < 1e-6);
    }

    #[test]
    fn inside_body_is_untouched() {
        let vp = Viewport::new(400.0, 300.0);
        let mut b = body(200.0, 150.0, 1.0, 1.0);
        let before = b.clone();
        assert!(!contain(&mut b, vp, 0.6));
        assert_eq!(b, before);
    }

    #[test]
    fn pinned_body_may_sit_outside() {
        let vp = Viewport::new(400.0, 300.0);
        let mut b = body(-50.0, -50.0, 0.0, 0.0);
        b.pinned = true;
        assert!(!contain(&mut b, vp, 0.6));
        clamp_inside(&mut b, vp);
        assert_eq!(b.pos, Vec2::new(-50.0, -50.0));
    }

    #[test]
    fn clamp_inside_keeps_velocity() {
        let vp = Viewport::new(400.0, 300.0);
        let mut b = body(398.0, 150.0, 4.0, 0.0);
        clamp_inside(&mut b, vp);
        assert_eq!(b.pos.x, 390.0);
        assert_eq!(b.velocity.x, 4.0);
    }
}
