use crate::core::Vec2;
use crate::domain::PhysicsSettings;
use crate::rigid_body::SimulatedBody;

/// Weak pull toward the pointer.
///
/// Only inside the (attract_min, attract_max) band; the dead zone keeps bodies
/// from collapsing onto the cursor. Magnitude falls off as 1/distance.
#[inline]
pub fn pointer_attraction(pos: Vec2, pointer: Vec2, p: &PhysicsSettings) -> Vec2 {
    let to_pointer = pointer - pos;
    let dist = to_pointer.length();
    if dist <= p.attract_min || dist >= p.attract_max || dist <= 0.0 {
        return Vec2::ZERO;
    }
    let force = p.attract_strength / (dist * p.attract_falloff);
    to_pointer * (force * p.interactivity / dist)
}

/// Drift, attraction, damping and integration for one free body.
///
/// Pinned bodies are left untouched.
pub fn integrate_free(body: &mut SimulatedBody, pointer: Option<Vec2>, p: &PhysicsSettings) {
    if body.pinned {
        return;
    }

    // Antigravity: y grows downward, so drift is negative.
    body.velocity.y -= p.drift;

    if let Some(ptr) = pointer {
        body.velocity += pointer_attraction(body.pos, ptr, p);
    }

    body.velocity *= p.damping;
    body.angular_vel *= p.angular_damping;
    body.pos += body.velocity;
    body.rotation += body.angular_vel;
}
