use crate::domain::PhysicsSettings;
use crate::rigid_body::SimulatedBody;

/// Outcome of one pair test
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Contact {
    /// Not touching, both pinned, or coincident centers
    None,
    /// Overlapping but already separating: positional correction only
    Separated,
    /// Overlapping and approaching: impulse plus positional correction
    Impulse,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PairStats {
    pub pairs: u32,
    pub contacts: u32,
    pub impulses: u32,
}

/// Center distance below which two bodies touch.
///
/// Derived from each body's shorter side so wide badges do not collide early.
#[inline]
pub fn contact_distance(a: &SimulatedBody, b: &SimulatedBody, p: &PhysicsSettings) -> f32 {
    (a.min_side() + b.min_side()) / p.min_dist_divisor
}

/// Resolve one pair: mass-weighted impulse along the contact normal when the
/// bodies approach, then push them apart until they just touch.
///
/// Pinned bodies keep their velocity and position but still push the other body.
pub fn resolve_pair(a: &mut SimulatedBody, b: &mut SimulatedBody, p: &PhysicsSettings) -> Contact {
    if a.pinned && b.pinned {
        return Contact::None;
    }

    let delta = b.pos - a.pos;
    let dist = delta.length();
    let min_dist = contact_distance(a, b, p);
    // Coincident centers give no normal; skip rather than divide by zero.
    if dist <= 0.0 || dist >= min_dist {
        return Contact::None;
    }

    let normal = delta * (1.0 / dist);
    let approach = (a.velocity - b.velocity).dot(normal);

    let mut contact = Contact::Separated;
    if approach > 0.0 {
        let impulse = 2.0 * approach / (a.mass + b.mass) * p.impulse_scale;
        if !a.pinned {
            a.velocity -= normal * (impulse * b.mass);
        }
        if !b.pinned {
            b.velocity += normal * (impulse * a.mass);
        }
        contact = Contact::Impulse;
    }

    // A pinned partner does not move, so the free body takes the whole overlap.
    let overlap = min_dist - dist;
    let (share_a, share_b) = match (a.pinned, b.pinned) {
        (false, false) => (0.5, 0.5),
        (true, false) => (0.0, 1.0),
        (false, true) => (1.0, 0.0),
        (true, true) => (0.0, 0.0),
    };
    a.pos -= normal * (overlap * share_a);
    b.pos += normal * (overlap * share_b);

    contact
}

/// Every unordered pair once, O(n²).
pub fn resolve_all(bodies: &mut [SimulatedBody], p: &PhysicsSettings) -> PairStats {
    let mut stats = PairStats::default();
    for i in 0..bodies.len() {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            stats.pairs += 1;
            match resolve_pair(a, b, p) {
                Contact::None => {}
                Contact::Separated => stats.contacts += 1,
                Contact::Impulse => {
                    stats.contacts += 1;
                    stats.impulses += 1;
                }
            }
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vec2;
    use crate::domain::BodyCategory;

    fn square(x: f32, y: f32, mass: f32, vx: f32) -> SimulatedBody {
        let mut b = SimulatedBody::new(0, BodyCategory::Icon, Vec2::new(x, y), Vec2::new(50.0, 50.0), mass);
        b.velocity = Vec2::new(vx, 0.0);
        b
    }

    fn kinetic(bodies: &[&SimulatedBody]) -> f32 {
        bodies.iter().map(|b| 0.5 * b.mass * b.velocity.length_squared()).sum()
    }

    #[test]
    fn head_on_impulse_splits_by_inverse_mass() {
        let p = PhysicsSettings::default();
        // contact distance = (50 + 50) / 2.5 = 40; overlap by 10
        let mut light = square(0.0, 100.0, 1.0, 2.0);
        let mut heavy = square(30.0, 100.0, 3.0, -2.0);

        assert_eq!(resolve_pair(&mut light, &mut heavy, &p), Contact::Impulse);

        let dv_light = (light.velocity.x - 2.0).abs();
        let dv_heavy = (heavy.velocity.x + 2.0).abs();
        assert!((dv_light - 3.0 * dv_heavy).abs() < 1e-5);
        assert!(light.pos.distance(heavy.pos) >= 40.0 - 1e-4);
    }

    #[test]
    fn speed_sum_drops_by_at_least_restitution() {
        let p = PhysicsSettings::default();
        let mut a = square(0.0, 0.0, 1.0, 2.0);
        let mut b = square(30.0, 0.0, 3.0, -2.0);
        let before = a.velocity.length() + b.velocity.length();
        resolve_pair(&mut a, &mut b, &p);
        let after = a.velocity.length() + b.velocity.length();
        assert!(after <= before * p.restitution + 1e-5);
    }

    #[test]
    fn kinetic_energy_never_increases() {
        let p = PhysicsSettings::default();
        let cases = [
            (1.0, 3.0, 2.0, -2.0, 5.0),
            (3.0, 1.5, 0.5, -4.0, -7.0),
            (1.5, 1.5, 6.0, 0.0, 12.0),
            (1.0, 1.0, -1.0, -3.0, 0.0),
        ];
        for (ma, mb, va, vb, dy) in cases {
            let mut a = square(0.0, 0.0, ma, va);
            let mut b = square(25.0, dy, mb, vb);
            let before = kinetic(&[&a, &b]);
            resolve_pair(&mut a, &mut b, &p);
            let after = kinetic(&[&a, &b]);
            assert!(after <= before + 1e-5, "energy grew: {} -> {}", before, after);
        }
    }

    #[test]
    fn separating_overlap_is_only_pushed_apart() {
        let p = PhysicsSettings::default();
        let mut a = square(0.0, 0.0, 1.0, -1.0);
        let mut b = square(30.0, 0.0, 1.0, 1.0);
        assert_eq!(resolve_pair(&mut a, &mut b, &p), Contact::Separated);
        assert_eq!(a.velocity.x, -1.0);
        assert_eq!(b.velocity.x, 1.0);
        assert!((a.pos.x + 5.0).abs() < 1e-5);
        assert!((b.pos.x - 35.0).abs() < 1e-5);
    }

    #[test]
    fn pinned_body_pushes_but_does_not_move() {
        let p = PhysicsSettings::default();
        let mut held = square(0.0, 0.0, 1.0, 0.0);
        held.pinned = true;
        let mut free = square(30.0, 0.0, 1.0, -2.0);
        assert_eq!(resolve_pair(&mut held, &mut free, &p), Contact::Impulse);
        assert_eq!(held.pos, Vec2::new(0.0, 0.0));
        assert_eq!(held.velocity, Vec2::ZERO);
        assert!(free.velocity.x > -2.0);
        assert!((free.pos.x - 40.0).abs() < 1e-5);
    }

    #[test]
    fn two_pinned_bodies_are_skipped() {
        let p = PhysicsSettings::default();
        let mut a = square(0.0, 0.0, 1.0, 0.0);
        let mut b = square(10.0, 0.0, 1.0, 0.0);
        a.pinned = true;
        b.pinned = true;
        assert_eq!(resolve_pair(&mut a, &mut b, &p), Contact::None);
        assert_eq!(b.pos.x, 10.0);
    }

    #[test]
    fn coincident_centers_are_ignored() {
        let p = PhysicsSettings::default();
        let mut a = square(10.0, 10.0, 1.0, 1.0);
        let mut b = square(10.0, 10.0, 1.0, -1.0);
        assert_eq!(resolve_pair(&mut a, &mut b, &p), Contact::None);
        assert!(a.velocity.x.is_finite() && b.velocity.x.is_finite());
    }

    #[test]
    fn resolve_all_visits_each_pair_once() {
        let p = PhysicsSettings::default();
        let mut bodies = vec![
            square(0.0, 0.0, 1.0, 1.0),
            square(30.0, 0.0, 1.0, -1.0),
            square(500.0, 500.0, 1.0, 0.0),
            square(900.0, 0.0, 1.0, 0.0),
        ];
        let stats = resolve_all(&mut bodies, &p);
        assert_eq!(stats.pairs, 6);
        assert_eq!(stats.contacts, 1);
        assert_eq!(stats.impulses, 1);
    }
}
