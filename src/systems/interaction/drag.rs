use crate::core::{Rng, Vec2};
use crate::domain::DragSettings;
use crate::rigid_body::BodyId;
use crate::rigid_body_system::BodySet;

#[derive(Clone, Copy, Debug, PartialEq)]
struct ActiveDrag {
    id: BodyId,
    /// Pointer minus body center at grab time
    offset: Vec2,
}

pub struct DragController {
    active: Option<ActiveDrag>,
    settings: DragSettings,
}

impl DragController {
    pub fn new(settings: DragSettings) -> Self {
        Self {
            active: None,
            settings,
        }
    }

    /// Body currently held, if any
    pub fn dragging(&self) -> Option<BodyId> {
        self.active.map(|d| d.id)
    }

    /// Grab `target` if it is a known body.
    ///
    /// Only one body can be held; a second press while dragging is ignored.
    /// Returns the grabbed body so the host can show its drag affordance.
    pub fn pointer_down(&mut self, bodies: &mut BodySet, pos: Vec2, target: Option<BodyId>) -> Option<BodyId> {
        if self.active.is_some() {
            return None;
        }
        let body = bodies.get_mut(target?)?;
        body.pinned = true;
        let grab = ActiveDrag {
            id: body.id,
            offset: pos - body.pos,
        };
        self.active = Some(grab);
        Some(grab.id)
    }

    /// Move the held body with the pointer, estimating velocity from the delta.
    ///
    /// Returns true if a body was moved.
    pub fn pointer_move(&mut self, bodies: &mut BodySet, pos: Vec2) -> bool {
        let Some(drag) = self.active else {
            return false;
        };
        let Some(body) = bodies.get_mut(drag.id) else {
            self.active = None;
            return false;
        };

        let target = pos - drag.offset;
        body.velocity = (target - body.pos) * self.settings.velocity_smoothing;
        body.pos = target;
        true
    }

    /// Let go: unpin, add release spin. Returns the released body.
    pub fn pointer_up(&mut self, bodies: &mut BodySet, rng: &mut Rng) -> Option<BodyId> {
        let drag = self.active.take()?;
        let body = bodies.get_mut(drag.id)?;
        body.pinned = false;
        body.angular_vel += rng.jitter(self.settings.release_spin);
        Some(drag.id)
    }

    /// Drop the drag without release spin, e.g. when the session ends mid-drag.
    pub fn cancel(&mut self, bodies: &mut BodySet) -> Option<BodyId> {
        let drag = self.active.take()?;
        if let Some(body) = bodies.get_mut(drag.id) {
            body.pinned = false;
        }
        Some(drag.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BodyCategory, CategoryTable};
    use crate::rigid_body_system::BodyMeasurement;

    fn two_bodies() -> BodySet {
        let mut set = BodySet::new();
        set.materialize(
            &[
                BodyMeasurement::new(BodyCategory::Letter, 75.0, 75.0, 50.0, 50.0),
                BodyMeasurement::new(BodyCategory::Icon, 300.0, 300.0, 40.0, 40.0),
            ],
            &CategoryTable::default(),
            &mut Rng::new(9),
        );
        set
    }

    #[test]
    fn drag_then_release_keeps_momentum_and_spins() {
        let mut set = two_bodies();
        let mut drag = DragController::new(DragSettings::default());
        let mut rng = Rng::new(1234);

        assert_eq!(drag.pointer_down(&mut set, Vec2::new(100.0, 100.0), Some(0)), Some(0));
        assert!(set.get(0).map(|b| b.pinned).unwrap_or(false));
        let spin_before = set.get(0).map(|b| b.angular_vel).unwrap_or_default();

        assert!(drag.pointer_move(&mut set, Vec2::new(150.0, 100.0)));
        let moved = set.get(0).cloned().expect("body 0 exists");
        assert_eq!(moved.pos, Vec2::new(150.0, 100.0));
        assert!((moved.velocity.x - 15.0).abs() < 1e-5);
        assert_eq!(moved.velocity.y, 0.0);

        assert_eq!(drag.pointer_up(&mut set, &mut rng), Some(0));
        let released = set.get(0).cloned().expect("body 0 exists");
        assert!(!released.pinned);
        assert!(released.velocity.x > 0.0);
        assert_ne!(released.angular_vel, spin_before);
        assert_eq!(drag.dragging(), None);
    }

    #[test]
    fn grab_offset_is_preserved() {
        let mut set = two_bodies();
        let mut drag = DragController::new(DragSettings::default());
        drag.pointer_down(&mut set, Vec2::new(110.0, 90.0), Some(0));
        drag.pointer_move(&mut set, Vec2::new(210.0, 190.0));
        assert_eq!(set.get(0).map(|b| b.pos), Some(Vec2::new(200.0, 200.0)));
    }

    #[test]
    fn second_press_is_ignored_while_dragging() {
        let mut set = two_bodies();
        let mut drag = DragController::new(DragSettings::default());
        drag.pointer_down(&mut set, Vec2::new(100.0, 100.0), Some(0));
        assert_eq!(drag.pointer_down(&mut set, Vec2::new(320.0, 320.0), Some(1)), None);
        assert_eq!(drag.dragging(), Some(0));
        assert!(!set.get(1).map(|b| b.pinned).unwrap_or(true));
    }

    #[test]
    fn cancel_unpins_without_spin() {
        let mut set = two_bodies();
        let mut drag = DragController::new(DragSettings::default());
        drag.pointer_down(&mut set, Vec2::new(100.0, 100.0), Some(0));
        let spin = set.get(0).map(|b| b.angular_vel);
        assert_eq!(drag.cancel(&mut set), Some(0));
        assert_eq!(set.get(0).map(|b| b.angular_vel), spin);
        assert!(!set.get(0).map(|b| b.pinned).unwrap_or(true));
        assert_eq!(drag.cancel(&mut set), None);
    }

    #[test]
    fn press_on_nothing_or_unknown_body_does_not_grab() {
        let mut set = two_bodies();
        let mut drag = DragController::new(DragSettings::default());
        assert_eq!(drag.pointer_down(&mut set, Vec2::new(0.0, 0.0), None), None);
        assert_eq!(drag.pointer_down(&mut set, Vec2::new(0.0, 0.0), Some(42)), None);
        assert!(!drag.pointer_move(&mut set, Vec2::new(10.0, 10.0)));
        assert_eq!(drag.pointer_up(&mut set, &mut Rng::new(1)), None);
    }
}
