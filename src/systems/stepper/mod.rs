//! Physics Stepper - per-frame antigravity simulation
//!
//! Frame order:
//! 1. free-force integration (drift, pointer attraction, damping)
//! 2. wall containment with lossy bounce
//! 3. pairwise collision (impulse + positional separation), then re-containment
//!
//! Pinned bodies skip 1 and are never displaced by 2-3, but still push others.
//! Units are per frame; the constants are tuned for a display-synchronized loop.

mod boundary;
mod collision;
mod forces;
mod state;

pub use boundary::{clamp_inside, contain};
pub use collision::{contact_distance, resolve_all, resolve_pair, Contact, PairStats};
pub use forces::{integrate_free, pointer_attraction};
pub use state::StepperState;

use crate::core::{Vec2, Viewport};
use crate::domain::PhysicsSettings;
use crate::rigid_body::SimulatedBody;

/// What one `step` did
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// False when the stepper was not running and the frame was a no-op
    pub advanced: bool,
    pub wall_hits: u32,
    pub pairs: PairStats,
}

pub struct PhysicsStepper {
    state: StepperState,
    settings: PhysicsSettings,
}

impl PhysicsStepper {
    pub fn new(settings: PhysicsSettings) -> Self {
        Self {
            state: StepperState::Idle,
            settings,
        }
    }

    pub fn state(&self) -> StepperState {
        self.state
    }

    pub fn settings(&self) -> &PhysicsSettings {
        &self.settings
    }

    /// Idle -> Running. No effect once stopped.
    pub fn activate(&mut self) -> bool {
        self.state.activate()
    }

    /// Terminal stop; later frames are no-ops.
    pub fn stop(&mut self) -> bool {
        self.state.stop()
    }

    /// Advance all bodies by one frame.
    ///
    /// A frame that arrives after `stop` (or before `activate`) changes nothing.
    pub fn step(&mut self, bodies: &mut [SimulatedBody], pointer: Option<Vec2>, viewport: Viewport) -> StepReport {
        if !self.state.is_running() {
            return StepReport::default();
        }

        let p = &self.settings;
        let mut wall_hits = 0u32;

        for body in bodies.iter_mut() {
            if body.pinned {
                continue;
            }
            integrate_free(body, pointer, p);
            if contain(body, viewport, p.restitution) {
                wall_hits += 1;
            }
        }

        let pairs = resolve_all(bodies, p);

        // Separation can push a body back over a wall.
        if pairs.contacts > 0 {
            for body in bodies.iter_mut() {
                clamp_inside(body, viewport);
            }
        }

        StepReport {
            advanced: true,
            wall_hits,
            pairs,
        }
    }
}
