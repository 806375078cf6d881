/// Lifecycle of the antigravity simulation.
///
/// `Idle -> Running` once when antigravity mode activates, `* -> Stopped` once
/// when the visitor enters the site. `Stopped` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StepperState {
    #[default]
    Idle,
    Running,
    Stopped,
}

impl StepperState {
    /// Returns true when this call performed the transition.
    pub fn activate(&mut self) -> bool {
        if *self == StepperState::Idle {
            *self = StepperState::Running;
            true
        } else {
            false
        }
    }

    /// Returns true when this call performed the transition.
    pub fn stop(&mut self) -> bool {
        if *self == StepperState::Stopped {
            false
        } else {
            *self = StepperState::Stopped;
            true
        }
    }

    #[inline]
    pub fn is_running(self) -> bool {
        self == StepperState::Running
    }

    /// Numeric id used across the wasm boundary
    pub fn id(self) -> u8 {
        match self {
            StepperState::Idle => 0,
            StepperState::Running => 1,
            StepperState::Stopped => 2,
        }
    }
}
