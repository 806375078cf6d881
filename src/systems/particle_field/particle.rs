use crate::core::{Rng, Vec2};
use crate::domain::FieldSettings;

/// A single background dot
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    /// Base opacity before pulsing
    pub alpha: f32,
    /// Pulse phase accumulator (radians)
    pub phase: f32,
}

impl Particle {
    /// Random particle somewhere inside a `width` x `height` canvas
    pub fn spawn(rng: &mut Rng, width: f32, height: f32, settings: &FieldSettings) -> Self {
        Self {
            pos: Vec2::new(rng.range(width), rng.range(height)),
            velocity: Vec2::new(
                rng.jitter(settings.initial_speed),
                rng.jitter(settings.initial_speed),
            ),
            radius: rng.range(settings.radius_spread) + settings.radius_min,
            alpha: rng.range(settings.alpha_spread) + settings.alpha_min,
            phase: rng.range(std::f32::consts::TAU),
        }
    }

    /// Current opacity including the pulse, never negative
    #[inline]
    pub fn pulse_alpha(&self, amplitude: f32) -> f32 {
        (self.alpha + self.phase.sin() * amplitude).max(0.0)
    }
}
