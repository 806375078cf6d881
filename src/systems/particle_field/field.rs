use crate::core::{Rng, Vec2};
use crate::domain::FieldSettings;

use super::particle::Particle;

/// Line between two nearby particles
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: Vec2,
    pub b: Vec2,
    pub alpha: f32,
}

pub struct ParticleField {
    particles: Vec<Particle>,
    settings: FieldSettings,
}

impl ParticleField {
    pub fn new(settings: FieldSettings) -> Self {
        Self {
            particles: Vec::new(),
            settings,
        }
    }

    /// Field with explicit particles (used by tests and replays)
    pub fn from_particles(settings: FieldSettings, particles: Vec<Particle>) -> Self {
        Self { particles, settings }
    }

    /// How many particles a canvas of this size gets
    pub fn target_count(settings: &FieldSettings, width: f32, height: f32) -> usize {
        let by_area = (width.max(0.0) * height.max(0.0) / settings.area_per_particle).floor() as usize;
        by_area.min(settings.max_particles as usize)
    }

    /// Throw away all particles and scatter a fresh set over the canvas
    pub fn reinitialize(&mut self, width: f32, height: f32, rng: &mut Rng) {
        let count = Self::target_count(&self.settings, width, height);
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(Particle::spawn(rng, width, height, &self.settings));
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn settings(&self) -> &FieldSettings {
        &self.settings
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// One animation frame: pulse, pointer repulsion, damping, integration, wrap.
    pub fn advance_frame(&mut self, pointer: Option<Vec2>, width: f32, height: f32) {
        let s = &self.settings;
        let margin = s.wrap_margin;

        for p in self.particles.iter_mut() {
            p.phase += s.pulse_step;

            if let Some(ptr) = pointer {
                let away = p.pos - ptr;
                let dist = away.length();
                // Zero distance has no direction to push along.
                if dist > 0.0 && dist < s.repel_radius {
                    let force = (s.repel_radius - dist) / s.repel_radius * s.repel_strength;
                    p.velocity += away * (force / dist);
                }
            }

            p.velocity *= s.damping;
            p.pos += p.velocity;

            if p.pos.x < -margin {
                p.pos.x = width + margin;
            }
            if p.pos.x > width + margin {
                p.pos.x = -margin;
            }
            if p.pos.y < -margin {
                p.pos.y = height + margin;
            }
            if p.pos.y > height + margin {
                p.pos.y = -margin;
            }
        }
    }

    /// Collect a link for every pair closer than the link distance.
    ///
    /// Opacity falls off linearly from `link_alpha` at contact to zero at the threshold.
    pub fn collect_links(&self, out: &mut Vec<Link>) {
        out.clear();
        let max = self.settings.link_distance;
        let max2 = max * max;

        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let d2 = (a.pos - b.pos).length_squared();
                if d2 >= max2 {
                    continue;
                }
                let dist = d2.sqrt();
                out.push(Link {
                    a: a.pos,
                    b: b.pos,
                    alpha: (1.0 - dist / max) * self.settings.link_alpha,
                });
            }
        }
    }
}
