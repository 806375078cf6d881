//! Intro settings - every tunable constant of the overlay
//!
//! Loaded from JSON (camelCase keys, every field optional) and validated once.
//! Defaults reproduce the shipped look and feel.

use serde::{Deserialize, Serialize};

use super::category::BodyCategory;

/// Hard cap on `field.maxParticles`; links are collected pairwise every frame
pub const MAX_PARTICLES: u32 = 1000;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IntroSettings {
    pub field: FieldSettings,
    pub physics: PhysicsSettings,
    pub bodies: CategoryTable,
    pub drag: DragSettings,
    pub timeline: TimelineSettings,
    pub dom: DomSettings,
}

impl Default for IntroSettings {
    fn default() -> Self {
        Self {
            field: FieldSettings::default(),
            physics: PhysicsSettings::default(),
            bodies: CategoryTable::default(),
            drag: DragSettings::default(),
            timeline: TimelineSettings::default(),
            dom: DomSettings::default(),
        }
    }
}

impl IntroSettings {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let settings: IntroSettings = serde_json::from_str(json).map_err(|e| e.to_string())?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Reject values that would make the simulation gain energy or divide by zero.
    pub fn validate(&self) -> Result<(), String> {
        let f = &self.field;
        unit_interval("field.damping", f.damping, false)?;
        positive("field.areaPerParticle", f.area_per_particle)?;
        positive("field.repelRadius", f.repel_radius)?;
        positive("field.linkDistance", f.link_distance)?;
        non_negative("field.wrapMargin", f.wrap_margin)?;
        if f.max_particles > MAX_PARTICLES {
            return Err(format!("field.maxParticles must be at most {}, got {}", MAX_PARTICLES, f.max_particles));
        }
        for (name, v) in [
            ("field.initialSpeed", f.initial_speed),
            ("field.radiusMin", f.radius_min),
            ("field.radiusSpread", f.radius_spread),
            ("field.alphaMin", f.alpha_min),
            ("field.alphaSpread", f.alpha_spread),
            ("field.repelStrength", f.repel_strength),
            ("field.pulseStep", f.pulse_step),
            ("field.pulseAmplitude", f.pulse_amplitude),
            ("field.linkAlpha", f.link_alpha),
            ("field.linkWidth", f.link_width),
        ] {
            finite(name, v)?;
        }

        let p = &self.physics;
        unit_interval("physics.damping", p.damping, false)?;
        unit_interval("physics.angularDamping", p.angular_damping, false)?;
        unit_interval("physics.restitution", p.restitution, true)?;
        positive("physics.attractFalloff", p.attract_falloff)?;
        positive("physics.minDistDivisor", p.min_dist_divisor)?;
        non_negative("physics.impulseScale", p.impulse_scale)?;
        finite("physics.drift", p.drift)?;
        finite("physics.attractStrength", p.attract_strength)?;
        finite("physics.interactivity", p.interactivity)?;
        finite("physics.attractMax", p.attract_max)?;
        if p.attract_min < 0.0 || p.attract_min >= p.attract_max {
            return Err(format!(
                "physics.attractMin ({}) must be >= 0 and below attractMax ({})",
                p.attract_min, p.attract_max
            ));
        }

        for cat in BodyCategory::ALL {
            let c = self.bodies.get(cat);
            positive(&format!("bodies.{:?}.mass", cat), c.mass)?;
            non_negative(&format!("bodies.{:?}.jitter", cat), c.jitter)?;
            non_negative(&format!("bodies.{:?}.spin", cat), c.spin)?;
        }

        non_negative("drag.velocitySmoothing", self.drag.velocity_smoothing)?;
        non_negative("drag.releaseSpin", self.drag.release_spin)?;

        let t = &self.timeline;
        for (name, v) in [
            ("timeline.startDelayMs", t.start_delay_ms),
            ("timeline.letterDelayMs", t.letter_delay_ms),
            ("timeline.letterStaggerMs", t.letter_stagger_ms),
            ("timeline.taglineDelayMs", t.tagline_delay_ms),
            ("timeline.typeIntervalMs", t.type_interval_ms),
            ("timeline.ctaDelayMs", t.cta_delay_ms),
            ("timeline.enterButtonDelayMs", t.enter_button_delay_ms),
            ("timeline.antigravityDelayMs", t.antigravity_delay_ms),
            ("timeline.flashMs", t.flash_ms),
            ("timeline.exitMs", t.exit_ms),
        ] {
            if !(v.is_finite() && v >= 0.0) {
                return Err(format!("{} must be a finite non-negative duration, got {}", name, v));
            }
        }
        Ok(())
    }
}

/// Ambient star field
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldSettings {
    /// Upper bound on particle count
    pub max_particles: u32,
    /// Canvas area (px²) per particle below the cap
    pub area_per_particle: f32,
    /// Spread of the initial velocity components
    pub initial_speed: f32,
    pub radius_min: f32,
    pub radius_spread: f32,
    pub alpha_min: f32,
    pub alpha_spread: f32,
    /// Pointer repulsion radius
    pub repel_radius: f32,
    pub repel_strength: f32,
    /// Per-frame velocity retention
    pub damping: f32,
    /// Distance beyond the canvas edge before a particle wraps
    pub wrap_margin: f32,
    pub pulse_step: f32,
    pub pulse_amplitude: f32,
    pub link_distance: f32,
    /// Link opacity at zero distance
    pub link_alpha: f32,
    pub link_width: f32,
    pub link_rgb: [u8; 3],
    pub dot_rgb: [u8; 3],
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            max_particles: 80,
            area_per_particle: 15_000.0,
            initial_speed: 0.3,
            radius_min: 0.3,
            radius_spread: 1.8,
            alpha_min: 0.1,
            alpha_spread: 0.5,
            repel_radius: 150.0,
            repel_strength: 0.5,
            damping: 0.98,
            wrap_margin: 10.0,
            pulse_step: 0.015,
            pulse_amplitude: 0.15,
            link_distance: 120.0,
            link_alpha: 0.06,
            link_width: 0.5,
            link_rgb: [66, 153, 225],
            dot_rgb: [150, 200, 255],
        }
    }
}

/// Antigravity stepper constants (per-frame units)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhysicsSettings {
    /// Upward velocity nudge applied every frame
    pub drift: f32,
    /// Pointer dead zone radius
    pub attract_min: f32,
    /// Pointer attraction reach
    pub attract_max: f32,
    pub attract_strength: f32,
    pub attract_falloff: f32,
    /// Extra scale on the attraction so it stays a hint
    pub interactivity: f32,
    pub damping: f32,
    pub angular_damping: f32,
    /// Wall bounce velocity retention
    pub restitution: f32,
    /// Flat multiplier on the pairwise impulse
    pub impulse_scale: f32,
    /// Contact distance = (min side a + min side b) / divisor
    pub min_dist_divisor: f32,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            drift: 0.01,
            attract_min: 50.0,
            attract_max: 300.0,
            attract_strength: 0.02,
            attract_falloff: 0.01,
            interactivity: 0.05,
            damping: 0.997,
            angular_damping: 0.995,
            restitution: 0.6,
            impulse_scale: 0.5,
            min_dist_divisor: 2.5,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CategorySettings {
    pub mass: f32,
    /// Spread of the initial linear velocity components
    pub jitter: f32,
    /// Spread of the initial angular velocity (deg/frame)
    pub spin: f32,
}

impl Default for CategorySettings {
    fn default() -> Self {
        Self { mass: 1.0, jitter: 1.0, spin: 0.2 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CategoryTable {
    pub letter: CategorySettings,
    pub icon: CategorySettings,
    pub badge: CategorySettings,
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self {
            letter: CategorySettings { mass: 3.0, jitter: 1.5, spin: 0.3 },
            icon: CategorySettings { mass: 1.0, jitter: 2.0, spin: 0.8 },
            badge: CategorySettings { mass: 1.5, jitter: 1.0, spin: 0.2 },
        }
    }
}

impl CategoryTable {
    pub fn get(&self, category: BodyCategory) -> &CategorySettings {
        match category {
            BodyCategory::Letter => &self.letter,
            BodyCategory::Icon => &self.icon,
            BodyCategory::Badge => &self.badge,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DragSettings {
    /// Fraction of the last drag delta kept as velocity
    pub velocity_smoothing: f32,
    /// Spread of the angular kick on release (deg/frame)
    pub release_spin: f32,
}

impl Default for DragSettings {
    fn default() -> Self {
        Self { velocity_smoothing: 0.3, release_spin: 2.0 }
    }
}

/// Entrance choreography, all in milliseconds
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimelineSettings {
    pub start_delay_ms: f64,
    pub letter_delay_ms: f64,
    pub letter_stagger_ms: f64,
    pub tagline_delay_ms: f64,
    pub tagline_text: String,
    pub type_interval_ms: f64,
    pub cta_delay_ms: f64,
    pub enter_button_delay_ms: f64,
    pub antigravity_delay_ms: f64,
    pub flash_ms: f64,
    pub exit_ms: f64,
}

impl Default for TimelineSettings {
    fn default() -> Self {
        Self {
            start_delay_ms: 400.0,
            letter_delay_ms: 300.0,
            letter_stagger_ms: 200.0,
            tagline_delay_ms: 1200.0,
            tagline_text: "AMERICAN GLOBAL SECURITY".to_string(),
            type_interval_ms: 55.0,
            cta_delay_ms: 200.0,
            enter_button_delay_ms: 400.0,
            antigravity_delay_ms: 1200.0,
            flash_ms: 1600.0,
            exit_ms: 800.0,
        }
    }
}

/// Element ids and selectors the DOM driver binds to
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DomSettings {
    pub overlay_id: String,
    pub canvas_id: String,
    pub tagline_id: String,
    pub typed_id: String,
    pub subtitle_id: String,
    pub cta_group_id: String,
    pub enter_button_id: String,
    pub letter_selector: String,
    pub icon_selector: String,
    pub badge_selector: String,
    /// Page sections faded in once the overlay is hidden
    pub reveal_selector: String,
}

impl Default for DomSettings {
    fn default() -> Self {
        Self {
            overlay_id: "agOverlay".to_string(),
            canvas_id: "agCanvas".to_string(),
            tagline_id: "agTagline".to_string(),
            typed_id: "agTyped".to_string(),
            subtitle_id: "agSubtitle".to_string(),
            cta_group_id: "agCtaGroup".to_string(),
            enter_button_id: "agEnterBtn".to_string(),
            letter_selector: ".ag-letter".to_string(),
            icon_selector: ".ag-float-icon".to_string(),
            badge_selector: ".ag-badge-item".to_string(),
            reveal_selector: ".announcement-bar, .header, .hero, .stats, .services, .why-us, \
                              .industries, .coverage, .testimonials, .cta-banner, .contact, \
                              .footer, .floating-cta"
                .to_string(),
        }
    }
}

impl DomSettings {
    /// Selector matching any draggable element
    pub fn draggable_selector(&self) -> String {
        format!("{}, {}, {}", self.letter_selector, self.icon_selector, self.badge_selector)
    }
}

fn positive(name: &str, v: f32) -> Result<(), String> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(format!("{} must be positive, got {}", name, v))
    }
}

fn finite(name: &str, v: f32) -> Result<(), String> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(format!("{} must be finite, got {}", name, v))
    }
}

fn non_negative(name: &str, v: f32) -> Result<(), String> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(format!("{} must be non-negative, got {}", name, v))
    }
}

/// (0, 1] or [0, 1] depending on `allow_zero`
fn unit_interval(name: &str, v: f32, allow_zero: bool) -> Result<(), String> {
    let low_ok = if allow_zero { v >= 0.0 } else { v > 0.0 };
    if v.is_finite() && low_ok && v <= 1.0 {
        Ok(())
    } else {
        Err(format!("{} must lie in {}0, 1], got {}", name, if allow_zero { "[" } else { "(" }, v))
    }
}
