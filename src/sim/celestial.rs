//! Celestial model
//!
//! Pure function of elapsed time. Sun and moon ride a unit circle centred
//! on the horizon origin, always diametrically opposite, so exactly one is
//! above the horizon except at the two crossing instants per cycle. Sky
//! colour tracks sun height.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec2;

use crate::lerp_color;

pub const SKY_DAY: [f32; 4] = [0.529, 0.808, 0.922, 1.0];
pub const SKY_NIGHT: [f32; 4] = [0.05, 0.05, 0.2, 1.0];

/// Derived per frame, never stored
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelestialState {
    /// Sun position on the unit circle
    pub sun: Vec2,
    /// Moon position, antipodal to the sun
    pub moon: Vec2,
    /// Current sky colour, night-to-day lerp on sun height
    pub sky: [f32; 4],
}

impl CelestialState {
    pub fn at(elapsed: f32) -> Self {
        let cycle = elapsed.rem_euclid(1.0);
        let angle = cycle * TAU;
        let sun = Vec2::new((angle - FRAC_PI_2).cos(), (angle - FRAC_PI_2).sin());
        let moon = Vec2::new((angle + FRAC_PI_2).cos(), (angle + FRAC_PI_2).sin());

        let t = ((sun.y + 1.0) / 2.0).clamp(0.0, 1.0);
        Self {
            sun,
            moon,
            sky: lerp_color(SKY_NIGHT, SKY_DAY, t),
        }
    }

    /// Stars and moon are drawn only at night
    pub fn is_night(&self) -> bool {
        self.sun.y <= 0.0
    }
}
