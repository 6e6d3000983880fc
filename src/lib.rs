//! Desert Cycle - a procedural day/night desert diorama
//!
//! Core modules:
//! - `sim`: Deterministic scene simulation (clock, celestial cycle, narrative state machine)
//! - `renderer`: WebGPU rendering pipeline and procedural shape generation
//! - `settings`: Static configuration (window, message text, scene constants)

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Scene configuration constants
pub mod consts {
    /// Pacing factor applied to every clock advance. One full day/night
    /// cycle is 1.0 elapsed units, i.e. 10 wall-clock seconds.
    pub const TIME_SCALE: f32 = 0.1;
    /// Maximum frame delta fed to the simulation (stall protection)
    pub const MAX_FRAME_DT: f32 = 0.25;

    /// Elapsed value the skip command jumps to (early morning, sun just up)
    pub const SKIP_ELAPSED: f32 = 0.2;

    /// Narrative pacing rates, per second
    pub const ENTRANCE_RATE: f32 = 0.5;
    pub const TEXT_ALPHA_RATE: f32 = 0.5;
    pub const REVEAL_RATE: f32 = 0.3;
    pub const LETTER_CHASE_RATE: f32 = 2.0;
    /// Hold after the text has fully faded before the scene requests exit
    pub const CLOSE_DELAY: f32 = 2.0;

    /// Entrance cutout dimensions at full progress (pyramid-local units)
    pub const ENTRANCE_MAX_WIDTH: f32 = 0.2;
    pub const ENTRANCE_MAX_HEIGHT: f32 = 0.5;

    /// Fish orbit defaults
    pub const FISH_RADIUS: f32 = 0.12;
    pub const FISH_SPEED: f32 = 1.5;

    /// Gradient blend step applied per frame while A/D is held
    pub const BLEND_STEP: f32 = 0.02;

    /// Fan tessellation
    pub const OASIS_SEGMENTS: u32 = 100;
    pub const CIRCLE_SEGMENTS: u32 = 50;
    pub const GRASS_BLADES: u32 = 10;
}

/// Wrap an angle to [0, 2π)
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    use std::f32::consts::TAU;
    angle.rem_euclid(TAU)
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Linear RGBA interpolation
#[inline]
pub fn lerp_color(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
        a[3] + (b[3] - a[3]) * t,
    ]
}
