//! Scene state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::narrative::Narrative;
use crate::consts::*;
use crate::settings::Settings;
use crate::wrap_angle;

/// Simulation clock driving the day/night cycle
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    /// Accumulated simulation time. One full cycle per 1.0 elapsed.
    pub elapsed: f32,
    pub paused: bool,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            paused: false,
        }
    }

    /// Advance by a frame delta, scaled by the pacing constant. No-op while paused.
    pub fn advance(&mut self, dt: f32) {
        if !self.paused {
            self.elapsed += dt * TIME_SCALE;
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Jump to a fixed point in the cycle and resume if paused
    pub fn skip_to(&mut self, elapsed: f32) {
        self.elapsed = elapsed;
        self.paused = false;
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// The fish circling the oasis pool
#[derive(Debug, Clone, Copy)]
pub struct Fish {
    /// Orbit angle in radians, wrapped to [0, 2π)
    pub angle: f32,
    pub radius: f32,
    pub speed: f32,
}

impl Fish {
    pub fn new() -> Self {
        Self {
            angle: 0.0,
            radius: FISH_RADIUS,
            speed: FISH_SPEED,
        }
    }

    pub fn swim(&mut self, dt: f32) {
        self.angle = wrap_angle(self.angle + self.speed * dt);
    }
}

impl Default for Fish {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed star positions, scattered once at startup
#[derive(Debug, Clone)]
pub struct StarField {
    pub positions: Vec<Vec2>,
}

impl StarField {
    /// Scatter `count` stars in a horizontal band above the horizon.
    /// Deterministic for a given seed.
    pub fn generate(count: usize, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let positions = (0..count)
            .map(|_| {
                Vec2::new(
                    rng.random_range(-1.0..=1.0),
                    rng.random_range(0.2..=1.0),
                )
            })
            .collect();
        Self { positions }
    }
}

/// Complete scene state, owned and mutated by the single update step
#[derive(Debug, Clone)]
pub struct SceneState {
    pub clock: Clock,
    pub fish: Fish,
    pub stars: StarField,
    pub narrative: Narrative,
    /// Oasis grass visible
    pub grass: bool,
    /// Gradient blend on the centre pyramid: 0 = sand, 1 = red
    pub blend: f32,
    /// Set once the narrative sequence has run to completion
    pub exit_requested: bool,
}

impl SceneState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            clock: Clock::new(),
            fish: Fish::new(),
            stars: StarField::generate(settings.star_count, settings.star_seed),
            narrative: Narrative::new(settings.message.chars().count()),
            grass: settings.grass,
            blend: 0.0,
            exit_requested: false,
        }
    }
}
