//! Frame composition
//!
//! Builds the full back-to-front vertex list for one frame from the scene
//! state. Draw order: celestial bodies and stars, pyramids, oasis, fish,
//! narrative text, signature. There is no depth testing; later shapes
//! overlay earlier ones via alpha blending. The sky itself is the clear
//! color, not geometry.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::{CIRCLE_SEGMENTS, OASIS_SEGMENTS};
use crate::settings::Settings;
use crate::sim::{CelestialState, SceneState};

/// Text stroke width in scene units
const STROKE_WIDTH: f32 = 0.005;

/// Message layout
const MESSAGE_SCALE: f32 = 0.03;
const MESSAGE_SPACING: f32 = 0.03;
const MESSAGE_ORIGIN: Vec2 = Vec2::new(-0.45, 0.7);

/// Signature layout, bottom-left
const SIGNATURE_SCALE: f32 = 0.08;
const SIGNATURE_ORIGIN: Vec2 = Vec2::new(-0.95, -0.85);

/// Pyramid placements: (position, size)
const PYRAMIDS: [(Vec2, f32); 3] = [
    (Vec2::new(-0.8, -0.5), 0.4),
    (Vec2::new(-0.2, -0.5), 0.6),
    (Vec2::new(0.5, -0.5), 0.4),
];

const OASIS_CENTER: Vec2 = Vec2::new(0.6, -0.6);
const OASIS_RADIUS: f32 = 0.2;

const SUN_RADIUS: f32 = 0.1;
const SUN_GLOW_RADIUS: f32 = 0.16;
const MOON_RADIUS: f32 = 0.07;
const STAR_SIZE: f32 = 0.006;

/// One composed frame, borrowed from the composer's reused buffer
pub struct Frame<'a> {
    pub sky: [f32; 4],
    pub vertices: &'a [Vertex],
}

/// Owns the per-frame vertex list and the message/signature text
pub struct FrameComposer {
    vertices: Vec<Vertex>,
    message: Vec<char>,
    signature: Vec<char>,
}

impl FrameComposer {
    pub fn new(settings: &Settings) -> Self {
        Self {
            vertices: Vec::with_capacity(4096),
            message: settings.message.chars().collect(),
            signature: settings.signature.chars().collect(),
        }
    }

    /// Compose the frame for the current scene state. The vertex buffer is
    /// cleared and refilled in place; no per-frame allocation once warm.
    pub fn compose(&mut self, state: &SceneState) -> Frame<'_> {
        let celestial = CelestialState::at(state.clock.elapsed);
        let out = &mut self.vertices;
        out.clear();

        if celestial.is_night() {
            shapes::push_circle(out, celestial.moon, MOON_RADIUS, colors::MOON, CIRCLE_SEGMENTS);
            for star in &state.stars.positions {
                shapes::push_star(out, *star, STAR_SIZE, colors::STAR);
            }
        } else {
            shapes::push_circle(out, celestial.sun, SUN_GLOW_RADIUS, colors::SUN_GLOW, CIRCLE_SEGMENTS);
            shapes::push_circle(out, celestial.sun, SUN_RADIUS, colors::SUN, CIRCLE_SEGMENTS);
        }

        if state.narrative.entrances_open() {
            let progress = state.narrative.entrance_progress;
            for (i, (pos, size)) in PYRAMIDS.iter().enumerate() {
                let color = if i == 1 { colors::SAND } else { colors::SAND_LIGHT };
                shapes::push_pyramid_with_entrance(out, *pos, *size, progress, color);
            }
        } else {
            shapes::push_pyramid(out, PYRAMIDS[0].0, PYRAMIDS[0].1, colors::SAND_LIGHT);
            shapes::push_gradient_pyramid(out, PYRAMIDS[1].0, PYRAMIDS[1].1, state.blend);
            shapes::push_pyramid(out, PYRAMIDS[2].0, PYRAMIDS[2].1, colors::SAND_LIGHT);
        }

        shapes::push_circle(out, OASIS_CENTER, OASIS_RADIUS, colors::WATER, OASIS_SEGMENTS);
        if state.grass {
            shapes::push_grass(out, OASIS_CENTER, OASIS_RADIUS, colors::GRASS);
        }
        shapes::push_fish(out, OASIS_CENTER, state.fish.radius, state.fish.angle, colors::FISH);

        if state.narrative.text_visible() {
            let narrative = &state.narrative;
            let mut pos = MESSAGE_ORIGIN;
            for (c, letter_alpha) in self.message.iter().zip(&narrative.letter_alphas) {
                let alpha = narrative.text_alpha * letter_alpha;
                if alpha > 0.01 {
                    let color = [1.0, 1.0, 1.0, alpha];
                    shapes::push_glyph(out, *c, pos, MESSAGE_SCALE, STROKE_WIDTH, color);
                }
                pos.x += MESSAGE_SPACING;
            }
        }

        let mut pos = SIGNATURE_ORIGIN;
        for c in &self.signature {
            shapes::push_glyph(out, *c, pos, SIGNATURE_SCALE, STROKE_WIDTH, colors::TEXT);
            pos.x += SIGNATURE_SCALE * 1.1;
        }

        Frame {
            sky: celestial.sky,
            vertices: &self.vertices,
        }
    }
}
