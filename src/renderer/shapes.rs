//! Procedural shape generation
//!
//! Pure generators that tessellate scene shapes into triangles, appending
//! to a caller-owned vertex list so one allocation serves the whole frame.
//! All generators stay well-formed at the degenerate parameter values 0
//! and 1: zero-area triangles are skipped rather than emitted.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec2;

use super::glyphs;
use super::vertex::{Vertex, colors};
use crate::consts::{ENTRANCE_MAX_HEIGHT, ENTRANCE_MAX_WIDTH, GRASS_BLADES};
use crate::{lerp_color, polar_to_cartesian};

#[inline]
fn push_tri(out: &mut Vec<Vertex>, a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) {
    out.push(Vertex::new(a.x, a.y, color));
    out.push(Vertex::new(b.x, b.y, color));
    out.push(Vertex::new(c.x, c.y, color));
}

#[inline]
fn push_quad(out: &mut Vec<Vertex>, corners: [Vec2; 4], color: [f32; 4]) {
    push_tri(out, corners[0], corners[1], corners[2], color);
    push_tri(out, corners[0], corners[2], corners[3], color);
}

/// Filled circle as a fan of triangles
pub fn push_circle(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: [f32; 4], segments: u32) {
    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;
        push_tri(
            out,
            center,
            center + polar_to_cartesian(radius, theta1),
            center + polar_to_cartesian(radius, theta2),
            color,
        );
    }
}

/// Plain pyramid: the unit triangle (0,0) (0.5,1) (1,0), scaled and placed
pub fn push_pyramid(out: &mut Vec<Vertex>, pos: Vec2, size: f32, color: [f32; 4]) {
    push_tri(
        out,
        pos,
        pos + Vec2::new(0.5, 1.0) * size,
        pos + Vec2::new(1.0, 0.0) * size,
        color,
    );
}

/// Height of the unit pyramid silhouette at local x
#[inline]
fn pyramid_edge(x: f32) -> f32 {
    if x <= 0.5 { 2.0 * x } else { 2.0 * (1.0 - x) }
}

/// Centre pyramid with the user-driven sand-to-red sweep. The per-fragment
/// factor clamp(blend - x, 0, 1) is piecewise linear in x, so vertical
/// stripes with per-vertex colors reproduce it closely.
pub fn push_gradient_pyramid(out: &mut Vec<Vertex>, pos: Vec2, size: f32, blend: f32) {
    const STRIPES: u32 = 16;

    let color_at = |x: f32| {
        let t = (blend - x).clamp(0.0, 1.0);
        lerp_color(colors::SAND, colors::SAND_RED, t)
    };
    let at = |x: f32, y: f32| pos + Vec2::new(x, y) * size;

    for i in 0..STRIPES {
        let x0 = i as f32 / STRIPES as f32;
        let x1 = (i + 1) as f32 / STRIPES as f32;
        let h0 = pyramid_edge(x0);
        let h1 = pyramid_edge(x1);
        let c0 = color_at(x0);
        let c1 = color_at(x1);

        // Trapezoid slice under the silhouette; the end slices collapse to
        // single triangles because one side has zero height.
        if h1 > 0.0 {
            out.push(Vertex::new(at(x0, 0.0).x, at(x0, 0.0).y, c0));
            out.push(Vertex::new(at(x1, 0.0).x, at(x1, 0.0).y, c1));
            out.push(Vertex::new(at(x1, h1).x, at(x1, h1).y, c1));
        }
        if h0 > 0.0 {
            out.push(Vertex::new(at(x0, 0.0).x, at(x0, 0.0).y, c0));
            out.push(Vertex::new(at(x1, h1).x, at(x1, h1).y, c1));
            out.push(Vertex::new(at(x0, h0).x, at(x0, h0).y, c0));
        }
    }
}

/// Pyramid silhouette with a growing entrance cutout.
///
/// The silhouette is built as two partial shapes around the gap; the gap
/// itself is overdrawn in the void color. At progress 0 the cutout has zero
/// area and the silhouette is identical to the plain pyramid.
pub fn push_pyramid_with_entrance(
    out: &mut Vec<Vertex>,
    pos: Vec2,
    size: f32,
    progress: f32,
    color: [f32; 4],
) {
    let progress = progress.clamp(0.0, 1.0);
    let half_w = ENTRANCE_MAX_WIDTH * progress / 2.0;
    let h = ENTRANCE_MAX_HEIGHT * progress;
    let at = |x: f32, y: f32| pos + Vec2::new(x, y) * size;

    // Base wedges either side of the gap (zero area while closed)
    if progress > 0.0 {
        push_tri(out, at(0.0, 0.0), at(0.5 - half_w, 0.0), at(0.5, h), color);
        push_tri(out, at(0.5 + half_w, 0.0), at(1.0, 0.0), at(0.5, h), color);
    }
    // Upper halves meeting at the apex
    push_tri(out, at(0.5, h), at(0.5, 1.0), at(0.0, 0.0), color);
    push_tri(out, at(0.5, h), at(1.0, 0.0), at(0.5, 1.0), color);

    if progress > 0.0 {
        push_quad(
            out,
            [
                at(0.5 - half_w, 0.0),
                at(0.5 + half_w, 0.0),
                at(0.5 + half_w, h),
                at(0.5 - half_w, h),
            ],
            colors::ENTRANCE_VOID,
        );
    }
}

/// Grass blades around the oasis rim, one quad each, pointing outward
pub fn push_grass(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: [f32; 4]) {
    let blade_width = radius / 10.0;
    let blade_height = 0.05;

    for i in 0..GRASS_BLADES {
        let angle = i as f32 * 2.0 * PI / GRASS_BLADES as f32;
        let root = center + polar_to_cartesian(radius, angle);
        // Local +y becomes the outward radial direction
        let rot = Vec2::from_angle(angle - FRAC_PI_2);

        let corners = [
            Vec2::new(-0.5 * blade_width, 0.0),
            Vec2::new(0.5 * blade_width, 0.0),
            Vec2::new(0.5 * blade_width, blade_height),
            Vec2::new(-0.5 * blade_width, blade_height),
        ]
        .map(|c| root + rot.rotate(c));
        push_quad(out, corners, color);
    }
}

const FISH_BODY: [[f32; 2]; 3] = [[0.0, 0.04], [-0.03, -0.02], [0.03, -0.02]];
const FISH_TAIL: [[f32; 2]; 3] = [[-0.03, 0.015], [-0.06, -0.02], [-0.03, -0.05]];

/// Fish at its instantaneous orbit position, nose leading the orbit
pub fn push_fish(out: &mut Vec<Vertex>, center: Vec2, orbit_radius: f32, angle: f32, color: [f32; 4]) {
    let fish_pos = center + polar_to_cartesian(orbit_radius, angle);
    let rot = Vec2::from_angle(angle + FRAC_PI_2);

    for tri in [FISH_BODY, FISH_TAIL] {
        let [a, b, c] = tri.map(|[x, y]| fish_pos + rot.rotate(Vec2::new(x, y)));
        push_tri(out, a, b, c, color);
    }
}

/// Polyline as a strip of thin quads. Zero-length segments are skipped.
pub fn push_polyline(out: &mut Vec<Vertex>, points: &[Vec2], width: f32, color: [f32; 4]) {
    let half = width / 2.0;
    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let dir = b - a;
        if dir.length_squared() < 1e-12 {
            continue;
        }
        let perp = dir.normalize().perp() * half;
        push_quad(out, [a + perp, a - perp, b - perp, b + perp], color);
    }
}

/// One character of the stroke font, scaled and placed
pub fn push_glyph(out: &mut Vec<Vertex>, c: char, pos: Vec2, scale: f32, width: f32, color: [f32; 4]) {
    for stroke in glyphs::strokes(c) {
        let points: Vec<Vec2> = stroke
            .iter()
            .map(|[x, y]| pos + Vec2::new(*x, *y) * scale)
            .collect();
        push_polyline(out, &points, width, color);
    }
}

/// A star as a tiny screen-space quad
pub fn push_star(out: &mut Vec<Vertex>, pos: Vec2, size: f32, color: [f32; 4]) {
    let half = size / 2.0;
    push_quad(
        out,
        [
            pos + Vec2::new(-half, -half),
            pos + Vec2::new(half, -half),
            pos + Vec2::new(half, half),
            pos + Vec2::new(-half, half),
        ],
        color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Total unsigned area of a triangle list
    fn area(vertices: &[Vertex]) -> f32 {
        vertices
            .chunks_exact(3)
            .map(|t| {
                let a = Vec2::from(t[0].position);
                let b = Vec2::from(t[1].position);
                let c = Vec2::from(t[2].position);
                (b - a).perp_dot(c - a).abs() / 2.0
            })
            .sum()
    }

    fn has_zero_area_tri(vertices: &[Vertex]) -> bool {
        vertices.chunks_exact(3).any(|t| {
            let a = Vec2::from(t[0].position);
            let b = Vec2::from(t[1].position);
            let c = Vec2::from(t[2].position);
            (b - a).perp_dot(c - a).abs() < 1e-9
        })
    }

    #[test]
    fn test_circle_stays_on_radius() {
        let mut out = Vec::new();
        push_circle(&mut out, Vec2::new(0.3, -0.2), 0.1, colors::SUN, 50);
        assert_eq!(out.len(), 50 * 3);
        for v in &out {
            let d = (Vec2::from(v.position) - Vec2::new(0.3, -0.2)).length();
            assert!(d <= 0.1 + 1e-6);
        }
        // Fan of a unit-fraction circle approaches pi*r^2
        assert!((area(&out) - PI * 0.1 * 0.1).abs() < 0.001);
    }

    #[test]
    fn test_closed_entrance_matches_plain_silhouette() {
        let mut plain = Vec::new();
        push_pyramid(&mut plain, Vec2::new(-0.2, -0.5), 0.6, colors::SAND);

        let mut closed = Vec::new();
        push_pyramid_with_entrance(&mut closed, Vec2::new(-0.2, -0.5), 0.6, 0.0, colors::SAND);

        // Same covered area, no void overlay, nothing degenerate
        assert!((area(&plain) - area(&closed)).abs() < 1e-6);
        assert!(closed.iter().all(|v| v.color == colors::SAND));
        assert!(!has_zero_area_tri(&closed));
    }

    #[test]
    fn test_open_entrance_carves_expected_gap() {
        let mut out = Vec::new();
        push_pyramid_with_entrance(&mut out, Vec2::ZERO, 1.0, 1.0, colors::SAND);
        assert!(!has_zero_area_tri(&out));

        let (silhouette, void): (Vec<Vertex>, Vec<Vertex>) =
            out.iter().copied().partition(|v| v.color == colors::SAND);
        // Full pyramid is 0.5; the gap between the wedges removes w*h/2
        let gap = ENTRANCE_MAX_WIDTH * ENTRANCE_MAX_HEIGHT / 2.0;
        assert!((area(&silhouette) - (0.5 - gap)).abs() < 1e-5);
        // Void quad covers the full cutout rectangle
        assert!((area(&void) - ENTRANCE_MAX_WIDTH * ENTRANCE_MAX_HEIGHT).abs() < 1e-5);
    }

    #[test]
    fn test_gradient_endpoints() {
        let mut sand = Vec::new();
        push_gradient_pyramid(&mut sand, Vec2::ZERO, 1.0, 0.0);
        assert!(sand.iter().all(|v| v.color == colors::SAND));
        assert!((area(&sand) - 0.5).abs() < 1e-5);
        assert!(!has_zero_area_tri(&sand));

        let mut swept = Vec::new();
        push_gradient_pyramid(&mut swept, Vec2::ZERO, 1.0, 1.0);
        // Left edge fully red, right edge still sand
        let left = swept.iter().find(|v| v.position[0] == 0.0).unwrap();
        let right = swept.iter().find(|v| v.position[0] == 1.0).unwrap();
        assert_eq!(left.color, colors::SAND_RED);
        assert_eq!(right.color, colors::SAND);
    }

    #[test]
    fn test_grass_blade_count() {
        let mut out = Vec::new();
        push_grass(&mut out, Vec2::new(0.6, -0.6), 0.2, colors::GRASS);
        assert_eq!(out.len(), GRASS_BLADES as usize * 6);
    }

    #[test]
    fn test_fish_orbits_the_center() {
        let center = Vec2::new(0.6, -0.6);
        for angle in [0.0_f32, 1.0, 2.5, 6.0] {
            let mut out = Vec::new();
            push_fish(&mut out, center, 0.12, angle, colors::FISH);
            assert_eq!(out.len(), 6);
            for v in &out {
                let d = (Vec2::from(v.position) - center).length();
                // Body extents are small relative to the orbit radius
                assert!(d < 0.12 + 0.08 && d > 0.12 - 0.08);
            }
        }
    }

    #[test]
    fn test_polyline_skips_degenerate_segments() {
        let mut out = Vec::new();
        let p = Vec2::new(0.1, 0.1);
        push_polyline(&mut out, &[p, p], 0.01, colors::TEXT);
        assert!(out.is_empty());

        push_polyline(&mut out, &[p, p, Vec2::new(0.2, 0.1)], 0.01, colors::TEXT);
        assert_eq!(out.len(), 6);
    }

    #[test]
    fn test_glyph_emits_strokes() {
        let mut out = Vec::new();
        push_glyph(&mut out, 'N', Vec2::ZERO, 0.03, 0.004, colors::TEXT);
        // Three strokes of one segment each
        assert_eq!(out.len(), 3 * 6);

        out.clear();
        push_glyph(&mut out, ' ', Vec2::ZERO, 0.03, 0.004, colors::TEXT);
        assert!(out.is_empty());
    }
}
