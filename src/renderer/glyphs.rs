//! Embedded stroke font
//!
//! Each supported character maps to a fixed set of polylines in a unit
//! [-0.5, 0.5]² box. Characters without a glyph render as a box outline
//! placeholder; space renders nothing. Lookup is case-insensitive.

/// One polyline of a glyph, in glyph-local coordinates
pub type Stroke = &'static [[f32; 2]];

const GLYPH_N: &[Stroke] = &[
    &[[-0.5, -0.5], [-0.5, 0.5]],
    &[[-0.5, 0.5], [0.5, -0.5]],
    &[[0.5, -0.5], [0.5, 0.5]],
];
const GLYPH_A: &[Stroke] = &[
    &[[-0.5, -0.5], [0.0, 0.5]],
    &[[0.0, 0.5], [0.5, -0.5]],
    &[[-0.25, 0.0], [0.25, 0.0]],
];
const GLYPH_S: &[Stroke] = &[&[
    [0.5, -0.5],
    [-0.5, -0.5],
    [-0.5, 0.0],
    [0.5, 0.0],
    [0.5, 0.5],
    [-0.5, 0.5],
]];
const GLYPH_T: &[Stroke] = &[&[[-0.5, 0.5], [0.5, 0.5]], &[[0.0, 0.5], [0.0, -0.5]]];
const GLYPH_V: &[Stroke] = &[&[[-0.5, 0.5], [0.0, -0.5]], &[[0.0, -0.5], [0.5, 0.5]]];
const GLYPH_I: &[Stroke] = &[
    &[[-0.3, 0.5], [0.3, 0.5]],
    &[[0.0, 0.5], [0.0, -0.5]],
    &[[-0.3, -0.5], [0.3, -0.5]],
];
const GLYPH_C: &[Stroke] = &[&[[0.5, 0.5], [-0.5, 0.5], [-0.5, -0.5], [0.5, -0.5]]];
const GLYPH_E: &[Stroke] = &[
    &[[-0.5, -0.5], [-0.5, 0.5]],
    &[[-0.5, 0.5], [0.5, 0.5]],
    &[[-0.5, 0.0], [0.3, 0.0]],
    &[[-0.5, -0.5], [0.5, -0.5]],
];
const GLYPH_U: &[Stroke] = &[&[[-0.5, 0.5], [-0.5, -0.5], [0.5, -0.5], [0.5, 0.5]]];
const GLYPH_D: &[Stroke] = &[&[
    [-0.5, -0.5],
    [-0.5, 0.5],
    [0.3, 0.5],
    [0.5, 0.3],
    [0.5, -0.3],
    [0.3, -0.5],
    [-0.5, -0.5],
]];
const GLYPH_R: &[Stroke] = &[
    &[[-0.5, -0.5], [-0.5, 0.5]],
    &[[-0.5, 0.5], [0.3, 0.5], [0.5, 0.3], [0.5, 0.0], [-0.5, 0.0]],
    &[[0.0, 0.0], [0.5, -0.5]],
];
const GLYPH_O: &[Stroke] = &[&[
    [-0.5, -0.5],
    [-0.5, 0.5],
    [0.5, 0.5],
    [0.5, -0.5],
    [-0.5, -0.5],
]];
const GLYPH_J: &[Stroke] = &[
    &[[-0.5, 0.5], [0.5, 0.5]],
    &[[0.0, 0.5], [0.0, -0.3], [-0.3, -0.5], [-0.5, -0.3]],
];
const GLYPH_K: &[Stroke] = &[
    &[[-0.5, -0.5], [-0.5, 0.5]],
    &[[-0.5, 0.0], [0.5, 0.5]],
    &[[-0.5, 0.0], [0.5, -0.5]],
];
const GLYPH_P: &[Stroke] = &[&[
    [-0.5, -0.5],
    [-0.5, 0.5],
    [0.3, 0.5],
    [0.5, 0.3],
    [0.3, 0.0],
    [-0.5, 0.0],
]];
const GLYPH_L: &[Stroke] = &[&[[-0.5, 0.5], [-0.5, -0.5], [0.5, -0.5]]];
const GLYPH_M: &[Stroke] = &[
    &[[-0.5, -0.5], [-0.5, 0.5]],
    &[[-0.5, 0.5], [0.0, 0.0]],
    &[[0.0, 0.0], [0.5, 0.5]],
    &[[0.5, 0.5], [0.5, -0.5]],
];
const GLYPH_3: &[Stroke] = &[
    &[[-0.5, 0.5], [0.5, 0.5], [0.5, 0.0], [0.0, 0.0]],
    &[[0.0, 0.0], [0.5, 0.0], [0.5, -0.5], [-0.5, -0.5]],
];
const GLYPH_SPACE: &[Stroke] = &[];
/// Placeholder for characters outside the glyph set
const GLYPH_BOX: &[Stroke] = &[&[
    [-0.5, -0.5],
    [0.5, -0.5],
    [0.5, 0.5],
    [-0.5, 0.5],
    [-0.5, -0.5],
]];

/// Look up the stroke set for a character
pub fn strokes(c: char) -> &'static [Stroke] {
    match c.to_ascii_uppercase() {
        'N' => GLYPH_N,
        'A' => GLYPH_A,
        'S' => GLYPH_S,
        'T' => GLYPH_T,
        'V' => GLYPH_V,
        'I' => GLYPH_I,
        'C' => GLYPH_C,
        'E' => GLYPH_E,
        'U' => GLYPH_U,
        'D' => GLYPH_D,
        'R' => GLYPH_R,
        'O' => GLYPH_O,
        'J' => GLYPH_J,
        'K' => GLYPH_K,
        'P' => GLYPH_P,
        'L' => GLYPH_L,
        'M' => GLYPH_M,
        '3' => GLYPH_3,
        ' ' => GLYPH_SPACE,
        _ => GLYPH_BOX,
    }
}
