//! Color palettes for sketches.
//!
//! A small curated set of five-color palettes in the spirit of the
//! ColourLovers top lists. Sketches pick one per run and shuffle it, so the
//! same palette yields different body colorings across seeds.

use crate::random::Rng;

/// RGBA color with f32 components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Rgba = Rgba::rgb(0.0, 0.0, 0.0);

    /// Create a color from RGBA components (0.0 - 1.0).
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a fully opaque color from a 0xRRGGBB literal.
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as f32 / 255.0,
            g: ((rgb >> 8) & 0xff) as f32 / 255.0,
            b: (rgb & 0xff) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// The same color with a different alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// Colors per palette.
pub const PALETTE_SIZE: usize = 5;

/// Curated five-color palettes.
pub const PALETTES: [[Rgba; PALETTE_SIZE]; 8] = [
    [
        Rgba::hex(0x69d2e7),
        Rgba::hex(0xa7dbd8),
        Rgba::hex(0xe0e4cc),
        Rgba::hex(0xf38630),
        Rgba::hex(0xfa6900),
    ],
    [
        Rgba::hex(0xfe4365),
        Rgba::hex(0xfc9d9a),
        Rgba::hex(0xf9cdad),
        Rgba::hex(0xc8c8a9),
        Rgba::hex(0x83af9b),
    ],
    [
        Rgba::hex(0xecd078),
        Rgba::hex(0xd95b43),
        Rgba::hex(0xc02942),
        Rgba::hex(0x542437),
        Rgba::hex(0x53777a),
    ],
    [
        Rgba::hex(0x556270),
        Rgba::hex(0x4ecdc4),
        Rgba::hex(0xc7f464),
        Rgba::hex(0xff6b6b),
        Rgba::hex(0xc44d58),
    ],
    [
        Rgba::hex(0x774f38),
        Rgba::hex(0xe08e79),
        Rgba::hex(0xf1d4af),
        Rgba::hex(0xece5ce),
        Rgba::hex(0xc5e0dc),
    ],
    [
        Rgba::hex(0xe8ddcb),
        Rgba::hex(0xcdb380),
        Rgba::hex(0x036564),
        Rgba::hex(0x033649),
        Rgba::hex(0x031634),
    ],
    [
        Rgba::hex(0x490a3d),
        Rgba::hex(0xbd1550),
        Rgba::hex(0xe97f02),
        Rgba::hex(0xf8ca00),
        Rgba::hex(0x8a9b0f),
    ],
    [
        Rgba::hex(0x594f4f),
        Rgba::hex(0x547980),
        Rgba::hex(0x45ada8),
        Rgba::hex(0x9de0ad),
        Rgba::hex(0xe5fcc2),
    ],
];

/// Pick a random palette and shuffle its colors.
pub fn random_palette(rng: &mut Rng) -> [Rgba; PALETTE_SIZE] {
    let mut palette = *rng.pick(&PALETTES);
    rng.shuffle(&mut palette);
    palette
}
