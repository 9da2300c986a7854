use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::palette::Rgba;

/// Per-disc render data written to a flat buffer for the host renderer.
/// Must match the TypeScript protocol: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct DiscInstance {
    /// X position in sketch units.
    pub x: f32,
    /// Y position in sketch units.
    pub y: f32,
    /// Radius in sketch units.
    pub radius: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// Padding to keep the 32-byte stride.
    pub _pad: f32,
}

impl DiscInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Per-segment render data: a stroked line between two points.
/// 8 floats = 32 bytes stride; line width is uniform per sketch.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct SegmentInstance {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub alpha: f32,
}

impl SegmentInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Frame command buffer: filled discs and stroked line segments, written by
/// the sketch each frame and read zero-copy by the host renderer.
///
/// Capacities are fixed at construction. Writes past capacity are dropped
/// and counted rather than reallocating mid-frame.
pub struct Canvas {
    discs: Vec<DiscInstance>,
    segments: Vec<SegmentInstance>,
    max_discs: usize,
    max_segments: usize,
    dropped: u32,
}

impl Canvas {
    pub fn new(max_discs: usize, max_segments: usize) -> Self {
        Self {
            discs: Vec::with_capacity(max_discs),
            segments: Vec::with_capacity(max_segments),
            max_discs,
            max_segments,
            dropped: 0,
        }
    }

    /// Queue a filled disc at `center`.
    pub fn fill_disc(&mut self, center: Vec2, radius: f32, color: Rgba, alpha: f32) {
        if self.discs.len() >= self.max_discs {
            if self.dropped == 0 {
                log::warn!("disc buffer full ({}), dropping commands", self.max_discs);
            }
            self.dropped += 1;
            return;
        }
        self.discs.push(DiscInstance {
            x: center.x,
            y: center.y,
            radius,
            alpha: color.a * alpha,
            r: color.r,
            g: color.g,
            b: color.b,
            _pad: 0.0,
        });
    }

    /// Queue a stroked line segment from `p1` to `p2`.
    pub fn stroke_line(&mut self, p1: Vec2, p2: Vec2, color: Rgba, alpha: f32) {
        if self.segments.len() >= self.max_segments {
            if self.dropped == 0 {
                log::warn!(
                    "segment buffer full ({}), dropping commands",
                    self.max_segments
                );
            }
            self.dropped += 1;
            return;
        }
        self.segments.push(SegmentInstance {
            x1: p1.x,
            y1: p1.y,
            x2: p2.x,
            y2: p2.y,
            r: color.r,
            g: color.g,
            b: color.b,
            alpha: color.a * alpha,
        });
    }

    /// Reset for a new frame. The dropped counter carries across frames.
    pub fn clear(&mut self) {
        self.discs.clear();
        self.segments.clear();
    }

    pub fn disc_count(&self) -> u32 {
        self.discs.len() as u32
    }

    pub fn segment_count(&self) -> u32 {
        self.segments.len() as u32
    }

    /// Commands dropped over the canvas lifetime due to full buffers.
    pub fn dropped_count(&self) -> u32 {
        self.dropped
    }

    /// Raw pointer to disc data for host-side buffer reads.
    pub fn discs_ptr(&self) -> *const f32 {
        self.discs.as_ptr() as *const f32
    }

    /// Raw pointer to segment data for host-side buffer reads.
    pub fn segments_ptr(&self) -> *const f32 {
        self.segments.as_ptr() as *const f32
    }
}
