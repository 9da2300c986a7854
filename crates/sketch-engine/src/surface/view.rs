use glam::Vec2;

/// Mapping from sketch unit space to pixel space.
///
/// Sketches draw in a zoom-scaled unit square centered on the origin; the
/// host canvas applies this transform when rendering. Mirrors the
/// `setTransform(zoom * w/2, 0, 0, zoom * h/2, w/2, h/2)` convention of the
/// 2D-canvas hosts this engine targets.
#[derive(Debug, Clone, Copy)]
pub struct View {
    /// Fraction of the half-viewport one sketch unit spans.
    pub zoom: f32,
    /// View center in sketch units.
    pub center: Vec2,
}

impl View {
    pub fn new(zoom: f32) -> Self {
        Self {
            zoom,
            center: Vec2::ZERO,
        }
    }

    /// Pixels per sketch unit for a given viewport, preserving aspect by
    /// fitting the shorter side.
    pub fn pixel_scale(&self, viewport_w: f32, viewport_h: f32) -> f32 {
        self.zoom * viewport_w.min(viewport_h) / 2.0
    }

    /// Map a point in sketch units to viewport pixels.
    pub fn to_pixels(&self, p: Vec2, viewport_w: f32, viewport_h: f32) -> Vec2 {
        let scale = self.pixel_scale(viewport_w, viewport_h);
        let origin = Vec2::new(viewport_w / 2.0, viewport_h / 2.0);
        origin + (p - self.center) * scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_maps_to_viewport_center() {
        let view = View::new(0.4);
        let p = view.to_pixels(Vec2::ZERO, 512.0, 512.0);
        assert_eq!(p, Vec2::new(256.0, 256.0));
    }

    #[test]
    fn unit_point_scales_with_zoom() {
        let view = View::new(0.5);
        let p = view.to_pixels(Vec2::new(1.0, 0.0), 512.0, 512.0);
        // 0.5 zoom: one unit = a quarter of the viewport
        assert_eq!(p, Vec2::new(256.0 + 128.0, 256.0));
    }

    #[test]
    fn non_square_viewport_fits_shorter_side() {
        let view = View::new(1.0);
        assert_eq!(view.pixel_scale(1024.0, 512.0), 256.0);
    }
}
