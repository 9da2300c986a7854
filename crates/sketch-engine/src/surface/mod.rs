//! Draw surface: flat command buffers read by the host renderer, plus the
//! unit-to-pixel view transform.

mod canvas;
mod view;

pub use canvas::{Canvas, DiscInstance, SegmentInstance};
pub use view::View;
