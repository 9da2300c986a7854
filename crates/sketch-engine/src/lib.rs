pub mod api;
pub mod assets;
pub mod bridge;
pub mod core;
pub mod input;
pub mod palette;
pub mod random;
pub mod surface;

// Re-export key types at crate root for convenience
pub use api::sketch::{Sketch, SketchConfig, SketchContext};
pub use api::types::{NoteEvent, SketchEvent};
pub use assets::{Note, NoteParseError, SampleBank, SampleManifest};
pub use bridge::layout::FrameLayout;
pub use core::clock::FrameClock;
pub use core::orbital::{NodeId, OrbitalBody, OrbitalSystem};
pub use input::queue::{InputEvent, InputQueue};
pub use palette::{random_palette, Rgba, PALETTES};
pub use random::Rng;
pub use surface::{Canvas, DiscInstance, SegmentInstance, View};
