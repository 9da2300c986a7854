use crate::api::types::{NoteEvent, SketchEvent};
use crate::assets::SampleManifest;
use crate::input::queue::InputQueue;
use crate::palette::Rgba;
use crate::random::Rng;
use crate::surface::Canvas;

/// Configuration for one sketch, provided by the sketch itself.
#[derive(Debug, Clone)]
pub struct SketchConfig {
    /// Fixed timestep in scaled seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Time scale applied to wall-clock frame deltas (default: 1.0).
    pub speed: f32,
    /// View zoom: fraction of the half-viewport one sketch unit spans.
    pub zoom: f32,
    /// Background color painted by the host before each frame.
    pub background: Rgba,
    /// Background opacity per frame; below 1.0 leaves motion trails.
    pub fade: f32,
    /// Maximum disc instances per frame (default: 512).
    pub max_discs: usize,
    /// Maximum segment instances per frame (default: 512).
    pub max_segments: usize,
    /// Maximum note events per frame (default: 32).
    pub max_notes: usize,
    /// Maximum sketch events per frame (default: 32).
    pub max_events: usize,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            speed: 1.0,
            zoom: 0.5,
            background: Rgba::WHITE,
            fade: 1.0,
            max_discs: 512,
            max_segments: 512,
            max_notes: 32,
            max_events: 32,
        }
    }
}

/// The core contract every sketch fulfills.
///
/// A sketch is constructed with a per-run seed, builds its world once in
/// `init`, and is then driven by the runner: `update` once per fixed step,
/// `draw` once per frame.
pub trait Sketch {
    /// Return sketch configuration. Called once before init.
    fn config(&self) -> SketchConfig {
        SketchConfig::default()
    }

    /// Setup initial state from the context's seeded RNG.
    fn init(&mut self, ctx: &mut SketchContext);

    /// One fixed simulation step: advance state, react to input, emit
    /// note/sketch events.
    fn update(&mut self, ctx: &mut SketchContext, input: &InputQueue);

    /// Queue this frame's draw commands. Read-only with respect to state.
    fn draw(&self, canvas: &mut Canvas);

    /// Receive a sample manifest loaded by the host at setup.
    /// Sketches without audio ignore it.
    fn load_samples(&mut self, _manifest: &SampleManifest) {}
}

/// Mutable engine state passed to `Sketch::init` and `Sketch::update`.
pub struct SketchContext {
    /// Note triggers queued this frame.
    pub notes: Vec<NoteEvent>,
    /// Host-page events queued this frame.
    pub events: Vec<SketchEvent>,
    /// Per-run seeded generator; re-seeding it regenerates the sketch.
    pub rng: Rng,
}

impl SketchContext {
    pub fn new(seed: u64) -> Self {
        Self {
            notes: Vec::new(),
            events: Vec::new(),
            rng: Rng::new(seed),
        }
    }

    /// Queue a note event for the host sampler.
    pub fn emit_note(&mut self, note: NoteEvent) {
        self.notes.push(note);
    }

    /// Queue a sketch event for the host page.
    pub fn emit_event(&mut self, event: SketchEvent) {
        self.events.push(event);
    }

    /// Clear per-frame queues. Called by the runner at the top of a frame.
    pub fn clear_frame_data(&mut self) {
        self.notes.clear();
        self.events.clear();
    }
}
