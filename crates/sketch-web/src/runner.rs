use sketch_engine::{
    Canvas, FrameClock, FrameLayout, InputEvent, InputQueue, SampleManifest, Sketch,
    SketchConfig, SketchContext, View,
};

/// Generic sketch runner that wires up the frame loop.
///
/// Each concrete sketch (e.g., `orbital-chimes`) creates a `thread_local!`
/// SketchRunner and exports free functions via `#[wasm_bindgen]`, because
/// wasm-bindgen cannot export generic structs directly.
pub struct SketchRunner<S: Sketch> {
    sketch: S,
    ctx: SketchContext,
    input: InputQueue,
    canvas: Canvas,
    clock: FrameClock,
    config: SketchConfig,
    layout: FrameLayout,
    view: View,
    initialized: bool,
    frame: u32,
    /// Flat buffer of note slots for host-side buffer reads.
    note_buffer: Vec<u8>,
}

impl<S: Sketch> SketchRunner<S> {
    pub fn new(sketch: S, seed: u64) -> Self {
        let config = sketch.config();
        let clock = FrameClock::new(config.fixed_dt, config.speed);
        let layout = FrameLayout::from_config(&config);
        let canvas = Canvas::new(config.max_discs, config.max_segments);
        let note_buffer = Vec::with_capacity(config.max_notes);
        let view = View::new(config.zoom);

        Self {
            sketch,
            ctx: SketchContext::new(seed),
            input: InputQueue::new(),
            canvas,
            clock,
            layout,
            view,
            config,
            initialized: false,
            frame: 0,
            note_buffer,
        }
    }

    /// Initialize the sketch. Call once after construction.
    pub fn init(&mut self) {
        self.sketch.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Hand a sample manifest to the sketch. Malformed JSON is logged and
    /// ignored; the sketch stays silent until a valid manifest arrives.
    pub fn load_samples(&mut self, json: &str) {
        match SampleManifest::from_json(json) {
            Ok(manifest) => self.sketch.load_samples(&manifest),
            Err(e) => log::warn!("sample manifest rejected: {e}"),
        }
    }

    /// Run one frame: fixed-step updates, then rebuild the draw buffers.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        let steps = self.clock.accumulate(dt);
        for _ in 0..steps {
            self.sketch.update(&mut self.ctx, &self.input);
        }

        // Drain input after update
        self.input.drain();

        self.canvas.clear();
        self.sketch.draw(&mut self.canvas);

        // Pack note events into the flat buffer, bounded by capacity
        self.note_buffer.clear();
        for note in self.ctx.notes.iter().take(self.layout.max_notes) {
            self.note_buffer.push(note.0 as u8);
        }
        self.ctx.events.truncate(self.layout.max_events);

        self.frame = self.frame.wrapping_add(1);
    }

    // ---- Pointer accessors for host-side buffer reads ----

    pub fn discs_ptr(&self) -> *const f32 {
        self.canvas.discs_ptr()
    }

    pub fn disc_count(&self) -> u32 {
        self.canvas.disc_count()
    }

    pub fn segments_ptr(&self) -> *const f32 {
        self.canvas.segments_ptr()
    }

    pub fn segment_count(&self) -> u32 {
        self.canvas.segment_count()
    }

    pub fn notes_ptr(&self) -> *const u8 {
        self.note_buffer.as_ptr()
    }

    pub fn notes_len(&self) -> u32 {
        self.note_buffer.len() as u32
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    // ---- Frame presentation (read by the host each frame) ----

    pub fn view_zoom(&self) -> f32 {
        self.view.zoom
    }

    pub fn fade_alpha(&self) -> f32 {
        self.config.fade
    }

    pub fn background_r(&self) -> f32 {
        self.config.background.r
    }

    pub fn background_g(&self) -> f32 {
        self.config.background.g
    }

    pub fn background_b(&self) -> f32 {
        self.config.background.b
    }

    pub fn frame_count(&self) -> u32 {
        self.frame
    }

    // ---- Capacity accessors (read by the host via wasm_bindgen exports) ----

    pub fn max_discs(&self) -> u32 {
        self.layout.max_discs as u32
    }

    pub fn max_segments(&self) -> u32 {
        self.layout.max_segments as u32
    }

    pub fn max_notes(&self) -> u32 {
        self.layout.max_notes as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
