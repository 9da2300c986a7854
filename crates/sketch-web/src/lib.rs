pub mod runner;

pub use runner::SketchRunner;

/// Generate all `#[wasm_bindgen]` exports for a sketch.
///
/// Generates the `thread_local!` storage for the SketchRunner, a
/// `with_runner()` helper, and the full set of wasm-bindgen exports
/// (sketch_init, sketch_tick, input handlers, buffer accessors), so each
/// sketch crate stays a two-line lib.rs.
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use sketch_engine::*;
///
/// mod sketch;
/// use sketch::MySketch;
///
/// sketch_web::export_sketch!(MySketch, "my-sketch");
/// ```
///
/// # Arguments
///
/// - `$sketch_type`: the sketch struct; must implement
///   `sketch_engine::Sketch` and provide `fn new(seed: u64) -> Self`
/// - `$sketch_name`: a string literal used in the initialization log message
#[macro_export]
macro_rules! export_sketch {
    ($sketch_type:ty, $sketch_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::SketchRunner<$sketch_type>>> =
                RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::SketchRunner<$sketch_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow
                    .as_mut()
                    .expect("Sketch not initialized. Call sketch_init() first.");
                f(runner)
            })
        }

        /// Create the sketch with a per-run seed and build its world.
        #[wasm_bindgen]
        pub fn sketch_init(seed: u32) {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let sketch = <$sketch_type>::new(seed as u64);
            let runner = $crate::SketchRunner::new(sketch, seed as u64);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized with seed {}", $sketch_name, seed);
        }

        #[wasm_bindgen]
        pub fn sketch_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn sketch_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn sketch_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn sketch_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn sketch_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        #[wasm_bindgen]
        pub fn sketch_load_samples(json: &str) {
            with_runner(|r| r.load_samples(json));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_discs_ptr() -> *const f32 {
            with_runner(|r| r.discs_ptr())
        }

        #[wasm_bindgen]
        pub fn get_disc_count() -> u32 {
            with_runner(|r| r.disc_count())
        }

        #[wasm_bindgen]
        pub fn get_segments_ptr() -> *const f32 {
            with_runner(|r| r.segments_ptr())
        }

        #[wasm_bindgen]
        pub fn get_segment_count() -> u32 {
            with_runner(|r| r.segment_count())
        }

        #[wasm_bindgen]
        pub fn get_notes_ptr() -> *const u8 {
            with_runner(|r| r.notes_ptr())
        }

        #[wasm_bindgen]
        pub fn get_notes_len() -> u32 {
            with_runner(|r| r.notes_len())
        }

        #[wasm_bindgen]
        pub fn get_events_ptr() -> *const f32 {
            with_runner(|r| r.events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_events_len() -> u32 {
            with_runner(|r| r.events_len())
        }

        // ---- Frame presentation ----

        #[wasm_bindgen]
        pub fn get_view_zoom() -> f32 {
            with_runner(|r| r.view_zoom())
        }

        #[wasm_bindgen]
        pub fn get_fade_alpha() -> f32 {
            with_runner(|r| r.fade_alpha())
        }

        #[wasm_bindgen]
        pub fn get_background_r() -> f32 {
            with_runner(|r| r.background_r())
        }

        #[wasm_bindgen]
        pub fn get_background_g() -> f32 {
            with_runner(|r| r.background_g())
        }

        #[wasm_bindgen]
        pub fn get_background_b() -> f32 {
            with_runner(|r| r.background_b())
        }

        #[wasm_bindgen]
        pub fn get_frame_count() -> u32 {
            with_runner(|r| r.frame_count())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_discs() -> u32 {
            with_runner(|r| r.max_discs())
        }

        #[wasm_bindgen]
        pub fn get_max_segments() -> u32 {
            with_runner(|r| r.max_segments())
        }

        #[wasm_bindgen]
        pub fn get_max_notes() -> u32 {
            with_runner(|r| r.max_notes())
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }
    };
}
