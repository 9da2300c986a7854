use wasm_bindgen::prelude::*;
use sketch_engine::*;

mod sketch;
use sketch::OrbitalChimes;

sketch_web::export_sketch!(OrbitalChimes, "orbital-chimes");
