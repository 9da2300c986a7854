use wasm_bindgen::prelude::*;
use sketch_engine::*;

mod sketch;
use sketch::MoonParade;

sketch_web::export_sketch!(MoonParade, "moon-parade");
