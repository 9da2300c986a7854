/// Moon parade: dozens of moons chained to random parents, drawn over a
/// barely-fading background so every orbit smears into a trail.

use std::f32::consts::TAU;

use sketch_engine::api::sketch::{Sketch, SketchConfig, SketchContext};
use sketch_engine::core::orbital::{NodeId, OrbitalBody, OrbitalSystem};
use sketch_engine::input::queue::{InputEvent, InputQueue};
use sketch_engine::palette::{random_palette, Rgba};
use sketch_engine::random::Rng;
use sketch_engine::surface::Canvas;
use sketch_engine::SketchEvent;

// ── Simulation parameters ────────────────────────────────────────────

const FIXED_DT: f32 = 1.0 / 60.0;
const TIME_SCALE: f32 = 0.5;
const ZOOM: f32 = 0.4;
/// Background opacity per frame; low enough to leave long trails.
const FADE: f32 = 0.05;

const MIN_MOONS: f32 = 30.0;
const MAX_MOONS: f32 = 150.0;
const ROOT_MASS: f32 = 0.05;
const MIN_MASS: f32 = 0.01;
const MAX_MASS: f32 = 0.05;
const MIN_DISTANCE: f32 = 0.2;
const MAX_DISTANCE: f32 = 1.0;

const CONNECTOR_ALPHA: f32 = 0.05;

// ── Sketch event kinds to the caption UI ─────────────────────────────

/// kind=1: a = moon count.
const EVENT_INFO: u32 = 1;

pub struct MoonParade {
    system: OrbitalSystem,
}

impl MoonParade {
    pub fn new(_seed: u64) -> Self {
        Self {
            system: OrbitalSystem::new(),
        }
    }

    fn build(&mut self, rng: &mut Rng) {
        let colors = random_palette(rng);

        let mut system = OrbitalSystem::new();
        system.add(OrbitalBody::root(ROOT_MASS, *rng.pick(&colors)));

        let count = rng.range(MIN_MOONS, MAX_MOONS) as usize;
        for _ in 0..count {
            let parent = NodeId(rng.next_int(system.len() as u32));
            system.add(
                OrbitalBody::orbiting(parent, rng.range(MIN_DISTANCE, MAX_DISTANCE))
                    .with_angle(rng.range(0.0, TAU))
                    // Retrograde moons are half the fun
                    .with_speed(rng.range(-1.0, 1.0))
                    .with_mass(rng.range(MIN_MASS, MAX_MASS))
                    .with_color(*rng.pick(&colors)),
            );
        }
        self.system = system;
    }
}

impl Sketch for MoonParade {
    fn config(&self) -> SketchConfig {
        SketchConfig {
            fixed_dt: FIXED_DT,
            speed: TIME_SCALE,
            zoom: ZOOM,
            fade: FADE,
            max_discs: 256,
            max_segments: 256,
            ..SketchConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut SketchContext) {
        self.build(&mut ctx.rng);
        ctx.emit_event(SketchEvent::new(EVENT_INFO, self.system.len() as f32, 0.0, 0.0));
    }

    fn update(&mut self, ctx: &mut SketchContext, input: &InputQueue) {
        for event in input.iter() {
            if let InputEvent::PointerDown { .. } = event {
                self.build(&mut ctx.rng);
                ctx.emit_event(SketchEvent::new(
                    EVENT_INFO,
                    self.system.len() as f32,
                    0.0,
                    0.0,
                ));
            }
        }
        self.system.step(FIXED_DT);
    }

    fn draw(&self, canvas: &mut Canvas) {
        self.system
            .draw_connectors(canvas, Rgba::BLACK, CONNECTOR_ALPHA);
        self.system.draw(canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moon_count_stays_in_range() {
        for seed in 1..30 {
            let mut sketch = MoonParade::new(0);
            sketch.init(&mut SketchContext::new(seed));
            assert!(
                (31..=150).contains(&sketch.system.len()),
                "seed {seed}: {}",
                sketch.system.len()
            );
        }
    }

    #[test]
    fn moons_never_escape_their_parents() {
        let mut sketch = MoonParade::new(0);
        let mut ctx = SketchContext::new(5);
        sketch.init(&mut ctx);

        let input = InputQueue::new();
        for _ in 0..600 {
            sketch.update(&mut ctx, &input);
        }
        for i in 1..sketch.system.len() {
            let id = NodeId(i as u32);
            let body = sketch.system.get(id).unwrap();
            let parent = body.parent.unwrap();
            let offset = sketch.system.position(id) - sketch.system.position(parent);
            assert!((offset.length() - body.distance).abs() < 1e-3);
        }
    }

    #[test]
    fn draw_fits_within_canvas_capacity() {
        let mut sketch = MoonParade::new(0);
        sketch.init(&mut SketchContext::new(8));
        let config = sketch.config();
        let mut canvas = Canvas::new(config.max_discs, config.max_segments);
        sketch.draw(&mut canvas);
        assert_eq!(canvas.disc_count() as usize, sketch.system.len());
        assert_eq!(canvas.segment_count() as usize, sketch.system.len() - 1);
        assert_eq!(canvas.dropped_count(), 0);
    }
}
