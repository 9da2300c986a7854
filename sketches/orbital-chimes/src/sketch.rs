/// Orbital chimes: a small orrery where each body subdivides its orbit into
/// four arcs and plays a sampled piano note on every arc boundary.
///
/// Bodies are chained to random parents, so most runs produce
/// moons-of-moons; note pitches come from a random three-letter scale spread
/// across a fixed octave set.

use std::f32::consts::TAU;

use sketch_engine::api::sketch::{Sketch, SketchConfig, SketchContext};
use sketch_engine::assets::{Note, SampleBank, SampleManifest};
use sketch_engine::core::orbital::{NodeId, OrbitalBody, OrbitalSystem};
use sketch_engine::input::queue::{InputEvent, InputQueue};
use sketch_engine::palette::{random_palette, Rgba};
use sketch_engine::random::Rng;
use sketch_engine::surface::Canvas;
use sketch_engine::{NoteEvent, SketchEvent};

// ── Simulation parameters ────────────────────────────────────────────

const FIXED_DT: f32 = 1.0 / 60.0;
/// Simulation runs at quarter speed; the chimes stay sparse.
const TIME_SCALE: f32 = 0.25;
const ZOOM: f32 = 0.4;

/// Orbit radii bodies may be placed at.
const DISTANCES: [f32; 3] = [1.0, 0.5, 0.25];
/// Arc subdivisions per revolution; one note per boundary.
const STEPS_PER_REV: u32 = 4;
const ROOT_MASS: f32 = 0.1;
const MIN_MASS: f32 = 0.05;
const MAX_MASS: f32 = 0.1;

/// Three-note scales a run picks from.
const SCALES: [[&str; 3]; 4] = [
    ["C", "A", "E"],
    ["C", "D", "A"],
    ["C", "C#", "E"],
    ["C", "D", "E"],
];
/// Octaves the scale letters are spread across.
const OCTAVES: [u32; 4] = [2, 3, 5, 6];

const CONNECTOR_ALPHA: f32 = 0.2;

// ── Custom event kinds from the caption UI ───────────────────────────

const CUSTOM_TOGGLE_MUTE: u32 = 1;

// ── Sketch event kinds to the caption UI ─────────────────────────────

/// kind=1: a = body count, b = 1.0 when muted.
const EVENT_INFO: u32 = 1;

pub struct OrbitalChimes {
    system: OrbitalSystem,
    bank: SampleBank,
    /// Sound starts off; the caption button unmutes.
    muted: bool,
}

impl OrbitalChimes {
    pub fn new(_seed: u64) -> Self {
        Self {
            system: OrbitalSystem::new(),
            bank: SampleBank::default(),
            muted: true,
        }
    }

    /// Build a fresh orrery from the current RNG state.
    fn build(&mut self, rng: &mut Rng) {
        let colors = random_palette(rng);
        let scale = *rng.pick(&SCALES);

        let mut system = OrbitalSystem::new();
        system.add(OrbitalBody::root(ROOT_MASS, *rng.pick(&colors)));

        let count = rng.range(1.0, 8.0) as usize;
        for _ in 0..count {
            let parent = NodeId(rng.next_int(system.len() as u32));
            let mut body = OrbitalBody::orbiting(parent, *rng.pick(&DISTANCES))
                .with_angle(rng.range(0.0, TAU))
                .with_mass(rng.range(MIN_MASS, MAX_MASS))
                .with_steps(STEPS_PER_REV)
                .with_color(*rng.pick(&colors));
            let name = format!("{}{}", rng.pick(&scale), rng.pick(&OCTAVES));
            if let Ok(note) = Note::parse(&name) {
                body = body.with_note(note);
            }
            system.add(body);
        }
        self.system = system;
    }

    fn emit_info(&self, ctx: &mut SketchContext) {
        ctx.emit_event(SketchEvent::new(
            EVENT_INFO,
            self.system.len() as f32,
            if self.muted { 1.0 } else { 0.0 },
            0.0,
        ));
    }
}

impl Sketch for OrbitalChimes {
    fn config(&self) -> SketchConfig {
        SketchConfig {
            fixed_dt: FIXED_DT,
            speed: TIME_SCALE,
            zoom: ZOOM,
            max_discs: 32,
            max_segments: 32,
            max_notes: 16,
            ..SketchConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut SketchContext) {
        self.build(&mut ctx.rng);
        self.emit_info(ctx);
    }

    fn update(&mut self, ctx: &mut SketchContext, input: &InputQueue) {
        let mut info_changed = false;
        for event in input.iter() {
            match event {
                // Tap: re-seed and regenerate the orrery
                InputEvent::PointerDown { .. } => {
                    self.build(&mut ctx.rng);
                    info_changed = true;
                }
                InputEvent::Custom { kind, .. } if *kind == CUSTOM_TOGGLE_MUTE => {
                    self.muted = !self.muted;
                    info_changed = true;
                }
                _ => {}
            }
        }

        let muted = self.muted;
        let bank = &self.bank;
        let notes = &mut ctx.notes;
        self.system.update(FIXED_DT, |_, body| {
            if muted {
                return;
            }
            // Silent until the host has loaded the sample manifest
            let Some(note) = body.note else { return };
            if let Some(slot) = bank.nearest(note) {
                notes.push(NoteEvent(slot));
            }
        });

        if info_changed {
            self.emit_info(ctx);
        }
    }

    fn draw(&self, canvas: &mut Canvas) {
        self.system
            .draw_connectors(canvas, Rgba::BLACK, CONNECTOR_ALPHA);
        self.system.draw(canvas);
    }

    fn load_samples(&mut self, manifest: &SampleManifest) {
        match SampleBank::from_manifest(manifest) {
            Ok(bank) => {
                log::info!("sample bank ready: {} pitches", bank.len());
                self.bank = bank;
            }
            Err(e) => log::warn!("sample bank rejected: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(seed: u64) -> SketchContext {
        SketchContext::new(seed)
    }

    fn loaded_bank() -> SampleManifest {
        SampleManifest {
            base_url: "samples/".to_string(),
            release: 1.0,
            samples: ["A0", "C2", "C4", "C6"]
                .iter()
                .map(|n| sketch_engine::assets::SampleDescriptor {
                    note: n.to_string(),
                    path: format!("{n}.mp3"),
                })
                .collect(),
        }
    }

    #[test]
    fn same_seed_builds_same_orrery() {
        let mut a = OrbitalChimes::new(0);
        let mut b = OrbitalChimes::new(0);
        a.init(&mut context(42));
        b.init(&mut context(42));
        assert_eq!(a.system.len(), b.system.len());
        for (x, y) in a.system.iter().zip(b.system.iter()) {
            assert_eq!(x.angle, y.angle);
            assert_eq!(x.distance, y.distance);
            assert_eq!(x.note, y.note);
        }
    }

    #[test]
    fn orrery_size_is_root_plus_one_to_seven() {
        for seed in 1..50 {
            let mut sketch = OrbitalChimes::new(0);
            sketch.init(&mut context(seed));
            assert!((2..=8).contains(&sketch.system.len()), "seed {seed}");
        }
    }

    #[test]
    fn every_orbiter_carries_a_note() {
        let mut sketch = OrbitalChimes::new(0);
        sketch.init(&mut context(7));
        for body in sketch.system.iter().skip(1) {
            assert!(body.note.is_some());
            assert!(body.distance > 0.0);
            assert_eq!(body.steps, STEPS_PER_REV);
        }
    }

    #[test]
    fn muted_sketch_emits_no_notes() {
        let mut sketch = OrbitalChimes::new(0);
        let mut ctx = context(3);
        sketch.init(&mut ctx);
        sketch.load_samples(&loaded_bank());
        assert!(sketch.muted);

        let input = InputQueue::new();
        for _ in 0..5000 {
            ctx.clear_frame_data();
            sketch.update(&mut ctx, &input);
            assert!(ctx.notes.is_empty());
        }
    }

    #[test]
    fn unmuted_sketch_eventually_plays() {
        let mut sketch = OrbitalChimes::new(0);
        let mut ctx = context(3);
        sketch.init(&mut ctx);
        sketch.load_samples(&loaded_bank());

        let mut input = InputQueue::new();
        input.push(InputEvent::Custom {
            kind: CUSTOM_TOGGLE_MUTE,
            a: 0.0,
            b: 0.0,
            c: 0.0,
        });
        sketch.update(&mut ctx, &input);
        assert!(!sketch.muted);
        input.drain();

        let mut played = 0;
        for _ in 0..20_000 {
            ctx.clear_frame_data();
            sketch.update(&mut ctx, &input);
            played += ctx.notes.len();
        }
        assert!(played > 0, "no notes over ~5.5 simulated minutes");
    }

    #[test]
    fn tap_regenerates_from_fresh_rng_state() {
        let mut sketch = OrbitalChimes::new(0);
        let mut ctx = context(11);
        sketch.init(&mut ctx);
        let before: Vec<f32> = sketch.system.iter().map(|b| b.angle).collect();

        let mut input = InputQueue::new();
        input.push(InputEvent::PointerDown { x: 0.0, y: 0.0 });
        sketch.update(&mut ctx, &input);
        let after: Vec<f32> = sketch.system.iter().map(|b| b.angle).collect();
        assert_ne!(before, after);
    }
}
