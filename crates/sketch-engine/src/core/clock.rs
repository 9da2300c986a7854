/// Fixed timestep accumulator with a sketch time-scale.
/// Keeps the animation rate independent of host frame timing; the scale
/// lets a sketch run its simulation slower or faster than wall clock.
pub struct FrameClock {
    /// The fixed delta time per tick, in scaled seconds.
    dt: f32,
    /// Multiplier applied to incoming wall-clock time.
    scale: f32,
    /// Accumulated scaled time from variable frame deltas.
    accumulator: f32,
}

impl FrameClock {
    pub fn new(dt: f32, scale: f32) -> Self {
        Self {
            dt,
            scale,
            accumulator: 0.0,
        }
    }

    /// Add wall-clock frame time. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt * self.scale;
        // Cap to prevent spiral of death (max 10 steps per frame)
        self.accumulator = self.accumulator.min(self.dt * 10.0);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// The fixed delta time in scaled seconds.
    pub fn dt(&self) -> f32 {
        self.dt
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_exact() {
        let mut clock = FrameClock::new(1.0 / 60.0, 1.0);
        let steps = clock.accumulate(1.0 / 60.0);
        assert_eq!(steps, 1);
    }

    #[test]
    fn accumulates_partial() {
        let mut clock = FrameClock::new(1.0 / 60.0, 1.0);
        let steps = clock.accumulate(0.008); // half a frame
        assert_eq!(steps, 0);
        let steps = clock.accumulate(0.010); // over one frame total
        assert_eq!(steps, 1);
    }

    #[test]
    fn caps_at_ten_steps() {
        let mut clock = FrameClock::new(1.0 / 60.0, 1.0);
        let steps = clock.accumulate(1.0); // 60 frames worth, but capped at 10
        assert_eq!(steps, 10);
    }

    #[test]
    fn scale_slows_the_simulation() {
        // Quarter speed: four wall-clock units per fixed step.
        // Values chosen to be exact in binary.
        let mut clock = FrameClock::new(0.25, 0.25);
        assert_eq!(clock.accumulate(0.5), 0);
        assert_eq!(clock.accumulate(0.5), 1);
    }
}
