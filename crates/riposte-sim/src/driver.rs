//! Fixed-timestep driver.
//!
//! Hosts render at whatever rate the display allows and feed real frame
//! time in here; the driver runs whole engine ticks at the tuning's tick
//! rate and keeps the remainder for the next frame.

use crate::engine::CombatEngine;

/// Maximum ticks per `advance` call before the backlog is dropped.
pub const MAX_SUBSTEPS: u32 = 8;

/// Longest frame accepted, in seconds. Longer hitches are clamped.
pub const MAX_FRAME_SECS: f64 = 0.25;

#[derive(Debug, Clone)]
pub struct FixedStepDriver {
    accumulator: f64,
    step: f64,
    max_substeps: u32,
}

impl FixedStepDriver {
    /// Driver stepping at the engine's configured tick rate.
    pub fn for_engine(engine: &CombatEngine) -> Self {
        Self {
            accumulator: 0.0,
            step: engine.tuning().dt(),
            max_substeps: MAX_SUBSTEPS,
        }
    }

    pub fn with_max_substeps(mut self, max_substeps: u32) -> Self {
        self.max_substeps = max_substeps.max(1);
        self
    }

    /// Accumulate `frame_secs` of real time and run the ticks it covers.
    /// Returns the number of ticks run.
    pub fn advance(&mut self, engine: &mut CombatEngine, frame_secs: f64) -> u32 {
        if !(frame_secs > 0.0) {
            return 0;
        }
        self.accumulator += frame_secs.min(MAX_FRAME_SECS);

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            engine.tick();
            self.accumulator -= self.step;
            substeps += 1;
        }

        // Too far behind: drop the backlog instead of spiralling.
        if self.accumulator >= self.step {
            self.accumulator = 0.0;
        }
        substeps
    }

    /// Fraction of a tick left in the accumulator, for render interpolation.
    pub fn alpha(&self) -> f64 {
        self.accumulator / self.step
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
