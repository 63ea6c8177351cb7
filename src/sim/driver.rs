//! Fixed-step driver for a host loop
//!
//! The engine itself only ever advances one `dt` per call. A host that
//! measures wall-clock time between frames banks it here and gets whole ticks
//! back out, capped per call.

use super::frame::FrameSlot;
use super::tick::{Engine, TickReport};
use super::world::World;
use crate::consts::{MAX_FRAME_TIME, MAX_SUBSTEPS};

/// Wall-clock accumulator that runs whole engine ticks
#[derive(Debug, Clone)]
pub struct FixedStepper {
    accumulator: f64,
    max_substeps: u32,
    slot: Option<FrameSlot>,
}

impl Default for FixedStepper {
    fn default() -> Self {
        Self::new()
    }
}

impl FixedStepper {
    pub fn new() -> Self {
        Self {
            accumulator: 0.0,
            max_substeps: MAX_SUBSTEPS,
            slot: None,
        }
    }

    pub fn with_max_substeps(mut self, max_substeps: u32) -> Self {
        self.max_substeps = max_substeps.max(1);
        self
    }

    /// Publish a frame after every call that ran at least one tick
    pub fn publishing_to(mut self, slot: FrameSlot) -> Self {
        self.slot = Some(slot);
        self
    }

    /// Banked time not yet simulated
    pub fn pending(&self) -> f64 {
        self.accumulator
    }

    /// Bank `elapsed` seconds and run as many ticks as fit
    pub fn advance(&mut self, engine: &Engine, world: &mut World, elapsed: f64) -> Vec<TickReport> {
        let dt = engine.dt();
        let elapsed = if elapsed.is_finite() {
            elapsed.clamp(0.0, MAX_FRAME_TIME.max(dt))
        } else {
            0.0
        };
        self.accumulator += elapsed;

        let mut reports = Vec::new();
        while self.accumulator >= dt && (reports.len() as u32) < self.max_substeps {
            reports.push(engine.tick(world));
            self.accumulator -= dt;
        }

        if self.accumulator >= dt {
            let dropped = self.accumulator - self.accumulator % dt;
            log::warn!(
                "Simulation behind by {:.4}s, dropping {:.4}s",
                self.accumulator,
                dropped
            );
            self.accumulator %= dt;
        }

        if !reports.is_empty() {
            if let Some(slot) = &self.slot {
                slot.publish(world.snapshot());
            }
        }

        reports
    }
}
