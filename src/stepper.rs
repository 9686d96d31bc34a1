//! Fixed timestep driver for host loops
//!
//! Hosts hand in variable frame deltas; the stepper turns them into whole
//! `SIM_DT` ticks, carrying the remainder to the next frame.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::sim::{GameEvent, TickInput, WorldState, tick};

/// Accumulates frame time and runs fixed ticks
#[derive(Debug, Clone, Default)]
pub struct FixedStepper {
    accumulator: f32,
}

impl FixedStepper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unsimulated time carried over (at most `MAX_SUBSTEPS` ticks worth)
    pub fn pending(&self) -> f32 {
        self.accumulator
    }

    /// Drop any carried time (after unpausing or loading)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }

    /// Run as many fixed ticks as `frame_dt` covers.
    ///
    /// Edge-triggered intents reach only the first substep so one press
    /// fires one shot. Events of all substeps are returned in order.
    pub fn advance(
        &mut self,
        state: &mut WorldState,
        input: &TickInput,
        frame_dt: f32,
    ) -> Vec<GameEvent> {
        let frame_dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.accumulator += frame_dt;

        let mut input = input.clone();
        let mut events = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            events.extend(tick(state, &input, SIM_DT));
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            input.clear_edges();
        }
        // Drop backlog the substep cap could not run
        self.accumulator = self.accumulator.min(MAX_SUBSTEPS as f32 * SIM_DT);
        events
    }
}
