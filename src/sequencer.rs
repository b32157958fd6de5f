// SPDX-FileCopyrightText: Copyright (c) 2024 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! The stimulus run loop.
//!
//! Each tick is one clock-level toggle: the sequencer flips the clock,
//! applies the phase schedule, pushes the signals to the port, triggers
//! one `evaluate()`, and samples outputs on rising edges only.
//!
//! Edge/index policy: the clock starts low and is toggled at the top of
//! every tick, so a tick is a rising edge iff the just-completed toggle
//! left the clock high. One *cycle* is a full clock period (two ticks);
//! `sample_index` counts rising edges from 0 and is therefore the cycle
//! index. A raw-tick time column is deliberately not reported.

use serde::Serialize;

use crate::error::{ConfigError, HarnessError};
use crate::port::{CircuitPort, SignalState};
use crate::schedule::PhaseSchedule;

/// One output sample, taken on a rising clock edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ObservationRecord {
    /// Cycle index, dense from 0.
    pub sample_index: u64,
    /// Active-low reset level at the sample point (0 = asserted).
    pub reset_n: u8,
    pub enable: u8,
    /// The port's count output after this edge's evaluation.
    pub count: u64,
}

/// Cycle-driven stimulus sequencer.
///
/// Owns the tick counter and the signal state; the port never writes
/// either. A sequencer drives exactly one run: [`Sequencer::run`] takes
/// `self` by value, so an instance cannot be restarted with stale tick
/// or signal state.
#[derive(Debug)]
pub struct Sequencer {
    total_ticks: u64,
    schedule: PhaseSchedule,
    /// Monotonic half-cycle counter. Starts at 0, never resets.
    tick: u64,
    signals: SignalState,
}

impl Sequencer {
    /// Build a sequencer with a fixed tick budget and phase schedule.
    ///
    /// A schedule threshold at or past `total_ticks` is valid: the
    /// signal simply never transitions within the run (e.g. a short run
    /// that stays in reset throughout).
    pub fn new(total_ticks: u64, schedule: PhaseSchedule) -> Result<Self, ConfigError> {
        if total_ticks == 0 {
            return Err(ConfigError::ZeroTickBudget);
        }
        Ok(Sequencer {
            total_ticks,
            schedule,
            tick: 0,
            signals: SignalState::default(),
        })
    }

    /// Convenience constructor for the standard reset-then-enable run.
    pub fn with_thresholds(
        total_ticks: u64,
        reset_release_tick: u64,
        enable_assert_tick: u64,
    ) -> Result<Self, ConfigError> {
        let schedule = PhaseSchedule::reset_then_enable(reset_release_tick, enable_assert_tick)?;
        Sequencer::new(total_ticks, schedule)
    }

    /// Drive the full run against `port` and collect one record per
    /// rising edge.
    ///
    /// `finalize()` is invoked exactly once, after the last
    /// `evaluate()` — including when an `evaluate()` fails mid-run, in
    /// which case the finalize is best-effort and the evaluate error is
    /// the one returned.
    pub fn run<P: CircuitPort>(
        mut self,
        port: &mut P,
    ) -> Result<Vec<ObservationRecord>, HarnessError> {
        let mut records =
            Vec::with_capacity(usize::try_from(self.total_ticks / 2).unwrap_or(0));
        let loop_result = self.drive(port, &mut records);
        let finalize_result = port.finalize();

        loop_result?;
        finalize_result.map_err(|source| HarnessError::Port {
            op: "finalize",
            source,
        })?;
        Ok(records)
    }

    fn drive<P: CircuitPort>(
        &mut self,
        port: &mut P,
        records: &mut Vec<ObservationRecord>,
    ) -> Result<(), HarnessError> {
        let mut rising_edges = 0u64;
        while self.tick < self.total_ticks {
            self.signals.clock = !self.signals.clock;

            let before = self.signals;
            self.schedule.apply(self.tick, &mut self.signals);
            if !before.reset_n && self.signals.reset_n {
                clilog::debug!("tick {}: reset released", self.tick);
            }
            if !before.enable && self.signals.enable {
                clilog::debug!("tick {}: counting enabled", self.tick);
            }

            port.set_inputs(self.signals);
            port.evaluate().map_err(|source| HarnessError::Port {
                op: "evaluate",
                source,
            })?;

            // The clock only changes via the toggle above, so a high
            // clock here means this tick completed a low-to-high
            // transition: the canonical sample point.
            if self.signals.clock {
                records.push(ObservationRecord {
                    sample_index: rising_edges,
                    reset_n: self.signals.reset_n as u8,
                    enable: self.signals.enable as u8,
                    count: port.output_count(),
                });
                rising_edges += 1;
            }

            self.tick += 1;
        }
        Ok(())
    }
}
