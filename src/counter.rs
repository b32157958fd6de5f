// SPDX-FileCopyrightText: Copyright (c) 2024 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Software model of the reference counter DUT.
//!
//! An 8-bit counter with active-low synchronous reset and a count
//! enable. Register updates happen only when `evaluate()` observes a
//! low-to-high clock transition (edge detection against the previously
//! evaluated clock level); evaluations without a clock change are
//! combinational settles and leave the register untouched.

use crate::error::PortError;
use crate::port::{CircuitPort, SignalState};

#[derive(Debug, Default)]
pub struct CounterModel {
    inputs: SignalState,
    last_clock: bool,
    count: u8,
    finalized: bool,
}

impl CounterModel {
    pub fn new() -> Self {
        CounterModel::default()
    }
}

impl CircuitPort for CounterModel {
    fn set_inputs(&mut self, signals: SignalState) {
        self.inputs = signals;
    }

    fn evaluate(&mut self) -> Result<(), PortError> {
        if self.finalized {
            return Err(PortError("evaluate() after finalize()".to_string()));
        }
        if self.inputs.clock && !self.last_clock {
            if !self.inputs.reset_n {
                self.count = 0;
            } else if self.inputs.enable {
                self.count = self.count.wrapping_add(1);
            }
        }
        self.last_clock = self.inputs.clock;
        Ok(())
    }

    fn output_count(&self) -> u64 {
        self.count as u64
    }

    fn finalize(&mut self) -> Result<(), PortError> {
        if self.finalized {
            return Err(PortError("finalize() called twice".to_string()));
        }
        self.finalized = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive one full clock period: low half then high half.
    fn cycle(model: &mut CounterModel, reset_n: bool, enable: bool) {
        for clock in [false, true] {
            model.set_inputs(SignalState {
                clock,
                reset_n,
                enable,
            });
            model.evaluate().unwrap();
        }
    }

    #[test]
    fn test_counts_when_enabled() {
        let mut model = CounterModel::new();
        cycle(&mut model, false, false);
        for _ in 0..5 {
            cycle(&mut model, true, true);
        }
        assert_eq!(model.output_count(), 5);
    }

    #[test]
    fn test_reset_clears_count() {
        let mut model = CounterModel::new();
        for _ in 0..3 {
            cycle(&mut model, true, true);
        }
        assert!(model.output_count() > 0);
        cycle(&mut model, false, true);
        assert_eq!(model.output_count(), 0);
    }

    #[test]
    fn test_holds_when_disabled() {
        let mut model = CounterModel::new();
        cycle(&mut model, true, true);
        cycle(&mut model, true, true);
        assert_eq!(model.output_count(), 2);
        for _ in 0..4 {
            cycle(&mut model, true, false);
        }
        assert_eq!(model.output_count(), 2);
    }

    #[test]
    fn test_settle_without_edge_is_noop() {
        let mut model = CounterModel::new();
        cycle(&mut model, true, true);
        assert_eq!(model.output_count(), 1);
        // Clock held high: repeated evaluations must not re-trigger.
        model.evaluate().unwrap();
        model.evaluate().unwrap();
        assert_eq!(model.output_count(), 1);
    }

    #[test]
    fn test_count_wraps() {
        let mut model = CounterModel::new();
        for _ in 0..256 {
            cycle(&mut model, true, true);
        }
        assert_eq!(model.output_count(), 0);
    }

    #[test]
    fn test_finalize_is_terminal() {
        let mut model = CounterModel::new();
        cycle(&mut model, true, true);
        model.finalize().unwrap();
        assert!(model.finalize().is_err());
        assert!(model.evaluate().is_err());
    }
}
