// SPDX-FileCopyrightText: Copyright (c) 2024 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Capability surface of the simulated circuit (the DUT).

use crate::error::PortError;

/// Control and clock inputs the sequencer drives into the model.
///
/// All signals start low: reset asserted (active-low), counting
/// disabled, clock low.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignalState {
    pub clock: bool,
    /// Active-low reset.
    pub reset_n: bool,
    pub enable: bool,
}

/// The simulated-circuit port.
///
/// The sequencer is the sole writer of inputs; the port is the sole
/// owner and mutator of its internal circuit state. The sequencer never
/// inspects internals — it only pushes inputs, triggers evaluation, and
/// reads the single `count` output.
pub trait CircuitPort {
    /// Latch the current input signal values. No evaluation happens yet.
    fn set_inputs(&mut self, signals: SignalState);

    /// Propagate the current inputs through the model exactly once.
    /// Called once per tick.
    fn evaluate(&mut self) -> Result<(), PortError>;

    /// Read the model's count output.
    fn output_count(&self) -> u64;

    /// Lifecycle hook, called exactly once after the last tick.
    fn finalize(&mut self) -> Result<(), PortError>;
}
