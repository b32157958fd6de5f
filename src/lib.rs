// SPDX-FileCopyrightText: Copyright (c) 2024 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Cycle-driven stimulus sequencer for synchronous circuit models.
//!
//! The sequencer owns simulated time: it maintains a monotonic tick
//! counter, toggles the clock once per tick, applies scheduled control
//! transitions (reset release, enable assertion), evaluates the circuit
//! model once per tick, and samples outputs on rising clock edges.
//!
//! The circuit model itself is opaque: the sequencer only drives the
//! [`port::CircuitPort`] capability surface and never inspects model
//! internals. A reference counter model is provided in [`counter`] for
//! the shipped testbench driver and as a test fixture.

pub mod config;
pub mod counter;
pub mod error;
pub mod port;
pub mod report;
pub mod schedule;
pub mod sequencer;
