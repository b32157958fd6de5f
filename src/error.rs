// SPDX-FileCopyrightText: Copyright (c) 2024 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Harness failure taxonomy.
//!
//! Every failure here is a configuration or programming defect: this is
//! a deterministic, closed-loop simulation driver, so there is no
//! transient-failure class and nothing is ever retried.

use thiserror::Error;

/// Configuration-time precondition violation. Detected before the run
/// loop starts and always fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("total_ticks must be greater than zero")]
    ZeroTickBudget,

    /// Enable depends on reset being released first in the modeled
    /// hardware, so the enable threshold may not precede the reset one.
    #[error("enable_assert_tick ({enable}) must not precede reset_release_tick ({reset})")]
    EnableBeforeReset { reset: u64, enable: u64 },

    #[error("schedule thresholds must be non-decreasing (tick {threshold} after tick {previous})")]
    DecreasingThreshold { previous: u64, threshold: u64 },

    /// A signal set by one threshold must never be driven again by a
    /// later one; a second step for the same signal breaks monotonicity.
    #[error("signal {signal} is driven by more than one schedule step (second at tick {threshold})")]
    DuplicateSignal {
        signal: &'static str,
        threshold: u64,
    },
}

/// A failure surfaced by the circuit port's `evaluate()` or `finalize()`.
///
/// The harness has no authority over the model's internal consistency,
/// so these are propagated unmodified and abort the run.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct PortError(pub String);

/// Top-level harness error.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("port {op}() failed: {source}")]
    Port {
        op: &'static str,
        #[source]
        source: PortError,
    },
}
