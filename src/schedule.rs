// SPDX-FileCopyrightText: Copyright (c) 2024 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Phase schedule: time-gated control-signal transitions.
//!
//! A schedule is an ordered table of (threshold, signal, value) steps,
//! fixed at construction and applied every tick. A step takes effect on
//! every tick strictly greater than its threshold, so a signal set by a
//! step stays set for the remainder of the run (each signal may appear
//! in at most one step, which makes the schedule monotone by
//! construction).

use crate::error::ConfigError;
use crate::port::SignalState;

/// Control signals a phase step can drive. The clock is not part of the
/// schedule; the sequencer toggles it unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSignal {
    ResetN,
    Enable,
}

impl ControlSignal {
    pub fn name(self) -> &'static str {
        match self {
            ControlSignal::ResetN => "reset_n",
            ControlSignal::Enable => "enable",
        }
    }
}

/// One scheduled transition: on every tick strictly after `threshold`,
/// `signal` is driven to `value`.
#[derive(Debug, Clone, Copy)]
pub struct PhaseStep {
    pub threshold: u64,
    pub signal: ControlSignal,
    pub value: bool,
}

/// An immutable, validated phase schedule.
#[derive(Debug, Clone)]
pub struct PhaseSchedule {
    steps: Vec<PhaseStep>,
}

impl PhaseSchedule {
    /// Validate and build a schedule.
    ///
    /// Thresholds must be non-decreasing (two steps may share a
    /// threshold only when they drive distinct signals) and each signal
    /// may be driven by at most one step.
    pub fn new(steps: Vec<PhaseStep>) -> Result<Self, ConfigError> {
        for (i, step) in steps.iter().enumerate() {
            if let Some(prev) = i.checked_sub(1).map(|p| &steps[p]) {
                if step.threshold < prev.threshold {
                    return Err(ConfigError::DecreasingThreshold {
                        previous: prev.threshold,
                        threshold: step.threshold,
                    });
                }
            }
            if steps[..i].iter().any(|s| s.signal == step.signal) {
                return Err(ConfigError::DuplicateSignal {
                    signal: step.signal.name(),
                    threshold: step.threshold,
                });
            }
        }
        Ok(PhaseSchedule { steps })
    }

    /// The standard reset-then-enable schedule: release reset after
    /// `reset_release_tick`, assert enable after `enable_assert_tick`.
    pub fn reset_then_enable(
        reset_release_tick: u64,
        enable_assert_tick: u64,
    ) -> Result<Self, ConfigError> {
        if enable_assert_tick < reset_release_tick {
            return Err(ConfigError::EnableBeforeReset {
                reset: reset_release_tick,
                enable: enable_assert_tick,
            });
        }
        PhaseSchedule::new(vec![
            PhaseStep {
                threshold: reset_release_tick,
                signal: ControlSignal::ResetN,
                value: true,
            },
            PhaseStep {
                threshold: enable_assert_tick,
                signal: ControlSignal::Enable,
                value: true,
            },
        ])
    }

    /// Apply every step whose threshold has been crossed at `tick`.
    ///
    /// Steps are order-independent here because each signal appears at
    /// most once.
    pub fn apply(&self, tick: u64, signals: &mut SignalState) {
        for step in &self.steps {
            if tick > step.threshold {
                match step.signal {
                    ControlSignal::ResetN => signals.reset_n = step.value,
                    ControlSignal::Enable => signals.enable = step.value,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_then_enable_gating() {
        let sched = PhaseSchedule::reset_then_enable(10, 20).unwrap();
        let mut sig = SignalState::default();

        sched.apply(10, &mut sig);
        assert!(!sig.reset_n);
        assert!(!sig.enable);

        sched.apply(11, &mut sig);
        assert!(sig.reset_n);
        assert!(!sig.enable);

        sched.apply(21, &mut sig);
        assert!(sig.reset_n);
        assert!(sig.enable);
    }

    #[test]
    fn test_signals_never_revert() {
        let sched = PhaseSchedule::reset_then_enable(2, 4).unwrap();
        let mut sig = SignalState::default();
        let mut seen_reset = false;
        let mut seen_enable = false;
        for tick in 0..50 {
            sched.apply(tick, &mut sig);
            if seen_reset {
                assert!(sig.reset_n, "reset_n reverted at tick {}", tick);
            }
            if seen_enable {
                assert!(sig.enable, "enable reverted at tick {}", tick);
            }
            seen_reset |= sig.reset_n;
            seen_enable |= sig.enable;
        }
        assert!(seen_reset && seen_enable);
    }

    #[test]
    fn test_equal_thresholds_allowed() {
        // Reset release and enable assertion may coincide.
        let sched = PhaseSchedule::reset_then_enable(5, 5).unwrap();
        let mut sig = SignalState::default();
        sched.apply(6, &mut sig);
        assert!(sig.reset_n);
        assert!(sig.enable);
    }

    #[test]
    fn test_enable_before_reset_rejected() {
        let err = PhaseSchedule::reset_then_enable(20, 10).unwrap_err();
        assert_eq!(
            err,
            ConfigError::EnableBeforeReset {
                reset: 20,
                enable: 10
            }
        );
    }

    #[test]
    fn test_decreasing_thresholds_rejected() {
        let err = PhaseSchedule::new(vec![
            PhaseStep {
                threshold: 8,
                signal: ControlSignal::ResetN,
                value: true,
            },
            PhaseStep {
                threshold: 3,
                signal: ControlSignal::Enable,
                value: true,
            },
        ])
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::DecreasingThreshold {
                previous: 8,
                threshold: 3
            }
        );
    }

    #[test]
    fn test_duplicate_signal_rejected() {
        let err = PhaseSchedule::new(vec![
            PhaseStep {
                threshold: 3,
                signal: ControlSignal::Enable,
                value: true,
            },
            PhaseStep {
                threshold: 8,
                signal: ControlSignal::Enable,
                value: false,
            },
        ])
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::DuplicateSignal {
                signal: "enable",
                threshold: 8
            }
        );
    }
}
