// SPDX-FileCopyrightText: Copyright (c) 2024 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0
//! Testbench project configuration file (`stimbench.toml`) support.
//!
//! Provides optional TOML-based configuration that stores run
//! parameters and report options. CLI arguments always override config
//! file values.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Testbench configuration loaded from `stimbench.toml`.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct BenchConfig {
    pub run: RunConfig,
    pub report: ReportConfig,
}

/// Run parameters for the stimulus sequencer.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RunConfig {
    /// Total half-cycle ticks to simulate.
    pub total_ticks: Option<u64>,
    /// Tick after which reset is released.
    pub reset_release_tick: Option<u64>,
    /// Tick after which counting is enabled.
    pub enable_assert_tick: Option<u64>,
}

/// Report output options.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// JSON file to dump observation records to.
    pub json_output: Option<PathBuf>,
}

/// Fully resolved run parameters after merging CLI overrides, config
/// file values, and defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunParams {
    pub total_ticks: u64,
    pub reset_release_tick: u64,
    pub enable_assert_tick: u64,
}

impl RunConfig {
    /// Merge CLI overrides over config file values. Unset parameters
    /// fall back to the standard run (100 ticks, reset released after
    /// tick 10, counting enabled after tick 20).
    pub fn effective(
        &self,
        total_ticks: Option<u64>,
        reset_release_tick: Option<u64>,
        enable_assert_tick: Option<u64>,
    ) -> RunParams {
        RunParams {
            total_ticks: total_ticks.or(self.total_ticks).unwrap_or(100),
            reset_release_tick: reset_release_tick
                .or(self.reset_release_tick)
                .unwrap_or(10),
            enable_assert_tick: enable_assert_tick
                .or(self.enable_assert_tick)
                .unwrap_or(20),
        }
    }
}

impl BenchConfig {
    /// Discover a `stimbench.toml` config file by searching CWD and parent directories.
    ///
    /// Returns the parsed config and the path to the config file, or `None` if not found.
    pub fn discover() -> Option<(Self, PathBuf)> {
        let cwd = std::env::current_dir().ok()?;
        let mut dir = cwd.as_path();
        loop {
            let candidate = dir.join("stimbench.toml");
            if candidate.exists() {
                match Self::load(&candidate) {
                    Ok(mut config) => {
                        let config_dir = candidate.parent().unwrap_or(Path::new("."));
                        config.resolve_paths(config_dir);
                        return Some((config, candidate));
                    }
                    Err(e) => {
                        clilog::warn!("Found stimbench.toml but failed to parse: {}", e);
                        return None;
                    }
                }
            }
            dir = dir.parent()?;
        }
    }

    /// Load configuration from a specific path.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        toml::from_str(&content)
            .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
    }

    /// Resolve relative paths against the config file's directory.
    pub fn resolve_paths(&mut self, config_dir: &Path) {
        resolve_opt_path(&mut self.report.json_output, config_dir);
    }
}

/// Resolve a relative path against a base directory. Absolute paths are unchanged.
fn resolve_opt_path(path: &mut Option<PathBuf>, base: &Path) {
    if let Some(ref mut p) = path {
        if p.is_relative() {
            *p = base.join(&*p);
        }
    }
}
