// SPDX-FileCopyrightText: Copyright (c) 2024 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0
//! Counter testbench driver.
//!
//! Drives the reference counter model through the standard
//! reset-then-enable stimulus sequence and prints one observation line
//! per clock cycle.
//!
//! Usage:
//!   cargo run --bin counter_tb -- [options]

use std::io::Write;
use std::path::PathBuf;

use stimbench::config::BenchConfig;
use stimbench::counter::CounterModel;
use stimbench::report;
use stimbench::sequencer::Sequencer;

#[derive(clap::Parser, Debug)]
#[command(name = "counter_tb")]
#[command(about = "Cycle-driven counter testbench")]
struct Args {
    /// Total half-cycle ticks to simulate.
    #[clap(long)]
    total_ticks: Option<u64>,

    /// Tick after which reset is released.
    #[clap(long)]
    reset_release_tick: Option<u64>,

    /// Tick after which counting is enabled.
    #[clap(long)]
    enable_assert_tick: Option<u64>,

    /// Output JSON file for observation records.
    #[clap(long)]
    output_json: Option<PathBuf>,

    /// Config file path. Defaults to discovering `stimbench.toml`.
    #[clap(long)]
    config: Option<PathBuf>,
}

fn main() {
    clilog::init_stderr_color_debug();

    let args = <Args as clap::Parser>::parse();

    let config = if let Some(path) = &args.config {
        match BenchConfig::load(path) {
            Ok(mut c) => {
                c.resolve_paths(path.parent().unwrap_or(std::path::Path::new(".")));
                c
            }
            Err(e) => {
                clilog::error!("{}", e);
                std::process::exit(2);
            }
        }
    } else if let Some((config, path)) = BenchConfig::discover() {
        clilog::info!("Using config file {}", path.display());
        config
    } else {
        BenchConfig::default()
    };

    // CLI overrides config; defaults match the original testbench run.
    let params = config.run.effective(
        args.total_ticks,
        args.reset_release_tick,
        args.enable_assert_tick,
    );
    let output_json = args.output_json.or(config.report.json_output);

    clilog::info!(
        "Run parameters: total_ticks={}, reset_release_tick={}, enable_assert_tick={}",
        params.total_ticks,
        params.reset_release_tick,
        params.enable_assert_tick
    );

    let sequencer = match Sequencer::with_thresholds(
        params.total_ticks,
        params.reset_release_tick,
        params.enable_assert_tick,
    ) {
        Ok(s) => s,
        Err(e) => {
            clilog::error!("invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    let mut dut = CounterModel::new();
    println!("Starting counter simulation...");

    let records = match sequencer.run(&mut dut) {
        Ok(records) => records,
        Err(e) => {
            clilog::error!("simulation aborted: {}", e);
            std::process::exit(1);
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::write_report(&mut out, &records).expect("Failed to write report");

    if let Some(path) = &output_json {
        report::write_json(path, &records).expect("Failed to write JSON records");
        clilog::info!("Wrote {} records to {}", records.len(), path.display());
    }

    report::write_completion(&mut out).expect("Failed to write report");
    out.flush().expect("Failed to write report");
}
