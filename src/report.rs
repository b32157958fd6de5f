// SPDX-FileCopyrightText: Copyright (c) 2024 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Observation report rendering.
//!
//! The text contract is a header with column labels, one fixed-column
//! line per record (`{sample_index}\t{reset_n}\t{enable}\t{count}`),
//! and a completion message emitted after the port has been finalized.
//! Records can also be dumped as JSON for downstream tooling.

use std::io::{self, Write};
use std::path::Path;

use crate::sequencer::ObservationRecord;

/// Write the header and one line per record.
pub fn write_report<W: Write>(out: &mut W, records: &[ObservationRecord]) -> io::Result<()> {
    writeln!(out, "Cycle\tReset\tEnable\tCount")?;
    writeln!(out, "=====\t=====\t======\t=====")?;
    for rec in records {
        writeln!(
            out,
            "{:4}\t{}\t{}\t{:3}",
            rec.sample_index, rec.reset_n, rec.enable, rec.count
        )?;
    }
    Ok(())
}

/// Write the completion message. Callers emit this only after
/// `finalize()` has returned.
pub fn write_completion<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Simulation completed successfully!")
}

/// Dump the records to a JSON file.
pub fn write_json(path: &Path, records: &[ObservationRecord]) -> io::Result<()> {
    let json = serde_json::to_string_pretty(records)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    std::fs::write(path, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<ObservationRecord> {
        vec![
            ObservationRecord {
                sample_index: 0,
                reset_n: 0,
                enable: 0,
                count: 0,
            },
            ObservationRecord {
                sample_index: 1,
                reset_n: 1,
                enable: 1,
                count: 7,
            },
        ]
    }

    #[test]
    fn test_report_layout() {
        let mut buf = Vec::new();
        write_report(&mut buf, &sample_records()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Cycle\tReset\tEnable\tCount");
        assert_eq!(lines[1], "=====\t=====\t======\t=====");
        assert_eq!(lines[2], "   0\t0\t0\t  0");
        assert_eq!(lines[3], "   1\t1\t1\t  7");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_completion_message() {
        let mut buf = Vec::new();
        write_completion(&mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "\nSimulation completed successfully!\n"
        );
    }

    #[test]
    fn test_json_round_trip() {
        // Unique per-process path so parallel test runs do not collide.
        let path = std::env::temp_dir().join(format!(
            "stimbench_records_{}.json",
            std::process::id()
        ));
        write_json(&path, &sample_records()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
        assert_eq!(parsed[1]["count"], 7);
        std::fs::remove_file(&path).ok();
    }
}
