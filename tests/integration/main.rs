// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests.
//!
//! Some help for laying out these tests was taken from:
//! https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html

mod cal_polys;
mod ephem;
mod no_stderr;

use std::{
    path::{Path, PathBuf},
    process::Output,
    str::from_utf8,
};

use assert_cmd::{output::OutputError, Command};
use indoc::indoc;

fn ata_tools() -> Command {
    Command::cargo_bin("ata-tools").unwrap()
}

fn get_cmd_output(result: Result<Output, OutputError>) -> (String, String) {
    let output = match result {
        Ok(o) => o,
        Err(o) => o.as_output().unwrap().clone(),
    };
    (
        from_utf8(&output.stdout).unwrap().to_string(),
        from_utf8(&output.stderr).unwrap().to_string(),
    )
}

/// A measurement table with both polarizations of 1c and 3c, only the x
/// polarization of 4e, and a noise measurement for 2a (which doesn't count).
const TABLE: &str = indoc! {r#"
    feed_parts:
      - antenna: 1c
        part_serial: PB-0001
      - antenna: 3c
        part_serial: PB-0003
      - antenna: 4e
        part_serial: PB-0004
      - antenna: 2a
        part_serial: PB-0002

    measurements:
      - {part_serial: PB-0001, polarization: x, type: cw, is_coherent: true,
         low_bound: 0.0, high_bound: 10.0, p0: 1.0, p1: 2.0, p2: 0.0, p3: 0.0, p4: 0.0, p5: 0.0}
      - {part_serial: PB-0001, polarization: y, type: cw, is_coherent: true,
         low_bound: 0.0, high_bound: 10.0, p0: 3.0, p1: 0.0, p2: 0.0, p3: 0.0, p4: 0.0, p5: 0.0}
      - {part_serial: PB-0003, polarization: x, type: cw, is_coherent: true,
         low_bound: -1.0, high_bound: 1.0, p0: 0.0, p1: 1.0, p2: 0.0, p3: 0.0, p4: 0.0, p5: 0.0}
      - {part_serial: PB-0003, polarization: y, type: cw, is_coherent: false,
         low_bound: -1.0, high_bound: 1.0, p0: 0.0, p1: 0.0, p2: 1.0, p3: 0.0, p4: 0.0, p5: 0.0}
      - {part_serial: PB-0004, polarization: x, type: cw, is_coherent: true,
         low_bound: 0.0, high_bound: 1.0, p0: 0.0, p1: 0.0, p2: 0.0, p3: 0.0, p4: 0.0, p5: 1.0}
      - {part_serial: PB-0002, polarization: x, type: noise, is_coherent: true,
         low_bound: 0.0, high_bound: 1.0, p0: 9.0, p1: 0.0, p2: 0.0, p3: 0.0, p4: 0.0, p5: 0.0}
"#};

/// Write the measurement table into `dir`.
fn write_table(dir: &Path) -> PathBuf {
    let table = dir.join("table.yaml");
    std::fs::write(&table, TABLE).unwrap();
    table
}
