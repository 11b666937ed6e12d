// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tests to ensure there is no stderr output for successful commands.

use tempfile::TempDir;

use crate::{ata_tools, get_cmd_output, write_table};

#[test]
fn test_cal_polys_no_stderr() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let table = write_table(tmp_dir.path());
    let output = tmp_dir.path().join("cal.json");

    // 3c has an uncertain measurement and 2a falls back to the default
    // antenna; neither should be written to stderr.
    #[rustfmt::skip]
    let cmd = ata_tools()
        .args([
            "cal-polys", "3c,2a",
            "-t", &table.display().to_string(),
            "-o", &output.display().to_string(),
            "-v",
        ])
        .ok();
    assert!(cmd.is_ok(), "cal-polys failed: {}", cmd.err().unwrap());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
}

#[test]
fn test_ephem_no_stderr() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let output = tmp_dir.path().join("ephem.txt");

    #[rustfmt::skip]
    let cmd = ata_tools()
        .args([
            "ephem-el-swivel",
            "--az", "0", "--el-start", "20", "--el-end", "80",
            "--start", "100", "--span", "10", "--steps", "7",
            "-o", &output.display().to_string(),
        ])
        .ok();
    assert!(cmd.is_ok(), "ephem-el-swivel failed: {}", cmd.err().unwrap());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
}
