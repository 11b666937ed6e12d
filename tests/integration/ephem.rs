// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use indoc::indoc;
use tempfile::TempDir;

use crate::{ata_tools, get_cmd_output};

#[test]
fn test_az_swivel() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let output = tmp_dir.path().join("az.txt");

    #[rustfmt::skip]
    let cmd = ata_tools()
        .args([
            "ephem-az-swivel",
            "--az-start", "0",
            "--az-end", "90",
            "--el", "45",
            "--start", "100",
            "--span", "10",
            "--steps", "4",
            "--inv-radius", "1e-10",
            "-o", &output.display().to_string(),
        ])
        .ok();
    assert!(cmd.is_ok(), "ephem-az-swivel failed: {}", cmd.err().unwrap());

    let contents = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        contents,
        indoc! {"
            100000000000  0.00000  45.00000  1.0000000000E-10
            103333333333  30.00000  45.00000  1.0000000000E-10
            106666666667  60.00000  45.00000  1.0000000000E-10
            110000000000  90.00000  45.00000  1.0000000000E-10
        "}
    );
}

#[test]
fn test_el_swivel_negative_values() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let output = tmp_dir.path().join("el.txt");

    #[rustfmt::skip]
    let cmd = ata_tools()
        .args([
            "ephem-el-swivel",
            "--az", "-30",
            "--el-start", "-10",
            "--el-end", "10",
            "--start", "1700000000",
            "--span", "60",
            "--steps", "3",
            "-o", &output.display().to_string(),
        ])
        .ok();
    assert!(cmd.is_ok(), "ephem-el-swivel failed: {}", cmd.err().unwrap());

    let contents = std::fs::read_to_string(&output).unwrap();
    let lines = contents.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "1700000000000000000  -30.00000  -10.00000  0.0000000000E+00"
    );
    assert_eq!(
        lines[2],
        "1700000060000000000  -30.00000  10.00000  0.0000000000E+00"
    );
}

#[test]
fn test_swivel_starting_from_now() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let output = tmp_dir.path().join("now.txt");

    #[rustfmt::skip]
    let cmd = ata_tools()
        .args([
            "ephem-az-swivel",
            "--az-start", "0",
            "--az-end", "10",
            "--el", "45",
            "--start-in", "60",
            "--span", "10",
            "--steps", "1",
            "-o", &output.display().to_string(),
        ])
        .ok();
    assert!(cmd.is_ok(), "ephem-az-swivel failed: {}", cmd.err().unwrap());

    let contents = std::fs::read_to_string(&output).unwrap();
    let tai_ns: i64 = contents.split_whitespace().next().unwrap().parse().unwrap();
    let unix_s = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs_f64();
    let diff = tai_ns as f64 / 1e9 - unix_s;
    assert!((diff - 97.0).abs() < 10.0, "{diff}");
}

#[test]
fn test_swivel_bad_args() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let output = tmp_dir.path().join("bad.txt");

    #[rustfmt::skip]
    let cmd = ata_tools()
        .args([
            "ephem-az-swivel",
            "--az-start", "0", "--az-end", "10", "--el", "45",
            "--start", "100", "--span", "10", "--steps", "0",
            "-o", &output.display().to_string(),
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("at least one step"), "{stderr}");
    assert!(!output.exists());

    #[rustfmt::skip]
    let cmd = ata_tools()
        .args([
            "ephem-el-swivel",
            "--az", "0", "--el-start", "10", "--el-end", "45",
            "--start", "100", "--start-in", "5", "--span", "10", "--steps", "2",
            "-o", &output.display().to_string(),
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("--start-in"), "{stderr}");
}
