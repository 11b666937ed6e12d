// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use tempfile::TempDir;

use ata_tools::{io::read_text_file, AntennaId, Polarization, ResolvedCalibration};

use crate::{ata_tools, get_cmd_output, write_table};

#[test]
fn test_cal_polys_measured() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let table = write_table(tmp_dir.path());

    #[rustfmt::skip]
    let cmd = ata_tools()
        .args([
            "cal-polys", "ant3c,1c",
            "--table", &table.display().to_string(),
            "--detector", "0.5",
        ])
        .ok();
    assert!(cmd.is_ok(), "cal-polys failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Calibration curves"), "{stdout}");
    assert!(stdout.contains("x(0.5) = 0.5"), "{stdout}");
    assert!(stdout.contains("(uncertain); y(0.5) = 0.25"), "{stdout}");
    assert!(!stdout.contains("no measurements"), "{stdout}");
}

#[test]
fn test_cal_polys_fallback_to_default() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let table = write_table(tmp_dir.path());
    let output = tmp_dir.path().join("cal.toml");

    #[rustfmt::skip]
    let cmd = ata_tools()
        .args([
            "cal-polys", "3c,2a",
            "-t", &table.display().to_string(),
            "-o", &output.display().to_string(),
        ])
        .ok();
    assert!(cmd.is_ok(), "cal-polys failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("2a (no measurements; using 1c's curves)"), "{stdout}");

    let resolved: ResolvedCalibration = read_text_file(&output).unwrap();
    let two_a = AntennaId::new("2a");
    assert_eq!(resolved.filled_from_default, vec![two_a.clone()]);
    assert_eq!(resolved.default_antenna.as_str(), "1c");
    // The noise measurement of 2a must not be used.
    assert_eq!(
        resolved.curves.get(&two_a, Polarization::X).unwrap().coefficients,
        [0.0, 0.0, 0.0, 0.0, 2.0, 1.0]
    );
    assert_eq!(
        resolved.curves.get(&two_a, Polarization::Y).unwrap().coefficients,
        [0.0, 0.0, 0.0, 0.0, 0.0, 3.0]
    );
    assert_eq!(
        resolved.lower_bounds()[&(AntennaId::new("3c"), Polarization::X)],
        -1.0
    );
}

#[test]
fn test_cal_polys_missing_polarization() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let table = write_table(tmp_dir.path());

    let cmd = ata_tools()
        .args(["cal-polys", "3c,4e", "-t", &table.display().to_string()])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(
        stderr.contains("Missing polarization for antenna 4e"),
        "{stderr}"
    );
}

#[test]
fn test_cal_polys_invalid_antenna() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let table = write_table(tmp_dir.path());

    let cmd = ata_tools()
        .args(["cal-polys", "3c,ant9z,zz", "-t", &table.display().to_string()])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(
        stderr.contains("Antenna '9z' is not a valid antenna name"),
        "{stderr}"
    );
}

#[test]
fn test_cal_polys_custom_config() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let table = write_table(tmp_dir.path());
    let config = tmp_dir.path().join("array.json");
    std::fs::write(
        &config,
        r#"{"default_antenna": "3c", "valid_antennas": ["3c", "9z"]}"#,
    )
    .unwrap();
    let output = tmp_dir.path().join("cal.json");

    #[rustfmt::skip]
    let cmd = ata_tools()
        .args([
            "--config", &config.display().to_string(),
            "cal-polys", "9z",
            "-t", &table.display().to_string(),
            "-o", &output.display().to_string(),
        ])
        .ok();
    assert!(cmd.is_ok(), "cal-polys failed: {}", cmd.err().unwrap());

    let resolved: ResolvedCalibration = read_text_file(&output).unwrap();
    let nine_z = resolved.curves.antenna(&AntennaId::new("9z")).unwrap();
    assert_eq!(nine_z.x.coefficients, [0.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    assert!(!nine_z.y.is_coherent);

    // 1c isn't valid with this configuration.
    let cmd = ata_tools()
        .args([
            "--config",
            &config.display().to_string(),
            "cal-polys",
            "1c",
            "-t",
            &table.display().to_string(),
        ])
        .ok();
    assert!(cmd.is_err());
}

#[test]
fn test_cal_polys_dry_run() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let table = write_table(tmp_dir.path());
    let output = tmp_dir.path().join("cal.yaml");

    #[rustfmt::skip]
    let cmd = ata_tools()
        .args([
            "cal-polys", "3c",
            "-t", &table.display().to_string(),
            "-o", &output.display().to_string(),
            "--dry-run",
        ])
        .ok();
    assert!(cmd.is_ok(), "cal-polys failed: {}", cmd.err().unwrap());
    assert!(!output.exists());
}

#[test]
fn test_cal_polys_plot_needs_png() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let table = write_table(tmp_dir.path());
    let output = tmp_dir.path().join("curves.jpg");

    #[rustfmt::skip]
    let cmd = ata_tools()
        .args([
            "cal-polys-plot", "3c",
            "-t", &table.display().to_string(),
            "-o", &output.display().to_string(),
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    #[cfg(feature = "plotting")]
    assert!(stderr.contains("PNG"), "{stderr}");
    #[cfg(not(feature = "plotting"))]
    assert!(stderr.contains("\"plotting\" feature"), "{stderr}");
}
