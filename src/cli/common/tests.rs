// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use tempfile::TempDir;

use super::*;

fn args(antennas: &str, table: PathBuf) -> CalInputArgs {
    CalInputArgs {
        antennas: antennas.to_string(),
        table,
    }
}

#[test]
fn test_cal_input_args() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let table = tmp_dir.path().join("table.json");
    std::fs::write(&table, "{}").unwrap();

    let result = args("ant1c,3c", table.clone()).parse(&ArrayConfig::default());
    assert!(result.is_ok(), "{:?}", result.err());
    let (antennas, store) = result.unwrap();
    assert_eq!(
        antennas.iter().map(|a| a.as_str()).collect::<Vec<_>>(),
        vec!["1c", "3c"]
    );
    assert_eq!(store.path(), table.as_path());
}

#[test]
fn test_cal_input_args_bad_antenna() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let table = tmp_dir.path().join("table.json");
    std::fs::write(&table, "{}").unwrap();

    let result = args("1c,ant9z", table).parse(&ArrayConfig::default());
    match result {
        Err(AtaToolsError::Antenna(msg)) => assert!(msg.contains("9z"), "{msg}"),
        other => panic!("Expected an antenna error, got {other:?}"),
    }
}

#[test]
fn test_cal_input_args_bad_table() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");

    let result = args("1c", tmp_dir.path().join("table.csv")).parse(&ArrayConfig::default());
    assert!(matches!(result, Err(AtaToolsError::FileFormat(_))));

    let result = args("1c", tmp_dir.path().join("table.toml")).parse(&ArrayConfig::default());
    assert!(matches!(result, Err(AtaToolsError::Store(_))));
}
