//! Recorder CSV and JSON export

use blocksim::prelude::*;
use std::fs;

fn recorded(steps: usize) -> Recorder {
    let ramp_like = shared(Step::unit("u", 0.05));
    let lag = shared(FirstOrderDelay::lag("lag", 0.1, ramp_like.clone()).unwrap());
    let mut recorder = Recorder::new(vec![ramp_like, lag]).unwrap();
    let mut system = System::new();
    system.add(&mut recorder);
    system.run(steps as f64 * 0.01, 0.01).unwrap();
    recorder
}

#[test]
fn test_save_csv_header_and_rows() {
    let recorder = recorded(10);
    let dir = tempfile::tempdir().unwrap();
    let path = recorder.save_csv(dir.path().join("run.csv")).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();

    assert_eq!(lines[0], "time [s],u,lag");
    assert_eq!(lines[1], "0,0,0");
    assert!(lines[10].starts_with("0.09,1,"));
    // 1 header + 10 data rows
    assert_eq!(lines.len(), 11);
}

#[test]
fn test_save_csv_adds_extension() {
    let recorder = recorded(3);
    let dir = tempfile::tempdir().unwrap();
    let path = recorder.save_csv(dir.path().join("run")).unwrap();
    assert_eq!(path.extension().unwrap(), "csv");
    assert!(path.exists());
}

#[test]
fn test_save_csv_empty_recorder() {
    let recorder = Recorder::new(vec![shared(Step::default())]).unwrap();
    let mut buffer = Vec::new();
    recorder.write_csv(&mut buffer).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), "time [s],step\n");
}

#[test]
fn test_save_csv_missing_directory() {
    let recorder = recorded(2);
    let dir = tempfile::tempdir().unwrap();
    let err = recorder
        .save_csv(dir.path().join("missing").join("run.csv"))
        .unwrap_err();
    assert!(matches!(err, SimError::Io(_)));
}

#[test]
fn test_json_export() {
    let recorder = recorded(4);
    let json = recorder.to_json().unwrap();
    let series: Vec<Series> = serde_json::from_str(&json).unwrap();

    assert_eq!(series.len(), 2);
    assert_eq!(series[0].name, "u");
    assert_eq!(series[1].name, "lag");
    assert_eq!(series[0].t, vec![0.0, 0.01, 0.02, 0.03]);
}
