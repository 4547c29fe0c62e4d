// ================================================================================
// Integration tests for session files and configuration feeding segmentation
// File: tests/session_tests.rs
// ================================================================================

use gait_core::simulation::{GaitPhase, SignalGenerator};
use gait_core::{segment_gait, ConfigLoader, GaitError, SegmentType, SessionConfig, SessionReader};
use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_session(magnitude: &[f64], device_id: u32) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".csv").unwrap();
    writeln!(file, "# Location: Test Arena").unwrap();
    writeln!(file, "# Notes: stand, then canter").unwrap();
    writeln!(file, "# Start Time: 2024-05-01T10:00:00").unwrap();
    writeln!(file, "timestamp,device_id,sequence,x,y,z").unwrap();
    for (i, m) in magnitude.iter().enumerate() {
        writeln!(file, "2024-05-01 10:00:00.{:06},{},{},0.0,0.0,{}", i, device_id, i, m).unwrap();
    }
    writeln!(file, "# End Time: 2024-05-01T10:05:00").unwrap();
    writeln!(file, "# Total Samples: {}", magnitude.len()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_session_file_end_to_end() {
    let magnitude = SignalGenerator::new(194, 21)
        .generate(&[GaitPhase::stationary(10.0), GaitPhase::canter(10.0)]);
    let file = write_session(&magnitude, 1);

    let session = SessionReader::new(SessionConfig {
        max_points: 0,
        device_id: None,
    })
    .read_path(file.path())
    .unwrap();

    assert_eq!(session.metadata.location.as_deref(), Some("Test Arena"));
    assert_eq!(session.metadata.start_time.as_deref(), Some("2024-05-01T10:00:00"));
    assert_eq!(session.metadata.end_time.as_deref(), Some("2024-05-01T10:05:00"));
    assert_eq!(session.metadata.total_samples, Some(magnitude.len() as u64));
    assert_eq!(session.len(), magnitude.len());
    assert_eq!(session.skipped_rows, 0);

    let result = segment_gait(&session.magnitudes(), &Default::default()).unwrap();
    assert_eq!(result.boundaries, vec![0, 1940]);
    assert_eq!(result.types, vec![SegmentType::Stationary, SegmentType::Moving]);
}

#[test]
fn test_default_point_cap_truncates_long_sessions() {
    let magnitude = vec![1.0; 12_000];
    let file = write_session(&magnitude, 3);

    let session = SessionReader::default().read_path(file.path()).unwrap();
    assert_eq!(session.len(), 10_000);
    assert_eq!(session.metadata.total_samples, Some(12_000));
    assert_eq!(session.skipped_rows, 0);

    let filtered = SessionReader::new(SessionConfig {
        max_points: 0,
        device_id: Some(4),
    })
    .read_path(file.path())
    .unwrap();
    assert!(filtered.is_empty());
}

#[test]
fn test_missing_session_is_io_error() {
    let err = SessionReader::default()
        .read_path("/nonexistent/gait/session_42.csv")
        .unwrap_err();
    assert!(matches!(err, GaitError::Io { .. }));
    assert!(!err.is_contract_violation());
}

#[test]
#[serial]
fn test_config_file_drives_segmentation() {
    let mut file = NamedTempFile::with_suffix(".toml").unwrap();
    writeln!(file, "[segmentation]\nsample_rate = 100\nmin_segment_seconds = 1.0").unwrap();
    writeln!(file, "[session]\nmax_points = 500").unwrap();
    file.flush().unwrap();

    let config = ConfigLoader::with_paths(vec![file.path().to_path_buf()])
        .without_environment()
        .load()
        .unwrap();

    assert_eq!(config.segmentation.sample_rate, 100);
    assert_eq!(config.segmentation.movement_threshold, 0.02);
    assert_eq!(config.session.max_points, 500);

    let magnitude = SignalGenerator::new(100, 22)
        .generate(&[GaitPhase::stationary(5.0), GaitPhase::canter(5.0)]);
    let result = segment_gait(&magnitude, &config.segmentation).unwrap();

    assert_eq!(result.params.sample_rate, 100);
    assert_eq!(result.boundaries, vec![0, 500]);
}
