//! Loading dashboard configuration from disk.

mod common;

use std::io::Write;

use bim_schedule::{ConfigError, DashboardConfig};

#[test]
fn test_load_override_from_file() {
    common::init_tracing();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[timeline]\nwindow_start = \"2025-03-01\"\nwindow_end = \"2025-03-31\"\nstep_percent = 5\n\n[cost_planner]\nexpanded_bq = [\"BQ001\"]"
    )
    .unwrap();

    let config = DashboardConfig::load(file.path()).unwrap();
    assert_eq!(config.timeline.step_percent, 5);
    assert_eq!(config.timeline_window().unwrap().total_days(), 30.0);
    assert_eq!(config.cost_planner.expanded_bq.len(), 1);
    assert_eq!(config.cost_planner.indent_px, 12);
}

#[test]
fn test_missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = DashboardConfig::load(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::Read(_))));
}
