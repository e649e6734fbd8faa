//! # Pipeline Stage Tests / 管道阶段测试
//!
//! Drives the file-to-file stages directly, without the binary.
//!
//! 直接驱动文件到文件的各阶段，不经过二进制文件。

use chrono::{Local, TimeZone};
use suite_metrics::core::PipelineError;
use suite_metrics::core::factory::SequenceGenerator;
use suite_metrics::core::pipeline::{TrendOptions, export_stage, metrics_stage, trend_stage};

mod common;

fn options(minute: u32) -> TrendOptions<'static> {
    TrendOptions {
        capacity: 30,
        window: 5,
        date_locale: "es-PE",
        captured_at: Local.with_ymd_and_hms(2024, 3, 9, 10, minute, 0).unwrap(),
    }
}

#[test]
fn test_missing_results_is_a_typed_error() {
    let temp_dir = common::setup_workspace();
    let dir = common::reports_dir(&temp_dir);

    let err = metrics_stage(&dir.join("results.json"), &dir.join("summary.json")).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<PipelineError>(),
        Some(PipelineError::MissingInput { .. })
    ));
}

#[test]
fn test_thirty_one_runs_keep_thirty() {
    let temp_dir = common::setup_workspace();
    let dir = common::reports_dir(&temp_dir);
    let mut seq = SequenceGenerator::new();
    common::write_json(&dir, "results.json", &common::retried_pass_report(&mut seq));
    metrics_stage(&dir.join("results.json"), &dir.join("summary.json")).unwrap();

    for minute in 0..31 {
        trend_stage(&dir.join("summary.json"), &dir.join("history.json"), &options(minute)).unwrap();
    }

    let history = common::read_json_value(&dir.join("history.json"));
    let entries = history.as_array().unwrap();
    assert_eq!(entries.len(), 30);
    assert_eq!(entries[0]["time"], "10:01:00");
    assert_eq!(entries[29]["time"], "10:30:00");
}

#[test]
fn test_trends_appear_at_ten_entries() {
    let temp_dir = common::setup_workspace();
    let dir = common::reports_dir(&temp_dir);
    let mut seq = SequenceGenerator::new();
    common::write_json(&dir, "results.json", &common::retried_pass_report(&mut seq));
    metrics_stage(&dir.join("results.json"), &dir.join("summary.json")).unwrap();

    for minute in 0..9 {
        let (_, trends) =
            trend_stage(&dir.join("summary.json"), &dir.join("history.json"), &options(minute)).unwrap();
        assert!(trends.is_none());
    }
    let (history, trends) =
        trend_stage(&dir.join("summary.json"), &dir.join("history.json"), &options(9)).unwrap();

    assert_eq!(history.len(), 10);
    assert!(trends.is_some());
}

#[test]
fn test_export_of_empty_history_writes_nothing() {
    let temp_dir = common::setup_workspace();
    let dir = common::reports_dir(&temp_dir);
    std::fs::write(dir.join("history.json"), "[]").unwrap();

    let exported = export_stage(&dir.join("history.json"), &dir.join("trends.json"), 5).unwrap();

    assert!(exported.is_none());
    assert!(!dir.join("trends.json").exists());
}

#[test]
fn test_export_averages_every_stored_entry() {
    let temp_dir = common::setup_workspace();
    let dir = common::reports_dir(&temp_dir);
    let entries: Vec<serde_json::Value> = (0..35)
        .map(|i| {
            let pass_rate = if i < 5 { "0.0%" } else { "100.0%" };
            serde_json::json!({
                "timestamp": "2024-03-09T10:00:00.000Z",
                "total": 1, "passed": 1, "failed": 0, "skipped": 0, "flaky": 0,
                "flakyRate": "0.0%", "passRate": pass_rate, "duration": "1.0s"
            })
        })
        .collect();
    common::write_json(&dir, "history.json", &entries);

    let (trends, data_points) = export_stage(&dir.join("history.json"), &dir.join("trends.json"), 5)
        .unwrap()
        .expect("non-empty history");

    assert_eq!(data_points, 35);
    assert!((trends.avg_pass_rate - 3000.0 / 35.0).abs() < 1e-9);
}
