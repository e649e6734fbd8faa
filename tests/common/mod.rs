// Shared test helpers for integration tests
#![allow(dead_code)]

use assert_cmd::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use suite_metrics::core::factory::{self, SequenceGenerator};
use suite_metrics::models::{ResultStatus, Suite, TestRunReport};
use tempfile::{TempDir, tempdir};

/// A temporary working directory with an empty `reports/` directory.
pub fn setup_workspace() -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    fs::create_dir_all(temp_dir.path().join("reports")).expect("Failed to create reports directory");
    temp_dir
}

pub fn reports_dir(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("reports")
}

/// Writes `value` as pretty JSON to `dir/name`.
pub fn write_json<T: Serialize>(dir: &Path, name: &str, value: &T) -> PathBuf {
    let path = dir.join(name);
    let json = serde_json::to_string_pretty(value).expect("Failed to serialize fixture");
    fs::write(&path, json).expect("Failed to write fixture");
    path
}

pub fn read_json_value(path: &Path) -> serde_json::Value {
    let content = fs::read_to_string(path).expect("Failed to read output file");
    serde_json::from_str(&content).expect("Output is not valid JSON")
}

/// A suite holding one spec with one single-run test.
fn one_test_suite(seq: &mut SequenceGenerator, status: ResultStatus) -> Suite {
    let test = factory::single_run(seq, status);
    let spec = factory::spec(seq, vec![test]);
    factory::suite(seq, vec![spec], Vec::new(), None)
}

/// Shard A: 2000ms, 5 expected, 1 unexpected, 0 flaky, 1 skipped, with config.
pub fn shard_a(seq: &mut SequenceGenerator) -> TestRunReport {
    let mut report = factory::report(
        vec![one_test_suite(seq, ResultStatus::Passed)],
        Some(factory::run_stats(2000.0, 5, 1, 0, 1)),
    );
    report.config = Some(factory::config("/shard-a"));
    report
}

/// Shard B: 1000ms, 3 expected, 0 unexpected, 1 flaky, 0 skipped.
pub fn shard_b(seq: &mut SequenceGenerator) -> TestRunReport {
    factory::report(
        vec![one_test_suite(seq, ResultStatus::Failed)],
        Some(factory::run_stats(1000.0, 3, 0, 1, 0)),
    )
}

/// The one-test flaky scenario: failed, then passed on retry.
pub fn retried_pass_report(seq: &mut SequenceGenerator) -> TestRunReport {
    let test = factory::test(seq, &[(ResultStatus::Failed, 0), (ResultStatus::Passed, 1)]);
    let spec = factory::spec(seq, vec![test]);
    factory::report(vec![factory::suite(seq, vec![spec], Vec::new(), Some(1500.0))], None)
}

/// `suite-metrics` running inside `temp_dir` with English messages and no
/// environment overrides.
pub fn suite_metrics(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("suite-metrics").expect("Failed to find binary");
    cmd.current_dir(temp_dir.path())
        .env_remove("SUITE_METRICS_REPORTS_DIR")
        .env_remove("SUITE_METRICS_LANG")
        .env_remove("RUST_LOG")
        .env("CI", "1")
        .arg("--lang")
        .arg("en");
    cmd
}
