//! # Visual Report Integration Tests / 视觉报告集成测试

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use suite_metrics::reporting::visual::find_visual_diffs;

mod common;

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"\x89PNG").unwrap();
}

#[test]
fn test_diffs_are_found_with_siblings() {
    let temp_dir = common::setup_workspace();
    let results = temp_dir.path().join("test-results");
    let dir = results.join("home-page-chromium");
    touch(&dir.join("hero-diff.png"));
    touch(&dir.join("hero-actual.png"));
    touch(&dir.join("hero-expected.png"));
    touch(&results.join("login-firefox").join("form-diff.png"));

    let diffs = find_visual_diffs(&results).unwrap();

    assert_eq!(diffs.len(), 2);
    assert_eq!(diffs[0].name, "hero");
    assert_eq!(diffs[0].test, "home-page-chromium");
    assert!(diffs[0].actual.is_some());
    assert!(diffs[0].expected.is_some());
    assert_eq!(diffs[1].name, "form");
    assert!(diffs[1].actual.is_none());
}

#[test]
fn test_missing_directory_has_no_diffs() {
    let temp_dir = common::setup_workspace();
    assert!(find_visual_diffs(&temp_dir.path().join("absent")).unwrap().is_empty());
}

#[test]
fn test_visual_report_command_renders_cards() {
    let temp_dir = common::setup_workspace();
    let dir = temp_dir.path().join("test-results").join("home-page-chromium");
    touch(&dir.join("hero-diff.png"));
    touch(&dir.join("hero-expected.png"));

    common::suite_metrics(&temp_dir)
        .arg("visual-report")
        .assert()
        .success()
        .stdout(predicate::str::contains("Visual differences found: 1"));

    let html = fs::read_to_string(temp_dir.path().join("reports").join("visual-diff-report.html")).unwrap();
    assert!(html.contains("hero"));
    assert!(html.contains("../test-results/home-page-chromium/hero-diff.png"));
    assert!(html.contains("Expected"));
}

#[test]
fn test_visual_report_command_without_diffs() {
    let temp_dir = common::setup_workspace();

    common::suite_metrics(&temp_dir)
        .arg("visual-report")
        .assert()
        .success()
        .stdout(predicate::str::contains("No visual differences found"));

    let html = fs::read_to_string(temp_dir.path().join("reports").join("visual-diff-report.html")).unwrap();
    assert!(html.contains("All visual tests passed"));
}
