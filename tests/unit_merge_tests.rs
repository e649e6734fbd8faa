//! # Merge Unit Tests / 合并单元测试

use suite_metrics::core::factory::{self, SequenceGenerator};
use suite_metrics::merge::{SourceOutcome, merge_files};

mod common;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_two_shards_are_summed() {
    let temp_dir = common::setup_workspace();
    let dir = common::reports_dir(&temp_dir);
    let mut seq = SequenceGenerator::new();
    common::write_json(&dir, "a.json", &common::shard_a(&mut seq));
    common::write_json(&dir, "b.json", &common::shard_b(&mut seq));

    let result = merge_files(&dir, &names(&["a.json", "b.json"]));

    assert_eq!(result.merged_count(), 2);
    let report = result.report.expect("merged report");
    let stats = report.stats.expect("merged stats");
    assert_eq!(stats.duration, 3000.0);
    assert_eq!(stats.expected, 8);
    assert_eq!(stats.unexpected, 1);
    assert_eq!(stats.flaky, 1);
    assert_eq!(stats.skipped, 1);
    assert_eq!(stats.total, Some(10));
    assert_eq!(stats.pass_rate.as_deref(), Some("90.00"));
    assert!(stats.end_time.is_some());
    assert_eq!(report.suites.len(), 2);
}

#[test]
fn test_config_is_first_wins() {
    let temp_dir = common::setup_workspace();
    let dir = common::reports_dir(&temp_dir);
    let mut seq = SequenceGenerator::new();
    let mut second = common::shard_a(&mut seq);
    second.config = Some(serde_json::json!({ "rootDir": "/second" }));
    common::write_json(&dir, "b.json", &common::shard_b(&mut seq));
    common::write_json(&dir, "a.json", &common::shard_a(&mut seq));
    common::write_json(&dir, "c.json", &second);

    let result = merge_files(&dir, &names(&["b.json", "a.json", "c.json"]));

    let config = result.report.and_then(|r| r.config).expect("adopted config");
    assert_eq!(config["rootDir"], "/shard-a");
}

#[test]
fn test_same_file_twice_doubles_counts() {
    let temp_dir = common::setup_workspace();
    let dir = common::reports_dir(&temp_dir);
    let mut seq = SequenceGenerator::new();
    common::write_json(&dir, "a.json", &common::shard_a(&mut seq));

    let result = merge_files(&dir, &names(&["a.json", "a.json"]));

    let stats = result.report.and_then(|r| r.stats).expect("merged stats");
    assert_eq!(stats.expected, 10);
    assert_eq!(stats.unexpected, 2);
    assert_eq!(stats.skipped, 2);
    assert_eq!(stats.total, Some(12));
    assert_eq!(stats.duration, 4000.0);
}

#[test]
fn test_missing_and_malformed_are_skipped() {
    let temp_dir = common::setup_workspace();
    let dir = common::reports_dir(&temp_dir);
    let mut seq = SequenceGenerator::new();
    common::write_json(&dir, "good.json", &common::shard_b(&mut seq));
    std::fs::write(dir.join("broken.json"), "{ not json").unwrap();

    let result = merge_files(&dir, &names(&["absent.json", "broken.json", "good.json"]));

    assert!(matches!(result.outcomes[0], SourceOutcome::Missing { .. }));
    assert!(matches!(result.outcomes[1], SourceOutcome::Malformed { .. }));
    assert!(result.outcomes[2].is_merged());
    let stats = result.report.and_then(|r| r.stats).expect("merged stats");
    assert_eq!(stats.expected, 3);
}

#[test]
fn test_nothing_merged_yields_no_report() {
    let temp_dir = common::setup_workspace();
    let dir = common::reports_dir(&temp_dir);

    let result = merge_files(&dir, &names(&["a.json", "b.json"]));

    assert_eq!(result.merged_count(), 0);
    assert!(result.report.is_none());
}

#[test]
fn test_zero_total_pass_rate() {
    let temp_dir = common::setup_workspace();
    let dir = common::reports_dir(&temp_dir);
    let empty = factory::report(Vec::new(), None);
    common::write_json(&dir, "empty.json", &empty);

    let result = merge_files(&dir, &names(&["empty.json"]));

    let stats = result.report.and_then(|r| r.stats).expect("merged stats");
    assert_eq!(stats.total, Some(0));
    assert_eq!(stats.pass_rate.as_deref(), Some("0.00"));
}

#[test]
fn test_pass_rate_ties_round_up() {
    let temp_dir = common::setup_workspace();
    let dir = common::reports_dir(&temp_dir);
    let shard = factory::report(Vec::new(), Some(factory::run_stats(0.0, 97, 703, 0, 0)));
    common::write_json(&dir, "tie.json", &shard);

    let result = merge_files(&dir, &names(&["tie.json"]));

    let stats = result.report.and_then(|r| r.stats).expect("merged stats");
    assert_eq!(stats.pass_rate.as_deref(), Some("12.13"));
}

#[test]
fn test_unknown_fields_are_kept_first_wins() {
    let temp_dir = common::setup_workspace();
    let dir = common::reports_dir(&temp_dir);
    std::fs::write(
        dir.join("a.json"),
        r#"{"suites":[],"version":"1.40","stats":{"expected":1,"workers":2}}"#,
    )
    .unwrap();
    std::fs::write(
        dir.join("b.json"),
        r#"{"suites":[],"version":"1.41","shard":2,"stats":{"expected":1,"workers":4}}"#,
    )
    .unwrap();

    let result = merge_files(&dir, &names(&["a.json", "b.json"]));

    let report = result.report.expect("merged report");
    assert_eq!(report.extra["version"], "1.40");
    assert_eq!(report.extra["shard"], 2);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["stats"]["workers"], 2);
    assert_eq!(json["stats"]["expected"], 2);
}
