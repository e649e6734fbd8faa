//! # README Block Unit Tests / README 指标块单元测试

use suite_metrics::core::units::{Percent, Seconds};
use suite_metrics::reporting::readme::{
    BlockUpdate, MARKER_END, MARKER_START, render_metrics_block, upsert_metrics_block,
};
use suite_metrics::summary::Summary;

fn sample() -> Summary {
    Summary {
        total: 10,
        passed: 9,
        failed: 1,
        skipped: 0,
        flaky: 1,
        flaky_rate: Percent::new(10.0),
        pass_rate: Percent::new(90.0),
        duration: Seconds::new(12.3),
    }
}

#[test]
fn test_block_is_delimited_and_two_lines() {
    let block = render_metrics_block(&sample());

    assert!(block.starts_with(MARKER_START));
    assert!(block.ends_with(MARKER_END));
    assert_eq!(block.lines().count(), 4);
    assert!(block.contains("**Passed:** 9 (90.0%)"));
    assert!(block.contains("**Flaky:** 1 (10.0%)"));
    assert!(block.contains("**Duration:** 12.3s"));
}

#[test]
fn test_existing_block_is_replaced() {
    let doc = format!("# Project\n\n{MARKER_START}\nold\n{MARKER_END}\n\n## Usage\n");

    let (updated, change) = upsert_metrics_block(&doc, &render_metrics_block(&sample()));

    assert_eq!(change, BlockUpdate::Replaced);
    assert!(!updated.contains("old"));
    assert!(updated.starts_with("# Project\n\n"));
    assert!(updated.ends_with("\n\n## Usage\n"));
    assert_eq!(updated.matches(MARKER_START).count(), 1);
}

#[test]
fn test_missing_block_is_appended_under_heading() {
    let (updated, change) = upsert_metrics_block("# Project\n", &render_metrics_block(&sample()));

    assert_eq!(change, BlockUpdate::Appended);
    assert!(updated.contains("## 📈 Metrics\n<!-- METRICS:START -->"));
}

#[test]
fn test_replacing_twice_is_stable() {
    let block = render_metrics_block(&sample());
    let (once, _) = upsert_metrics_block("# Project\n", &block);
    let (twice, change) = upsert_metrics_block(&once, &block);

    assert_eq!(change, BlockUpdate::Replaced);
    assert_eq!(once, twice);
}
