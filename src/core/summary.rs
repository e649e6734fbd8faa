//! # Metrics Computation / 指标计算
//!
//! Reduces a [`TestRunReport`] tree to a flat [`Summary`].
//!
//! 将 [`TestRunReport`] 树归约为扁平的 [`Summary`]。

use crate::core::models::{NodeStats, ResultStatus, Spec, Suite, Test, TestRunReport};
use crate::core::units::{Percent, Seconds};
use serde::{Deserialize, Serialize};

/// Aggregate counts for one report.
/// 单个报告的汇总计数。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total: u64,
    pub passed: u64,
    pub failed: u64,
    pub skipped: u64,
    pub flaky: u64,
    pub flaky_rate: Percent,
    pub pass_rate: Percent,
    pub duration: Seconds,
}

impl Summary {
    /// Tests whose final status was neither passed, failed nor skipped
    /// (timed out, interrupted, unknown).
    /// 最终状态既不是通过、失败也不是跳过的测试（超时、中断、未知）。
    pub fn other(&self) -> u64 {
        self.total
            .saturating_sub(self.passed + self.failed + self.skipped)
    }
}

/// Running counters collected during the tree walk.
#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    total: u64,
    passed: u64,
    failed: u64,
    skipped: u64,
    flaky: u64,
    duration_ms: f64,
}

impl Tally {
    fn add_node_duration(&mut self, stats: Option<&NodeStats>) {
        if let Some(ms) = stats.and_then(|s| s.duration) {
            self.duration_ms += ms;
        }
    }

    fn record(&mut self, test: &Test) {
        self.total += 1;
        match test.effective_status() {
            ResultStatus::Passed => self.passed += 1,
            ResultStatus::Failed => self.failed += 1,
            ResultStatus::Skipped => self.skipped += 1,
            ResultStatus::TimedOut | ResultStatus::Flaky | ResultStatus::Unknown => {}
        }
        if test.is_flaky() {
            self.flaky += 1;
        }
    }

    // Every visited node's duration is added, so a producer that rolls child
    // durations up into parents is counted more than once.
    fn walk_suite(&mut self, suite: &Suite) {
        self.add_node_duration(suite.stats.as_ref());
        for spec in &suite.specs {
            self.walk_spec(spec);
        }
        for child in &suite.suites {
            self.walk_suite(child);
        }
    }

    fn walk_spec(&mut self, spec: &Spec) {
        self.add_node_duration(spec.stats.as_ref());
        for test in &spec.tests {
            self.record(test);
        }
    }

    fn into_summary(self) -> Summary {
        Summary {
            total: self.total,
            passed: self.passed,
            failed: self.failed,
            skipped: self.skipped,
            flaky: self.flaky,
            flaky_rate: Percent::of(self.flaky, self.total),
            pass_rate: Percent::of(self.passed, self.total),
            duration: Seconds::from_millis(self.duration_ms),
        }
    }
}

/// Computes the summary of a single report.
///
/// 计算单个报告的摘要。
///
/// Walks every suite depth-first. Absent `stats`, `suites`, `specs`, `tests`
/// or `results` count as empty, so the walk never fails.
pub fn compute_summary(report: &TestRunReport) -> Summary {
    let mut tally = Tally::default();
    for suite in &report.suites {
        tally.walk_suite(suite);
    }
    tracing::debug!(
        total = tally.total,
        flaky = tally.flaky,
        duration_ms = tally.duration_ms,
        "report walked"
    );
    tally.into_summary()
}
