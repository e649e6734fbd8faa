//! # Data Models Module / 数据模型模块
//!
//! This module defines the shape of a test-run report as written by the
//! browser test framework's JSON reporter: a tree of suites, specs, tests and
//! per-attempt results, plus run-level stats.
//!
//! 此模块定义了浏览器测试框架 JSON 报告器写出的测试运行报告结构：
//! 由 suite、spec、test 和每次尝试的结果组成的树，以及运行级统计信息。
//!
//! Every node keeps the fields it does not model in an `extra` map so a
//! merged report is written back without losing anything.
//! 每个节点都会把未建模的字段保存在 `extra` 中，因此合并后的报告不会丢失任何数据。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Unmodelled JSON fields carried through unchanged.
pub type Extra = Map<String, Value>;

/// The status recorded for one attempt of a test.
/// 一次测试尝试所记录的状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultStatus {
    Passed,
    Failed,
    Skipped,
    TimedOut,
    Flaky,
    /// Anything the reporter wrote that is not one of the above, or nothing.
    /// 报告器写入的非上述状态，或缺失状态。
    Unknown,
}

impl ResultStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "passed" => ResultStatus::Passed,
            "failed" => ResultStatus::Failed,
            "skipped" => ResultStatus::Skipped,
            "timedOut" => ResultStatus::TimedOut,
            "flaky" => ResultStatus::Flaky,
            _ => ResultStatus::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResultStatus::Passed => "passed",
            ResultStatus::Failed => "failed",
            ResultStatus::Skipped => "skipped",
            ResultStatus::TimedOut => "timedOut",
            ResultStatus::Flaky => "flaky",
            ResultStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete test-run report, or a merge of several.
/// 一个完整的测试运行报告，或多个报告的合并结果。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestRunReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
    #[serde(default)]
    pub suites: Vec<Suite>,
    #[serde(default)]
    pub errors: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<RunStats>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Run-level counters. `total`, `passRate` and `endTime` are only present on
/// merged reports.
/// 运行级计数器。`total`、`passRate` 和 `endTime` 仅存在于合并后的报告中。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// Milliseconds.
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub expected: u64,
    #[serde(default)]
    pub unexpected: u64,
    #[serde(default)]
    pub flaky: u64,
    #[serde(default)]
    pub skipped: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_rate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Duration stats that may appear on any suite or spec node.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Suite {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suites: Vec<Suite>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specs: Vec<Spec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<NodeStats>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Spec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub tests: Vec<Test>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<NodeStats>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Test {
    /// The framework's own verdict, consulted only when there are no results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub results: Vec<TestAttempt>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// One attempt (initial run or retry) of a test.
/// 测试的一次尝试（首次运行或重试）。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestAttempt {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub retry: u32,
    #[serde(flatten)]
    pub extra: Extra,
}

impl TestAttempt {
    pub fn status(&self) -> ResultStatus {
        self.status
            .as_deref()
            .map(ResultStatus::parse)
            .unwrap_or(ResultStatus::Unknown)
    }
}

impl Test {
    /// The status of the last attempt; falls back to the test's own status
    /// when no attempt was recorded.
    /// 最后一次尝试的状态；若没有记录任何尝试，则回退到测试自身的状态。
    pub fn effective_status(&self) -> ResultStatus {
        match self.results.last() {
            Some(last) if last.status.is_some() => last.status(),
            _ => self
                .status
                .as_deref()
                .map(ResultStatus::parse)
                .unwrap_or(ResultStatus::Unknown),
        }
    }

    /// A test is flaky when an attempt is tagged `flaky`, or when it was
    /// retried and some attempt passed.
    /// 若某次尝试被标记为 `flaky`，或测试被重试且某次尝试通过，则该测试为不稳定测试。
    pub fn is_flaky(&self) -> bool {
        let statuses = || self.results.iter().map(TestAttempt::status);
        let retried = self.results.iter().any(|r| r.retry > 0);
        statuses().any(|s| s == ResultStatus::Flaky)
            || (retried && statuses().any(|s| s == ResultStatus::Passed))
    }
}

impl TestRunReport {
    /// Stats or zeroed stats when the report carried none.
    pub fn stats_or_default(&self) -> RunStats {
        self.stats.clone().unwrap_or_default()
    }
}
