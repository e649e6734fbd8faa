//! # Report Factories / 报告工厂
//!
//! Builders for synthetic [`TestRunReport`] trees. Identifiers are drawn from
//! a [`SequenceGenerator`] the caller owns, so two factories never share a
//! hidden counter and a test can reset numbering explicitly.
//!
//! 用于合成 [`TestRunReport`] 树的构建器。标识符取自调用方拥有的
//! [`SequenceGenerator`]，因此工厂之间不会共享隐藏计数器。

use crate::core::models::{NodeStats, ResultStatus, RunStats, Spec, Suite, Test, TestAttempt, TestRunReport};
use serde_json::{Value, json};

/// Monotonic id source.
/// 单调递增的 ID 生成器。
#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    start: u64,
    next: u64,
}

impl SequenceGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(start: u64) -> Self {
        Self { start, next: start }
    }

    /// Returns the current value and advances.
    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// A prefixed identifier such as `test-3`.
    pub fn next_label(&mut self, prefix: &str) -> String {
        format!("{}-{}", prefix, self.next_id())
    }

    pub fn reset(&mut self) {
        self.next = self.start;
    }
}

impl Default for SequenceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// One attempt with `status` at retry index `retry`.
pub fn attempt(status: ResultStatus, retry: u32) -> TestAttempt {
    TestAttempt {
        status: Some(status.as_str().to_string()),
        retry,
        ..Default::default()
    }
}

/// A test whose attempts carry the given `(status, retry)` pairs in order.
pub fn test(seq: &mut SequenceGenerator, attempts: &[(ResultStatus, u32)]) -> Test {
    let mut extra = serde_json::Map::new();
    extra.insert("testId".into(), Value::String(seq.next_label("test")));
    Test {
        status: None,
        results: attempts.iter().map(|&(s, r)| attempt(s, r)).collect(),
        extra,
    }
}

/// A test that ran once with `status`.
pub fn single_run(seq: &mut SequenceGenerator, status: ResultStatus) -> Test {
    test(seq, &[(status, 0)])
}

pub fn spec(seq: &mut SequenceGenerator, tests: Vec<Test>) -> Spec {
    Spec {
        title: Some(seq.next_label("spec")),
        tests,
        ..Default::default()
    }
}

/// A suite with optional node-level duration in milliseconds.
pub fn suite(
    seq: &mut SequenceGenerator,
    specs: Vec<Spec>,
    suites: Vec<Suite>,
    duration_ms: Option<f64>,
) -> Suite {
    Suite {
        title: Some(seq.next_label("suite")),
        suites,
        specs,
        stats: duration_ms.map(|d| NodeStats {
            duration: Some(d),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Run-level stats as a shard reporter would write them.
pub fn run_stats(duration: f64, expected: u64, unexpected: u64, flaky: u64, skipped: u64) -> RunStats {
    RunStats {
        duration,
        expected,
        unexpected,
        flaky,
        skipped,
        ..Default::default()
    }
}

pub fn report(suites: Vec<Suite>, stats: Option<RunStats>) -> TestRunReport {
    TestRunReport {
        config: None,
        suites,
        errors: Vec::new(),
        stats,
        extra: Default::default(),
    }
}

/// A minimal reporter `config` object rooted at `root_dir`.
pub fn config(root_dir: &str) -> Value {
    json!({ "rootDir": root_dir, "workers": 1 })
}

/// A report with `suites` suites of `specs` specs, each holding one test per
/// status in `pattern`.
/// 生成包含 `suites` 个 suite、每个 suite 含 `specs` 个 spec 的报告，
/// 每个 spec 针对 `pattern` 中的每个状态生成一个测试。
pub fn bulk_report(
    seq: &mut SequenceGenerator,
    suites: usize,
    specs: usize,
    pattern: &[ResultStatus],
) -> TestRunReport {
    let suites = (0..suites)
        .map(|_| {
            let specs = (0..specs)
                .map(|_| {
                    let tests = pattern.iter().map(|&s| single_run(seq, s)).collect();
                    spec(seq, tests)
                })
                .collect();
            suite(seq, specs, Vec::new(), Some(1000.0))
        })
        .collect();
    report(suites, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_restarts_numbering() {
        let mut seq = SequenceGenerator::starting_at(10);
        assert_eq!(seq.next_label("user"), "user-10");
        assert_eq!(seq.next_id(), 11);
        seq.reset();
        assert_eq!(seq.next_id(), 10);
    }

    #[test]
    fn generators_are_independent() {
        let mut a = SequenceGenerator::new();
        let mut b = SequenceGenerator::new();
        a.next_id();
        a.next_id();
        assert_eq!(b.next_id(), 1);
    }
}
