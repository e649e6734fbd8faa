//! # Report Merger / 报告合并器
//!
//! Folds several per-shard reports into one consolidated report.
//!
//! 将多个分片报告折叠为一个合并报告。
//!
//! Suites and errors are concatenated in encounter order, numeric stats are
//! summed, and the first `config` seen wins. Unknown top-level and stats fields
//! are kept, first shard wins per key. Nothing is deduplicated: naming
//! the same file twice counts it twice.

use crate::core::error::PipelineError;
use crate::core::models::{RunStats, TestRunReport};
use crate::core::models::Extra;
use crate::core::units::{percentage, round2};
use crate::infra::fs::read_json;
use chrono::{DateTime, SecondsFormat, Utc};
use std::path::Path;

/// Counts taken from one shard, for the per-file console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShardCounts {
    pub suites: usize,
    pub expected: u64,
    pub unexpected: u64,
    pub flaky: u64,
    pub skipped: u64,
}

/// What happened to one merge candidate.
/// 单个合并候选文件的处理结果。
#[derive(Debug)]
pub enum SourceOutcome {
    Merged { name: String, counts: ShardCounts },
    Missing { name: String },
    Malformed { name: String, error: String },
}

impl SourceOutcome {
    pub fn name(&self) -> &str {
        match self {
            SourceOutcome::Merged { name, .. }
            | SourceOutcome::Missing { name }
            | SourceOutcome::Malformed { name, .. } => name,
        }
    }

    pub fn is_merged(&self) -> bool {
        matches!(self, SourceOutcome::Merged { .. })
    }
}

/// Accumulates shards into a single report.
/// 将分片累积为单个报告。
#[derive(Debug)]
pub struct ReportMerger {
    merged: TestRunReport,
    stats: RunStats,
    absorbed: usize,
}

impl ReportMerger {
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            merged: TestRunReport::default(),
            stats: RunStats {
                start_time: Some(started_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
                ..RunStats::default()
            },
            absorbed: 0,
        }
    }

    /// Folds one report in and returns the counts it contributed.
    pub fn absorb(&mut self, report: TestRunReport) -> ShardCounts {
        let TestRunReport {
            config,
            suites,
            errors,
            stats,
            extra,
        } = report;

        let stats = stats.unwrap_or_default();
        let counts = ShardCounts {
            suites: suites.len(),
            expected: stats.expected,
            unexpected: stats.unexpected,
            flaky: stats.flaky,
            skipped: stats.skipped,
        };

        self.merged.suites.extend(suites);
        self.merged.errors.extend(errors);

        self.stats.duration += stats.duration;
        self.stats.expected += stats.expected;
        self.stats.unexpected += stats.unexpected;
        self.stats.flaky += stats.flaky;
        self.stats.skipped += stats.skipped;
        adopt_missing(&mut self.merged.extra, extra);
        adopt_missing(&mut self.stats.extra, stats.extra);

        if self.merged.config.is_none() && config.is_some() {
            self.merged.config = config;
        }

        self.absorbed += 1;
        counts
    }

    pub fn absorbed(&self) -> usize {
        self.absorbed
    }

    /// Computes totals and returns the merged report, or `None` when nothing
    /// was absorbed.
    /// 计算总数并返回合并后的报告；若未合并任何报告则返回 `None`。
    pub fn finish(self, finished_at: DateTime<Utc>) -> Option<TestRunReport> {
        if self.absorbed == 0 {
            return None;
        }
        let mut merged = self.merged;
        let mut stats = self.stats;

        let total = stats.expected + stats.unexpected + stats.flaky;
        let rate = percentage(stats.expected + stats.flaky, total);
        stats.total = Some(total);
        stats.pass_rate = Some(format!("{:.2}", round2(rate)));
        stats.end_time = Some(finished_at.to_rfc3339_opts(SecondsFormat::Millis, true));

        merged.stats = Some(stats);
        Some(merged)
    }
}

/// Copies the keys of `from` that `into` does not have yet.
fn adopt_missing(into: &mut Extra, from: Extra) {
    for (key, value) in from {
        into.entry(key).or_insert(value);
    }
}

/// The outcome of a whole merge run.
#[derive(Debug)]
pub struct MergeResult {
    pub outcomes: Vec<SourceOutcome>,
    pub report: Option<TestRunReport>,
}

impl MergeResult {
    pub fn merged_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_merged()).count()
    }
}

/// Reads each candidate under `dir` and merges the ones that load.
///
/// 读取 `dir` 下的每个候选文件并合并可以加载的文件。
///
/// Missing files and malformed JSON are recorded as outcomes and skipped;
/// they never abort the merge.
pub fn merge_files(dir: &Path, candidates: &[String]) -> MergeResult {
    let mut merger = ReportMerger::new(Utc::now());
    let mut outcomes = Vec::with_capacity(candidates.len());

    for name in candidates {
        let path = dir.join(name);
        let outcome = match read_json::<TestRunReport>(&path) {
            Ok(report) => {
                let counts = merger.absorb(report);
                tracing::debug!(file = %path.display(), ?counts, "shard merged");
                SourceOutcome::Merged {
                    name: name.clone(),
                    counts,
                }
            }
            Err(PipelineError::MissingInput { .. }) => {
                tracing::debug!(file = %path.display(), "merge candidate not found");
                SourceOutcome::Missing { name: name.clone() }
            }
            Err(e) => {
                tracing::debug!(file = %path.display(), error = %e, "merge candidate skipped");
                SourceOutcome::Malformed {
                    name: name.clone(),
                    error: e.to_string(),
                }
            }
        };
        outcomes.push(outcome);
    }

    MergeResult {
        outcomes,
        report: merger.finish(Utc::now()),
    }
}
