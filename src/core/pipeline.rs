//! # Pipeline Stages / 管道阶段
//!
//! File-to-file entry points for each stage, free of console output so they
//! can be driven from tests as well as from the CLI.
//!
//! 每个阶段的文件到文件入口点，不包含控制台输出，因此既可以从测试中调用，也可以从 CLI 调用。

use anyhow::Result;
use chrono::{DateTime, Local};
use std::path::Path;

use crate::core::history::{History, HistoryEntry};
use crate::core::merge::{MergeResult, merge_files};
use crate::core::models::TestRunReport;
use crate::core::summary::{Summary, compute_summary};
use crate::core::trend::{PerformanceTrends, TrendSet, compute_trends, performance_trends};
use crate::infra::fs::{read_json, read_json_opt, write_json_pretty};

/// Merges the candidates under `dir` and writes the result to `output` when
/// at least one shard was merged.
pub fn merge_stage(dir: &Path, candidates: &[String], output: &Path) -> Result<MergeResult> {
    let result = merge_files(dir, candidates);
    if let Some(report) = &result.report {
        write_json_pretty(output, report)?;
    }
    Ok(result)
}

/// Computes the summary of the report at `input` and writes it to `output`.
///
/// # Errors
/// `PipelineError::MissingInput` / `MalformedInput` for a bad `input`.
pub fn metrics_stage(input: &Path, output: &Path) -> Result<Summary> {
    let report: TestRunReport = read_json(input)?;
    let summary = compute_summary(&report);
    write_json_pretty(output, &summary)?;
    Ok(summary)
}

/// Options for recording a run into the history.
#[derive(Debug, Clone)]
pub struct TrendOptions<'a> {
    pub capacity: usize,
    pub window: usize,
    pub date_locale: &'a str,
    pub captured_at: DateTime<Local>,
}

/// Appends the summary at `summary_path` to the history at `history_path`
/// (created when absent) and returns the updated history with its trends.
///
/// 将 `summary_path` 处的摘要追加到 `history_path` 处的历史（不存在时创建），
/// 并返回更新后的历史及其趋势。
pub fn trend_stage(
    summary_path: &Path,
    history_path: &Path,
    options: &TrendOptions<'_>,
) -> Result<(History, Option<TrendSet>)> {
    let summary: Summary = read_json(summary_path)?;
    let stored: Vec<HistoryEntry> = read_json_opt(history_path)?.unwrap_or_default();

    let mut history = History::from_entries(stored, options.capacity);
    let entry = HistoryEntry::capture(summary, options.captured_at, options.date_locale);
    if let Some(evicted) = history.push(entry) {
        tracing::debug!(timestamp = %evicted.timestamp, "oldest history entry evicted");
    }
    write_json_pretty(history_path, &history)?;

    let trends = compute_trends(&history, options.window);
    Ok((history, trends))
}

/// Recomputes averages over every stored entry of `history_path` and writes
/// them to `output`. Returns `None` (and writes nothing) for an empty history.
pub fn export_stage(
    history_path: &Path,
    output: &Path,
    window: usize,
) -> Result<Option<(PerformanceTrends, usize)>> {
    let stored: Vec<HistoryEntry> = read_json(history_path)?;
    // Sized to the file so a hand-grown history is averaged in full.
    let capacity = stored.len();
    let history = History::from_entries(stored, capacity);
    let Some(trends) = performance_trends(&history, window) else {
        return Ok(None);
    };
    write_json_pretty(output, &trends)?;
    Ok(Some((trends, history.len())))
}
