//! # Trend Analysis / 趋势分析
//!
//! Compares the mean of the newest history window against the window before
//! it and classifies each tracked metric as improving, regressing or stable.
//!
//! 比较最新历史窗口与其之前窗口的平均值，并将每个跟踪指标分类为改善、退化或稳定。

use crate::core::history::{History, HistoryEntry};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

pub const DEFAULT_WINDOW: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendIndicator {
    Improving,
    Regressing,
    #[default]
    Stable,
}

impl TrendIndicator {
    pub fn as_str(self) -> &'static str {
        match self {
            TrendIndicator::Improving => "improving",
            TrendIndicator::Regressing => "regressing",
            TrendIndicator::Stable => "stable",
        }
    }
}

impl fmt::Display for TrendIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A metric tracked across history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Run duration; lower is better. Thresholds are relative (percent change).
    Duration,
    /// Pass rate; higher is better. Thresholds are absolute percentage points.
    PassRate,
    /// Flaky rate; lower is better. Thresholds are absolute percentage points.
    FlakyRate,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Duration, Metric::PassRate, Metric::FlakyRate];

    /// The metric's value for one entry. Duration is in milliseconds.
    pub fn value(self, entry: &HistoryEntry) -> f64 {
        match self {
            Metric::Duration => entry.summary.duration.as_millis(),
            Metric::PassRate => entry.summary.pass_rate.value(),
            Metric::FlakyRate => entry.summary.flaky_rate.value(),
        }
    }

    /// Classifies the change from `previous` to `recent` window means.
    /// 对从 `previous` 到 `recent` 窗口平均值的变化进行分类。
    pub fn classify(self, recent: f64, previous: f64) -> TrendIndicator {
        match self {
            Metric::Duration => {
                // A zero baseline gives +inf (regressing) or NaN (stable).
                let change = (recent - previous) / previous * 100.0;
                if change < -5.0 {
                    TrendIndicator::Improving
                } else if change > 5.0 {
                    TrendIndicator::Regressing
                } else {
                    TrendIndicator::Stable
                }
            }
            Metric::PassRate => {
                let diff = recent - previous;
                if diff > 2.0 {
                    TrendIndicator::Improving
                } else if diff < -2.0 {
                    TrendIndicator::Regressing
                } else {
                    TrendIndicator::Stable
                }
            }
            Metric::FlakyRate => {
                let diff = recent - previous;
                if diff < -1.0 {
                    TrendIndicator::Improving
                } else if diff > 1.0 {
                    TrendIndicator::Regressing
                } else {
                    TrendIndicator::Stable
                }
            }
        }
    }
}

/// One indicator per tracked metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSet {
    pub duration: TrendIndicator,
    pub pass_rate: TrendIndicator,
    pub flaky_rate: TrendIndicator,
}

impl TrendSet {
    pub fn get(&self, metric: Metric) -> TrendIndicator {
        match metric {
            Metric::Duration => self.duration,
            Metric::PassRate => self.pass_rate,
            Metric::FlakyRate => self.flaky_rate,
        }
    }
}

fn mean<'a>(entries: impl IntoIterator<Item = &'a HistoryEntry>, metric: Metric) -> f64 {
    let (sum, count) = entries
        .into_iter()
        .fold((0.0, 0usize), |(sum, n), e| (sum + metric.value(e), n + 1));
    if count == 0 { 0.0 } else { sum / count as f64 }
}

/// Trend indicators for `history`, or `None` when it holds fewer than
/// `2 * window` entries ("insufficient data").
/// `history` 的趋势指标；若条目少于 `2 * window` 个（“数据不足”）则返回 `None`。
pub fn compute_trends(history: &History, window: usize) -> Option<TrendSet> {
    let (recent, previous) = history.windows(window)?;
    let indicator = |metric: Metric| {
        metric.classify(
            mean(recent.iter().copied(), metric),
            mean(previous.iter().copied(), metric),
        )
    };
    Some(TrendSet {
        duration: indicator(Metric::Duration),
        pass_rate: indicator(Metric::PassRate),
        flaky_rate: indicator(Metric::FlakyRate),
    })
}

/// Full-history averages plus indicators, as written to
/// `performance-trends.json`.
/// 全部历史的平均值及趋势指标，写入 `performance-trends.json`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceTrends {
    /// Milliseconds.
    pub avg_duration: f64,
    pub avg_pass_rate: f64,
    pub avg_flaky_rate: f64,
    pub trend: TrendSet,
    /// Reserved; not populated.
    pub slowest_tests: Vec<Value>,
    /// Reserved; not populated.
    pub improvements: Vec<Value>,
    /// Reserved; not populated.
    pub regressions: Vec<Value>,
    /// Whether `trend` was computed from enough history.
    #[serde(skip)]
    pub has_trend: bool,
}

/// Recomputes averages over the whole history. Returns `None` for an empty
/// history.
pub fn performance_trends(history: &History, window: usize) -> Option<PerformanceTrends> {
    if history.is_empty() {
        return None;
    }
    let trend = compute_trends(history, window);
    Some(PerformanceTrends {
        avg_duration: mean(history.iter(), Metric::Duration),
        avg_pass_rate: mean(history.iter(), Metric::PassRate),
        avg_flaky_rate: mean(history.iter(), Metric::FlakyRate),
        has_trend: trend.is_some(),
        trend: trend.unwrap_or_default(),
        slowest_tests: Vec::new(),
        improvements: Vec::new(),
        regressions: Vec::new(),
    })
}
