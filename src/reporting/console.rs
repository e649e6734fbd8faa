//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints every stage's results to the console: per-file merge
//! progress, the merged and computed summaries, history updates and trend
//! analysis. Messages are localised and prefixed with a status marker.
//!
//! 此模块将每个阶段的结果打印到控制台：合并进度、合并与计算的摘要、
//! 历史更新和趋势分析。消息已本地化，并带有状态标记前缀。

use colored::*;
use std::path::Path;

use crate::core::history::History;
use crate::core::merge::{MergeResult, SourceOutcome};
use crate::core::models::RunStats;
use crate::core::snapshots::CleanupPlan;
use crate::core::summary::Summary;
use crate::core::trend::{Metric, PerformanceTrends, TrendIndicator, TrendSet};
use crate::core::units::Seconds;
use crate::infra::t;

const RULE_WIDTH: usize = 38;

fn rule() -> String {
    "━".repeat(RULE_WIDTH)
}

fn banner(title: &str) {
    println!("\n{}", rule());
    println!("{}", title.bold());
    println!("{}", rule());
}

/// Emoji shown next to a trend indicator.
pub fn trend_marker(indicator: TrendIndicator) -> &'static str {
    match indicator {
        TrendIndicator::Improving => "📈",
        TrendIndicator::Regressing => "📉",
        TrendIndicator::Stable => "➡️",
    }
}

/// Localised, coloured label for a trend indicator.
pub fn trend_label(indicator: TrendIndicator, locale: &str) -> ColoredString {
    let label = match indicator {
        TrendIndicator::Improving => t!("trend.improving", locale = locale),
        TrendIndicator::Regressing => t!("trend.regressing", locale = locale),
        TrendIndicator::Stable => t!("trend.stable", locale = locale),
    };
    match indicator {
        TrendIndicator::Improving => label.green(),
        TrendIndicator::Regressing => label.red(),
        TrendIndicator::Stable => label.normal(),
    }
}

fn metric_label(metric: Metric, locale: &str) -> String {
    match metric {
        Metric::Duration => t!("metric.duration", locale = locale).to_string(),
        Metric::PassRate => t!("metric.pass_rate", locale = locale).to_string(),
        Metric::FlakyRate => t!("metric.flaky_rate", locale = locale).to_string(),
    }
}

/// Prints what happened to each merge candidate.
/// 打印每个合并候选文件的处理结果。
pub fn print_merge_outcomes(result: &MergeResult, locale: &str) {
    println!("{}\n", t!("merge.start", locale = locale).bold());

    for outcome in &result.outcomes {
        match outcome {
            SourceOutcome::Missing { name } => {
                println!("{}", t!("merge.skipped_missing", locale = locale, file = name).yellow());
            }
            SourceOutcome::Malformed { name, error } => {
                eprintln!(
                    "{}",
                    t!("merge.malformed", locale = locale, file = name, error = error).red()
                );
            }
            SourceOutcome::Merged { name, counts } => {
                println!("{}", t!("merge.processing", locale = locale, file = name).green());
                println!("   - {}", t!("merge.suites", locale = locale, count = counts.suites));
                println!("   - {}", t!("label.passed_count", locale = locale, count = counts.expected));
                println!("   - {}", t!("label.failed_count", locale = locale, count = counts.unexpected));
                println!("   - {}", t!("label.flaky_count", locale = locale, count = counts.flaky));
                println!("   - {}\n", t!("label.skipped_count", locale = locale, count = counts.skipped));
            }
        }
    }
}

pub fn print_no_reports(locale: &str) {
    println!("{}", t!("merge.no_reports", locale = locale).yellow());
}

/// Prints the consolidated totals of a merged report.
/// 打印合并报告的汇总总数。
pub fn print_merged_summary(stats: &RunStats, output: &Path, locale: &str) {
    banner(&t!("merge.banner", locale = locale));
    println!("{:<14} {}", t!("label.total", locale = locale), stats.total.unwrap_or_default());
    println!("✅ {:<11} {}", t!("label.passed", locale = locale), stats.expected);
    println!("❌ {:<11} {}", t!("label.failed", locale = locale), stats.unexpected);
    println!("⚠️  {:<11} {}", t!("label.flaky", locale = locale), stats.flaky);
    println!("⏭️  {:<11} {}", t!("label.skipped", locale = locale), stats.skipped);
    println!(
        "📈 {:<11} {}%",
        t!("label.pass_rate", locale = locale),
        stats.pass_rate.as_deref().unwrap_or("0")
    );
    println!(
        "⏱️  {:<11} {:.2}s",
        t!("label.duration", locale = locale),
        stats.duration / 1000.0
    );
    println!("{}\n", rule());
    println!("{}\n", t!("merge.saved", locale = locale, path = output.display()).green());
}

/// Prints the metrics summary of one report.
/// 打印单个报告的指标摘要。
pub fn print_summary(summary: &Summary, output: &Path, locale: &str) {
    banner(&t!("metrics.banner", locale = locale));
    println!("{:<15} {}", t!("label.total", locale = locale), summary.total);
    println!(
        "✅ {:<12} {} ({})",
        t!("label.passed", locale = locale),
        summary.passed,
        summary.pass_rate
    );
    println!("❌ {:<12} {}", t!("label.failed", locale = locale), summary.failed);
    println!("⏭️  {:<12} {}", t!("label.skipped", locale = locale), summary.skipped);
    println!(
        "⚠️  {:<12} {} ({})",
        t!("label.flaky", locale = locale),
        summary.flaky,
        summary.flaky_rate
    );
    if summary.other() > 0 {
        println!("❔ {:<12} {}", t!("label.other", locale = locale), summary.other());
    }
    println!("⏱️  {:<12} {}", t!("label.duration", locale = locale), summary.duration);
    println!("{}\n", rule());
    println!("{}\n", t!("metrics.saved", locale = locale, path = output.display()).green());
}

/// Prints the state of the history after a new entry was recorded.
/// 在记录新条目后打印历史状态。
pub fn print_history_update(
    history: &History,
    trends: Option<&TrendSet>,
    output: &Path,
    locale: &str,
) {
    banner(&t!("trend.banner", locale = locale));
    println!("{}", t!("trend.entries", locale = locale, count = history.len()));
    if let Some(latest) = history.latest() {
        println!(
            "{}",
            t!("trend.latest", locale = locale, date = &latest.date, time = &latest.time)
        );
    }
    for metric in [Metric::PassRate, Metric::FlakyRate, Metric::Duration] {
        let value = match trends {
            Some(set) => {
                let indicator = set.get(metric);
                format!("{} {}", trend_marker(indicator), trend_label(indicator, locale))
            }
            None => format!(
                "{} {}",
                trend_marker(TrendIndicator::Stable),
                t!("trend.insufficient", locale = locale)
            ),
        };
        println!(
            "{}",
            t!("trend.metric_line", locale = locale, metric = metric_label(metric, locale), value = value)
        );
    }
    println!("{}\n", rule());
    println!("{}\n", t!("trend.saved", locale = locale, path = output.display()).green());
}

/// Prints the full-history averages and, when computed, the trend indicators.
/// 打印全部历史的平均值，以及（若已计算）趋势指标。
pub fn print_performance_trends(
    trends: &PerformanceTrends,
    data_points: usize,
    output: &Path,
    locale: &str,
) {
    banner(&t!("export.banner", locale = locale));
    println!("{}", t!("export.data_points", locale = locale, count = data_points));
    println!("\n{}", t!("export.averages", locale = locale));
    println!(
        "  ⏱️  {}: {}",
        metric_label(Metric::Duration, locale),
        Seconds::from_millis(trends.avg_duration)
    );
    println!(
        "  ✅ {}: {:.1}%",
        metric_label(Metric::PassRate, locale),
        trends.avg_pass_rate
    );
    println!(
        "  ⚠️  {}: {:.1}%",
        metric_label(Metric::FlakyRate, locale),
        trends.avg_flaky_rate
    );

    if trends.has_trend {
        println!("\n{}", t!("export.trends_header", locale = locale));
        for (marker, metric) in [("⏱️ ", Metric::Duration), ("✅", Metric::PassRate), ("⚠️ ", Metric::FlakyRate)] {
            let indicator = trends.trend.get(metric);
            println!(
                "  {} {}: {} {}",
                marker,
                metric_label(metric, locale),
                trend_marker(indicator),
                trend_label(indicator, locale)
            );
        }
    }
    println!("{}\n", rule());
    println!("{}\n", t!("export.saved", locale = locale, path = output.display()).green());
}

/// Prints the fatal "required input missing" message with a hint for the
/// stage that produces it.
/// 打印致命的“缺少必需输入”消息，并提示生成该输入的阶段。
pub fn print_missing_input(path: &Path, hint_key: &str, locale: &str) {
    let hint = match hint_key {
        "metrics" => t!("missing.results_hint", locale = locale),
        "trend" => t!("missing.summary_hint", locale = locale),
        "export" => t!("missing.history_hint", locale = locale),
        _ => t!("missing.generic_hint", locale = locale),
    };
    eprintln!(
        "{} {}",
        t!("missing.not_found", locale = locale, path = path.display()).red(),
        hint
    );
}

/// Prints each snapshot verdict and the cleanup totals. `removed` is `None`
/// for a dry run.
/// 打印每个快照的判定结果和清理总数。试运行时 `removed` 为 `None`。
pub fn print_snapshot_cleanup(plan: &CleanupPlan, root: &Path, removed: Option<usize>, locale: &str) {
    for scan in &plan.scans {
        let dir = scan.dir.strip_prefix(root).unwrap_or(&scan.dir);
        println!("\n{}", t!("snapshots.scanning", locale = locale, dir = dir.display()).bold());
        println!("   {}", t!("snapshots.found", locale = locale, count = scan.snapshots.len()));
        for verdict in &scan.snapshots {
            let file = verdict
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let line = match (verdict.referenced, removed.is_some()) {
                (true, _) => t!("snapshots.keeping", locale = locale, file = file).green(),
                (false, true) => t!("snapshots.removing", locale = locale, file = file).red(),
                (false, false) => t!("snapshots.would_remove", locale = locale, file = file).yellow(),
            };
            println!("   {}", line);
        }
    }

    let total = plan.total();
    let orphans = plan.orphan_count();
    banner(&t!("snapshots.banner", locale = locale));
    println!("{}", t!("snapshots.total", locale = locale, count = total));
    match removed {
        Some(count) => {
            println!("{}", t!("snapshots.removed", locale = locale, count = count));
            println!("{}", t!("snapshots.remaining", locale = locale, count = total - count));
        }
        None => println!("{}", t!("snapshots.orphans", locale = locale, count = orphans)),
    }
    println!("{}\n", rule());

    if orphans == 0 {
        println!("{}\n", t!("snapshots.clean", locale = locale).green());
    } else if let Some(count) = removed {
        println!("{}\n", t!("snapshots.cleaned", locale = locale, count = count).green());
    } else {
        println!("{}\n", t!("snapshots.dry_run_hint", locale = locale).yellow());
    }
}
