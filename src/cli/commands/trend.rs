//! # Trend Command Module / 趋势命令模块
//!
//! Implements `trend`: appends the latest summary to `history.json` and
//! reports the recent-vs-previous window comparison.
//!
//! 实现 `trend` 命令：将最新摘要追加到 `history.json`，并报告最近窗口与之前窗口的比较。

use anyhow::Result;
use chrono::Local;

use crate::cli::CommandContext;
use crate::cli::commands::explain_missing;
use crate::core::config::{HISTORY_FILE, SUMMARY_FILE};
use crate::core::pipeline::{TrendOptions, trend_stage};
use crate::reporting::console::print_history_update;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let summary_path = ctx.config.report_path(SUMMARY_FILE);
    let history_path = ctx.config.report_path(HISTORY_FILE);
    let options = TrendOptions {
        capacity: ctx.config.history_capacity,
        window: ctx.config.trend_window,
        date_locale: &ctx.config.date_locale,
        captured_at: Local::now(),
    };

    let (history, trends) = trend_stage(&summary_path, &history_path, &options)
        .map_err(|e| explain_missing(e, "trend", &ctx.locale))?;
    print_history_update(&history, trends.as_ref(), &history_path, &ctx.locale);
    Ok(())
}
