//! # Export Command Module / 导出命令模块

use anyhow::Result;
use colored::*;

use crate::cli::CommandContext;
use crate::cli::commands::explain_missing;
use crate::core::config::{HISTORY_FILE, TRENDS_FILE};
use crate::core::pipeline::export_stage;
use crate::infra::t;
use crate::reporting::console::print_performance_trends;

/// Exports `performance-trends.json` from the whole history.
/// 根据全部历史导出 `performance-trends.json`。
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let history_path = ctx.config.report_path(HISTORY_FILE);
    let output = ctx.config.report_path(TRENDS_FILE);

    let exported = export_stage(&history_path, &output, ctx.config.trend_window)
        .map_err(|e| explain_missing(e, "export", &ctx.locale))?;

    match exported {
        Some((trends, data_points)) => {
            print_performance_trends(&trends, data_points, &output, &ctx.locale);
        }
        None => {
            tracing::debug!(path = %history_path.display(), "history is empty");
            println!("{}", t!("export.not_enough", locale = &ctx.locale).yellow());
        }
    }
    Ok(())
}
