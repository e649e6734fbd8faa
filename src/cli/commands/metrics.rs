//! # Metrics Command Module / 指标命令模块

use anyhow::Result;

use crate::cli::CommandContext;
use crate::cli::commands::explain_missing;
use crate::core::config::{RESULTS_FILE, SUMMARY_FILE};
use crate::core::pipeline::metrics_stage;
use crate::reporting::console::print_summary;

/// Computes `summary.json` from `results.json`.
/// 从 `results.json` 计算 `summary.json`。
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let input = ctx.config.report_path(RESULTS_FILE);
    let output = ctx.config.report_path(SUMMARY_FILE);

    let summary =
        metrics_stage(&input, &output).map_err(|e| explain_missing(e, "metrics", &ctx.locale))?;
    print_summary(&summary, &output, &ctx.locale);
    Ok(())
}
