//! # Merge Command Module / 合并命令模块
//!
//! Implements `merge`: folds the configured shard reports into
//! `merged-results.json`.
//!
//! 实现 `merge` 命令：将配置的分片报告合并为 `merged-results.json`。

use anyhow::Result;

use crate::cli::CommandContext;
use crate::core::PipelineError;
use crate::core::config::MERGED_FILE;
use crate::core::pipeline::merge_stage;
use crate::reporting::console::{print_merge_outcomes, print_merged_summary, print_no_reports};

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let output = ctx.config.report_path(MERGED_FILE);
    let result = merge_stage(&ctx.config.reports_dir, &ctx.config.merge_sources, &output)?;
    print_merge_outcomes(&result, &ctx.locale);

    match &result.report {
        Some(report) => {
            print_merged_summary(&report.stats_or_default(), &output, &ctx.locale);
            Ok(())
        }
        None => {
            print_no_reports(&ctx.locale);
            Err(PipelineError::NoReports.into())
        }
    }
}
