//! # README Command Module / README 命令模块
//!
//! Implements `readme`: writes the latest summary into the metrics block of
//! the project README.
//!
//! 实现 `readme` 命令：将最新摘要写入项目 README 的指标块。

use anyhow::{Context, Result};
use colored::*;
use std::fs;

use crate::cli::CommandContext;
use crate::core::PipelineError;
use crate::core::config::SUMMARY_FILE;
use crate::core::summary::Summary;
use crate::infra::fs::{read_json_opt, write_atomic};
use crate::infra::t;
use crate::reporting::readme::{BlockUpdate, render_metrics_block, upsert_metrics_block};

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let locale = ctx.locale.as_str();
    let summary_path = ctx.config.report_path(SUMMARY_FILE);

    let Some(summary) = read_json_opt::<Summary>(&summary_path)? else {
        println!("{}", t!("readme.skipped", locale = locale, path = summary_path.display()).yellow());
        return Ok(());
    };

    let readme_path = &ctx.config.readme_path;
    if !readme_path.is_file() {
        return Err(PipelineError::MissingInput { path: readme_path.clone() }.into());
    }
    let document = fs::read_to_string(readme_path)
        .with_context(|| format!("Failed to read {}", readme_path.display()))?;

    let (updated, change) = upsert_metrics_block(&document, &render_metrics_block(&summary));
    write_atomic(readme_path, updated.as_bytes())?;

    let message = match change {
        BlockUpdate::Replaced => t!("readme.updated", locale = locale, path = readme_path.display()),
        BlockUpdate::Appended => t!("readme.appended", locale = locale, path = readme_path.display()),
    };
    println!("{}", message.green());
    Ok(())
}
