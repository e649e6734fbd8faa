//! # Visual Report Command Module / 视觉报告命令模块
//!
//! Implements `visual-report`: collects screenshot diff images from the test
//! results directory and renders them into an HTML page.
//!
//! 实现 `visual-report` 命令：从测试结果目录收集截图差异图像并渲染为 HTML 页面。

use anyhow::Result;
use chrono::Local;
use colored::*;

use crate::cli::CommandContext;
use crate::core::config::VISUAL_REPORT_FILE;
use crate::infra::t;
use crate::reporting::generate_visual_report;
use crate::reporting::visual::find_visual_diffs;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let locale = ctx.locale.as_str();
    println!("{}", t!("visual.start", locale = locale, path = ctx.config.test_results_dir.display()).bold());

    let diffs = find_visual_diffs(&ctx.config.test_results_dir)?;
    if diffs.is_empty() {
        println!("{}", t!("visual.none", locale = locale).green());
    } else {
        println!("{}", t!("visual.found", locale = locale, count = diffs.len()).yellow());
        for diff in &diffs {
            println!("   - {} ({})", diff.name, diff.test);
        }
    }

    let output = ctx.config.report_path(VISUAL_REPORT_FILE);
    let generated_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    generate_visual_report(&diffs, &output, &generated_at, locale)?;
    println!("{}", t!("visual.saved", locale = locale, path = output.display()).green());
    Ok(())
}
