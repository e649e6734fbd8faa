//! # Init Command Module / 初始化命令模块
//!
//! This module implements the `init` command, which writes a commented
//! `suite-metrics.toml` holding every default.
//!
//! 此模块实现了 `init` 命令，用于写入包含所有默认值并带注释的 `suite-metrics.toml`。

use anyhow::{Context, Result};
use colored::*;
use std::path::Path;

use crate::infra::fs::write_atomic;
use crate::infra::t;

pub const DEFAULT_CONFIG: &str = r#"# Suite Metrics Configuration / Suite Metrics 配置
# Every key is optional; the values below are the defaults.
# 所有键都是可选的；以下值为默认值。

# Language for console messages; empty means detect from the system
# 控制台消息的语言；为空表示从系统检测
language = ""

# Directory holding reports and derived JSON files / 存放报告及派生 JSON 文件的目录
reports_dir = "reports"

# Shard reports merged by `merge`, in order / `merge` 按顺序合并的分片报告
merge_sources = [
    "test-results.json",
    "smoke-results.json",
    "regression-results.json",
    "api-results.json",
]

# Maximum number of runs kept in history.json / history.json 中保留的最大运行次数
history_capacity = 30

# Runs per trend window; trends need twice this many runs
# 每个趋势窗口的运行次数；趋势需要两倍于此的运行次数
trend_window = 5

# Locale for the date/time shown in history entries / 历史条目中日期时间的区域格式
date_locale = "es-PE"

# README updated by `readme` / `readme` 更新的 README
readme_path = "README.md"

# Directory scanned by `visual-report` / `visual-report` 扫描的目录
test_results_dir = "test-results"

# Visual specs and baseline snapshots checked by `cleanup-snapshots`
# `cleanup-snapshots` 检查的视觉测试与基准快照目录
visual_tests_dir = "tests/visual"
"#;

/// Executes the init command.
///
/// # Arguments
/// * `output` - Path for the new configuration file
/// * `force` - Whether to overwrite an existing file
/// * `locale` - Language for messages
pub fn execute(output: &Path, force: bool, locale: &str) -> Result<()> {
    if output.exists() && !force {
        println!("{}", t!("init.file_exists", locale = locale, path = output.display()).red());
        println!("{}", t!("init.use_force", locale = locale).yellow());
        return Ok(());
    }

    write_atomic(output, DEFAULT_CONFIG.as_bytes())
        .with_context(|| t!("init.write_failed", locale = locale, path = output.display()).to_string())?;

    println!("{}", t!("init.success", locale = locale, path = output.display()).green());
    Ok(())
}
