//! # Suite Metrics Library / Suite Metrics 库
//!
//! This library provides the core functionality for the Suite Metrics tool,
//! which turns browser end-to-end test reports into run metrics and trends.
//!
//! 此库为 Suite Metrics 工具提供核心功能，
//! 该工具将浏览器端到端测试报告转换为运行指标和趋势。
//!
//! ## Modules / 模块
//!
//! - `core` - Report model, merging, metrics, history and trend analysis
//! - `infra` - Infrastructure services like file system operations and logging
//! - `reporting` - Console summaries, HTML visual diff report, README block
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 报告模型、合并、指标、历史和趋势分析
//! - `infra` - 基础设施服务，如文件系统操作和日志
//! - `reporting` - 控制台摘要、HTML 视觉差异报告、README 指标块
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::history;
pub use crate::core::merge;
pub use crate::core::models;
pub use crate::core::summary;
pub use crate::core::trend;

/// Picks the message locale for `requested`, falling back to the system
/// locale when `requested` is empty.
///
/// It attempts to match the full locale (e.g., "zh-CN"), then just the
/// language code (e.g., "es" from "es-PE"), and finally falls back to the
/// default language ("en").
pub fn resolve_locale(requested: &str) -> String {
    let wanted = if requested.is_empty() {
        sys_locale::get_locale().unwrap_or_else(|| "en".to_string())
    } else {
        requested.to_string()
    };
    let available_locales = rust_i18n::available_locales!();

    if available_locales.contains(&wanted.as_str()) {
        return wanted;
    }
    wanted
        .split(['-', '_'])
        .next()
        .filter(|lang_code| available_locales.contains(lang_code))
        .unwrap_or("en")
        .to_string()
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
