//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Suite Metrics:
//! the report data model, merging, metrics computation, run history and
//! trend analysis.
//!
//! 此模块包含 Suite Metrics 的核心功能：
//! 报告数据模型、合并、指标计算、运行历史和趋势分析。

pub mod config;
pub mod error;
pub mod factory;
pub mod history;
pub mod merge;
pub mod models;
pub mod pipeline;
pub mod snapshots;
pub mod summary;
pub mod trend;
pub mod units;

// Re-exports
pub use config::MetricsConfig;
pub use error::PipelineError;
pub use history::{History, HistoryEntry};
pub use models::TestRunReport;
pub use summary::{Summary, compute_summary};
pub use trend::{TrendIndicator, TrendSet, compute_trends};
