//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for Suite Metrics,
//! including file system operations, i18n and diagnostic logging setup.
//!
//! 此模块为 Suite Metrics 提供基础设施服务，
//! 包括文件系统操作、国际化和诊断日志设置。

pub mod fs;
pub mod logging;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
