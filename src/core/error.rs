//! # Pipeline Errors / 管道错误
//!
//! Typed failures the binary maps to console messages and exit codes.
//! Recoverable per-file problems during a merge are not errors; they are
//! reported as [`crate::core::merge::SourceOutcome`] values instead.
//!
//! 二进制程序映射到控制台消息和退出码的类型化错误。

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// A stage's single required input file does not exist.
    /// 某个阶段唯一必需的输入文件不存在。
    #[error("required input not found: {}", path.display())]
    MissingInput { path: PathBuf },

    /// The input exists but could not be read or parsed as the expected JSON.
    /// 输入文件存在，但无法读取或解析为预期的 JSON。
    #[error("failed to parse {}: {source}", path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// None of the merge candidates could be merged.
    #[error("no reports found to merge")]
    NoReports,
}

impl PipelineError {
    /// Whether the error should terminate the process with a failure code.
    /// `NoReports` is a warning-level outcome and exits cleanly.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, PipelineError::NoReports)
    }
}
