//! # Commands Module / 命令模块
//!
//! One module per subcommand. Each `execute` resolves its paths from the
//! [`CommandContext`](crate::cli::CommandContext), runs the matching
//! pipeline stage and prints the result.
//!
//! 每个子命令一个模块。每个 `execute` 从上下文解析路径，运行对应的管道阶段并打印结果。

pub mod export;
pub mod init;
pub mod merge;
pub mod metrics;
pub mod readme;
pub mod snapshots;
pub mod trend;
pub mod visual;

use crate::core::PipelineError;
use crate::reporting::console::print_missing_input;

/// Prints the localised "not found" hint when `error` is a missing input,
/// then hands the error back for propagation.
pub(crate) fn explain_missing(error: anyhow::Error, hint_key: &str, locale: &str) -> anyhow::Error {
    if let Some(PipelineError::MissingInput { path }) = error.downcast_ref::<PipelineError>() {
        print_missing_input(path, hint_key, locale);
    }
    error
}
