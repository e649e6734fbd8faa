//! # Reporting Module / 报告模块
//!
//! This module handles everything the pipeline shows or renders: colourful,
//! localised console summaries, the HTML visual diff report and the README
//! metrics block.
//!
//! 此模块处理管道显示或渲染的所有内容：彩色的本地化控制台摘要、
//! HTML 视觉差异报告以及 README 指标块。

pub mod console;
pub mod html;
pub mod readme;
pub mod visual;

// Re-export common reporting functions
pub use console::{print_summary, print_merged_summary};
pub use html::generate_visual_report;
