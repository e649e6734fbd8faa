//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides the JSON read/write helpers every stage uses, plus
//! the recursive scan behind the visual diff report.
//!
//! 此模块提供每个阶段使用的 JSON 读写辅助函数，以及视觉差异报告所需的递归扫描。
//!
//! Writes go to a temporary file in the destination directory which is then
//! renamed over the target, so readers never see a half-written file. There is
//! no locking; concurrent invocations against the same directory are not
//! supported.

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use walkdir::WalkDir;

use crate::core::error::PipelineError;

/// Reads and parses a JSON file.
///
/// # Errors
/// `MissingInput` when `path` does not exist, `MalformedInput` when it cannot
/// be read or parsed as `T`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, PipelineError> {
    if !path.exists() {
        return Err(PipelineError::MissingInput {
            path: path.to_path_buf(),
        });
    }
    let malformed = |source: Box<dyn std::error::Error + Send + Sync>| PipelineError::MalformedInput {
        path: path.to_path_buf(),
        source,
    };
    let content = fs::read_to_string(path).map_err(|e| malformed(e.into()))?;
    let value = serde_json::from_str(&content).map_err(|e| malformed(e.into()))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "json read");
    Ok(value)
}

/// Reads a JSON file, returning `None` when it does not exist.
pub fn read_json_opt<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, PipelineError> {
    match read_json(path) {
        Ok(value) => Ok(Some(value)),
        Err(PipelineError::MissingInput { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Creates `dir` and its parents if needed.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.as_os_str().is_empty() && !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(())
}

/// Atomically replaces `path` with `contents`, creating the parent directory.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    ensure_dir(&parent)?;

    let mut tmp = NamedTempFile::new_in(&parent)
        .with_context(|| format!("Failed to create temporary file in {}", parent.display()))?;
    tmp.write_all(contents)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tmp.persist(path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "file written");
    Ok(())
}

/// Serializes `value` as pretty JSON (two-space indent) and writes it atomically.
pub fn write_json_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    write_atomic(path, json.as_bytes())
}

/// Recursively collects files under `dir` whose name ends with `suffix`,
/// sorted by path. A missing directory yields an empty list.
///
/// 递归收集 `dir` 下文件名以 `suffix` 结尾的文件，并按路径排序。目录不存在时返回空列表。
pub fn find_files_with_suffix(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut found = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("Failed to read directory: {}", dir.display()))?;
        if entry.file_type().is_file() && entry.file_name().to_string_lossy().ends_with(suffix) {
            found.push(entry.into_path());
        }
    }
    found.sort();
    Ok(found)
}
