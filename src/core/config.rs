use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::history::History;
use crate::core::trend::DEFAULT_WINDOW;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "suite-metrics.toml";

pub const MERGED_FILE: &str = "merged-results.json";
pub const RESULTS_FILE: &str = "results.json";
pub const SUMMARY_FILE: &str = "summary.json";
pub const HISTORY_FILE: &str = "history.json";
pub const TRENDS_FILE: &str = "performance-trends.json";
pub const VISUAL_REPORT_FILE: &str = "visual-diff-report.html";

/// Overrides the reports directory.
pub const ENV_REPORTS_DIR: &str = "SUITE_METRICS_REPORTS_DIR";
/// Overrides the message language.
pub const ENV_LANG: &str = "SUITE_METRICS_LANG";

/// Settings for every pipeline stage, loaded from an optional TOML file.
/// Every field has a default, so an empty file (or no file) is valid.
///
/// 所有管道阶段的设置，从可选的 TOML 文件加载。
/// 每个字段都有默认值，因此空文件（或没有文件）也是有效的。
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// The language for console messages (e.g., "en", "zh-CN", "es").
    /// Empty means "detect from the system".
    ///
    /// 控制台消息的语言（例如 "en"、"zh-CN"、"es"）。为空表示从系统检测。
    pub language: String,

    /// Directory holding reports and every derived JSON file.
    /// 存放报告及所有派生 JSON 文件的目录。
    pub reports_dir: PathBuf,

    /// Shard report file names merged, in order.
    /// 按顺序合并的分片报告文件名。
    pub merge_sources: Vec<String>,

    /// Maximum number of history entries kept.
    pub history_capacity: usize,

    /// Entries per trend window; trends need twice this many entries.
    pub trend_window: usize,

    /// Locale used for the human-readable date/time of history entries.
    pub date_locale: String,

    /// README updated by the `readme` command.
    pub readme_path: PathBuf,

    /// Directory scanned for visual diff images.
    pub test_results_dir: PathBuf,

    /// Root of the visual specs and their baseline snapshots, used by
    /// `cleanup-snapshots`.
    pub visual_tests_dir: PathBuf,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            language: String::new(),
            reports_dir: PathBuf::from("reports"),
            merge_sources: default_merge_sources(),
            history_capacity: History::DEFAULT_CAPACITY,
            trend_window: DEFAULT_WINDOW,
            date_locale: "es-PE".to_string(),
            readme_path: PathBuf::from("README.md"),
            test_results_dir: PathBuf::from("test-results"),
            visual_tests_dir: PathBuf::from("tests/visual"),
        }
    }
}

fn default_merge_sources() -> Vec<String> {
    [
        "test-results.json",
        "smoke-results.json",
        "regression-results.json",
        "api-results.json",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl MetricsConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse metrics configuration")
    }

    /// Loads `explicit` (which must exist), else `suite-metrics.toml` if it
    /// exists in the working directory, else defaults.
    ///
    /// 加载 `explicit`（必须存在）；否则若工作目录中存在 `suite-metrics.toml` 则加载它；否则使用默认值。
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.is_file() {
                    return Ok(Self::default());
                }
                fallback
            }
        };
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Applies overrides from a variable lookup (normally `std::env::var`).
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_REPORTS_DIR).filter(|v| !v.is_empty()) {
            self.reports_dir = PathBuf::from(dir);
        }
        if let Some(lang) = lookup(ENV_LANG).filter(|v| !v.is_empty()) {
            self.language = lang;
        }
    }

    pub fn report_path(&self, file: &str) -> PathBuf {
        self.reports_dir.join(file)
    }
}
