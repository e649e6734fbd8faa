//! # Snapshot Cleanup / 快照清理
//!
//! Finds baseline screenshots that no visual spec refers to any more.
//! A snapshot is kept when some `*.spec.ts` under the visual tests root
//! mentions its base name (or its full path); everything else is an orphan.
//!
//! 查找不再被任何视觉测试引用的基准截图。若视觉测试根目录下的某个 `*.spec.ts`
//! 提到了快照的基本名称（或完整路径），则保留该快照；否则视为孤立快照。

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::infra::fs::find_files_with_suffix;

const SNAPSHOT_SUFFIX: &str = ".png";
const SPEC_SUFFIX: &str = ".spec.ts";

/// Snapshot directories looked up under the visual tests root, in order.
pub const SNAPSHOT_DIRS: [&str; 3] = ["__screenshots__", "components/__screenshots__", "snapshots"];

/// One snapshot and whether a spec still refers to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotVerdict {
    pub path: PathBuf,
    pub referenced: bool,
}

/// The verdicts for one snapshot directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotScan {
    pub dir: PathBuf,
    pub snapshots: Vec<SnapshotVerdict>,
}

/// Everything a cleanup would keep or remove.
/// 一次清理将保留或删除的全部内容。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupPlan {
    pub scans: Vec<SnapshotScan>,
}

impl CleanupPlan {
    pub fn total(&self) -> usize {
        self.scans.iter().map(|s| s.snapshots.len()).sum()
    }

    pub fn orphans(&self) -> impl Iterator<Item = &Path> {
        self.scans
            .iter()
            .flat_map(|s| &s.snapshots)
            .filter(|v| !v.referenced)
            .map(|v| v.path.as_path())
    }

    pub fn orphan_count(&self) -> usize {
        self.orphans().count()
    }
}

/// Scans the snapshot directories under `root` that exist and classifies
/// every PNG in them. Nothing is deleted.
///
/// 扫描 `root` 下存在的快照目录，并对其中的每个 PNG 进行分类。不会删除任何文件。
pub fn plan_cleanup(root: &Path) -> Result<CleanupPlan> {
    let specs = find_files_with_suffix(root, SPEC_SUFFIX)?
        .into_iter()
        .map(|path| {
            fs::read_to_string(&path)
                .with_context(|| format!("Failed to read spec: {}", path.display()))
        })
        .collect::<Result<Vec<String>>>()?;
    tracing::debug!(root = %root.display(), specs = specs.len(), "specs loaded");

    let mut plan = CleanupPlan::default();
    for dir in SNAPSHOT_DIRS.iter().map(|d| root.join(d)) {
        if !dir.is_dir() {
            continue;
        }
        let snapshots = find_files_with_suffix(&dir, SNAPSHOT_SUFFIX)?
            .into_iter()
            .map(|path| {
                let referenced = is_referenced(&path, &specs);
                SnapshotVerdict { path, referenced }
            })
            .collect();
        plan.scans.push(SnapshotScan { dir, snapshots });
    }
    Ok(plan)
}

fn is_referenced(snapshot: &Path, specs: &[String]) -> bool {
    let base = snapshot
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let full = snapshot.to_string_lossy();
    specs
        .iter()
        .any(|content| content.contains(base.as_str()) || content.contains(&*full))
}

/// Deletes every orphan in `plan` and returns how many were removed.
pub fn remove_orphans(plan: &CleanupPlan) -> Result<usize> {
    let mut removed = 0;
    for orphan in plan.orphans() {
        fs::remove_file(orphan)
            .with_context(|| format!("Failed to remove snapshot: {}", orphan.display()))?;
        tracing::debug!(path = %orphan.display(), "orphan snapshot removed");
        removed += 1;
    }
    Ok(removed)
}
