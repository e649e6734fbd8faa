//! Discovery of visual-regression diff images left by screenshot assertions.
//!
//! The test framework writes `<name>-diff.png` next to `<name>-actual.png`
//! and `<name>-expected.png` in a per-test output directory. This module only
//! locates those files; it never compares pixels.

use anyhow::Result;
use std::path::{Component, Path, PathBuf};

use crate::infra::fs::find_files_with_suffix;

const DIFF_SUFFIX: &str = "-diff.png";

/// One failed screenshot comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualDiff {
    /// Snapshot name without the `-diff.png` suffix.
    pub name: String,
    /// Name of the per-test directory holding the images.
    pub test: String,
    pub diff: PathBuf,
    pub actual: Option<PathBuf>,
    pub expected: Option<PathBuf>,
}

/// Recursively finds diff images under `root`. A missing directory yields no
/// diffs.
pub fn find_visual_diffs(root: &Path) -> Result<Vec<VisualDiff>> {
    let diffs = find_files_with_suffix(root, DIFF_SUFFIX)?
        .into_iter()
        .filter_map(|diff| {
            let file_name = diff.file_name()?.to_string_lossy().into_owned();
            let name = file_name.strip_suffix(DIFF_SUFFIX)?.to_string();
            let dir = diff.parent()?.to_path_buf();
            let sibling = |kind: &str| {
                let candidate = dir.join(format!("{name}-{kind}.png"));
                candidate.is_file().then_some(candidate)
            };
            Some(VisualDiff {
                test: dir
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                actual: sibling("actual"),
                expected: sibling("expected"),
                name,
                diff,
            })
        })
        .collect();
    Ok(diffs)
}

/// Path of `target` as seen from directory `base`, with `/` separators so it
/// can be used as an HTML `src`. Falls back to `target` as given when the two
/// cannot be related (e.g. different drives).
pub fn relative_href(base: &Path, target: &Path) -> String {
    let resolve = |p: &Path| p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
    let base = resolve(base);
    let target = resolve(target);

    let base_parts: Vec<Component<'_>> = base.components().collect();
    let target_parts: Vec<Component<'_>> = target.components().collect();
    if base_parts.first() != target_parts.first() {
        return target.to_string_lossy().replace('\\', "/");
    }
    let common = base_parts
        .iter()
        .zip(&target_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = std::iter::repeat_n("..".to_string(), base_parts.len() - common).collect();
    parts.extend(
        target_parts[common..]
            .iter()
            .map(|c| c.as_os_str().to_string_lossy().into_owned()),
    );
    parts.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn pairs_diff_with_siblings() {
        let root = tempdir().unwrap();
        let case = root.path().join("home-visual-chromium");
        fs::create_dir_all(&case).unwrap();
        fs::write(case.join("hero-diff.png"), b"d").unwrap();
        fs::write(case.join("hero-actual.png"), b"a").unwrap();

        let diffs = find_visual_diffs(root.path()).unwrap();
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].name, "hero");
        assert_eq!(diffs[0].test, "home-visual-chromium");
        assert!(diffs[0].actual.is_some());
        assert!(diffs[0].expected.is_none());
    }

    #[test]
    fn href_climbs_to_sibling_directory() {
        let root = tempdir().unwrap();
        let reports = root.path().join("reports");
        let image = root.path().join("test-results").join("case").join("a-diff.png");
        fs::create_dir_all(&reports).unwrap();
        fs::create_dir_all(image.parent().unwrap()).unwrap();
        fs::write(&image, b"x").unwrap();
        assert_eq!(relative_href(&reports, &image), "../test-results/case/a-diff.png");
    }
}
