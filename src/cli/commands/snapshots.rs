//! # Snapshot Cleanup Command Module / 快照清理命令模块
//!
//! Implements `cleanup-snapshots`: removes baseline screenshots no visual
//! spec mentions. `--dry-run` only lists them.
//!
//! 实现 `cleanup-snapshots` 命令：删除没有任何视觉测试提到的基准截图。`--dry-run` 只列出它们。

use anyhow::Result;

use crate::cli::CommandContext;
use crate::core::snapshots::{plan_cleanup, remove_orphans};
use crate::reporting::console::print_snapshot_cleanup;

pub fn execute(ctx: &CommandContext, dry_run: bool) -> Result<()> {
    let root = &ctx.config.visual_tests_dir;
    let plan = plan_cleanup(root)?;
    let removed = if dry_run { None } else { Some(remove_orphans(&plan)?) };
    print_snapshot_cleanup(&plan, root, removed, &ctx.locale);
    Ok(())
}
