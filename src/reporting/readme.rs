//! README metrics block.
//!
//! The block lives between two HTML comment markers so it can be regenerated
//! in place on every run.

use crate::core::summary::Summary;

pub const MARKER_START: &str = "<!-- METRICS:START -->";
pub const MARKER_END: &str = "<!-- METRICS:END -->";

/// How [`upsert_metrics_block`] changed the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockUpdate {
    Replaced,
    Appended,
}

/// The marker-delimited markdown block for `summary`.
pub fn render_metrics_block(summary: &Summary) -> String {
    format!(
        "{MARKER_START}\n\
         **Total:** {} &nbsp;|&nbsp; **Passed:** {} ({}) &nbsp;|&nbsp; **Failed:** {} &nbsp;|&nbsp; **Skipped:** {}  \n\
         **Flaky:** {} ({}) &nbsp;|&nbsp; **Duration:** {}\n\
         {MARKER_END}",
        summary.total,
        summary.passed,
        summary.pass_rate,
        summary.failed,
        summary.skipped,
        summary.flaky,
        summary.flaky_rate,
        summary.duration,
    )
}

/// Replaces the first marker-delimited block in `document` with `block`, or
/// appends `block` under a `## 📈 Metrics` heading when no complete block
/// exists.
pub fn upsert_metrics_block(document: &str, block: &str) -> (String, BlockUpdate) {
    if let Some(start) = document.find(MARKER_START) {
        if let Some(offset) = document[start..].find(MARKER_END) {
            let end = start + offset + MARKER_END.len();
            let mut updated = String::with_capacity(document.len() + block.len());
            updated.push_str(&document[..start]);
            updated.push_str(block);
            updated.push_str(&document[end..]);
            return (updated, BlockUpdate::Replaced);
        }
    }
    (
        format!("{document}\n\n## 📈 Metrics\n{block}\n"),
        BlockUpdate::Appended,
    )
}
