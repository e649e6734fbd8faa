//! # Run History / 运行历史
//!
//! A bounded, oldest-first-evicted log of summaries, persisted as a JSON array.
//!
//! 有界的摘要日志，最旧的条目最先被淘汰，以 JSON 数组形式持久化。

use crate::core::summary::Summary;
use chrono::{DateTime, Local, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::VecDeque;

/// One recorded run: a summary stamped with its capture time.
/// 一次记录的运行：带有捕获时间戳的摘要。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// RFC 3339, UTC.
    pub timestamp: String,
    /// Capture date formatted for the configured locale.
    #[serde(default)]
    pub date: String,
    /// Capture time formatted for the configured locale.
    #[serde(default)]
    pub time: String,
    #[serde(flatten)]
    pub summary: Summary,
}

impl HistoryEntry {
    pub fn capture(summary: Summary, at: DateTime<Local>, locale: &str) -> Self {
        let (date_fmt, time_fmt) = locale_patterns(locale);
        Self {
            timestamp: at
                .with_timezone(&Utc)
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            date: at.format(date_fmt).to_string(),
            time: at.format(time_fmt).to_string(),
            summary,
        }
    }
}

/// Date and time patterns matching how browsers render the given locale.
fn locale_patterns(locale: &str) -> (&'static str, &'static str) {
    let lang = locale.split(['-', '_']).next().unwrap_or(locale);
    match (lang, locale) {
        (_, "en-US") => ("%-m/%-d/%Y", "%-I:%M:%S %p"),
        ("en", _) => ("%d/%m/%Y", "%H:%M:%S"),
        ("es", _) | ("fr", _) | ("it", _) | ("pt", _) => ("%-d/%-m/%Y", "%H:%M:%S"),
        ("de", _) => ("%-d.%-m.%Y", "%H:%M:%S"),
        ("zh", _) | ("ja", _) => ("%Y/%-m/%-d", "%H:%M:%S"),
        _ => ("%Y-%m-%d", "%H:%M:%S"),
    }
}

/// Fixed-capacity FIFO of [`HistoryEntry`] values.
/// 固定容量的 [`HistoryEntry`] 先进先出队列。
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl History {
    pub const DEFAULT_CAPACITY: usize = 30;

    /// A zero capacity is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Builds a history from stored entries (oldest first), keeping only the
    /// newest `capacity` of them.
    pub fn from_entries(entries: Vec<HistoryEntry>, capacity: usize) -> Self {
        let mut history = Self::with_capacity(capacity);
        for entry in entries {
            history.push(entry);
        }
        history
    }

    /// Appends `entry`, evicting and returning the oldest entry when full.
    /// 追加 `entry`；若已满，则淘汰并返回最旧的条目。
    pub fn push(&mut self, entry: HistoryEntry) -> Option<HistoryEntry> {
        let evicted = if self.entries.len() == self.capacity {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(entry);
        evicted
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry> + ExactSizeIterator {
        self.entries.iter()
    }

    /// The `size` newest entries and the `size` entries before them, or
    /// `None` when fewer than `2 * size` entries are recorded.
    /// 最新的 `size` 个条目及其之前的 `size` 个条目；若记录少于 `2 * size` 个则返回 `None`。
    pub fn windows(&self, size: usize) -> Option<(Vec<&HistoryEntry>, Vec<&HistoryEntry>)> {
        if size == 0 || self.entries.len() < size * 2 {
            return None;
        }
        let start = self.entries.len() - size * 2;
        let previous = self.entries.range(start..start + size).collect();
        let recent = self.entries.range(start + size..).collect();
        Some((recent, previous))
    }
}

impl Serialize for History {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::units::{Percent, Seconds};
    use chrono::TimeZone;

    fn entry(total: u64) -> HistoryEntry {
        HistoryEntry {
            timestamp: format!("t{total}"),
            date: String::new(),
            time: String::new(),
            summary: Summary {
                total,
                passed: total,
                failed: 0,
                skipped: 0,
                flaky: 0,
                flaky_rate: Percent::new(0.0),
                pass_rate: Percent::new(100.0),
                duration: Seconds::new(1.0),
            },
        }
    }

    #[test]
    fn push_evicts_oldest_when_full() {
        let mut history = History::with_capacity(2);
        assert!(history.push(entry(1)).is_none());
        assert!(history.push(entry(2)).is_none());
        let evicted = history.push(entry(3)).unwrap();
        assert_eq!(evicted.summary.total, 1);
        assert_eq!(history.len(), 2);
        assert_eq!(history.latest().unwrap().summary.total, 3);
    }

    #[test]
    fn windows_split_recent_from_previous() {
        let history = History::from_entries((1..=12).map(entry).collect(), 30);
        let (recent, previous) = history.windows(5).unwrap();
        let totals = |w: &[&HistoryEntry]| w.iter().map(|e| e.summary.total).collect::<Vec<_>>();
        assert_eq!(totals(&recent), vec![8, 9, 10, 11, 12]);
        assert_eq!(totals(&previous), vec![3, 4, 5, 6, 7]);
        assert!(History::from_entries((1..=9).map(entry).collect(), 30).windows(5).is_none());
    }

    #[test]
    fn capture_formats_locale_date() {
        let at = Local.with_ymd_and_hms(2026, 3, 7, 9, 5, 2).unwrap();
        let e = HistoryEntry::capture(entry(1).summary, at, "es-PE");
        assert_eq!(e.date, "7/3/2026");
        assert_eq!(e.time, "09:05:02");
        let e = HistoryEntry::capture(entry(1).summary, at, "en-US");
        assert_eq!(e.date, "3/7/2026");
        assert_eq!(e.time, "9:05:02 AM");
    }

    #[test]
    fn serializes_as_flat_array() {
        let history = History::from_entries(vec![entry(4)], 30);
        let json = serde_json::to_value(&history).unwrap();
        assert_eq!(json[0]["total"], 4);
        assert_eq!(json[0]["passRate"], "100.0%");
        assert_eq!(json[0]["timestamp"], "t4");
    }
}
