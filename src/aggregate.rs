use crate::types::{EntryKey, LogEntry};
use std::collections::HashMap;

/// Collapse entries that share a key into one entry carrying the summed time,
/// ranked slowest first.
///
/// Equal totals are ordered by key (location, then signature) so the ranking
/// is the same on every run.
pub fn merge_duplicate_entries(entries: Vec<LogEntry>) -> Vec<LogEntry> {
    let mut totals: HashMap<EntryKey, (LogEntry, f64)> = HashMap::with_capacity(entries.len());

    for entry in entries {
        let time = entry.compilation_time();
        totals
            .entry(entry.key().clone())
            .or_insert_with(|| (entry, 0.0))
            .1 += time;
    }

    let mut merged: Vec<LogEntry> = totals
        .into_values()
        .map(|(entry, total)| entry.with_compilation_time(total))
        .collect();

    merged.sort_by(|a, b| {
        b.compilation_time()
            .total_cmp(&a.compilation_time())
            .then_with(|| a.key().cmp(b.key()))
    });

    merged
}
