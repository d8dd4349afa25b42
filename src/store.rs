// src/store.rs

use std::collections::HashSet;

use crate::entry::{ConsolidatedEntry, Entry};

/// Deduplicating container for one query's entries.
///
/// Identity is the entry's own equality (case number excluded); insertion
/// order is preserved so that `into_sorted` can break case-number ties
/// stably.
#[derive(Debug, Default)]
pub struct EntrySet {
    seen: HashSet<Entry>,
    order: Vec<Entry>,
}

impl EntrySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry; returns false if an equal entry is already present.
    pub fn insert(&mut self, entry: Entry) -> bool {
        if self.seen.insert(entry.clone()) {
            self.order.push(entry);
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Entries in ascending case-number order, ties by insertion order.
    pub fn into_sorted(self) -> Vec<Entry> {
        let mut entries = self.order;
        entries.sort_by_key(Entry::case_number); // stable
        entries
    }
}

/// Merge *consecutive* entries that cite the same place into one
/// consolidated entry, keeping text segments in arrival order.
///
/// This is an adjacency merge, not a grouping: the same place showing up
/// again after a different one starts a fresh consolidated entry. The remote
/// engine returns hits in place order, so in practice duplicates are
/// adjacent; if it ever stopped doing that we would emit duplicates, which
/// is the behavior the output format has always had.
pub fn consolidate<I: IntoIterator<Item = Entry>>(entries: I) -> Vec<ConsolidatedEntry> {
    let mut out: Vec<ConsolidatedEntry> = Vec::new();
    for entry in entries {
        match out.last_mut() {
            Some(last) if last.place_number() == entry.place_number() => {
                last.push_text(s!(entry.text()));
            }
            _ => out.push(entry.into()),
        }
    }
    out
}
