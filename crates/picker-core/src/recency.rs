//! Recency Tracker
//!
//! Bounded most-recently-used list, most recent first.

use std::collections::VecDeque;

use crate::entity::Entity;

/// Default number of remembered selections
pub const DEFAULT_RECENT_CAP: usize = 16;

#[derive(Debug, Clone, PartialEq)]
pub struct RecencyTracker<T: Entity> {
    cap: usize,
    entries: VecDeque<T>,
}

impl<T: Entity> RecencyTracker<T> {
    /// A cap of zero is clamped to one
    pub fn new(cap: usize) -> Self {
        let cap = cap.max(1);
        Self {
            cap,
            entries: VecDeque::with_capacity(cap),
        }
    }

    /// Move `item` to the front, dropping any older copy and anything past the cap
    pub fn record_use(&mut self, item: T) {
        let id = item.id();
        self.entries.retain(|existing| existing.id() != id);
        self.entries.push_front(item);
        self.entries.truncate(self.cap);
    }

    /// First `limit` entries
    pub fn recents(&self, limit: usize) -> Vec<T> {
        self.entries.iter().take(limit).cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.entries.iter().any(|entry| &entry.id() == id)
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T: Entity> Default for RecencyTracker<T> {
    fn default() -> Self {
        Self::new(DEFAULT_RECENT_CAP)
    }
}
