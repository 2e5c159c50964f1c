//! Append-only ordered entity registry.
//!
//! # Invariants
//! - Entries are never removed or reordered.
//! - The write lock is held only for one append; the read lock only for one
//!   full scan, so a scan never observes a partially-appended entry.

use std::sync::{Arc, PoisonError, RwLock};

/// Ordered collection of every registered instance of one entity type.
#[derive(Debug)]
pub struct EntityRegistry<T> {
    entries: RwLock<Vec<Arc<T>>>,
}

impl<T> Default for EntityRegistry<T> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }
}

impl<T> EntityRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, entry: Arc<T>) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }

    /// Appends `entry` unless an existing entry `is_same` as it, under one
    /// write lock. Returns whether `entry` was appended.
    pub fn append_if_absent(&self, entry: Arc<T>, is_same: &dyn Fn(&T, &T) -> bool) -> bool {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if entries
            .iter()
            .any(|existing| is_same(Arc::as_ref(existing), Arc::as_ref(&entry)))
        {
            return false;
        }
        entries.push(entry);
        true
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns every entry in insertion order.
    pub fn all(&self) -> Vec<Arc<T>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns entries accepted by `predicate`, in insertion order.
    pub fn filter(&self, predicate: &dyn Fn(&T) -> bool) -> Vec<Arc<T>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|entry| predicate(Arc::as_ref(entry)))
            .cloned()
            .collect()
    }
}
