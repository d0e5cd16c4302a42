//! Query cache for highlight lists, keyed by (user, document)
//!
//! Entries are served until invalidated; the runtime invalidates an entry
//! after every successful batch so the next fetch goes to the store.

use std::collections::HashMap;

use crate::model::{DocumentId, Highlight, UserId};

type CacheKey = (UserId, DocumentId);

#[derive(Debug, Clone)]
struct CacheEntry {
    rows: Vec<Highlight>,
    stale: bool,
}

#[derive(Debug, Default)]
pub struct QueryCache {
    entries: HashMap<CacheKey, CacheEntry>,
    hits: u64,
    misses: u64,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached rows, if present and not invalidated
    pub fn get(&mut self, user: &UserId, document: &DocumentId) -> Option<Vec<Highlight>> {
        let key = (user.clone(), document.clone());
        match self.entries.get(&key) {
            Some(entry) if !entry.stale => {
                self.hits += 1;
                Some(entry.rows.clone())
            }
            _ => {
                self.misses += 1;
                None
            }
        }
    }

    pub fn put(&mut self, user: &UserId, document: &DocumentId, rows: Vec<Highlight>) {
        self.entries.insert(
            (user.clone(), document.clone()),
            CacheEntry { rows, stale: false },
        );
    }

    /// Force the next `get` for (user, document) to miss
    pub fn invalidate(&mut self, user: &UserId, document: &DocumentId) {
        if let Some(entry) = self.entries.get_mut(&(user.clone(), document.clone())) {
            entry.stale = true;
        }
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
