//! Lock-protected trie handle for multi-threaded callers
//!
//! [`DnaTrie`] has no internal synchronization. This wrapper puts the whole
//! trie behind one reader-writer lock: insertions take the write lock,
//! lookups and statistics share the read lock.

use crate::model::SymbolSet;
use crate::stats::{composition, Composition, SymbolCounts};
use crate::trie::DnaTrie;
use crate::Result;
use parking_lot::RwLock;
use std::sync::Arc;

/// A cloneable handle to one trie shared between threads
#[derive(Clone, Debug, Default)]
pub struct SharedTrie {
    inner: Arc<RwLock<DnaTrie>>,
}

impl SharedTrie {
    /// Create a handle around an empty trie
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert under the write lock
    pub fn insert(&self, sequence: &str) -> Result<u64> {
        self.inner.write().insert(sequence)
    }

    pub fn count_of(&self, sequence: &str) -> Result<u64> {
        self.inner.read().count_of(sequence)
    }

    pub fn prefix_count(&self, prefix: &str) -> Result<u64> {
        self.inner.read().prefix_count(prefix)
    }

    pub fn insertions(&self) -> u64 {
        self.inner.read().insertions()
    }

    /// Per-symbol totals computed under one read lock
    pub fn symbol_counts(&self) -> SymbolCounts {
        SymbolCounts::from_trie(&self.inner.read())
    }

    pub fn composition(&self, targets: &SymbolSet) -> Composition {
        composition(&self.inner.read(), targets)
    }

    /// Run `f` with shared access to the trie
    pub fn read<R>(&self, f: impl FnOnce(&DnaTrie) -> R) -> R {
        f(&*self.inner.read())
    }

    /// Recover the trie if this is the last handle
    pub fn into_inner(self) -> std::result::Result<DnaTrie, SharedTrie> {
        Arc::try_unwrap(self.inner)
            .map(|lock| lock.into_inner())
            .map_err(|inner| SharedTrie { inner })
    }
}

impl From<DnaTrie> for SharedTrie {
    fn from(trie: DnaTrie) -> Self {
        SharedTrie {
            inner: Arc::new(RwLock::new(trie)),
        }
    }
}
