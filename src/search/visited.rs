use rustc_hash::FxHashSet;

use crate::board::StateKey;

/// Set of canonical board keys seen by one search run.
///
/// Scoped per run (or per path, for backtracking); grows monotonically unless
/// the owner explicitly releases keys, and is dropped with the run.
#[derive(Debug, Clone, Default)]
pub struct VisitedSet {
    raw: FxHashSet<StateKey>,
}

impl VisitedSet {
    pub fn new() -> VisitedSet {
        VisitedSet::default()
    }

    #[inline]
    pub fn contains(&self, key: StateKey) -> bool {
        self.raw.contains(&key)
    }

    /// Insert `key`, returning `true` if it was not present before.
    #[inline]
    pub fn insert(&mut self, key: StateKey) -> bool {
        self.raw.insert(key)
    }

    /// Release `key` (used by path-scoped marking to unmark on backtrack).
    #[inline]
    pub fn remove(&mut self, key: StateKey) -> bool {
        self.raw.remove(&key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}
