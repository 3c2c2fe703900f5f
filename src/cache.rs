//! Reusable alignment tables keyed by column count.
//!
//! Building the alignment set and its compatibility index is the expensive,
//! input-independent part of a row DP solve. [`AlignmentCache`] keeps one
//! immutable [`AlignmentTable`] per width so repeated solves over grids with
//! the same column count share it. The cache is an ordinary value: its
//! lifetime is whatever its owner decides, and it is safe to share between
//! threads.

use crate::alignment::AlignmentSet;
use crate::compat::CompatibilityIndex;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Alignment set plus compatibility index for one width.
#[derive(Debug)]
pub struct AlignmentTable {
    pub set: AlignmentSet,
    pub compat: CompatibilityIndex,
}

impl AlignmentTable {
    pub fn build(width: usize) -> Self {
        let set = AlignmentSet::generate(width);
        let compat = CompatibilityIndex::build(&set);
        Self { set, compat }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.set.width()
    }

    /// Number of alignments (N).
    #[inline]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct AlignmentCache {
    tables: Mutex<HashMap<usize, Arc<AlignmentTable>>>,
}

impl AlignmentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the table for `width`, building it on first use.
    ///
    /// The table is built without holding the lock; if two callers race on
    /// the same width the first insert wins and both receive that table.
    pub fn get_or_build(&self, width: usize) -> Arc<AlignmentTable> {
        if let Some(table) = self.lock().get(&width) {
            return Arc::clone(table);
        }
        let built = Arc::new(AlignmentTable::build(width));
        #[cfg(feature = "tracing")]
        tracing::debug!(
            width,
            alignments = built.len(),
            pairs = built.compat.num_pairs(),
            "built alignment table"
        );
        Arc::clone(self.lock().entry(width).or_insert(built))
    }

    /// Widths currently cached, ascending.
    pub fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.lock().keys().copied().collect();
        widths.sort_unstable();
        widths
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<usize, Arc<AlignmentTable>>> {
        // Tables are immutable once inserted, so a poisoned map is still sound.
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
