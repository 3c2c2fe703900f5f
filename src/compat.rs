//! Vertical stacking rules between alignments.
//!
//! Two alignments may sit in consecutive rows iff their dot product is zero,
//! i.e. they select no column in common. The index is stored in compressed
//! sparse-row form: one flat partner buffer plus per-alignment offsets.

use crate::alignment::AlignmentSet;

/// For each alignment index, the ascending list of compatible indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompatibilityIndex {
    offsets: Vec<usize>,
    partners: Vec<u32>,
}

impl CompatibilityIndex {
    /// Test every ordered pair of `set` and record the compatible ones.
    pub fn build(set: &AlignmentSet) -> Self {
        let n = set.len();
        let mut offsets = Vec::with_capacity(n + 1);
        let mut partners = Vec::new();
        offsets.push(0);
        for a in set {
            for (j, b) in set.iter().enumerate() {
                if a.dot(b) == 0 {
                    partners.push(j as u32);
                }
            }
            offsets.push(partners.len());
        }
        Self { offsets, partners }
    }

    /// Number of alignments covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Indices that may be stacked directly below (or above) alignment `a`.
    #[inline]
    pub fn partners(&self, a: usize) -> &[u32] {
        &self.partners[self.offsets[a]..self.offsets[a + 1]]
    }

    /// Total number of compatible ordered pairs.
    #[inline]
    pub fn num_pairs(&self) -> usize {
        self.partners.len()
    }

    pub fn are_compatible(&self, a: usize, b: usize) -> bool {
        self.partners(a).binary_search(&(b as u32)).is_ok()
    }
}
