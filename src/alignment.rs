//! Per-row selection patterns ("alignments").
//!
//! An alignment marks which cells of one grid row are selected. A valid
//! alignment never selects two neighbouring columns. [`AlignmentSet`]
//! enumerates every valid alignment for a given width in binary-counter order;
//! that order is stable and alignment indices are used as array offsets by the
//! row DP, so it must never be re-sorted.

use std::fmt;

/// Widest row an [`Alignment`] bitmask can describe.
pub const MAX_ALIGNMENT_WIDTH: usize = 63;

/// A row selection pattern. Bit `j` set means column `j` is selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Alignment {
    bits: u64,
    width: usize,
}

impl Alignment {
    /// Wrap a raw bitmask. Bits at or above `width` must be clear.
    pub fn from_bits(bits: u64, width: usize) -> Self {
        assert!(width <= MAX_ALIGNMENT_WIDTH, "alignment width {width} too large");
        debug_assert!(width == MAX_ALIGNMENT_WIDTH || bits >> width == 0);
        Self { bits, width }
    }

    /// Build from explicit 0/1 flags, column 0 first.
    pub fn from_flags(flags: &[u8]) -> Self {
        let bits = flags
            .iter()
            .enumerate()
            .filter(|&(_, &f)| f != 0)
            .fold(0u64, |acc, (j, _)| acc | (1 << j));
        Self::from_bits(bits, flags.len())
    }

    /// The empty selection for a row of `width` columns.
    pub fn empty(width: usize) -> Self {
        Self::from_bits(0, width)
    }

    #[inline]
    pub fn bits(&self) -> u64 {
        self.bits
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn is_selected(&self, col: usize) -> bool {
        col < self.width && (self.bits >> col) & 1 == 1
    }

    /// Number of selected columns.
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// True if no two adjacent columns are selected.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.bits & (self.bits >> 1) == 0
    }

    /// Dot product with another alignment: the number of shared columns.
    #[inline]
    pub fn dot(&self, other: &Alignment) -> u32 {
        (self.bits & other.bits).count_ones()
    }

    /// Sum of `values` at the selected columns.
    #[inline]
    pub fn score(&self, values: &[u64]) -> u64 {
        debug_assert_eq!(values.len(), self.width);
        let mut bits = self.bits;
        let mut total = 0;
        while bits != 0 {
            total += values[bits.trailing_zeros() as usize];
            bits &= bits - 1;
        }
        total
    }

    /// 0/1 flags, column 0 first.
    pub fn flags(&self) -> Vec<u8> {
        (0..self.width).map(|j| ((self.bits >> j) & 1) as u8).collect()
    }

    /// Iterator over selected column indices, ascending.
    pub fn selected_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.width).filter(move |&j| self.is_selected(j))
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for j in 0..self.width {
            if j > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", (self.bits >> j) & 1)?;
        }
        write!(f, "]")
    }
}

/// Every valid alignment for one row width, in generation order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlignmentSet {
    width: usize,
    alignments: Vec<Alignment>,
}

impl AlignmentSet {
    /// Enumerate all valid alignments of `width` columns.
    ///
    /// Walks a `width`-bit counter from 0 to 2^width − 1 and keeps every value
    /// without two adjacent set bits. Width 0 yields the single empty alignment.
    ///
    /// # Panics
    /// Panics if `width > MAX_ALIGNMENT_WIDTH`.
    pub fn generate(width: usize) -> Self {
        assert!(
            width <= MAX_ALIGNMENT_WIDTH,
            "alignment width {width} exceeds {MAX_ALIGNMENT_WIDTH}"
        );
        let end = 1u64 << width;
        let alignments = (0..end)
            .map(|bits| Alignment { bits, width })
            .filter(Alignment::is_valid)
            .collect();
        Self { width, alignments }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.alignments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.alignments.is_empty()
    }

    #[inline]
    pub fn get(&self, idx: usize) -> &Alignment {
        &self.alignments[idx]
    }

    pub fn as_slice(&self) -> &[Alignment] {
        &self.alignments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Alignment> {
        self.alignments.iter()
    }

    /// Index of `alignment` within the set, if present.
    ///
    /// The set is strictly increasing in `bits`, so this is a binary search.
    pub fn index_of(&self, alignment: &Alignment) -> Option<usize> {
        if alignment.width != self.width {
            return None;
        }
        self.alignments
            .binary_search_by_key(&alignment.bits, |a| a.bits)
            .ok()
    }

    /// Score of every alignment against one row of values.
    pub fn row_scores(&self, values: &[u64], out: &mut [u64]) {
        debug_assert_eq!(out.len(), self.len());
        for (slot, ali) in out.iter_mut().zip(&self.alignments) {
            *slot = ali.score(values);
        }
    }
}

impl<'a> IntoIterator for &'a AlignmentSet {
    type Item = &'a Alignment;
    type IntoIter = std::slice::Iter<'a, Alignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.alignments.iter()
    }
}
