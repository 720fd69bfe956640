//! Packs

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    num::NonZeroU64,
};

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use thiserror::Error;

/// Errors raised while building a set of pack sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PackSizesError {
    /// A pack size was zero or negative.
    #[error("pack size must be a positive integer, got {size}")]
    InvalidPackSize {
        /// The rejected size
        size: i64,
    },

    /// The same pack size appeared more than once.
    #[error("duplicate pack size {size}")]
    DuplicatePackSize {
        /// The repeated size
        size: u64,
    },
}

/// Pack Size
///
/// The number of items shipped in a single, indivisible pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackSize(NonZeroU64);

impl PackSize {
    /// Create a pack size, returning `None` for zero.
    pub const fn new(size: u64) -> Option<Self> {
        match NonZeroU64::new(size) {
            Some(size) => Some(Self(size)),
            None => None,
        }
    }

    /// Number of items in the pack.
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl TryFrom<i64> for PackSize {
    type Error = PackSizesError;

    fn try_from(size: i64) -> Result<Self, Self::Error> {
        u64::try_from(size)
            .ok()
            .and_then(PackSize::new)
            .ok_or(PackSizesError::InvalidPackSize { size })
    }
}

impl From<PackSize> for u64 {
    fn from(size: PackSize) -> Self {
        size.get()
    }
}

impl Display for PackSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

/// Pack Sizes
///
/// A deduplicated set of pack sizes, always held largest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackSizes {
    sizes: SmallVec<[PackSize; 8]>,
}

impl PackSizes {
    /// Create an empty set of pack sizes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build pack sizes from raw values, silently dropping duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`PackSizesError::InvalidPackSize`] for the first zero or negative size.
    pub fn from_sizes(sizes: impl IntoIterator<Item = i64>) -> Result<Self, PackSizesError> {
        sizes
            .into_iter()
            .map(PackSize::try_from)
            .collect::<Result<Self, _>>()
    }

    /// Build pack sizes from raw values, rejecting duplicates.
    ///
    /// This is the validation applied before a set of sizes is stored.
    ///
    /// # Errors
    ///
    /// Returns [`PackSizesError::InvalidPackSize`] for a zero or negative size and
    /// [`PackSizesError::DuplicatePackSize`] when a size is repeated.
    pub fn try_from_unique(sizes: &[i64]) -> Result<Self, PackSizesError> {
        let mut seen = FxHashSet::default();

        for &raw in sizes {
            let size = PackSize::try_from(raw)?;

            if !seen.insert(size) {
                return Err(PackSizesError::DuplicatePackSize { size: size.get() });
            }
        }

        Ok(seen.into_iter().collect())
    }

    /// The largest pack size, if any.
    pub fn largest(&self) -> Option<PackSize> {
        self.sizes.first().copied()
    }

    /// Iterate over the pack sizes, largest first.
    pub fn iter(&self) -> impl Iterator<Item = PackSize> + '_ {
        self.sizes.iter().copied()
    }

    /// Number of distinct pack sizes.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Whether there are no pack sizes.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

impl FromIterator<PackSize> for PackSizes {
    fn from_iter<I: IntoIterator<Item = PackSize>>(iter: I) -> Self {
        let mut sizes: SmallVec<[PackSize; 8]> = iter.into_iter().collect();

        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes.dedup();

        Self { sizes }
    }
}

impl<'a> IntoIterator for &'a PackSizes {
    type Item = PackSize;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, PackSize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.sizes.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn raw(sizes: &PackSizes) -> Vec<u64> {
        sizes.iter().map(PackSize::get).collect()
    }

    #[test]
    fn pack_size_rejects_zero_and_negative() {
        assert_eq!(
            PackSize::try_from(0),
            Err(PackSizesError::InvalidPackSize { size: 0 })
        );
        assert_eq!(
            PackSize::try_from(-100),
            Err(PackSizesError::InvalidPackSize { size: -100 })
        );
    }

    #[test]
    fn pack_size_accepts_positive() -> TestResult {
        let size = PackSize::try_from(500)?;

        assert_eq!(size.get(), 500);
        assert_eq!(size.to_string(), "500");

        Ok(())
    }

    #[test]
    fn from_sizes_sorts_descending_and_deduplicates() -> TestResult {
        let sizes = PackSizes::from_sizes([250, 5000, 500, 250, 1000])?;

        assert_eq!(raw(&sizes), vec![5000, 1000, 500, 250]);
        assert_eq!(sizes.largest().map(PackSize::get), Some(5000));

        Ok(())
    }

    #[test]
    fn from_sizes_rejects_non_positive() {
        let result = PackSizes::from_sizes([100, -50, 200]);

        assert_eq!(result, Err(PackSizesError::InvalidPackSize { size: -50 }));
    }

    #[test]
    fn try_from_unique_rejects_duplicates() {
        let result = PackSizes::try_from_unique(&[100, 200, 100]);

        assert_eq!(result, Err(PackSizesError::DuplicatePackSize { size: 100 }));
    }

    #[test]
    fn try_from_unique_accepts_distinct_sizes() -> TestResult {
        let sizes = PackSizes::try_from_unique(&[23, 53, 31])?;

        assert_eq!(raw(&sizes), vec![53, 31, 23]);

        Ok(())
    }

    #[test]
    fn try_from_unique_allows_empty() -> TestResult {
        let sizes = PackSizes::try_from_unique(&[])?;

        assert!(sizes.is_empty());
        assert_eq!(sizes.largest(), None);

        Ok(())
    }
}
