//! The bounded size set shared by every backend.

use std::collections::BTreeSet;

use crate::error::{Result, StoreError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SizeSet {
    sizes: BTreeSet<u64>,
    max: usize,
}

impl SizeSet {
    pub(crate) fn new(max: usize) -> Self {
        Self {
            sizes: BTreeSet::new(),
            max,
        }
    }

    /// Builds a set from stored sizes. Capacity is only checked on insert,
    /// so a file written under a larger limit still loads.
    pub(crate) fn from_sizes(sizes: impl IntoIterator<Item = u64>, max: usize) -> Result<Self> {
        let sizes = sizes
            .into_iter()
            .map(|size| if size == 0 { Err(StoreError::InvalidSize) } else { Ok(size) })
            .collect::<Result<BTreeSet<_>>>()?;
        Ok(Self { sizes, max })
    }

    pub(crate) fn insert(&mut self, size: u64) -> Result<bool> {
        if size == 0 {
            return Err(StoreError::InvalidSize);
        }
        if self.sizes.contains(&size) {
            return Ok(false);
        }
        if self.sizes.len() >= self.max {
            return Err(StoreError::Capacity { max: self.max });
        }
        Ok(self.sizes.insert(size))
    }

    pub(crate) fn remove(&mut self, size: u64) -> Result<()> {
        if self.sizes.remove(&size) {
            Ok(())
        } else {
            Err(StoreError::NotFound(size))
        }
    }

    /// Sizes, largest first.
    pub(crate) fn descending(&self) -> Vec<u64> {
        self.sizes.iter().rev().copied().collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.sizes.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Inserts `defaults` into an empty set, all or nothing.
    pub(crate) fn seed(&mut self, defaults: &[u64]) -> Result<bool> {
        if !self.is_empty() {
            return Ok(false);
        }
        let mut seeded = self.clone();
        for &size in defaults {
            seeded.insert(size)?;
        }
        *self = seeded;
        Ok(!self.is_empty())
    }
}
