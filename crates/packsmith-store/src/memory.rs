//! Process-local pack-size store.

use parking_lot::RwLock;

use crate::error::Result;
use crate::set::SizeSet;
use crate::PackSizeStore;

/// Pack sizes held in memory and lost on restart.
///
/// # Example
///
/// ```
/// use packsmith_store::{MemoryStore, PackSizeStore};
///
/// let store = MemoryStore::new(8);
/// store.add(500).unwrap();
/// store.add(250).unwrap();
/// assert_eq!(store.sizes().unwrap(), vec![500, 250]);
/// ```
#[derive(Debug)]
pub struct MemoryStore {
    inner: RwLock<SizeSet>,
}

impl MemoryStore {
    /// Creates an empty store holding at most `max_sizes` sizes.
    pub fn new(max_sizes: usize) -> Self {
        Self {
            inner: RwLock::new(SizeSet::new(max_sizes)),
        }
    }

    /// Creates a store pre-filled with `sizes`, failing with
    /// [`StoreError::Capacity`](crate::StoreError::Capacity) if more than
    /// `max_sizes` distinct sizes are given.
    pub fn with_sizes(sizes: impl IntoIterator<Item = u64>, max_sizes: usize) -> Result<Self> {
        let mut set = SizeSet::new(max_sizes);
        for size in sizes {
            set.insert(size)?;
        }
        Ok(Self {
            inner: RwLock::new(set),
        })
    }
}

impl PackSizeStore for MemoryStore {
    fn sizes(&self) -> Result<Vec<u64>> {
        Ok(self.inner.read().descending())
    }

    fn add(&self, size: u64) -> Result<bool> {
        self.inner.write().insert(size)
    }

    fn remove(&self, size: u64) -> Result<()> {
        self.inner.write().remove(size)
    }

    fn len(&self) -> usize {
        self.inner.read().len()
    }

    fn seed(&self, defaults: &[u64]) -> Result<bool> {
        self.inner.write().seed(defaults)
    }
}
