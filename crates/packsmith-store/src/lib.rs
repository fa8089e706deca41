//! Packsmith Store
//!
//! Persistence for the set of configured pack sizes:
//! - [`PackSizeStore`] - The storage seam used by the service
//! - [`MemoryStore`] - Process-local backend
//! - [`FileStore`] - JSON file backend, written through on every change
//! - [`open_store`] - Builds the backend named in [`StoreConfig`]
//!
//! Every backend keeps a bounded set: zero sizes are rejected, inserts
//! past `max_pack_sizes` fail with [`StoreError::Capacity`].

mod error;
mod file;
mod memory;
mod set;

use std::sync::Arc;

use packsmith_config::{StoreBackend, StoreConfig};
use packsmith_core::{PackError, PackSizes};
use tracing::info;

pub use error::{Result, StoreError};
pub use file::FileStore;
pub use memory::MemoryStore;

/// A set of pack sizes shared across request handlers.
pub trait PackSizeStore: Send + Sync {
    /// Returns every configured size, largest first.
    fn sizes(&self) -> Result<Vec<u64>>;

    /// Adds a size, returning false if it was already present.
    fn add(&self, size: u64) -> Result<bool>;

    /// Removes a size, failing with [`StoreError::NotFound`] if absent.
    fn remove(&self, size: u64) -> Result<()>;

    /// Returns the number of configured sizes.
    fn len(&self) -> usize;

    /// Returns true if no sizes are configured.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts `defaults` only if the store is empty. Returns whether
    /// anything was seeded.
    fn seed(&self, defaults: &[u64]) -> Result<bool>;

    /// Returns the sizes as solver input, or `None` when empty.
    fn pack_sizes(&self) -> Result<Option<PackSizes>> {
        match PackSizes::new(self.sizes()?) {
            Ok(sizes) => Ok(Some(sizes)),
            Err(PackError::EmptyPackSizes) => Ok(None),
            // Stores never hold a zero size.
            Err(_) => Err(StoreError::InvalidSize),
        }
    }
}

/// Opens the backend described by `config`.
pub fn open_store(config: &StoreConfig) -> Result<Arc<dyn PackSizeStore>> {
    let store: Arc<dyn PackSizeStore> = match config.backend {
        StoreBackend::Memory => Arc::new(MemoryStore::new(config.max_pack_sizes)),
        StoreBackend::File => Arc::new(FileStore::open(&config.path, config.max_pack_sizes)?),
    };
    info!(
        event = "store_ready",
        backend = %config.backend,
        sizes = store.len() as u64,
    );
    Ok(store)
}

/// Opens the configured store and seeds the default sizes if it is empty
/// and seeding is enabled.
pub fn open_seeded(config: &StoreConfig) -> Result<Arc<dyn PackSizeStore>> {
    let store = open_store(config)?;
    if config.seed_defaults && store.seed(&config.default_pack_sizes)? {
        info!(
            event = "store_seeded",
            sizes = ?config.default_pack_sizes,
        );
    }
    Ok(store)
}

#[cfg(test)]
mod tests;
