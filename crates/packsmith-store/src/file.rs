//! JSON-file pack-size store.
//!
//! The file holds `{"sizes": [...]}`, largest first. Every mutation is
//! written through before it becomes visible to readers; the write lock is
//! held across the file write so disk and memory never disagree.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::set::SizeSet;
use crate::PackSizeStore;

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    sizes: Vec<u64>,
}

/// Pack sizes persisted to a JSON file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    inner: RwLock<SizeSet>,
}

impl FileStore {
    /// Opens the store at `path`. A missing file is an empty store and is
    /// created on the first write.
    pub fn open(path: impl Into<PathBuf>, max_sizes: usize) -> Result<Self> {
        let path = path.into();
        let set = match fs::read_to_string(&path) {
            Ok(text) => {
                let file: StoreFile = serde_json::from_str(&text)?;
                SizeSet::from_sizes(file.sizes, max_sizes)?
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => SizeSet::new(max_sizes),
            Err(e) => return Err(e.into()),
        };

        info!(
            event = "store_open",
            path = %path.display(),
            sizes = set.len() as u64,
        );
        Ok(Self {
            path,
            inner: RwLock::new(set),
        })
    }

    /// Writes `set` to a sibling temp file and renames it into place.
    fn persist(&self, set: &SizeSet) -> Result<()> {
        let file = StoreFile {
            sizes: set.descending(),
        };
        let json = serde_json::to_vec_pretty(&file)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        {
            let mut out = fs::File::create(&tmp)?;
            out.write_all(&json)?;
            out.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;

        debug!(event = "store_write", path = %self.path.display(), sizes = set.len() as u64);
        Ok(())
    }

    /// Applies `change` to a copy of the set and commits it once written.
    fn update<T>(&self, change: impl FnOnce(&mut SizeSet) -> Result<T>) -> Result<T> {
        let mut guard = self.inner.write();
        let mut next = guard.clone();
        let out = change(&mut next)?;
        if next != *guard {
            self.persist(&next)?;
            *guard = next;
        }
        Ok(out)
    }
}

impl PackSizeStore for FileStore {
    fn sizes(&self) -> Result<Vec<u64>> {
        Ok(self.inner.read().descending())
    }

    fn add(&self, size: u64) -> Result<bool> {
        self.update(|set| set.insert(size))
    }

    fn remove(&self, size: u64) -> Result<()> {
        self.update(|set| set.remove(size))
    }

    fn len(&self) -> usize {
        self.inner.read().len()
    }

    fn seed(&self, defaults: &[u64]) -> Result<bool> {
        self.update(|set| set.seed(defaults))
    }
}
