//! # Index Cache
//!
//! Owns the in-memory catalog for the process lifetime.
//!
//! ## Lifecycle
//! - Unloaded: first [`IndexCache::ensure_loaded`] tries the snapshot. A non-empty list is used as is.
//! - Missing, broken or empty snapshot: normalize the raw dataset, write a fresh snapshot.
//! - Loaded: later calls hand out the same `Arc`, no I/O.
//! - [`IndexCache::rebuild`] ignores the snapshot, builds a new catalog and swaps it in.
//!   Searches already holding the old `Arc` finish against it.
//!
//! A missing or unparsable raw dataset is logged and served as an empty catalog until the next
//! rebuild or restart.
use std::{
    path::{Path, PathBuf},
    sync::{Arc, PoisonError, RwLock},
};

use tracing::{info, warn};

use crate::{Catalog, get_raw, get_snapshot, normalize, write_snapshot};

pub struct IndexCache {
    foods_path: PathBuf,
    index_path: PathBuf,
    catalog: RwLock<Option<Arc<Catalog>>>,
}

impl IndexCache {
    pub fn new(foods_path: impl Into<PathBuf>, index_path: impl Into<PathBuf>) -> Self {
        Self {
            foods_path: foods_path.into(),
            index_path: index_path.into(),
            catalog: RwLock::new(None),
        }
    }

    pub fn foods_path(&self) -> &Path {
        &self.foods_path
    }

    pub fn index_path(&self) -> &Path {
        &self.index_path
    }

    pub fn ensure_loaded(&self) -> Arc<Catalog> {
        if let Some(catalog) = self.current() {
            return catalog;
        }

        let catalog = Arc::new(self.load());

        // another caller may have finished first, keep whichever landed
        self.catalog
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(catalog)
            .clone()
    }

    pub fn rebuild(&self) -> Arc<Catalog> {
        let catalog = Arc::new(self.build());

        *self.catalog.write().unwrap_or_else(PoisonError::into_inner) = Some(catalog.clone());

        catalog
    }

    pub fn current(&self) -> Option<Arc<Catalog>> {
        self.catalog
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn load(&self) -> Catalog {
        match get_snapshot(&self.index_path) {
            Ok(records) if !records.is_empty() => {
                info!("Loaded snapshot: {} foods", records.len());
                records
            }
            Ok(_) => {
                info!("Snapshot empty, rebuilding index");
                self.build()
            }
            Err(e) => {
                info!("Snapshot unavailable ({e}), rebuilding index");
                self.build()
            }
        }
    }

    fn build(&self) -> Catalog {
        let records = match get_raw(&self.foods_path) {
            Ok(raw) => normalize(&raw),
            Err(e) => {
                warn!("{e}, serving empty catalog");
                return Catalog::new();
            }
        };

        if let Err(e) = write_snapshot(&self.index_path, &records) {
            warn!("Failed to write snapshot {}: {e}", self.index_path.display());
        }

        info!("Index built: {} foods", records.len());
        records
    }
}
