// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Immutable catalog snapshots with explicit reload.
//!
//! Readers take an `Arc` to the current snapshot and keep using it for the
//! whole request, even if a reload swaps in a newer one meanwhile.

use arc_swap::ArcSwap;
use import_cost_domain::CatalogIndex;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{error, info};

use crate::error::CatalogError;
use crate::source::{CatalogSource, CsvTextSource};

/// One consistent view of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSnapshot {
    version: u64,
    index: CatalogIndex,
}

impl CatalogSnapshot {
    /// Returns the snapshot version. The first load is version 1.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Returns the catalog index.
    #[must_use]
    pub const fn index(&self) -> &CatalogIndex {
        &self.index
    }
}

/// Holds the current catalog snapshot and the source it is reloaded from.
///
/// Reads never block. Reloads are serialized so snapshot versions follow the
/// order in which the source was read.
pub struct CatalogStore {
    source: Box<dyn CatalogSource>,
    current: ArcSwap<CatalogSnapshot>,
    reload_lock: Mutex<()>,
}

impl CatalogStore {
    /// Loads the initial snapshot from `source`.
    ///
    /// # Errors
    ///
    /// Returns an error if the first load fails.
    pub fn open(source: Box<dyn CatalogSource>) -> Result<Self, CatalogError> {
        let index: CatalogIndex = source.load()?;
        info!(
            source = %source.describe(),
            records = index.len(),
            "Loaded catalog"
        );

        Ok(Self {
            source,
            current: ArcSwap::from_pointee(CatalogSnapshot { version: 1, index }),
            reload_lock: Mutex::new(()),
        })
    }

    /// Opens a store over in-memory CSV content.
    ///
    /// # Errors
    ///
    /// Returns an error if the content cannot be parsed.
    pub fn new_in_memory(csv: &str) -> Result<Self, CatalogError> {
        Self::open(Box::new(CsvTextSource::new(csv)))
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<CatalogSnapshot> {
        self.current.load_full()
    }

    /// Re-reads the source and swaps in a new snapshot.
    ///
    /// On failure the previous snapshot stays in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or parsed.
    pub fn reload(&self) -> Result<Arc<CatalogSnapshot>, CatalogError> {
        // The guard protects no data, so a poisoned lock is still usable.
        let guard: MutexGuard<'_, ()> = self
            .reload_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let index: CatalogIndex = self.source.load().map_err(|e| {
            error!(
                source = %self.source.describe(),
                error = %e,
                "Catalog reload failed, keeping previous snapshot"
            );
            e
        })?;

        let version: u64 = self.current.load().version + 1;
        let snapshot: Arc<CatalogSnapshot> = Arc::new(CatalogSnapshot { version, index });
        self.current.store(Arc::clone(&snapshot));
        drop(guard);

        info!(
            source = %self.source.describe(),
            version,
            records = snapshot.index().len(),
            "Reloaded catalog"
        );
        Ok(snapshot)
    }

    /// Describes the underlying source.
    #[must_use]
    pub fn describe(&self) -> String {
        self.source.describe()
    }
}

impl std::fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogStore")
            .field("source", &self.source.describe())
            .field("version", &self.current.load().version)
            .finish_non_exhaustive()
    }
}
