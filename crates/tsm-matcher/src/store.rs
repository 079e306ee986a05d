//! Ownership and maintenance of the live catalog snapshot.
//!
//! The store holds the current [`TypeCatalog`] behind an `Arc`. Readers take
//! a snapshot and score against it without holding any lock; writers replace
//! one file at a time through copy-on-write, so a reader sees either the old
//! or the new declarations of a file, never a mix.
//!
//! Re-extraction is driven by a [`DeclarationSource`]:
//! - only one scan runs at a time; refresh requests arriving meanwhile are
//!   folded into the running scan and return [`RefreshOutcome::Coalesced`],
//! - [`CatalogStore::snapshot`] waits for a running scan to finish,
//! - a file that fails to extract is evicted and the scan carries on.

use crate::catalog::TypeCatalog;
use crate::types::DeclaredType;
use indexmap::IndexSet;
use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use tracing::{debug, warn};

/// Produces the declared types of one file.
///
/// Implemented by the declaration extractor. Errors are per file: the store
/// logs them, drops the file's cached declarations and moves on.
pub trait DeclarationSource: Sync {
    fn declared_types(&self, file_path: &str) -> anyhow::Result<Vec<DeclaredType>>;
}

/// What a [`CatalogStore::refresh`] call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// This call ran the scan to completion.
    Completed(RefreshStats),
    /// Another scan was running; the paths were handed over to it.
    Coalesced,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshStats {
    /// Files whose declarations were replaced.
    pub updated: usize,
    /// Files evicted because extraction failed.
    pub failed: usize,
}

struct StoreState {
    catalog: Arc<TypeCatalog>,
    scanning: bool,
    pending: IndexSet<String>,
    generation: u64,
}

/// Shared owner of the live catalog.
pub struct CatalogStore {
    state: Mutex<StoreState>,
    settled: Condvar,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::with_catalog(TypeCatalog::new())
    }

    pub fn with_catalog(catalog: TypeCatalog) -> Self {
        Self {
            state: Mutex::new(StoreState {
                catalog: Arc::new(catalog),
                scanning: false,
                pending: IndexSet::new(),
                generation: 0,
            }),
            settled: Condvar::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        // A panic while holding the lock cannot leave a half-applied file:
        // updates are a single pointer swap.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// The latest catalog, without waiting for a running scan.
    pub fn current(&self) -> Arc<TypeCatalog> {
        Arc::clone(&self.lock().catalog)
    }

    /// The catalog once no scan is running.
    pub fn snapshot(&self) -> Arc<TypeCatalog> {
        let mut state = self.lock();
        while state.scanning {
            state = self
                .settled
                .wait(state)
                .unwrap_or_else(|poisoned| poisoned.into_inner());
        }
        Arc::clone(&state.catalog)
    }

    /// Number of file updates applied so far.
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    /// Returns `true` while a scan is running.
    pub fn is_scanning(&self) -> bool {
        self.lock().scanning
    }

    /// Replace the declarations of one file.
    pub fn replace_file(&self, file_path: &str, types: Vec<DeclaredType>) {
        let mut state = self.lock();
        Arc::make_mut(&mut state.catalog).replace_file(file_path, types);
        state.generation += 1;
    }

    /// Evict a deleted file. Returns `true` if it was cataloged.
    pub fn remove_file(&self, file_path: &str) -> bool {
        let mut state = self.lock();
        let removed = Arc::make_mut(&mut state.catalog).remove_file(file_path);
        if removed {
            state.generation += 1;
        }
        removed
    }

    /// Re-extract `paths` through `source`.
    ///
    /// If a scan is already running the paths are queued for it and this
    /// returns immediately. Otherwise this call runs the scan, draining
    /// paths queued by concurrent callers until none remain.
    pub fn refresh<I, P>(&self, source: &dyn DeclarationSource, paths: I) -> RefreshOutcome
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        {
            let mut state = self.lock();
            state.pending.extend(paths.into_iter().map(Into::into));
            if state.scanning {
                debug!(pending = state.pending.len(), "catalog scan in flight, coalescing");
                return RefreshOutcome::Coalesced;
            }
            state.scanning = true;
        }

        let mut scan = ScanGuard {
            store: self,
            armed: true,
        };
        let mut stats = RefreshStats::default();
        loop {
            let batch: Vec<String> = {
                let mut state = self.lock();
                if state.pending.is_empty() {
                    // Must happen under the lock that saw the queue empty, or a
                    // coalesced request could be stranded.
                    state.scanning = false;
                    scan.armed = false;
                    self.settled.notify_all();
                    break;
                }
                state.pending.drain(..).collect()
            };

            for path in batch {
                // Extraction runs without the lock so readers are never blocked on I/O.
                let result = source.declared_types(&path);
                let mut state = self.lock();
                match result {
                    Ok(types) => {
                        Arc::make_mut(&mut state.catalog).replace_file(path.as_str(), types);
                        stats.updated += 1;
                    }
                    Err(err) => {
                        warn!(file = %path, error = %err, "failed to extract declared types");
                        Arc::make_mut(&mut state.catalog).remove_file(&path);
                        stats.failed += 1;
                    }
                }
                state.generation += 1;
            }
        }

        debug!(
            updated = stats.updated,
            failed = stats.failed,
            "catalog scan finished"
        );
        RefreshOutcome::Completed(stats)
    }
}

/// Ends the scan if extraction panics, so waiting readers are released.
struct ScanGuard<'s> {
    store: &'s CatalogStore,
    armed: bool,
}

impl Drop for ScanGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            let mut state = self.store.lock();
            state.scanning = false;
            state.pending.clear();
            self.store.settled.notify_all();
        }
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../tests/store_tests.rs"]
mod store_tests;
