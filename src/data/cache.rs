//! Load-once cache of parsed datasets
//!
//! Each source id owns a cell that is filled by the first successful load.
//! Concurrent callers for the same id block on that cell, so a loader runs
//! at most once at a time per id. A failed load leaves the cell empty and the
//! next call retries.

use crate::types::Dataset;
use once_cell::sync::{Lazy, OnceCell};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

type Slot = Arc<OnceCell<Arc<Dataset>>>;

static GLOBAL_CACHE: Lazy<DatasetCache> = Lazy::new(DatasetCache::new);

/// Datasets keyed by source id (a file path or URL)
#[derive(Default)]
pub struct DatasetCache {
    slots: Mutex<HashMap<String, Slot>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache
    pub fn global() -> &'static DatasetCache {
        &GLOBAL_CACHE
    }

    /// Return the cached dataset for `source_id`, running `loader` on a miss
    ///
    /// Only successful loads are stored.
    pub fn get_or_load<F, E>(&self, source_id: &str, loader: F) -> Result<Arc<Dataset>, E>
    where
        F: FnOnce() -> Result<Dataset, E>,
    {
        // The map lock is held only long enough to find the slot; the load
        // itself runs under the slot's own lock.
        let slot = self.slots.lock().entry(source_id.to_string()).or_default().clone();

        let result = slot.get_or_try_init(|| {
            let start = std::time::Instant::now();
            let dataset = loader()?;
            tracing::debug!(
                source_id,
                rows = dataset.row_count(),
                columns = dataset.column_count(),
                elapsed = ?start.elapsed(),
                "Loaded dataset"
            );
            Ok(Arc::new(dataset))
        });

        match result {
            Ok(dataset) => Ok(Arc::clone(dataset)),
            Err(err) => {
                self.forget_empty(source_id, &slot);
                Err(err)
            }
        }
    }

    /// Drop the slot for `source_id` if it is still `slot`, still empty and
    /// held only by the map and the caller
    ///
    /// Waiters on the same slot retry the load themselves, so the slot must
    /// stay while any of them hold it. Clones are only taken under the map
    /// lock, which makes the count stable here.
    fn forget_empty(&self, source_id: &str, slot: &Slot) {
        let mut slots = self.slots.lock();
        let stale = slots.get(source_id).is_some_and(|current| {
            Arc::ptr_eq(current, slot) && current.get().is_none() && Arc::strong_count(slot) == 2
        });
        if stale {
            slots.remove(source_id);
        }
    }

    /// Number of source ids with a slot, loaded or loading
    #[cfg(test)]
    fn slot_count(&self) -> usize {
        self.slots.lock().len()
    }

    /// Whether a dataset is stored for `source_id`
    pub fn contains(&self, source_id: &str) -> bool {
        self.slots
            .lock()
            .get(source_id)
            .is_some_and(|slot| slot.get().is_some())
    }

    /// Number of stored datasets
    pub fn len(&self) -> usize {
        self.slots.lock().values().filter(|slot| slot.get().is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
