use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use dashmap::{mapref::entry::Entry, DashMap};

use crate::storage::{Transaction, TransactionId, TransactionRepository};

/// Read-through cache in front of [`TransactionRepository::find`].
///
/// Misses are cached too, so a lookup of an unknown id hits the store once.
/// Entries only leave through [`ReadCache::invalidate`] or [`ReadCache::clear`];
/// every write to the store must be followed by one of them before the write
/// is reported as complete.
pub struct ReadCache {
    repository: Arc<dyn TransactionRepository>,
    entries: DashMap<TransactionId, Slot>,
    // Bumped by `clear`, which also forgets every per-id stamp.
    epoch: AtomicU64,
}

/// Per-id cache state. `stamp` advances on every invalidation of the id and
/// outlives the cached value, so a miss can tell whether it was overtaken.
#[derive(Default)]
struct Slot {
    stamp: u64,
    cached: Option<Option<Transaction>>,
}

impl ReadCache {
    pub fn new(repository: Arc<dyn TransactionRepository>) -> Self {
        Self {
            repository,
            entries: DashMap::new(),
            epoch: AtomicU64::new(0),
        }
    }

    pub fn get(&self, id: TransactionId) -> Option<Transaction> {
        let epoch = self.epoch.load(Ordering::SeqCst);
        let stamp = match self.entries.get(&id) {
            Some(slot) => match &slot.cached {
                Some(hit) => return hit.clone(),
                None => slot.stamp,
            },
            None => 0,
        };

        let loaded = self.repository.find(id);

        // Populate only if `id` was not invalidated (and the cache not
        // cleared) since the stamp was read. The entry lock orders this
        // against `invalidate` for the same id.
        let unchanged = |current: u64| current == stamp && self.epoch.load(Ordering::SeqCst) == epoch;
        match self.entries.entry(id) {
            Entry::Occupied(mut slot) => {
                let slot = slot.get_mut();
                if slot.cached.is_none() && unchanged(slot.stamp) {
                    slot.cached = Some(loaded.clone());
                }
            }
            Entry::Vacant(slot) => {
                if unchanged(0) {
                    slot.insert(Slot {
                        stamp: 0,
                        cached: Some(loaded.clone()),
                    });
                }
            }
        }

        loaded
    }

    pub fn invalidate(&self, id: TransactionId) {
        let mut slot = self.entries.entry(id).or_default();
        slot.stamp = slot.stamp.wrapping_add(1);
        slot.cached = None;
    }

    pub fn clear(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        self.entries.clear();
    }

    pub fn contains(&self, id: TransactionId) -> bool {
        self.entries
            .get(&id)
            .map_or(false, |slot| slot.cached.is_some())
    }

    pub fn len(&self) -> usize {
        self.entries
            .iter()
            .filter(|slot| slot.cached.is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
