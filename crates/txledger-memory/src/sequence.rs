use std::sync::atomic::{AtomicU64, Ordering};

use txledger_core::TransactionId;

/// Counter value of a fresh generator. The first issued id is `DEFAULT_ID_BASE + 1`.
pub const DEFAULT_ID_BASE: TransactionId = 1000;

/// Lock-free, strictly increasing id source.
#[derive(Debug)]
pub struct IdGenerator {
    base: TransactionId,
    counter: AtomicU64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ID_BASE)
    }
}

impl IdGenerator {
    pub fn new(base: TransactionId) -> Self {
        Self {
            base,
            counter: AtomicU64::new(base),
        }
    }

    pub fn next(&self) -> TransactionId {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn reset(&self) {
        self.counter.store(self.base, Ordering::SeqCst);
    }

    pub fn base(&self) -> TransactionId {
        self.base
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, thread};

    use super::*;

    #[test]
    fn test_starts_after_base() {
        let ids = IdGenerator::default();
        assert_eq!(ids.next(), 1001);
        assert_eq!(ids.next(), 1002);
    }

    #[test]
    fn test_reset_rewinds_to_base() {
        let ids = IdGenerator::new(10);
        ids.next();
        ids.next();
        ids.reset();
        assert_eq!(ids.next(), 11);
    }

    #[test]
    fn test_concurrent_ids_are_unique() {
        let ids = IdGenerator::default();
        let per_thread = 1_000;
        let threads = 8;

        let issued: Vec<Vec<TransactionId>> = thread::scope(|s| {
            let handles: Vec<_> = (0..threads)
                .map(|_| s.spawn(|| (0..per_thread).map(|_| ids.next()).collect::<Vec<_>>()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let mut seen = HashSet::new();
        for batch in &issued {
            // each thread observes its own ids in increasing order
            assert!(batch.windows(2).all(|w| w[0] < w[1]));
            for id in batch {
                assert!(seen.insert(*id), "id {} issued twice", id);
            }
        }
        assert_eq!(seen.len(), threads * per_thread);
        assert_eq!(ids.next(), DEFAULT_ID_BASE + (threads * per_thread) as u64 + 1);
    }
}
