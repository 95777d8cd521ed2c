use std::cmp::Reverse;

use crossbeam_skiplist::SkipMap;
use time::OffsetDateTime;

use txledger_core::{NewTransaction, PageRequest, Transaction, TransactionId, TransactionRepository};

use crate::sequence::{IdGenerator, DEFAULT_ID_BASE};

/// Transaction store backed by a lock-free skip list.
///
/// Keys are wrapped in [`Reverse`] so forward iteration yields the newest
/// transaction first. Point operations are atomic on their own; iteration
/// is weakly consistent and never blocks writers.
pub struct SkipListStorage {
    transactions: SkipMap<Reverse<TransactionId>, Transaction>,
    ids: IdGenerator,
}

impl Default for SkipListStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl SkipListStorage {
    pub fn new() -> Self {
        Self::with_id_base(DEFAULT_ID_BASE)
    }

    pub fn with_id_base(base: TransactionId) -> Self {
        Self {
            transactions: SkipMap::new(),
            ids: IdGenerator::new(base),
        }
    }
}

impl TransactionRepository for SkipListStorage {
    fn save(&self, id: Option<TransactionId>, transaction: NewTransaction) -> Transaction {
        let id = id.unwrap_or_else(|| self.ids.next());
        let stored = Transaction {
            id,
            amount: transaction.amount,
            kind: transaction.kind,
            description: transaction.description,
            category: transaction.category,
            timestamp: transaction.timestamp.unwrap_or_else(OffsetDateTime::now_utc),
        };

        self.transactions.insert(Reverse(id), stored.clone());
        tracing::debug!(id, "Transaction stored");
        stored
    }

    fn find(&self, id: TransactionId) -> Option<Transaction> {
        self.transactions
            .get(&Reverse(id))
            .map(|entry| entry.value().clone())
    }

    fn page(&self, request: PageRequest) -> Vec<Transaction> {
        self.transactions
            .iter()
            .skip(request.offset())
            .take(request.size())
            .map(|entry| entry.value().clone())
            .collect()
    }

    fn count(&self) -> usize {
        self.transactions.len()
    }

    fn delete_by_id(&self, id: TransactionId) {
        if self.transactions.remove(&Reverse(id)).is_some() {
            tracing::debug!(id, "Transaction removed");
        }
    }

    fn clear(&self) {
        self.transactions.clear();
        self.ids.reset();
        tracing::debug!(base = self.ids.base(), "Storage cleared");
    }
}
