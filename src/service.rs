use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::{
    cache::ReadCache,
    storage::{
        NewTransaction, PageRequest, Transaction, TransactionError, TransactionId,
        TransactionRepository,
    },
};

/// Entry point for every transaction operation.
///
/// Reads and listings run without coordination. Updates, deletes and resets
/// check existence before acting, so they run one at a time under
/// `mutation_guard`. Creates share `reset_gate` with each other and only
/// exclude a reset.
pub struct TransactionService {
    repository: Arc<dyn TransactionRepository>,
    cache: ReadCache,
    mutation_guard: Mutex<()>,
    // A create draws its id and inserts in two steps; a reset between them
    // would leave a record above the rewound sequence.
    reset_gate: RwLock<()>,
}

impl TransactionService {
    pub fn new(repository: Arc<dyn TransactionRepository>) -> Self {
        Self {
            cache: ReadCache::new(repository.clone()),
            repository,
            mutation_guard: Mutex::new(()),
            reset_gate: RwLock::new(()),
        }
    }

    pub fn create(&self, transaction: NewTransaction) -> Result<Transaction, TransactionError> {
        transaction.validate()?;

        let created = {
            let _gate = self.reset_gate.read();
            let created = self.repository.save(None, transaction);
            // a lookup of this id may have cached a miss before it was issued
            self.cache.invalidate(created.id);
            created
        };

        metrics::increment_counter!("txledger_operations_total", "op" => "create");
        self.record_size();
        tracing::debug!(id = created.id, kind = %created.kind, "Transaction created");
        Ok(created)
    }

    pub fn read(&self, id: TransactionId) -> Option<Transaction> {
        metrics::increment_counter!("txledger_operations_total", "op" => "read");
        self.cache.get(id)
    }

    pub fn list(&self, page: i64, size: i64) -> Result<Vec<Transaction>, TransactionError> {
        let request = PageRequest::new(page, size)?;
        metrics::increment_counter!("txledger_operations_total", "op" => "list");
        Ok(self.repository.page(request))
    }

    pub fn update(&self, id: TransactionId, transaction: NewTransaction) -> Result<Transaction, TransactionError> {
        transaction.validate()?;

        let _guard = self.mutation_guard.lock();
        if self.repository.find(id).is_none() {
            return Err(self.not_found("update", id));
        }
        let updated = self.repository.save(Some(id), transaction);
        self.cache.invalidate(id);

        metrics::increment_counter!("txledger_operations_total", "op" => "update");
        tracing::debug!(id, "Transaction updated");
        Ok(updated)
    }

    pub fn delete(&self, id: TransactionId) -> Result<(), TransactionError> {
        let _guard = self.mutation_guard.lock();
        if self.repository.find(id).is_none() {
            return Err(self.not_found("delete", id));
        }
        self.repository.delete_by_id(id);
        self.cache.invalidate(id);

        metrics::increment_counter!("txledger_operations_total", "op" => "delete");
        self.record_size();
        tracing::debug!(id, "Transaction deleted");
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.repository.count()
    }

    /// Empties the store, rewinds the id sequence and drops all cached reads.
    ///
    /// Serialized with updates, deletes and creates: a create in flight
    /// finishes first and is then removed, a later create starts the new
    /// sequence.
    pub fn reset(&self) {
        let _guard = self.mutation_guard.lock();
        let _gate = self.reset_gate.write();
        self.repository.clear();
        self.cache.clear();

        self.record_size();
        tracing::info!("Transaction store reset");
    }

    fn not_found(&self, op: &'static str, id: TransactionId) -> TransactionError {
        metrics::increment_counter!("txledger_not_found_total", "op" => op);
        tracing::warn!(id, op, "Transaction not found");
        TransactionError::NotFound(id)
    }

    fn record_size(&self) {
        metrics::gauge!("txledger_transactions", self.repository.count() as f64);
    }
}
