use crate::{
    models::{read::Transaction, write::NewTransaction},
    pagination::PageRequest,
};

pub type TransactionId = u64;

/// Ordered, concurrently accessible transaction storage.
///
/// Every method takes `&self`: implementations must make `save`, `find`
/// and `delete_by_id` individually atomic without any lock held by the
/// caller.
pub trait TransactionRepository: Send + Sync {
    /// Inserts or overwrites a transaction. A missing `id` is drawn from the
    /// backend's id sequence, a missing timestamp is set to the current time.
    fn save(&self, id: Option<TransactionId>, transaction: NewTransaction) -> Transaction;
    fn find(&self, id: TransactionId) -> Option<Transaction>;
    /// Returns one page of transactions, newest (highest id) first.
    fn page(&self, request: PageRequest) -> Vec<Transaction>;
    fn count(&self) -> usize;
    /// Removes the transaction if present. Absent ids are ignored.
    fn delete_by_id(&self, id: TransactionId);
    /// Removes every transaction and rewinds the id sequence.
    fn clear(&self);
}
