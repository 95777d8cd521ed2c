//! Storage types used throughout the crate.

// Re-export core storage types so callers only need this crate
pub use txledger_core::{
    NewTransaction, PageRequest, Transaction, TransactionError, TransactionId,
    TransactionRepository, TransactionType, ValidationError, MAX_PAGE_SIZE,
};
pub use txledger_memory::{IdGenerator, SkipListStorage, DEFAULT_ID_BASE};
