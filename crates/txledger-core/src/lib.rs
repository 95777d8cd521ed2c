//! Core types and traits for txledger storage backends.
//!
//! This crate provides the `TransactionRepository` trait, the transaction
//! models and the error taxonomy shared by the service and every backend.

pub mod error;
pub mod models;
pub mod pagination;
pub mod storage;

// Re-export key types at crate root for convenience
pub use error::TransactionError;
pub use models::{TransactionType, ParseTransactionTypeError};
pub use models::read::Transaction;
pub use models::write::{NewTransaction, ValidationError};
pub use pagination::{PageRequest, MAX_PAGE_SIZE};
pub use storage::{TransactionRepository, TransactionId};
