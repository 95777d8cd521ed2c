use thiserror::Error;

use crate::{models::write::ValidationError, storage::TransactionId};

/// Failures surfaced by the transaction service.
///
/// All variants are deterministic and local; retrying the same call
/// against the same state yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionError {
    #[error("transaction not found: {0}")]
    NotFound(TransactionId),
    #[error("invalid pagination: page={page}, size={size}")]
    InvalidPagination { page: i64, size: i64 },
    #[error("invalid transaction: {0}")]
    Validation(#[from] ValidationError),
}
