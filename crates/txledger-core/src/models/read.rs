use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::TransactionType;
use crate::storage::TransactionId;

/// A stored transaction. `id` and `timestamp` are always assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub description: Arc<str>,
    pub category: Arc<str>,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}
