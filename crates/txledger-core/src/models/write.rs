use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;

use super::TransactionType;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("transaction amount must be at least 0.01")]
    AmountTooSmall,
    #[error("transaction description is required")]
    BlankDescription,
    #[error("transaction category is required")]
    BlankCategory,
}

/// Caller-supplied transaction fields, used for both create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub description: Arc<str>,
    pub category: Arc<str>,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<OffsetDateTime>,
}

impl NewTransaction {
    pub fn new(amount: Decimal, kind: TransactionType, description: &str, category: &str) -> Self {
        Self {
            amount,
            kind,
            description: Arc::from(description),
            category: Arc::from(category),
            timestamp: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: OffsetDateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn min_amount() -> Decimal {
        Decimal::new(1, 2)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.amount < Self::min_amount() {
            return Err(ValidationError::AmountTooSmall);
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::BlankDescription);
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::BlankCategory);
        }
        Ok(())
    }
}
