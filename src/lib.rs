//! Concurrent in-memory transaction ledger.
//!
//! [`service::TransactionService`] is the only entry point; the HTTP layer in
//! [`api`] is a thin adapter over it.

pub mod api;
pub mod cache;
pub mod config;
pub mod service;
pub mod storage;
