use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for the ledger core and its persistence layer.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Account not found: {0}")]
    AccountNotFound(String),
    #[error("Category not found: {0}")]
    CategoryNotFound(String),
    #[error("Account already exists: {0}")]
    DuplicateAccount(String),
    #[error("Category already exists: {0}")]
    DuplicateCategory(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Insufficient balance on `{account}`: {balance:.2} available, {requested:.2} requested")]
    InsufficientBalance {
        account: String,
        balance: f64,
        requested: f64,
    },
    #[error("Store is locked: {0}")]
    StoreLocked(String),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, TrackerError>;

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        TrackerError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::Storage(err.to_string())
    }
}
