use std::fmt;
use std::result::Result as StdResult;

use thiserror::Error;
use uuid::Uuid;

/// Request field that failed validation, reported in declaration order so
/// callers can highlight the offending input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Category,
    TargetAmount,
    TargetDate,
    Amount,
    PhoneNumber,
    Account,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Name => "name",
            Field::Category => "category",
            Field::TargetAmount => "target amount",
            Field::TargetDate => "target date",
            Field::Amount => "amount",
            Field::PhoneNumber => "phone number",
            Field::Account => "account",
        };
        f.write_str(label)
    }
}

/// Unified error type for ledger, session, and storage layers.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("invalid {field}: {reason}")]
    Validation { field: Field, reason: String },
    #[error("goal not found: {0}")]
    GoalNotFound(Uuid),
    #[error("insufficient funds: balance {balance:.2}, requested {requested:.2}")]
    InsufficientFunds { balance: f64, requested: f64 },
    #[error("persistence error: {0}")]
    Storage(String),
}

impl LedgerError {
    pub fn validation(field: Field, reason: impl Into<String>) -> Self {
        LedgerError::Validation {
            field,
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Storage(err.to_string())
    }
}

pub type Result<T> = StdResult<T, LedgerError>;
