use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of money movement against a goal's balance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

/// Immutable record of money moved into or out of a goal.
///
/// `recorded_at` captures the moment the ledger accepted the transaction and
/// is the total order history queries sort by.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoalTransaction {
    pub id: Uuid,
    pub goal_id: Uuid,
    pub kind: TransactionKind,
    pub amount: f64,
    pub reference: String,
    pub date: NaiveDate,
    pub recorded_at: DateTime<Utc>,
}

impl GoalTransaction {
    pub fn new(
        goal_id: Uuid,
        kind: TransactionKind,
        amount: f64,
        reference: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            goal_id,
            kind,
            amount,
            reference: reference.into(),
            date: now.date_naive(),
            recorded_at: now,
        }
    }
}

/// History filter applied over [`TransactionKind`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TransactionFilter {
    #[default]
    All,
    Deposits,
    Withdrawals,
}

impl TransactionFilter {
    pub fn display_name(&self) -> &'static str {
        match self {
            TransactionFilter::All => "All",
            TransactionFilter::Deposits => "Deposits",
            TransactionFilter::Withdrawals => "Withdrawals",
        }
    }

    pub fn matches(&self, kind: TransactionKind) -> bool {
        match self {
            TransactionFilter::All => true,
            TransactionFilter::Deposits => kind == TransactionKind::Deposit,
            TransactionFilter::Withdrawals => kind == TransactionKind::Withdrawal,
        }
    }
}
