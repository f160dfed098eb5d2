//! Savings-goal domain models, validated requests, and the ledger itself.

pub mod goal;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod request;
pub mod transaction;

pub use goal::{GoalCategory, SavingsGoal};
pub use ledger::GoalLedger;
pub use request::{CreateGoalRequest, DestinationChannel, TransferRequest};
pub use transaction::{GoalTransaction, TransactionFilter, TransactionKind};
