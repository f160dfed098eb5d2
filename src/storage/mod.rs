pub mod json_backend;

use crate::errors::Result;
use crate::ledger::GoalLedger;

/// Abstraction over persistence backends capable of storing the goal ledger.
pub trait StorageBackend: Send + Sync {
    fn save(&self, ledger: &GoalLedger) -> Result<()>;
    fn load(&self) -> Result<GoalLedger>;
    fn exists(&self) -> bool;
}

pub use json_backend::JsonStore;
