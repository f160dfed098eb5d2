//! Session layer binding the in-memory ledger to a persistence backend.

use uuid::Uuid;

use crate::errors::Result;
use crate::ledger::{
    CreateGoalRequest, GoalLedger, GoalTransaction, SavingsGoal, TransactionFilter,
    TransferRequest,
};
use crate::storage::StorageBackend;

/// Owns the live [`GoalLedger`] together with its storage backend.
///
/// Mutations run against a working copy that is persisted before it replaces
/// the live ledger, so an abandoned operation or a failed write never leaves
/// a half-applied balance visible. Single-writer by construction; wrap the
/// session in a mutex when multiple logical callers exist.
pub struct LedgerSession {
    ledger: GoalLedger,
    store: Box<dyn StorageBackend>,
}

impl LedgerSession {
    /// Loads the persisted ledger if one exists, otherwise starts empty.
    pub fn open(store: Box<dyn StorageBackend>) -> Result<Self> {
        let ledger = if store.exists() {
            store.load()?
        } else {
            GoalLedger::new()
        };
        Ok(Self { ledger, store })
    }

    pub fn create_goal(&mut self, request: &CreateGoalRequest) -> Result<SavingsGoal> {
        let mut next = self.ledger.clone();
        let goal = next.create_goal(request)?;
        self.commit(next)?;
        Ok(goal)
    }

    pub fn deposit(&mut self, goal_id: Uuid, request: &TransferRequest) -> Result<GoalTransaction> {
        let mut next = self.ledger.clone();
        let transaction = next.apply_deposit(goal_id, request)?;
        self.commit(next)?;
        Ok(transaction)
    }

    pub fn withdraw(
        &mut self,
        goal_id: Uuid,
        request: &TransferRequest,
    ) -> Result<GoalTransaction> {
        let mut next = self.ledger.clone();
        let transaction = next.apply_withdrawal(goal_id, request)?;
        self.commit(next)?;
        Ok(transaction)
    }

    fn commit(&mut self, next: GoalLedger) -> Result<()> {
        self.store.save(&next)?;
        self.ledger = next;
        Ok(())
    }

    pub fn goals(&self) -> &[SavingsGoal] {
        self.ledger.goals()
    }

    pub fn goal(&self, goal_id: Uuid) -> Result<&SavingsGoal> {
        self.ledger.goal(goal_id)
    }

    pub fn transactions_for(
        &self,
        goal_id: Uuid,
        filter: TransactionFilter,
    ) -> Vec<&GoalTransaction> {
        self.ledger.transactions_for(goal_id, filter)
    }

    pub fn recent_transactions(&self, filter: TransactionFilter) -> Vec<&GoalTransaction> {
        self.ledger.recent_transactions(filter)
    }

    pub fn partition_goals(&self) -> (Vec<&SavingsGoal>, Vec<&SavingsGoal>) {
        self.ledger.partition_goals()
    }

    pub fn ledger(&self) -> &GoalLedger {
        &self.ledger
    }
}
