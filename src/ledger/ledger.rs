use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{LedgerError, Result};

use super::{
    goal::SavingsGoal,
    request::{CreateGoalRequest, TransferRequest},
    transaction::{GoalTransaction, TransactionFilter, TransactionKind},
};

pub(crate) const CURRENT_SCHEMA_VERSION: u8 = 1;

/// Authoritative collection of savings goals and their transactions.
///
/// Every balance mutation goes through [`apply_deposit`](Self::apply_deposit)
/// or [`apply_withdrawal`](Self::apply_withdrawal), which record the
/// transaction and adjust the goal together; a failed operation leaves the
/// ledger untouched. Transactions are appended in recording order, so the
/// vector itself is the total order history queries rely on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalLedger {
    #[serde(default)]
    pub goals: Vec<SavingsGoal>,
    #[serde(default)]
    pub transactions: Vec<GoalTransaction>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "GoalLedger::schema_version_default")]
    pub schema_version: u8,
}

impl Default for GoalLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl GoalLedger {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            goals: Vec::new(),
            transactions: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    /// Validates the request and appends a fresh goal with a zero balance.
    pub fn create_goal(&mut self, request: &CreateGoalRequest) -> Result<SavingsGoal> {
        let validated = request.validate()?;
        let goal = SavingsGoal {
            id: Uuid::new_v4(),
            name: validated.name,
            category: validated.category,
            target_amount: validated.target_amount,
            current_amount: 0.0,
            target_date: validated.target_date,
            created_date: Utc::now().date_naive(),
        };
        tracing::info!(goal = %goal.name, target = goal.target_amount, "goal created");
        self.goals.push(goal.clone());
        self.touch();
        Ok(goal)
    }

    /// Records a deposit and increases the goal's balance by the same amount.
    pub fn apply_deposit(&mut self, goal_id: Uuid, request: &TransferRequest) -> Result<GoalTransaction> {
        self.apply_transfer(goal_id, TransactionKind::Deposit, request)
    }

    /// Records a withdrawal and decreases the goal's balance, refusing any
    /// amount that would drive the balance negative.
    pub fn apply_withdrawal(
        &mut self,
        goal_id: Uuid,
        request: &TransferRequest,
    ) -> Result<GoalTransaction> {
        self.apply_transfer(goal_id, TransactionKind::Withdrawal, request)
    }

    fn apply_transfer(
        &mut self,
        goal_id: Uuid,
        kind: TransactionKind,
        request: &TransferRequest,
    ) -> Result<GoalTransaction> {
        // All checks happen before any mutation so failures leave the
        // ledger unchanged.
        let position = self
            .goals
            .iter()
            .position(|goal| goal.id == goal_id)
            .ok_or(LedgerError::GoalNotFound(goal_id))?;
        let amount = request.validate()?;
        if kind == TransactionKind::Withdrawal {
            let balance = self.goals[position].current_amount;
            if amount > balance {
                return Err(LedgerError::InsufficientFunds {
                    balance,
                    requested: amount,
                });
            }
        }

        let transaction = GoalTransaction::new(goal_id, kind, amount, request.reference.clone());
        let goal = &mut self.goals[position];
        match kind {
            TransactionKind::Deposit => goal.current_amount += amount,
            TransactionKind::Withdrawal => goal.current_amount -= amount,
        }
        tracing::debug!(
            goal = %goal.name,
            ?kind,
            amount,
            balance = goal.current_amount,
            "transaction recorded"
        );
        self.transactions.push(transaction.clone());
        self.touch();
        Ok(transaction)
    }

    /// Goals in insertion order.
    pub fn goals(&self) -> &[SavingsGoal] {
        &self.goals
    }

    pub fn goal(&self, goal_id: Uuid) -> Result<&SavingsGoal> {
        self.goals
            .iter()
            .find(|goal| goal.id == goal_id)
            .ok_or(LedgerError::GoalNotFound(goal_id))
    }

    /// One goal's history, most recent first, narrowed by `filter`.
    pub fn transactions_for(
        &self,
        goal_id: Uuid,
        filter: TransactionFilter,
    ) -> Vec<&GoalTransaction> {
        self.transactions
            .iter()
            .rev()
            .filter(|txn| txn.goal_id == goal_id && filter.matches(txn.kind))
            .collect()
    }

    /// Cross-goal history, most recent first. Transactions whose goal no
    /// longer exists are orphaned and excluded.
    pub fn recent_transactions(&self, filter: TransactionFilter) -> Vec<&GoalTransaction> {
        self.transactions
            .iter()
            .rev()
            .filter(|txn| filter.matches(txn.kind))
            .filter(|txn| self.goals.iter().any(|goal| goal.id == txn.goal_id))
            .collect()
    }

    /// Splits goals into (active, completed) by completion state, preserving
    /// insertion order within each half.
    pub fn partition_goals(&self) -> (Vec<&SavingsGoal>, Vec<&SavingsGoal>) {
        self.goals.iter().partition(|goal| !goal.is_completed())
    }

    pub fn has_goals(&self) -> bool {
        !self.goals.is_empty()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub(crate) fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Field;
    use crate::ledger::request::DestinationChannel;
    use crate::ledger::GoalCategory;

    fn create_request(name: &str, target: &str) -> CreateGoalRequest {
        CreateGoalRequest {
            name: name.into(),
            category: Some(GoalCategory::Travelling),
            target_amount: target.into(),
            target_date: "24/08/2026".into(),
        }
    }

    fn mobile_transfer(amount: &str) -> TransferRequest {
        TransferRequest {
            amount: amount.into(),
            destination: DestinationChannel::MobileMoney,
            phone_number: "0712345678".into(),
            account: String::new(),
            reference: "MPESA 071245678".into(),
        }
    }

    fn ledger_with_goal() -> (GoalLedger, Uuid) {
        let mut ledger = GoalLedger::new();
        let goal = ledger
            .create_goal(&create_request("Dubai Trip", "10000.00"))
            .unwrap();
        (ledger, goal.id)
    }

    #[test]
    fn created_goal_starts_empty_and_incomplete() {
        let (ledger, goal_id) = ledger_with_goal();
        let goal = ledger.goal(goal_id).unwrap();
        assert_eq!(goal.current_amount, 0.0);
        assert_eq!(goal.progress_percentage(), "0%");
        assert!(!goal.is_completed());
        assert_eq!(goal.created_date, Utc::now().date_naive());
    }

    #[test]
    fn invalid_creation_leaves_ledger_unchanged() {
        let mut ledger = GoalLedger::new();
        let err = ledger
            .create_goal(&create_request("  ", "10000"))
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Validation {
                field: Field::Name,
                ..
            }
        ));
        assert!(!ledger.has_goals());
        assert!(ledger.transactions.is_empty());
    }

    #[test]
    fn deposits_accumulate_regardless_of_order() {
        let amounts = ["100.50", "249.50", "650"];

        let (mut forward, forward_id) = ledger_with_goal();
        for amount in amounts {
            forward.apply_deposit(forward_id, &mobile_transfer(amount)).unwrap();
        }

        let (mut reverse, reverse_id) = ledger_with_goal();
        for amount in amounts.iter().rev() {
            reverse.apply_deposit(reverse_id, &mobile_transfer(amount)).unwrap();
        }

        assert_eq!(
            forward.goal(forward_id).unwrap().current_amount,
            reverse.goal(reverse_id).unwrap().current_amount
        );
        assert_eq!(forward.goal(forward_id).unwrap().current_amount, 1000.0);
    }

    #[test]
    fn withdraw_then_deposit_round_trips_balance() {
        let (mut ledger, goal_id) = ledger_with_goal();
        ledger.apply_deposit(goal_id, &mobile_transfer("900")).unwrap();
        ledger.apply_withdrawal(goal_id, &mobile_transfer("250")).unwrap();
        ledger.apply_deposit(goal_id, &mobile_transfer("250")).unwrap();
        assert_eq!(ledger.goal(goal_id).unwrap().current_amount, 900.0);
    }

    #[test]
    fn progress_is_monotone_under_deposits() {
        let (mut ledger, goal_id) = ledger_with_goal();
        let mut last = ledger.goal(goal_id).unwrap().progress();
        for amount in ["100", "5.25", "9000"] {
            ledger.apply_deposit(goal_id, &mobile_transfer(amount)).unwrap();
            let next = ledger.goal(goal_id).unwrap().progress();
            assert!(next >= last, "progress regressed: {next} < {last}");
            last = next;
        }
    }

    #[test]
    fn completion_flips_at_target_and_reverts_only_on_withdrawal() {
        let (mut ledger, goal_id) = ledger_with_goal();
        ledger.apply_deposit(goal_id, &mobile_transfer("9999.99")).unwrap();
        assert!(!ledger.goal(goal_id).unwrap().is_completed());
        ledger.apply_deposit(goal_id, &mobile_transfer("0.01")).unwrap();
        assert!(ledger.goal(goal_id).unwrap().is_completed());
        ledger.apply_withdrawal(goal_id, &mobile_transfer("1")).unwrap();
        assert!(!ledger.goal(goal_id).unwrap().is_completed());
    }

    #[test]
    fn overdraw_fails_and_mutates_nothing() {
        let (mut ledger, goal_id) = ledger_with_goal();
        ledger.apply_deposit(goal_id, &mobile_transfer("700")).unwrap();
        let before = ledger.clone();

        let err = ledger
            .apply_withdrawal(goal_id, &mobile_transfer("800"))
            .unwrap_err();
        match err {
            LedgerError::InsufficientFunds { balance, requested } => {
                assert_eq!(balance, 700.0);
                assert_eq!(requested, 800.0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(ledger.goal(goal_id).unwrap().current_amount, 700.0);
        assert_eq!(ledger.transactions.len(), before.transactions.len());
    }

    #[test]
    fn unknown_goal_is_reported_as_not_found() {
        let (mut ledger, _) = ledger_with_goal();
        let missing = Uuid::new_v4();
        assert!(matches!(
            ledger.apply_deposit(missing, &mobile_transfer("10")),
            Err(LedgerError::GoalNotFound(id)) if id == missing
        ));
        assert!(matches!(
            ledger.goal(missing),
            Err(LedgerError::GoalNotFound(_))
        ));
    }

    #[test]
    fn history_is_most_recent_first_and_filters_preserve_order() {
        let (mut ledger, goal_id) = ledger_with_goal();
        ledger.apply_deposit(goal_id, &mobile_transfer("600")).unwrap();
        ledger.apply_withdrawal(goal_id, &mobile_transfer("200")).unwrap();
        ledger.apply_deposit(goal_id, &mobile_transfer("500")).unwrap();

        let all = ledger.transactions_for(goal_id, TransactionFilter::All);
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].amount, 500.0);
        assert_eq!(all[2].amount, 600.0);

        let deposits = ledger.transactions_for(goal_id, TransactionFilter::Deposits);
        assert_eq!(deposits.len(), 2);
        assert!(deposits.iter().all(|txn| txn.kind == TransactionKind::Deposit));
        // Same relative order as the unfiltered view.
        let deposit_ids: Vec<_> = all
            .iter()
            .filter(|txn| txn.kind == TransactionKind::Deposit)
            .map(|txn| txn.id)
            .collect();
        assert_eq!(deposits.iter().map(|txn| txn.id).collect::<Vec<_>>(), deposit_ids);
    }

    #[test]
    fn partition_tracks_completion() {
        let (mut ledger, first) = ledger_with_goal();
        let second = ledger
            .create_goal(&create_request("New Laptop", "500"))
            .unwrap()
            .id;
        ledger.apply_deposit(second, &mobile_transfer("500")).unwrap();

        let (active, completed) = ledger.partition_goals();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, first);
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, second);
    }

    #[test]
    fn orphaned_transactions_are_hidden_from_recent_history() {
        let (mut ledger, goal_id) = ledger_with_goal();
        ledger.apply_deposit(goal_id, &mobile_transfer("100")).unwrap();
        // Simulate a goal deleted out from under its history.
        ledger.goals.retain(|goal| goal.id != goal_id);
        assert!(ledger.recent_transactions(TransactionFilter::All).is_empty());
    }
}
