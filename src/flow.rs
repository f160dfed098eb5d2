//! Guided form flows for goal creation, deposits, and withdrawals.
//!
//! Each flow is a plain state value advanced by feeding intents through a
//! pure [`apply`](CreateGoalForm::apply) function. The driving component
//! submits the built request to the session when the form reaches
//! [`FormPhase::Submitting`], then reports the outcome back as an intent.

use uuid::Uuid;

use crate::ledger::request::sanitize_amount_input;
use crate::ledger::{CreateGoalRequest, DestinationChannel, GoalCategory, TransferRequest};

/// Lifecycle of a single submission attempt.
///
/// `Submitting` is only entered once local validation passes. `Failed`
/// carries the error message and behaves as editing: the next edit intent
/// clears it. `Succeeded` is terminal for the attempt and yields the id of
/// the created goal or recorded transaction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
    Succeeded(Uuid),
    Failed(String),
}

impl FormPhase {
    fn accepts_edits(&self) -> bool {
        matches!(self, FormPhase::Editing | FormPhase::Failed(_))
    }
}

/// User intents for the goal-creation form.
#[derive(Debug, Clone)]
pub enum CreateGoalIntent {
    NameChanged(String),
    CategorySelected(GoalCategory),
    TargetAmountChanged(String),
    TargetDateChanged(String),
    Submit,
    Completed(Uuid),
    Rejected(String),
    ErrorDismissed,
}

/// In-progress goal-creation form.
#[derive(Debug, Clone, Default)]
pub struct CreateGoalForm {
    pub name: String,
    pub category: Option<GoalCategory>,
    pub target_amount: String,
    pub target_date: String,
    pub phase: FormPhase,
}

impl CreateGoalForm {
    /// Builds the request the current field values describe.
    pub fn request(&self) -> CreateGoalRequest {
        CreateGoalRequest {
            name: self.name.clone(),
            category: self.category,
            target_amount: self.target_amount.clone(),
            target_date: self.target_date.clone(),
        }
    }

    /// Advances the form by one intent, returning the next state.
    pub fn apply(mut self, intent: CreateGoalIntent) -> Self {
        match intent {
            CreateGoalIntent::NameChanged(name) if self.phase.accepts_edits() => {
                self.name = name;
                self.phase = FormPhase::Editing;
            }
            CreateGoalIntent::CategorySelected(category) if self.phase.accepts_edits() => {
                self.category = Some(category);
                self.phase = FormPhase::Editing;
            }
            CreateGoalIntent::TargetAmountChanged(raw) if self.phase.accepts_edits() => {
                self.target_amount = sanitize_amount_input(&raw);
                self.phase = FormPhase::Editing;
            }
            CreateGoalIntent::TargetDateChanged(date) if self.phase.accepts_edits() => {
                self.target_date = date;
                self.phase = FormPhase::Editing;
            }
            CreateGoalIntent::Submit if self.phase.accepts_edits() => {
                self.phase = match self.request().validate() {
                    Ok(_) => FormPhase::Submitting,
                    Err(err) => FormPhase::Failed(err.to_string()),
                };
            }
            CreateGoalIntent::Completed(id) if self.phase == FormPhase::Submitting => {
                self.phase = FormPhase::Succeeded(id);
            }
            CreateGoalIntent::Rejected(message) if self.phase == FormPhase::Submitting => {
                self.phase = FormPhase::Failed(message);
            }
            CreateGoalIntent::ErrorDismissed => {
                if matches!(self.phase, FormPhase::Failed(_)) {
                    self.phase = FormPhase::Editing;
                }
            }
            _ => {}
        }
        self
    }
}

/// User intents shared by the deposit and withdrawal forms.
#[derive(Debug, Clone)]
pub enum TransferIntent {
    DestinationChanged(DestinationChannel),
    PhoneNumberChanged(String),
    AccountSelected(String),
    AmountChanged(String),
    Submit,
    Completed(Uuid),
    Rejected(String),
    ErrorDismissed,
}

/// In-progress deposit or withdrawal form. The two flows share one shape;
/// the driving component decides which session operation to call.
#[derive(Debug, Clone, Default)]
pub struct TransferForm {
    pub destination: DestinationChannel,
    pub phone_number: String,
    pub account: String,
    pub amount: String,
    pub reference: String,
    pub phase: FormPhase,
}

impl TransferForm {
    pub fn request(&self) -> TransferRequest {
        TransferRequest {
            amount: self.amount.clone(),
            destination: self.destination,
            phone_number: self.phone_number.clone(),
            account: self.account.clone(),
            reference: self.reference.clone(),
        }
    }

    pub fn apply(mut self, intent: TransferIntent) -> Self {
        match intent {
            TransferIntent::DestinationChanged(destination) if self.phase.accepts_edits() => {
                self.destination = destination;
                self.phase = FormPhase::Editing;
            }
            TransferIntent::PhoneNumberChanged(phone) if self.phase.accepts_edits() => {
                self.phone_number = phone;
                self.phase = FormPhase::Editing;
            }
            TransferIntent::AccountSelected(account) if self.phase.accepts_edits() => {
                self.account = account;
                self.phase = FormPhase::Editing;
            }
            TransferIntent::AmountChanged(raw) if self.phase.accepts_edits() => {
                self.amount = sanitize_amount_input(&raw);
                self.phase = FormPhase::Editing;
            }
            TransferIntent::Submit if self.phase.accepts_edits() => {
                self.phase = match self.request().validate() {
                    Ok(_) => FormPhase::Submitting,
                    Err(err) => FormPhase::Failed(err.to_string()),
                };
            }
            TransferIntent::Completed(id) if self.phase == FormPhase::Submitting => {
                self.phase = FormPhase::Succeeded(id);
            }
            TransferIntent::Rejected(message) if self.phase == FormPhase::Submitting => {
                self.phase = FormPhase::Failed(message);
            }
            TransferIntent::ErrorDismissed => {
                if matches!(self.phase, FormPhase::Failed(_)) {
                    self.phase = FormPhase::Editing;
                }
            }
            _ => {}
        }
        self
    }
}
