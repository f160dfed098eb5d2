use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{Field, LedgerError, Result};

use super::goal::GoalCategory;

/// Date format used by goal forms, e.g. `24/08/2026`.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

const MIN_PHONE_DIGITS: usize = 10;

/// External payment rail a deposit or withdrawal is routed through.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum DestinationChannel {
    #[default]
    MobileMoney,
    BankAccount,
}

/// Raw goal-creation input as captured by a form, validated before the
/// ledger accepts it. Fields are checked in declaration order and the first
/// failure is reported.
#[derive(Debug, Clone, Default)]
pub struct CreateGoalRequest {
    pub name: String,
    pub category: Option<GoalCategory>,
    pub target_amount: String,
    pub target_date: String,
}

/// Creation input after validation, ready for the ledger to apply.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedGoal {
    pub name: String,
    pub category: GoalCategory,
    pub target_amount: f64,
    pub target_date: NaiveDate,
}

impl CreateGoalRequest {
    pub fn validate(&self) -> Result<ValidatedGoal> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(LedgerError::validation(Field::Name, "must not be blank"));
        }
        let category = self
            .category
            .ok_or_else(|| LedgerError::validation(Field::Category, "must be selected"))?;
        let target_amount = parse_positive_amount(&self.target_amount, Field::TargetAmount)?;
        let raw_date = self.target_date.trim();
        if raw_date.is_empty() {
            return Err(LedgerError::validation(
                Field::TargetDate,
                "must not be blank",
            ));
        }
        let target_date = NaiveDate::parse_from_str(raw_date, DATE_FORMAT).map_err(|_| {
            LedgerError::validation(Field::TargetDate, format!("`{raw_date}` is not a valid date"))
        })?;
        Ok(ValidatedGoal {
            name: name.to_string(),
            category,
            target_amount,
            target_date,
        })
    }
}

/// Raw deposit/withdrawal input. The destination details are mutually
/// exclusive: mobile money needs a phone number, a bank transfer needs a
/// selected account.
#[derive(Debug, Clone, Default)]
pub struct TransferRequest {
    pub amount: String,
    pub destination: DestinationChannel,
    pub phone_number: String,
    pub account: String,
    pub reference: String,
}

impl TransferRequest {
    /// Validates the request and returns the parsed amount.
    pub fn validate(&self) -> Result<f64> {
        let amount = parse_positive_amount(&self.amount, Field::Amount)?;
        match self.destination {
            DestinationChannel::MobileMoney => {
                let digits = self.phone_number.chars().filter(char::is_ascii_digit).count();
                if digits < MIN_PHONE_DIGITS {
                    return Err(LedgerError::validation(
                        Field::PhoneNumber,
                        format!("needs at least {MIN_PHONE_DIGITS} digits"),
                    ));
                }
            }
            DestinationChannel::BankAccount => {
                if self.account.trim().is_empty() {
                    return Err(LedgerError::validation(Field::Account, "must be selected"));
                }
            }
        }
        Ok(amount)
    }
}

fn parse_positive_amount(raw: &str, field: Field) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::validation(field, "must not be blank"));
    }
    let amount: f64 = trimmed
        .parse()
        .map_err(|_| LedgerError::validation(field, format!("`{trimmed}` is not a number")))?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(LedgerError::validation(field, "must be greater than zero"));
    }
    Ok(amount)
}

/// Keeps only digits and the first decimal point of a raw amount keystroke
/// stream, so form state never holds an unparseable amount shape.
pub fn sanitize_amount_input(raw: &str) -> String {
    let mut seen_dot = false;
    raw.chars()
        .filter(|ch| {
            if ch.is_ascii_digit() {
                true
            } else if *ch == '.' && !seen_dot {
                seen_dot = true;
                true
            } else {
                false
            }
        })
        .collect()
}
