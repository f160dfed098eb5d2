use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Supported savings-goal categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GoalCategory {
    Travelling,
    Education,
    Investment,
    Emergency,
    Wedding,
    House,
    Car,
    Gadgets,
    Other,
}

impl GoalCategory {
    pub const ALL: [GoalCategory; 9] = [
        GoalCategory::Travelling,
        GoalCategory::Education,
        GoalCategory::Investment,
        GoalCategory::Emergency,
        GoalCategory::Wedding,
        GoalCategory::House,
        GoalCategory::Car,
        GoalCategory::Gadgets,
        GoalCategory::Other,
    ];

    /// Human-readable label shown in category pickers.
    pub fn display_name(&self) -> &'static str {
        match self {
            GoalCategory::Travelling => "Travelling",
            GoalCategory::Education => "Education",
            GoalCategory::Investment => "Investment",
            GoalCategory::Emergency => "Emergency Fund",
            GoalCategory::Wedding => "Wedding",
            GoalCategory::House => "House",
            GoalCategory::Car => "Car",
            GoalCategory::Gadgets => "Gadgets",
            GoalCategory::Other => "Other",
        }
    }

    /// Resolves a category from its display label, case-insensitively.
    pub fn from_label(label: &str) -> Option<GoalCategory> {
        let wanted = label.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.display_name().eq_ignore_ascii_case(wanted))
    }
}

/// A named savings target with a deadline and progress tracked against a
/// monetary objective.
///
/// `current_amount` is only ever mutated by [`GoalLedger`](super::GoalLedger)
/// applying a transaction; every derived figure below is recomputed from the
/// stored amounts on read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavingsGoal {
    pub id: Uuid,
    pub name: String,
    pub category: GoalCategory,
    pub target_amount: f64,
    pub current_amount: f64,
    pub target_date: NaiveDate,
    pub created_date: NaiveDate,
}

impl SavingsGoal {
    /// Fraction of the target saved so far. Unclamped above 1.0 so callers
    /// can see overshoot; zero when the target is not positive.
    pub fn progress(&self) -> f64 {
        if self.target_amount > 0.0 {
            self.current_amount / self.target_amount
        } else {
            0.0
        }
    }

    /// Progress clamped to `[0, 1]` for gauges and progress bars.
    pub fn display_progress(&self) -> f64 {
        self.progress().clamp(0.0, 1.0)
    }

    /// Whole-percent progress label, truncated, e.g. `"9%"`.
    pub fn progress_percentage(&self) -> String {
        format!("{}%", (self.progress() * 100.0) as i64)
    }

    /// Money still needed to reach the target, never negative.
    pub fn remaining_amount(&self) -> f64 {
        (self.target_amount - self.current_amount).max(0.0)
    }

    pub fn is_completed(&self) -> bool {
        self.current_amount >= self.target_amount
    }
}
