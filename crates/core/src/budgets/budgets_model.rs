use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::utils::time_utils::{
    current_month, current_year, month_range, validate_month, validate_year,
};

/// Monthly spending budget for one user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub amount: Decimal,
    pub month: u32,
    pub year: i32,
    pub user_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A (month, year) budget cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetPeriod {
    pub month: u32,
    pub year: i32,
}

impl BudgetPeriod {
    /// Fills missing parts with the current UTC month/year and range-checks both.
    pub fn resolve(month: Option<u32>, year: Option<i32>) -> Result<Self> {
        let month = validate_month(month.unwrap_or_else(current_month))?;
        let year = validate_year(year.unwrap_or_else(current_year))?;
        Ok(BudgetPeriod { month, year })
    }

    pub fn date_range(&self) -> Result<(NaiveDate, NaiveDate)> {
        month_range(self.year, self.month)
    }
}

/// Query for a monthly summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetQuery {
    pub month: Option<u32>,
    pub year: Option<i32>,
}

/// Request body for setting a budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetUpsert {
    pub amount: Decimal,
    pub month: Option<u32>,
    pub year: Option<i32>,
}

impl BudgetUpsert {
    pub fn validate(&self) -> Result<BudgetPeriod> {
        if self.amount < Decimal::ZERO {
            return Err(Error::invalid_input("Budget cannot be negative"));
        }
        BudgetPeriod::resolve(self.month, self.year)
    }
}

/// Row handed to the repository for an upsert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBudget {
    pub user_id: String,
    pub amount: Decimal,
    pub period: BudgetPeriod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    NotSet,
    Safe,
    Warning,
    Danger,
}

impl BudgetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetStatus::NotSet => "not_set",
            BudgetStatus::Safe => "safe",
            BudgetStatus::Warning => "warning",
            BudgetStatus::Danger => "danger",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetCalculation {
    pub remaining: Decimal,
    pub percentage: Decimal,
    pub status: BudgetStatus,
}

/// Budget vs spend for one period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    pub budget: Option<Budget>,
    pub amount: Decimal,
    pub total_expenses: Decimal,
    pub remaining: Decimal,
    pub percentage: Decimal,
    pub month: u32,
    pub year: i32,
    pub status: BudgetStatus,
    pub has_budget: bool,
}
