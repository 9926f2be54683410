//! Database models for budgets.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::errors::StorageError;
use crate::utils::{decimal_to_f64, f64_to_decimal};
use expense_insight_core::budgets::{Budget, NewBudget};
use expense_insight_core::Result;

/// Database model for budgets
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::budgets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BudgetDB {
    pub id: String,
    pub amount: f64,
    pub month: i32,
    pub year: i32,
    pub user_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for inserting a budget
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::budgets)]
pub struct NewBudgetDB {
    pub id: String,
    pub amount: f64,
    pub month: i32,
    pub year: i32,
    pub user_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl BudgetDB {
    pub fn into_domain(self) -> Result<Budget> {
        let month = u32::try_from(self.month)
            .map_err(|_| StorageError::InvalidData(format!("Invalid budget month {}", self.month)))?;
        Ok(Budget {
            amount: f64_to_decimal(self.amount)?,
            month,
            year: self.year,
            id: self.id,
            user_id: self.user_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl NewBudgetDB {
    pub fn from_domain(budget: NewBudget, id: String, now: NaiveDateTime) -> Result<Self> {
        let month = i32::try_from(budget.period.month).map_err(|_| {
            StorageError::InvalidData(format!("Invalid budget month {}", budget.period.month))
        })?;
        Ok(NewBudgetDB {
            id,
            amount: decimal_to_f64(budget.amount)?,
            month,
            year: budget.period.year,
            user_id: budget.user_id,
            created_at: now,
            updated_at: now,
        })
    }
}
