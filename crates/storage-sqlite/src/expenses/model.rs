//! Database models for expenses.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::utils::{decimal_to_f64, f64_to_decimal};
use expense_insight_core::expenses::{Expense, ExpenseUpdate, NewExpense};
use expense_insight_core::Result;

/// Database model for expenses
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::expenses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ExpenseDB {
    pub id: String,
    pub title: String,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub created_by: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new expense
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::expenses)]
pub struct NewExpenseDB {
    pub id: String,
    pub title: String,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub created_by: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Partial update; `None` columns are left as they are.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::expenses)]
pub struct ExpenseChangesetDB {
    pub title: Option<String>,
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<NaiveDate>,
    pub updated_at: NaiveDateTime,
}

impl ExpenseDB {
    pub fn into_domain(self) -> Result<Expense> {
        Ok(Expense {
            category: self.category.parse()?,
            amount: f64_to_decimal(self.amount)?,
            id: self.id,
            title: self.title,
            date: self.date,
            created_by: self.created_by,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl NewExpenseDB {
    pub fn from_domain(
        new_expense: NewExpense,
        id: String,
        owner_id: &str,
        now: NaiveDateTime,
    ) -> Result<Self> {
        Ok(NewExpenseDB {
            id,
            title: new_expense.title,
            category: new_expense.category.as_str().to_string(),
            amount: decimal_to_f64(new_expense.amount)?,
            date: new_expense.date,
            created_by: owner_id.to_string(),
            created_at: now,
            updated_at: now,
        })
    }
}

impl ExpenseChangesetDB {
    pub fn from_domain(update: ExpenseUpdate, now: NaiveDateTime) -> Result<Self> {
        Ok(ExpenseChangesetDB {
            title: update.title,
            category: update.category.map(|c| c.as_str().to_string()),
            amount: update.amount.map(decimal_to_f64).transpose()?,
            date: update.date,
            updated_at: now,
        })
    }
}
