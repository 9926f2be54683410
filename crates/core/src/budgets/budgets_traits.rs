use crate::budgets::budgets_model::{
    Budget, BudgetPeriod, BudgetQuery, BudgetSummary, BudgetUpsert, NewBudget,
};
use crate::errors::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Trait for budget repository operations
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    fn get_budget(&self, user_id: &str, period: BudgetPeriod) -> Result<Option<Budget>>;
    /// Sum of the user's expense amounts with `start <= date < end`.
    fn get_expense_total(&self, user_id: &str, start: NaiveDate, end: NaiveDate)
        -> Result<Decimal>;
    async fn upsert_budget(&self, budget: NewBudget) -> Result<Budget>;
}

/// Trait for budget service operations
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    fn get_budget_summary(&self, user_id: &str, query: &BudgetQuery) -> Result<BudgetSummary>;
    async fn upsert_budget(&self, user_id: &str, input: BudgetUpsert) -> Result<BudgetSummary>;
}
