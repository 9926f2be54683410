use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};
use rust_decimal::Decimal;

use crate::budgets::budget_calculator::calculate;
use crate::budgets::budgets_model::{
    Budget, BudgetPeriod, BudgetQuery, BudgetSummary, BudgetUpsert, NewBudget,
};
use crate::budgets::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::Result;

pub struct BudgetService {
    repository: Arc<dyn BudgetRepositoryTrait>,
}

impl BudgetService {
    pub fn new(repository: Arc<dyn BudgetRepositoryTrait>) -> Self {
        BudgetService { repository }
    }

    fn summarize(&self, user_id: &str, period: BudgetPeriod) -> Result<BudgetSummary> {
        let (start, end) = period.date_range()?;
        let budget: Option<Budget> = self.repository.get_budget(user_id, period)?;
        let spent = self.repository.get_expense_total(user_id, start, end)?;

        // Status is decided on the exact total; only the reported figure is rounded.
        let amount = budget.as_ref().map_or(Decimal::ZERO, |b| b.amount);
        let calc = calculate(amount, spent);
        debug!(
            "Budget {}-{} for {}: amount={} spent={} status={}",
            period.year, period.month, user_id, amount, spent, calc.status
        );

        Ok(BudgetSummary {
            budget,
            amount,
            total_expenses: spent.round_dp(DISPLAY_DECIMAL_PRECISION),
            remaining: calc.remaining,
            percentage: calc.percentage,
            month: period.month,
            year: period.year,
            status: calc.status,
            has_budget: amount > Decimal::ZERO,
        })
    }
}

#[async_trait]
impl BudgetServiceTrait for BudgetService {
    fn get_budget_summary(&self, user_id: &str, query: &BudgetQuery) -> Result<BudgetSummary> {
        let period = BudgetPeriod::resolve(query.month, query.year)?;
        self.summarize(user_id, period)
    }

    async fn upsert_budget(&self, user_id: &str, input: BudgetUpsert) -> Result<BudgetSummary> {
        let period = input.validate()?;
        let budget = self
            .repository
            .upsert_budget(NewBudget {
                user_id: user_id.to_string(),
                amount: input.amount,
                period,
            })
            .await?;
        info!(
            "Saved budget {} ({}-{}) for user {}",
            budget.id, period.year, period.month, user_id
        );
        self.summarize(user_id, period)
    }
}
