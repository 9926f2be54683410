use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use diesel::dsl::sum;
use diesel::prelude::*;
use diesel::SqliteConnection;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::model::{BudgetDB, NewBudgetDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{budgets, expenses};
use crate::utils::f64_to_decimal;
use expense_insight_core::budgets::{Budget, BudgetPeriod, BudgetRepositoryTrait, NewBudget};
use expense_insight_core::errors::Result;
use expense_insight_core::utils::new_record_id;

pub struct BudgetRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl BudgetRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        BudgetRepository { pool, writer }
    }
}

#[async_trait]
impl BudgetRepositoryTrait for BudgetRepository {
    fn get_budget(&self, owner_id: &str, period: BudgetPeriod) -> Result<Option<Budget>> {
        let mut conn = get_connection(&self.pool)?;
        budgets::table
            .filter(budgets::user_id.eq(owner_id))
            .filter(budgets::month.eq(period.month as i32))
            .filter(budgets::year.eq(period.year))
            .select(BudgetDB::as_select())
            .first::<BudgetDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?
            .map(BudgetDB::into_domain)
            .transpose()
    }

    fn get_expense_total(
        &self,
        owner_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Decimal> {
        let mut conn = get_connection(&self.pool)?;
        let total: Option<f64> = expenses::table
            .filter(expenses::created_by.eq(owner_id))
            .filter(expenses::date.ge(start))
            .filter(expenses::date.lt(end))
            .select(sum(expenses::amount))
            .first(&mut conn)
            .map_err(StorageError::from)?;
        f64_to_decimal(total.unwrap_or(0.0))
    }

    async fn upsert_budget(&self, budget: NewBudget) -> Result<Budget> {
        let now = Utc::now().naive_utc();
        let row = NewBudgetDB::from_domain(budget, new_record_id(), now)?;
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Budget> {
                let saved = diesel::insert_into(budgets::table)
                    .values(&row)
                    .on_conflict((budgets::user_id, budgets::month, budgets::year))
                    .do_update()
                    .set((
                        budgets::amount.eq(row.amount),
                        budgets::updated_at.eq(now),
                    ))
                    .returning(BudgetDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                saved.into_domain()
            })
            .await
    }
}
