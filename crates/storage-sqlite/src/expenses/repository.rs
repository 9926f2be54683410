use async_trait::async_trait;
use chrono::Utc;
use diesel::dsl::{count_star, sum};
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;
use std::sync::Arc;

use super::model::{ExpenseChangesetDB, ExpenseDB, NewExpenseDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::expenses;
use crate::schema::expenses::dsl::*;
use crate::utils::f64_to_decimal;
use expense_insight_core::errors::Result;
use expense_insight_core::expenses::{
    CategoryAggregate, Expense, ExpenseRepositoryTrait, ExpenseSearch, ExpenseUpdate, NewExpense,
};
use expense_insight_core::utils::new_record_id;

pub struct ExpenseRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ExpenseRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ExpenseRepository { pool, writer }
    }
}

fn load_owned(conn: &mut SqliteConnection, owner_id: &str, expense_id: &str) -> Result<ExpenseDB> {
    Ok(expenses
        .filter(id.eq(expense_id))
        .filter(created_by.eq(owner_id))
        .select(ExpenseDB::as_select())
        .first::<ExpenseDB>(conn)
        .map_err(StorageError::from)?)
}

#[async_trait]
impl ExpenseRepositoryTrait for ExpenseRepository {
    fn get_expense(&self, owner_id: &str, expense_id: &str) -> Result<Expense> {
        let mut conn = get_connection(&self.pool)?;
        load_owned(&mut conn, owner_id, expense_id)?.into_domain()
    }

    fn list_expenses(&self, search: &ExpenseSearch) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = expenses
            .filter(created_by.eq(&search.owner_id))
            .select(ExpenseDB::as_select())
            .into_boxed();
        if let Some(wanted) = search.category {
            query = query.filter(category.eq(wanted.as_str()));
        }
        if let Some((start, end)) = search.date_range {
            query = query.filter(date.ge(start)).filter(date.lt(end));
        }

        let rows = query
            .order((date.desc(), created_at.desc()))
            .load::<ExpenseDB>(&mut conn)
            .map_err(StorageError::from)?;
        debug!("Loaded {} expenses for {}", rows.len(), search.owner_id);
        rows.into_iter().map(ExpenseDB::into_domain).collect()
    }

    fn totals_by_category(&self, owner_id: &str) -> Result<Vec<CategoryAggregate>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = expenses
            .filter(created_by.eq(owner_id))
            .group_by(category)
            .select((category, sum(amount), count_star()))
            .load::<(String, Option<f64>, i64)>(&mut conn)
            .map_err(StorageError::from)?;

        rows.into_iter()
            .map(|(cat, total, count)| -> Result<CategoryAggregate> {
                Ok(CategoryAggregate {
                    category: cat.parse()?,
                    total: f64_to_decimal(total.unwrap_or(0.0))?,
                    count,
                })
            })
            .collect()
    }

    async fn create_expense(&self, owner_id: &str, new_expense: NewExpense) -> Result<Expense> {
        let row = NewExpenseDB::from_domain(
            new_expense,
            new_record_id(),
            owner_id,
            Utc::now().naive_utc(),
        )?;
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Expense> {
                let created = diesel::insert_into(expenses::table)
                    .values(&row)
                    .returning(ExpenseDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                created.into_domain()
            })
            .await
    }

    async fn update_expense(
        &self,
        owner_id: &str,
        expense_id: &str,
        update: ExpenseUpdate,
    ) -> Result<Expense> {
        let changes = ExpenseChangesetDB::from_domain(update, Utc::now().naive_utc())?;
        let owner_id = owner_id.to_string();
        let expense_id = expense_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Expense> {
                let updated = diesel::update(
                    expenses
                        .filter(id.eq(&expense_id))
                        .filter(created_by.eq(&owner_id)),
                )
                .set(&changes)
                .execute(conn)
                .map_err(StorageError::from)?;
                if updated == 0 {
                    return Err(StorageError::from(diesel::result::Error::NotFound).into());
                }
                load_owned(conn, &owner_id, &expense_id)?.into_domain()
            })
            .await
    }

    async fn delete_expense(&self, owner_id: &str, expense_id: &str) -> Result<usize> {
        let owner_id = owner_id.to_string();
        let expense_id = expense_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(
                    expenses
                        .filter(id.eq(expense_id))
                        .filter(created_by.eq(owner_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }
}
