use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};

use crate::errors::{Error, Result};
use crate::expenses::category_chart::build_category_chart;
use crate::expenses::expenses_model::{
    CategoryTotal, Expense, ExpenseFilter, ExpenseSearch, ExpenseUpdate, NewExpense,
};
use crate::expenses::expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
use crate::utils::ensure_record_id;

pub const EXPENSE_NOT_FOUND_MESSAGE: &str = "Expense not found";

pub struct ExpenseService {
    repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl ExpenseService {
    pub fn new(repository: Arc<dyn ExpenseRepositoryTrait>) -> Self {
        ExpenseService { repository }
    }
}

#[async_trait]
impl ExpenseServiceTrait for ExpenseService {
    fn get_expense(&self, owner_id: &str, expense_id: &str) -> Result<Expense> {
        ensure_record_id(expense_id)?;
        self.repository
            .get_expense(owner_id, expense_id)
            .map_err(|e| e.into_domain(EXPENSE_NOT_FOUND_MESSAGE))
    }

    fn list_expenses(&self, owner_id: &str, filter: &ExpenseFilter) -> Result<Vec<Expense>> {
        let search = ExpenseSearch {
            owner_id: owner_id.to_string(),
            category: filter.category,
            date_range: filter.date_range()?,
        };
        debug!("Listing expenses with {:?}", search);
        self.repository.list_expenses(&search)
    }

    fn get_category_chart(&self, owner_id: &str) -> Result<Vec<CategoryTotal>> {
        let rows = self.repository.totals_by_category(owner_id)?;
        Ok(build_category_chart(rows))
    }

    async fn create_expense(&self, owner_id: &str, new_expense: NewExpense) -> Result<Expense> {
        let new_expense = new_expense.validate()?;
        let expense = self.repository.create_expense(owner_id, new_expense).await?;
        info!("Created expense {} for user {}", expense.id, owner_id);
        Ok(expense)
    }

    async fn update_expense(
        &self,
        owner_id: &str,
        expense_id: &str,
        update: ExpenseUpdate,
    ) -> Result<Expense> {
        ensure_record_id(expense_id)?;
        let update = update.validate()?;
        if update.is_empty() {
            return self.get_expense(owner_id, expense_id);
        }
        self.repository
            .update_expense(owner_id, expense_id, update)
            .await
            .map_err(|e| e.into_domain(EXPENSE_NOT_FOUND_MESSAGE))
    }

    async fn delete_expense(&self, owner_id: &str, expense_id: &str) -> Result<()> {
        ensure_record_id(expense_id)?;
        let deleted = self
            .repository
            .delete_expense(owner_id, expense_id)
            .await?;
        if deleted == 0 {
            return Err(Error::NotFound(EXPENSE_NOT_FOUND_MESSAGE.to_string()));
        }
        info!("Deleted expense {} for user {}", expense_id, owner_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DatabaseError;
    use crate::expenses::expenses_model::{CategoryAggregate, ExpenseCategory};
    use crate::utils::new_record_id;
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::RwLock;

    #[derive(Default)]
    struct MockExpenseRepository {
        expenses: RwLock<Vec<Expense>>,
    }

    fn missing() -> Error {
        Error::Database(DatabaseError::NotFound("Record not found".into()))
    }

    #[async_trait]
    impl ExpenseRepositoryTrait for MockExpenseRepository {
        fn get_expense(&self, owner_id: &str, expense_id: &str) -> Result<Expense> {
            self.expenses
                .read()
                .unwrap()
                .iter()
                .find(|e| e.id == expense_id && e.created_by == owner_id)
                .cloned()
                .ok_or_else(missing)
        }

        fn list_expenses(&self, search: &ExpenseSearch) -> Result<Vec<Expense>> {
            let mut rows: Vec<Expense> = self
                .expenses
                .read()
                .unwrap()
                .iter()
                .filter(|e| e.created_by == search.owner_id)
                .filter(|e| search.category.map_or(true, |c| e.category == c))
                .filter(|e| {
                    search
                        .date_range
                        .map_or(true, |(start, end)| e.date >= start && e.date < end)
                })
                .cloned()
                .collect();
            rows.sort_by(|a, b| b.date.cmp(&a.date));
            Ok(rows)
        }

        fn totals_by_category(&self, owner_id: &str) -> Result<Vec<CategoryAggregate>> {
            Ok(self
                .expenses
                .read()
                .unwrap()
                .iter()
                .filter(|e| e.created_by == owner_id)
                .map(|e| CategoryAggregate {
                    category: e.category,
                    total: e.amount,
                    count: 1,
                })
                .collect())
        }

        async fn create_expense(&self, owner_id: &str, new_expense: NewExpense) -> Result<Expense> {
            let now = Utc::now().naive_utc();
            let expense = Expense {
                id: new_record_id(),
                title: new_expense.title,
                category: new_expense.category,
                amount: new_expense.amount,
                date: new_expense.date,
                created_by: owner_id.to_string(),
                created_at: now,
                updated_at: now,
            };
            self.expenses.write().unwrap().push(expense.clone());
            Ok(expense)
        }

        async fn update_expense(
            &self,
            owner_id: &str,
            expense_id: &str,
            update: ExpenseUpdate,
        ) -> Result<Expense> {
            let mut expenses = self.expenses.write().unwrap();
            let expense = expenses
                .iter_mut()
                .find(|e| e.id == expense_id && e.created_by == owner_id)
                .ok_or_else(missing)?;
            if let Some(title) = update.title {
                expense.title = title;
            }
            if let Some(category) = update.category {
                expense.category = category;
            }
            if let Some(amount) = update.amount {
                expense.amount = amount;
            }
            if let Some(date) = update.date {
                expense.date = date;
            }
            Ok(expense.clone())
        }

        async fn delete_expense(&self, owner_id: &str, expense_id: &str) -> Result<usize> {
            let mut expenses = self.expenses.write().unwrap();
            let before = expenses.len();
            expenses.retain(|e| !(e.id == expense_id && e.created_by == owner_id));
            Ok(before - expenses.len())
        }
    }

    fn service() -> ExpenseService {
        ExpenseService::new(Arc::new(MockExpenseRepository::default()))
    }

    fn new_expense(category: ExpenseCategory, amount: Decimal, date: (i32, u32, u32)) -> NewExpense {
        NewExpense {
            title: "Groceries".to_string(),
            category,
            amount,
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_other_owner_cannot_see_or_touch_expense() {
        let service = service();
        let alice = new_record_id();
        let bob = new_record_id();
        let expense = service
            .create_expense(&alice, new_expense(ExpenseCategory::Food, dec!(12), (2024, 10, 1)))
            .await
            .unwrap();

        let err = service.get_expense(&bob, &expense.id).unwrap_err();
        assert!(matches!(err, Error::NotFound(ref m) if m == EXPENSE_NOT_FOUND_MESSAGE));

        let update = ExpenseUpdate {
            amount: Some(dec!(1)),
            ..Default::default()
        };
        assert!(matches!(
            service.update_expense(&bob, &expense.id, update).await,
            Err(Error::NotFound(_))
        ));
        assert!(matches!(
            service.delete_expense(&bob, &expense.id).await,
            Err(Error::NotFound(_))
        ));

        assert_eq!(service.get_expense(&alice, &expense.id).unwrap().amount, dec!(12));
    }

    #[tokio::test]
    async fn test_create_validates_input() {
        let service = service();
        let owner = new_record_id();
        let mut input = new_expense(ExpenseCategory::Food, dec!(0), (2024, 10, 1));
        assert!(matches!(
            service.create_expense(&owner, input.clone()).await,
            Err(Error::Validation(_))
        ));

        input.amount = dec!(5);
        input.title = "   ".to_string();
        assert!(matches!(
            service.create_expense(&owner, input).await,
            Err(Error::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_update_applies_only_present_fields() {
        let service = service();
        let owner = new_record_id();
        let expense = service
            .create_expense(&owner, new_expense(ExpenseCategory::Food, dec!(12), (2024, 10, 1)))
            .await
            .unwrap();

        let updated = service
            .update_expense(
                &owner,
                &expense.id,
                ExpenseUpdate {
                    category: Some(ExpenseCategory::Transport),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.category, ExpenseCategory::Transport);
        assert_eq!(updated.amount, dec!(12));
        assert_eq!(updated.title, "Groceries");

        let unchanged = service
            .update_expense(&owner, &expense.id, ExpenseUpdate::default())
            .await
            .unwrap();
        assert_eq!(unchanged, updated);
    }

    #[tokio::test]
    async fn test_malformed_id_is_a_validation_error() {
        let service = service();
        let owner = new_record_id();
        assert!(matches!(
            service.get_expense(&owner, "abc"),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            service.delete_expense(&owner, "abc").await,
            Err(Error::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_list_filters_by_category_and_month() {
        let service = service();
        let owner = new_record_id();
        for (category, date) in [
            (ExpenseCategory::Food, (2024, 10, 3)),
            (ExpenseCategory::Food, (2024, 9, 30)),
            (ExpenseCategory::Transport, (2024, 10, 10)),
        ] {
            service
                .create_expense(&owner, new_expense(category, dec!(5), date))
                .await
                .unwrap();
        }

        let october = ExpenseFilter {
            month: Some(10),
            year: Some(2024),
            ..Default::default()
        };
        let rows = service.list_expenses(&owner, &october).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].date > rows[1].date);

        let food_october = ExpenseFilter {
            category: Some(ExpenseCategory::Food),
            ..october
        };
        assert_eq!(service.list_expenses(&owner, &food_october).unwrap().len(), 1);
        assert_eq!(
            service
                .list_expenses(&owner, &ExpenseFilter::default())
                .unwrap()
                .len(),
            3
        );
    }

    #[tokio::test]
    async fn test_category_chart_is_owner_scoped() {
        let service = service();
        let alice = new_record_id();
        let bob = new_record_id();
        service
            .create_expense(&alice, new_expense(ExpenseCategory::Utilities, dec!(40), (2024, 1, 1)))
            .await
            .unwrap();
        service
            .create_expense(&bob, new_expense(ExpenseCategory::Food, dec!(99), (2024, 1, 1)))
            .await
            .unwrap();

        let chart = service.get_category_chart(&alice).unwrap();
        assert_eq!(chart.len(), 4);
        assert_eq!(chart[0].category, ExpenseCategory::Utilities);
        assert_eq!(chart[0].total, dec!(40));
        assert!(chart[1..].iter().all(|r| r.count == 0));
    }
}
