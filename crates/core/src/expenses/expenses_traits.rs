use crate::errors::Result;
use crate::expenses::expenses_model::{
    CategoryAggregate, CategoryTotal, Expense, ExpenseFilter, ExpenseSearch, ExpenseUpdate,
    NewExpense,
};
use async_trait::async_trait;

/// Trait for expense repository operations.
///
/// Every call is scoped to `owner_id`; rows owned by anyone else behave as
/// if they did not exist.
#[async_trait]
pub trait ExpenseRepositoryTrait: Send + Sync {
    fn get_expense(&self, owner_id: &str, expense_id: &str) -> Result<Expense>;
    fn list_expenses(&self, search: &ExpenseSearch) -> Result<Vec<Expense>>;
    fn totals_by_category(&self, owner_id: &str) -> Result<Vec<CategoryAggregate>>;
    async fn create_expense(&self, owner_id: &str, new_expense: NewExpense) -> Result<Expense>;
    async fn update_expense(
        &self,
        owner_id: &str,
        expense_id: &str,
        update: ExpenseUpdate,
    ) -> Result<Expense>;
    async fn delete_expense(&self, owner_id: &str, expense_id: &str) -> Result<usize>;
}

/// Trait for expense service operations
#[async_trait]
pub trait ExpenseServiceTrait: Send + Sync {
    fn get_expense(&self, owner_id: &str, expense_id: &str) -> Result<Expense>;
    fn list_expenses(&self, owner_id: &str, filter: &ExpenseFilter) -> Result<Vec<Expense>>;
    fn get_category_chart(&self, owner_id: &str) -> Result<Vec<CategoryTotal>>;
    async fn create_expense(&self, owner_id: &str, new_expense: NewExpense) -> Result<Expense>;
    async fn update_expense(
        &self,
        owner_id: &str,
        expense_id: &str,
        update: ExpenseUpdate,
    ) -> Result<Expense>;
    async fn delete_expense(&self, owner_id: &str, expense_id: &str) -> Result<()>;
}
