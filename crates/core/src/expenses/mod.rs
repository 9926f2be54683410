//! Expenses module - domain models, services, traits and the category chart.

mod category_chart;
mod expenses_model;
mod expenses_service;
mod expenses_traits;

pub use category_chart::build_category_chart;
pub use expenses_model::{
    CategoryAggregate, CategoryTotal, Expense, ExpenseCategory, ExpenseFilter, ExpenseQuery,
    ExpenseSearch, ExpenseUpdate, NewExpense,
};
pub use expenses_service::{ExpenseService, EXPENSE_NOT_FOUND_MESSAGE};
pub use expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
