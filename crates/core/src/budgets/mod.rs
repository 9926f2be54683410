//! Budgets module - monthly budgets, the budget calculator and summaries.

pub mod budget_calculator;
mod budgets_model;
mod budgets_service;
mod budgets_traits;

pub use budget_calculator::{budget_status, calculate};
pub use budgets_model::{
    Budget, BudgetCalculation, BudgetPeriod, BudgetQuery, BudgetStatus, BudgetSummary,
    BudgetUpsert, NewBudget,
};
pub use budgets_service::BudgetService;
pub use budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
