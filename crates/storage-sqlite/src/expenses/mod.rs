//! SQLite storage implementation for expenses.

mod model;
mod repository;

pub use model::{ExpenseChangesetDB, ExpenseDB, NewExpenseDB};
pub use repository::ExpenseRepository;
