//! Expense Insight Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for Expense Insight: expense
//! bookkeeping, per-category aggregation and monthly budget tracking.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod budgets;
pub mod constants;
pub mod errors;
pub mod expenses;
pub mod users;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
