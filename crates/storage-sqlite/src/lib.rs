//! SQLite storage implementation for Expense Insight.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `expense-insight-core` and contains:
//! - Database connection pooling and management
//! - Embedded Diesel migrations
//! - Repository implementations for users, expenses and budgets
//! - Database-specific model types (with Diesel derives)
//!
//! All writes go through a single writer actor ([`WriteHandle`]); reads use
//! pooled connections.
//!
//! ```text
//! server (api)
//!      │
//!      ▼
//! core (domain, traits)
//!      │
//!      ▼
//! storage-sqlite (this crate)
//!      │
//!      ▼
//!  SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;
pub mod utils;

// Repository implementations
pub mod budgets;
pub mod expenses;
pub mod users;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, open, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use budgets::BudgetRepository;
pub use expenses::ExpenseRepository;
pub use users::UserRepository;

// Re-export from expense-insight-core for convenience
pub use expense_insight_core::errors::{DatabaseError, Error, Result};
