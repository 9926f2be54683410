use std::sync::Arc;

use crate::{
    auth::{AuthConfig, AuthManager},
    config::Config,
    error,
};
use expense_insight_core::{
    budgets::{BudgetService, BudgetServiceTrait},
    expenses::{ExpenseService, ExpenseServiceTrait},
    users::{UserService, UserServiceTrait},
};
use expense_insight_storage_sqlite::{
    self as storage, BudgetRepository, ExpenseRepository, UserRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub expense_service: Arc<dyn ExpenseServiceTrait>,
    pub budget_service: Arc<dyn BudgetServiceTrait>,
    pub auth: Arc<AuthManager>,
}

pub fn init_tracing() {
    let log_format = std::env::var("EI_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    error::hide_internal_errors(config.environment.is_production());

    let (pool, writer) = storage::open(&config.db_path)?;
    tracing::info!("Database path in use: {}", config.db_path);

    let user_repository = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let expense_repository = Arc::new(ExpenseRepository::new(pool.clone(), writer.clone()));
    let budget_repository = Arc::new(BudgetRepository::new(pool.clone(), writer.clone()));

    let user_service: Arc<dyn UserServiceTrait> = Arc::new(UserService::new(user_repository));
    let expense_service: Arc<dyn ExpenseServiceTrait> =
        Arc::new(ExpenseService::new(expense_repository));
    let budget_service: Arc<dyn BudgetServiceTrait> =
        Arc::new(BudgetService::new(budget_repository));

    let auth = Arc::new(AuthManager::new(&AuthConfig {
        jwt_secret: config.jwt_secret.clone(),
        access_token_ttl: config.jwt_ttl,
    }));

    Ok(Arc::new(AppState {
        user_service,
        expense_service,
        budget_service,
        auth,
    }))
}
