use std::sync::Arc;

use crate::{
    auth::CurrentUser,
    error::ApiResult,
    extractors::{ValidatedJson, ValidatedQuery},
    main_lib::AppState,
    models::ApiResponse,
};
use axum::{extract::State, routing::get, Json, Router};
use expense_insight_core::budgets::{BudgetQuery, BudgetSummary, BudgetUpsert};

async fn get_budget_summary(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    ValidatedQuery(query): ValidatedQuery<BudgetQuery>,
) -> ApiResult<Json<ApiResponse<BudgetSummary>>> {
    let summary = state.budget_service.get_budget_summary(&user.id, &query)?;
    Ok(Json(ApiResponse::ok(
        "Budget summary retrieved successfully",
        summary,
    )))
}

async fn upsert_budget(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    ValidatedJson(input): ValidatedJson<BudgetUpsert>,
) -> ApiResult<Json<ApiResponse<BudgetSummary>>> {
    let summary = state.budget_service.upsert_budget(&user.id, input).await?;
    Ok(Json(ApiResponse::ok("Budget saved successfully", summary)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/budgets", get(get_budget_summary).put(upsert_budget))
}
