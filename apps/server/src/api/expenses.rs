use std::sync::Arc;

use crate::{
    auth::CurrentUser,
    error::ApiResult,
    extractors::{ValidatedJson, ValidatedQuery},
    main_lib::AppState,
    models::{ApiResponse, ExpenseListResponse},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use expense_insight_core::expenses::{
    CategoryTotal, Expense, ExpenseFilter, ExpenseQuery, ExpenseUpdate, NewExpense,
};

async fn list_expenses(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    ValidatedQuery(query): ValidatedQuery<ExpenseQuery>,
) -> ApiResult<Json<ExpenseListResponse>> {
    let filter = ExpenseFilter::from_query(query)?;
    let expenses = state.expense_service.list_expenses(&user.id, &filter)?;
    Ok(Json(ExpenseListResponse {
        success: true,
        message: filter.describe(),
        count: expenses.len(),
        filters: filter,
        data: expenses,
    }))
}

async fn create_expense(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    ValidatedJson(expense): ValidatedJson<NewExpense>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Expense>>)> {
    let created = state
        .expense_service
        .create_expense(&user.id, expense)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Expense created successfully", created)),
    ))
}

async fn get_category_chart(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<ApiResponse<Vec<CategoryTotal>>>> {
    let chart = state.expense_service.get_category_chart(&user.id)?;
    Ok(Json(ApiResponse::ok("Chart data retrieved successfully", chart)))
}

async fn get_expense(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<ApiResponse<Expense>>> {
    let expense = state.expense_service.get_expense(&user.id, &id)?;
    Ok(Json(ApiResponse::ok("Expense retrieved successfully", expense)))
}

async fn update_expense(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    ValidatedJson(update): ValidatedJson<ExpenseUpdate>,
) -> ApiResult<Json<ApiResponse<Expense>>> {
    let updated = state
        .expense_service
        .update_expense(&user.id, &id, update)
        .await?;
    Ok(Json(ApiResponse::ok("Expense updated successfully", updated)))
}

async fn delete_expense(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<ApiResponse<()>>> {
    state.expense_service.delete_expense(&user.id, &id).await?;
    Ok(Json(ApiResponse::message("Expense deleted successfully")))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route("/expenses/chart", get(get_category_chart))
        .route(
            "/expenses/{id}",
            get(get_expense).put(update_expense).delete(delete_expense),
        )
}
