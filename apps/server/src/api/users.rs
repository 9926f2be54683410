use std::sync::Arc;

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState, models::ApiResponse};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use expense_insight_core::users::User;

async fn get_me(CurrentUser(user): CurrentUser) -> Json<ApiResponse<User>> {
    Json(ApiResponse::ok("User retrieved successfully", user))
}

async fn get_user(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ApiResponse<User>>> {
    let user = state.user_service.get_user(&id)?;
    Ok(Json(ApiResponse::ok("User retrieved successfully", user)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users/me", get(get_me))
        .route("/users/{id}", get(get_user))
}
