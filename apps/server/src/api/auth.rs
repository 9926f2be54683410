use std::sync::Arc;

use crate::{
    auth::{AuthError, AuthManager, CurrentUser},
    error::{ApiError, ApiResult},
    extractors::ValidatedJson,
    main_lib::AppState,
    models::{ApiResponse, AuthPayload},
};
use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderName, HeaderValue, StatusCode},
    routing::{get, post},
    Json, Router,
};
use expense_insight_core::users::{LoginInput, NewUser, RegisterInput, User, UserRole};

type AuthResponse = (
    [(HeaderName, HeaderValue); 1],
    Json<ApiResponse<AuthPayload>>,
);

fn auth_response(state: &AppState, user: User, message: &str) -> ApiResult<AuthResponse> {
    let token = state.auth.issue_token(&user)?;
    let header = HeaderValue::from_str(&format!("Bearer {}", token))
        .map_err(|e| ApiError::Internal(format!("Invalid token header: {}", e)))?;
    Ok((
        [(AUTHORIZATION, header)],
        Json(ApiResponse::ok(
            message,
            AuthPayload {
                token,
                expires_in: state.auth.expires_in().as_secs(),
                user,
            },
        )),
    ))
}

async fn run_blocking<T, F>(job: F) -> ApiResult<T>
where
    F: FnOnce() -> Result<T, AuthError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| ApiError::Internal(format!("Password task failed: {}", e)))?
        .map_err(ApiError::from)
}

async fn register(
    State(state): State<Arc<AppState>>,
    ValidatedJson(input): ValidatedJson<RegisterInput>,
) -> ApiResult<(StatusCode, AuthResponse)> {
    let input = input.validate()?;
    let password = input.password;
    let password_hash = run_blocking(move || AuthManager::hash_password(&password)).await?;

    let user = state
        .user_service
        .create_user(NewUser {
            name: input.name,
            email: input.email,
            password_hash,
            role: UserRole::User,
        })
        .await?;
    tracing::info!("User {} registered", user.id);

    let response = auth_response(&state, user, "User registered successfully")?;
    Ok((StatusCode::CREATED, response))
}

async fn login(
    State(state): State<Arc<AppState>>,
    ValidatedJson(input): ValidatedJson<LoginInput>,
) -> ApiResult<AuthResponse> {
    let input = input.validate()?;
    let credentials = state
        .user_service
        .find_credentials_by_email(&input.email)?
        .ok_or(AuthError::InvalidCredentials)?;

    let candidate = input.password;
    let stored_hash = credentials.password_hash;
    run_blocking(move || AuthManager::verify_password(&candidate, &stored_hash)).await?;

    auth_response(&state, credentials.user, "User logged in successfully")
}

async fn logout(CurrentUser(user): CurrentUser) -> Json<ApiResponse<()>> {
    tracing::debug!("User {} logged out", user.id);
    Json(ApiResponse::message("User logged out successfully"))
}

async fn me(CurrentUser(user): CurrentUser) -> Json<ApiResponse<User>> {
    Json(ApiResponse::ok("Current user retrieved successfully", user))
}

/// Routes reachable without a token.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

pub fn protected_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/logout", post(logout))
        .route("/auth/me", get(me))
}
