use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

pub async fn banner() -> Json<Value> {
    Json(json!({
        "success": true,
        "message": "Expense Insight Dashboard API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/health",
            "auth": "/api/auth",
            "users": "/api/users",
            "expenses": "/api/expenses",
            "budgets": "/api/budgets",
        },
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

pub async fn health() -> Json<Value> {
    Json(json!({
        "success": true,
        "message": "Server is running",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
