use expense_insight_core::expenses::{Expense, ExpenseFilter};
use expense_insight_core::users::User;
use serde::Serialize;

/// Success envelope shared by every endpoint.
#[derive(Serialize, Debug)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }
}

/// Expense listing carries the match count and the filters that were applied.
#[derive(Serialize, Debug)]
pub struct ExpenseListResponse {
    pub success: bool,
    pub message: String,
    pub count: usize,
    pub filters: ExpenseFilter,
    pub data: Vec<Expense>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AuthPayload {
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: u64,
    pub user: User,
}
