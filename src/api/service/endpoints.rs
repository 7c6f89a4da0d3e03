use axum::extract::Json;
use axum::http::StatusCode;

use super::types::*;

pub async fn welcome() -> &'static str {
    WELCOME
}

pub async fn users() -> &'static str {
    USER_ROUTE
}

pub async fn create_user(
    Json(user): Json<serde_json::Value>,
) -> (StatusCode, Json<CreateUserResponse>) {
    let response = CreateUserResponse {
        message: "User created".to_string(),
        user,
    };

    (StatusCode::CREATED, Json(response))
}

pub async fn list_users() -> Json<ListUsersResponse> {
    Json(ListUsersResponse {
        message: "List of users".to_string(),
    })
}
