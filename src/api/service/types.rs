use serde::{Deserialize, Serialize};

pub const WELCOME: &str = "Welcome to SafeSteps API";
pub const USER_ROUTE: &str = "User route";

#[derive(Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub message: String,

    /// Request body, echoed back as received.
    pub user: serde_json::Value,
}

#[derive(Serialize, Deserialize)]
pub struct ListUsersResponse {
    pub message: String,
}
