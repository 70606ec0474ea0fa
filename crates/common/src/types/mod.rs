use serde::{Deserialize, Serialize};

/// Tagged result envelope: `{ data, success, error? }`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub data: T,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { data, success: true, error: None }
    }

    pub fn failure(data: T, error: impl Into<String>) -> Self {
        Self { data, success: false, error: Some(error.into()) }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub user_id: u32,
    pub id: u32,
    pub title: String,
    pub completed: bool,
}

pub fn sample_user_response() -> ApiResponse<User> {
    ApiResponse::ok(User { id: "1".into(), name: "Putri".into() })
}

pub fn sample_string_response() -> ApiResponse<String> {
    ApiResponse::ok("Hello world!".to_string())
}
