//! Common types used by the API client

use serde::{Deserialize, Serialize};

/// Login credentials. Transient; never persisted
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Account role, as carried on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Juridique,
    Decisive,
}

/// Registration request body
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationRequest {
    pub email: String,
    pub password: String,
    /// Display name for the account
    pub name: String,
    pub role: UserRole,
}

/// Account profile returned by the auth endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// Successful login payload
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
}

/// Error envelope returned by the API on non-success statuses
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: Option<ErrorDetail>,
}

/// The `detail` field carries either a plain message or a list of
/// per-field validation errors
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Fields(Vec<FieldError>),
}

/// One entry of a validation error list; the message sits under `msg`
/// or, from some deployments, `message`
#[derive(Debug, Deserialize)]
pub struct FieldError {
    pub msg: Option<String>,
    pub message: Option<String>,
}

impl ErrorDetail {
    /// Flatten the detail into a single message: a plain string is used
    /// verbatim, a field list joins each entry's `msg` (or `message`)
    /// with `", "`
    pub fn into_message(self) -> String {
        match self {
            Self::Message(message) => message,
            Self::Fields(fields) => fields
                .into_iter()
                .map(|field| field.msg.or(field.message).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}
