//! Auth request/response types
//!
//! Every operation answers with an envelope carrying an optional `error`
//! string; callers branch on its presence instead of catching faults.

use aincome_core::{AuthData, AuthUser, Session};
use serde::{Deserialize, Serialize};

/// Request for account registration
#[derive(Debug, Clone, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Request for email/password sign-in
#[derive(Debug, Clone, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Request for changing the signed-in user's password
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePasswordRequest {
    pub new_password: String,
}

/// Result of a sign-up attempt
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignUpResponse {
    pub data: Option<AuthData>,
    pub error: Option<String>,
    /// The account was created but cannot sign in until the user follows
    /// the confirmation email. Not a failure.
    pub requires_email_confirmation: bool,
}

/// Result of a sign-in attempt
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignInResponse {
    pub data: Option<AuthData>,
    pub error: Option<String>,
}

/// Envelope for operations that produce no payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusResponse {
    pub error: Option<String>,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self { error: None }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
        }
    }
}

/// Result of a session fetch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionResponse {
    pub data: Option<Session>,
    pub error: Option<String>,
}

/// Result of a current-user fetch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentUserResponse {
    pub user: Option<AuthUser>,
    pub error: Option<String>,
}
