//! Auth boundary models
//!
//! Value shapes exchanged with the auth backend. The backend owns these
//! records; nothing here is persisted locally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user record as reported by the auth backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Set once the user has followed the confirmation link
    #[serde(default)]
    pub email_confirmed_at: Option<DateTime<Utc>>,
    /// Free-form profile data (display name lives under `name`)
    #[serde(default)]
    pub user_metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl AuthUser {
    /// Display name from profile metadata, if one was stored at sign-up
    pub fn display_name(&self) -> Option<&str> {
        self.user_metadata
            .as_ref()
            .and_then(|m| m.get("name"))
            .and_then(|v| v.as_str())
    }
}

/// Backend-issued proof of authentication state
///
/// Treated as opaque by the facade: tokens are forwarded, never inspected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub refresh_token: String,
    pub user: AuthUser,
}

/// The (user, session) pair produced by sign-up and sign-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthData {
    pub user: Option<AuthUser>,
    pub session: Option<Session>,
}
