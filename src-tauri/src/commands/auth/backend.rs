//! Auth backend boundary
//!
//! Abstracts the remote auth service for testability using trait-based
//! dependency injection.

use async_trait::async_trait;

use aincome_core::{AuthData, AuthUser, Session, SupabaseClient, UserAttributes};

/// Auth backend trait - abstracts the remote auth service
///
/// An `Err` carries the backend's human-readable failure message; an empty
/// string models a fault the backend reported without one.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Register a new account, optionally attaching profile metadata
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: Option<serde_json::Value>,
    ) -> Result<AuthData, String>;

    /// Exchange email/password for a session
    async fn sign_in_with_password(&self, email: &str, password: &str)
        -> Result<AuthData, String>;

    /// Revoke the current session
    async fn sign_out(&self) -> Result<(), String>;

    /// Send a password-reset email
    async fn reset_password_for_email(&self, email: &str) -> Result<(), String>;

    /// Update attributes of the signed-in user
    async fn update_user(&self, attributes: UserAttributes) -> Result<AuthUser, String>;

    /// The current session, if any
    async fn get_session(&self) -> Result<Option<Session>, String>;

    /// Fetch the signed-in user
    async fn get_user(&self) -> Result<AuthUser, String>;
}

/// Supabase implementation of AuthBackend
pub struct SupabaseAuthBackend<'a> {
    client: &'a SupabaseClient,
}

impl<'a> SupabaseAuthBackend<'a> {
    pub fn new(client: &'a SupabaseClient) -> Self {
        Self { client }
    }
}

/// Log the full failure, then reduce it to the backend's message (empty
/// when the fault carried none, e.g. a transport error).
fn to_message(operation: &str, error: aincome_core::Error) -> String {
    log::warn!("auth backend {} failed: {}", operation, error);
    error.backend_message().unwrap_or_default().to_string()
}

#[async_trait]
impl<'a> AuthBackend for SupabaseAuthBackend<'a> {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: Option<serde_json::Value>,
    ) -> Result<AuthData, String> {
        self.client
            .sign_up(email, password, metadata.as_ref())
            .await
            .map_err(|e| to_message("sign_up", e))
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthData, String> {
        self.client
            .sign_in_with_password(email, password)
            .await
            .map_err(|e| to_message("sign_in", e))
    }

    async fn sign_out(&self) -> Result<(), String> {
        self.client
            .sign_out()
            .await
            .map_err(|e| to_message("sign_out", e))
    }

    async fn reset_password_for_email(&self, email: &str) -> Result<(), String> {
        self.client
            .reset_password_for_email(email)
            .await
            .map_err(|e| to_message("reset_password", e))
    }

    async fn update_user(&self, attributes: UserAttributes) -> Result<AuthUser, String> {
        self.client
            .update_user(&attributes)
            .await
            .map_err(|e| to_message("update_user", e))
    }

    async fn get_session(&self) -> Result<Option<Session>, String> {
        self.client
            .get_session()
            .await
            .map_err(|e| to_message("get_session", e))
    }

    async fn get_user(&self) -> Result<AuthUser, String> {
        self.client
            .get_user()
            .await
            .map_err(|e| to_message("get_user", e))
    }
}
