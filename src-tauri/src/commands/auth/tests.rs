//! Auth module tests
//!
//! Unit tests driving the service layer through a scripted mock backend.

use async_trait::async_trait;
use std::sync::Mutex;

use aincome_core::{AuthData, AuthUser, Session, UserAttributes};

use super::backend::AuthBackend;
use super::service::{
    get_current_user_impl, get_session_impl, reset_password_impl, sign_in_impl, sign_out_impl,
    sign_up_impl, update_password_impl,
};
use super::types::{SignInRequest, SignUpRequest, UpdatePasswordRequest};

// ============================================================================
// Fixtures
// ============================================================================

fn test_user(id: &str) -> AuthUser {
    AuthUser {
        id: id.to_string(),
        email: Some(format!("{}@example.com", id)),
        email_confirmed_at: None,
        user_metadata: None,
        created_at: None,
        updated_at: None,
    }
}

fn test_session(user: AuthUser) -> Session {
    Session {
        access_token: "access-token".to_string(),
        token_type: "bearer".to_string(),
        expires_in: Some(3600),
        expires_at: None,
        refresh_token: "refresh-token".to_string(),
        user,
    }
}

/// Sign-up outcome when the backend auto-confirms: user and session
fn confirmed_sign_up() -> AuthData {
    let user = test_user("user-1");
    AuthData {
        user: Some(user.clone()),
        session: Some(test_session(user)),
    }
}

/// Sign-up outcome while email confirmation is pending: user, no session
fn pending_sign_up() -> AuthData {
    AuthData {
        user: Some(test_user("user-1")),
        session: None,
    }
}

fn sign_up_request(name: Option<&str>) -> SignUpRequest {
    SignUpRequest {
        email: "user-1@example.com".to_string(),
        password: "password123".to_string(),
        name: name.map(str::to_string),
    }
}

fn sign_in_request() -> SignInRequest {
    SignInRequest {
        email: "user-1@example.com".to_string(),
        password: "password123".to_string(),
    }
}

// ============================================================================
// Mock Backend
// ============================================================================

/// Mock implementation of AuthBackend returning scripted results
struct MockAuthBackend {
    sign_up_result: Result<AuthData, String>,
    sign_in_result: Result<AuthData, String>,
    sign_out_result: Result<(), String>,
    reset_result: Result<(), String>,
    update_user_result: Result<AuthUser, String>,
    session_result: Result<Option<Session>, String>,
    user_result: Result<AuthUser, String>,
    /// Arguments captured from the last relevant call
    captured_metadata: Mutex<Option<serde_json::Value>>,
    captured_attributes: Mutex<Option<UserAttributes>>,
}

impl MockAuthBackend {
    fn new() -> Self {
        Self {
            sign_up_result: Ok(confirmed_sign_up()),
            sign_in_result: Ok(confirmed_sign_up()),
            sign_out_result: Ok(()),
            reset_result: Ok(()),
            update_user_result: Ok(test_user("user-1")),
            session_result: Ok(None),
            user_result: Ok(test_user("user-1")),
            captured_metadata: Mutex::new(None),
            captured_attributes: Mutex::new(None),
        }
    }

    fn with_sign_up(mut self, result: Result<AuthData, String>) -> Self {
        self.sign_up_result = result;
        self
    }

    fn with_sign_in(mut self, result: Result<AuthData, String>) -> Self {
        self.sign_in_result = result;
        self
    }

    fn with_sign_out(mut self, result: Result<(), String>) -> Self {
        self.sign_out_result = result;
        self
    }

    fn with_reset(mut self, result: Result<(), String>) -> Self {
        self.reset_result = result;
        self
    }

    fn with_update_user(mut self, result: Result<AuthUser, String>) -> Self {
        self.update_user_result = result;
        self
    }

    fn with_session(mut self, result: Result<Option<Session>, String>) -> Self {
        self.session_result = result;
        self
    }

    fn with_user(mut self, result: Result<AuthUser, String>) -> Self {
        self.user_result = result;
        self
    }
}

#[async_trait]
impl AuthBackend for MockAuthBackend {
    async fn sign_up(
        &self,
        _email: &str,
        _password: &str,
        metadata: Option<serde_json::Value>,
    ) -> Result<AuthData, String> {
        *self.captured_metadata.lock().unwrap() = metadata;
        self.sign_up_result.clone()
    }

    async fn sign_in_with_password(
        &self,
        _email: &str,
        _password: &str,
    ) -> Result<AuthData, String> {
        self.sign_in_result.clone()
    }

    async fn sign_out(&self) -> Result<(), String> {
        self.sign_out_result.clone()
    }

    async fn reset_password_for_email(&self, _email: &str) -> Result<(), String> {
        self.reset_result.clone()
    }

    async fn update_user(&self, attributes: UserAttributes) -> Result<AuthUser, String> {
        *self.captured_attributes.lock().unwrap() = Some(attributes);
        self.update_user_result.clone()
    }

    async fn get_session(&self) -> Result<Option<Session>, String> {
        self.session_result.clone()
    }

    async fn get_user(&self) -> Result<AuthUser, String> {
        self.user_result.clone()
    }
}

// ============================================================================
// sign_up Tests
// ============================================================================

#[tokio::test]
async fn test_sign_up_with_session_is_confirmed() {
    let backend = MockAuthBackend::new();

    let response = sign_up_impl(&backend, sign_up_request(None)).await;

    assert!(response.error.is_none());
    assert!(!response.requires_email_confirmation);
    assert!(response.data.unwrap().session.is_some());
}

#[tokio::test]
async fn test_sign_up_without_session_requires_confirmation() {
    let backend = MockAuthBackend::new().with_sign_up(Ok(pending_sign_up()));

    let response = sign_up_impl(&backend, sign_up_request(None)).await;

    assert!(response.error.is_none());
    assert!(response.requires_email_confirmation);
    assert!(response.data.unwrap().session.is_none());
}

#[tokio::test]
async fn test_sign_up_failure_keeps_backend_message() {
    let backend =
        MockAuthBackend::new().with_sign_up(Err("User already registered".to_string()));

    let response = sign_up_impl(&backend, sign_up_request(None)).await;

    assert!(response.data.is_none());
    assert!(!response.requires_email_confirmation);
    assert_eq!(response.error.unwrap(), "User already registered");
}

#[tokio::test]
async fn test_sign_up_failure_without_message_uses_default() {
    let backend = MockAuthBackend::new().with_sign_up(Err(String::new()));

    let response = sign_up_impl(&backend, sign_up_request(None)).await;

    assert_eq!(response.error.unwrap(), "Failed to sign up");
}

#[tokio::test]
async fn test_sign_up_forwards_name_as_metadata() {
    let backend = MockAuthBackend::new();

    sign_up_impl(&backend, sign_up_request(Some("Ada"))).await;
    assert_eq!(
        *backend.captured_metadata.lock().unwrap(),
        Some(serde_json::json!({ "name": "Ada" }))
    );

    sign_up_impl(&backend, sign_up_request(None)).await;
    assert_eq!(*backend.captured_metadata.lock().unwrap(), None);
}

// ============================================================================
// sign_in Tests
// ============================================================================

#[tokio::test]
async fn test_sign_in_success() {
    let backend = MockAuthBackend::new();

    let response = sign_in_impl(&backend, sign_in_request()).await;

    assert!(response.error.is_none());
    assert!(response.data.unwrap().session.is_some());
}

#[tokio::test]
async fn test_sign_in_email_not_confirmed_is_rewritten() {
    let backend = MockAuthBackend::new().with_sign_in(Err("Email not confirmed".to_string()));

    let response = sign_in_impl(&backend, sign_in_request()).await;

    assert_eq!(
        response.error.unwrap(),
        "Please confirm your email address before signing in. Check your inbox for the confirmation link."
    );
}

#[tokio::test]
async fn test_sign_in_rewrite_is_case_insensitive() {
    let backend =
        MockAuthBackend::new().with_sign_in(Err("EMAIL NOT CONFIRMED".to_string()));

    let response = sign_in_impl(&backend, sign_in_request()).await;

    assert_eq!(
        response.error.unwrap(),
        "Please confirm your email address before signing in. Check your inbox for the confirmation link."
    );
}

#[tokio::test]
async fn test_sign_in_invalid_credentials_is_rewritten() {
    let backend =
        MockAuthBackend::new().with_sign_in(Err("Invalid login credentials".to_string()));

    let response = sign_in_impl(&backend, sign_in_request()).await;

    assert_eq!(
        response.error.unwrap(),
        "Invalid email or password. Please check your credentials and try again."
    );
}

#[tokio::test]
async fn test_sign_in_user_not_found_is_rewritten() {
    let backend = MockAuthBackend::new()
        .with_sign_in(Err("User not found in this project".to_string()));

    let response = sign_in_impl(&backend, sign_in_request()).await;

    assert_eq!(
        response.error.unwrap(),
        "No account found with this email. Please sign up first."
    );
}

#[tokio::test]
async fn test_sign_in_unknown_error_passes_through() {
    let backend =
        MockAuthBackend::new().with_sign_in(Err("Request failed with status 502".to_string()));

    let response = sign_in_impl(&backend, sign_in_request()).await;

    assert_eq!(response.error.unwrap(), "Request failed with status 502");
}

#[tokio::test]
async fn test_sign_in_failure_without_message_uses_default() {
    let backend = MockAuthBackend::new().with_sign_in(Err(String::new()));

    let response = sign_in_impl(&backend, sign_in_request()).await;

    assert_eq!(response.error.unwrap(), "Failed to sign in");
}

// ============================================================================
// sign_out Tests
// ============================================================================

#[tokio::test]
async fn test_sign_out_success() {
    let backend = MockAuthBackend::new();

    let response = sign_out_impl(&backend).await;

    assert!(response.error.is_none());
}

#[tokio::test]
async fn test_sign_out_failure_keeps_backend_message() {
    let backend = MockAuthBackend::new().with_sign_out(Err("Session expired".to_string()));

    let response = sign_out_impl(&backend).await;

    assert_eq!(response.error.unwrap(), "Session expired");
}

#[tokio::test]
async fn test_sign_out_failure_without_message_uses_default() {
    let backend = MockAuthBackend::new().with_sign_out(Err(String::new()));

    let response = sign_out_impl(&backend).await;

    assert_eq!(response.error.unwrap(), "Failed to sign out");
}

// ============================================================================
// reset_password Tests
// ============================================================================

#[tokio::test]
async fn test_reset_password_success() {
    let backend = MockAuthBackend::new();

    let response = reset_password_impl(&backend, "user-1@example.com".to_string()).await;

    assert!(response.error.is_none());
}

#[tokio::test]
async fn test_reset_password_failure_without_message_uses_default() {
    let backend = MockAuthBackend::new().with_reset(Err(String::new()));

    let response = reset_password_impl(&backend, "user-1@example.com".to_string()).await;

    assert_eq!(response.error.unwrap(), "Failed to send password reset email");
}

// ============================================================================
// update_password Tests
// ============================================================================

#[tokio::test]
async fn test_update_password_success_sends_password_attribute() {
    let backend = MockAuthBackend::new();

    let response = update_password_impl(
        &backend,
        UpdatePasswordRequest {
            new_password: "new-password".to_string(),
        },
    )
    .await;

    assert!(response.error.is_none());
    let captured = backend.captured_attributes.lock().unwrap();
    assert_eq!(captured.as_ref().unwrap().password.as_deref(), Some("new-password"));
    assert!(captured.as_ref().unwrap().email.is_none());
}

#[tokio::test]
async fn test_update_password_failure_without_message_uses_default() {
    let backend = MockAuthBackend::new().with_update_user(Err(String::new()));

    let response = update_password_impl(
        &backend,
        UpdatePasswordRequest {
            new_password: "new-password".to_string(),
        },
    )
    .await;

    assert_eq!(response.error.unwrap(), "Failed to update password");
}

// ============================================================================
// get_session Tests
// ============================================================================

#[tokio::test]
async fn test_get_session_none_is_not_an_error() {
    let backend = MockAuthBackend::new();

    let response = get_session_impl(&backend).await;

    assert!(response.data.is_none());
    assert!(response.error.is_none());
}

#[tokio::test]
async fn test_get_session_returns_current_session() {
    let session = test_session(test_user("user-1"));
    let backend = MockAuthBackend::new().with_session(Ok(Some(session.clone())));

    let response = get_session_impl(&backend).await;

    assert_eq!(response.data.unwrap(), session);
}

#[tokio::test]
async fn test_get_session_failure_without_message_uses_default() {
    let backend = MockAuthBackend::new().with_session(Err(String::new()));

    let response = get_session_impl(&backend).await;

    assert_eq!(response.error.unwrap(), "Failed to get session");
}

#[tokio::test]
async fn test_get_session_is_idempotent() {
    let backend =
        MockAuthBackend::new().with_session(Ok(Some(test_session(test_user("user-1")))));

    let first = get_session_impl(&backend).await;
    let second = get_session_impl(&backend).await;

    assert_eq!(first, second);
}

// ============================================================================
// get_current_user Tests
// ============================================================================

#[tokio::test]
async fn test_get_current_user_success() {
    let backend = MockAuthBackend::new();

    let response = get_current_user_impl(&backend).await;

    assert!(response.error.is_none());
    assert_eq!(response.user.unwrap().id, "user-1");
}

#[tokio::test]
async fn test_get_current_user_failure_keeps_backend_message() {
    let backend = MockAuthBackend::new().with_user(Err("Auth session missing".to_string()));

    let response = get_current_user_impl(&backend).await;

    assert!(response.user.is_none());
    assert_eq!(response.error.unwrap(), "Auth session missing");
}

#[tokio::test]
async fn test_get_current_user_failure_without_message_uses_default() {
    let backend = MockAuthBackend::new().with_user(Err(String::new()));

    let response = get_current_user_impl(&backend).await;

    assert_eq!(response.error.unwrap(), "Failed to get user");
}

#[tokio::test]
async fn test_get_current_user_is_idempotent() {
    let backend = MockAuthBackend::new();

    let first = get_current_user_impl(&backend).await;
    let second = get_current_user_impl(&backend).await;

    assert_eq!(first, second);
}
