//! Auth business logic
//!
//! The facade over the auth backend: each operation awaits exactly one
//! backend call and folds any failure into the response envelope. Control
//! never leaves these functions through an error path.

use serde_json::json;

use super::backend::AuthBackend;
use super::types::{
    CurrentUserResponse, SessionResponse, SignInRequest, SignInResponse, SignUpRequest,
    SignUpResponse, StatusResponse, UpdatePasswordRequest,
};
use aincome_core::UserAttributes;

// Fallbacks for backend faults that carry no message
const DEFAULT_SIGN_UP_ERROR: &str = "Failed to sign up";
const DEFAULT_SIGN_IN_ERROR: &str = "Failed to sign in";
const DEFAULT_SIGN_OUT_ERROR: &str = "Failed to sign out";
const DEFAULT_RESET_PASSWORD_ERROR: &str = "Failed to send password reset email";
const DEFAULT_UPDATE_PASSWORD_ERROR: &str = "Failed to update password";
const DEFAULT_GET_SESSION_ERROR: &str = "Failed to get session";
const DEFAULT_GET_USER_ERROR: &str = "Failed to get user";

// Guidance substituted for known backend sign-in rejections
const EMAIL_NOT_CONFIRMED_HELP: &str =
    "Please confirm your email address before signing in. Check your inbox for the confirmation link.";
const INVALID_CREDENTIALS_HELP: &str =
    "Invalid email or password. Please check your credentials and try again.";
const USER_NOT_FOUND_HELP: &str = "No account found with this email. Please sign up first.";

fn or_default(message: String, default: &str) -> String {
    if message.is_empty() {
        default.to_string()
    } else {
        message
    }
}

/// Rewrite known backend sign-in failures into user-facing guidance.
/// Anything unrecognized passes through unchanged.
fn normalize_sign_in_error(message: String) -> String {
    let lowered = message.to_lowercase();
    if lowered.contains("email not confirmed") {
        EMAIL_NOT_CONFIRMED_HELP.to_string()
    } else if lowered.contains("invalid login credentials") {
        INVALID_CREDENTIALS_HELP.to_string()
    } else if lowered.contains("user not found") {
        USER_NOT_FOUND_HELP.to_string()
    } else {
        or_default(message, DEFAULT_SIGN_IN_ERROR)
    }
}

/// Register an account
pub async fn sign_up_impl<B: AuthBackend>(backend: &B, request: SignUpRequest) -> SignUpResponse {
    let metadata = request.name.as_ref().map(|name| json!({ "name": name }));

    match backend
        .sign_up(&request.email, &request.password, metadata)
        .await
    {
        Ok(data) => {
            // A created user without a session means the backend is holding
            // the account until the confirmation email is followed.
            let requires_email_confirmation = data.user.is_some() && data.session.is_none();
            SignUpResponse {
                data: Some(data),
                error: None,
                requires_email_confirmation,
            }
        }
        Err(message) => SignUpResponse {
            data: None,
            error: Some(or_default(message, DEFAULT_SIGN_UP_ERROR)),
            requires_email_confirmation: false,
        },
    }
}

/// Sign in with email and password
pub async fn sign_in_impl<B: AuthBackend>(backend: &B, request: SignInRequest) -> SignInResponse {
    match backend
        .sign_in_with_password(&request.email, &request.password)
        .await
    {
        Ok(data) => SignInResponse {
            data: Some(data),
            error: None,
        },
        Err(message) => SignInResponse {
            data: None,
            error: Some(normalize_sign_in_error(message)),
        },
    }
}

/// Sign out of the current session
pub async fn sign_out_impl<B: AuthBackend>(backend: &B) -> StatusResponse {
    match backend.sign_out().await {
        Ok(()) => StatusResponse::ok(),
        Err(message) => StatusResponse::error(or_default(message, DEFAULT_SIGN_OUT_ERROR)),
    }
}

/// Request a password-reset email
pub async fn reset_password_impl<B: AuthBackend>(backend: &B, email: String) -> StatusResponse {
    match backend.reset_password_for_email(&email).await {
        Ok(()) => StatusResponse::ok(),
        Err(message) => StatusResponse::error(or_default(message, DEFAULT_RESET_PASSWORD_ERROR)),
    }
}

/// Change the signed-in user's password
pub async fn update_password_impl<B: AuthBackend>(
    backend: &B,
    request: UpdatePasswordRequest,
) -> StatusResponse {
    match backend
        .update_user(UserAttributes::password(request.new_password))
        .await
    {
        Ok(_) => StatusResponse::ok(),
        Err(message) => StatusResponse::error(or_default(message, DEFAULT_UPDATE_PASSWORD_ERROR)),
    }
}

/// Fetch the current session
pub async fn get_session_impl<B: AuthBackend>(backend: &B) -> SessionResponse {
    match backend.get_session().await {
        Ok(session) => SessionResponse {
            data: session,
            error: None,
        },
        Err(message) => SessionResponse {
            data: None,
            error: Some(or_default(message, DEFAULT_GET_SESSION_ERROR)),
        },
    }
}

/// Fetch the signed-in user
pub async fn get_current_user_impl<B: AuthBackend>(backend: &B) -> CurrentUserResponse {
    match backend.get_user().await {
        Ok(user) => CurrentUserResponse {
            user: Some(user),
            error: None,
        },
        Err(message) => CurrentUserResponse {
            user: None,
            error: Some(or_default(message, DEFAULT_GET_USER_ERROR)),
        },
    }
}
