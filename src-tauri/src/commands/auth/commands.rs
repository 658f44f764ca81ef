//! Tauri commands for authentication
//!
//! Thin wrappers that connect Tauri's command system to the business logic.
//! Every command resolves with an envelope; none of them reject.

use tauri::State;

use super::backend::SupabaseAuthBackend;
use super::service;
use super::types::{
    CurrentUserResponse, SessionResponse, SignInRequest, SignInResponse, SignUpRequest,
    SignUpResponse, StatusResponse, UpdatePasswordRequest,
};
use crate::commands::AppState;

/// Register a new account
#[tauri::command]
pub async fn sign_up(
    state: State<'_, AppState>,
    request: SignUpRequest,
) -> Result<SignUpResponse, String> {
    let backend = SupabaseAuthBackend::new(&state.auth);
    Ok(service::sign_up_impl(&backend, request).await)
}

/// Sign in with email and password
#[tauri::command]
pub async fn sign_in(
    state: State<'_, AppState>,
    request: SignInRequest,
) -> Result<SignInResponse, String> {
    let backend = SupabaseAuthBackend::new(&state.auth);
    Ok(service::sign_in_impl(&backend, request).await)
}

/// Sign out of the current session
#[tauri::command]
pub async fn sign_out(state: State<'_, AppState>) -> Result<StatusResponse, String> {
    let backend = SupabaseAuthBackend::new(&state.auth);
    Ok(service::sign_out_impl(&backend).await)
}

/// Send a password-reset email
#[tauri::command]
pub async fn reset_password(
    state: State<'_, AppState>,
    email: String,
) -> Result<StatusResponse, String> {
    let backend = SupabaseAuthBackend::new(&state.auth);
    Ok(service::reset_password_impl(&backend, email).await)
}

/// Change the signed-in user's password
#[tauri::command]
pub async fn update_password(
    state: State<'_, AppState>,
    request: UpdatePasswordRequest,
) -> Result<StatusResponse, String> {
    let backend = SupabaseAuthBackend::new(&state.auth);
    Ok(service::update_password_impl(&backend, request).await)
}

/// Fetch the current session
#[tauri::command]
pub async fn get_session(state: State<'_, AppState>) -> Result<SessionResponse, String> {
    let backend = SupabaseAuthBackend::new(&state.auth);
    Ok(service::get_session_impl(&backend).await)
}

/// Fetch the signed-in user
#[tauri::command]
pub async fn get_current_user(state: State<'_, AppState>) -> Result<CurrentUserResponse, String> {
    let backend = SupabaseAuthBackend::new(&state.auth);
    Ok(service::get_current_user_impl(&backend).await)
}
