//! Auth module
//!
//! A uniform, never-throwing facade over the remote auth backend, using
//! trait-based dependency injection for testability.
//!
//! ## Structure
//! - `types.rs` - Request/response envelopes
//! - `backend.rs` - AuthBackend trait and Supabase implementation
//! - `service.rs` - Business logic (testable, framework-independent)
//! - `commands.rs` - Tauri command wrappers

pub mod backend;
pub mod commands;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export Tauri commands for registration
pub use commands::{
    get_current_user, get_session, reset_password, sign_in, sign_out, sign_up, update_password,
};

// Re-export types for external use
pub use types::{
    CurrentUserResponse, SessionResponse, SignInRequest, SignInResponse, SignUpRequest,
    SignUpResponse, StatusResponse, UpdatePasswordRequest,
};

// Re-export backend trait for testing
pub use backend::AuthBackend;
