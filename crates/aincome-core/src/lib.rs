//! # aincome-core
//!
//! Core auth plumbing for Aincome, shared between the Tauri shell and tests.
//!
//! This crate provides:
//! - Auth backend configuration (`config` module)
//! - Boundary models (`models` module)
//! - The Supabase auth REST client (`client` module)
//! - Unified error handling (`error` module)

pub mod client;
pub mod config;
pub mod error;
pub mod models;

// Re-exports for convenience
pub use client::{SupabaseClient, UserAttributes, RESET_PASSWORD_REDIRECT};
pub use config::AuthConfig;
pub use error::{Error, Result};
pub use models::{AuthData, AuthUser, Session};
