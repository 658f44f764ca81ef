//! Tauri Commands module
//!
//! Commands are called directly from the frontend via `invoke()`.

pub mod auth;
pub mod notification;

use aincome_core::SupabaseClient;
use std::sync::Arc;

/// Application state shared across all commands
pub struct AppState {
    pub auth: Arc<SupabaseClient>,
}

impl AppState {
    pub fn new(auth: SupabaseClient) -> Self {
        Self {
            auth: Arc::new(auth),
        }
    }
}
