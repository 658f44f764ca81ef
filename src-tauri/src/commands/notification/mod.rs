//! Notification module
//!
//! Toast-style messages and confirm dialogs presented through the platform
//! modal, behind a presenter trait for testability.
//!
//! ## Structure
//! - `types.rs` - Toast/confirm request types
//! - `presenter.rs` - ModalPresenter trait and native dialog implementation
//! - `service.rs` - Presentation logic (testable, framework-independent)
//! - `commands.rs` - Tauri command wrappers

pub mod commands;
pub mod presenter;
pub mod service;
pub mod types;


// Re-export Tauri commands for registration
pub use commands::{show_toast, toast_error, toast_info, toast_success, toast_warning};

// Re-export the in-process API for the app shell
pub use presenter::{DialogPresenter, ModalPresenter};
pub use service::{show_confirm_impl, show_toast_impl, toast_error_impl};
pub use types::{ConfirmRequest, ToastKind, ToastRequest};
