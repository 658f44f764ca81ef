//! Notification request types

use serde::Deserialize;

/// Callback invoked by the platform after the user presses a button
pub type Callback = Box<dyn FnOnce() + Send + 'static>;

/// Toast category; keys the fixed title and glyph tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
}

impl ToastKind {
    /// Title used when the caller does not supply one
    pub fn default_title(&self) -> &'static str {
        match self {
            ToastKind::Success => "Success",
            ToastKind::Error => "Error",
            ToastKind::Info => "Info",
            ToastKind::Warning => "Warning",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            ToastKind::Success => "✅",
            ToastKind::Error => "❌",
            ToastKind::Info => "ℹ️",
            ToastKind::Warning => "⚠️",
        }
    }
}

/// A toast-style message
#[derive(Debug, Clone, Deserialize)]
pub struct ToastRequest {
    /// Overrides the per-kind default title
    #[serde(default)]
    pub title: Option<String>,
    pub message: String,
    /// Accepted for interface compatibility. The modal is dismissed only by
    /// explicit acknowledgment, so this value is never read.
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(rename = "type")]
    pub kind: ToastKind,
}

/// A two-choice dialog gating an action behind explicit consent
///
/// Exactly one of the two callbacks fires, chosen by the user at some later
/// point; presentation itself returns immediately.
pub struct ConfirmRequest {
    pub title: String,
    pub message: String,
    /// Confirm button label, "Confirm" when absent
    pub confirm_label: Option<String>,
    /// Cancel button label, "Cancel" when absent
    pub cancel_label: Option<String>,
    /// Style the confirm button as destructive
    pub destructive: bool,
    pub on_confirm: Callback,
    pub on_cancel: Option<Callback>,
}
