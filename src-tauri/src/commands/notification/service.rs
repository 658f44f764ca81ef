//! Notification presentation logic
//!
//! Resolves toast titles/glyphs and button layouts, then hands the modal to
//! the presenter. Framework-independent and testable.

use super::presenter::{ButtonStyle, ModalButton, ModalPresenter, ModalRequest};
use super::types::{ConfirmRequest, ToastKind, ToastRequest};

const ACKNOWLEDGE_LABEL: &str = "OK";
const DEFAULT_CONFIRM_LABEL: &str = "Confirm";
const DEFAULT_CANCEL_LABEL: &str = "Cancel";

/// Resolved modal title: per-kind glyph plus the explicit or per-kind title
fn toast_title(kind: ToastKind, title: Option<&str>) -> String {
    format!("{} {}", kind.glyph(), title.unwrap_or_else(|| kind.default_title()))
}

/// Present a toast-style message with a single acknowledgment button
///
/// `request.duration` is a documented no-op: the modal blocks until the
/// user acknowledges it.
pub fn show_toast_impl<P: ModalPresenter>(presenter: &P, request: ToastRequest) {
    let style = if request.kind == ToastKind::Error {
        ButtonStyle::Destructive
    } else {
        ButtonStyle::Default
    };

    presenter.present(ModalRequest {
        title: toast_title(request.kind, request.title.as_deref()),
        message: request.message,
        buttons: vec![ModalButton::new(ACKNOWLEDGE_LABEL, style)],
        cancelable: true,
    });
}

pub fn toast_success_impl<P: ModalPresenter>(
    presenter: &P,
    message: String,
    title: Option<String>,
) {
    show_toast_impl(
        presenter,
        ToastRequest {
            title,
            message,
            duration: None,
            kind: ToastKind::Success,
        },
    );
}

pub fn toast_error_impl<P: ModalPresenter>(presenter: &P, message: String, title: Option<String>) {
    show_toast_impl(
        presenter,
        ToastRequest {
            title,
            message,
            duration: None,
            kind: ToastKind::Error,
        },
    );
}

pub fn toast_info_impl<P: ModalPresenter>(presenter: &P, message: String, title: Option<String>) {
    show_toast_impl(
        presenter,
        ToastRequest {
            title,
            message,
            duration: None,
            kind: ToastKind::Info,
        },
    );
}

pub fn toast_warning_impl<P: ModalPresenter>(
    presenter: &P,
    message: String,
    title: Option<String>,
) {
    show_toast_impl(
        presenter,
        ToastRequest {
            title,
            message,
            duration: None,
            kind: ToastKind::Warning,
        },
    );
}

/// Present a confirm/cancel dialog
///
/// Cancel is listed first, confirm second. The confirm button is styled
/// destructive when the request flags it.
pub fn show_confirm_impl<P: ModalPresenter>(presenter: &P, request: ConfirmRequest) {
    let confirm_style = if request.destructive {
        ButtonStyle::Destructive
    } else {
        ButtonStyle::Default
    };

    let cancel = ModalButton::with_callback(
        request
            .cancel_label
            .unwrap_or_else(|| DEFAULT_CANCEL_LABEL.to_string()),
        ButtonStyle::Cancel,
        request.on_cancel,
    );
    let confirm = ModalButton::with_callback(
        request
            .confirm_label
            .unwrap_or_else(|| DEFAULT_CONFIRM_LABEL.to_string()),
        confirm_style,
        Some(request.on_confirm),
    );

    presenter.present(ModalRequest {
        title: request.title,
        message: request.message,
        buttons: vec![cancel, confirm],
        cancelable: true,
    });
}
