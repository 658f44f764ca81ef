//! Platform modal boundary
//!
//! Abstracts the native modal dialog for testability using trait-based
//! dependency injection, the same seam the auth module puts between its
//! service and the backend.

use tauri::{AppHandle, Runtime};
use tauri_plugin_dialog::{DialogExt, MessageDialogButtons, MessageDialogKind};

use super::types::Callback;

/// Button style understood by the platform modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Default,
    Cancel,
    Destructive,
}

/// One button on a modal, in presentation order
pub struct ModalButton {
    pub label: String,
    pub style: ButtonStyle,
    pub on_press: Option<Callback>,
}

impl ModalButton {
    pub fn new(label: impl Into<String>, style: ButtonStyle) -> Self {
        Self {
            label: label.into(),
            style,
            on_press: None,
        }
    }

    pub fn with_callback(
        label: impl Into<String>,
        style: ButtonStyle,
        on_press: Option<Callback>,
    ) -> Self {
        Self {
            label: label.into(),
            style,
            on_press,
        }
    }
}

/// A modal presentation request
pub struct ModalRequest {
    pub title: String,
    pub message: String,
    /// At most one button's callback is invoked, at the platform's leisure
    pub buttons: Vec<ModalButton>,
    /// Dismiss when the user taps outside the dialog
    pub cancelable: bool,
}

/// Platform modal trait - fire-and-forget presentation
///
/// `present` schedules the modal and returns immediately; the platform
/// invokes the pressed button's callback asynchronously.
pub trait ModalPresenter {
    fn present(&self, request: ModalRequest);
}

/// Native dialog implementation of ModalPresenter
pub struct DialogPresenter<R: Runtime> {
    app: AppHandle<R>,
}

impl<R: Runtime> DialogPresenter<R> {
    pub fn new(app: AppHandle<R>) -> Self {
        Self { app }
    }
}

impl<R: Runtime> ModalPresenter for DialogPresenter<R> {
    fn present(&self, request: ModalRequest) {
        let ModalRequest {
            title,
            message,
            buttons,
            // Outside-tap dismissal is the native dialog's own behavior;
            // nothing to forward.
            cancelable: _,
        } = request;

        // Native dialogs style by kind rather than per button
        let kind = if buttons.iter().any(|b| b.style == ButtonStyle::Destructive) {
            MessageDialogKind::Error
        } else {
            MessageDialogKind::Info
        };

        let mut positive: Option<ModalButton> = None;
        let mut negative: Option<ModalButton> = None;
        for button in buttons {
            match button.style {
                ButtonStyle::Cancel if negative.is_none() => negative = Some(button),
                _ if positive.is_none() => positive = Some(button),
                _ => {}
            }
        }
        let Some(positive) = positive else {
            return;
        };

        let dialog = self
            .app
            .dialog()
            .message(message)
            .title(title)
            .kind(kind);

        match negative {
            Some(negative) => {
                let on_confirm = positive.on_press;
                let on_cancel = negative.on_press;
                dialog
                    .buttons(MessageDialogButtons::OkCancelCustom(
                        positive.label,
                        negative.label,
                    ))
                    .show(move |confirmed| {
                        let pressed = if confirmed { on_confirm } else { on_cancel };
                        if let Some(callback) = pressed {
                            callback();
                        }
                    });
            }
            None => {
                let on_acknowledge = positive.on_press;
                dialog
                    .buttons(MessageDialogButtons::OkCustom(positive.label))
                    .show(move |_| {
                        if let Some(callback) = on_acknowledge {
                            callback();
                        }
                    });
            }
        }
    }
}
