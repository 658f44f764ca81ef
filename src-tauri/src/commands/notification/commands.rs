//! Tauri commands for notifications
//!
//! Thin wrappers over the presentation logic. All of these are
//! fire-and-forget: they schedule a modal and return before the user has
//! responded.

use tauri::AppHandle;

use super::presenter::DialogPresenter;
use super::service;
use super::types::ToastRequest;

/// Present a toast-style message
#[tauri::command]
pub fn show_toast(app: AppHandle, request: ToastRequest) {
    service::show_toast_impl(&DialogPresenter::new(app), request);
}

/// Present a success toast
#[tauri::command]
pub fn toast_success(app: AppHandle, message: String, title: Option<String>) {
    service::toast_success_impl(&DialogPresenter::new(app), message, title);
}

/// Present an error toast
#[tauri::command]
pub fn toast_error(app: AppHandle, message: String, title: Option<String>) {
    service::toast_error_impl(&DialogPresenter::new(app), message, title);
}

/// Present an info toast
#[tauri::command]
pub fn toast_info(app: AppHandle, message: String, title: Option<String>) {
    service::toast_info_impl(&DialogPresenter::new(app), message, title);
}

/// Present a warning toast
#[tauri::command]
pub fn toast_warning(app: AppHandle, message: String, title: Option<String>) {
    service::toast_warning_impl(&DialogPresenter::new(app), message, title);
}
