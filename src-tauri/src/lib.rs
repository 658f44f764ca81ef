//! Aincome - personal income and expense tracker
//!
//! Tauri application shell: plugin registration, auth backend state, and
//! command wiring.

mod commands;

use tauri::{Manager, WindowEvent};

use aincome_core::{AuthConfig, SupabaseClient};
use commands::notification::{self, ConfirmRequest, DialogPresenter};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        // Register Tauri commands
        .invoke_handler(tauri::generate_handler![
            // Auth
            commands::auth::sign_up,
            commands::auth::sign_in,
            commands::auth::sign_out,
            commands::auth::reset_password,
            commands::auth::update_password,
            commands::auth::get_session,
            commands::auth::get_current_user,
            // Notifications
            commands::notification::show_toast,
            commands::notification::toast_success,
            commands::notification::toast_error,
            commands::notification::toast_info,
            commands::notification::toast_warning,
        ])
        .setup(|app| {
            // Setup logging
            app.handle().plugin(
                tauri_plugin_log::Builder::default()
                    .level(log::LevelFilter::Info)
                    .build(),
            )?;

            // Initialize the auth backend client
            match AuthConfig::from_env().and_then(|config| SupabaseClient::new(&config)) {
                Ok(client) => {
                    log::info!("Auth backend client initialized");
                    app.manage(commands::AppState::new(client));
                }
                Err(e) => {
                    log::error!("Failed to initialize auth backend: {}", e);
                    notification::toast_error_impl(
                        &DialogPresenter::new(app.handle().clone()),
                        format!("Sign-in is unavailable: {}", e),
                        None,
                    );
                }
            }

            Ok(())
        })
        .on_window_event(|window, event| {
            if let WindowEvent::CloseRequested { api, .. } = event {
                // Quitting is gated behind explicit confirmation
                api.prevent_close();
                let app = window.app_handle().clone();
                let presenter = DialogPresenter::new(app.clone());
                notification::show_confirm_impl(
                    &presenter,
                    ConfirmRequest {
                        title: "Quit Aincome?".to_string(),
                        message: "Any sync in progress will be stopped.".to_string(),
                        confirm_label: Some("Quit".to_string()),
                        cancel_label: None,
                        destructive: true,
                        on_confirm: Box::new(move || app.exit(0)),
                        on_cancel: None,
                    },
                );
            }
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
