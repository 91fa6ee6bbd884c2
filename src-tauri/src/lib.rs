//! Globomantics Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - auth: Credential checks and session tokens
//! - commands: Tauri command handlers

use std::path::PathBuf;
use tauri::Manager;

mod domain;
mod repository;
mod auth;
mod config;
mod commands;

use auth::AuthService;
use config::AppConfig;
use repository::{init_db, HouseRepository};

/// Application state shared across commands
pub struct AppState {
    pub house_repo: HouseRepository,
    pub auth: AuthService,
}

/// Get database path from app handle
fn get_db_path(app_handle: &tauri::AppHandle) -> Result<PathBuf, String> {
    let app_dir = app_handle.path().app_data_dir().map_err(|e| e.to_string())?;
    std::fs::create_dir_all(&app_dir).map_err(|e| e.to_string())?;
    Ok(app_dir.join("globomantics.db"))
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();

            // Initialize logging
            rolling_logger::init_logger(app_handle.path().app_log_dir()?, "Globomantics")?;

            let config = AppConfig::load_or_init(&app_handle.path().app_config_dir()?)?;
            let db_path = get_db_path(&app_handle)?;

            // The catalogue is small; open and seed it before the window asks for it
            let db_state = tauri::async_runtime::block_on(init_db(&db_path))?;
            let house_repo = HouseRepository::new(db_state.conn.clone());
            match tauri::async_runtime::block_on(house_repo.seed_if_empty()) {
                Ok(0) => {}
                Ok(added) => {
                    let _ = rolling_logger::info(&format!("Seeded {} houses", added));
                }
                Err(e) => {
                    let _ = rolling_logger::error(&format!("Seeding failed: {}", e));
                }
            }
            let _ = rolling_logger::info(&format!("Database ready at {}", db_state.db_path.display()));

            app.manage(AppState {
                house_repo,
                auth: AuthService::new(&config),
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Houses
            commands::list_houses,
            commands::get_house,
            // Auth
            commands::login,
            commands::logout,
            commands::auth_status,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
