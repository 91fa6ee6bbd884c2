//! Auth Commands
//!
//! Login, logout and session status for the frontend's auth gate.

use tauri::State;
use crate::domain::AuthSnapshot;
use crate::AppState;

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

#[tauri::command]
pub async fn login(
    state: State<'_, AppState>,
    email: String,
    password: String,
) -> Result<AuthSnapshot, String> {
    state.auth.login(&email, &password, now()).await.map_err(|e| {
        let _ = rolling_logger::warn(&format!("Login failed for {}: {}", email, e));
        e.to_string()
    })
}

#[tauri::command]
pub async fn logout(state: State<'_, AppState>) -> Result<AuthSnapshot, String> {
    Ok(state.auth.logout().await)
}

#[tauri::command]
pub async fn auth_status(state: State<'_, AppState>) -> Result<AuthSnapshot, String> {
    Ok(state.auth.status(now()).await)
}
