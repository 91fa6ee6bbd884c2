//! Tauri Commands for the House Catalogue
//!
//! Read-only: houses added in the UI live only in the view session.

use tauri::State;
use crate::domain::House;
use crate::repository::Repository;
use crate::AppState;

/// List all houses in id order
#[tauri::command]
pub async fn list_houses(state: State<'_, AppState>) -> Result<Vec<House>, String> {
    let houses = state.house_repo.list().await.map_err(|e| e.to_string())?;
    log::info!("list_houses -> {}", houses.len());
    Ok(houses)
}

/// Get house by ID
#[tauri::command]
pub async fn get_house(state: State<'_, AppState>, id: u32) -> Result<Option<House>, String> {
    state.house_repo.find_by_id(id).await.map_err(|e| e.to_string())
}
