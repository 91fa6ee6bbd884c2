//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod house_cmd;
mod auth_cmd;

pub use house_cmd::*;
pub use auth_cmd::*;
