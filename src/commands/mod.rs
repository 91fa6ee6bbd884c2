//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod house;
mod auth;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Turns a rejected invoke into the backend's error message
fn js_error(err: JsValue) -> String {
    err.as_string()
        .unwrap_or_else(|| js_sys::JSON::stringify(&err).map(String::from).unwrap_or_else(|_| "unknown error".to_string()))
}

pub use house::*;
pub use auth::*;
