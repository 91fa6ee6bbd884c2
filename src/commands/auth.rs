//! Auth Commands
//!
//! Frontend bindings for login, logout and session status.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::AuthSnapshot;
use super::{invoke, js_error};

#[derive(Serialize)]
struct LoginArgs<'a> {
    email: &'a str,
    password: &'a str,
}

pub async fn login(email: &str, password: &str) -> Result<AuthSnapshot, String> {
    let js_args = serde_wasm_bindgen::to_value(&LoginArgs { email, password }).map_err(|e| e.to_string())?;
    let result = invoke("login", js_args).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn logout() -> Result<AuthSnapshot, String> {
    let result = invoke("logout", JsValue::NULL).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn auth_status() -> Result<AuthSnapshot, String> {
    let result = invoke("auth_status", JsValue::NULL).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
