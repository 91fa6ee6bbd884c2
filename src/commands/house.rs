//! House Commands
//!
//! Frontend bindings for the house catalogue.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::House;
use super::{invoke, js_error};

#[derive(Serialize)]
struct IdArgs {
    id: u32,
}

pub async fn list_houses() -> Result<Vec<House>, String> {
    let result = invoke("list_houses", JsValue::NULL).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn get_house(id: u32) -> Result<Option<House>, String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    let result = invoke("get_house", js_args).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
