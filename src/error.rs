//! Load Errors

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Why a data section could not be rendered
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no browser window")]
    NoWindow,
    #[error("request for {path} failed: {message}")]
    Network { path: String, message: String },
    #[error("{path} answered with HTTP {status}")]
    Status { path: String, status: u16 },
    #[error("{path} is not valid JSON: {message}")]
    Parse { path: String, message: String },
    #[error("{path} has an unexpected shape: {message}")]
    Decode { path: String, message: String },
}

/// Best-effort message from a thrown JS value
pub fn js_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{:?}", value)
}
