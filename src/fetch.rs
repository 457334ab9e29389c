//! Data Fetching
//!
//! Loads the JSON documents under `data/`, always bypassing the HTTP cache
//! so edits to the files show up on the next page load.

use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCache, RequestInit, Response};

use crate::error::{js_message, LoadError};
use crate::models::decode_records;

pub async fn fetch_json<T: DeserializeOwned>(path: &str) -> Result<T, LoadError> {
    let window = web_sys::window().ok_or(LoadError::NoWindow)?;
    let network = |e: JsValue| LoadError::Network { path: path.to_string(), message: js_message(&e) };

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_cache(RequestCache::NoStore);
    let request = Request::new_with_str_and_init(path, &init).map_err(network)?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network)?
        .dyn_into()
        .map_err(network)?;
    if !response.ok() {
        return Err(LoadError::Status { path: path.to_string(), status: response.status() });
    }

    let parse = |e: JsValue| LoadError::Parse { path: path.to_string(), message: js_message(&e) };
    let body = JsFuture::from(response.json().map_err(parse)?).await.map_err(parse)?;

    serde_wasm_bindgen::from_value(body)
        .map_err(|e| LoadError::Decode { path: path.to_string(), message: e.to_string() })
}

/// Fetch a JSON array and decode its entries one by one, so a single
/// malformed entry costs one card instead of the whole section.
pub async fn fetch_records<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, LoadError> {
    let values: Vec<serde_json::Value> = fetch_json(path).await?;
    let (records, skipped) = decode_records(values);
    if skipped > 0 {
        log::warn!("[Fetch] Skipped {} malformed entries in {}", skipped, path);
    }
    Ok(records)
}
