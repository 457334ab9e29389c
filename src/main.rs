//! Heart in Action Site Frontend Entry Point

mod app;
mod config;
mod error;
mod fetch;
mod format;
mod markup;
mod models;
mod page;
mod progress;
mod sections;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(app::boot);
        if let Err(e) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
            web_sys::console::error_1(&format!("[Boot] Could not wait for DOMContentLoaded: {:?}", e).into());
        }
    } else {
        app::boot();
    }
}
