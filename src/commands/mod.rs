//! API Command Wrappers
//!
//! Frontend bindings to the backend HTTP API, organized by domain.

mod todo;

use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

// Re-export all public items
pub use todo::*;

const API_BASE: &str = "/api";

fn js_err(e: JsValue) -> String {
    format!("{:?}", e)
}

/// Send a request to the API and decode the JSON response
///
/// Any non-2xx status is an error.
async fn fetch_json<T: DeserializeOwned>(
    method: &str,
    path: &str,
    body: Option<String>,
) -> Result<T, String> {
    let url = format!("{}{}", API_BASE, path);

    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = &body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(&url, &opts).map_err(js_err)?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_err)?;
    }

    let window = web_sys::window().ok_or("no window")?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let response: Response = value.dyn_into().map_err(js_err)?;

    if !response.ok() {
        return Err(format!("{} {} failed: HTTP {}", method, url, response.status()));
    }

    let json = JsFuture::from(response.json().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}
