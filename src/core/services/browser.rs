use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileReader};

// IP recorded with an approval. Nothing here can see the real address.
pub const PLACEHOLDER_IP: &str = "127.0.0.1";

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

pub fn current_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

// Base URL of the running app, without any fragment.
pub fn app_base_url() -> String {
    web_sys::window()
        .map(|w| {
            let location = w.location();
            let origin = location.origin().unwrap_or_default();
            let path = location.pathname().unwrap_or_default();
            format!("{}{}", origin, path)
        })
        .unwrap_or_default()
}

pub fn set_hash(hash: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_hash(hash) {
            tracing::error!(error = %js_error(e), "failed to update location hash");
        }
    }
}

pub fn user_agent() -> String {
    web_sys::window()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_else(|| "unknown".to_string())
}

pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await.map(|_| ()).map_err(js_error)
}

// Short-lived URL for previewing a picked file. Lives until the page is
// unloaded.
pub fn object_url(file: &File) -> Result<String, String> {
    web_sys::Url::create_object_url_with_blob(file).map_err(js_error)
}

// Reads a picked file as a `data:` URL.
pub async fn read_as_data_url(file: &File) -> Result<String, String> {
    let reader = FileReader::new().map_err(js_error)?;

    let promise = Promise::new(&mut |resolve, reject| {
        let on_load = {
            let reader = reader.clone();
            Closure::once_into_js(move || {
                let result = reader.result().unwrap_or(JsValue::NULL);
                let _ = resolve.call1(&JsValue::UNDEFINED, &result);
            })
        };
        let on_error = Closure::once_into_js(move || {
            let _ = reject.call1(&JsValue::UNDEFINED, &JsValue::from_str("file read failed"));
        });
        reader.set_onload(Some(on_load.unchecked_ref()));
        reader.set_onerror(Some(on_error.unchecked_ref()));
    });

    reader.read_as_data_url(file).map_err(js_error)?;
    let value = JsFuture::from(promise).await.map_err(js_error)?;
    value
        .as_string()
        .ok_or_else(|| "file reader returned no data".to_string())
}
