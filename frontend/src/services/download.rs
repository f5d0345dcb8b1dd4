//! Client-side download of the parsed response as a JSON file.

use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::types::{AppError, AppResult};

/// Serialize the response exactly as received, indented by two spaces.
pub fn pretty_json(value: &Value) -> AppResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::Download(e.to_string()))
}

/// Object URL revoked when dropped.
struct ObjectUrl(String);

impl ObjectUrl {
    fn for_blob(blob: &Blob) -> AppResult<Self> {
        Url::create_object_url_with_blob(blob)
            .map(ObjectUrl)
            .map_err(js_error)
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if let Err(e) = Url::revoke_object_url(&self.0) {
            log::warn!("Failed to revoke object URL: {:?}", e);
        }
    }
}

/// Trigger a browser save of `value` under `file_name`.
pub fn save_json(value: &Value, file_name: &str) -> AppResult<()> {
    let json = pretty_json(value)?;

    let parts = js_sys::Array::of1(&JsValue::from_str(&json));
    let options = BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_error)?;

    let url = ObjectUrl::for_blob(&blob)?;

    let anchor: HtmlAnchorElement = gloo_utils::document()
        .create_element("a")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| AppError::Download("Created element is not an anchor".to_string()))?;
    anchor.set_href(url.as_str());
    anchor.set_download(file_name);
    anchor.click();

    log::debug!("Saved {} ({} bytes)", file_name, json.len());
    Ok(())
}

fn js_error(err: JsValue) -> AppError {
    AppError::Download(format!("{:?}", err))
}
