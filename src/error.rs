//! Error type shared by both views.

use wasm_bindgen::JsValue;

/// Failures raised while talking to the host page.
///
/// Bad numeric input (mismatched lengths, empty arrays, a degenerate time
/// range) is never reported here; it only shows up as odd rendering.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("element `{selector}` not found")]
    MissingElement { selector: String },
    #[error("element `{selector}` is not a <template>")]
    NotATemplate { selector: String },
    #[error("js call failed: {0}")]
    Js(String),
    #[error("invalid layout: {0}")]
    Layout(String),
}

impl ViewError {
    pub(crate) fn missing(selector: &str) -> Self {
        ViewError::MissingElement {
            selector: selector.to_string(),
        }
    }
}

impl From<JsValue> for ViewError {
    fn from(value: JsValue) -> Self {
        let msg = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        ViewError::Js(msg)
    }
}

impl From<ViewError> for JsValue {
    fn from(err: ViewError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type Result<T, E = ViewError> = std::result::Result<T, E>;
