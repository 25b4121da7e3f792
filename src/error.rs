use thiserror::Error;
use wasm_bindgen::JsValue;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures while attaching widgets to the page.
#[derive(Debug, Error)]
pub enum Error {
    #[error("No browser window available")]
    NoWindow,

    #[error("No document available")]
    NoDocument,

    #[error("Element '{0}' not found")]
    MissingElement(String),

    #[error("Element '{id}' is not a {expected}")]
    ElementType { id: String, expected: &'static str },

    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
