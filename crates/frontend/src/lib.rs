//! To-do list - Yew WASM front end.
//!
//! Mounts the root [`App`] into the `#app` host element. The router is
//! installed by `App` itself.

mod api;
mod app;
mod components;
mod hooks;
mod pages;

pub use app::{App, Route};

use thiserror::Error;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

/// Id of the element the application mounts into.
pub const HOST_ELEMENT_ID: &str = "app";

/// Startup failures, handed back to the JS loader unchanged.
#[derive(Error, Debug, PartialEq)]
pub enum MountError {
    #[error("host element #{0} not found")]
    MissingHost(&'static str),
}

impl From<MountError> for JsValue {
    fn from(err: MountError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// The element to mount into, if the page has one.
pub fn host_element(document: Option<Document>) -> Result<Element, MountError> {
    document
        .and_then(|document| document.get_element_by_id(HOST_ELEMENT_ID))
        .ok_or(MountError::MissingHost(HOST_ELEMENT_ID))
}

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    let host = host_element(web_sys::window().and_then(|window| window.document()))?;

    yew::Renderer::<App>::with_root(host).render();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_document_is_an_error() {
        let err = host_element(None).unwrap_err();

        assert_eq!(err, MountError::MissingHost("app"));
        assert_eq!(err.to_string(), "host element #app not found");
    }
}
