//! Browser adapter.
//!
//! Runs once the wasm module is instantiated: highlights the navigation on every
//! page, then wires up whichever page behavior matches `<body id>`. All rules
//! live in [`crate::pages`] and [`crate::pricing`]; this module only reads and
//! writes the DOM.

mod booking;
mod dom;
mod gallery;
mod nav;
mod packages;

use wasm_bindgen::prelude::*;

use crate::pages::{BOOKING_PAGE, GALLERY_PAGE, PACKAGES_PAGE};

/// Failures while binding page behavior to the DOM
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    #[error("No global window")]
    NoWindow,

    #[error("No document on window")]
    NoDocument,

    #[error("Missing element #{0}")]
    MissingElement(String),

    #[error("Element #{0} has an unexpected type")]
    WrongElementType(String),

    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<JsValue> for BindError {
    fn from(value: JsValue) -> Self {
        BindError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<BindError> for JsValue {
    fn from(err: BindError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Entry point called by the generated JS glue on load
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    run().map_err(|e| {
        tracing::error!("Page setup failed: {}", e);
        e.into()
    })
}

fn run() -> Result<(), BindError> {
    let window = web_sys::window().ok_or(BindError::NoWindow)?;
    let document = window.document().ok_or(BindError::NoDocument)?;

    nav::highlight(&window, &document)?;

    let page = document.body().map(|body| body.id()).unwrap_or_default();
    match page.as_str() {
        PACKAGES_PAGE => packages::render(&document),
        BOOKING_PAGE => booking::bind(&document),
        GALLERY_PAGE => gallery::bind(&document),
        _ => Ok(()),
    }
}
