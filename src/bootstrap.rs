//! One-time page setup: stylesheet rule, viewport meta and overlay container.

use crate::constants::*;
use crate::dom::js_err;
use anyhow::anyhow;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::JsCast;
use web_sys as web;

static BOOTSTRAPPED: AtomicBool = AtomicBool::new(false);

/// Prepare the page and return the overlay container.
///
/// Only the first call touches the document; later calls return `Ok(None)`.
pub fn bootstrap(document: &web::Document) -> anyhow::Result<Option<web::HtmlElement>> {
    if BOOTSTRAPPED.swap(true, Ordering::SeqCst) {
        return Ok(None);
    }
    add_styles(document)?;
    if ensure_viewport_meta(document)? {
        log::info!("[bootstrap] added viewport meta");
    }
    let overlay = create_overlay(document)?;
    log::info!("[bootstrap] overlay attached");
    Ok(Some(overlay))
}

pub fn add_styles(document: &web::Document) -> anyhow::Result<()> {
    let head = document.head().ok_or_else(|| anyhow!("document has no <head>"))?;
    let style = document.create_element("style").map_err(js_err)?;
    style.set_text_content(Some(HEART_STYLE));
    head.append_child(&style).map_err(js_err)?;
    Ok(())
}

/// Insert the default viewport meta unless the page already declares one.
/// Returns whether a tag was added.
pub fn ensure_viewport_meta(document: &web::Document) -> anyhow::Result<bool> {
    if document
        .query_selector(VIEWPORT_SELECTOR)
        .map_err(js_err)?
        .is_some()
    {
        return Ok(false);
    }
    let head = document.head().ok_or_else(|| anyhow!("document has no <head>"))?;
    let meta = document.create_element("meta").map_err(js_err)?;
    meta.set_attribute("name", "viewport").map_err(js_err)?;
    meta.set_attribute("content", VIEWPORT_CONTENT).map_err(js_err)?;
    head.append_child(&meta).map_err(js_err)?;
    Ok(true)
}

pub fn create_overlay(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    let body = document.body().ok_or_else(|| anyhow!("document has no <body>"))?;
    let overlay: web::HtmlElement = document
        .create_element("div")
        .map_err(js_err)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("{:?}", e))?;
    overlay.style().set_css_text(&overlay_css());
    body.append_child(&overlay).map_err(js_err)?;
    Ok(overlay)
}
