// Browser tests for page bootstrap (run with `wasm-pack test --headless`).
#![cfg(target_arch = "wasm32")]

use heart_burst::bootstrap::{bootstrap, create_overlay, ensure_viewport_meta};
use heart_burst::constants::VIEWPORT_SELECTOR;
use heart_burst::dom::window_document;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn count(document: &web_sys::Document, selector: &str) -> u32 {
    document
        .query_selector_all(selector)
        .map(|list| list.length())
        .unwrap_or(0)
}

fn clear_viewport_metas(document: &web_sys::Document) {
    let Ok(list) = document.query_selector_all(VIEWPORT_SELECTOR) else {
        return;
    };
    for i in 0..list.length() {
        if let Some(el) = list.get(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
            el.remove();
        }
    }
}

#[wasm_bindgen_test]
fn viewport_meta_is_added_at_most_once() {
    let document = window_document().unwrap();
    clear_viewport_metas(&document);
    assert!(ensure_viewport_meta(&document).unwrap());
    assert_eq!(count(&document, VIEWPORT_SELECTOR), 1);
    assert!(!ensure_viewport_meta(&document).unwrap());
    assert_eq!(count(&document, VIEWPORT_SELECTOR), 1);
}

#[wasm_bindgen_test]
fn existing_viewport_meta_is_left_alone() {
    let document = window_document().unwrap();
    clear_viewport_metas(&document);
    let meta = document.create_element("meta").unwrap();
    meta.set_attribute("name", "viewport").unwrap();
    meta.set_attribute("content", "width=500").unwrap();
    document.head().unwrap().append_child(&meta).unwrap();

    assert!(!ensure_viewport_meta(&document).unwrap());
    assert_eq!(count(&document, VIEWPORT_SELECTOR), 1);
    let kept = document.query_selector(VIEWPORT_SELECTOR).unwrap().unwrap();
    assert_eq!(kept.get_attribute("content").as_deref(), Some("width=500"));
}

#[wasm_bindgen_test]
fn bootstrap_runs_only_once() {
    let document = window_document().unwrap();
    // The first call may already have happened at module start.
    let _ = bootstrap(&document).unwrap();
    let styles = count(&document, "style");
    let divs = count(&document, "body > div");

    assert!(bootstrap(&document).unwrap().is_none());
    assert_eq!(count(&document, "style"), styles);
    assert_eq!(count(&document, "body > div"), divs);
}

#[wasm_bindgen_test]
fn overlay_is_attached_to_body() {
    let document = window_document().unwrap();
    let overlay = create_overlay(&document).unwrap();
    assert!(overlay.is_connected());
    let style = overlay.style();
    assert_eq!(style.get_property_value("z-index").unwrap(), "9999");
    assert_eq!(style.get_property_value("pointer-events").unwrap(), "none");
    assert_eq!(style.get_property_value("position").unwrap(), "fixed");
}
