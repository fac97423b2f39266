#![cfg(target_arch = "wasm32")]
use heart_core::{resolve_or_default, HeartEffect, InstantClock};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

pub mod bootstrap;
pub mod constants;
pub mod dom;
pub mod events;
pub mod frame;
pub mod layer;

thread_local! {
    static APP: RefCell<Option<events::ActivationWiring>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("heart-burst starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    dom::on_document_ready(&document, || {
        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let page_config = read_page_config(&window);
    let config = resolve_or_default(page_config.as_ref());
    log::info!(
        "[config] hearts mobile={} desktop={} max={} duration={}ms easing={}",
        config.heart_count.mobile,
        config.heart_count.desktop,
        config.max_hearts,
        config.animation_duration,
        config.easing
    );

    let Some(overlay) = bootstrap::bootstrap(&document)? else {
        log::warn!("heart-burst already initialized");
        return Ok(());
    };
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("document has no <body>"))?;

    let effect = Rc::new(RefCell::new(HeartEffect::new(
        config,
        layer::DomLayer::new(document.clone(), overlay),
        InstantClock::new(),
        StdRng::from_entropy(),
    )));
    let wiring = events::ActivationWiring {
        frames: frame::HeartLoop::new(effect.clone()),
        effect,
    };
    events::wire_activation_handlers(&body, &wiring);
    APP.with(|app| *app.borrow_mut() = Some(wiring));
    Ok(())
}

/// `window.heartConfig` as JSON, if the page defines one.
fn read_page_config(window: &web::Window) -> Option<serde_json::Value> {
    let raw = js_sys::Reflect::get(window, &JsValue::from_str(constants::PAGE_CONFIG_KEY)).ok()?;
    if raw.is_undefined() || raw.is_null() {
        return None;
    }
    let text = js_sys::JSON::stringify(&raw).ok()?.as_string()?;
    match serde_json::from_str(&text) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("[config] unreadable {}: {e}", constants::PAGE_CONFIG_KEY);
            None
        }
    }
}

/// Spawn a heart batch at viewport coordinates. Returns how many were
/// created (0 before the page is ready).
#[wasm_bindgen]
pub fn burst(x: f64, y: f64) -> u32 {
    let wiring = APP.with(|app| app.borrow().clone());
    wiring.map_or(0, |w| w.activate(x, y) as u32)
}

/// Number of hearts currently animating.
#[wasm_bindgen]
pub fn live_hearts() -> u32 {
    APP.with(|app| {
        app.borrow()
            .as_ref()
            .map_or(0, |w| w.effect.borrow().live() as u32)
    })
}
