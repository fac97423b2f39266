use crate::dom;
use crate::frame::{HeartLoop, WebEffect};
use glam::DVec2;
use heart_core::MOBILE_BREAKPOINT_PX;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct ActivationWiring {
    pub effect: Rc<RefCell<WebEffect>>,
    pub frames: HeartLoop,
}

impl ActivationWiring {
    /// Spawn one batch at a viewport point and make sure the frame loop runs.
    pub fn activate(&self, x: f64, y: f64) -> usize {
        let width = dom::viewport_width().unwrap_or(MOBILE_BREAKPOINT_PX);
        let spawned = match self.effect.borrow_mut().activate(DVec2::new(x, y), width) {
            Ok(n) => n,
            Err(e) => {
                log::error!("[spawn] {e}");
                0
            }
        };
        self.frames.ensure_running();
        spawned
    }
}

pub fn wire_activation_handlers(body: &web::HtmlElement, w: &ActivationWiring) {
    wire_click(body, w);
    wire_touchstart(body, w);
}

fn wire_click(body: &web::HtmlElement, w: &ActivationWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        w.activate(ev.client_x() as f64, ev.client_y() as f64);
    }) as Box<dyn FnMut(_)>);
    if let Err(e) = body.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
    {
        log::error!("failed to add click listener: {:?}", e);
    }
    closure.forget();
}

fn wire_touchstart(body: &web::HtmlElement, w: &ActivationWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        // Only the first touch point counts.
        match ev.touches().get(0) {
            Some(touch) => {
                w.activate(touch.client_x() as f64, touch.client_y() as f64);
            }
            None => log::debug!("[touch] touchstart without a touch point"),
        }
    }) as Box<dyn FnMut(_)>);
    if let Err(e) =
        body.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())
    {
        log::error!("failed to add touchstart listener: {:?}", e);
    }
    closure.forget();
}
