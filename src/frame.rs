use crate::layer::DomLayer;
use heart_core::{HeartEffect, InstantClock};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type WebEffect = HeartEffect<DomLayer, InstantClock>;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` driver for the live hearts.
///
/// The loop only runs while hearts are animating; it stops rescheduling when
/// the last one is removed and `ensure_running` restarts it on the next spawn.
#[derive(Clone)]
pub struct HeartLoop {
    running: Rc<Cell<bool>>,
    tick: TickSlot,
}

impl HeartLoop {
    pub fn new(effect: Rc<RefCell<WebEffect>>) -> Self {
        let running = Rc::new(Cell::new(false));
        let tick: TickSlot = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        let running_tick = running.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let live = effect.borrow_mut().tick();
            if live == 0 || !request_frame(&tick_clone) {
                running_tick.set(false);
            }
        }) as Box<dyn FnMut()>));
        Self { running, tick }
    }

    pub fn ensure_running(&self) {
        if self.running.get() {
            return;
        }
        if request_frame(&self.tick) {
            self.running.set(true);
        } else {
            log::error!("requestAnimationFrame unavailable; hearts will not animate");
        }
    }
}

fn request_frame(tick: &TickSlot) -> bool {
    let Some(window) = web::window() else {
        return false;
    };
    let slot = tick.borrow();
    let Some(callback) = slot.as_ref() else {
        return false;
    };
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .is_ok()
}
