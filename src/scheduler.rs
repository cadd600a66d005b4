use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub type TickHandle = i32;

/// Frame-clock abstraction: at most one tick is ever pending, and a
/// pending tick can be cancelled by its handle. Production is
/// `requestAnimationFrame`; the loop driver owns the callback closure.
pub trait Scheduler {
    fn request_tick(&self, callback: &Closure<dyn FnMut(f64)>) -> Option<TickHandle>;
    fn cancel_tick(&self, handle: TickHandle);
}

pub struct RafScheduler;

impl Scheduler for RafScheduler {
    fn request_tick(&self, callback: &Closure<dyn FnMut(f64)>) -> Option<TickHandle> {
        web_sys::window()?
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .ok()
    }

    fn cancel_tick(&self, handle: TickHandle) {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(handle);
        }
    }
}
