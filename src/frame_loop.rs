use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

use crate::rng::Lcg;
use crate::scheduler::{Scheduler, TickHandle};
use crate::starfield::StarfieldAnimator;
use crate::surface::CanvasSurface;

pub type SharedAnimator = Rc<RefCell<StarfieldAnimator<CanvasSurface, Lcg>>>;

/// Self-rescheduling tick driver. Invariant: at most one tick is pending
/// at any time; `stop` cancels it and `start` while running is a no-op.
pub struct FrameLoop {
    scheduler: Rc<dyn Scheduler>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
    pending: Rc<RefCell<Option<TickHandle>>>,
}

impl FrameLoop {
    pub fn new(scheduler: Rc<dyn Scheduler>, animator: SharedAnimator) -> Self {
        let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let pending: Rc<RefCell<Option<TickHandle>>> = Rc::new(RefCell::new(None));

        let tick_ref = tick.clone();
        let pending_ref = pending.clone();
        let sched_ref = scheduler.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            animator.borrow_mut().render_frame(timestamp);

            // Reschedule only while still running; stop() takes the handle.
            let mut pending = pending_ref.borrow_mut();
            if pending.is_some() {
                *pending = tick_ref
                    .borrow()
                    .as_ref()
                    .and_then(|cb| sched_ref.request_tick(cb));
            }
        }) as Box<dyn FnMut(f64)>));

        Self {
            scheduler,
            tick,
            pending,
        }
    }

    pub fn start(&self) {
        let mut pending = self.pending.borrow_mut();
        if pending.is_some() {
            return;
        }
        *pending = self
            .tick
            .borrow()
            .as_ref()
            .and_then(|cb| self.scheduler.request_tick(cb));
    }

    pub fn stop(&self) {
        if let Some(handle) = self.pending.borrow_mut().take() {
            self.scheduler.cancel_tick(handle);
        }
    }

    pub fn is_running(&self) -> bool {
        self.pending.borrow().is_some()
    }
}
