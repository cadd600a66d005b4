use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use crate::config::StarfieldConfig;
use crate::frame_loop::{FrameLoop, SharedAnimator};
use crate::page;
use crate::rng::Lcg;
use crate::scheduler::RafScheduler;
use crate::starfield::StarfieldAnimator;
use crate::surface::{CanvasSurface, SurfaceSize};

const CANVAS_ID: &str = "starfield";

pub fn boot() {
    page::setup_smooth_scroll();
    page::setup_reveal();
    page::setup_demo_form();

    // No canvas or no 2D context: the page stays functional without the
    // backdrop, so just skip the animation.
    let Some(animator) = init_animator() else {
        return;
    };

    animator.borrow_mut().resize(viewport_size());

    let frame_loop = Rc::new(FrameLoop::new(Rc::new(RafScheduler), animator.clone()));
    setup_resize_handler(animator.clone());
    setup_visibility_handler(animator, frame_loop.clone());
    frame_loop.start();
}

fn init_animator() -> Option<SharedAnimator> {
    let document = web_sys::window()?.document()?;
    let canvas: HtmlCanvasElement = document.get_element_by_id(CANVAS_ID)?.dyn_into().ok()?;
    let cfg = read_config(&canvas);
    let surface = CanvasSurface::new(canvas)?;
    Some(Rc::new(RefCell::new(StarfieldAnimator::new(
        cfg,
        surface,
        Lcg::from_entropy(),
    ))))
}

fn read_config(canvas: &HtmlCanvasElement) -> StarfieldConfig {
    let Some(json) = canvas.get_attribute("data-config") else {
        return StarfieldConfig::default();
    };
    match StarfieldConfig::from_json(&json) {
        Ok(cfg) => cfg,
        Err(e) => {
            web_sys::console::error_1(
                &format!("starfield: invalid data-config, using defaults: {}", e).into(),
            );
            StarfieldConfig::default()
        }
    }
}

fn viewport_size() -> SurfaceSize {
    let Some(window) = web_sys::window() else {
        return SurfaceSize::clamped(1.0, 1.0, 1.0);
    };
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    SurfaceSize::clamped(w, h, window.device_pixel_ratio())
}

fn setup_resize_handler(animator: SharedAnimator) {
    let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
        animator.borrow_mut().resize(viewport_size());
    }) as Box<dyn FnMut(web_sys::Event)>);

    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn setup_visibility_handler(animator: SharedAnimator, frame_loop: Rc<FrameLoop>) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
        if doc.hidden() {
            frame_loop.stop();
        } else if !frame_loop.is_running() {
            // Fresh baseline so the first tick back carries no time jump.
            animator.borrow_mut().reset_clock();
            frame_loop.start();
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    let _ = document
        .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
    closure.forget();
}
