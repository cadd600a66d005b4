//! Page utilities around the starfield: smooth-scroll anchors, viewport
//! reveal, and the demo-form submission flow. Each one wires its own
//! listeners and disables itself silently when its elements are missing.

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

const SUBMIT_DELAY_MS: u32 = 700;
const RESET_DELAY_MS: u32 = 1400;
const SUBMIT_LABEL: &str = "Request a demo";

/// Smoothly scroll to the in-page anchor of any clicked `[data-scroll]`
/// element. Uses click delegation on the document so late-added links work.
pub fn setup_smooth_scroll() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
        let Some(target) = e.target() else { return };
        let Ok(element) = target.dyn_into::<web_sys::Element>() else {
            return;
        };
        let Ok(Some(anchor)) = element.closest("[data-scroll]") else {
            return;
        };
        let Some(href) = anchor.get_attribute("href") else {
            return;
        };
        if !href.starts_with('#') {
            return;
        }
        if let Ok(Some(dest)) = doc.query_selector(&href) {
            e.prevent_default();
            let opts = web_sys::ScrollIntoViewOptions::new();
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            opts.set_block(web_sys::ScrollLogicalPosition::Start);
            dest.scroll_into_view_with_scroll_into_view_options(&opts);
        }
    }) as Box<dyn FnMut(web_sys::MouseEvent)>);

    let _ = document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Add `is-visible` to each `.reveal` element once it intersects the
/// viewport beyond 15%, observing every element at most once. Hosts
/// without IntersectionObserver get everything revealed up front.
pub fn setup_reveal() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Ok(elements) = document.query_selector_all(".reveal") else {
        return;
    };
    if elements.length() == 0 {
        return;
    }

    let supported =
        js_sys::Reflect::has(&window, &"IntersectionObserver".into()).unwrap_or(false);
    if !supported {
        for i in 0..elements.length() {
            if let Some(el) = elements.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok())
            {
                let _ = el.class_list().add_1("is-visible");
            }
        }
        return;
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1("is-visible");
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from(0.15));
    let Ok(observer) =
        web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    callback.forget();

    for i in 0..elements.length() {
        if let Some(el) = elements.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
            observer.observe(&el);
        }
    }
    // Keep the observer alive for the page lifetime.
    std::mem::forget(observer);
}

/// Simulated submission for the demo form: disable the button, show the
/// success message after a short delay, then restore the button.
pub fn setup_demo_form() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(form) = document
        .get_element_by_id("demoForm")
        .and_then(|e| e.dyn_into::<web_sys::HtmlFormElement>().ok())
    else {
        return;
    };
    let Some(button) = document
        .get_element_by_id("demoSubmit")
        .and_then(|e| e.dyn_into::<web_sys::HtmlButtonElement>().ok())
    else {
        return;
    };
    let feedback = document
        .get_element_by_id("formFeedback")
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok());

    let form_ref = form.clone();
    let closure = Closure::wrap(Box::new(move |e: web_sys::Event| {
        e.prevent_default();
        if !form_ref.check_validity() {
            form_ref.report_validity();
            return;
        }

        button.set_disabled(true);
        button.set_text_content(Some("Sending..."));

        let form_done = form_ref.clone();
        let button_done = button.clone();
        let feedback_done = feedback.clone();
        Timeout::new(SUBMIT_DELAY_MS, move || {
            button_done.set_text_content(Some("Sent!"));
            if let Some(fb) = &feedback_done {
                fb.set_hidden(false);
                fb.set_text_content(Some(
                    "Thanks! We'll be in touch to schedule your demo.",
                ));
            }
            form_done.reset();

            let button_reset = button_done.clone();
            Timeout::new(RESET_DELAY_MS, move || {
                button_reset.set_disabled(false);
                button_reset.set_text_content(Some(SUBMIT_LABEL));
            })
            .forget();
        })
        .forget();
    }) as Box<dyn FnMut(web_sys::Event)>);

    let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
    closure.forget();
}
