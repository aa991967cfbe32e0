//! Section reveal animations: each `.reveal` element gains the `visible`
//! class once enough of it crosses into the viewport, then stops being
//! observed. Missing observer support or zero matching sections is a no-op.

use crate::constants::REVEAL_THRESHOLD;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub fn wire_section_reveals(document: &web::Document) {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    _ = target.class_list().add_1("visible");
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer = match web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(obs) => obs,
        Err(_) => return,
    };
    callback.forget();

    if let Ok(sections) = document.query_selector_all(".reveal") {
        for i in 0..sections.length() {
            if let Some(node) = sections.item(i) {
                if let Ok(el) = node.dyn_into::<web::Element>() {
                    observer.observe(&el);
                }
            }
        }
    }
}
