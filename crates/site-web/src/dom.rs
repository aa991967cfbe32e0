use site_core::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Current viewport size in CSS pixels; zero when no window is available.
#[inline]
pub fn viewport() -> Viewport {
    match web::window() {
        Some(w) => {
            let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            Viewport::new(width as f32, height as f32)
        }
        None => Viewport::new(0.0, 0.0),
    }
}

#[inline]
pub fn scroll_y() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

#[inline]
pub fn now_sec() -> f64 {
    js_sys::Date::now() / 1000.0
}

#[inline]
pub fn set_style(el: &web::Element, style: &str) {
    _ = el.set_attribute("style", style);
}

#[inline]
pub fn set_class_enabled(el: &web::Element, class: &str, enabled: bool) {
    let list = el.class_list();
    if enabled {
        _ = list.add_1(class);
    } else {
        _ = list.remove_1(class);
    }
}

pub fn create_div(document: &web::Document, class: &str) -> Option<web::Element> {
    let el = document.create_element("div").ok()?;
    el.set_class_name(class);
    Some(el)
}

pub fn add_mouse_listener(
    target: &web::EventTarget,
    kind: &str,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn add_window_listener(kind: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

pub fn set_interval(ms: i32, handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                ms,
            );
    }
    closure.forget();
}
