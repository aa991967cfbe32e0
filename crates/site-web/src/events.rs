use crate::constants::HEADER_SCROLL_THRESHOLD;
use crate::{dom, render};
use glam::Vec2;
use rand::rngs::StdRng;
use site_core::{GearField, MarkerField};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Shared state handed to every overlay event handler. Each collection is
/// owned by exactly one overlay; handlers only ever mutate their own side.
#[derive(Clone)]
pub struct OverlayWiring {
    pub field: Rc<RefCell<MarkerField>>,
    pub gears: Rc<RefCell<GearField>>,
    pub layer: Rc<RefCell<render::BackgroundLayer>>,
    pub cursor: Rc<RefCell<render::CursorLayer>>,
    pub rng: Rc<RefCell<StdRng>>,
}

pub fn wire_overlay_handlers(w: OverlayWiring) {
    wire_pointermove(&w);
    wire_scroll(&w);
    wire_resize(&w);
    // Establish rotation/visibility/header state before the first event.
    on_scroll(&w);
}

fn wire_pointermove(w: &OverlayWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        w.cursor.borrow_mut().update(pointer);

        let mut field = w.field.borrow_mut();
        field.apply_pointer(pointer);
        w.layer.borrow().sync_markers(&field);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_scroll(w: &OverlayWiring) {
    let w = w.clone();
    dom::add_window_listener("scroll", move || on_scroll(&w));
}

fn on_scroll(w: &OverlayWiring) {
    let scroll = dom::scroll_y();
    {
        let mut gears = w.gears.borrow_mut();
        gears.apply_scroll(scroll);
        w.layer.borrow().sync_gears(&gears);
    }
    if let Some(document) = dom::window_document() {
        if let Some(header) = document.get_element_by_id("site-header") {
            dom::set_class_enabled(&header, "scrolled", scroll > HEADER_SCROLL_THRESHOLD);
        }
    }
}

fn wire_resize(w: &OverlayWiring) {
    let w = w.clone();
    dom::add_window_listener("resize", move || {
        let viewport = dom::viewport();
        let mut rng = w.rng.borrow_mut();
        let mut field = w.field.borrow_mut();
        let mut gears = w.gears.borrow_mut();
        field.regenerate(viewport, &mut rng);
        gears.regenerate(viewport, &mut rng);
        gears.apply_scroll(dom::scroll_y());
        w.layer.borrow_mut().rebuild(&field, &gears);
        log::info!(
            "[resize] {} markers, {} gears for {:.0}x{:.0}",
            field.markers.len(),
            gears.gears.len(),
            viewport.width,
            viewport.height
        );
    });
}
