//! DOM wiring for the mascot widget.
//!
//! The state machine itself lives in `site_core::mascot`; this module owns
//! the mascot's elements, feeds it events and timestamps, and renders its
//! state back as classes and styles. Absence of the mascot markup disables
//! the widget without error.

use crate::constants::{AMBIENT_INTERVAL_MS, MASCOT_TICK_MS};
use crate::{dom, style};
use glam::Vec2;
use site_core::mascot::{bubble_top_percent, drift_percent, eye_anchor, eye_offset, Mascot};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct MascotView {
    root: web::Element,
    bubble: web::Element,
    pupils: Vec<web::Element>,
}

impl MascotView {
    fn render(&self, mascot: &Mascot) {
        match mascot.bubble_text() {
            Some(text) => {
                self.bubble.set_text_content(Some(text));
                dom::set_class_enabled(&self.bubble, "visible", true);
            }
            None => dom::set_class_enabled(&self.bubble, "visible", false),
        }
        dom::set_class_enabled(&self.root, "hovered", mascot.hovered);
        dom::set_class_enabled(&self.root, "waving", mascot.waving);
    }

    fn render_eyes(&self, offset: Vec2) {
        for pupil in &self.pupils {
            dom::set_style(pupil, &style::pupil_style(offset));
        }
    }

    fn render_drift(&self, scroll: f32) {
        dom::set_style(&self.root, &style::mascot_style(drift_percent(scroll)));
        dom::set_style(&self.bubble, &style::bubble_style(bubble_top_percent(scroll)));
    }
}

pub fn wire_mascot(document: &web::Document, seed: u64) -> Option<()> {
    let root = document.get_element_by_id("mascot")?;
    let body = document.get_element_by_id("mascot-body")?;
    let bubble = document.get_element_by_id("mascot-bubble")?;

    let mut pupils = Vec::new();
    if let Ok(nodes) = document.query_selector_all(".mascot-pupil") {
        for i in 0..nodes.length() {
            if let Some(node) = nodes.item(i) {
                if let Ok(el) = node.dyn_into::<web::Element>() {
                    pupils.push(el);
                }
            }
        }
    }

    let mascot = Rc::new(RefCell::new(Mascot::new(seed)));
    let view = Rc::new(MascotView {
        root,
        bubble,
        pupils,
    });
    view.render_drift(dom::scroll_y());

    {
        let mascot = mascot.clone();
        let view = view.clone();
        dom::add_mouse_listener(&body, "mouseenter", move |_| {
            let mut m = mascot.borrow_mut();
            m.pointer_enter(dom::now_sec());
            view.render(&m);
        });
    }
    {
        let mascot = mascot.clone();
        let view = view.clone();
        dom::add_mouse_listener(&body, "mouseleave", move |_| {
            let mut m = mascot.borrow_mut();
            m.pointer_leave(dom::now_sec());
            view.render(&m);
        });
    }
    {
        let mascot = mascot.clone();
        let view = view.clone();
        dom::add_mouse_listener(&body, "click", move |_| {
            let mut m = mascot.borrow_mut();
            m.activate(dom::now_sec());
            view.render(&m);
            log::info!("[mascot] wave");
        });
    }

    // Eye tracking runs on every pointer move regardless of state.
    {
        let view = view.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
                let rect = view.root.get_bounding_client_rect();
                let anchor = eye_anchor(
                    rect.left() as f32,
                    rect.top() as f32,
                    rect.width() as f32,
                    rect.height() as f32,
                );
                let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
                view.render_eyes(eye_offset(pointer, anchor));
            }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            _ = wnd
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // The mascot drifts with scroll independently of the background overlays.
    {
        let view = view.clone();
        dom::add_window_listener("scroll", move || view.render_drift(dom::scroll_y()));
    }

    {
        let mascot = mascot.clone();
        let view = view.clone();
        dom::set_interval(AMBIENT_INTERVAL_MS, move || {
            let mut m = mascot.borrow_mut();
            m.ambient_tick(dom::now_sec());
            view.render(&m);
        });
    }
    {
        let mascot = mascot.clone();
        let view = view.clone();
        dom::set_interval(MASCOT_TICK_MS, move || {
            let mut m = mascot.borrow_mut();
            m.tick(dom::now_sec());
            view.render(&m);
        });
    }

    Some(())
}
