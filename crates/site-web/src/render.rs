//! DOM-node pools for the decorative overlays.
//!
//! Each overlay owns its elements exclusively: the background layer holds
//! one div per marker and one SVG per gear, the cursor layer holds the
//! custom cursor and its trail. Pools are rebuilt wholesale when the
//! underlying collections regenerate on resize.

use crate::{dom, style};
use glam::Vec2;
use rand::prelude::*;
use site_core::{Gear, GearField, MarkerField, RainColumn};
use std::collections::VecDeque;
use web_sys as web;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

pub struct BackgroundLayer {
    document: web::Document,
    root: web::Element,
    dots: Vec<web::Element>,
    gears: Vec<web::Element>,
}

impl BackgroundLayer {
    pub fn build(
        document: &web::Document,
        field: &MarkerField,
        gears: &GearField,
    ) -> Option<Self> {
        let root = document.get_element_by_id("background-layer")?;
        let mut layer = Self {
            document: document.clone(),
            root,
            dots: Vec::new(),
            gears: Vec::new(),
        };
        layer.rebuild(field, gears);
        Some(layer)
    }

    /// Discard and recreate the pooled nodes after a regeneration.
    pub fn rebuild(&mut self, field: &MarkerField, gears: &GearField) {
        self.root.set_inner_html("");
        self.dots.clear();
        self.gears.clear();

        for marker in &field.markers {
            if let Some(el) = dom::create_div(&self.document, "interactive-dot") {
                dom::set_style(&el, &style::marker_style(marker.pos));
                _ = self.root.append_child(&el);
                self.dots.push(el);
            }
        }
        for gear in &gears.gears {
            if let Some(el) = build_gear_svg(&self.document, gear) {
                dom::set_style(&el, &style::gear_style(gear.pos, gear.size, gear.rotation_deg));
                _ = self.root.append_child(&el);
                self.gears.push(el);
            }
        }
    }

    pub fn sync_markers(&self, field: &MarkerField) {
        for (el, marker) in self.dots.iter().zip(&field.markers) {
            dom::set_style(el, &style::marker_style(marker.pos));
            dom::set_class_enabled(el, "repelled", marker.repelled);
        }
    }

    pub fn sync_gears(&self, gears: &GearField) {
        for (el, gear) in self.gears.iter().zip(&gears.gears) {
            dom::set_style(el, &style::gear_style(gear.pos, gear.size, gear.rotation_deg));
            dom::set_class_enabled(el, "visible", gear.visible);
        }
    }
}

fn build_gear_svg(document: &web::Document, gear: &Gear) -> Option<web::Element> {
    let wrapper = dom::create_div(document, "scroll-gear")?;
    let svg = document.create_element_ns(Some(SVG_NS), "svg").ok()?;
    _ = svg.set_attribute("viewBox", "0 0 100 100");

    let ring = svg_circle(document, "35", "rgba(0, 245, 255, 0.3)", "2")?;
    let hub = svg_circle(document, "20", "rgba(0, 245, 255, 0.2)", "1")?;
    _ = svg.append_child(&ring);
    _ = svg.append_child(&hub);

    for i in 0..gear.teeth {
        let tooth = document.create_element_ns(Some(SVG_NS), "rect").ok()?;
        for (name, value) in [
            ("x", "48"),
            ("y", "10"),
            ("width", "4"),
            ("height", "8"),
            ("fill", "rgba(0, 245, 255, 0.4)"),
        ] {
            _ = tooth.set_attribute(name, value);
        }
        let angle = i as f32 * 360.0 / gear.teeth as f32;
        _ = tooth.set_attribute("transform", &format!("rotate({angle:.1} 50 50)"));
        _ = svg.append_child(&tooth);
    }

    _ = wrapper.append_child(&svg);
    Some(wrapper)
}

fn svg_circle(
    document: &web::Document,
    radius: &str,
    stroke: &str,
    stroke_width: &str,
) -> Option<web::Element> {
    let circle = document.create_element_ns(Some(SVG_NS), "circle").ok()?;
    for (name, value) in [
        ("cx", "50"),
        ("cy", "50"),
        ("r", radius),
        ("fill", "none"),
        ("stroke", stroke),
        ("stroke-width", stroke_width),
    ] {
        _ = circle.set_attribute(name, value);
    }
    Some(circle)
}

/// Custom cursor dot plus a short trail that follows the pointer's recent
/// positions with fading opacity.
pub struct CursorLayer {
    dot: web::Element,
    trail: Vec<web::Element>,
    history: VecDeque<Vec2>,
}

impl CursorLayer {
    pub fn build(document: &web::Document) -> Option<Self> {
        let body = document.body()?;
        let dot = dom::create_div(document, "custom-cursor")?;
        _ = body.append_child(&dot);

        let mut trail = Vec::with_capacity(crate::constants::TRAIL_LENGTH);
        for _ in 0..crate::constants::TRAIL_LENGTH {
            let el = dom::create_div(document, "cursor-trail")?;
            _ = body.append_child(&el);
            trail.push(el);
        }
        Some(Self {
            dot,
            trail,
            history: VecDeque::new(),
        })
    }

    pub fn update(&mut self, pointer: Vec2) {
        dom::set_style(&self.dot, &style::cursor_style(pointer));

        self.history.push_front(pointer);
        self.history.truncate(self.trail.len());
        for (i, el) in self.trail.iter().enumerate() {
            if let Some(pos) = self.history.get(i) {
                dom::set_style(el, &style::trail_style(*pos, style::trail_opacity(i)));
            }
        }
    }
}

/// Populate the matrix-rain backdrop once at startup; columns are not
/// regenerated on resize since they are positioned in percentages.
pub fn build_rain(document: &web::Document, columns: &[RainColumn], rng: &mut StdRng) {
    let Some(root) = document.get_element_by_id("matrix-rain") else {
        return;
    };
    for column in columns {
        let Some(el) = dom::create_div(document, "matrix-column") else {
            continue;
        };
        dom::set_style(
            &el,
            &style::rain_column_style(column.left_pct, column.duration_sec, column.delay_sec),
        );
        for i in 0..site_core::constants::RAIN_GLYPHS_PER_COLUMN {
            if let Some(glyph) = dom::create_div(document, "") {
                glyph.set_text_content(Some(if rng.gen_bool(0.5) { "1" } else { "0" }));
                dom::set_style(&glyph, &style::glyph_style(i));
                _ = el.append_child(&glyph);
            }
        }
        _ = root.append_child(&el);
    }
}
