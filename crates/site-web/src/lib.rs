#![cfg(target_arch = "wasm32")]
use rand::prelude::*;
use site_core::{derive_seed, GearField, MarkerField};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;
mod mascot;
mod render;
mod reveal;
mod style;

// Salts for per-overlay seed derivation
const LAYOUT_SEED_SALT: u64 = 1;
const MASCOT_SEED_SALT: u64 = 2;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let base_seed = js_sys::Date::now() as u64;
    let mut layout_rng = StdRng::seed_from_u64(derive_seed(base_seed, LAYOUT_SEED_SALT));

    let viewport = dom::viewport();
    let field = MarkerField::generate(viewport, &mut layout_rng);
    let gear_field = GearField::generate(viewport, &mut layout_rng);
    log::info!(
        "[init] {} markers, {} gears for {:.0}x{:.0}",
        field.markers.len(),
        gear_field.gears.len(),
        viewport.width,
        viewport.height
    );

    let rain = site_core::rain_columns(&mut layout_rng);
    render::build_rain(&document, &rain, &mut layout_rng);

    let layer = render::BackgroundLayer::build(&document, &field, &gear_field)
        .ok_or_else(|| anyhow::anyhow!("missing #background-layer"))?;
    let cursor = render::CursorLayer::build(&document)
        .ok_or_else(|| anyhow::anyhow!("no document body for the cursor layer"))?;

    events::wire_overlay_handlers(events::OverlayWiring {
        field: Rc::new(RefCell::new(field)),
        gears: Rc::new(RefCell::new(gear_field)),
        layer: Rc::new(RefCell::new(layer)),
        cursor: Rc::new(RefCell::new(cursor)),
        rng: Rc::new(RefCell::new(layout_rng)),
    });

    if mascot::wire_mascot(&document, derive_seed(base_seed, MASCOT_SEED_SALT)).is_none() {
        log::warn!("[mascot] markup not found; widget disabled");
    }
    reveal::wire_section_reveals(&document);

    Ok(())
}
