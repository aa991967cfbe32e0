//! Scroll-driven gear field.
//!
//! Gears are placed once at random positions and sizes; rotation and
//! visibility are recomputed in full from the current scroll offset, so a
//! missed or reordered scroll event only produces a momentarily stale frame,
//! never drift.

use crate::constants::{
    GEAR_COUNT, GEAR_PHASE_STEP, GEAR_SIZE_MIN, GEAR_SIZE_SPAN, GEAR_SPIN_RATE, GEAR_TEETH_MIN,
    GEAR_TEETH_SPAN, GEAR_VIEW_MARGIN,
};
use crate::state::Viewport;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct Gear {
    pub id: usize,
    pub pos: Vec2,
    pub size: f32,
    pub teeth: u32,
    pub rotation_deg: f32,
    pub visible: bool,
}

#[derive(Clone, Debug)]
pub struct GearField {
    pub gears: Vec<Gear>,
    viewport: Viewport,
}

impl GearField {
    pub fn generate(viewport: Viewport, rng: &mut StdRng) -> Self {
        let gears = (0..GEAR_COUNT)
            .map(|id| Gear {
                id,
                pos: Vec2::new(
                    rng.gen::<f32>() * viewport.width,
                    rng.gen::<f32>() * viewport.height,
                ),
                size: GEAR_SIZE_MIN + rng.gen::<f32>() * GEAR_SIZE_SPAN,
                teeth: GEAR_TEETH_MIN + rng.gen_range(0..GEAR_TEETH_SPAN),
                rotation_deg: 0.0,
                visible: false,
            })
            .collect();
        Self { gears, viewport }
    }

    /// Discard and regenerate the full gear set for a new viewport.
    pub fn regenerate(&mut self, viewport: Viewport, rng: &mut StdRng) {
        *self = Self::generate(viewport, rng);
        log::debug!(
            "regenerated {} gears for {:.0}x{:.0}",
            self.gears.len(),
            viewport.width,
            viewport.height
        );
    }

    /// Recompute rotation and visibility for every gear from the scroll
    /// offset.
    pub fn apply_scroll(&mut self, scroll_y: f32) {
        let viewport_height = self.viewport.height;
        for gear in &mut self.gears {
            gear.rotation_deg = gear_rotation_deg(scroll_y, gear.id);
            gear.visible = gear_on_screen(gear.pos.y, scroll_y, viewport_height);
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

/// Rotation angle for a scroll offset plus a per-gear phase, wrapped into
/// `[0, 360)`.
pub fn gear_rotation_deg(scroll_y: f32, id: usize) -> f32 {
    (scroll_y * GEAR_SPIN_RATE + id as f32 * GEAR_PHASE_STEP).rem_euclid(360.0)
}

/// A gear is visible iff its screen-space y lies within the viewport
/// expanded by `GEAR_VIEW_MARGIN` on both ends, inclusive at both
/// boundaries.
pub fn gear_on_screen(y: f32, scroll_y: f32, viewport_height: f32) -> bool {
    let screen_y = y - scroll_y;
    (-GEAR_VIEW_MARGIN..=viewport_height + GEAR_VIEW_MARGIN).contains(&screen_y)
}
