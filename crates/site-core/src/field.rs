//! Pointer-repelled marker field.
//!
//! Markers sit on a jittered grid and displace away from the pointer within
//! a fixed radius. Displacement is a pure function of the current pointer
//! position and each marker's rest position; there is no velocity or
//! momentum, so updates are idempotent and safe to recompute on every event.

use crate::constants::{MARKER_JITTER, MARKER_SPACING, REPEL_MAX_OFFSET, REPEL_RADIUS};
use crate::state::Viewport;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct Marker {
    pub id: usize,
    pub rest: Vec2,
    pub pos: Vec2,
    pub repelled: bool,
}

#[derive(Clone, Debug)]
pub struct MarkerField {
    pub markers: Vec<Marker>,
    viewport: Viewport,
}

impl MarkerField {
    /// Lay out markers on a fixed-spacing grid covering the viewport, each
    /// jittered by a small random offset. Rest position equals the initial
    /// position.
    pub fn generate(viewport: Viewport, rng: &mut StdRng) -> Self {
        let cols = (viewport.width / MARKER_SPACING).ceil() as usize;
        let rows = (viewport.height / MARKER_SPACING).ceil() as usize;
        let mut markers = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                let x = col as f32 * MARKER_SPACING + rng.gen::<f32>() * MARKER_JITTER;
                let y = row as f32 * MARKER_SPACING + rng.gen::<f32>() * MARKER_JITTER;
                let rest = Vec2::new(x, y);
                markers.push(Marker {
                    id: row * cols + col,
                    rest,
                    pos: rest,
                    repelled: false,
                });
            }
        }
        Self { markers, viewport }
    }

    /// Discard and regenerate the full marker set for a new viewport.
    pub fn regenerate(&mut self, viewport: Viewport, rng: &mut StdRng) {
        *self = Self::generate(viewport, rng);
        log::debug!(
            "regenerated {} markers for {:.0}x{:.0}",
            self.markers.len(),
            viewport.width,
            viewport.height
        );
    }

    /// Recompute every marker's position from the current pointer location.
    /// Markers outside the repulsion radius snap exactly back to rest.
    pub fn apply_pointer(&mut self, pointer: Vec2) {
        for marker in &mut self.markers {
            let offset = repel_offset(pointer, marker.rest);
            if offset == Vec2::ZERO {
                marker.pos = marker.rest;
                marker.repelled = false;
            } else {
                marker.pos = marker.rest + offset;
                marker.repelled = true;
            }
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

/// Displacement for a rest position under the given pointer.
///
/// Zero at and beyond `REPEL_RADIUS`; grows linearly to `REPEL_MAX_OFFSET`
/// as the distance approaches zero. A pointer exactly on the rest position
/// pushes along +x (the `atan2(0, 0) == 0` convention), keeping the
/// function total.
pub fn repel_offset(pointer: Vec2, rest: Vec2) -> Vec2 {
    let distance = pointer.distance(rest);
    if distance >= REPEL_RADIUS {
        return Vec2::ZERO;
    }
    let angle = (rest.y - pointer.y).atan2(rest.x - pointer.x);
    let force = (REPEL_RADIUS - distance) / REPEL_RADIUS;
    Vec2::new(angle.cos(), angle.sin()) * force * REPEL_MAX_OFFSET
}
