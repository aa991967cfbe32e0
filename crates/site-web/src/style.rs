// Pure style-string builders shared by the overlay renderers.
//
// Kept free of DOM types so they can be unit tested on the host; the
// renderers apply these strings verbatim as `style` attributes.

use glam::Vec2;

// Half-sizes used to center the cursor layers on the pointer (px)
const CURSOR_HALF: f32 = 10.0;
const TRAIL_HALF: f32 = 3.0;

const TRAIL_BASE_OPACITY: f32 = 0.6;
const TRAIL_OPACITY_STEP: f32 = 0.1;

const GLYPH_FADE_STEP: f32 = 0.1;

#[inline]
pub fn marker_style(pos: Vec2) -> String {
    format!("left:{:.1}px;top:{:.1}px", pos.x, pos.y)
}

#[inline]
pub fn gear_style(pos: Vec2, size: f32, rotation_deg: f32) -> String {
    format!(
        "left:{:.1}px;top:{:.1}px;width:{:.1}px;height:{:.1}px;transform:rotate({:.1}deg)",
        pos.x, pos.y, size, size, rotation_deg
    )
}

#[inline]
pub fn cursor_style(pointer: Vec2) -> String {
    format!(
        "left:{:.1}px;top:{:.1}px",
        pointer.x - CURSOR_HALF,
        pointer.y - CURSOR_HALF
    )
}

#[inline]
pub fn trail_style(pos: Vec2, opacity: f32) -> String {
    format!(
        "left:{:.1}px;top:{:.1}px;opacity:{:.2}",
        pos.x - TRAIL_HALF,
        pos.y - TRAIL_HALF,
        opacity
    )
}

/// Opacity for the trail dot at the given distance behind the cursor,
/// floored at fully transparent.
#[inline]
pub fn trail_opacity(index: usize) -> f32 {
    (TRAIL_BASE_OPACITY - index as f32 * TRAIL_OPACITY_STEP).max(0.0)
}

#[inline]
pub fn rain_column_style(left_pct: f32, duration_sec: f32, delay_sec: f32) -> String {
    format!(
        "left:{:.1}%;animation-duration:{:.2}s;animation-delay:{:.2}s",
        left_pct, duration_sec, delay_sec
    )
}

#[inline]
pub fn glyph_style(index: usize) -> String {
    format!("opacity:{:.1}", 1.0 - index as f32 * GLYPH_FADE_STEP)
}

#[inline]
pub fn pupil_style(offset: Vec2) -> String {
    format!("transform:translate({:.1}px,{:.1}px)", offset.x, offset.y)
}

#[inline]
pub fn mascot_style(drift_pct: f32) -> String {
    format!("transform:translateY({:.1}%)", drift_pct)
}

#[inline]
pub fn bubble_style(top_pct: f32) -> String {
    format!("top:{:.1}%", top_pct)
}
