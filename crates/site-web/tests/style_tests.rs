// Host-side tests for the pure style-string builders.
// The main crate is wasm-only, so we include the pure module directly.

#![allow(dead_code)]
mod style {
    include!("../src/style.rs");
}

use glam::Vec2;
use style::*;

#[test]
fn marker_style_positions_in_px() {
    assert_eq!(marker_style(Vec2::new(12.0, 34.5)), "left:12.0px;top:34.5px");
}

#[test]
fn gear_style_sets_square_size_and_rotation() {
    let s = gear_style(Vec2::new(100.0, 200.0), 48.0, 123.4);
    assert!(s.contains("left:100.0px"));
    assert!(s.contains("top:200.0px"));
    assert!(s.contains("width:48.0px;height:48.0px"));
    assert!(s.contains("transform:rotate(123.4deg)"));
}

#[test]
fn cursor_style_centers_on_pointer() {
    // The 20px cursor dot is centered by offsetting half its size.
    assert_eq!(cursor_style(Vec2::new(50.0, 60.0)), "left:40.0px;top:50.0px");
}

#[test]
fn trail_opacity_fades_and_floors_at_zero() {
    assert!(trail_opacity(0) > trail_opacity(1));
    assert!(trail_opacity(1) > trail_opacity(4));
    assert_eq!(trail_opacity(100), 0.0);
}

#[test]
fn trail_style_includes_opacity() {
    let s = trail_style(Vec2::new(10.0, 10.0), 0.5);
    assert!(s.contains("opacity:0.50"));
}

#[test]
fn rain_column_style_carries_animation_timing() {
    let s = rain_column_style(42.5, 3.25, 1.5);
    assert_eq!(
        s,
        "left:42.5%;animation-duration:3.25s;animation-delay:1.50s"
    );
}

#[test]
fn glyph_style_fades_with_depth() {
    assert_eq!(glyph_style(0), "opacity:1.0");
    assert_eq!(glyph_style(5), "opacity:0.5");
}

#[test]
fn pupil_style_translates_by_offset() {
    assert_eq!(
        pupil_style(Vec2::new(3.0, -2.0)),
        "transform:translate(3.0px,-2.0px)"
    );
}

#[test]
fn mascot_and_bubble_styles_track_drift() {
    assert_eq!(mascot_style(-50.0), "transform:translateY(-50.0%)");
    assert_eq!(bubble_style(62.5), "top:62.5%");
}
