// Relationships between tuning constants that the overlay logic relies on.

use site_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn layout_constants_are_within_reasonable_bounds() {
    assert!(MARKER_SPACING > 0.0);
    assert!(MARKER_JITTER >= 0.0);
    // Jitter must not push a marker into its neighbor's cell.
    assert!(MARKER_JITTER < MARKER_SPACING);

    assert!(REPEL_RADIUS > 0.0);
    assert!(REPEL_MAX_OFFSET > 0.0);
    // A displaced marker should stay inside the repulsion field.
    assert!(REPEL_MAX_OFFSET < REPEL_RADIUS);

    assert!(GEAR_COUNT > 0);
    assert!(GEAR_SIZE_MIN > 0.0);
    assert!(GEAR_SIZE_SPAN > 0.0);
    // A gear needs enough teeth to read as a gear.
    assert!(GEAR_TEETH_MIN >= 3);
    assert!(GEAR_VIEW_MARGIN >= 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timing_constants_are_sensible() {
    assert!(WAVE_DURATION_SEC > 0.0);
    assert!(BUBBLE_DURATION_SEC > 0.0);
    assert!(BUBBLE_HOVER_LINGER_SEC > 0.0);
    // The linger after leaving is a quick fade, not a full display cycle.
    assert!(BUBBLE_HOVER_LINGER_SEC < BUBBLE_DURATION_SEC);

    assert!((0.0..=1.0).contains(&AMBIENT_CHANCE));
    // Ambient messages should expire before the next chance to speak.
    assert!(AMBIENT_INTERVAL_SEC >= BUBBLE_DURATION_SEC);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn eye_and_rain_constants_are_positive() {
    assert!(EYE_DELTA_DIVISOR > 0.0);
    assert!(EYE_MAX_OFFSET > 0.0);

    assert!(RAIN_COLUMN_COUNT > 0);
    assert!(RAIN_GLYPHS_PER_COLUMN > 0);
    assert!(RAIN_FALL_MIN_SEC > 0.0);
    assert!(RAIN_FALL_SPAN_SEC > 0.0);
    assert!(RAIN_DELAY_MAX_SEC >= 0.0);
}
