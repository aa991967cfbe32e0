use glam::Vec2;
use site_core::constants::{
    AMBIENT_INTERVAL_SEC, BUBBLE_DURATION_SEC, BUBBLE_HOVER_LINGER_SEC, EYE_MAX_OFFSET,
    WAVE_DURATION_SEC,
};
use site_core::{
    bubble_top_percent, drift_percent, eye_anchor, eye_offset, Mascot, GREETING, PHRASES,
};

#[test]
fn eye_offset_clamps_at_extremes() {
    let offset = eye_offset(Vec2::new(10_000.0, -10_000.0), Vec2::ZERO);
    assert_eq!(offset, Vec2::new(EYE_MAX_OFFSET, -EYE_MAX_OFFSET));
}

#[test]
fn eye_offset_scales_small_deltas() {
    // Deltas inside the clamp window are simply divided down.
    let offset = eye_offset(Vec2::new(20.0, -40.0), Vec2::ZERO);
    assert!((offset.x - 1.0).abs() < 1e-4);
    assert!((offset.y + 2.0).abs() < 1e-4);
}

#[test]
fn eye_anchor_is_center_at_upper_third() {
    let anchor = eye_anchor(100.0, 200.0, 80.0, 90.0);
    assert_eq!(anchor, Vec2::new(140.0, 230.0));
}

#[test]
fn hover_greets_until_leave_then_lingers() {
    let mut mascot = Mascot::new(1);
    mascot.pointer_enter(0.0);
    assert!(mascot.hovered);
    assert_eq!(mascot.bubble_text(), Some(GREETING));

    // The greeting never times out while hovered.
    mascot.tick(1_000.0);
    assert_eq!(mascot.bubble_text(), Some(GREETING));

    mascot.pointer_leave(1_000.0);
    assert!(!mascot.hovered);
    mascot.tick(1_000.0 + BUBBLE_HOVER_LINGER_SEC / 2.0);
    assert_eq!(mascot.bubble_text(), Some(GREETING));
    mascot.tick(1_000.0 + BUBBLE_HOVER_LINGER_SEC + 0.1);
    assert_eq!(mascot.bubble_text(), None);
}

#[test]
fn activate_waves_then_reverts() {
    let mut mascot = Mascot::new(2);
    mascot.activate(10.0);
    assert!(mascot.waving);
    let text = mascot.bubble_text().expect("wave shows a phrase");
    assert!(PHRASES.contains(&text));

    mascot.tick(10.0 + WAVE_DURATION_SEC - 0.1);
    assert!(mascot.waving);
    mascot.tick(10.0 + WAVE_DURATION_SEC);
    assert!(!mascot.waving);
    assert_eq!(mascot.bubble_text(), None);
}

#[test]
fn new_message_overwrites_pending_clear() {
    let mut mascot = Mascot::new(3);
    mascot.activate(0.0); // would clear at t = 3
    mascot.activate(2.5); // deadline moves to t = 5.5

    // The first activation's clear must not truncate the second message.
    mascot.tick(3.1);
    assert!(mascot.bubble_text().is_some(), "message truncated by stale clear");
    mascot.tick(2.5 + WAVE_DURATION_SEC + 0.1);
    assert_eq!(mascot.bubble_text(), None);
}

#[test]
fn ambient_chatter_suppressed_while_hovered() {
    let mut mascot = Mascot::new(4);
    mascot.pointer_enter(0.0);
    for i in 1..200 {
        mascot.ambient_tick(i as f64 * AMBIENT_INTERVAL_SEC);
        assert_eq!(mascot.bubble_text(), Some(GREETING));
    }
}

#[test]
fn ambient_chatter_eventually_speaks_and_expires() {
    let mut mascot = Mascot::new(123);
    for i in 1..200 {
        let now = i as f64 * AMBIENT_INTERVAL_SEC;
        mascot.ambient_tick(now);
        if let Some(text) = mascot.bubble_text() {
            assert!(PHRASES.contains(&text));
            mascot.tick(now + BUBBLE_DURATION_SEC);
            assert_eq!(mascot.bubble_text(), None);
            return;
        }
    }
    panic!("no ambient message after 200 intervals");
}

#[test]
fn at_most_one_message_at_any_time() {
    let mut mascot = Mascot::new(5);
    mascot.pointer_enter(0.0);
    mascot.activate(0.5);
    // The wave phrase replaced the greeting; there is only one slot.
    let text = mascot.bubble_text().expect("wave phrase shown");
    assert!(PHRASES.contains(&text));
    assert_ne!(text, GREETING);
}

#[test]
fn scroll_drift_is_linear() {
    assert_eq!(drift_percent(0.0), -50.0);
    assert_eq!(drift_percent(1_000.0), 0.0);
    assert_eq!(bubble_top_percent(0.0), 50.0);
    assert_eq!(bubble_top_percent(100.0), 60.0);
}
