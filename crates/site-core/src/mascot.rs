//! Mascot widget state machine.
//!
//! The mascot reacts to hover, click, an ambient timer, and pointer motion
//! (eye tracking). All operations take the current time as a plain `f64` in
//! seconds so the logic stays deterministic and host-testable; the web layer
//! supplies wall-clock timestamps and a coarse expiry tick.
//!
//! There is exactly one bubble slot. Every new message overwrites both the
//! text and the expiry deadline, so a pending clear can never race a newer
//! message.

use crate::constants::{
    AMBIENT_CHANCE, BUBBLE_DURATION_SEC, BUBBLE_HOVER_LINGER_SEC, BUBBLE_TOP_BASE_PCT,
    BUBBLE_TOP_RATE, EYE_DELTA_DIVISOR, EYE_MAX_OFFSET, MASCOT_DRIFT_BASE_PCT, MASCOT_DRIFT_RATE,
    WAVE_DURATION_SEC,
};
use glam::Vec2;
use rand::prelude::*;

/// Fixed greeting shown while the pointer rests on the mascot.
pub const GREETING: &str = "Hi there! 👋";

/// Phrase pool for waves and ambient chatter.
pub const PHRASES: [&str; 6] = [
    "Hello! I'm Juno 🤖",
    "Welcome to Alex's corner of the web!",
    "Scroll on, there's more below!",
    "Built with gears and curiosity.",
    "Let's make something together!",
    "Beep boop. That means hi ✨",
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bubble {
    pub text: &'static str,
    pub until: f64,
}

pub struct Mascot {
    pub hovered: bool,
    pub waving: bool,
    wave_until: f64,
    bubble: Option<Bubble>,
    rng: StdRng,
}

impl Mascot {
    pub fn new(seed: u64) -> Self {
        Self {
            hovered: false,
            waving: false,
            wave_until: 0.0,
            bubble: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Currently displayed message, if any.
    pub fn bubble_text(&self) -> Option<&'static str> {
        self.bubble.map(|b| b.text)
    }

    /// Pointer entered the mascot region: greet until the pointer leaves.
    pub fn pointer_enter(&mut self, _now: f64) {
        self.hovered = true;
        self.set_bubble(GREETING, f64::INFINITY);
    }

    /// Pointer left: keep any active message for a short linger, then let
    /// `tick` clear it.
    pub fn pointer_leave(&mut self, now: f64) {
        self.hovered = false;
        if let Some(bubble) = &mut self.bubble {
            bubble.until = now + BUBBLE_HOVER_LINGER_SEC;
        }
    }

    /// Explicit activation (click): wave and show a random phrase, both
    /// reverting after the wave duration.
    pub fn activate(&mut self, now: f64) {
        self.waving = true;
        self.wave_until = now + WAVE_DURATION_SEC;
        let phrase = self.random_phrase();
        self.set_bubble(phrase, now + WAVE_DURATION_SEC);
    }

    /// Ambient timer: while not hovered, occasionally chatter.
    pub fn ambient_tick(&mut self, now: f64) {
        if self.hovered {
            return;
        }
        if self.rng.gen_bool(AMBIENT_CHANCE) {
            let phrase = self.random_phrase();
            self.set_bubble(phrase, now + BUBBLE_DURATION_SEC);
        }
    }

    /// Clear expired state. Idempotent; called on a coarse timer.
    pub fn tick(&mut self, now: f64) {
        if self.waving && now >= self.wave_until {
            self.waving = false;
        }
        if matches!(self.bubble, Some(b) if now >= b.until) {
            self.bubble = None;
        }
    }

    fn random_phrase(&mut self) -> &'static str {
        PHRASES[self.rng.gen_range(0..PHRASES.len())]
    }

    fn set_bubble(&mut self, text: &'static str, until: f64) {
        self.bubble = Some(Bubble { text, until });
    }
}

/// Eye-pupil offset for a pointer position relative to the mascot anchor:
/// the delta scaled down and clamped per axis, so it holds for arbitrarily
/// large deltas.
pub fn eye_offset(pointer: Vec2, anchor: Vec2) -> Vec2 {
    let delta = (pointer - anchor) / EYE_DELTA_DIVISOR;
    Vec2::new(
        delta.x.clamp(-EYE_MAX_OFFSET, EYE_MAX_OFFSET),
        delta.y.clamp(-EYE_MAX_OFFSET, EYE_MAX_OFFSET),
    )
}

/// Eye-tracking reference point: horizontal center of the mascot rect at one
/// third of its height.
pub fn eye_anchor(rect_left: f32, rect_top: f32, rect_width: f32, rect_height: f32) -> Vec2 {
    Vec2::new(rect_left + rect_width / 2.0, rect_top + rect_height / 3.0)
}

/// Vertical drift of the mascot container as a translate percentage.
pub fn drift_percent(scroll_y: f32) -> f32 {
    MASCOT_DRIFT_BASE_PCT + scroll_y * MASCOT_DRIFT_RATE
}

/// Vertical anchor of the speech bubble as a viewport percentage.
pub fn bubble_top_percent(scroll_y: f32) -> f32 {
    BUBBLE_TOP_BASE_PCT + scroll_y * BUBBLE_TOP_RATE
}
