//! Shared viewport state and seed derivation.
//!
//! These types intentionally avoid referencing platform-specific APIs and are
//! suitable for use on both native and web targets. The web frontend reads the
//! browser's inner size and scroll offset and hands them to the overlay logic
//! as plain values.

/// Viewport dimensions in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Derive a per-collection RNG seed from a base seed so each overlay's
/// randomized layout is independently reproducible.
pub fn derive_seed(base: u64, salt: u64) -> u64 {
    base ^ salt.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}
