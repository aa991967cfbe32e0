// Browser-side wiring constants

// Coarse expiry tick for transient mascot state (ms)
pub const MASCOT_TICK_MS: i32 = 250;

// Ambient chatter timer; mirrors AMBIENT_INTERVAL_SEC in site-core (ms)
pub const AMBIENT_INTERVAL_MS: i32 = 5_000;

// Custom cursor trail
pub const TRAIL_LENGTH: usize = 5;

// Header gains its "scrolled" treatment past this offset (px)
pub const HEADER_SCROLL_THRESHOLD: f32 = 50.0;

// Fraction of a section that must be on screen before it reveals
pub const REVEAL_THRESHOLD: f64 = 0.25;
