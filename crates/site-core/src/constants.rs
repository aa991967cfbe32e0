/// Overlay layout and interaction tuning constants.
///
/// These constants express intended behavior (grid spacing, clamp limits,
/// display durations) and keep magic numbers out of the code.
// Marker field layout (viewport pixels)
pub const MARKER_SPACING: f32 = 80.0;
pub const MARKER_JITTER: f32 = 20.0;

// Pointer repulsion
pub const REPEL_RADIUS: f32 = 100.0;
pub const REPEL_MAX_OFFSET: f32 = 50.0;

// Gear field layout
pub const GEAR_COUNT: usize = 15;
pub const GEAR_SIZE_MIN: f32 = 30.0;
pub const GEAR_SIZE_SPAN: f32 = 60.0;
pub const GEAR_TEETH_MIN: u32 = 8;
pub const GEAR_TEETH_SPAN: u32 = 8;

// Scroll-driven gear motion
pub const GEAR_SPIN_RATE: f32 = 0.5; // degrees per scrolled pixel
pub const GEAR_PHASE_STEP: f32 = 10.0; // per-gear phase offset (degrees)
pub const GEAR_VIEW_MARGIN: f32 = 100.0; // off-screen band kept visible (px)

// Eye tracking
pub const EYE_DELTA_DIVISOR: f32 = 20.0;
pub const EYE_MAX_OFFSET: f32 = 3.0; // px, per axis

// Transient message timing (seconds)
pub const WAVE_DURATION_SEC: f64 = 3.0;
pub const BUBBLE_DURATION_SEC: f64 = 3.0;
pub const BUBBLE_HOVER_LINGER_SEC: f64 = 1.0;
pub const AMBIENT_INTERVAL_SEC: f64 = 5.0;
pub const AMBIENT_CHANCE: f64 = 0.3;

// Mascot scroll drift (percent of own height / viewport)
pub const MASCOT_DRIFT_BASE_PCT: f32 = -50.0;
pub const MASCOT_DRIFT_RATE: f32 = 0.05;
pub const BUBBLE_TOP_BASE_PCT: f32 = 50.0;
pub const BUBBLE_TOP_RATE: f32 = 0.1;

// Matrix rain layout
pub const RAIN_COLUMN_COUNT: usize = 20;
pub const RAIN_GLYPHS_PER_COLUMN: usize = 10;
pub const RAIN_FALL_MIN_SEC: f32 = 3.0;
pub const RAIN_FALL_SPAN_SEC: f32 = 4.0;
pub const RAIN_DELAY_MAX_SEC: f32 = 2.0;
