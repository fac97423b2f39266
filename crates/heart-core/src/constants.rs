// Shared tuning constants for the heart effect.

// Viewports narrower than this count as mobile
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

// Built-in defaults (overridable through the page configuration)
pub const DEFAULT_MOBILE_COUNT: u32 = 3;
pub const DEFAULT_DESKTOP_COUNT: u32 = 6;
pub const DEFAULT_COLORS: [&str; 5] = ["#ff9999", "#ffb3ba", "#ffc8dd", "#bae1ff", "#a2d2ff"];
pub const DEFAULT_SIZE_MIN: f64 = 10.0; // px
pub const DEFAULT_SIZE_MAX: f64 = 20.0; // px
pub const DEFAULT_DURATION_MS: f64 = 1000.0;
pub const DEFAULT_MAX_HEARTS: usize = 30;
pub const DEFAULT_MOVE_X: f64 = 100.0; // full horizontal span, centered on the start
pub const DEFAULT_MOVE_Y: f64 = 100.0; // maximum upward travel
