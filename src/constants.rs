// Shared render and interaction constants used by the web frontend.

// Background behind the cab
pub const CLEAR_COLOR: [f64; 3] = [0.94, 0.95, 0.96];

// Selected surfaces pulse towards the highlight colour at this strength (0..1)
pub const HIGHLIGHT_STRENGTH: f32 = 1.0;

// Initial instance buffer size; grows to the next power of two when exceeded
pub const INSTANCE_CAPACITY: usize = 128;

// Side segments for button and light-fixture cylinders
pub const CYLINDER_SEGMENTS: u16 = 24;

// Pointer travel (CSS px) beyond which a press no longer counts as a click
pub const CLICK_SLOP_PX: f32 = 6.0;

// DOM element ids provided by index.html
pub const CANVAS_ID: &str = "app-canvas";
pub const SIDEBAR_ID: &str = "sidebar";
pub const DEBUG_PANEL_ID: &str = "debug-panel";
pub const HELP_OVERLAY_ID: &str = "help-overlay";
