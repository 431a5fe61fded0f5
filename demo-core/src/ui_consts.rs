// Shared margins
pub const UI_MARGIN: f32 = 10.0;

// Common spacing between grouped controls
pub const SECTION_SPACING: f32 = 6.0;

// Side panel sizing
pub const SIDE_PANEL_WIDTH: f32 = 300.0;

// Text sizes
pub const HEADING_TEXT_SIZE: f32 = 16.0;

// Sections specific
pub const LOG_SCROLL_MAX_HEIGHT: f32 = 180.0;
pub const STEPS_SCROLL_MAX_HEIGHT: f32 = 220.0;
#[cfg(feature = "events")]
pub const EVENTS_MIN_HEIGHT: f32 = 160.0;
