//! Display layout and timing configuration constants.
//!
//! Layout positions are computed at compile time as `const` where possible;
//! only the horizontal centering depends on the runtime display width (see
//! [`crate::render::center_text_x`]).

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (ILI9341 in landscape orientation: 320x240).
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

// =============================================================================
// Text Layout
// =============================================================================

/// Startup banner text, drawn once and never redrawn.
pub const TITLE_TEXT: &str = "DALLAS 18B20";

/// Pixel scale factor for the banner glyphs (8x8 font -> 16x16 cells).
pub const TITLE_SCALE: u32 = 2;

/// Vertical position of the banner.
pub const TITLE_Y: u16 = 20;

/// Pixel scale factor for the temperature reading (8x8 font -> 24x24 cells).
pub const READING_SCALE: u32 = 3;

/// Vertical position of the temperature reading.
pub const READING_Y: u16 = 100;

/// Character capacity of the temperature field. Sized so that the widest
/// expected reading ("-10.00 C", 8 chars) fits with one cell to spare.
pub const TEMP_FIELD_CHARS: usize = 9;

// =============================================================================
// Driver Loop Timing
// =============================================================================

/// Pause between successful read/render cycles, in milliseconds.
pub const INTER_CYCLE_DELAY_MS: u32 = 250;

/// Pause after a failed cycle before retrying, in milliseconds.
pub const ERROR_BACKOFF_MS: u32 = 1000;
