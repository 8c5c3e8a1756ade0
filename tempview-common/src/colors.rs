//! Color constants for the temperature display.
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! This format is native to the ILI9341 and requires no conversion when
//! writing to the display, beyond the big-endian byte order the panel
//! expects on the wire (see [`crate::glyph`]).

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Pure white (31, 63, 31). Screen background.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure black (0, 0, 0). Banner and reading text.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure blue (0, 0, 31).
pub const BLUE: Rgb565 = Rgb565::BLUE;

/// Pure red (31, 0, 0).
pub const RED: Rgb565 = Rgb565::RED;
