//! Core logic for the DS18B20 temperature display.
//!
//! This crate contains the platform-agnostic code shared between the
//! simulator and the Pico 2 hardware implementation:
//!
//! - [`font`]: fixed 8x8 monospace bitmap font table
//! - [`glyph`]: rasterizes one character into a scaled RGB565 pixel block
//! - [`render`]: differential text field - redraws only changed cells
//! - [`format`]: fixed-width temperature string formatting
//! - [`sensor`] / [`display`]: collaborator traits for the bus and the panel
//! - [`cycle`]: one read-format-render pass of the driver loop
//! - [`error`]: fault classification and recovery policy
//! - [`colors`] / [`config`] / [`screen`]: palette, layout, startup screen
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p tempview-common
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the firmware consumes the crate as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod cycle;
pub mod display;
pub mod error;
pub mod font;
pub mod format;
pub mod glyph;
pub mod render;
pub mod screen;
pub mod sensor;

// Re-export commonly used items
pub use colors::*;
pub use config::*;
pub use cycle::{CycleError, run_cycle};
pub use display::DisplaySink;
pub use error::{Action, Fault, action_for};
pub use format::format_temperature;
pub use glyph::{GlyphBlock, RasterError, rasterize};
pub use render::{FieldError, TextField, center_text_x, draw_text};
pub use screen::{draw_startup_screen, reading_field};
pub use sensor::TemperatureSensor;
