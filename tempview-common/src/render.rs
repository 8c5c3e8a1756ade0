//! Differential text rendering.
//!
//! This module provides:
//! - [`TextField`] - a fixed-width line of glyph cells with change tracking
//! - [`draw_text`] - plain multi-glyph drawing for static text (the banner)
//! - [`center_text_x`] - horizontal centering helper
//!
//! # Update Strategy
//!
//! | Element | Update Frequency | Strategy |
//! |---------|-----------------|----------|
//! | Banner  | Once at startup | Plain draw, never touched again |
//! | Reading | Every cycle     | Per-cell diff, only changed cells blitted |
//!
//! [`TextField`] owns the string drawn in the previous frame. On update the
//! incoming text is normalized to the field capacity (right-padded with
//! spaces, truncated if longer) and compared cell by cell; only differing
//! cells are rasterized and blitted. A cell going from a visible character
//! to a space is a normal diff - the space glyph is all background, so the
//! blit erases the cell. Unchanged frames cost zero display traffic, which
//! is what keeps the panel flicker-free.
//!
//! Each cell is committed into the stored string only after its blit
//! succeeds. A display fault mid-update therefore leaves the drawn prefix
//! recorded and the remaining cells still marked dirty; the next successful
//! update repaints exactly what is missing.

use embedded_graphics::pixelcolor::Rgb565;

use crate::display::DisplaySink;
use crate::font::GLYPH_WIDTH;
use crate::glyph::{self, RasterError};

/// Rendering failure: rasterizer rejection or propagated display fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError<E> {
    Raster(RasterError),
    Display(E),
}

/// A fixed-width text field with per-cell change tracking.
///
/// `N` is the cell capacity. The stored string starts as all spaces so the
/// first update draws every non-space cell of the incoming text.
pub struct TextField<const N: usize> {
    origin_x: u16,
    origin_y: u16,
    scale: u32,
    fg: Rgb565,
    bg: Rgb565,
    last_rendered: [char; N],
}

impl<const N: usize> TextField<N> {
    /// Create a field anchored at `(origin_x, origin_y)`.
    pub const fn new(
        origin_x: u16,
        origin_y: u16,
        scale: u32,
        fg: Rgb565,
        bg: Rgb565,
    ) -> Self {
        Self {
            origin_x,
            origin_y,
            scale,
            fg,
            bg,
            last_rendered: [' '; N],
        }
    }

    /// Width and height of one cell in pixels.
    #[inline]
    pub const fn cell_pitch(&self) -> u32 { GLYPH_WIDTH as u32 * self.scale }

    /// Screen anchor of cell 0.
    #[inline]
    pub const fn origin(&self) -> (u16, u16) { (self.origin_x, self.origin_y) }

    /// Glyph scale factor.
    #[inline]
    pub const fn scale(&self) -> u32 { self.scale }

    /// Redraw the cells where `text` differs from the previous frame.
    ///
    /// `text` is normalized to exactly `N` characters first: right-padded
    /// with spaces, truncated if longer. Returns the number of blits issued,
    /// which is exactly the number of differing cells.
    pub fn update<D: DisplaySink>(
        &mut self,
        display: &mut D,
        text: &str,
    ) -> Result<usize, FieldError<D::Error>> {
        let mut next = [' '; N];
        for (slot, ch) in next.iter_mut().zip(text.chars()) {
            *slot = ch;
        }

        let pitch = self.cell_pitch();
        let mut blits = 0;

        for i in 0..N {
            if next[i] == self.last_rendered[i] {
                continue;
            }

            let block = glyph::rasterize(next[i], self.scale, self.fg, self.bg)
                .map_err(FieldError::Raster)?;

            let x = self.origin_x as u32 + i as u32 * pitch;
            let y = self.origin_y as u32;
            display
                .blit(
                    x as u16,
                    y as u16,
                    (x + pitch - 1) as u16,
                    (y + pitch - 1) as u16,
                    block.bytes(),
                )
                .map_err(FieldError::Display)?;

            // Commit the cell only once it is actually on screen.
            self.last_rendered[i] = next[i];
            blits += 1;
        }

        Ok(blits)
    }
}

/// Draw `text` glyph by glyph starting at `(x, y)`, without diff tracking.
///
/// Advances one cell per character, wrapping to the left edge when the next
/// cell would cross the right edge and stopping silently at the bottom of
/// the screen.
pub fn draw_text<D: DisplaySink>(
    display: &mut D,
    text: &str,
    x: u32,
    y: u32,
    fg: Rgb565,
    bg: Rgb565,
    scale: u32,
) -> Result<(), FieldError<D::Error>> {
    let pitch = GLYPH_WIDTH as u32 * scale;
    let mut x = x;
    let mut y = y;

    for ch in text.chars() {
        let block = glyph::rasterize(ch, scale, fg, bg).map_err(FieldError::Raster)?;
        display
            .blit(
                x as u16,
                y as u16,
                (x + pitch - 1) as u16,
                (y + pitch - 1) as u16,
                block.bytes(),
            )
            .map_err(FieldError::Display)?;

        x += pitch;
        if x + pitch > display.width() {
            x = 0;
            y += pitch;
        }
        if y + pitch > display.height() {
            return Ok(());
        }
    }

    Ok(())
}

/// X coordinate that centers `len` glyph cells of the given scale.
pub const fn center_text_x(
    display_width: u32,
    len: usize,
    scale: u32,
) -> u32 {
    let text_width = len as u32 * GLYPH_WIDTH as u32 * scale;
    display_width.saturating_sub(text_width) / 2
}
