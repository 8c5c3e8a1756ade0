//! Display sink interface.

use embedded_graphics::pixelcolor::Rgb565;

/// A framebuffer-backed display accepting rectangular pixel blocks.
///
/// Coordinates are absolute screen pixels; blit rectangles are inclusive on
/// both corners, matching the window addressing of SPI display controllers.
pub trait DisplaySink {
    type Error;

    /// Display width in pixels.
    fn width(&self) -> u32;

    /// Display height in pixels.
    fn height(&self) -> u32;

    /// Fill the whole screen with one color.
    fn clear(
        &mut self,
        color: Rgb565,
    ) -> Result<(), Self::Error>;

    /// Write a pixel block to the rectangle `(x0, y0)..=(x1, y1)`.
    ///
    /// `pixels` is row-major RGB565 with big-endian byte order and must hold
    /// exactly `(x1 - x0 + 1) * (y1 - y0 + 1) * 2` bytes.
    fn blit(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        pixels: &[u8],
    ) -> Result<(), Self::Error>;
}
