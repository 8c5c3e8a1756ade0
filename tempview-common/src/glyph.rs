//! Glyph rasterization into scaled RGB565 pixel blocks.
//!
//! [`rasterize`] turns one character of the 8x8 font into a square block of
//! `8 * scale` pixels per side, each font pixel expanded into a uniform
//! `scale x scale` patch of foreground or background color. The block is
//! row-major RGB565 with big-endian byte order, which is what the display
//! controller consumes on the wire - a blit needs no further conversion.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::prelude::RawData;
use heapless::Vec;

use crate::font::{self, GLYPH_HEIGHT, GLYPH_WIDTH};

/// Largest supported scale factor. The banner uses 2, the reading 3.
pub const MAX_SCALE: u32 = 4;

/// Byte capacity of a pixel block at [`MAX_SCALE`].
pub const MAX_BLOCK_BYTES: usize =
    (GLYPH_WIDTH * MAX_SCALE as usize) * (GLYPH_HEIGHT * MAX_SCALE as usize) * 2;

/// Rasterization failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RasterError {
    /// Scale factor outside `1..=MAX_SCALE`.
    UnsupportedScale(u32),
}

/// A rasterized glyph: a square RGB565 pixel block ready to blit.
#[derive(Debug)]
pub struct GlyphBlock {
    side: u32,
    bytes: Vec<u8, MAX_BLOCK_BYTES>,
}

impl GlyphBlock {
    /// Side length in pixels (`8 * scale`).
    #[inline]
    pub const fn side(&self) -> u32 { self.side }

    /// Row-major RGB565 big-endian pixel data, exactly `side * side * 2` bytes.
    #[inline]
    pub fn bytes(&self) -> &[u8] { &self.bytes }
}

/// Convert a color to the big-endian byte pair the display expects.
#[inline]
fn be_bytes(color: Rgb565) -> [u8; 2] {
    let raw: RawU16 = color.into();
    raw.into_inner().to_be_bytes()
}

/// Rasterize one character into a scaled foreground/background pixel block.
///
/// Characters the font does not cover render as an all-background block,
/// so they erase their cell like a space does.
pub fn rasterize(
    ch: char,
    scale: u32,
    fg: Rgb565,
    bg: Rgb565,
) -> Result<GlyphBlock, RasterError> {
    let s = scale as usize;
    let side = GLYPH_WIDTH * s;
    let len = side * side * 2;
    if scale == 0 || len > MAX_BLOCK_BYTES {
        return Err(RasterError::UnsupportedScale(scale));
    }

    let mask = font::glyph(ch).unwrap_or(&font::BLANK);
    let fg_bytes = be_bytes(fg);
    let bg_bytes = be_bytes(bg);

    let mut bytes: Vec<u8, MAX_BLOCK_BYTES> = Vec::new();
    bytes.resize(len, 0).ok();

    for row in 0..GLYPH_HEIGHT {
        let bits = mask[row];
        for col in 0..GLYPH_WIDTH {
            let on = bits & (0x80 >> col) != 0;
            let px = if on { fg_bytes } else { bg_bytes };

            // Expand the font pixel into a scale x scale patch.
            for sy in 0..s {
                let line = (row * s + sy) * side;
                for sx in 0..s {
                    let idx = (line + col * s + sx) * 2;
                    bytes[idx] = px[0];
                    bytes[idx + 1] = px[1];
                }
            }
        }
    }

    Ok(GlyphBlock {
        side: side as u32,
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, BLUE, RED, WHITE};

    #[test]
    fn test_block_size_at_scale_three() {
        let block = rasterize('2', 3, BLACK, WHITE).unwrap();
        assert_eq!(block.side(), 24);
        assert_eq!(block.bytes().len(), 24 * 24 * 2);
    }

    #[test]
    fn test_scale_bounds() {
        assert_eq!(rasterize('2', 0, BLACK, WHITE).unwrap_err(), RasterError::UnsupportedScale(0));
        assert_eq!(rasterize('2', 5, BLACK, WHITE).unwrap_err(), RasterError::UnsupportedScale(5));
        assert!(rasterize('2', MAX_SCALE, BLACK, WHITE).is_ok());
    }

    #[test]
    fn test_big_endian_pixel_encoding() {
        // RED is 0xF800 in RGB565, BLUE is 0x001F.
        let block = rasterize(' ', 1, BLACK, RED).unwrap();
        assert_eq!(&block.bytes()[..2], &[0xF8, 0x00]);

        let block = rasterize(' ', 1, BLACK, BLUE).unwrap();
        assert_eq!(&block.bytes()[..2], &[0x00, 0x1F]);
    }

    #[test]
    fn test_scaled_patches_are_uniform() {
        // Every 3x3 patch must be a single color matching its font pixel.
        let block = rasterize('7', 3, RED, WHITE).unwrap();
        let mask = crate::font::glyph('7').unwrap();
        let side = block.side() as usize;

        for row in 0..8 {
            for col in 0..8 {
                let on = mask[row] & (0x80 >> col) != 0;
                let expected: [u8; 2] = if on { [0xF8, 0x00] } else { [0xFF, 0xFF] };
                for sy in 0..3 {
                    for sx in 0..3 {
                        let idx = ((row * 3 + sy) * side + col * 3 + sx) * 2;
                        assert_eq!(
                            &block.bytes()[idx..idx + 2],
                            &expected,
                            "cell ({row},{col}) patch ({sy},{sx})"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_space_is_all_background() {
        let block = rasterize(' ', 2, BLACK, WHITE).unwrap();
        assert!(block.bytes().iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn test_unsupported_character_erases_like_space() {
        let fallback = rasterize('~', 2, BLACK, WHITE).unwrap();
        let space = rasterize(' ', 2, BLACK, WHITE).unwrap();
        assert_eq!(fallback.bytes(), space.bytes());
    }

    #[test]
    fn test_glyph_uses_both_colors() {
        let block = rasterize('8', 1, BLACK, WHITE).unwrap();
        let has_fg = block.bytes().chunks_exact(2).any(|px| px == [0x00, 0x00].as_slice());
        let has_bg = block.bytes().chunks_exact(2).any(|px| px == [0xFF, 0xFF].as_slice());
        assert!(has_fg && has_bg);
    }
}
