//! Startup screen and reading field layout.
//!
//! Shared by the firmware and the simulator so both show the identical
//! screen: white background, centered banner near the top, and the
//! temperature reading centered at mid-height.

use crate::colors::{BLACK, WHITE};
use crate::config::{READING_SCALE, READING_Y, TEMP_FIELD_CHARS, TITLE_SCALE, TITLE_TEXT, TITLE_Y};
use crate::display::DisplaySink;
use crate::render::{FieldError, TextField, center_text_x, draw_text};

/// Clear the screen and draw the centered startup banner.
pub fn draw_startup_screen<D: DisplaySink>(display: &mut D) -> Result<(), FieldError<D::Error>> {
    display.clear(WHITE).map_err(FieldError::Display)?;
    let x = center_text_x(display.width(), TITLE_TEXT.len(), TITLE_SCALE);
    draw_text(
        display,
        TITLE_TEXT,
        x,
        TITLE_Y as u32,
        BLACK,
        WHITE,
        TITLE_SCALE,
    )
}

/// Build the temperature field, centered horizontally on the display.
pub fn reading_field(display_width: u32) -> TextField<TEMP_FIELD_CHARS> {
    let x = center_text_x(display_width, TEMP_FIELD_CHARS, READING_SCALE);
    TextField::new(x as u16, READING_Y, READING_SCALE, BLACK, WHITE)
}

#[cfg(test)]
mod tests {
    use embedded_graphics::pixelcolor::Rgb565;

    use super::*;
    use crate::colors::WHITE;
    use crate::config::SCREEN_WIDTH;

    struct CountingDisplay {
        blits: usize,
        cleared_with: Option<Rgb565>,
        first_blit: Option<(u16, u16)>,
    }

    impl DisplaySink for CountingDisplay {
        type Error = ();

        fn width(&self) -> u32 { 320 }

        fn height(&self) -> u32 { 240 }

        fn clear(
            &mut self,
            color: Rgb565,
        ) -> Result<(), Self::Error> {
            self.cleared_with = Some(color);
            Ok(())
        }

        fn blit(
            &mut self,
            x0: u16,
            y0: u16,
            _x1: u16,
            _y1: u16,
            _pixels: &[u8],
        ) -> Result<(), Self::Error> {
            if self.first_blit.is_none() {
                self.first_blit = Some((x0, y0));
            }
            self.blits += 1;
            Ok(())
        }
    }

    #[test]
    fn test_startup_screen() {
        let mut display = CountingDisplay {
            blits: 0,
            cleared_with: None,
            first_blit: None,
        };
        draw_startup_screen(&mut display).unwrap();

        assert_eq!(display.cleared_with, Some(WHITE));
        assert_eq!(display.blits, TITLE_TEXT.len());
        // "DALLAS 18B20" at scale 2 is 192px wide, centered on 320.
        assert_eq!(display.first_blit, Some((64, 20)));
    }

    #[test]
    fn test_reading_field_is_centered() {
        let field = reading_field(SCREEN_WIDTH);
        assert_eq!(field.origin(), (52, 100));
        assert_eq!(field.scale(), READING_SCALE);
        assert_eq!(field.cell_pitch(), 24);
    }
}
