//! Blocking ILI9341 display driver for embassy-rp.
//!
//! The driver only needs what the differential renderer asks of it: a full
//! clear at startup and small windowed pixel-block writes afterwards. Each
//! blit sets the controller's column/page address window and streams the
//! RGB565 big-endian payload, so a glyph cell update touches exactly the
//! pixels of that cell.

use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Error as SpiError, Spi};
use embassy_time::Timer;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::raw::RawU16;
use tempview_common::DisplaySink;

/// Display dimensions (landscape mode after rotation).
pub const WIDTH: u32 = 320;
pub const HEIGHT: u32 = 240;

const ROW_BYTES: usize = WIDTH as usize * 2;

// ILI9341 Commands
const SWRESET: u8 = 0x01;
const SLPOUT: u8 = 0x11;
const NORON: u8 = 0x13;
const DISPON: u8 = 0x29;
const CASET: u8 = 0x2A;
const PASET: u8 = 0x2B;
const RAMWR: u8 = 0x2C;
const MADCTL: u8 = 0x36;
const COLMOD: u8 = 0x3A;

// MADCTL flags
const MADCTL_MX: u8 = 0x40; // Column address order
const MADCTL_MV: u8 = 0x20; // Row/column exchange
const MADCTL_BGR: u8 = 0x08; // Panel subpixel order

/// ILI9341 over blocking SPI with DC/CS/RST control pins.
pub struct Ili9341<'d> {
    spi: Spi<'d, SPI0, Blocking>,
    dc: Output<'d>,
    cs: Output<'d>,
    rst: Output<'d>,
}

impl<'d> Ili9341<'d> {
    /// Create a new driver from SPI and control pins.
    pub fn new(
        spi: Spi<'d, SPI0, Blocking>,
        dc: Output<'d>,
        cs: Output<'d>,
        rst: Output<'d>,
    ) -> Self {
        Self { spi, dc, cs, rst }
    }

    /// Initialize the display hardware.
    pub async fn init(&mut self) -> Result<(), SpiError> {
        // Hardware reset pulse
        self.rst.set_high();
        Timer::after_millis(10).await;
        self.rst.set_low();
        Timer::after_millis(10).await;
        self.rst.set_high();
        Timer::after_millis(120).await;

        // Software reset
        self.write_command(SWRESET)?;
        Timer::after_millis(150).await;

        // Exit sleep mode
        self.write_command(SLPOUT)?;
        Timer::after_millis(10).await;

        // Set pixel format to RGB565 (16-bit)
        self.write_command(COLMOD)?;
        self.write_data(&[0x55])?;

        // Memory access control for landscape: row/col exchange + mirror X,
        // BGR subpixel order for this panel.
        self.write_command(MADCTL)?;
        self.write_data(&[MADCTL_MV | MADCTL_MX | MADCTL_BGR])?;

        // Normal display mode
        self.write_command(NORON)?;
        Timer::after_millis(10).await;

        // Display on
        self.write_command(DISPON)?;
        Timer::after_millis(10).await;

        Ok(())
    }

    /// Send a command byte (DC low, CS low during transfer).
    fn write_command(
        &mut self,
        cmd: u8,
    ) -> Result<(), SpiError> {
        self.cs.set_low();
        self.dc.set_low();
        let res = self.spi.blocking_write(&[cmd]);
        self.cs.set_high();
        res
    }

    /// Send data bytes (DC high, CS low during transfer).
    fn write_data(
        &mut self,
        data: &[u8],
    ) -> Result<(), SpiError> {
        self.cs.set_low();
        self.dc.set_high();
        let res = self.spi.blocking_write(data);
        self.cs.set_high();
        res
    }

    /// Set the drawing window, corners inclusive.
    fn set_window(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
    ) -> Result<(), SpiError> {
        self.write_command(CASET)?;
        self.write_data(&[(x0 >> 8) as u8, x0 as u8, (x1 >> 8) as u8, x1 as u8])?;

        self.write_command(PASET)?;
        self.write_data(&[(y0 >> 8) as u8, y0 as u8, (y1 >> 8) as u8, y1 as u8])
    }
}

impl DisplaySink for Ili9341<'_> {
    type Error = SpiError;

    fn width(&self) -> u32 { WIDTH }

    fn height(&self) -> u32 { HEIGHT }

    fn clear(
        &mut self,
        color: Rgb565,
    ) -> Result<(), Self::Error> {
        let raw: RawU16 = color.into();
        let px = raw.into_inner().to_be_bytes();
        let mut row = [0u8; ROW_BYTES];
        for chunk in row.chunks_exact_mut(2) {
            chunk.copy_from_slice(&px);
        }

        self.set_window(0, 0, WIDTH as u16 - 1, HEIGHT as u16 - 1)?;
        self.write_command(RAMWR)?;
        for _ in 0..HEIGHT {
            self.write_data(&row)?;
        }
        Ok(())
    }

    fn blit(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        pixels: &[u8],
    ) -> Result<(), Self::Error> {
        // Rectangles outside the panel are dropped, matching how the
        // renderer clips static text at the screen edges.
        if x0 > x1 || y0 > y1 || x1 as u32 >= WIDTH || y1 as u32 >= HEIGHT {
            return Ok(());
        }

        self.set_window(x0, y0, x1, y1)?;
        self.write_command(RAMWR)?;
        self.write_data(pixels)
    }
}
