//! SPI configuration for the ILI9341 display.
//!
//! Pin mapping:
//! - DC: GPIO16
//! - CS: GPIO17 (directly to SPI peripheral)
//! - CLK: GPIO18 (SPI0 CLK)
//! - MOSI: GPIO19 (SPI0 TX)
//! - Backlight: GPIO20
//! - Reset: GPIO21

use embassy_rp::spi::{Config as SpiConfig, Phase, Polarity};

/// SPI configuration for the ILI9341.
/// The controller is rated for 40MHz writes; SPI mode 3.
pub fn display_spi_config() -> SpiConfig {
    let mut config = SpiConfig::default();
    config.frequency = 40_000_000;
    config.polarity = Polarity::IdleHigh;
    config.phase = Phase::CaptureOnSecondTransition;
    config
}
