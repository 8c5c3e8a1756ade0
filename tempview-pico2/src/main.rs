//! DS18B20 temperature display firmware for Raspberry Pi Pico 2 (RP2350).
//!
//! Reads a DS18B20 over one-wire and shows the value on an ILI9341 panel,
//! redrawing only the glyph cells that changed since the previous reading
//! so the display never flickers.
//!
//! # Wiring
//!
//! - DS18B20 data: GPIO4 (4.7k pull-up to 3V3)
//! - ILI9341: DC=16, CS=17, CLK=18, MOSI=19, Backlight=20, Reset=21

#![no_std]
#![no_main]
// Crate-level lints (match tempview-common for consistency)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod display;
mod ds18b20;
mod ili9341;

use defmt::{error, info};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Flex, Level, Output};
use embassy_rp::spi::Spi;
use embassy_time::{Delay, Timer};
use tempview_common::{
    Action,
    ERROR_BACKOFF_MS,
    Fault,
    INTER_CYCLE_DELAY_MS,
    TemperatureSensor,
    draw_startup_screen,
    reading_field,
    run_cycle,
};
use {defmt_rtt as _, panic_probe as _};

use crate::display::display_spi_config;
use crate::ds18b20::Ds18b20;
use crate::ili9341::{Ili9341, WIDTH};

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"tempview"),
    embassy_rp::binary_info::rp_program_description!(c"DS18B20 temperature display on ILI9341"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("tempview starting...");

    let p = embassy_rp::init(Default::default());

    // Display pins; backlight on from the start
    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_16, Level::Low);
    let rst = Output::new(p.PIN_21, Level::High);
    let mut _backlight = Output::new(p.PIN_20, Level::High);

    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, display_spi_config());
    let mut panel = Ili9341::new(spi, dc, cs, rst);

    if panel.init().await.is_err() {
        error!("display init failed, halting");
        loop {
            Timer::after_secs(1).await;
        }
    }
    info!("ILI9341 initialized");

    // One-wire bus on GPIO4
    let mut sensor = Ds18b20::new(Flex::new(p.PIN_4));
    let id = match sensor.scan() {
        Ok(ids) => {
            info!("DS18B20 found: {}", ids[0]);
            ids[0]
        }
        Err(e) => {
            error!("no DS18B20 on the bus ({}), halting", e);
            loop {
                Timer::after_secs(1).await;
            }
        }
    };

    if draw_startup_screen(&mut panel).is_err() {
        error!("startup screen draw failed, halting");
        loop {
            Timer::after_secs(1).await;
        }
    }

    let mut field = reading_field(WIDTH);
    let mut delay = Delay;

    info!("main loop starting");

    loop {
        match run_cycle(&mut sensor, &id, &mut panel, &mut field, &mut delay) {
            Ok(celsius) => {
                info!("[LECTURA] Temperatura: {=f32} C", celsius);
                Timer::after_millis(INTER_CYCLE_DELAY_MS as u64).await;
            }
            Err(e) => {
                let what = match e.fault() {
                    Fault::SensorRead => "sensor read",
                    Fault::DisplayWrite => "display write",
                    Fault::HardwareInit => "hardware init",
                };
                error!("{=str} failed, recovering", what);

                match e.action() {
                    Action::RetryAfterBackoff => Timer::after_millis(ERROR_BACKOFF_MS as u64).await,
                    Action::Halt => loop {
                        Timer::after_secs(1).await;
                    },
                }
            }
        }
    }
}
