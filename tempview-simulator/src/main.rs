//! Desktop simulator for the DS18B20 temperature display.
//!
//! Runs the same startup screen and driver loop as the firmware against an
//! embedded-graphics simulator window, with a synthetic sine-wave sensor.
//!
//! # Keys
//!
//! - **E**: toggle sensor fault injection (watch the recovery path)
//! - **Q**/**Escape**: quit

// Crate-level lints (match tempview-common for consistency)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod sensor;

use std::thread;
use std::time::Duration;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use embedded_hal::delay::DelayNs;
use tempview_common::{
    Action,
    DisplaySink,
    ERROR_BACKOFF_MS,
    INTER_CYCLE_DELAY_MS,
    SCREEN_HEIGHT,
    SCREEN_WIDTH,
    TemperatureSensor,
    draw_startup_screen,
    reading_field,
    run_cycle,
};

use crate::sensor::DemoSensor;

/// Adapter exposing the simulator display through the sink contract.
struct SimPanel {
    display: SimulatorDisplay<Rgb565>,
}

impl DisplaySink for SimPanel {
    type Error = core::convert::Infallible;

    fn width(&self) -> u32 { self.display.size().width }

    fn height(&self) -> u32 { self.display.size().height }

    fn clear(
        &mut self,
        color: Rgb565,
    ) -> Result<(), Self::Error> {
        self.display.clear(color)
    }

    fn blit(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        pixels: &[u8],
    ) -> Result<(), Self::Error> {
        let area = Rectangle::new(
            Point::new(i32::from(x0), i32::from(y0)),
            Size::new(u32::from(x1 - x0) + 1, u32::from(y1 - y0) + 1),
        );
        let colors = pixels
            .chunks_exact(2)
            .map(|px| Rgb565::from(RawU16::new(u16::from_be_bytes([px[0], px[1]]))));
        self.display.fill_contiguous(&area, colors)
    }
}

/// Thread-sleep delay provider for the driver cycle.
struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(
        &mut self,
        ns: u32,
    ) {
        thread::sleep(Duration::from_nanos(u64::from(ns)));
    }
}

fn main() {
    let mut panel = SimPanel {
        display: SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)),
    };
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("tempview", &output_settings);

    let mut sensor = DemoSensor::new();
    let id = match sensor.scan() {
        Ok(ids) => ids[0],
        Err(_) => {
            eprintln!("no sensor available");
            return;
        }
    };

    draw_startup_screen(&mut panel).ok();
    window.update(&panel.display);

    let mut field = reading_field(SCREEN_WIDTH);
    let mut delay = StdDelay;

    'running: loop {
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, .. } => match keycode {
                    Keycode::Q | Keycode::Escape => break 'running,
                    Keycode::E => {
                        sensor.inject_faults = !sensor.inject_faults;
                        println!(
                            "fault injection: {}",
                            if sensor.inject_faults { "ON" } else { "OFF" }
                        );
                    }
                    _ => {}
                },
                _ => {}
            }
        }

        match run_cycle(&mut sensor, &id, &mut panel, &mut field, &mut delay) {
            Ok(celsius) => {
                println!("[LECTURA] Temperatura: {celsius:.2} C");
                window.update(&panel.display);
                thread::sleep(Duration::from_millis(u64::from(INTER_CYCLE_DELAY_MS)));
            }
            Err(e) => {
                eprintln!("cycle failed: {:?}", e.fault());
                match e.action() {
                    Action::RetryAfterBackoff => {
                        thread::sleep(Duration::from_millis(u64::from(ERROR_BACKOFF_MS)));
                    }
                    Action::Halt => break 'running,
                }
            }
        }
    }
}
