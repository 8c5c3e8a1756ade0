//! One pass of the driver loop: read, format, render.
//!
//! The loop itself lives in the binaries because sleeping is platform
//! specific; everything between two sleeps is [`run_cycle`]. The sequence
//! mirrors the sensor bus contract: start a conversion, block for the
//! bus-mandated delay, read the result, then hand the formatted string to
//! the differential renderer. Any failure aborts the cycle and is
//! classified for the recovery policy in [`crate::error`].

use embedded_hal::delay::DelayNs;

use crate::display::DisplaySink;
use crate::error::{Action, Fault, action_for};
use crate::format::format_temperature;
use crate::render::{FieldError, TextField};
use crate::sensor::TemperatureSensor;

/// Failure of one driver cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleError<SE, DE> {
    /// Conversion or read failed on the sensor bus.
    Sensor(SE),
    /// Rendering failed (rasterizer or display fault).
    Render(FieldError<DE>),
}

impl<SE, DE> CycleError<SE, DE> {
    /// Classify this failure for the recovery policy.
    pub const fn fault(&self) -> Fault {
        match self {
            Self::Sensor(_) => Fault::SensorRead,
            Self::Render(_) => Fault::DisplayWrite,
        }
    }

    /// What the driver loop should do about this failure.
    pub const fn action(&self) -> Action { action_for(self.fault()) }
}

/// Run one read-format-render cycle.
///
/// Blocks for the sensor's conversion delay between starting and reading
/// the measurement. On success returns the Celsius reading that is now on
/// screen. On failure the display keeps whatever the last successful cycle
/// drew; the field's cell tracking stays consistent either way.
pub fn run_cycle<S, D, T, const N: usize>(
    sensor: &mut S,
    id: &S::Id,
    display: &mut D,
    field: &mut TextField<N>,
    delay: &mut T,
) -> Result<f32, CycleError<S::Error, D::Error>>
where
    S: TemperatureSensor,
    D: DisplaySink,
    T: DelayNs,
{
    sensor.begin_conversion().map_err(CycleError::Sensor)?;
    delay.delay_ms(S::CONVERSION_DELAY_MS);
    let celsius = sensor.read(id).map_err(CycleError::Sensor)?;

    let text = format_temperature(celsius);
    field.update(display, &text).map_err(CycleError::Render)?;

    Ok(celsius)
}

#[cfg(test)]
mod tests {
    use embedded_graphics::pixelcolor::Rgb565;
    use heapless::Vec;

    use super::*;
    use crate::colors::{BLACK, WHITE};
    use crate::config::TEMP_FIELD_CHARS;
    use crate::sensor::MAX_SENSORS;

    struct FakeSensor {
        temp: f32,
        fail_read: bool,
        conversions: usize,
    }

    impl TemperatureSensor for FakeSensor {
        type Error = &'static str;
        type Id = u8;

        const CONVERSION_DELAY_MS: u32 = 750;

        fn scan(&mut self) -> Result<Vec<u8, MAX_SENSORS>, Self::Error> {
            Ok(Vec::from_slice(&[7]).unwrap())
        }

        fn begin_conversion(&mut self) -> Result<(), Self::Error> {
            self.conversions += 1;
            Ok(())
        }

        fn read(
            &mut self,
            _id: &u8,
        ) -> Result<f32, Self::Error> {
            if self.fail_read { Err("bus fault") } else { Ok(self.temp) }
        }
    }

    struct CountingDisplay {
        blits: usize,
        fail: bool,
    }

    impl DisplaySink for CountingDisplay {
        type Error = ();

        fn width(&self) -> u32 { 320 }

        fn height(&self) -> u32 { 240 }

        fn clear(
            &mut self,
            _color: Rgb565,
        ) -> Result<(), Self::Error> {
            Ok(())
        }

        fn blit(
            &mut self,
            _x0: u16,
            _y0: u16,
            _x1: u16,
            _y1: u16,
            _pixels: &[u8],
        ) -> Result<(), Self::Error> {
            if self.fail {
                return Err(());
            }
            self.blits += 1;
            Ok(())
        }
    }

    struct RecordingDelay {
        waits_ms: std::vec::Vec<u32>,
    }

    impl DelayNs for RecordingDelay {
        fn delay_ns(
            &mut self,
            ns: u32,
        ) {
            self.waits_ms.push(ns / 1_000_000);
        }
    }

    fn setup() -> (FakeSensor, CountingDisplay, TextField<TEMP_FIELD_CHARS>, RecordingDelay) {
        let sensor = FakeSensor {
            temp: 23.5,
            fail_read: false,
            conversions: 0,
        };
        let display = CountingDisplay {
            blits: 0,
            fail: false,
        };
        let field = TextField::new(52, 100, 3, BLACK, WHITE);
        let delay = RecordingDelay {
            waits_ms: std::vec::Vec::new(),
        };
        (sensor, display, field, delay)
    }

    #[test]
    fn test_successful_cycle() {
        let (mut sensor, mut display, mut field, mut delay) = setup();

        let t = run_cycle(&mut sensor, &7, &mut display, &mut field, &mut delay).unwrap();
        assert_eq!(t, 23.5);
        assert_eq!(sensor.conversions, 1);
        assert_eq!(display.blits, 7, "\"23.50 C\" has seven visible cells");
        assert_eq!(delay.waits_ms, [750], "conversion delay honored");
    }

    #[test]
    fn test_repeated_reading_costs_nothing() {
        let (mut sensor, mut display, mut field, mut delay) = setup();

        run_cycle(&mut sensor, &7, &mut display, &mut field, &mut delay).unwrap();
        let before = display.blits;
        run_cycle(&mut sensor, &7, &mut display, &mut field, &mut delay).unwrap();
        assert_eq!(display.blits, before);
    }

    #[test]
    fn test_digit_change_blits_one_cell() {
        let (mut sensor, mut display, mut field, mut delay) = setup();

        run_cycle(&mut sensor, &7, &mut display, &mut field, &mut delay).unwrap();
        sensor.temp = 23.6;
        let before = display.blits;
        run_cycle(&mut sensor, &7, &mut display, &mut field, &mut delay).unwrap();
        assert_eq!(display.blits, before + 1);
    }

    #[test]
    fn test_read_fault_classification() {
        let (mut sensor, mut display, mut field, mut delay) = setup();
        sensor.fail_read = true;

        let err = run_cycle(&mut sensor, &7, &mut display, &mut field, &mut delay).unwrap_err();
        assert_eq!(err, CycleError::Sensor("bus fault"));
        assert_eq!(err.fault(), Fault::SensorRead);
        assert_eq!(err.action(), Action::RetryAfterBackoff);
    }

    #[test]
    fn test_display_fault_classification() {
        let (mut sensor, mut display, mut field, mut delay) = setup();
        display.fail = true;

        let err = run_cycle(&mut sensor, &7, &mut display, &mut field, &mut delay).unwrap_err();
        assert_eq!(err, CycleError::Render(FieldError::Display(())));
        assert_eq!(err.fault(), Fault::DisplayWrite);
        assert_eq!(err.action(), Action::RetryAfterBackoff);
    }

    #[test]
    fn test_read_fault_leaves_field_state_intact() {
        let (mut sensor, mut display, mut field, mut delay) = setup();

        run_cycle(&mut sensor, &7, &mut display, &mut field, &mut delay).unwrap();

        // Fault window: nothing reaches the display, nothing is forgotten.
        sensor.fail_read = true;
        let before = display.blits;
        run_cycle(&mut sensor, &7, &mut display, &mut field, &mut delay).unwrap_err();
        assert_eq!(display.blits, before);

        // Fault clears with the same temperature: still nothing to redraw.
        sensor.fail_read = false;
        run_cycle(&mut sensor, &7, &mut display, &mut field, &mut delay).unwrap();
        assert_eq!(display.blits, before);
    }
}
