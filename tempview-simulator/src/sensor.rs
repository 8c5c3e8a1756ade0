//! Synthetic temperature source for the simulator.

use heapless::Vec;
use tempview_common::TemperatureSensor;
use tempview_common::sensor::MAX_SENSORS;

/// Injected read failure, for exercising the recovery path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadFault;

/// Slow sine wave around room temperature.
///
/// The wave is advanced when a conversion starts, so repeated reads between
/// conversions return the same value - same as the real sensor.
pub struct DemoSensor {
    phase: f32,
    value: f32,
    pub inject_faults: bool,
}

impl DemoSensor {
    pub fn new() -> Self {
        Self {
            phase: 0.0,
            value: 23.5,
            inject_faults: false,
        }
    }
}

impl Default for DemoSensor {
    fn default() -> Self { Self::new() }
}

impl TemperatureSensor for DemoSensor {
    type Error = ReadFault;
    type Id = u8;

    // No bus to wait for.
    const CONVERSION_DELAY_MS: u32 = 0;

    fn scan(&mut self) -> Result<Vec<u8, MAX_SENSORS>, ReadFault> {
        let mut ids = Vec::new();
        ids.push(0).ok();
        Ok(ids)
    }

    fn begin_conversion(&mut self) -> Result<(), ReadFault> {
        self.phase += 0.12;
        self.value = 23.5 + 8.0 * (self.phase * 0.25).sin();
        Ok(())
    }

    fn read(
        &mut self,
        _id: &u8,
    ) -> Result<f32, ReadFault> {
        if self.inject_faults {
            return Err(ReadFault);
        }
        Ok(self.value)
    }
}
