//! Temperature sensor interface.

use heapless::Vec;

/// Upper bound on devices a single bus scan can report.
pub const MAX_SENSORS: usize = 4;

/// A temperature source on a conversion-then-read bus (DS18B20 style).
///
/// A reading is a two-step exchange: [`begin_conversion`] starts the
/// measurement on the bus, the caller waits [`CONVERSION_DELAY_MS`], then
/// [`read`] fetches the result for one device.
///
/// [`begin_conversion`]: TemperatureSensor::begin_conversion
/// [`read`]: TemperatureSensor::read
/// [`CONVERSION_DELAY_MS`]: TemperatureSensor::CONVERSION_DELAY_MS
pub trait TemperatureSensor {
    type Error;

    /// Per-device address on the bus.
    type Id: Copy;

    /// Bus-mandated wait between starting a conversion and reading it.
    const CONVERSION_DELAY_MS: u32;

    /// Enumerate devices. An empty bus is reported as an error.
    fn scan(&mut self) -> Result<Vec<Self::Id, MAX_SENSORS>, Self::Error>;

    /// Start a temperature conversion on all devices.
    fn begin_conversion(&mut self) -> Result<(), Self::Error>;

    /// Read the last converted temperature of one device, in Celsius.
    fn read(
        &mut self,
        id: &Self::Id,
    ) -> Result<f32, Self::Error>;
}
