//! Fixed-width temperature formatting.

use core::fmt::Write;

use heapless::String;

use crate::config::TEMP_FIELD_CHARS;

/// Format a Celsius reading as a field-width string: `"23.50 C  "`.
///
/// Two decimal places with a unit suffix, right-padded with spaces to
/// exactly [`TEMP_FIELD_CHARS`] characters. A reading too wide for the
/// field is truncated; the capacity is sized so no value a DS18B20 can
/// report ever hits that path.
pub fn format_temperature(celsius: f32) -> String<TEMP_FIELD_CHARS> {
    let mut raw: String<16> = String::new();
    let _ = write!(raw, "{celsius:.2} C");

    let mut out: String<TEMP_FIELD_CHARS> = String::new();
    for ch in raw.chars().take(TEMP_FIELD_CHARS) {
        out.push(ch).ok();
    }
    while out.push(' ').is_ok() {}
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typical_reading() {
        assert_eq!(format_temperature(23.5).as_str(), "23.50 C  ");
    }

    #[test]
    fn test_negative_reading_fits() {
        assert_eq!(format_temperature(-9.87).as_str(), "-9.87 C  ");
    }

    #[test]
    fn test_zero() {
        assert_eq!(format_temperature(0.0).as_str(), "0.00 C   ");
    }

    #[test]
    fn test_sensor_range_extremes() {
        assert_eq!(format_temperature(-55.0).as_str(), "-55.00 C ");
        assert_eq!(format_temperature(125.0).as_str(), "125.00 C ");
    }

    #[test]
    fn test_widest_in_field_value() {
        // Nine significant characters, zero cells to spare.
        assert_eq!(format_temperature(-123.46).as_str(), "-123.46 C");
    }

    #[test]
    fn test_over_wide_value_is_truncated() {
        assert_eq!(format_temperature(-1234.5).as_str(), "-1234.50 ");
    }

    #[test]
    fn test_always_full_width() {
        for t in [-55.0, -9.87, 0.0, 23.5, 99.99, 125.0] {
            assert_eq!(format_temperature(t).len(), TEMP_FIELD_CHARS);
        }
    }
}
