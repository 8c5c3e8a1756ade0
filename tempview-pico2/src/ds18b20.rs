//! Bit-banged DS18B20 driver on a single one-wire GPIO.
//!
//! Standard-speed one-wire timing, driven with busy-waits inside critical
//! sections so an interrupt cannot stretch a time slot. The bus idles high
//! through the pull-up; the pin only ever drives low (open-drain style via
//! input/output direction switching).
//!
//! Single-drop bus: enumeration uses READ ROM, which is valid when exactly
//! one device is present. The driver only ever talks to the first sensor
//! found, so the full SEARCH ROM tree walk is not implemented.

use embassy_rp::gpio::{Flex, Pull};
use embassy_time::{Duration, block_for};
use heapless::Vec;
use tempview_common::TemperatureSensor;
use tempview_common::sensor::MAX_SENSORS;

// ROM and function commands
const CMD_READ_ROM: u8 = 0x33;
const CMD_MATCH_ROM: u8 = 0x55;
const CMD_SKIP_ROM: u8 = 0xCC;
const CMD_CONVERT_T: u8 = 0x44;
const CMD_READ_SCRATCHPAD: u8 = 0xBE;

/// 64-bit ROM code addressing one device on the bus.
pub type RomCode = [u8; 8];

/// One-wire bus failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub enum BusError {
    /// No presence pulse, or no usable device behind the pull-up.
    NoDevice,
    /// ROM or scratchpad contents failed CRC validation.
    CrcMismatch,
}

/// DS18B20 on a single flexible GPIO.
pub struct Ds18b20<'d> {
    pin: Flex<'d>,
}

impl<'d> Ds18b20<'d> {
    /// Take over the bus pin. The output latch is parked low once; from
    /// then on direction switching alone drives or releases the bus.
    pub fn new(mut pin: Flex<'d>) -> Self {
        pin.set_pull(Pull::Up);
        pin.set_low();
        pin.set_as_input();
        Self { pin }
    }

    /// Reset pulse followed by presence detection.
    fn reset(&mut self) -> Result<(), BusError> {
        self.pin.set_as_output();
        block_for(Duration::from_micros(480));

        let present = cortex_m::interrupt::free(|_| {
            self.pin.set_as_input();
            block_for(Duration::from_micros(70));
            let present = self.pin.is_low();
            block_for(Duration::from_micros(410));
            present
        });

        if present { Ok(()) } else { Err(BusError::NoDevice) }
    }

    fn write_bit(
        &mut self,
        bit: bool,
    ) {
        cortex_m::interrupt::free(|_| {
            self.pin.set_as_output();
            if bit {
                block_for(Duration::from_micros(6));
                self.pin.set_as_input();
                block_for(Duration::from_micros(64));
            } else {
                block_for(Duration::from_micros(60));
                self.pin.set_as_input();
                block_for(Duration::from_micros(10));
            }
        });
    }

    fn read_bit(&mut self) -> bool {
        cortex_m::interrupt::free(|_| {
            self.pin.set_as_output();
            block_for(Duration::from_micros(6));
            self.pin.set_as_input();
            block_for(Duration::from_micros(9));
            let bit = self.pin.is_high();
            block_for(Duration::from_micros(55));
            bit
        })
    }

    /// One-wire bytes go out LSB first.
    fn write_byte(
        &mut self,
        byte: u8,
    ) {
        for i in 0..8 {
            self.write_bit(byte & (1 << i) != 0);
        }
    }

    fn read_byte(&mut self) -> u8 {
        let mut byte = 0u8;
        for i in 0..8 {
            if self.read_bit() {
                byte |= 1 << i;
            }
        }
        byte
    }

    fn read_rom(&mut self) -> Result<RomCode, BusError> {
        self.reset()?;
        self.write_byte(CMD_READ_ROM);

        let mut rom = [0u8; 8];
        for b in &mut rom {
            *b = self.read_byte();
        }

        if crc8(&rom[..7]) != rom[7] {
            return Err(BusError::CrcMismatch);
        }
        // A shorted bus reads all zeros, which passes CRC.
        if rom == [0u8; 8] {
            return Err(BusError::NoDevice);
        }
        Ok(rom)
    }
}

impl TemperatureSensor for Ds18b20<'_> {
    type Error = BusError;
    type Id = RomCode;

    /// 12-bit conversion time per the datasheet.
    const CONVERSION_DELAY_MS: u32 = 750;

    fn scan(&mut self) -> Result<Vec<RomCode, MAX_SENSORS>, BusError> {
        let rom = self.read_rom()?;
        let mut ids = Vec::new();
        ids.push(rom).ok();
        Ok(ids)
    }

    fn begin_conversion(&mut self) -> Result<(), BusError> {
        self.reset()?;
        self.write_byte(CMD_SKIP_ROM);
        self.write_byte(CMD_CONVERT_T);
        Ok(())
    }

    fn read(
        &mut self,
        id: &RomCode,
    ) -> Result<f32, BusError> {
        self.reset()?;
        self.write_byte(CMD_MATCH_ROM);
        for &b in id {
            self.write_byte(b);
        }
        self.write_byte(CMD_READ_SCRATCHPAD);

        let mut scratchpad = [0u8; 9];
        for b in &mut scratchpad {
            *b = self.read_byte();
        }

        if crc8(&scratchpad[..8]) != scratchpad[8] {
            return Err(BusError::CrcMismatch);
        }

        // Raw reading is sixteenths of a degree, two's complement.
        let raw = i16::from_le_bytes([scratchpad[0], scratchpad[1]]);
        Ok(f32::from(raw) / 16.0)
    }
}

/// Dallas CRC8, polynomial 0x8C (reflected 0x31).
fn crc8(data: &[u8]) -> u8 {
    let mut crc = 0u8;
    for &byte in data {
        let mut b = byte;
        for _ in 0..8 {
            let mix = (crc ^ b) & 0x01;
            crc >>= 1;
            if mix != 0 {
                crc ^= 0x8C;
            }
            b >>= 1;
        }
    }
    crc
}
