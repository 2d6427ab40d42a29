//! Strongly typed parameter enumerations for the ADXL345 driver.
//!
//! These enums map directly to datasheet field encodings and are used across
//! [`Config`](crate::config::Config) and the high-level driver APIs. Prefer these
//! types over raw integers to keep configuration values valid and explicit.
//!
//! # Examples
//!
//! ```rust
//! use adxl345::params::{DataRate, FifoMode, Range};
//!
//! let range = Range::G4;
//! let rate = DataRate::Hz100;
//! let fifo = FifoMode::Stream;
//! let _ = (range, rate, fifo);
//! ```

use modular_bitfield::prelude::Specifier;

/// Available measurement range selections (`DATA_FORMAT.RANGE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 2]
pub enum Range {
    /// ±2 g full-scale range.
    G2 = 0b00,
    /// ±4 g full-scale range.
    G4 = 0b01,
    /// ±8 g full-scale range.
    G8 = 0b10,
    /// ±16 g full-scale range.
    G16 = 0b11,
}

impl Range {
    /// Returns the scale factor in g per least-significant bit for this range.
    pub const fn scale_g_per_lsb(self) -> f32 {
        match self {
            Self::G2 => 0.01916,
            Self::G4 => 0.03823,
            Self::G8 => 0.07664,
            Self::G16 => 0.15328,
        }
    }
}

/// Output data rate selections encoded in `BW_RATE[3:0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 4]
pub enum DataRate {
    /// 0.10 Hz output data rate.
    Hz0_10 = 0b0000,
    /// 0.20 Hz output data rate.
    Hz0_20 = 0b0001,
    /// 0.39 Hz output data rate.
    Hz0_39 = 0b0010,
    /// 0.78 Hz output data rate.
    Hz0_78 = 0b0011,
    /// 1.56 Hz output data rate.
    Hz1_56 = 0b0100,
    /// 3.13 Hz output data rate.
    Hz3_13 = 0b0101,
    /// 6.25 Hz output data rate.
    Hz6_25 = 0b0110,
    /// 12.5 Hz output data rate.
    Hz12_5 = 0b0111,
    /// 25 Hz output data rate.
    Hz25 = 0b1000,
    /// 50 Hz output data rate.
    Hz50 = 0b1001,
    /// 100 Hz output data rate.
    Hz100 = 0b1010,
    /// 200 Hz output data rate.
    Hz200 = 0b1011,
    /// 400 Hz output data rate.
    Hz400 = 0b1100,
    /// 800 Hz output data rate.
    Hz800 = 0b1101,
    /// 1600 Hz output data rate.
    Hz1600 = 0b1110,
    /// 3200 Hz output data rate.
    Hz3200 = 0b1111,
}

impl DataRate {
    /// Returns the nominal output data rate in hertz.
    pub const fn hz(self) -> f32 {
        match self {
            Self::Hz0_10 => 0.10,
            Self::Hz0_20 => 0.20,
            Self::Hz0_39 => 0.39,
            Self::Hz0_78 => 0.78,
            Self::Hz1_56 => 1.56,
            Self::Hz3_13 => 3.13,
            Self::Hz6_25 => 6.25,
            Self::Hz12_5 => 12.5,
            Self::Hz25 => 25.0,
            Self::Hz50 => 50.0,
            Self::Hz100 => 100.0,
            Self::Hz200 => 200.0,
            Self::Hz400 => 400.0,
            Self::Hz800 => 800.0,
            Self::Hz1600 => 1600.0,
            Self::Hz3200 => 3200.0,
        }
    }
}

/// Sleep-mode sampling frequency encoded in `POWER_CTL[1:0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 2]
pub enum WakeUpFrequency {
    /// 8 readings per second.
    Hz8 = 0b00,
    /// 4 readings per second.
    Hz4 = 0b01,
    /// 2 readings per second.
    Hz2 = 0b10,
    /// 1 reading per second.
    Hz1 = 0b11,
}

impl WakeUpFrequency {
    /// Returns the sleep-mode sampling frequency in hertz.
    pub const fn hz(self) -> u8 {
        match self {
            Self::Hz8 => 8,
            Self::Hz4 => 4,
            Self::Hz2 => 2,
            Self::Hz1 => 1,
        }
    }
}

/// FIFO operating modes encoded in `FIFO_CTL[7:6]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 2]
pub enum FifoMode {
    /// FIFO bypassed.
    Bypass = 0b00,
    /// Collect until full, then stop collecting.
    Fifo = 0b01,
    /// Circular buffer holding the latest samples.
    Stream = 0b10,
    /// Retain samples around a trigger event.
    Trigger = 0b11,
}

/// Detection coupling for activity/inactivity comparisons (`ACT_INACT_CTL`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 1]
pub enum Coupling {
    /// DC-coupled: compare against the absolute threshold.
    Dc = 0,
    /// AC-coupled: compare against a reference acquired at detection start.
    Ac = 1,
}

/// SPI wire mode selection bit (`DATA_FORMAT.SPI`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 1]
pub enum SpiWireMode {
    /// 4-wire SPI.
    FourWire = 0,
    /// 3-wire SPI.
    ThreeWire = 1,
}

/// FIFO trigger event routing bit (`FIFO_CTL.TRIGGER`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 1]
pub enum TriggerOutput {
    /// Trigger event linked to INT1.
    Int1 = 0,
    /// Trigger event linked to INT2.
    Int2 = 1,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_scale_factors_match_datasheet() {
        assert_eq!(Range::G2.scale_g_per_lsb(), 0.01916);
        assert_eq!(Range::G4.scale_g_per_lsb(), 0.03823);
        assert_eq!(Range::G8.scale_g_per_lsb(), 0.07664);
        assert_eq!(Range::G16.scale_g_per_lsb(), 0.15328);
    }

    #[test]
    fn data_rate_covers_all_encodings() {
        assert_eq!(DataRate::Hz0_10 as u8, 0b0000);
        assert_eq!(DataRate::Hz100 as u8, 0b1010);
        assert_eq!(DataRate::Hz3200 as u8, 0b1111);
        assert_eq!(DataRate::Hz12_5.hz(), 12.5);
    }

    #[test]
    fn wakeup_frequency_encodings_are_inverted() {
        // Slower sampling uses the larger encoding.
        assert_eq!(WakeUpFrequency::Hz8 as u8, 0b00);
        assert_eq!(WakeUpFrequency::Hz1 as u8, 0b11);
        assert_eq!(WakeUpFrequency::Hz2.hz(), 2);
    }
}
