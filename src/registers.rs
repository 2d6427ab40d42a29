//! Register map definitions for the ADXL345 accelerometer.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::params::{Coupling, DataRate, FifoMode, Range, SpiWireMode, TriggerOutput, WakeUpFrequency};

/// Expected contents of the `DEVID` register.
pub const DEVICE_ID: u8 = 0x00;

/// Register address of `DEVID`.
pub const REG_DEVID: u8 = 0x00;
/// Register address of `THRESH_TAP`.
pub const REG_THRESH_TAP: u8 = 0x1D;
/// Register address of `OFSX`.
pub const REG_OFSX: u8 = 0x1E;
/// Register address of `OFSY`.
pub const REG_OFSY: u8 = 0x1F;
/// Register address of `OFSZ`.
pub const REG_OFSZ: u8 = 0x20;
/// Register address of `DUR`.
pub const REG_DUR: u8 = 0x21;
/// Register address of `LATENT`.
pub const REG_LATENT: u8 = 0x22;
/// Register address of `WINDOW`.
pub const REG_WINDOW: u8 = 0x23;
/// Register address of `THRESH_ACT`.
pub const REG_THRESH_ACT: u8 = 0x24;
/// Register address of `THRESH_INACT`.
pub const REG_THRESH_INACT: u8 = 0x25;
/// Register address of `TIME_INACT`.
pub const REG_TIME_INACT: u8 = 0x26;
/// Register address of `ACT_INACT_CTL`.
pub const REG_ACT_INACT_CTL: u8 = 0x27;
/// Register address of `THRESH_FF`.
pub const REG_THRESH_FF: u8 = 0x28;
/// Register address of `TIME_FF`.
pub const REG_TIME_FF: u8 = 0x29;
/// Register address of `TAP_AXES`.
pub const REG_TAP_AXES: u8 = 0x2A;
/// Register address of `ACT_TAP_STATUS`.
pub const REG_ACT_TAP_STATUS: u8 = 0x2B;
/// Register address of `BW_RATE`.
pub const REG_BW_RATE: u8 = 0x2C;
/// Register address of `POWER_CTL`.
pub const REG_POWER_CTL: u8 = 0x2D;
/// Register address of `INT_ENABLE`.
pub const REG_INT_ENABLE: u8 = 0x2E;
/// Register address of `INT_MAP`.
pub const REG_INT_MAP: u8 = 0x2F;
/// Register address of `INT_SOURCE`.
pub const REG_INT_SOURCE: u8 = 0x30;
/// Register address of `DATA_FORMAT`.
pub const REG_DATA_FORMAT: u8 = 0x31;
/// Register address of `DATAX0`.
pub const REG_DATAX0: u8 = 0x32;
/// Register address of `DATAX1`.
pub const REG_DATAX1: u8 = 0x33;
/// Register address of `DATAY0`.
pub const REG_DATAY0: u8 = 0x34;
/// Register address of `DATAY1`.
pub const REG_DATAY1: u8 = 0x35;
/// Register address of `DATAZ0`.
pub const REG_DATAZ0: u8 = 0x36;
/// Register address of `DATAZ1`.
pub const REG_DATAZ1: u8 = 0x37;
/// Register address of `FIFO_CTL`.
pub const REG_FIFO_CTL: u8 = 0x38;
/// Register address of `FIFO_STATUS`.
pub const REG_FIFO_STATUS: u8 = 0x39;

/// Access permissions encoded for each register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterAccess {
    /// Read-only register.
    ReadOnly,
    /// Read/write register.
    ReadWrite,
}

/// Minimal metadata exposed by every register value type.
pub trait Register {
    /// Raw storage backing the register payload.
    type Raw: Copy;
    /// Register address as documented in the datasheet.
    const ADDRESS: u8;
    /// Access permission classification.
    const ACCESS: RegisterAccess;
    /// Optional reset/default value defined by the datasheet.
    const RESET_VALUE: Option<Self::Raw>;
}

/// Decodes a data register pair into a signed sample.
///
/// The low-address byte carries the least significant bits; the pair forms a
/// little-endian two's complement word.
pub const fn decode_sample(low: u8, high: u8) -> i16 {
    i16::from_le_bytes([low, high])
}

/// Encodes a signed sample into the data register pair byte order.
pub const fn encode_sample(sample: i16) -> [u8; 2] {
    sample.to_le_bytes()
}

/// Bitfield representation of the `ACT_INACT_CTL` register (address `0x27`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityControl {
    // Inactivity detection per-axis participation (bits 2:0).
    pub inact_z_enable: bool,
    pub inact_y_enable: bool,
    pub inact_x_enable: bool,
    // Inactivity detection coupling (bit 3).
    pub inact_coupling: Coupling,
    // Activity detection per-axis participation (bits 6:4).
    pub act_z_enable: bool,
    pub act_y_enable: bool,
    pub act_x_enable: bool,
    // Activity detection coupling (bit 7).
    pub act_coupling: Coupling,
}

impl From<u8> for ActivityControl {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<ActivityControl> for u8 {
    fn from(value: ActivityControl) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `TAP_AXES` register (address `0x2A`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TapAxes {
    // Tap detection per-axis participation (bits 2:0).
    pub tap_z_enable: bool,
    pub tap_y_enable: bool,
    pub tap_x_enable: bool,
    // Suppress double tap detection on intermediate acceleration (bit 3).
    pub suppress: bool,
    #[skip]
    __: B4,
}

impl From<u8> for TapAxes {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<TapAxes> for u8 {
    fn from(value: TapAxes) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `ACT_TAP_STATUS` register (address `0x2B`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityTapStatus {
    // First axis involved in the latest tap event (bits 2:0).
    pub tap_z_source: bool,
    pub tap_y_source: bool,
    pub tap_x_source: bool,
    // Device is in sleep mode (bit 3).
    pub asleep: bool,
    // First axis involved in the latest activity event (bits 6:4).
    pub act_z_source: bool,
    pub act_y_source: bool,
    pub act_x_source: bool,
    #[skip]
    __: B1,
}

impl From<u8> for ActivityTapStatus {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<ActivityTapStatus> for u8 {
    fn from(value: ActivityTapStatus) -> Self {
        value.into_bytes()[0]
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ActivityTapStatus {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "ActivityTapStatus {{ ACT: x {} y {} z {}, TAP: x {} y {} z {}, ASLEEP: {} }}",
            self.act_x_source(),
            self.act_y_source(),
            self.act_z_source(),
            self.tap_x_source(),
            self.tap_y_source(),
            self.tap_z_source(),
            self.asleep()
        );
    }
}

/// Bitfield representation of the `BW_RATE` register (address `0x2C`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandwidthRate {
    // Output data rate selection (bits 3:0).
    pub rate: DataRate,
    // Reduced-power operation flag (bit 4).
    pub low_power: bool,
    #[skip]
    __: B3,
}

impl From<u8> for BandwidthRate {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<BandwidthRate> for u8 {
    fn from(value: BandwidthRate) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `POWER_CTL` register (address `0x2D`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerControl {
    // Sleep-mode sampling frequency (bits 1:0).
    pub wakeup: WakeUpFrequency,
    // Sleep mode flag (bit 2).
    pub sleep: bool,
    // Measurement mode flag (bit 3); cleared means standby.
    pub measure: bool,
    // Automatic sleep on inactivity (bit 4).
    pub auto_sleep: bool,
    // Serial linkage of activity and inactivity detection (bit 5).
    pub link: bool,
    #[skip]
    __: B2,
}

impl From<u8> for PowerControl {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<PowerControl> for u8 {
    fn from(value: PowerControl) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `INT_ENABLE` register (address `0x2E`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterruptEnable {
    // FIFO overrun interrupt (bit 0).
    pub overrun: bool,
    // FIFO watermark interrupt (bit 1).
    pub watermark: bool,
    // Free-fall interrupt (bit 2).
    pub free_fall: bool,
    // Inactivity interrupt (bit 3).
    pub inactivity: bool,
    // Activity interrupt (bit 4).
    pub activity: bool,
    // Double tap interrupt (bit 5).
    pub double_tap: bool,
    // Single tap interrupt (bit 6).
    pub single_tap: bool,
    // Data ready interrupt (bit 7).
    pub data_ready: bool,
}

impl From<u8> for InterruptEnable {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<InterruptEnable> for u8 {
    fn from(value: InterruptEnable) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `INT_MAP` register (address `0x2F`).
///
/// Same bit assignment as [`InterruptEnable`]; a cleared bit routes the event
/// to INT1, a set bit to INT2.
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterruptMap {
    pub overrun: bool,
    pub watermark: bool,
    pub free_fall: bool,
    pub inactivity: bool,
    pub activity: bool,
    pub double_tap: bool,
    pub single_tap: bool,
    pub data_ready: bool,
}

impl From<u8> for InterruptMap {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<InterruptMap> for u8 {
    fn from(value: InterruptMap) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `INT_SOURCE` register (address `0x30`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterruptSource {
    // Pending event flags, same bit assignment as `INT_ENABLE`.
    pub overrun: bool,
    pub watermark: bool,
    pub free_fall: bool,
    pub inactivity: bool,
    pub activity: bool,
    pub double_tap: bool,
    pub single_tap: bool,
    pub data_ready: bool,
}

impl From<u8> for InterruptSource {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<InterruptSource> for u8 {
    fn from(value: InterruptSource) -> Self {
        value.into_bytes()[0]
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for InterruptSource {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "InterruptSource {{ DATA_READY: {}, SINGLE_TAP: {}, DOUBLE_TAP: {}, ACTIVITY: {}, INACTIVITY: {}, FREE_FALL: {}, WATERMARK: {}, OVERRUN: {} }}",
            self.data_ready(),
            self.single_tap(),
            self.double_tap(),
            self.activity(),
            self.inactivity(),
            self.free_fall(),
            self.watermark(),
            self.overrun()
        );
    }
}

/// Bitfield representation of the `DATA_FORMAT` register (address `0x31`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataFormat {
    // Measurement range selection (bits 1:0).
    pub range: Range,
    // Left-justified (MSB) result mode (bit 2).
    pub justify: bool,
    // Full-resolution mode; scale stays at the 2 g sensitivity (bit 3).
    pub full_resolution: bool,
    #[skip]
    __: B1,
    // Active-low interrupt outputs (bit 5).
    pub invert_interrupt: bool,
    // SPI wire mode selection (bit 6).
    pub spi: SpiWireMode,
    // Self-test force actuation (bit 7).
    pub self_test: bool,
}

impl From<u8> for DataFormat {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<DataFormat> for u8 {
    fn from(value: DataFormat) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `FIFO_CTL` register (address `0x38`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FifoControl {
    // Watermark sample count, or trigger retention count (bits 4:0).
    pub samples: B5,
    // Trigger event routing (bit 5).
    pub trigger: TriggerOutput,
    // FIFO operating mode (bits 7:6).
    pub mode: FifoMode,
}

impl From<u8> for FifoControl {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<FifoControl> for u8 {
    fn from(value: FifoControl) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `FIFO_STATUS` register (address `0x39`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FifoStatus {
    // Number of buffered entries (bits 5:0).
    pub entries: B6,
    #[skip]
    __: B1,
    // A trigger event has occurred (bit 7).
    pub triggered: bool,
}

impl From<u8> for FifoStatus {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<FifoStatus> for u8 {
    fn from(value: FifoStatus) -> Self {
        value.into_bytes()[0]
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for FifoStatus {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "FifoStatus {{ ENTRIES: {}, FIFO_TRIG: {} }}",
            self.entries(),
            self.triggered()
        );
    }
}

impl Register for ActivityControl {
    type Raw = u8;
    const ADDRESS: u8 = REG_ACT_INACT_CTL;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for TapAxes {
    type Raw = u8;
    const ADDRESS: u8 = REG_TAP_AXES;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for ActivityTapStatus {
    type Raw = u8;
    const ADDRESS: u8 = REG_ACT_TAP_STATUS;
    const ACCESS: RegisterAccess = RegisterAccess::ReadOnly;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for BandwidthRate {
    type Raw = u8;
    const ADDRESS: u8 = REG_BW_RATE;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x0A);
}

impl Register for PowerControl {
    type Raw = u8;
    const ADDRESS: u8 = REG_POWER_CTL;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for InterruptEnable {
    type Raw = u8;
    const ADDRESS: u8 = REG_INT_ENABLE;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for InterruptMap {
    type Raw = u8;
    const ADDRESS: u8 = REG_INT_MAP;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for InterruptSource {
    type Raw = u8;
    const ADDRESS: u8 = REG_INT_SOURCE;
    const ACCESS: RegisterAccess = RegisterAccess::ReadOnly;
    const RESET_VALUE: Option<Self::Raw> = Some(0x02);
}

impl Register for DataFormat {
    type Raw = u8;
    const ADDRESS: u8 = REG_DATA_FORMAT;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for FifoControl {
    type Raw = u8;
    const ADDRESS: u8 = REG_FIFO_CTL;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for FifoStatus {
    type Raw = u8;
    const ADDRESS: u8 = REG_FIFO_STATUS;
    const ACCESS: RegisterAccess = RegisterAccess::ReadOnly;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}
