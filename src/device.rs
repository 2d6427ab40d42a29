//! High-level ADXL345 device driver implementation.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::interface::i2c::I2cInterface;
use crate::interface::spi::SpiInterface;
use crate::interface::Adxl345Interface;
use crate::registers::{
    decode_sample,
    ActivityTapStatus,
    FifoStatus,
    InterruptSource,
    DEVICE_ID,
    REG_ACT_INACT_CTL,
    REG_ACT_TAP_STATUS,
    REG_BW_RATE,
    REG_DATAX0,
    REG_DATAY0,
    REG_DATAZ0,
    REG_DATA_FORMAT,
    REG_DEVID,
    REG_DUR,
    REG_FIFO_CTL,
    REG_FIFO_STATUS,
    REG_INT_ENABLE,
    REG_INT_MAP,
    REG_INT_SOURCE,
    REG_LATENT,
    REG_OFSX,
    REG_OFSY,
    REG_OFSZ,
    REG_POWER_CTL,
    REG_TAP_AXES,
    REG_THRESH_ACT,
    REG_THRESH_FF,
    REG_THRESH_INACT,
    REG_THRESH_TAP,
    REG_TIME_FF,
    REG_TIME_INACT,
    REG_WINDOW,
};
use embedded_hal::i2c::I2c;
use embedded_hal::spi::SpiDevice;

// Number of consecutive bytes forming one axis sample pair.
const AXIS_BYTES: usize = 2;
// Number of consecutive bytes spanning X, Y, Z axis sample pairs.
const VECTOR_BYTES: usize = 6;

/// High-level synchronous driver for the ADXL345 accelerometer.
///
/// Construction attempts a one-shot initialization gated by the identity
/// check: on a match the full configuration is written to the device and the
/// driver becomes ready; on a mismatch nothing is written and the driver
/// stays non-ready for its whole lifetime. Data reads are never gated on
/// readiness.
pub struct Adxl345<IFACE> {
    interface: IFACE,
    config: Config,
    scale: f32,
    ready: bool,
}

impl<IFACE> Adxl345<IFACE> {
    // ==================================================================
    // == Driver Ownership & State ======================================
    // ==================================================================
    /// Consumes the driver and returns the owned interface.
    pub fn release(self) -> (IFACE, Config) {
        (self.interface, self.config)
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }

    /// Returns a shared reference to the configuration written at bring-up.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns whether the identity check passed and the device was configured.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Returns the cached scale factor in g per least-significant bit.
    pub fn scale_factor(&self) -> f32 {
        self.scale
    }

    /// Marks the device as torn down.
    ///
    /// Purely a logical state change; no bus traffic is issued and the device
    /// keeps whatever configuration it holds.
    pub fn deinitialize(&mut self) {
        if self.ready {
            self.ready = false;
        }
    }
}

impl<I2C> Adxl345<I2cInterface<I2C>>
where
    I2C: I2c,
{
    // ==================================================================
    // == I2C Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for I²C transports using the default address.
    pub fn new_i2c(i2c: I2C, config: Config) -> Result<Self, I2C::Error> {
        Self::new(I2cInterface::new(i2c), config)
    }

    /// Convenience constructor for I²C transports with an explicit address.
    pub fn new_i2c_with_address(i2c: I2C, address: u8, config: Config) -> Result<Self, I2C::Error> {
        Self::new(I2cInterface::with_address(i2c, address), config)
    }

    /// Releases the driver, returning the I²C bus and configuration.
    pub fn release_i2c(self) -> (I2C, Config) {
        let (iface, config) = self.release();
        (iface.release(), config)
    }
}

impl<SPI> Adxl345<SpiInterface<SPI>>
where
    SPI: SpiDevice,
{
    // ==================================================================
    // == SPI Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for SPI transports.
    pub fn new_spi(spi: SPI, config: Config) -> Result<Self, SPI::Error> {
        Self::new(SpiInterface::new(spi), config)
    }

    /// Releases the driver, returning the SPI device and configuration.
    pub fn release_spi(self) -> (SPI, Config) {
        let (iface, config) = self.release();
        (iface.release(), config)
    }
}

impl<IFACE, CommE> Adxl345<IFACE>
where
    IFACE: Adxl345Interface<Error = CommE>,
{
    // ==================================================================
    // == Construction & Initialization =================================
    // ==================================================================
    /// Creates a new driver instance and immediately attempts initialization.
    ///
    /// The scale factor is computed once from the configured measurement
    /// range and cached for the driver's lifetime. An identity mismatch is
    /// not an error: the returned driver simply reports `is_ready() == false`
    /// and no configuration register is written.
    pub fn new(interface: IFACE, config: Config) -> Result<Self, CommE> {
        let mut device = Self {
            interface,
            scale: config.scale_factor(),
            ready: false,
            config,
        };
        device.initialize()?;
        Ok(device)
    }

    /// Runs the one-shot bring-up program.
    ///
    /// Writes every configuration register in declared order, gated by the
    /// identity check at the top. There is no partial-failure handling: the
    /// program runs in full or not at all.
    fn initialize(&mut self) -> Result<(), CommE> {
        if self.device_id()? != DEVICE_ID {
            return Ok(());
        }

        let config = self.config;
        self.write_byte(REG_THRESH_TAP, config.tap_threshold)?;
        self.write_byte(REG_OFSX, config.offset_x)?;
        self.write_byte(REG_OFSY, config.offset_y)?;
        self.write_byte(REG_OFSZ, config.offset_z)?;
        self.write_byte(REG_DUR, config.tap_duration)?;
        self.write_byte(REG_LATENT, config.tap_latency)?;
        self.write_byte(REG_WINDOW, config.tap_window)?;
        self.write_byte(REG_THRESH_ACT, config.activity_threshold)?;
        self.write_byte(REG_THRESH_INACT, config.inactivity_threshold)?;
        self.write_byte(REG_TIME_INACT, config.inactivity_time)?;
        self.write_byte(REG_ACT_INACT_CTL, config.activity_control.into())?;
        self.write_byte(REG_THRESH_FF, config.freefall_threshold)?;
        self.write_byte(REG_TIME_FF, config.freefall_time)?;
        self.write_byte(REG_TAP_AXES, config.tap_axes.into())?;
        self.write_byte(REG_BW_RATE, config.bandwidth_rate.into())?;
        self.write_byte(REG_POWER_CTL, config.power_control.into())?;
        self.write_byte(REG_INT_ENABLE, config.interrupt_enable.into())?;
        self.write_byte(REG_INT_MAP, config.interrupt_map.into())?;
        self.write_byte(REG_DATA_FORMAT, config.data_format.into())?;
        self.write_byte(REG_FIFO_CTL, config.fifo_control.into())?;
        self.ready = true;

        Ok(())
    }

    // ==================================================================
    // == Identification & Status =======================================
    // ==================================================================
    /// Reads the identity register.
    pub fn device_id(&mut self) -> Result<u8, CommE> {
        self.read_byte(REG_DEVID)
    }

    /// Reads the activity/tap event source register.
    pub fn read_activity_tap_status(&mut self) -> Result<ActivityTapStatus, CommE> {
        Ok(ActivityTapStatus::from(self.read_byte(REG_ACT_TAP_STATUS)?))
    }

    /// Reads the pending interrupt source register.
    ///
    /// Reading clears the event-latched bits on the device.
    pub fn read_interrupt_source(&mut self) -> Result<InterruptSource, CommE> {
        Ok(InterruptSource::from(self.read_byte(REG_INT_SOURCE)?))
    }

    /// Reads the FIFO entry counter and trigger state.
    pub fn read_fifo_status(&mut self) -> Result<FifoStatus, CommE> {
        Ok(FifoStatus::from(self.read_byte(REG_FIFO_STATUS)?))
    }

    // ==================================================================
    // == Data Acquisition ==============================================
    // ==================================================================
    /// Reads the raw X-axis sample.
    pub fn read_x_raw(&mut self) -> Result<i16, CommE> {
        self.read_axis_raw(REG_DATAX0)
    }

    /// Reads the raw Y-axis sample.
    pub fn read_y_raw(&mut self) -> Result<i16, CommE> {
        self.read_axis_raw(REG_DATAY0)
    }

    /// Reads the raw Z-axis sample.
    pub fn read_z_raw(&mut self) -> Result<i16, CommE> {
        self.read_axis_raw(REG_DATAZ0)
    }

    /// Reads the X-axis acceleration in g.
    pub fn read_x_scaled(&mut self) -> Result<f32, CommE> {
        Ok(self.read_x_raw()? as f32 * self.scale)
    }

    /// Reads the Y-axis acceleration in g.
    pub fn read_y_scaled(&mut self) -> Result<f32, CommE> {
        Ok(self.read_y_raw()? as f32 * self.scale)
    }

    /// Reads the Z-axis acceleration in g.
    pub fn read_z_scaled(&mut self) -> Result<f32, CommE> {
        Ok(self.read_z_raw()? as f32 * self.scale)
    }

    /// Reads a raw acceleration triplet from one burst transfer.
    ///
    /// All six data bytes come from a single bus transaction, so the three
    /// axes belong to the same latched sample; independent per-axis reads can
    /// interleave with a data update and mix two samples.
    pub fn read_xyz_raw(&mut self) -> Result<[i16; 3], CommE> {
        let mut raw = [0u8; VECTOR_BYTES];
        self.read_bytes(REG_DATAX0, &mut raw)?;

        Ok([
            decode_sample(raw[0], raw[1]),
            decode_sample(raw[2], raw[3]),
            decode_sample(raw[4], raw[5]),
        ])
    }

    /// Reads an acceleration triplet in g from one burst transfer.
    pub fn read_xyz_scaled(&mut self) -> Result<[f32; 3], CommE> {
        let raw = self.read_xyz_raw()?;
        Ok(raw.map(|sample| sample as f32 * self.scale))
    }

    // ==================================================================
    // == Internal Bus Helpers ==========================================
    // ==================================================================
    fn read_axis_raw(&mut self, register: u8) -> Result<i16, CommE> {
        let mut raw = [0u8; AXIS_BYTES];
        self.read_bytes(register, &mut raw)?;
        Ok(decode_sample(raw[0], raw[1]))
    }

    fn write_byte(&mut self, register: u8, value: u8) -> Result<(), CommE> {
        self.interface
            .write_register(register, value)
            .map_err(Error::from)
    }

    fn read_byte(&mut self, register: u8) -> Result<u8, CommE> {
        self.interface.read_register(register).map_err(Error::from)
    }

    fn read_bytes(&mut self, register: u8, buf: &mut [u8]) -> Result<(), CommE> {
        self.interface.read_many(register, buf).map_err(Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::i2c::PRIMARY_ADDRESS;
    use crate::params::{Coupling, DataRate, FifoMode, Range};
    use crate::registers::{
        ActivityControl,
        BandwidthRate,
        DataFormat,
        FifoControl,
        InterruptEnable,
        PowerControl,
        TapAxes,
    };
    use embedded_hal_mock::eh1::i2c::{Mock, Transaction};

    // Bring-up write order, one address per writable register.
    const CONFIG_ADDRESSES: [u8; 20] = [
        0x1D, 0x1E, 0x1F, 0x20, 0x21, 0x22, 0x23, 0x24, 0x25, 0x26, 0x27, 0x28, 0x29, 0x2A, 0x2C,
        0x2D, 0x2E, 0x2F, 0x31, 0x38,
    ];

    fn identity_read(response: u8) -> Transaction {
        Transaction::write_read(PRIMARY_ADDRESS, vec![REG_DEVID], vec![response])
    }

    #[test]
    fn initialization_writes_every_register_in_order() {
        let config = Config::new()
            .tap_threshold(0x30)
            .offsets(0x01, 0x02, 0xFD)
            .tap_duration(0x10)
            .tap_latency(0x50)
            .tap_window(0xF0)
            .activity_threshold(0x20)
            .inactivity_threshold(0x08)
            .inactivity_time(0x05)
            .activity_control(
                ActivityControl::new()
                    .with_act_x_enable(true)
                    .with_act_coupling(Coupling::Ac),
            )
            .freefall_threshold(0x07)
            .freefall_time(0x2D)
            .tap_axes(TapAxes::new().with_tap_z_enable(true))
            .bandwidth_rate(BandwidthRate::new().with_rate(DataRate::Hz100))
            .power_control(PowerControl::new().with_measure(true))
            .interrupt_enable(InterruptEnable::new().with_data_ready(true))
            .data_format(DataFormat::new().with_range(Range::G4))
            .fifo_control(FifoControl::new().with_mode(FifoMode::Stream).with_samples(16))
            .build();

        let expectations = [
            identity_read(DEVICE_ID),
            Transaction::write(PRIMARY_ADDRESS, vec![0x1D, 0x30]),
            Transaction::write(PRIMARY_ADDRESS, vec![0x1E, 0x01]),
            Transaction::write(PRIMARY_ADDRESS, vec![0x1F, 0x02]),
            Transaction::write(PRIMARY_ADDRESS, vec![0x20, 0xFD]),
            Transaction::write(PRIMARY_ADDRESS, vec![0x21, 0x10]),
            Transaction::write(PRIMARY_ADDRESS, vec![0x22, 0x50]),
            Transaction::write(PRIMARY_ADDRESS, vec![0x23, 0xF0]),
            Transaction::write(PRIMARY_ADDRESS, vec![0x24, 0x20]),
            Transaction::write(PRIMARY_ADDRESS, vec![0x25, 0x08]),
            Transaction::write(PRIMARY_ADDRESS, vec![0x26, 0x05]),
            Transaction::write(PRIMARY_ADDRESS, vec![0x27, 0xC0]),
            Transaction::write(PRIMARY_ADDRESS, vec![0x28, 0x07]),
            Transaction::write(PRIMARY_ADDRESS, vec![0x29, 0x2D]),
            Transaction::write(PRIMARY_ADDRESS, vec![0x2A, 0x01]),
            Transaction::write(PRIMARY_ADDRESS, vec![0x2C, 0x0A]),
            Transaction::write(PRIMARY_ADDRESS, vec![0x2D, 0x08]),
            Transaction::write(PRIMARY_ADDRESS, vec![0x2E, 0x80]),
            Transaction::write(PRIMARY_ADDRESS, vec![0x2F, 0x00]),
            Transaction::write(PRIMARY_ADDRESS, vec![0x31, 0x01]),
            Transaction::write(PRIMARY_ADDRESS, vec![0x38, 0x90]),
        ];

        let device = Adxl345::new_i2c(Mock::new(&expectations), config).unwrap();
        assert!(device.is_ready());

        let (mut i2c, _) = device.release_i2c();
        i2c.done();
    }

    #[test]
    fn identity_mismatch_writes_nothing_and_stays_non_ready() {
        let expectations = [identity_read(0xE5)];

        let device = Adxl345::new_i2c(Mock::new(&expectations), Config::default()).unwrap();
        assert!(!device.is_ready());

        let (mut i2c, _) = device.release_i2c();
        i2c.done();
    }

    #[test]
    fn scale_factor_is_cached_even_without_initialization() {
        let expectations = [identity_read(0xE5)];
        let config = Config::new()
            .data_format(DataFormat::new().with_range(Range::G16))
            .build();

        let device = Adxl345::new_i2c(Mock::new(&expectations), config).unwrap();
        assert!(!device.is_ready());
        assert_eq!(device.scale_factor(), 0.15328);

        let (mut i2c, _) = device.release_i2c();
        i2c.done();
    }

    #[test]
    fn read_x_scaled_applies_cached_scale() {
        let expectations = [
            identity_read(0xE5),
            // Raw sample of -100 at the default ±2 g scale.
            Transaction::write_read(PRIMARY_ADDRESS, vec![REG_DATAX0], vec![0x9C, 0xFF]),
        ];

        let mut device = Adxl345::new_i2c(Mock::new(&expectations), Config::default()).unwrap();
        let x = device.read_x_scaled().unwrap();
        assert!((x - (-1.916)).abs() < 1e-5);

        let (mut i2c, _) = device.release_i2c();
        i2c.done();
    }

    #[test]
    fn vector_read_uses_one_burst_transfer() {
        let expectations = [
            identity_read(0xE5),
            Transaction::write_read(
                PRIMARY_ADDRESS,
                vec![REG_DATAX0],
                vec![0x64, 0x00, 0x9C, 0xFF, 0x00, 0x02],
            ),
        ];

        let mut device = Adxl345::new_i2c(Mock::new(&expectations), Config::default()).unwrap();
        let [x, y, z] = device.read_xyz_scaled().unwrap();
        assert!((x - 1.916).abs() < 1e-5);
        assert!((y - (-1.916)).abs() < 1e-5);
        assert!((z - 9.80992).abs() < 1e-4);

        let (mut i2c, _) = device.release_i2c();
        i2c.done();
    }

    #[test]
    fn per_axis_reads_issue_independent_pair_transfers() {
        let expectations = [
            identity_read(0xE5),
            Transaction::write_read(PRIMARY_ADDRESS, vec![REG_DATAX0], vec![0x01, 0x00]),
            Transaction::write_read(PRIMARY_ADDRESS, vec![REG_DATAY0], vec![0x02, 0x00]),
            Transaction::write_read(PRIMARY_ADDRESS, vec![REG_DATAZ0], vec![0x03, 0x00]),
        ];

        let mut device = Adxl345::new_i2c(Mock::new(&expectations), Config::default()).unwrap();
        assert_eq!(device.read_x_raw().unwrap(), 1);
        assert_eq!(device.read_y_raw().unwrap(), 2);
        assert_eq!(device.read_z_raw().unwrap(), 3);

        let (mut i2c, _) = device.release_i2c();
        i2c.done();
    }

    #[test]
    fn deinitialize_clears_readiness_without_bus_traffic() {
        let mut expectations = vec![identity_read(DEVICE_ID)];
        for address in CONFIG_ADDRESSES {
            expectations.push(Transaction::write(PRIMARY_ADDRESS, vec![address, 0x00]));
        }

        let mut device = Adxl345::new_i2c(Mock::new(&expectations), Config::default()).unwrap();
        assert!(device.is_ready());

        device.deinitialize();
        assert!(!device.is_ready());

        let (mut i2c, _) = device.release_i2c();
        i2c.done();
    }

    #[test]
    fn status_registers_decode_into_typed_values() {
        let expectations = [
            identity_read(0xE5),
            Transaction::write_read(PRIMARY_ADDRESS, vec![REG_ACT_TAP_STATUS], vec![0b0100_0100]),
            Transaction::write_read(PRIMARY_ADDRESS, vec![REG_INT_SOURCE], vec![0b1000_0010]),
            Transaction::write_read(PRIMARY_ADDRESS, vec![REG_FIFO_STATUS], vec![0b0001_1111]),
        ];

        let mut device = Adxl345::new_i2c(Mock::new(&expectations), Config::default()).unwrap();

        let activity = device.read_activity_tap_status().unwrap();
        assert!(activity.act_x_source());
        assert!(activity.tap_x_source());
        assert!(!activity.asleep());

        let source = device.read_interrupt_source().unwrap();
        assert!(source.data_ready());
        assert!(source.watermark());

        let fifo = device.read_fifo_status().unwrap();
        assert_eq!(fifo.entries(), 31);
        assert!(!fifo.triggered());

        let (mut i2c, _) = device.release_i2c();
        i2c.done();
    }
}
