//! I²C interface implementation built on top of `embedded-hal` `I2c`.

use embedded_hal::i2c::I2c;

use super::Adxl345Interface;

/// Default 7-bit device address (ALT ADDRESS pin low).
pub const PRIMARY_ADDRESS: u8 = 0x53;
/// Alternate 7-bit device address (ALT ADDRESS pin high).
pub const ALTERNATE_ADDRESS: u8 = 0x1D;

/// I²C-based interface implementation for the ADXL345 driver.
///
/// Burst reads rely on the device's register address auto-increment, so a
/// single `write_read` covers contiguous register spans.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Creates a new interface using the default device address.
    pub const fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, PRIMARY_ADDRESS)
    }

    /// Creates a new interface with an explicit 7-bit device address.
    pub const fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Returns the configured 7-bit device address.
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Provides mutable access to the wrapped I²C bus.
    pub fn i2c_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    /// Consumes the interface and returns the owned I²C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Adxl345Interface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error> {
        self.i2c.write(self.address, &[register, value])
    }

    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error> {
        let mut value = [0u8; 1];
        self.read_many(register, &mut value)?;
        Ok(value[0])
    }

    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error> {
        if buf.is_empty() {
            return Ok(());
        }

        self.i2c.write_read(self.address, &[register], buf)
    }
}

#[cfg(test)]
mod tests {
    use super::{I2cInterface, ALTERNATE_ADDRESS, PRIMARY_ADDRESS};
    use crate::interface::Adxl345Interface;
    use embedded_hal_mock::eh1::i2c::{Mock, Transaction};

    #[test]
    fn write_register_frames_address_and_value() {
        let expectations = [Transaction::write(PRIMARY_ADDRESS, vec![0x2D, 0x08])];
        let mut interface = I2cInterface::new(Mock::new(&expectations));

        interface.write_register(0x2D, 0x08).unwrap();
        interface.release().done();
    }

    #[test]
    fn read_register_uses_write_read_framing() {
        let expectations = [Transaction::write_read(
            PRIMARY_ADDRESS,
            vec![0x00],
            vec![0x5A],
        )];
        let mut interface = I2cInterface::new(Mock::new(&expectations));

        let value = interface.read_register(0x00).unwrap();
        assert_eq!(value, 0x5A);
        interface.release().done();
    }

    #[test]
    fn read_many_bursts_contiguous_registers() {
        let expectations = [Transaction::write_read(
            PRIMARY_ADDRESS,
            vec![0x32],
            vec![0x01, 0x02, 0x03, 0x04, 0x05, 0x06],
        )];
        let mut interface = I2cInterface::new(Mock::new(&expectations));

        let mut buffer = [0u8; 6];
        interface.read_many(0x32, &mut buffer).unwrap();
        assert_eq!(buffer, [0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
        interface.release().done();
    }

    #[test]
    fn read_many_ignores_empty_buffer() {
        let mut interface = I2cInterface::new(Mock::new(&[]));

        interface.read_many(0x32, &mut []).unwrap();
        interface.release().done();
    }

    #[test]
    fn alternate_address_is_used_when_configured() {
        let expectations = [Transaction::write(ALTERNATE_ADDRESS, vec![0x31, 0x01])];
        let mut interface = I2cInterface::with_address(Mock::new(&expectations), ALTERNATE_ADDRESS);

        interface.write_register(0x31, 0x01).unwrap();
        interface.release().done();
    }
}
