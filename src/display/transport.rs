//! Bus transport used by the driver to reach the controller

use anyhow::{anyhow, Result};
use embedded_hal::i2c::{Error as _, I2c, Operation};

/// Synchronous register-style bus: every call is a complete transaction.
pub trait Transport {
    /// Write a single byte to `register` of the device at `address`
    fn write_register_byte(&mut self, address: u8, register: u8, value: u8) -> Result<()>;

    /// Write `bytes` to `register` of the device at `address` in one burst
    fn write_register_burst(&mut self, address: u8, register: u8, bytes: &[u8]) -> Result<()>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn write_register_byte(&mut self, address: u8, register: u8, value: u8) -> Result<()> {
        (**self).write_register_byte(address, register, value)
    }

    fn write_register_burst(&mut self, address: u8, register: u8, bytes: &[u8]) -> Result<()> {
        (**self).write_register_burst(address, register, bytes)
    }
}

/// Transport over any `embedded-hal` 1.0 I2C bus
pub struct I2cTransport<I> {
    i2c: I,
}

impl<I: I2c> I2cTransport<I> {
    pub fn new(i2c: I) -> Self {
        Self { i2c }
    }

    /// Give the bus back
    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: I2c> Transport for I2cTransport<I> {
    fn write_register_byte(&mut self, address: u8, register: u8, value: u8) -> Result<()> {
        self.i2c
            .write(address, &[register, value])
            .map_err(|e| anyhow!("i2c write to 0x{:02x} failed: {:?}", address, e.kind()))
    }

    fn write_register_burst(&mut self, address: u8, register: u8, bytes: &[u8]) -> Result<()> {
        // Adjacent writes in one transaction go out without a repeated start
        let register = [register];
        let mut operations = [Operation::Write(&register), Operation::Write(bytes)];
        self.i2c
            .transaction(address, &mut operations)
            .map_err(|e| {
                anyhow!(
                    "i2c burst of {} bytes to 0x{:02x} failed: {:?}",
                    bytes.len(),
                    address,
                    e.kind()
                )
            })
    }
}
