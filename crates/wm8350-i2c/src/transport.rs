//! Register transport: framing of register block reads and writes onto the bus.
//!
//! A read is two transfers: the register index on its own, then the data.
//! A write is a single transfer carrying the register index followed by the
//! payload, so the bus is never released between address and data.

use alloc::vec::Vec;

use embedded_hal::i2c::SevenBitAddress;

use crate::bus::I2cBus;
use crate::error::Error;

/// Highest register index defined on the chip.
pub const MAX_REGISTER: u8 = 0xFF;

/// Largest register block accepted by a single write frame.
pub const MAX_BLOCK_LEN: usize = ((MAX_REGISTER as usize) << 1) + 1;

/// Register access capability installed in a chip handle.
///
/// The chip-subsystem only ever touches registers through this trait, so it
/// does not need to know which bus the chip sits on.
pub trait RegisterIo {
    type BusError: core::fmt::Debug;

    /// Read `dest.len()` consecutive register bytes starting at `reg`.
    ///
    /// On failure the contents of `dest` are unspecified.
    fn read(
        &mut self,
        reg: u8,
        dest: &mut [u8],
    ) -> Result<(), Error<Self::BusError>>;

    /// Write `src` to consecutive registers starting at `reg`.
    fn write(&mut self, reg: u8, src: &[u8]) -> Result<(), Error<Self::BusError>>;
}

/// Register transport for a chip at a fixed address on a shared I2C bus.
#[derive(Debug)]
pub struct I2cTransport<'a, B: ?Sized> {
    bus: &'a B,
    address: SevenBitAddress,
}

impl<B: ?Sized> Clone for I2cTransport<'_, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: ?Sized> Copy for I2cTransport<'_, B> {}

impl<'a, B: I2cBus + ?Sized> I2cTransport<'a, B> {
    pub fn new(bus: &'a B, address: SevenBitAddress) -> Self {
        Self { bus, address }
    }

    pub fn address(&self) -> SevenBitAddress {
        self.address
    }

    fn send(&self, frame: &[u8]) -> Result<(), Error<B::Error>> {
        let sent = self.bus.send(self.address, frame).map_err(|e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("wm8350: send to {=u8:#x} failed", self.address);
            Error::Bus(e)
        })?;
        self.check_count(frame.len(), sent)
    }

    fn receive(&self, dest: &mut [u8]) -> Result<(), Error<B::Error>> {
        let received = self.bus.receive(self.address, dest).map_err(|e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("wm8350: receive from {=u8:#x} failed", self.address);
            Error::Bus(e)
        })?;
        self.check_count(dest.len(), received)
    }

    fn check_count(
        &self,
        expected: usize,
        actual: usize,
    ) -> Result<(), Error<B::Error>> {
        if actual != expected {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "wm8350: {=u8:#x} moved {=usize} of {=usize} bytes",
                self.address,
                actual,
                expected
            );
            return Err(Error::IoMismatch { expected, actual });
        }
        Ok(())
    }
}

impl<B: I2cBus + ?Sized> RegisterIo for I2cTransport<'_, B> {
    type BusError = B::Error;

    fn read(&mut self, reg: u8, dest: &mut [u8]) -> Result<(), Error<B::Error>> {
        self.send(&[reg])?;
        self.receive(dest)
    }

    fn write(&mut self, reg: u8, src: &[u8]) -> Result<(), Error<B::Error>> {
        if src.len() > MAX_BLOCK_LEN {
            return Err(Error::InvalidArgument);
        }

        // Register index and payload go out as one frame.
        let mut frame = Vec::new();
        frame
            .try_reserve_exact(src.len() + 1)
            .map_err(|_| Error::OutOfMemory)?;
        frame.push(reg);
        frame.extend_from_slice(src);

        self.send(&frame)
    }
}
