//! Bus primitives consumed by the register transport.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embedded_hal::i2c::{I2c, SevenBitAddress};

/// A shared two-wire bus.
///
/// Both primitives report how many bytes actually moved. Callers decide what
/// a short count means; the bus only reports it.
///
/// Methods take `&self` because the bus is shared between every chip on it.
/// Implementations serialize access internally.
pub trait I2cBus {
    /// Error type reported by the controller.
    type Error: core::fmt::Debug;

    /// Send `bytes` to `address` in a single transfer.
    fn send(
        &self,
        address: SevenBitAddress,
        bytes: &[u8],
    ) -> Result<usize, Self::Error>;

    /// Receive up to `buf.len()` bytes from `address`.
    fn receive(
        &self,
        address: SevenBitAddress,
        buf: &mut [u8],
    ) -> Result<usize, Self::Error>;
}

/// Any `embedded-hal` controller behind a blocking mutex is a shared bus.
///
/// `embedded-hal` transfers either move the whole buffer or fail, so a
/// successful transfer reports the full length.
impl<M, T> I2cBus for Mutex<M, RefCell<T>>
where
    M: RawMutex,
    T: I2c,
{
    type Error = T::Error;

    fn send(
        &self,
        address: SevenBitAddress,
        bytes: &[u8],
    ) -> Result<usize, Self::Error> {
        self.lock(|bus| {
            bus.borrow_mut().write(address, bytes).map(|()| bytes.len())
        })
    }

    fn receive(
        &self,
        address: SevenBitAddress,
        buf: &mut [u8],
    ) -> Result<usize, Self::Error> {
        self.lock(|bus| {
            let len = buf.len();
            bus.borrow_mut().read(address, buf).map(|()| len)
        })
    }
}
