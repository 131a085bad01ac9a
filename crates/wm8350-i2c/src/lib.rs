#![no_std]
//! I2C access core for the Wolfson WM8350 family of power management ICs.
//!
//! Two pieces live here:
//!
//! * the register transport, which frames register block reads and writes
//!   onto a shared two-wire bus and turns short transfers into typed errors;
//! * the attach/detach lifecycle, which allocates the handle for one chip,
//!   hands it to the chip-subsystem, and frees it again without leaking on
//!   any error path.
//!
//! What the chip does with its registers is up to the [`Subsystem`]
//! implementation plugged into the [`I2cDriver`].

extern crate alloc;

mod bus;
mod chip;
mod client;
mod driver;
mod error;
mod id;
mod slab;
mod subsystem;
mod transport;

pub use bus::I2cBus;
pub use chip::Chip;
pub use client::{I2cClient, Phase};
pub use driver::{I2cChip, I2cDriver};
pub use error::{Errno, Error, ErrorKind};
pub use id::{I2cDeviceId, Interface, DRIVER_NAME, I2C_DEVICE_IDS};
pub use slab::{HandleId, Slab};
pub use subsystem::Subsystem;
pub use transport::{I2cTransport, RegisterIo, MAX_BLOCK_LEN, MAX_REGISTER};
