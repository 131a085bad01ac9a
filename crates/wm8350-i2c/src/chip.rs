use crate::error::Error;
use crate::transport::RegisterIo;

/// Record of one attached chip.
///
/// Created by [`I2cDriver::attach`](crate::I2cDriver::attach) and owned by the
/// driver until detach. The chip-subsystem only ever borrows it.
///
/// `T` is the chip-subsystem's private state and `P` its platform data.
pub struct Chip<'a, IO, T, P> {
    io: IO,
    irq: u32,
    platform_data: Option<&'a P>,
    private: Option<T>,
}

impl<'a, IO: RegisterIo, T, P> Chip<'a, IO, T, P> {
    /// A handle with only the register transport installed.
    pub(crate) fn new(io: IO) -> Self {
        Self { io, irq: 0, platform_data: None, private: None }
    }

    pub(crate) fn populate(&mut self, irq: u32, platform_data: Option<&'a P>) {
        self.irq = irq;
        self.platform_data = platform_data;
    }

    /// Interrupt line the chip is wired to.
    pub fn irq(&self) -> u32 {
        self.irq
    }

    pub fn platform_data(&self) -> Option<&'a P> {
        self.platform_data
    }

    /// Installed register transport.
    pub fn io(&self) -> &IO {
        &self.io
    }

    /// Private state stored by the chip-subsystem, if any.
    pub fn private(&self) -> Option<&T> {
        self.private.as_ref()
    }

    /// Store chip-subsystem private state, returning what was there before.
    pub fn set_private(&mut self, state: T) -> Option<T> {
        self.private.replace(state)
    }

    pub fn take_private(&mut self) -> Option<T> {
        self.private.take()
    }

    pub fn read_block(
        &mut self,
        reg: u8,
        dest: &mut [u8],
    ) -> Result<(), Error<IO::BusError>> {
        self.io.read(reg, dest)
    }

    pub fn write_block(
        &mut self,
        reg: u8,
        src: &[u8],
    ) -> Result<(), Error<IO::BusError>> {
        self.io.write(reg, src)
    }

    pub fn read_register(&mut self, reg: u8) -> Result<u8, Error<IO::BusError>> {
        let mut buffer = [0];
        self.io.read(reg, &mut buffer)?;
        Ok(buffer[0])
    }

    pub fn write_register(
        &mut self,
        reg: u8,
        value: u8,
    ) -> Result<(), Error<IO::BusError>> {
        self.io.write(reg, &[value])
    }

    pub fn modify_register<F>(
        &mut self,
        reg: u8,
        f: F,
    ) -> Result<(), Error<IO::BusError>>
    where
        F: FnOnce(u8) -> u8,
    {
        let value = self.read_register(reg)?;

        self.write_register(reg, f(value))
    }

    pub fn set_bits(
        &mut self,
        reg: u8,
        mask: u8,
    ) -> Result<(), Error<IO::BusError>> {
        self.modify_register(reg, |value| value | mask)
    }

    pub fn clear_bits(
        &mut self,
        reg: u8,
        mask: u8,
    ) -> Result<(), Error<IO::BusError>> {
        self.modify_register(reg, |value| value & !mask)
    }
}
