use crate::chip::Chip;
use crate::error::Errno;
use crate::transport::RegisterIo;

/// The chip's higher-level logic (regulators, interrupt demux, clocks).
///
/// Implementors bring the chip up on attach and tear it down on detach. They
/// reach the registers only through the handle they are lent, and never own
/// it.
pub trait Subsystem<IO: RegisterIo> {
    /// Private state kept in the handle between init and exit.
    type State;
    /// Board-specific configuration passed in on attach.
    type PlatformData;

    /// Bring the chip up.
    ///
    /// On failure the handle is freed immediately after this returns, so any
    /// state stored in it is dropped. The error code is forwarded to the
    /// caller of attach unchanged.
    fn init(
        &mut self,
        chip: &mut Chip<'_, IO, Self::State, Self::PlatformData>,
        irq: u32,
        platform_data: Option<&Self::PlatformData>,
    ) -> Result<(), Errno>;

    /// Tear the chip down. Must not fail.
    fn exit(&mut self, chip: &mut Chip<'_, IO, Self::State, Self::PlatformData>);
}
