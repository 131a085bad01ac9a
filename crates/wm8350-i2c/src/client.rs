use embedded_hal::i2c::SevenBitAddress;

use crate::slab::HandleId;

/// Lifecycle phase of a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Discovered, no handle yet.
    Unattached,
    /// Handle storage is being reserved.
    Allocating,
    /// Handle linked, chip-subsystem init running.
    Initializing,
    /// Chip is up and its handle reachable through the client.
    Active,
    /// Chip-subsystem exit running.
    Detaching,
    /// Detached; the handle is gone.
    Freed,
    /// Attach failed; nothing is left allocated.
    Failed,
}

/// A chip discovered on a shared I2C bus.
///
/// The client is owned by whoever discovered the device. Attaching links a
/// chip handle to it through [`clientdata`](Self::clientdata); that link is
/// the only way back to the handle until detach.
#[derive(Debug)]
pub struct I2cClient<'a, B: ?Sized> {
    bus: &'a B,
    address: SevenBitAddress,
    irq: u32,
    name: &'static str,
    clientdata: Option<HandleId>,
    phase: Phase,
}

impl<'a, B: ?Sized> I2cClient<'a, B> {
    pub fn new(
        bus: &'a B,
        address: SevenBitAddress,
        irq: u32,
        name: &'static str,
    ) -> Self {
        Self {
            bus,
            address,
            irq,
            name,
            clientdata: None,
            phase: Phase::Unattached,
        }
    }

    pub fn bus(&self) -> &'a B {
        self.bus
    }

    pub fn address(&self) -> SevenBitAddress {
        self.address
    }

    pub fn irq(&self) -> u32 {
        self.irq
    }

    /// Chip model name the client was discovered as.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Handle linked to this client, if attached.
    pub fn clientdata(&self) -> Option<HandleId> {
        self.clientdata
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn set_clientdata(&mut self, id: Option<HandleId>) {
        self.clientdata = id;
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }
}
