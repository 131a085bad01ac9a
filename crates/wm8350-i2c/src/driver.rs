use crate::bus::I2cBus;
use crate::chip::Chip;
use crate::client::{I2cClient, Phase};
use crate::error::Error;
use crate::id::I2cDeviceId;
use crate::slab::{HandleId, Slab};
use crate::subsystem::Subsystem;
use crate::transport::I2cTransport;

/// Chip handle driven over an I2C transport by subsystem `S`.
pub type I2cChip<'a, B, S> = Chip<
    'a,
    I2cTransport<'a, B>,
    <S as Subsystem<I2cTransport<'a, B>>>::State,
    <S as Subsystem<I2cTransport<'a, B>>>::PlatformData,
>;

/// Attach/detach lifecycle for chips on an I2C bus.
///
/// Owns up to `N` chip handles and the chip-subsystem that runs on them.
/// Every attach failure unwinds completely: when `attach` returns an error no
/// handle is allocated and the client has nothing linked.
///
/// No locking is done here. Attach, detach and register access for a given
/// client take `&mut` and are serialized by the caller.
pub struct I2cDriver<'a, B, S, const N: usize>
where
    B: I2cBus + ?Sized + 'a,
    S: Subsystem<I2cTransport<'a, B>>,
    S::PlatformData: 'a,
{
    subsystem: S,
    chips: Slab<I2cChip<'a, B, S>, N>,
}

impl<'a, B, S, const N: usize> I2cDriver<'a, B, S, N>
where
    B: I2cBus + ?Sized + 'a,
    S: Subsystem<I2cTransport<'a, B>>,
    S::PlatformData: 'a,
{
    pub fn new(subsystem: S) -> Self {
        Self { subsystem, chips: Slab::new() }
    }

    /// Entry of the id table matching the client's model name, if any.
    pub fn matches(
        &self,
        client: &I2cClient<'a, B>,
    ) -> Option<&'static I2cDeviceId> {
        I2cDeviceId::lookup(client.name())
    }

    /// Allocate a chip handle for `client` and bring the chip up.
    ///
    /// The client itself is never released here, whatever the outcome.
    pub fn attach(
        &mut self,
        client: &mut I2cClient<'a, B>,
        platform_data: Option<&'a S::PlatformData>,
    ) -> Result<HandleId, Error<B::Error>> {
        if client.phase() == Phase::Active {
            return Err(Error::AlreadyAttached);
        }

        client.set_phase(Phase::Allocating);
        let transport = I2cTransport::new(client.bus(), client.address());
        let (id, chip) = match self.chips.insert(Chip::new(transport)) {
            Ok(entry) => entry,
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!(
                    "wm8350: no free handle for {=u8:#x}",
                    client.address()
                );
                client.set_phase(Phase::Failed);
                return Err(Error::OutOfMemory);
            }
        };

        client.set_phase(Phase::Initializing);
        client.set_clientdata(Some(id));
        let irq = client.irq();
        chip.populate(irq, platform_data);

        if let Err(code) = self.subsystem.init(chip, irq, platform_data) {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "wm8350: init of {=u8:#x} failed: {}",
                client.address(),
                code
            );
            client.set_phase(Phase::Failed);
            client.set_clientdata(None);
            self.chips.remove(id);
            return Err(Error::SubsystemInit(code));
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("wm8350: attached {=u8:#x} as {}", client.address(), id);
        client.set_phase(Phase::Active);
        Ok(id)
    }

    /// Shut the chip down and free its handle.
    ///
    /// Only valid on a client attached through this driver. Anything else is
    /// rejected with [`Error::NotAttached`] and left untouched.
    pub fn detach(
        &mut self,
        client: &mut I2cClient<'a, B>,
    ) -> Result<(), Error<B::Error>> {
        if client.phase() != Phase::Active {
            return Err(Error::NotAttached);
        }
        let id = client.clientdata().ok_or(Error::NotAttached)?;
        let chip = self.chips.get_mut(id).ok_or(Error::NotAttached)?;

        client.set_phase(Phase::Detaching);
        self.subsystem.exit(chip);
        self.chips.remove(id);
        client.set_clientdata(None);
        client.set_phase(Phase::Freed);

        #[cfg(feature = "defmt")]
        defmt::debug!("wm8350: detached {=u8:#x}", client.address());
        Ok(())
    }

    /// Handle linked to `client`, if it was attached through this driver.
    pub fn chip(&self, client: &I2cClient<'a, B>) -> Option<&I2cChip<'a, B, S>> {
        self.chips.get(client.clientdata()?)
    }

    pub fn chip_mut(
        &mut self,
        client: &I2cClient<'a, B>,
    ) -> Option<&mut I2cChip<'a, B, S>> {
        self.chips.get_mut(client.clientdata()?)
    }

    /// Number of chips currently attached.
    pub fn attached(&self) -> usize {
        self.chips.len()
    }

    pub fn capacity(&self) -> usize {
        self.chips.capacity()
    }

    pub fn subsystem(&self) -> &S {
        &self.subsystem
    }

    pub fn subsystem_mut(&mut self) -> &mut S {
        &mut self.subsystem
    }
}
