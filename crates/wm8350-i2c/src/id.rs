/// Name the driver registers under.
pub const DRIVER_NAME: &str = "wm8350";

/// Which register transport a chip model is driven through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Interface {
    I2c,
}

/// Entry in the table of chip models handled by this driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cDeviceId {
    pub name: &'static str,
    pub interface: Interface,
}

/// Chip models this driver attaches to.
pub const I2C_DEVICE_IDS: &[I2cDeviceId] = &[
    I2cDeviceId { name: "wm8350", interface: Interface::I2c },
    I2cDeviceId { name: "wm8351", interface: Interface::I2c },
    I2cDeviceId { name: "wm8352", interface: Interface::I2c },
];

impl I2cDeviceId {
    pub fn lookup(name: &str) -> Option<&'static I2cDeviceId> {
        I2C_DEVICE_IDS.iter().find(|id| id.name == name)
    }
}
