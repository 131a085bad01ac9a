use core::fmt;

/// Negative kernel-style error code, as returned by the chip-subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Errno(pub i32);

impl Errno {
    pub const EIO: Errno = Errno(-5);
    pub const ENOMEM: Errno = Errno(-12);
    pub const EBUSY: Errno = Errno(-16);
    pub const ENODEV: Errno = Errno(-19);
    pub const EINVAL: Errno = Errno(-22);

    pub fn code(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Errno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "errno {}", self.0)
    }
}

/// Errors returned by register transfers and by the attach/detach lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The bus primitive itself reported a failure.
    Bus(E),
    /// The bus reported success but moved the wrong number of bytes.
    IoMismatch { expected: usize, actual: usize },
    /// Requested block is larger than the biggest frame the chip accepts.
    InvalidArgument,
    /// No room for the chip handle or the outgoing frame.
    OutOfMemory,
    /// Chip-subsystem init failed; the code is forwarded untouched.
    SubsystemInit(Errno),
    /// The client already has a chip handle linked to it.
    AlreadyAttached,
    /// The client has no chip handle linked to it.
    NotAttached,
}

/// Payload-free classification of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKind {
    BusError,
    IoMismatch,
    InvalidArgument,
    OutOfMemory,
    SubsystemInitError,
    AlreadyAttached,
    NotAttached,
}

impl<E> Error<E> {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Bus(_) => ErrorKind::BusError,
            Error::IoMismatch { .. } => ErrorKind::IoMismatch,
            Error::InvalidArgument => ErrorKind::InvalidArgument,
            Error::OutOfMemory => ErrorKind::OutOfMemory,
            Error::SubsystemInit(_) => ErrorKind::SubsystemInitError,
            Error::AlreadyAttached => ErrorKind::AlreadyAttached,
            Error::NotAttached => ErrorKind::NotAttached,
        }
    }

    /// Conventional error code for this failure.
    ///
    /// Bus errors carry a controller-specific payload with no fixed code, so
    /// they return `None`; the subsystem code is returned verbatim.
    pub fn errno(&self) -> Option<Errno> {
        match self {
            Error::Bus(_) => None,
            Error::IoMismatch { .. } => Some(Errno::EIO),
            Error::InvalidArgument => Some(Errno::EINVAL),
            Error::OutOfMemory => Some(Errno::ENOMEM),
            Error::SubsystemInit(code) => Some(*code),
            Error::AlreadyAttached => Some(Errno::EBUSY),
            Error::NotAttached => Some(Errno::ENODEV),
        }
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Bus(err) => write!(f, "I2C bus error: {:?}", err),
            Error::IoMismatch { expected, actual } => write!(
                f,
                "I2C transfer moved {} bytes, expected {}",
                actual, expected
            ),
            Error::InvalidArgument => {
                write!(f, "register block exceeds the maximum frame size")
            }
            Error::OutOfMemory => write!(f, "out of memory"),
            Error::SubsystemInit(code) => {
                write!(f, "chip subsystem init failed: {}", code)
            }
            Error::AlreadyAttached => write!(f, "client is already attached"),
            Error::NotAttached => write!(f, "client is not attached"),
        }
    }
}
