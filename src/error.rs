//! Error type shared by every ring buffer.

#[cfg(feature = "std")]
use std::error;
use std::fmt;

/// Error returned by ring buffer construction and transfer operations.
///
/// A rejected operation never mutates the buffer: indices, free count and
/// storage are exactly as they were before the call.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum Error {
    /// A size, count or slice argument is unusable: zero capacity, zero entry
    /// size, zero transfer count, or a slice too short for the request.
    InvalidArgument,
    /// A single push found no free slot.
    BufferFull,
    /// A single pop found no stored entry.
    BufferEmpty,
    /// A bulk push asked for more slots than are currently free.
    InsufficientSpace {
        /// Entries the caller tried to push.
        requested: usize,
        /// Free slots at the time of the call.
        free: usize,
    },
    /// A bulk pop asked for more entries than are currently stored.
    InsufficientData {
        /// Entries the caller tried to pop.
        requested: usize,
        /// Stored entries at the time of the call.
        stored: usize,
    },
}

#[cfg(feature = "std")]
impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::InvalidArgument => write!(f, "invalid argument"),
            Error::BufferFull => write!(f, "buffer full"),
            Error::BufferEmpty => write!(f, "buffer empty"),
            Error::InsufficientSpace { requested, free } => {
                write!(f, "insufficient space: requested {} entries, {} free", requested, free)
            }
            Error::InsufficientData { requested, stored } => {
                write!(f, "insufficient data: requested {} entries, {} stored", requested, stored)
            }
        }
    }
}
