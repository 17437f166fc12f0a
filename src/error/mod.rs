//! Error types for bbuf.

use std::fmt;

/// Errors that can occur during buffer operations.
///
/// Only writes fail. Reads past the content return `None` instead.
#[derive(Debug)]
pub enum BufError {
    /// An indexed write targeted a position outside the content.
    OutOfRange {
        /// The index that was written.
        index: usize,
        /// The buffer length at the time of the write.
        len: usize,
    },

    /// An indexed write was given a number that does not fit in a byte.
    InvalidByteValue {
        /// The rejected value.
        value: i64,
    },

    /// An indexed write was given text that does not encode to exactly one byte.
    MultiByteCharacter {
        /// Number of bytes the value encodes to.
        encoded_len: usize,
    },

    /// Growing the buffer would pass its configured ceiling.
    CapacityExceeded {
        /// The capacity the write required.
        requested: usize,
        /// The configured ceiling.
        max: usize,
    },

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl fmt::Display for BufError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufError::OutOfRange { index, len } => {
                write!(f, "index out of range: {} (len {})", index, len)
            }
            BufError::InvalidByteValue { value } => {
                write!(f, "invalid byte value: {} (requires 0..=255)", value)
            }
            BufError::MultiByteCharacter { encoded_len } => {
                write!(f, "requires a 1 byte char, got {} bytes", encoded_len)
            }
            BufError::CapacityExceeded { requested, max } => {
                write!(f, "capacity exceeded: {} bytes (max {})", requested, max)
            }
            BufError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
        }
    }
}

impl std::error::Error for BufError {}

impl From<BufError> for std::io::Error {
    fn from(e: BufError) -> Self {
        match e {
            BufError::CapacityExceeded { .. } => {
                std::io::Error::new(std::io::ErrorKind::OutOfMemory, e)
            }
            other => std::io::Error::new(std::io::ErrorKind::InvalidInput, other),
        }
    }
}

/// Result type alias for buffer operations.
pub type Result<T> = std::result::Result<T, BufError>;
