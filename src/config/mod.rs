//! Configuration for buffer construction.
//!
//! - [`BufConfig`] - Initial capacity and optional size ceiling
//!
//! # Example
//!
//! ```
//! use bbuf::{Buf, BufConfig};
//!
//! // Custom initial capacity
//! let config = BufConfig::new(256)?;
//!
//! // Refuse to grow past 16 MiB
//! let config = config.with_max_size(bbuf::DEFAULT_SIZE_CEILING);
//!
//! let buf = Buf::with_config(config)?;
//! assert_eq!(buf.cap(), 256);
//! # Ok::<(), bbuf::BufError>(())
//! ```

use crate::error::BufError;

/// Default initial capacity (64 bytes).
pub const DEFAULT_INITIAL_CAPACITY: usize = 64;

/// Largest initial capacity accepted by [`BufConfig::new`] (1 MiB).
pub const MAX_INITIAL_CAPACITY: usize = 1024 * 1024;

/// Suggested ceiling for buffers that must not grow unbounded (16 MiB).
pub const DEFAULT_SIZE_CEILING: usize = 16 * 1024 * 1024;

/// Configuration for a [`Buf`](crate::Buf).
///
/// Constraints:
/// - `initial_capacity` is non-zero and at most [`MAX_INITIAL_CAPACITY`]
/// - `max_size`, when set, is at least `initial_capacity`
///
/// Buffers built without a ceiling grow without bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufConfig {
    initial_capacity: usize,
    max_size: Option<usize>,
}

impl BufConfig {
    /// Creates a new configuration with the given initial capacity.
    ///
    /// # Errors
    ///
    /// Returns [`BufError::InvalidConfig`] if:
    /// - `initial_capacity` is zero
    /// - `initial_capacity` is larger than [`MAX_INITIAL_CAPACITY`]
    ///
    /// # Example
    ///
    /// ```
    /// use bbuf::BufConfig;
    ///
    /// let config = BufConfig::new(4)?;
    /// assert_eq!(config.initial_capacity(), 4);
    /// assert!(BufConfig::new(0).is_err());
    /// # Ok::<(), bbuf::BufError>(())
    /// ```
    pub fn new(initial_capacity: usize) -> Result<Self, BufError> {
        if initial_capacity == 0 {
            return Err(BufError::InvalidConfig {
                message: "initial capacity must be non-zero",
            });
        }

        if initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(BufError::InvalidConfig {
                message: "initial capacity is too large",
            });
        }

        Ok(Self {
            initial_capacity,
            max_size: None,
        })
    }

    /// Sets the initial capacity.
    ///
    /// Note: This does not validate the configuration. Use [`BufConfig::validate`]
    /// to check if the configuration is valid.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets a ceiling the buffer capacity may never pass.
    ///
    /// Note: This does not validate the configuration. Use [`BufConfig::validate`]
    /// to check if the configuration is valid.
    ///
    /// # Example
    ///
    /// ```
    /// use bbuf::BufConfig;
    ///
    /// let config = BufConfig::default().with_max_size(4096);
    /// assert_eq!(config.max_size(), Some(4096));
    /// ```
    pub fn with_max_size(mut self, size: usize) -> Self {
        self.max_size = Some(size);
        self
    }

    /// Removes the ceiling.
    pub fn unbounded(mut self) -> Self {
        self.max_size = None;
        self
    }

    /// Returns the initial capacity.
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Returns the ceiling, if any.
    pub fn max_size(&self) -> Option<usize> {
        self.max_size
    }

    /// Validates the current configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use bbuf::BufConfig;
    ///
    /// let config = BufConfig::default().with_initial_capacity(0);
    /// assert!(config.validate().is_err());
    ///
    /// let config = BufConfig::default().with_max_size(1);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), BufError> {
        Self::new(self.initial_capacity)?;

        if let Some(max) = self.max_size {
            if max < self.initial_capacity {
                return Err(BufError::InvalidConfig {
                    message: "max_size cannot be smaller than initial capacity",
                });
            }
        }

        Ok(())
    }
}

impl Default for BufConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_size: None,
        }
    }
}
