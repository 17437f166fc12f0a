//! Core Buf implementation: storage, growth and mutation.

use std::any::Any;

use bytes::{Bytes, BytesMut};
use tracing::{trace, warn};

use crate::config::{BufConfig, DEFAULT_INITIAL_CAPACITY};
use crate::error::Result;
use crate::input::ByteInput;
use crate::util::grown_capacity;

/// A growable, byte-addressable buffer.
///
/// `Buf` owns a contiguous store of `cap()` bytes, of which the first
/// `len()` are content. Appends that do not fit double the capacity until
/// they do, so a long series of small `put` calls costs amortized O(1) per
/// byte.
///
/// # Byte indexing
///
/// Every position is a byte offset. Multi-byte UTF-8 characters occupy
/// several positions and are never realigned: [`Buf::char_at`] on the middle
/// of a character yields `U+FFFD`.
///
/// # Ownership
///
/// [`Buf::copy`] and [`Buf::slice`] always allocate. No two `Buf` values
/// share storage.
///
/// # Example
///
/// ```
/// use bbuf::Buf;
///
/// let mut buf = Buf::new(4);
/// assert_eq!(buf.put("abc"), 3);
/// assert_eq!(buf.cap(), 4);
///
/// assert_eq!(buf.put("abc"), 3);
/// assert_eq!(buf.cap(), 8);
/// assert_eq!(buf.to_string(), "abcabc");
/// ```
pub struct Buf {
    /// Backing storage. `store.len()` is the capacity.
    pub(super) store: BytesMut,
    /// Number of content bytes at the front of `store`.
    pub(super) len: usize,
    /// Capacity ceiling, if configured.
    pub(super) max_size: Option<usize>,
}

impl Buf {
    /// Creates an empty buffer holding exactly `capacity` bytes.
    ///
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        Self::with_store(BytesMut::zeroed(capacity.max(1)), 0, None)
    }

    /// Creates an empty buffer, rejecting capacities [`BufConfig::new`]
    /// rejects.
    ///
    /// # Example
    ///
    /// ```
    /// use bbuf::Buf;
    ///
    /// assert!(Buf::try_new(16).is_ok());
    /// assert!(Buf::try_new(0).is_err());
    /// ```
    pub fn try_new(capacity: usize) -> Result<Self> {
        Self::with_config(BufConfig::new(capacity)?)
    }

    /// Creates an empty buffer from a configuration.
    pub fn with_config(config: BufConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_store(
            BytesMut::zeroed(config.initial_capacity()),
            0,
            config.max_size(),
        ))
    }

    /// Builds a buffer of capacity `cap.max(content.len()).max(1)` holding
    /// `content`.
    pub(super) fn from_content(content: &[u8], cap: usize, max_size: Option<usize>) -> Self {
        let cap = cap.max(content.len()).max(1);
        let mut store = BytesMut::zeroed(cap);
        store[..content.len()].copy_from_slice(content);
        Self::with_store(store, content.len(), max_size)
    }

    pub(super) fn with_store(store: BytesMut, len: usize, max_size: Option<usize>) -> Self {
        debug_assert!(len <= store.len());
        Self {
            store,
            len,
            max_size,
        }
    }

    /// Returns true if `value` is a `Buf`.
    ///
    /// # Example
    ///
    /// ```
    /// use bbuf::Buf;
    ///
    /// assert!(Buf::is_buf(&Buf::new(4)));
    /// assert!(!Buf::is_buf(&1));
    /// assert!(!Buf::is_buf(&"string"));
    /// ```
    pub fn is_buf(value: &dyn Any) -> bool {
        value.is::<Buf>()
    }

    /// Returns the number of content bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the buffer holds no content.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the allocated capacity in bytes.
    #[inline]
    pub fn cap(&self) -> usize {
        self.store.len()
    }

    /// Returns the capacity ceiling, if any.
    pub fn max_size(&self) -> Option<usize> {
        self.max_size
    }

    /// Grows the capacity to at least `min_capacity` by repeated doubling.
    ///
    /// Returns the resulting capacity. Never shrinks.
    ///
    /// # Errors
    ///
    /// Returns [`BufError::CapacityExceeded`](crate::BufError::CapacityExceeded)
    /// if `min_capacity` is above the configured ceiling.
    pub fn grow(&mut self, min_capacity: usize) -> Result<usize> {
        let cap = self.cap();
        let new_cap = grown_capacity(cap, min_capacity, self.max_size)?;
        if new_cap > cap {
            let mut store = BytesMut::zeroed(new_cap);
            store[..self.len].copy_from_slice(&self.store[..self.len]);
            trace!(old_cap = cap, new_cap, len = self.len, "buf reallocated");
            self.store = store;
        }
        Ok(self.cap())
    }

    /// Appends the UTF-8 bytes of `input` and returns how many bytes were
    /// written.
    ///
    /// The count is in bytes, so `put("中文")` returns 6. If a configured
    /// ceiling would be passed nothing is written and 0 is returned; use
    /// [`Buf::try_put`] to observe the error.
    pub fn put<T: ByteInput + ?Sized>(&mut self, input: &T) -> usize {
        match self.try_put(input) {
            Ok(written) => written,
            Err(err) => {
                warn!(%err, len = self.len, "buf put rejected");
                0
            }
        }
    }

    /// Appends the UTF-8 bytes of `input`, failing if the ceiling would be
    /// passed.
    pub fn try_put<T: ByteInput + ?Sized>(&mut self, input: &T) -> Result<usize> {
        let data = input.input_bytes();
        let end = self.len.saturating_add(data.len());
        self.grow(end)?;
        self.store[self.len..end].copy_from_slice(data);
        self.len = end;
        Ok(data.len())
    }

    /// Appends a single byte. Returns the number of bytes written.
    pub fn put_byte(&mut self, byte: u8) -> usize {
        self.put(&[byte])
    }

    /// Removes up to `n` bytes from the end and returns how many were removed.
    ///
    /// Capacity is unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use bbuf::Buf;
    ///
    /// let mut buf = Buf::new(4);
    /// buf.put("abcedf");
    /// assert_eq!(buf.pop(2), 2);
    /// assert_eq!(buf.len(), 4);
    /// assert_eq!(buf.pop(10), 4);
    /// assert_eq!(buf.cap(), 8);
    /// ```
    pub fn pop(&mut self, n: usize) -> usize {
        let removed = n.min(self.len);
        self.len -= removed;
        removed
    }

    /// Removes up to `n` bytes from the front and returns how many were
    /// removed. The remaining content moves to offset 0.
    pub fn shift(&mut self, n: usize) -> usize {
        let removed = n.min(self.len);
        self.store.copy_within(removed..self.len, 0);
        self.len -= removed;
        removed
    }

    /// Empties the buffer, keeping its capacity. Returns the prior length.
    pub fn clear(&mut self) -> usize {
        std::mem::replace(&mut self.len, 0)
    }

    /// Sets the length, truncating or padding with ASCII spaces.
    ///
    /// Returns the new length.
    ///
    /// # Example
    ///
    /// ```
    /// use bbuf::Buf;
    ///
    /// let mut buf = Buf::new(4);
    /// buf.put("ab");
    /// buf.set_len(4)?;
    /// assert_eq!(buf.to_string(), "ab  ");
    /// buf.set_len(1)?;
    /// assert_eq!(buf.to_string(), "a");
    /// # Ok::<(), bbuf::BufError>(())
    /// ```
    pub fn set_len(&mut self, len: usize) -> Result<usize> {
        if len > self.len {
            self.grow(len)?;
            self.store[self.len..len].fill(b' ');
        }
        self.len = len;
        Ok(self.len)
    }

    /// Reverses the content bytes in place.
    pub fn reverse(&mut self) {
        self.store[..self.len].reverse();
    }

    /// Returns the content as a byte slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.store[..self.len]
    }

    /// Returns the content as an owned list of byte values.
    pub fn bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// Returns the content as UTF-8 text, or `None` if it is not valid UTF-8.
    ///
    /// [`Display`](std::fmt::Display) gives a lossy decode instead.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(self.as_bytes()).ok()
    }

    /// Copies the content into a new [`Bytes`].
    pub fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(self.as_bytes())
    }

    /// Consumes the buffer and returns its content as [`Bytes`] without
    /// copying.
    pub fn freeze(mut self) -> Bytes {
        self.store.truncate(self.len);
        self.store.freeze()
    }
}

impl Default for Buf {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_CAPACITY)
    }
}
