//! Byte input conversion.
//!
//! Every operation that accepts "text or buffer" goes through [`ByteInput`].
//! Text is encoded as UTF-8, which for Rust strings is their own storage, so
//! the conversion never allocates.

use bytes::{Bytes, BytesMut};

use crate::buf::Buf;

/// A value that can be read as a UTF-8 byte sequence.
///
/// Implemented for text (`str`, `String`), raw bytes (`[u8]`, `[u8; N]`,
/// `Vec<u8>`, [`Bytes`], [`BytesMut`]) and [`Buf`] itself.
///
/// # Example
///
/// ```
/// use bbuf::{Buf, ByteInput};
///
/// assert_eq!("天".input_bytes(), &[0xe5, 0xa4, 0xa9]);
///
/// let mut buf = Buf::new(4);
/// buf.put("abc");
/// assert_eq!(buf.input_bytes(), b"abc");
/// ```
pub trait ByteInput {
    /// Returns the encoded bytes of this value.
    fn input_bytes(&self) -> &[u8];
}

impl ByteInput for str {
    #[inline]
    fn input_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl ByteInput for String {
    #[inline]
    fn input_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl ByteInput for [u8] {
    #[inline]
    fn input_bytes(&self) -> &[u8] {
        self
    }
}

impl<const N: usize> ByteInput for [u8; N] {
    #[inline]
    fn input_bytes(&self) -> &[u8] {
        self
    }
}

impl ByteInput for Vec<u8> {
    #[inline]
    fn input_bytes(&self) -> &[u8] {
        self
    }
}

impl ByteInput for Bytes {
    #[inline]
    fn input_bytes(&self) -> &[u8] {
        self
    }
}

impl ByteInput for BytesMut {
    #[inline]
    fn input_bytes(&self) -> &[u8] {
        self
    }
}

impl ByteInput for Buf {
    #[inline]
    fn input_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<T: ByteInput + ?Sized> ByteInput for &T {
    #[inline]
    fn input_bytes(&self) -> &[u8] {
        (**self).input_bytes()
    }
}
