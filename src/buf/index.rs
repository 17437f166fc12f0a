//! Byte-indexed reads and writes.
//!
//! Reads are lenient: any key that does not name a content byte yields
//! `None`. Writes are strict: they must target existing content and supply
//! exactly one byte.

use super::Buf;
use crate::error::{BufError, Result};

/// A key that may address a byte position.
///
/// Integers name the offset directly; negative integers name nothing.
/// Strings name an offset only when they are a canonical non-negative
/// integer (`"0"`, `"12"`, but not `"012"`, `"+1"` or `"abc"`).
pub trait IndexKey {
    /// Returns the byte offset this key addresses, if any.
    fn to_offset(&self) -> Option<usize>;
}

impl IndexKey for usize {
    #[inline]
    fn to_offset(&self) -> Option<usize> {
        Some(*self)
    }
}

macro_rules! impl_index_key_int {
    ($($t:ty),*) => {
        $(
            impl IndexKey for $t {
                #[inline]
                fn to_offset(&self) -> Option<usize> {
                    usize::try_from(*self).ok()
                }
            }
        )*
    };
}

impl_index_key_int!(isize, i32, i64, u32, u64);

impl IndexKey for str {
    fn to_offset(&self) -> Option<usize> {
        let canonical = self == "0"
            || (!self.is_empty()
                && !self.starts_with('0')
                && self.bytes().all(|b| b.is_ascii_digit()));
        if canonical { self.parse().ok() } else { None }
    }
}

impl IndexKey for String {
    fn to_offset(&self) -> Option<usize> {
        self.as_str().to_offset()
    }
}

impl<T: IndexKey + ?Sized> IndexKey for &T {
    #[inline]
    fn to_offset(&self) -> Option<usize> {
        (**self).to_offset()
    }
}

/// A value assigned through [`Buf::set`].
///
/// Numbers must be in `0..=255`; characters and text must encode to exactly
/// one UTF-8 byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteValue<'a> {
    /// A numeric byte value.
    Number(i64),
    /// A single character.
    Char(char),
    /// A text value.
    Text(&'a str),
}

impl ByteValue<'_> {
    /// Returns the byte this value encodes to.
    ///
    /// # Errors
    ///
    /// - [`BufError::InvalidByteValue`] for numbers outside `0..=255`
    /// - [`BufError::MultiByteCharacter`] for characters or text that are
    ///   not exactly one byte long
    pub fn to_byte(&self) -> Result<u8> {
        match *self {
            ByteValue::Number(value) => {
                u8::try_from(value).map_err(|_| BufError::InvalidByteValue { value })
            }
            ByteValue::Char(ch) => {
                if ch.is_ascii() {
                    Ok(ch as u8)
                } else {
                    Err(BufError::MultiByteCharacter {
                        encoded_len: ch.len_utf8(),
                    })
                }
            }
            ByteValue::Text(text) => match text.as_bytes() {
                [byte] => Ok(*byte),
                bytes => Err(BufError::MultiByteCharacter {
                    encoded_len: bytes.len(),
                }),
            },
        }
    }
}

macro_rules! impl_byte_value_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ByteValue<'_> {
                fn from(value: $t) -> Self {
                    ByteValue::Number(value.into())
                }
            }
        )*
    };
}

impl_byte_value_int!(i8, u8, i16, u16, i32, u32, i64);

// Values beyond i64 saturate; they are rejected by `to_byte` either way.
macro_rules! impl_byte_value_wide_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ByteValue<'_> {
                fn from(value: $t) -> Self {
                    ByteValue::Number(i64::try_from(value).unwrap_or(i64::MAX))
                }
            }
        )*
    };
}

impl_byte_value_wide_int!(isize, usize, u64);

impl From<char> for ByteValue<'_> {
    fn from(value: char) -> Self {
        ByteValue::Char(value)
    }
}

impl<'a> From<&'a str> for ByteValue<'a> {
    fn from(value: &'a str) -> Self {
        ByteValue::Text(value)
    }
}

impl Buf {
    /// Returns the byte at `key`, or `None` if the key does not name a
    /// content byte.
    ///
    /// # Example
    ///
    /// ```
    /// use bbuf::Buf;
    ///
    /// let mut buf = Buf::new(4);
    /// buf.put("abcdef");
    /// assert_eq!(buf.get(0), Some(b'a'));
    /// assert_eq!(buf.get(100), None);
    /// assert_eq!(buf.get(-1), None);
    /// assert_eq!(buf.get("abc"), None);
    /// ```
    pub fn get<K: IndexKey>(&self, key: K) -> Option<u8> {
        key.to_offset()
            .and_then(|offset| self.as_bytes().get(offset).copied())
    }

    /// Overwrites the byte at `index` and returns the assigned value.
    ///
    /// The buffer never grows through `set`.
    ///
    /// # Errors
    ///
    /// - [`BufError::OutOfRange`] if `index >= len()`
    /// - [`BufError::InvalidByteValue`] / [`BufError::MultiByteCharacter`]
    ///   if `value` is not a single byte
    ///
    /// # Example
    ///
    /// ```
    /// use bbuf::{Buf, ByteValue};
    ///
    /// let mut buf = Buf::new(4);
    /// buf.put("abcdef");
    /// assert_eq!(buf.set(3, "g")?, ByteValue::Text("g"));
    /// assert_eq!(buf.get(3), Some(b'g'));
    /// assert!(buf.set(10, "m").is_err());
    /// assert!(buf.set(1, 256).is_err());
    /// # Ok::<(), bbuf::BufError>(())
    /// ```
    pub fn set<'a, V>(&mut self, index: usize, value: V) -> Result<ByteValue<'a>>
    where
        V: Into<ByteValue<'a>>,
    {
        if index >= self.len {
            return Err(BufError::OutOfRange {
                index,
                len: self.len,
            });
        }

        let value = value.into();
        self.store[index] = value.to_byte()?;
        Ok(value)
    }

    /// Returns the character whose first byte is at `key`.
    ///
    /// Addressing is by byte, not by character. If the byte at `key` does not
    /// start a valid UTF-8 sequence the result is
    /// [`char::REPLACEMENT_CHARACTER`]. Out-of-range keys yield `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use bbuf::Buf;
    ///
    /// let mut buf = Buf::new(8);
    /// buf.put("a你b");
    /// assert_eq!(buf.char_at(0), Some('a'));
    /// assert_eq!(buf.char_at(1), Some('你'));
    /// assert_eq!(buf.char_at(2), Some(char::REPLACEMENT_CHARACTER));
    /// assert_eq!(buf.char_at(4), Some('b'));
    /// assert_eq!(buf.char_at(5), None);
    /// ```
    pub fn char_at<K: IndexKey>(&self, key: K) -> Option<char> {
        let offset = key.to_offset()?;
        let content = self.as_bytes();
        let lead = *content.get(offset)?;
        let end = offset.saturating_add(utf8_width(lead)).min(content.len());

        match std::str::from_utf8(&content[offset..end]) {
            Ok(s) => s.chars().next(),
            Err(_) => Some(char::REPLACEMENT_CHARACTER),
        }
    }
}

/// Sequence length announced by a UTF-8 lead byte. Continuation and invalid
/// bytes report 1 so they decode as a replacement character.
fn utf8_width(lead: u8) -> usize {
    match lead {
        0xc0..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf7 => 4,
        _ => 1,
    }
}
