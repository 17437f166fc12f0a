//! Comparison, search and predicates over buffer content.
//!
//! All operations compare raw bytes. Text arguments are UTF-8 encoded first,
//! so a multi-byte character matches as its full byte run.

use std::cmp::Ordering;

use super::Buf;
use crate::input::ByteInput;
use crate::util::{find_bytes, is_space_byte};

impl Buf {
    /// Compares the content with `other` byte by byte.
    ///
    /// The first differing byte decides; if one side is a prefix of the
    /// other, the shorter one sorts first.
    ///
    /// # Example
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use bbuf::Buf;
    ///
    /// let mut buf = Buf::new(4);
    /// assert_eq!(buf.compare(""), Ordering::Equal);
    ///
    /// buf.put("efg");
    /// assert_eq!(buf.compare("abc"), Ordering::Greater);
    /// assert_eq!(buf.compare("fgh"), Ordering::Less);
    /// assert_eq!(buf.compare("efgh"), Ordering::Less);
    /// ```
    pub fn compare<T: ByteInput + ?Sized>(&self, other: &T) -> Ordering {
        self.as_bytes().cmp(other.input_bytes())
    }

    /// Returns true if the content is byte-for-byte equal to `other`.
    pub fn equals<T: ByteInput + ?Sized>(&self, other: &T) -> bool {
        self.as_bytes() == other.input_bytes()
    }

    /// Returns the byte offset of the first occurrence of `needle`.
    ///
    /// An empty needle is never found.
    ///
    /// # Example
    ///
    /// ```
    /// use bbuf::Buf;
    ///
    /// let mut buf = Buf::new(10);
    /// buf.put("明天");
    /// assert_eq!(buf.index_of("天"), Some(3));
    /// assert_eq!(buf.index_of("what"), None);
    /// ```
    pub fn index_of<T: ByteInput + ?Sized>(&self, needle: &T) -> Option<usize> {
        self.index_of_from(needle, 0)
    }

    /// Returns the smallest byte offset `>= from` where `needle` occurs.
    pub fn index_of_from<T>(&self, needle: &T, from: usize) -> Option<usize>
    where
        T: ByteInput + ?Sized,
    {
        find_bytes(self.as_bytes(), needle.input_bytes(), from)
    }

    /// Returns true if the content begins with `prefix`.
    pub fn starts_with<T: ByteInput + ?Sized>(&self, prefix: &T) -> bool {
        self.as_bytes().starts_with(prefix.input_bytes())
    }

    /// Returns true if the content ends with `suffix`.
    pub fn ends_with<T: ByteInput + ?Sized>(&self, suffix: &T) -> bool {
        self.as_bytes().ends_with(suffix.input_bytes())
    }

    /// Returns true if the buffer is non-empty and every byte is whitespace
    /// (space, `\t`, `\n`, `\x0b`, `\x0c` or `\r`).
    ///
    /// # Example
    ///
    /// ```
    /// use bbuf::Buf;
    ///
    /// let mut buf = Buf::new(10);
    /// assert!(!buf.is_space());
    /// buf.put(" \t\n\r");
    /// assert!(buf.is_space());
    /// ```
    pub fn is_space(&self) -> bool {
        !self.is_empty() && self.as_bytes().iter().all(|&b| is_space_byte(b))
    }
}
