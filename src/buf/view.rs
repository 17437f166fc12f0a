//! Copies and slices. Both always allocate fresh storage.

use super::Buf;
use crate::util::normalize_bound;

impl Buf {
    /// Returns an independent buffer with the same content and capacity.
    ///
    /// # Example
    ///
    /// ```
    /// use bbuf::Buf;
    ///
    /// let mut buf = Buf::new(4);
    /// buf.put("abcd");
    ///
    /// let mut cpy = buf.copy();
    /// assert!(cpy.equals(&buf));
    /// assert_eq!(cpy.put("e"), 1);
    /// assert_eq!(cpy.len(), 5);
    /// assert_eq!(buf.len(), 4);
    /// ```
    pub fn copy(&self) -> Buf {
        Buf::from_content(self.as_bytes(), self.cap(), self.max_size)
    }

    /// Returns an independent buffer holding the byte range `[start, end)`.
    ///
    /// Bounds follow Python slicing: `end` defaults to `len()`, negative
    /// values count back from the end, and both are clamped into
    /// `[0, len()]`. An empty or inverted range gives an empty buffer.
    ///
    /// # Example
    ///
    /// ```
    /// use bbuf::Buf;
    ///
    /// let mut buf = Buf::new(4);
    /// buf.put("abcdefg");
    /// assert_eq!(buf.slice(1, Some(-1)).to_string(), "bcdef");
    /// assert_eq!(buf.slice(-1, None).to_string(), "g");
    /// assert_eq!(buf.slice(-10, None).to_string(), "abcdefg");
    /// assert!(buf.slice(1, Some(0)).is_empty());
    /// ```
    pub fn slice(&self, start: isize, end: Option<isize>) -> Buf {
        let len = self.len;
        let start = normalize_bound(start, len);
        let end = end.map_or(len, |end| normalize_bound(end, len));

        let content = if start < end {
            &self.as_bytes()[start..end]
        } else {
            &[][..]
        };
        Buf::from_content(content, content.len(), self.max_size)
    }

    /// Shorthand for `slice(start, None)`.
    pub fn slice_from(&self, start: isize) -> Buf {
        self.slice(start, None)
    }
}
