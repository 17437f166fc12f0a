//! Standard trait implementations for [`Buf`].

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::io;

use bytes::Bytes;

use super::Buf;

/// Number of bytes shown by `Debug` before eliding the rest.
const INSPECT_LIMIT: usize = 33;

impl Clone for Buf {
    fn clone(&self) -> Self {
        self.copy()
    }
}

/// Renders `<bbuf [len] hh hh ..>`, showing at most 33 bytes in hex.
impl fmt::Debug for Buf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<bbuf [{}]", self.len)?;
        for (idx, byte) in self.as_bytes().iter().enumerate() {
            if idx == INSPECT_LIMIT {
                write!(f, " ..")?;
                break;
            }
            write!(f, " {:02x}", byte)?;
        }
        write!(f, ">")
    }
}

/// Decodes the content as UTF-8, replacing invalid sequences with `U+FFFD`.
impl fmt::Display for Buf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}

impl PartialEq for Buf {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Buf {}

impl PartialEq<[u8]> for Buf {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<str> for Buf {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for Buf {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialOrd for Buf {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Buf {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl Hash for Buf {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl AsRef<[u8]> for Buf {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Appends formatted text, so `write!(buf, ...)` works like `sprintf`.
impl fmt::Write for Buf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.try_put(s).map(|_| ()).map_err(|_| fmt::Error)
    }
}

impl io::Write for Buf {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        Ok(self.try_put(data)?)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl From<&str> for Buf {
    fn from(s: &str) -> Self {
        Buf::from_content(s.as_bytes(), s.len(), None)
    }
}

impl From<&[u8]> for Buf {
    fn from(data: &[u8]) -> Self {
        Buf::from_content(data, data.len(), None)
    }
}

impl From<Vec<u8>> for Buf {
    fn from(data: Vec<u8>) -> Self {
        Buf::from(&data[..])
    }
}

impl From<Bytes> for Buf {
    fn from(data: Bytes) -> Self {
        Buf::from(&data[..])
    }
}

impl From<Buf> for Bytes {
    fn from(buf: Buf) -> Self {
        buf.freeze()
    }
}
