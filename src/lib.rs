//! bbuf
//!
//! A growable byte buffer for incremental text and byte assembly.
//!
//! Building a large string from many small pieces by repeated concatenation
//! copies the accumulated prefix over and over. [`Buf`] instead appends into
//! an owned store that doubles when full, so each `put` costs amortized O(1)
//! per byte.
//!
//! The crate intentionally:
//! - indexes by BYTE, never by character
//! - never shares storage between two buffers
//! - never errors on reads (out-of-range reads return `None`)
//!
//! # Example
//!
//! ```
//! use bbuf::Buf;
//!
//! let mut buf = Buf::new(4);
//! buf.put("hello");
//! buf.put(" world");
//!
//! assert_eq!(buf.index_of("world"), Some(6));
//! assert_eq!(buf.slice(-5, None).to_string(), "world");
//! assert!(buf.starts_with("hello"));
//! assert_eq!(buf.cap(), 16);
//! ```
//!
//! # Formatting
//!
//! ```
//! use std::fmt::Write;
//! use bbuf::Buf;
//!
//! let mut buf = Buf::default();
//! for i in 0..3 {
//!     write!(buf, "{},", i).unwrap();
//! }
//! buf.pop(1);
//! assert_eq!(buf.to_string(), "0,1,2");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod buf;
mod config;
mod error;
mod input;

mod util; // internal growth/search helpers

//
// Public surface
//

pub use buf::{Buf, ByteValue, IndexKey};
pub use config::{
    BufConfig, DEFAULT_INITIAL_CAPACITY, DEFAULT_SIZE_CEILING, MAX_INITIAL_CAPACITY,
};
pub use error::{BufError, Result};
pub use input::ByteInput;
