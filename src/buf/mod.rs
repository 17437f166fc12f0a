//! The growable byte buffer.
//!
//! - [`Buf`] - Owned byte store with doubling growth
//! - [`ByteValue`] - Value accepted by indexed writes
//! - [`IndexKey`] - Key accepted by indexed reads

mod core;
mod index;
mod search;
mod traits;
mod view;

pub use self::core::Buf;
pub use index::{ByteValue, IndexKey};
