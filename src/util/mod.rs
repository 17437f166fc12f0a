//! Internal utility functions and helpers.
//!
//! This module contains small helper functions used throughout the crate.
//! It is an implementation detail and not part of the public API.

use crate::error::BufError;

/// Computes the capacity needed to hold `required` bytes.
///
/// Doubles `cap` until it reaches `required`, then clamps to `max`. Fails
/// only when `required` itself is above `max`.
pub(crate) fn grown_capacity(
    cap: usize,
    required: usize,
    max: Option<usize>,
) -> Result<usize, BufError> {
    if required <= cap {
        return Ok(cap);
    }

    if let Some(max) = max {
        if required > max {
            return Err(BufError::CapacityExceeded {
                requested: required,
                max,
            });
        }
    }

    let mut new_cap = cap.max(1);
    while new_cap < required {
        new_cap = new_cap.checked_mul(2).unwrap_or(required);
    }

    Ok(match max {
        Some(max) => new_cap.min(max),
        None => new_cap,
    })
}

/// Resolves a possibly negative slice bound against `len`.
///
/// Negative values count back from the end. The result is in `[0, len]`.
pub(crate) fn normalize_bound(index: isize, len: usize) -> usize {
    if index < 0 {
        len.saturating_sub(index.unsigned_abs())
    } else {
        index.unsigned_abs().min(len)
    }
}

/// Whitespace as classified by C `isspace` in the "C" locale.
#[inline]
pub(crate) fn is_space_byte(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Finds the first occurrence of `needle` in `haystack` at or after `from`.
///
/// Boyer-Moore-Horspool with a 256 entry bad-character table. An empty
/// needle never matches.
pub(crate) fn find_bytes(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    let n = needle.len();
    if n == 0 || from >= haystack.len() || haystack.len() - from < n {
        return None;
    }

    if n == 1 {
        return haystack[from..]
            .iter()
            .position(|&b| b == needle[0])
            .map(|pos| pos + from);
    }

    let last = n - 1;
    let mut skip = [n; 256];
    for (i, &b) in needle[..last].iter().enumerate() {
        skip[b as usize] = last - i;
    }

    let mut pos = from;
    while pos + n <= haystack.len() {
        let window = &haystack[pos..pos + n];
        let tail = window[last];
        if tail == needle[last] && window == needle {
            return Some(pos);
        }
        pos += skip[tail as usize];
    }

    None
}
