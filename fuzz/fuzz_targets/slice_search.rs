#![no_main]

use libfuzzer_sys::fuzz_target;
use bbuf::Buf;

fn naive_find(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if needle.is_empty() || from >= haystack.len() {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|pos| pos + from)
}

fn bound(index: isize, len: usize) -> usize {
    let len = len as isize;
    let index = if index < 0 { index + len } else { index };
    index.clamp(0, len) as usize
}

fuzz_target!(|data: Vec<u8>| {
    if data.len() < 4 {
        return;
    }

    let start = data[0] as i8 as isize;
    let end = data[1] as i8 as isize;
    let split = (data[2] as usize).min(data.len() - 3);
    let (haystack, needle) = data[3..].split_at(split);

    let mut buf = Buf::new(1);
    buf.put(haystack);

    // Verify: slice follows Python bounds and owns its storage
    let lo = bound(start, haystack.len());
    let hi = bound(end, haystack.len());
    let expected: &[u8] = if lo < hi { &haystack[lo..hi] } else { &[] };
    let mut part = buf.slice(start, Some(end));
    assert_eq!(part.as_bytes(), expected);
    part.put(b"tail");
    assert_eq!(buf.as_bytes(), haystack);

    // Verify: search agrees with a naive scan
    let from = data[2] as usize % (haystack.len() + 1);
    assert_eq!(buf.index_of_from(needle, from), naive_find(haystack, needle, from));
    if !needle.is_empty() {
        assert_eq!(buf.index_of(needle) == Some(0), buf.starts_with(needle));
    }
    assert_eq!(buf.ends_with(needle), haystack.ends_with(needle));
    assert_eq!(buf.compare(needle), haystack.cmp(needle));
});
