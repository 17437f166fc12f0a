// Integration tests for the Buf public API
// Tests cover: growth policy, mutation, slicing, search, indexed access

use std::cmp::Ordering;

use bbuf::{Buf, BufConfig, BufError, ByteValue};

// ============================================================================
// Construction & Growth
// ============================================================================

#[test]
fn test_put_then_grow() {
    let mut buf = Buf::new(4);
    assert_eq!(buf.put("abc"), 3);
    assert_eq!(buf.cap(), 4);
    assert_eq!(buf.to_string(), "abc");

    assert_eq!(buf.put("abc"), 3);
    assert_eq!(buf.to_string(), "abcabc");
    assert_eq!(buf.cap(), 8, "capacity should double once");
}

#[test]
fn test_capacity_is_smallest_doubling() {
    for initial in [1usize, 3, 4, 7, 10] {
        let mut buf = Buf::new(initial);
        let mut total = 0;

        for piece in ["a", "bc", "defg", "hijklmnop", "qrstuvwxyz0123456789"] {
            total += buf.put(piece);

            let mut expected = initial;
            while expected < total {
                expected *= 2;
            }
            assert_eq!(
                buf.cap(),
                expected,
                "initial {} after {} bytes",
                initial,
                total
            );
        }
    }
}

#[test]
fn test_read_only_ops_keep_capacity() {
    let mut buf = Buf::new(4);
    buf.put("hello");
    let cap = buf.cap();

    let _ = buf.slice(1, None);
    let _ = buf.copy();
    let _ = buf.index_of("l");
    let _ = buf.compare("hello");
    let _ = buf.get(100);
    let _ = buf.char_at(0);
    let _ = buf.is_space();
    let _ = buf.bytes();

    assert_eq!(buf.cap(), cap);
}

#[test]
fn test_try_new_rejects_zero() {
    assert!(matches!(
        Buf::try_new(0),
        Err(BufError::InvalidConfig { .. })
    ));
}

#[test]
fn test_config_ceiling() {
    let config = BufConfig::new(4).unwrap().with_max_size(16);
    let mut buf = Buf::with_config(config).unwrap();

    assert_eq!(buf.put("0123456789"), 10);
    assert_eq!(buf.cap(), 16);
    assert_eq!(buf.put("0123456789"), 0, "write past ceiling is dropped");
    assert_eq!(buf.len(), 10);
    assert!(buf.grow(17).is_err());
    assert!(buf.set_len(20).is_err());
}

// ============================================================================
// Mutation
// ============================================================================

#[test]
fn test_pop_keeps_capacity() {
    let mut buf = Buf::new(4);
    assert_eq!(buf.put("abcedf"), 6);
    assert_eq!(buf.pop(2), 2);
    assert_eq!(buf.len(), 4);
    assert_eq!(buf.cap(), 8);
}

#[test]
fn test_clear_returns_prior_length() {
    let mut buf = Buf::new(4);
    buf.put("abcdefg");
    let len = buf.len();
    assert_ne!(len, 0);
    assert_eq!(buf.clear(), len);
    assert_eq!(buf.put("中文"), 6);
}

#[test]
fn test_clear_then_put_matches_fresh() {
    for s in ["", "a", "hello world", "中文 mixed ascii", "\t\n"] {
        let mut reused = Buf::new(4);
        reused.put("some earlier content that forced growth");
        reused.clear();
        reused.put(s);

        let mut fresh = Buf::new(4);
        fresh.put(s);

        assert_eq!(reused.to_string(), fresh.to_string());
        assert!(reused.equals(&fresh));
    }
}

#[test]
fn test_shift_matches_slice() {
    let mut buf = Buf::new(4);
    buf.put("abcdefg");

    for n in 0..10 {
        let mut shifted = buf.copy();
        let expected = buf.slice(n as isize, None);
        shifted.shift(n);
        assert_eq!(shifted, expected, "shift({})", n);
    }
}

#[test]
fn test_reverse_twice_is_identity() {
    let mut buf = Buf::new(4);
    buf.put("reverse me");
    let before = buf.copy();
    buf.reverse();
    assert_eq!(buf.to_string(), "em esrever");
    buf.reverse();
    assert_eq!(buf, before);
}

// ============================================================================
// Copy & Slice
// ============================================================================

#[test]
fn test_copy_does_not_alias() {
    let mut buf = Buf::new(4);
    assert_eq!(buf.put("abcd"), 4);

    let mut cpy = buf.copy();
    assert_eq!(cpy.len(), 4);
    assert_eq!(cpy.put("e"), 1);
    assert_eq!(cpy.len(), 5);
    assert_eq!(buf.len(), 4);
    assert_eq!(buf.to_string(), "abcd");
}

#[test]
fn test_copy_and_slice_equal_source() {
    let mut buf = Buf::new(4);
    buf.put("source");

    let mut cpy = buf.copy();
    let mut part = buf.slice_from(0);
    assert!(cpy.equals(&buf));
    assert!(part.equals(&buf));

    cpy.put("!");
    part.put("?");
    assert_eq!(buf.len(), 6);
    assert_eq!(buf.to_string(), "source");
}

#[test]
fn test_slice_python_bounds() {
    let mut buf = Buf::new(4);
    assert_eq!(buf.put("abcd"), 4);
    assert_eq!(buf.put("efg"), 3);

    assert_eq!(buf.slice(0, None).to_string(), "abcdefg");
    assert_eq!(buf.slice(1, None).to_string(), "bcdefg");
    assert_eq!(buf.slice(-1, None).to_string(), "g");
    assert_eq!(buf.slice(-10, None).to_string(), "abcdefg");
    assert_eq!(buf.slice(1, Some(4)).to_string(), "bcd");
    assert_eq!(buf.slice(1, Some(10)).to_string(), "bcdefg");
    assert_eq!(buf.slice(1, Some(-1)).to_string(), "bcdef");
    assert_eq!(buf.slice(1, Some(-10)).to_string(), "");
    assert_eq!(buf.slice(-10, Some(0)).to_string(), "");
    assert_eq!(buf.slice(1, Some(1)).to_string(), "");
    assert_eq!(buf.slice(1, Some(0)).to_string(), "");
}

#[test]
fn test_slice_negative_whole_content() {
    let mut buf = Buf::new(4);
    buf.put("xyz");
    for k in 3..8 {
        assert_eq!(buf.slice_from(-k).to_string(), "xyz");
    }
}

// ============================================================================
// Indexed Access
// ============================================================================

#[test]
fn test_get_index() {
    let mut buf = Buf::new(4);
    assert_eq!(buf.put("abcdef"), 6);
    assert_eq!(buf.get(0), Some(97));
    assert_eq!(buf.get(1), Some(98));
    assert_eq!(buf.get(2), Some(99));
    assert_eq!(buf.get(3), Some(100));
    assert_eq!(buf.get(100), None);
    assert_eq!(buf.get(-1), None);
    assert_eq!(buf.get("abc"), None);
}

#[test]
fn test_set_index() {
    let mut buf = Buf::new(4);
    assert_eq!(buf.put("abcdef"), 6);

    assert_eq!(buf.set(3, "g").unwrap(), ByteValue::Text("g"));
    assert_eq!(buf.get(3), Some(b'g'));

    assert!(matches!(buf.set(10, "m"), Err(BufError::OutOfRange { .. })));
    assert!(matches!(
        buf.set(1, 256),
        Err(BufError::InvalidByteValue { .. })
    ));
    assert!(matches!(
        buf.set(1, "abc"),
        Err(BufError::MultiByteCharacter { .. })
    ));
    assert!(matches!(
        buf.set(1, "你"),
        Err(BufError::MultiByteCharacter { .. })
    ));
    assert!(matches!(
        buf.set(1, 'é'),
        Err(BufError::MultiByteCharacter { encoded_len: 2 })
    ));
    assert_eq!(buf.to_string(), "abcgef", "failed writes leave content untouched");
}

#[test]
fn test_char_at() {
    let mut buf = Buf::new(4);
    assert_eq!(buf.put("abcdef"), 6);
    assert_eq!(buf.char_at(0), Some('a'));
    assert_eq!(buf.char_at(1), Some('b'));
    assert_eq!(buf.char_at(2), Some('c'));
    assert_eq!(buf.char_at(100), None);

    buf.clear();
    buf.put("你好");
    assert_ne!(buf.char_at(1), Some('你'));
}

#[test]
fn test_bytes() {
    let mut buf = Buf::new(4);
    assert_eq!(buf.put("abc"), 3);
    assert_eq!(buf.bytes(), vec![97, 98, 99]);
}

// ============================================================================
// Comparison & Search
// ============================================================================

#[test]
fn test_compare() {
    let mut buf = Buf::new(4);
    assert_eq!(buf.compare(""), Ordering::Equal);
    buf.put("efg");
    assert_eq!(buf.compare("abc"), Ordering::Greater);
    assert_eq!(buf.compare("fgh"), Ordering::Less);
    assert_eq!(buf.compare("efg"), Ordering::Equal);

    buf.clear();
    buf.put("中文");
    assert_eq!(buf.compare(&buf), Ordering::Equal);
    assert_eq!(buf.slice_from(1).compare(&buf.slice_from(1)), Ordering::Equal);
}

#[test]
fn test_index_of() {
    let mut buf = Buf::new(10);
    buf.put("hello world");
    assert_eq!(buf.index_of("h"), Some(0));
    assert_eq!(buf.index_of_from("h", 1), None);
    assert_eq!(buf.index_of_from("e", 1), Some(1));
    assert_eq!(buf.index_of("world"), Some(6));
    assert_eq!(buf.index_of("what"), None);

    buf.clear();
    buf.put("明天");
    assert_eq!(buf.index_of("what"), None);
    assert_eq!(buf.index_of("天"), Some(3));
    assert_eq!(buf.index_of(&buf.slice_from(1)), Some(1));
    assert_eq!(buf.index_of(&buf.slice(0, Some(4))), Some(0));
}

#[test]
fn test_index_of_agrees_with_starts_with() {
    let mut buf = Buf::new(8);
    buf.put("abracadabra");

    for needle in ["a", "ab", "abra", "bra", "cad", "abracadabra", "z", "abracadabrax"] {
        assert_eq!(
            buf.index_of(needle) == Some(0),
            buf.starts_with(needle),
            "needle {:?}",
            needle
        );
    }
}

#[test]
fn test_ends_with_every_suffix() {
    let mut buf = Buf::new(8);
    buf.put("héllo wörld");

    for k in 0..=buf.len() {
        let suffix = buf.slice((buf.len() - k) as isize, None);
        assert!(buf.ends_with(&suffix), "suffix of {} bytes", k);
    }
}

#[test]
fn test_starts_and_ends_with() {
    let mut buf = Buf::new(10);
    buf.put("hello world");
    assert!(buf.starts_with("hello"));
    assert!(!buf.starts_with("abcd"));
    assert!(buf.ends_with("world"));
    assert!(!buf.ends_with("abcd"));

    buf.clear();
    buf.put("你好");
    assert!(buf.starts_with(&buf.slice(0, Some(3))));
    assert!(buf.starts_with(&buf.slice(0, Some(2))));
    assert!(buf.starts_with("你"));
    assert!(buf.ends_with(&buf.slice_from(5)));
    assert!(buf.ends_with(&buf.slice_from(3)));
    assert!(!buf.ends_with(&buf.slice(1, Some(3))));
    assert!(buf.ends_with("好"));
}

#[test]
fn test_is_space() {
    let mut buf = Buf::new(10);
    assert!(!buf.is_space());
    buf.put("hello world");
    assert!(!buf.is_space());
    buf.clear();
    buf.put(" \t\n\r");
    assert!(buf.is_space());

    buf.clear();
    buf.put("\x0b\x0c");
    assert!(buf.is_space(), "vertical tab and form feed are whitespace");
}

#[test]
fn test_is_buf() {
    assert!(!Buf::is_buf(&1));
    assert!(!Buf::is_buf(&1.2));
    assert!(!Buf::is_buf(&"string"));
    assert!(!Buf::is_buf(&()));
    assert!(!Buf::is_buf(&(|| ())));
    assert!(Buf::is_buf(&Buf::new(4)));
}
