#![no_main]

use libfuzzer_sys::fuzz_target;
use bbuf::Buf;

fuzz_target!(|data: Vec<u8>| {
    if data.is_empty() {
        return;
    }

    // First byte picks the initial capacity, the rest is an op stream
    let initial = (data[0] as usize % 16) + 1;
    let mut buf = Buf::new(initial);
    let mut model: Vec<u8> = Vec::new();
    let mut expected_cap = initial;

    for op in data[1..].chunks(3) {
        let arg = op.get(1).copied().unwrap_or(0) as usize;
        match op[0] % 7 {
            0 => {
                let piece = &op[1..];
                assert_eq!(buf.put(piece), piece.len());
                model.extend_from_slice(piece);
            }
            1 => {
                let removed = buf.pop(arg);
                assert_eq!(removed, arg.min(model.len()));
                model.truncate(model.len() - removed);
            }
            2 => {
                assert_eq!(buf.clear(), model.len());
                model.clear();
            }
            3 => {
                let removed = buf.shift(arg);
                assert_eq!(removed, arg.min(model.len()));
                model.drain(..removed);
            }
            4 => {
                let value = op.get(2).copied().unwrap_or(0);
                let result = buf.set(arg, value);
                if arg < model.len() {
                    assert!(result.is_ok());
                    model[arg] = value;
                } else {
                    assert!(result.is_err());
                }
            }
            5 => {
                buf.reverse();
                model.reverse();
            }
            _ => {
                let cpy = buf.copy();
                assert_eq!(cpy.as_bytes(), buf.as_bytes());
                assert_eq!(cpy.cap(), buf.cap());
            }
        }

        // Verify: capacity follows the doubling policy
        while expected_cap < model.len() {
            expected_cap *= 2;
        }
        assert_eq!(buf.cap(), expected_cap);

        // Verify: content and indexed reads match the model
        assert!(buf.len() <= buf.cap());
        assert_eq!(buf.as_bytes(), &model[..]);
        assert_eq!(buf.get(model.len()), None);
        if let Some(&last) = model.last() {
            assert_eq!(buf.get(model.len() - 1), Some(last));
        }
    }
});
