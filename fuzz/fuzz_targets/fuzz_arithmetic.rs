#![no_main]

use libfuzzer_sys::fuzz_target;

use calckit_core::arithmetic::{add, checked_add, checked_subtract, subtract};

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let a = i32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    let b = i32::from_le_bytes([data[4], data[5], data[6], data[7]]);

    assert_eq!(add(a, b), add(b, a));
    assert_eq!(subtract(a, b), subtract(b, a).wrapping_neg());
    if let Ok(sum) = checked_add(a, b) {
        assert_eq!(sum, add(a, b));
    }
    if let Ok(diff) = checked_subtract(a, b) {
        assert_eq!(diff, subtract(a, b));
    }
});
