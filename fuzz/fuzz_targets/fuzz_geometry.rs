#![no_main]

use libfuzzer_sys::fuzz_target;

use calckit_core::operation::Request;
use calckit_core::options::Options;

fuzz_target!(|data: &[u8]| {
    if data.len() < 16 {
        return;
    }
    let x = f64::from_le_bytes(data[0..8].try_into().unwrap());
    let y = f64::from_le_bytes(data[8..16].try_into().unwrap());

    let requests = [
        Request::Square { side: x },
        Request::Rectangle { base: x, height: y },
        Request::Circle { radius: x },
    ];
    for request in requests {
        // Permissive evaluation is total
        assert!(request.evaluate(&Options::default()).is_ok());
        // Strict evaluation must not panic
        let _ = request.evaluate(&Options::strict());
    }
});
