#![no_main]

use libfuzzer_sys::fuzz_target;

use calckit_core::operation::{evaluate_all, Request};
use calckit_core::options::Options;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must never panic the batch decoder or evaluator
    if let Ok(requests) = serde_json::from_slice::<Vec<Request>>(data) {
        let results = evaluate_all(&requests, &Options::strict());
        assert_eq!(results.len(), requests.len());
    }
});
