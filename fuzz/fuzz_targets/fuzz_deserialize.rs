#![no_main]

use libfuzzer_sys::fuzz_target;
use phc_crypto::{deserialize, serialize};

fuzz_target!(|data: &str| {
    // Parsing should never panic, and anything that parses must re-parse
    if let Ok(fields) = deserialize(data) {
        let again = deserialize(&serialize(&fields)).expect("serialized output parses");
        assert_eq!(again, fields);
    }
});
