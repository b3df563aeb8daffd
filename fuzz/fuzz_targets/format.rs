#![no_main]

use enumgen::format::format_source;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Formatting must be idempotent on anything it accepts
        if let Ok(once) = format_source(s) {
            let twice = format_source(&once);
            assert_eq!(twice.as_deref(), Ok(once.as_str()));
        }
    }
});
