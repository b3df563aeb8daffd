#![no_main]

use enumgen::frontend::{lexer, parser};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Go sources are UTF-8; the loader rejects anything else before lexing
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(tokens) = lexer::lex(s) {
            let _ = parser::parse(&tokens);
        }
    }
});
