#![no_main]

use graphql_astparser::Lexer;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = Lexer::from_bytes(data).tokens();
});
