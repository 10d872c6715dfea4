#![no_main]

use graphql_astparser::Document;
use graphql_astparser::Input;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let input = Input::from_bytes(data);
    let mut document = Document::new();
    let _ = graphql_astparser::parse(&input, &mut document);
});
