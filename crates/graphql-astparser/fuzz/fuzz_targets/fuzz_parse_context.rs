#![no_main]

use graphql_astparser::ParseContext;
use libfuzzer_sys::fuzz_target;

// Parses the input twice through one context; a reset must make the second
// parse indistinguishable from the first.
fuzz_target!(|data: &[u8]| {
    let mut context = ParseContext::new();
    let first = context.parse(data).map(|()| context.document.node_count());
    let second = context.parse(data).map(|()| context.document.node_count());
    assert_eq!(first.ok(), second.ok());
});
