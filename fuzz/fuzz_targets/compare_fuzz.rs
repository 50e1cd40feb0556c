#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&[u8], &[u8])| {
    // compare() must never panic on arbitrary byte hashes, whether or not
    // they happen to be valid UTF-8 digest strings.
    let (a, b) = data;
    let Ok(a) = std::str::from_utf8(a) else {
        return;
    };
    let Ok(b) = std::str::from_utf8(b) else {
        return;
    };
    if let Ok(score) = fuzzyhash::engine::compare(a, b) {
        assert!(score <= 100);
    }
});
