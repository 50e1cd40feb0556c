#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // The hashing core must never panic on arbitrary byte content, no
    // matter how many block-size retries it forces.
    let _ = fuzzyhash::engine::hash(data);
});
