// Pinned digest strings, computed against the canonical SpamSum algorithm
// (cross-checked against the reference Python implementation this crate is
// wire-compatible with) so any accidental drift in the core hashing loop
// shows up as a failing assertion rather than a silent behavior change.

use fuzzyhash::engine::{compare, hash};

#[test]
fn empty_input_is_the_canonical_fixed_digest() {
    assert_eq!(hash(&b""[..]).unwrap(), "3::");
}

#[test]
fn single_byte_input() {
    assert_eq!(hash(&b"A"[..]).unwrap(), "3:k:k");
}

#[test]
fn short_word() {
    assert_eq!(hash(&b"hello"[..]).unwrap(), "3:iKn:p");
}

#[test]
fn pangram_sentence() {
    assert_eq!(
        hash(&b"The quick brown fox jumps over the lazy dog"[..]).unwrap(),
        "3:FJKKIUKact:FHIGi"
    );
}

#[test]
fn long_run_of_identical_bytes() {
    let data = vec![b'a'; 500];
    assert_eq!(hash(&data[..]).unwrap(), "3:tjh:z");
}

#[test]
fn full_byte_range_repeated() {
    let mut data = Vec::new();
    for _ in 0..4 {
        data.extend(0u8..=255u8);
    }
    assert_eq!(
        hash(&data[..]).unwrap(),
        "24:X+OmvmLeO22LSeKufL6uS+iv+7ym2/eL+u2/m7muTL2fvmT+OmvmLeO22LSeKufj:XDfLTTLTDfLTTf7fTL377fTL3TDfLTTn"
    );
}

#[test]
fn identical_content_compares_to_100() {
    let h = hash(&b"hello world"[..]).unwrap();
    assert_eq!(compare(&h, &h).unwrap(), 100);
}

#[test]
fn unrelated_short_content_compares_to_zero() {
    let a = hash(&b"hello world"[..]).unwrap();
    let b = hash(&b"goodbye world"[..]).unwrap();
    assert_eq!(compare(&a, &b).unwrap(), 0);
}

#[test]
fn appended_tail_still_scores_high_similarity() {
    let base = b"The quick brown fox jumps over the lazy dog ".repeat(20);
    let mut extended = base.clone();
    extended.extend_from_slice(b"EXTRA TAIL DATA APPENDED HERE");

    assert_eq!(
        hash(&base[..]).unwrap(),
        "6:FHIGaNIGaNIGaNIGaNIGaNIGaNIGaNIGaNIGaNIGaNIGaNIGaNIGaNIGaNIGaNIz:Fe444444444444444444M"
    );
    assert_eq!(
        hash(&extended[..]).unwrap(),
        "6:FHIGaNIGaNIGaNIGaNIGaNIGaNIGaNIGaNIGaNIGaNIGaNIGaNIGaNIGaNIGaNIy:Fe444444444444444444D7"
    );

    let a = hash(&base[..]).unwrap();
    let b = hash(&extended[..]).unwrap();
    assert_eq!(compare(&a, &b).unwrap(), 100);
}
