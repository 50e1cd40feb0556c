// Top-level public operations: ties the rolling/piecewise hash core
// (`hash`), the file-I/O layer (`io`), and the similarity scorer
// (`compare`) into the three operations the spec's external interface
// names: `hash(data)`, `hash_from_file(path)`, `compare(a, b)`.

use std::io::Cursor;
use std::path::Path;

use crate::hash::{self, HashError};
use crate::io::{self, FileError};

/// Input to `hash()`. Mirrors the dynamic `bytes`-or-`str` dispatch of the
/// Python reference this crate is wire-compatible with; in a statically
/// typed API `TypeMismatch` is otherwise unreachable; see DESIGN.md.
pub enum HashInput<'a> {
    Bytes(&'a [u8]),
    Text(&'a str),
}

impl<'a> From<&'a [u8]> for HashInput<'a> {
    fn from(b: &'a [u8]) -> Self {
        HashInput::Bytes(b)
    }
}

impl<'a> From<&'a str> for HashInput<'a> {
    fn from(s: &'a str) -> Self {
        HashInput::Text(s)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for HashInput<'a> {
    fn from(b: &'a [u8; N]) -> Self {
        HashInput::Bytes(b.as_slice())
    }
}

/// Compute the fuzzy-hash digest of `data`.
///
/// Text input is encoded as UTF-8 before hashing, so `hash(s) ==
/// hash(s.as_bytes())` for any `&str` — this is the text/bytes coherence
/// invariant from the spec's testable properties.
pub fn hash<'a>(data: impl Into<HashInput<'a>>) -> Result<String, HashError> {
    let bytes: &[u8] = match data.into() {
        HashInput::Bytes(b) => b,
        HashInput::Text(s) => s.as_bytes(),
    };
    let mut cursor = Cursor::new(bytes);
    hash::hash_reader(&mut cursor, bytes.len() as u64)
}

/// Compute the fuzzy-hash digest of the file at `path`.
///
/// See `io::hash_from_file` for the `NotFound`/`AccessDenied` error
/// surface this wraps.
pub fn hash_from_file(path: impl AsRef<Path>) -> Result<String, FileError> {
    io::hash_from_file(path.as_ref())
}

/// Compare two fuzzy-hash digest strings, returning a similarity score in
/// `[0, 100]`.
pub fn compare(a: &str, b: &str) -> Result<u8, crate::digest::DigestError> {
    crate::compare::compare(a, b)
}
