// Piecewise FNV block hashing and the adaptive block-size retry loop.
//
// This module provides:
// - The rolling trigger hash (`rolling`, C1)
// - Two independent FNV-style block accumulators, reset on trigger (C2)
// - The block-size selection/retry loop that produces the final digest
//
// Byte-for-byte compatible with the canonical ssdeep/SpamSum textual
// digest format (see `examples/original_source/ppdeep.py` in the
// reference corpus this crate is grounded on).

use std::io::{self, Read};

pub mod rolling;

use rolling::RollingHash;

// ---------------------------------------------------------------------------
// Wire-compatibility constants
// ---------------------------------------------------------------------------

/// FNV-style multiplicative constant used by the block hash.
pub const HASH_PRIME: u32 = 0x0100_0193;

/// Seed value for both block-hash accumulators.
pub const HASH_INIT: u32 = 0x2802_1967;

/// Smallest block size; all block sizes are `BLOCKSIZE_MIN * 2^k`.
pub const BLOCKSIZE_MIN: u64 = 3;

/// Target digest field length; `s1` is capped at `SPAMSUM_LENGTH - 1`,
/// `s2` at `SPAMSUM_LENGTH / 2 - 1`.
pub const SPAMSUM_LENGTH: usize = 64;

/// Indexing alphabet for block-hash residues mod 64. Not RFC 4648 base64:
/// there is no padding and the string is never decoded back to bytes.
const B64: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors produced by `hash()`/`hash_from_file()`.
#[derive(Debug)]
pub enum HashError {
    /// Input could not be interpreted as UTF-8 text when text mode was requested.
    TypeMismatch,
    /// The block-size retry loop underflowed `BLOCKSIZE_MIN`. Should be
    /// unreachable for any valid input; surfaced only as a defensive guard.
    InvalidBlockSize,
    /// I/O failure while streaming the input.
    Io(io::Error),
}

impl std::fmt::Display for HashError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch => write!(f, "input is not valid UTF-8 text"),
            Self::InvalidBlockSize => write!(f, "calculated block size is too small"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for HashError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for HashError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

// ---------------------------------------------------------------------------
// Rewindable reader
// ---------------------------------------------------------------------------

/// A byte stream that the adaptive block-size loop can rewind to offset
/// zero and re-read in full. An in-memory buffer rewinds trivially; a
/// file-backed reader needs an actual seek (see `io::hash_from_file`).
pub trait RewindRead: Read {
    /// Seek back to the start of the stream.
    fn rewind_to_start(&mut self) -> io::Result<()>;
}

impl RewindRead for io::Cursor<&[u8]> {
    fn rewind_to_start(&mut self) -> io::Result<()> {
        self.set_position(0);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Block hash accumulator
// ---------------------------------------------------------------------------

/// One FNV-style block-hash accumulator.
#[derive(Clone, Copy)]
struct BlockHash(u32);

impl BlockHash {
    fn new() -> Self {
        Self(HASH_INIT)
    }

    #[inline]
    fn update(&mut self, b: u8) {
        self.0 = self.0.wrapping_mul(HASH_PRIME) ^ (b as u32);
    }

    fn reset(&mut self) {
        self.0 = HASH_INIT;
    }

    fn char(&self) -> u8 {
        B64[(self.0 % 64) as usize]
    }
}

// ---------------------------------------------------------------------------
// Single-pass scan at a fixed block size
// ---------------------------------------------------------------------------

/// Result of one full read of the input at a given candidate block size.
struct PassResult {
    s1: String,
    s2: String,
    /// The last rolling trigger value observed (0 if the input was empty).
    last_r: u32,
    /// Character the `bh1` accumulator would emit if flushed right now.
    tail1: u8,
    /// Character the `bh2` accumulator would emit if flushed right now.
    tail2: u8,
}

const STREAM_BUF_SIZE: usize = 8192;

/// Stream the full input once at `block_size`, emitting `s1`/`s2` characters
/// on trigger. Does not decide whether to retry at a smaller block size —
/// that's the caller's job (`hash_reader`).
fn scan_at_block_size<R: Read>(reader: &mut R, block_size: u64) -> Result<PassResult, HashError> {
    let mut roll = RollingHash::new();
    let mut bh1 = BlockHash::new();
    let mut bh2 = BlockHash::new();
    let mut s1 = String::new();
    let mut s2 = String::new();
    let mut last_r: u32 = 0;

    let mut buf = [0u8; STREAM_BUF_SIZE];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        for &b in &buf[..n] {
            bh1.update(b);
            bh2.update(b);
            let r = roll.feed(b);
            last_r = r;

            if (r as u64) % block_size == block_size - 1 {
                if s1.len() < SPAMSUM_LENGTH - 1 {
                    s1.push(bh1.char() as char);
                    bh1.reset();
                }
                if (r as u64) % (block_size * 2) == (block_size * 2) - 1
                    && s2.len() < SPAMSUM_LENGTH / 2 - 1
                {
                    s2.push(bh2.char() as char);
                    bh2.reset();
                }
            }
        }
    }

    Ok(PassResult {
        s1,
        s2,
        last_r,
        tail1: bh1.char(),
        tail2: bh2.char(),
    })
}

// ---------------------------------------------------------------------------
// Adaptive block-size loop
// ---------------------------------------------------------------------------

/// Compute the digest of `reader`, whose total length is `slen` bytes.
///
/// Implements the adaptive block-size retry loop from the spec: start at
/// the smallest block size such that `bs * SPAMSUM_LENGTH >= slen`, and
/// halve it (rewinding and re-scanning) as long as the result is above
/// `BLOCKSIZE_MIN` and `s1` came out shorter than `SPAMSUM_LENGTH / 2`.
pub fn hash_reader<R: RewindRead>(reader: &mut R, slen: u64) -> Result<String, HashError> {
    let mut block_size = BLOCKSIZE_MIN;
    while block_size * (SPAMSUM_LENGTH as u64) < slen {
        block_size *= 2;
    }

    loop {
        if block_size < BLOCKSIZE_MIN {
            return Err(HashError::InvalidBlockSize);
        }

        reader.rewind_to_start()?;
        let pass = scan_at_block_size(reader, block_size)?;

        if block_size > BLOCKSIZE_MIN && pass.s1.len() < SPAMSUM_LENGTH / 2 {
            block_size /= 2;
            continue;
        }

        let mut s1 = pass.s1;
        let mut s2 = pass.s2;
        // `last_r` is zero only when no byte was ever fed (empty input);
        // the reference relies on this rather than special-casing slen==0.
        if pass.last_r != 0 {
            s1.push(pass.tail1 as char);
            s2.push(pass.tail2 as char);
        }

        return Ok(format!("{block_size}:{s1}:{s2}"));
    }
}
