// Similarity scorer: block-size alignment, common-substring pre-filter,
// Levenshtein edit distance, and a block-size-scaled clamp.
//
// The rolling-hash pre-filter (`common_substring`) reuses the same C1
// trigger hash used for hashing — it is the formal link between "these
// two digests share no content" and "the edit-distance score is zero,
// not misleadingly nonzero from coincidental short matches".

use crate::digest::{Digest, DigestError, strip_runs};
use crate::hash::BLOCKSIZE_MIN;
use crate::hash::rolling::{ROLL_WINDOW, RollingHash};

pub mod levenshtein;

/// Compare two fuzzy-hash digest strings, returning a similarity score in
/// `[0, 100]`. Block sizes that are neither equal nor a factor of two
/// apart are not comparable and score `0` — this is a valid outcome, not
/// an error.
pub fn compare(a: &str, b: &str) -> Result<u8, DigestError> {
    let da: Digest = a.parse()?;
    let db: Digest = b.parse()?;

    // `block_size` is an attacker-controlled u64 parsed straight from the
    // digest string with no upper bound (`digest::Digest::from_str`), so
    // doubling it must not panic on overflow — saturate instead; a
    // saturated value can never equal the other (unsaturated) side, which
    // is the correct "not comparable" outcome anyway.
    if da.block_size != db.block_size
        && da.block_size != db.block_size.saturating_mul(2)
        && db.block_size != da.block_size.saturating_mul(2)
    {
        return Ok(0);
    }

    let a_s1 = strip_runs(&da.s1);
    let a_s2 = strip_runs(&da.s2);
    let b_s1 = strip_runs(&db.s1);
    let b_s2 = strip_runs(&db.s2);

    if da.block_size == db.block_size && a_s1 == b_s1 {
        return Ok(100);
    }

    let score = if da.block_size == db.block_size {
        let score1 = score_strings(&a_s1, &b_s1, da.block_size);
        let score2 = score_strings(&a_s2, &b_s2, db.block_size.saturating_mul(2));
        score1.max(score2)
    } else if da.block_size == db.block_size.saturating_mul(2) {
        score_strings(&a_s1, &b_s2, da.block_size)
    } else {
        score_strings(&a_s2, &b_s1, db.block_size)
    };

    Ok(score)
}

/// Score one pair of (already run-stripped) digest fields at `block_size`.
fn score_strings(x: &str, y: &str, block_size: u64) -> u8 {
    if !common_substring(x, y) {
        return 0;
    }

    let d = levenshtein::distance(x.as_bytes(), y.as_bytes());
    let mut score = (d as u64 * crate::hash::SPAMSUM_LENGTH as u64) / (x.len() + y.len()) as u64;
    score = (100 * score) / crate::hash::SPAMSUM_LENGTH as u64;
    let mut score = 100u64.saturating_sub(score);

    // Same overflow hazard as the alignment check above: `block_size` is
    // attacker-controlled and unbounded, so the scaling multiply saturates
    // rather than panics. A saturated cap is >= 100 and so never actually
    // clamps anything, which is the right behavior for an implausibly
    // huge block size.
    let cap = (block_size / BLOCKSIZE_MIN).saturating_mul(x.len().min(y.len()) as u64);
    if score > cap {
        score = cap;
    }

    score as u8
}

/// True if `x` and `y` share a 7-byte substring, detected via matching
/// rolling-hash trigger values at identical relative positions, then
/// verified byte-for-byte to rule out a rolling-hash collision.
///
/// Iterates `y`'s rolling hash against all of `x`'s recorded hashes,
/// returning on the first *verified* match rather than the best one —
/// the contract is boolean, so order doesn't affect the result.
fn common_substring(x: &str, y: &str) -> bool {
    let xb = x.as_bytes();
    let yb = y.as_bytes();

    let mut rx = RollingHash::new();
    let hashes: Vec<u32> = xb.iter().map(|&b| rx.feed(b)).collect();

    let mut ry = RollingHash::new();
    for (i, &b) in yb.iter().enumerate() {
        let rh = ry.feed(b);
        if i < ROLL_WINDOW - 1 {
            continue;
        }
        for j in (ROLL_WINDOW - 1)..hashes.len() {
            if hashes[j] != 0 && hashes[j] == rh {
                let ir = i + 1 - ROLL_WINDOW;
                let jr = j + 1 - ROLL_WINDOW;
                if yb.len() - ir >= ROLL_WINDOW
                    && yb[ir..ir + ROLL_WINDOW] == xb[jr..jr + ROLL_WINDOW]
                {
                    return true;
                }
            }
        }
    }
    false
}
