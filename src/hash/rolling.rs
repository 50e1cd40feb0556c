// Rolling-window trigger hash, matching ssdeep/SpamSum exactly.
//
// A 7-byte circular window feeds three accumulators (`h1`, `h2`, `h3`)
// whose sum is the trigger value consumed by the block hasher and by
// the comparator's common-substring gate. The three accumulators give
// content-defined trigger points: inserting or deleting bytes far from
// a position does not shift triggers in unaffected regions, which is
// what gives the digest its similarity property.

/// Width of the rolling window (`ROLL_WINDOW` in the reference).
pub const ROLL_WINDOW: usize = 7;

/// Rolling trigger hash state for one input stream.
///
/// `feed` must be called once per byte, in order; the returned value is
/// the trigger used by the block hasher (`rh % block_size`) and by the
/// comparator's common-substring scan.
#[derive(Clone, Debug, Default)]
pub struct RollingHash {
    h1: u32,
    h2: u32,
    h3: u32,
    window: [u8; ROLL_WINDOW],
    n: usize,
}

impl RollingHash {
    /// New rolling hash with all accumulators at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one byte, returning the updated trigger value `h1 + h2 + h3`.
    ///
    /// Update order matches the reference exactly: `h2` is updated from
    /// the outgoing window byte before `h1` is, and `h3` rotates left by
    /// 5 bits and XORs in the new byte. All arithmetic wraps at 32 bits.
    #[inline]
    pub fn feed(&mut self, b: u8) -> u32 {
        let b32 = b as u32;
        self.h2 = self
            .h2
            .wrapping_sub(self.h1)
            .wrapping_add((ROLL_WINDOW as u32).wrapping_mul(b32));
        self.h1 = self
            .h1
            .wrapping_add(b32)
            .wrapping_sub(self.window[self.n % ROLL_WINDOW] as u32);
        self.window[self.n % ROLL_WINDOW] = b;
        self.n += 1;
        self.h3 = (self.h3 << 5) ^ b32;
        self.h1.wrapping_add(self.h2).wrapping_add(self.h3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_zero() {
        let mut r = RollingHash::new();
        assert_eq!(r.feed(0), 0);
    }

    #[test]
    fn first_byte_contributes_directly() {
        let mut r = RollingHash::new();
        // h2 = 0 - 0 + 7*5 = 35, h1 = 0 + 5 - 0 = 5, h3 = (0<<5) ^ 5 = 5
        assert_eq!(r.feed(5), 35 + 5 + 5);
    }

    #[test]
    fn window_wraps_after_seven_bytes() {
        let mut r = RollingHash::new();
        for b in 1..=7u8 {
            r.feed(b);
        }
        // h1 before the 8th feed summed bytes 1..=7 = 28.
        assert_eq!(r.h1, 28);
        let r8 = r.feed(9);
        assert_ne!(r8, 0);
    }

    #[test]
    fn deterministic_for_same_sequence() {
        let seq = b"some arbitrary byte sequence of moderate length";
        let mut a = RollingHash::new();
        let mut b = RollingHash::new();
        let va: Vec<u32> = seq.iter().map(|&x| a.feed(x)).collect();
        let vb: Vec<u32> = seq.iter().map(|&x| b.feed(x)).collect();
        assert_eq!(va, vb);
    }

    #[test]
    fn unaffected_region_triggers_survive_local_edit() {
        // A long shared tail after a single inserted byte should produce
        // numerous identical trigger values once the window has slid past
        // the edit — this is the key CTPH stability property.
        let base: Vec<u8> = (0..200u32).map(|i| (i % 251) as u8).collect();
        let mut edited = base.clone();
        edited.insert(0, 0xFF);

        let mut rb = RollingHash::new();
        let base_vals: Vec<u32> = base.iter().map(|&b| rb.feed(b)).collect();

        let mut re = RollingHash::new();
        let edited_vals: Vec<u32> = edited.iter().map(|&b| re.feed(b)).collect();

        // After the window (7 bytes) has fully slid past the insertion,
        // trigger value at position i+1 in `edited` should equal position i
        // in `base`.
        let tail_matches = base_vals[ROLL_WINDOW..]
            .iter()
            .zip(edited_vals[ROLL_WINDOW + 1..].iter())
            .filter(|(a, b)| a == b)
            .count();
        assert!(tail_matches > 0, "expected some surviving trigger matches");
    }
}
