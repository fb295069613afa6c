//! xoroshiro128+ PRNG (Blackman & Vigna) — explicit state, no globals

/// Default seed words, shared by every simulation unless a caller injects
/// its own. Two fixed constants so runs are reproducible out of the box.
pub const DEFAULT_SEED: (u64, u64) = (0x0bdb_1dd3_52d7_ddd4, 0x009b_18cd_16d1_df52);

/// Jump polynomial equivalent to 2^64 calls to `next_u64`, for carving out
/// non-overlapping substreams.
const JUMP: [u64; 2] = [0xbeac_0467_eba5_facb, 0xd86b_048b_86aa_9922];

/// Seedable 64-bit generator driving all randomized behavior.
///
/// Held by value and passed where randomness is needed, so independent
/// simulations stay deterministic side by side and tests can inject seeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xoroshiro128 {
    s0: u64,
    s1: u64,
}

impl Xoroshiro128 {
    pub fn new(s0: u64, s1: u64) -> Self {
        Self { s0, s1 }
    }

    /// Advance the state and return the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        let s0 = self.s0;
        let mut s1 = self.s1;
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.s0 = s0.rotate_left(55) ^ s1 ^ (s1 << 14);
        self.s1 = s1.rotate_left(36);

        result
    }

    /// Returns a double in [0, 1) using the top 53 bits, matching the
    /// mantissa precision of an f64.
    pub fn percent(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Advance the state by 2^64 `next_u64` calls, yielding a substream
    /// guaranteed not to overlap the original for 2^64 draws.
    pub fn jump(&mut self) {
        let mut s0 = 0u64;
        let mut s1 = 0u64;
        for word in JUMP {
            for bit in 0..64 {
                if word & (1u64 << bit) != 0 {
                    s0 ^= self.s0;
                    s1 ^= self.s1;
                }
                self.next_u64();
            }
        }
        self.s0 = s0;
        self.s1 = s1;
    }
}

impl Default for Xoroshiro128 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED.0, DEFAULT_SEED.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference outputs for the default seed, computed from the published
    // xoroshiro128+ algorithm.
    const GOLDEN: [u64; 5] = [
        0x0c76_36a0_69a9_bd26,
        0x2062_a1f1_e10f_3b4c,
        0x1159_bf59_05e0_5f11,
        0x1d36_c549_3f35_a1cd,
        0xf3e2_efe3_e041_0882,
    ];

    #[test]
    fn default_seed_sequence_is_bit_exact() {
        let mut rng = Xoroshiro128::default();
        for expected in GOLDEN {
            assert_eq!(rng.next_u64(), expected);
        }
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = Xoroshiro128::new(42, 1337);
        let mut b = Xoroshiro128::new(42, 1337);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn percent_stays_in_unit_interval() {
        let mut rng = Xoroshiro128::default();
        for _ in 0..10_000 {
            let v = rng.percent();
            assert!((0.0..1.0).contains(&v), "percent out of range: {v}");
        }
    }

    #[test]
    fn jump_matches_reference_state() {
        let mut rng = Xoroshiro128::default();
        rng.jump();
        assert_eq!(
            rng,
            Xoroshiro128::new(0x2f85_aede_74a3_73ee, 0x97ad_15ad_9e82_3c86)
        );
        assert_eq!(rng.next_u64(), 0xc732_c48c_1325_b074);
    }

    #[test]
    fn jump_decorrelates_from_short_prefixes() {
        let mut jumped = Xoroshiro128::default();
        jumped.jump();

        // No short prefix of the main stream reaches the jumped state.
        let mut walked = Xoroshiro128::default();
        for _ in 0..10_000 {
            walked.next_u64();
            assert_ne!(walked, jumped);
        }
    }
}
