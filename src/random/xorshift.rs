//! xorshift128+ generator.
//!
//! # Algorithm
//!
//! Two 64-bit state words are mixed with a left shift of 23 and right shifts
//! of 17 and 26; the output is the sum of the new and previous second word.
//! Passes BigCrush, including with bits reversed, and is equidistributed in
//! one dimension.
//!
//! Reference: Vigna (2017), "Further scramblings of Marsaglia's xorshift
//! generators", *Journal of Computational and Applied Mathematics* 315.
//!
//! # Seeding
//!
//! The all-zero state is a fixed point that emits zeros forever, so it is
//! rejected at construction, on reseed, and on deserialization.

use rand::rand_core::impls;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::Generator;
use crate::error::{Error, Result};

/// xorshift128+ pseudo-random number generator.
///
/// # Examples
/// ```
/// use omnia::random::{Generator, XorShift128Plus};
///
/// let mut rng = XorShift128Plus::new([1, 1]).unwrap();
/// assert_eq!(rng.next(), 8388673);
///
/// let r = rng.uniform_real();
/// assert!((0.0..=1.0).contains(&r));
///
/// assert!(XorShift128Plus::new([0, 0]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[u64; 2]", into = "[u64; 2]")]
pub struct XorShift128Plus {
    s: [u64; 2],
}

impl XorShift128Plus {
    /// Creates a generator from a two-word seed.
    ///
    /// # Errors
    /// Returns [`Error::ZeroSeed`] if both words are zero.
    pub fn new(seed: [u64; 2]) -> Result<Self> {
        check_seed(seed)?;
        Ok(Self { s: seed })
    }

    /// Overwrites both state words.
    ///
    /// # Errors
    /// Returns [`Error::ZeroSeed`] if both words are zero; the current state
    /// is left untouched in that case.
    pub fn set_seed(&mut self, seed: [u64; 2]) -> Result<()> {
        check_seed(seed)?;
        self.s = seed;
        Ok(())
    }

    /// Returns the current state words.
    pub fn state(&self) -> [u64; 2] {
        self.s
    }
}

fn check_seed(seed: [u64; 2]) -> Result<()> {
    if seed == [0, 0] {
        log::warn!("rejecting all-zero xorshift128+ seed");
        return Err(Error::ZeroSeed);
    }
    Ok(())
}

impl Generator for XorShift128Plus {
    type Word = u64;

    fn next(&mut self) -> u64 {
        let mut x = self.s[0];
        let y = self.s[1];
        self.s[0] = y;
        x ^= x << 23;
        self.s[1] = x ^ y ^ (x >> 17) ^ (y >> 26);
        self.s[1].wrapping_add(y)
    }

    /// `next() / (2⁶⁴ − 1)`; the top of the range rounds to exactly `1.0`.
    fn uniform_real(&mut self) -> f64 {
        self.next() as f64 / u64::MAX as f64
    }
}

impl RngCore for XorShift128Plus {
    fn next_u32(&mut self) -> u32 {
        // High bits are the better-mixed half of an xorshift+ output.
        (Generator::next(self) >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        Generator::next(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

impl TryFrom<[u64; 2]> for XorShift128Plus {
    type Error = Error;

    fn try_from(seed: [u64; 2]) -> Result<Self> {
        Self::new(seed)
    }
}

impl From<XorShift128Plus> for [u64; 2] {
    fn from(rng: XorShift128Plus) -> Self {
        rng.s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_outputs_from_unit_seed() {
        let mut rng = XorShift128Plus::new([1, 1]).unwrap();
        assert_eq!(rng.next(), 8388673);
        assert_eq!(rng.next(), 8388673);
        assert_eq!(rng.next(), 70368752570370);
    }

    #[test]
    fn test_zero_seed_rejected() {
        assert_eq!(XorShift128Plus::new([0, 0]), Err(Error::ZeroSeed));
    }

    #[test]
    fn test_zero_reseed_keeps_state() {
        let mut rng = XorShift128Plus::new([7, 9]).unwrap();
        let _ = rng.next();
        let before = rng.state();
        assert_eq!(rng.set_seed([0, 0]), Err(Error::ZeroSeed));
        assert_eq!(rng.state(), before);
    }

    #[test]
    fn test_half_zero_seed_is_valid() {
        let mut rng = XorShift128Plus::new([0, 1]).unwrap();
        assert_ne!(rng.next(), 0);
        assert!(XorShift128Plus::new([1, 0]).is_ok());
    }

    #[test]
    fn test_reseed_restarts_stream() {
        let mut rng = XorShift128Plus::new([11, 13]).unwrap();
        let first: Vec<u64> = (0..8).map(|_| rng.next()).collect();
        rng.set_seed([11, 13]).unwrap();
        let second: Vec<u64> = (0..8).map(|_| rng.next()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_range_degenerate_does_not_advance() {
        let mut rng = XorShift128Plus::new([5, 6]).unwrap();
        let before = rng.state();
        assert_eq!(rng.range(42, 42), 42);
        assert_eq!(rng.state(), before);
    }

    #[test]
    fn test_range_reversed_bounds() {
        let mut rng = XorShift128Plus::new([5, 6]).unwrap();
        for _ in 0..1000 {
            let v = rng.range(100, 90);
            assert!((90..=100).contains(&v), "{v}");
        }
    }

    #[test]
    fn test_range_hits_both_ends() {
        let mut rng = XorShift128Plus::new([17, 19]).unwrap();
        let values: Vec<u64> = (0..1000).map(|_| rng.range(0, 3)).collect();
        assert!(values.contains(&0));
        assert!(values.contains(&3));
    }

    #[test]
    fn test_index_bucket_balance() {
        let mut rng = XorShift128Plus::new([0x0123_4567_89ab_cdef, 0xfedc_ba98_7654_3210]).unwrap();
        let mut counts = [0u32; 10];
        for _ in 0..100_000 {
            counts[rng.index(10)] += 1;
        }
        for (bucket, &c) in counts.iter().enumerate() {
            assert!(
                (9_000..11_000).contains(&c),
                "bucket {bucket} has {c} hits"
            );
        }
    }

    #[test]
    fn test_rng_core_matches_generator() {
        let mut a = XorShift128Plus::new([21, 22]).unwrap();
        let mut b = a.clone();
        assert_eq!(a.next_u64(), Generator::next(&mut b));
        assert_eq!(a.next_u32(), (Generator::next(&mut b) >> 32) as u32);
    }

    #[test]
    fn test_serde_checkpoint_resumes_stream() {
        let mut rng = XorShift128Plus::new([3, 4]).unwrap();
        for _ in 0..10 {
            rng.next();
        }
        let json = serde_json::to_string(&rng).unwrap();
        let mut resumed: XorShift128Plus = serde_json::from_str(&json).unwrap();
        for _ in 0..10 {
            assert_eq!(rng.next(), resumed.next());
        }
    }

    #[test]
    fn test_serde_rejects_zero_state() {
        let result: std::result::Result<XorShift128Plus, _> = serde_json::from_str("[0,0]");
        assert!(result.is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn nonzero_seed() -> impl Strategy<Value = [u64; 2]> {
        any::<[u64; 2]>().prop_filter("non-zero", |s| *s != [0, 0])
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn same_seed_same_stream(seed in nonzero_seed()) {
            let mut a = XorShift128Plus::new(seed).unwrap();
            let mut b = XorShift128Plus::new(seed).unwrap();
            for _ in 0..32 {
                prop_assert_eq!(a.next(), b.next());
            }
        }

        #[test]
        fn range_within_bounds(seed in nonzero_seed(), lo in any::<u64>(), hi in any::<u64>()) {
            let mut rng = XorShift128Plus::new(seed).unwrap();
            let (min, max) = if lo <= hi { (lo, hi) } else { (hi, lo) };
            for _ in 0..16 {
                let v = rng.range(lo, hi);
                prop_assert!(v >= min && v <= max, "{v} outside [{min}, {max}]");
            }
        }

        #[test]
        fn range_of_single_value(seed in nonzero_seed(), x in any::<u64>()) {
            let mut rng = XorShift128Plus::new(seed).unwrap();
            prop_assert_eq!(rng.range(x, x), x);
        }

        #[test]
        fn index_within_length(seed in nonzero_seed(), length in 1_usize..10_000) {
            let mut rng = XorShift128Plus::new(seed).unwrap();
            for _ in 0..16 {
                prop_assert!(rng.index(length) < length);
            }
        }

        #[test]
        fn uniform_real_in_unit_interval(seed in nonzero_seed()) {
            let mut rng = XorShift128Plus::new(seed).unwrap();
            for _ in 0..16 {
                let r = rng.uniform_real();
                prop_assert!((0.0..=1.0).contains(&r));
            }
        }
    }
}
