//! 32-bit KISS generator.
//!
//! Combines a 32-bit LCG (`69069·m₁ + 12345`), a 32-bit xorshift
//! (13, 17, 5), and a multiply-with-carry on `(m₃, m₀)` with multiplier
//! 698769069. Period is roughly 2¹²⁵.
//!
//! The four state words are expanded from a single 32-bit seed with the
//! Knuth multiplier 1812433253. Until the first seed the generator has no
//! state and yields zeros.

use rand::rand_core::impls;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use super::Generator;

/// Knuth's seed-expansion multiplier.
const SEED_MULTIPLIER: u32 = 1_812_433_253;
const MWC_MULTIPLIER: u64 = 698_769_069;
const LCG_MULTIPLIER: u32 = 69_069;
const LCG_INCREMENT: u32 = 12_345;

/// 2³², the divisor for [`Kiss32::uniform_real`](Generator::uniform_real).
const TWO_POW_32: f64 = 4_294_967_296.0;

/// 32-bit KISS pseudo-random number generator.
///
/// # Examples
/// ```
/// use omnia::random::{Generator, Kiss32};
///
/// let mut unseeded = Kiss32::new();
/// assert_eq!(unseeded.next(), 0);
///
/// let mut rng = Kiss32::with_seed(42);
/// assert_eq!(rng.next(), 1023440323);
/// assert!(rng.uniform_real() < 1.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kiss32 {
    m: Option<[u32; 4]>,
}

impl Kiss32 {
    /// Creates an unseeded generator.
    pub fn new() -> Self {
        Self { m: None }
    }

    /// Creates a generator seeded with `seed`.
    pub fn with_seed(seed: u32) -> Self {
        let mut rng = Self::new();
        rng.set_seed(seed);
        rng
    }

    /// Expands `seed` into the four state words, replacing any current state.
    pub fn set_seed(&mut self, seed: u32) {
        let expand = |prev: u32, k: u32| {
            SEED_MULTIPLIER
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(k)
        };
        let m0 = expand(seed, 1);
        let m1 = expand(m0, 2);
        let m2 = expand(m1, 3);
        let m3 = expand(m2, 5);
        self.m = Some([m0, m1, m2, m3]);
    }

    /// Returns `true` once [`set_seed`](Self::set_seed) has been called.
    pub fn is_seeded(&self) -> bool {
        self.m.is_some()
    }
}

impl Generator for Kiss32 {
    type Word = u32;

    /// Returns `0` while unseeded.
    fn next(&mut self) -> u32 {
        let Some(m) = self.m.as_mut() else {
            return 0;
        };

        m[1] = LCG_MULTIPLIER.wrapping_mul(m[1]).wrapping_add(LCG_INCREMENT);

        m[2] ^= m[2] << 13;
        m[2] ^= m[2] >> 17;
        m[2] ^= m[2] << 5;

        let carry = MWC_MULTIPLIER * u64::from(m[3]) + u64::from(m[0]);
        m[0] = (carry >> 32) as u32;
        m[3] = carry as u32;

        m[1].wrapping_add(m[2]).wrapping_add(m[3])
    }

    /// `next() / 2³²`, always strictly below `1.0`.
    fn uniform_real(&mut self) -> f64 {
        f64::from(self.next()) / TWO_POW_32
    }
}

impl RngCore for Kiss32 {
    fn next_u32(&mut self) -> u32 {
        Generator::next(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

impl SeedableRng for Kiss32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::with_seed(u32::from_le_bytes(seed))
    }
}
