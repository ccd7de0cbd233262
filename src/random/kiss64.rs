//! 64-bit KISS generator.
//!
//! # Algorithm
//!
//! Marsaglia's "Keep It Simple Stupid" combination of three generators,
//! summed:
//!
//! - a multiply-with-carry style component on `(x, c)`;
//! - a 64-bit xorshift on `y` (shifts 13, 17, 43);
//! - a linear congruential generator on `z` (`6906969069·z + 1234567`).
//!
//! Reference: G. Marsaglia, "64-bit KISS RNGs", comp.lang.c, February 2009.
//!
//! # Seeding
//!
//! [`Kiss64::new`] starts from Marsaglia's published constants and produces
//! the reference stream. [`Kiss64::set_seed`] restores those constants and
//! then folds the seed into every component, so two generators reseeded with
//! the same value produce the same stream regardless of their history, and
//! seed `0` reproduces the reference stream.

use rand::rand_core::impls;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use super::Generator;

const X0: u64 = 1_234_567_890_987_654_321;
const C0: u64 = 123_456_123_456_123_456;
const Y0: u64 = 362_436_362_436_362_436;
const Z0: u64 = 1_066_149_217_761_810;
const T0: u64 = 29_979_245_822_353_888;

const LCG_MULTIPLIER: u64 = 6_906_969_069;
const LCG_INCREMENT: u64 = 1_234_567;

/// 64-bit KISS pseudo-random number generator.
///
/// # Examples
/// ```
/// use omnia::random::{Generator, Kiss64};
///
/// let mut rng = Kiss64::new();
/// assert_eq!(rng.next(), 8932985056925012148);
///
/// let mut a = Kiss64::with_seed(99);
/// let mut b = Kiss64::with_seed(99);
/// assert_eq!(a.next(), b.next());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kiss64 {
    x: u64,
    c: u64,
    y: u64,
    z: u64,
    t: u64,
}

impl Kiss64 {
    /// Creates a generator in the reference state.
    pub fn new() -> Self {
        Self {
            x: X0,
            c: C0,
            y: Y0,
            z: Z0,
            t: T0,
        }
    }

    /// Creates a generator seeded with `seed`.
    pub fn with_seed(seed: u64) -> Self {
        let mut rng = Self::new();
        rng.set_seed(seed);
        rng
    }

    /// Reseeds every component from `seed`, discarding the current state.
    pub fn set_seed(&mut self, seed: u64) {
        *self = Self::new();
        self.x ^= seed;
        // The xorshift component must never be zero.
        self.y = match Y0 ^ seed {
            0 => Y0,
            y => y,
        };
        self.z = Z0.wrapping_add(seed);
        self.t = seed;
    }
}

impl Default for Kiss64 {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for Kiss64 {
    type Word = u64;

    fn next(&mut self) -> u64 {
        let t = (self.x << 58).wrapping_add(self.c);
        self.c = self.x >> 6;
        self.x = self.x.wrapping_add(t);
        self.c = self.c.wrapping_add(u64::from(self.x < t));

        self.y ^= self.y << 13;
        self.y ^= self.y >> 17;
        self.y ^= self.y << 43;

        self.z = LCG_MULTIPLIER.wrapping_mul(self.z).wrapping_add(LCG_INCREMENT);

        self.t = self.x.wrapping_add(self.y).wrapping_add(self.z);
        self.t
    }

    /// `next() / (2⁶⁴ − 1)`; the top of the range rounds to exactly `1.0`.
    fn uniform_real(&mut self) -> f64 {
        self.next() as f64 / u64::MAX as f64
    }
}

impl RngCore for Kiss64 {
    fn next_u32(&mut self) -> u32 {
        (Generator::next(self) >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        Generator::next(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

impl SeedableRng for Kiss64 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::with_seed(u64::from_le_bytes(seed))
    }
}
