//! Pseudo-random number generators.
//!
//! Three small, fast, non-cryptographic engines:
//!
//! | Engine | Word | State | Notes |
//! |---|---|---|---|
//! | [`XorShift128Plus`] | `u64` | 2 × u64 | Vigna's xorshift128+; the default choice |
//! | [`Kiss64`] | `u64` | 5 × u64 | Marsaglia's 64-bit KISS |
//! | [`Kiss32`] | `u32` | 4 × u32 | 32-bit KISS; yields zero until seeded |
//!
//! All engines implement [`Generator`], which maps raw words onto inclusive
//! ranges, slice indices, and reals, and [`rand::RngCore`], so they can drive
//! any [`rand::Rng`] consumer.
//!
//! # Reproducibility
//!
//! Every engine is a plain owned value. The same seed always yields the same
//! sequence, on every platform, and independent instances never share state.
//! Engines derive `serde` traits so a stream can be checkpointed and resumed.
//!
//! # Not for cryptography
//!
//! None of these generators resist an adversary who observes their output.

mod kiss32;
mod kiss64;
mod xorshift;

pub use kiss32::Kiss32;
pub use kiss64::Kiss64;
pub use xorshift::XorShift128Plus;

/// Common interface of the engines in this module.
///
/// Implementors supply [`next`](Generator::next) and
/// [`uniform_real`](Generator::uniform_real); the range and index mappings
/// are shared.
///
/// # Examples
/// ```
/// use omnia::random::{Generator, Kiss64};
///
/// let mut rng = Kiss64::with_seed(2016);
/// let die = rng.range(1, 6);
/// assert!((1..=6).contains(&die));
///
/// let idx = rng.index(10);
/// assert!(idx < 10);
///
/// // Degenerate ranges do not advance the generator.
/// let before = rng.clone();
/// assert_eq!(rng.range(7, 7), 7);
/// assert_eq!(rng.next(), before.clone().next());
/// ```
pub trait Generator {
    /// Raw output word.
    type Word: Copy + Into<u64> + TryFrom<u64>;

    /// Advances the state and returns the next raw word.
    fn next(&mut self) -> Self::Word;

    /// Returns the next value as a real number in `[0, 1]`.
    ///
    /// Whether `1.0` itself is reachable depends on the engine.
    fn uniform_real(&mut self) -> f64;

    /// Returns a value in the inclusive range between `lo` and `hi`.
    ///
    /// The bounds may be given in either order. If `lo == hi` that value is
    /// returned without consuming any generator output.
    ///
    /// # Algorithm
    /// `min + floor((max − min + 1) · u)` with `u` from
    /// [`uniform_real`](Generator::uniform_real), clamped to `max`. The
    /// mapping inherits the granularity of `f64`, so spans wider than 2⁵³
    /// are not uniformly covered.
    fn range(&mut self, lo: Self::Word, hi: Self::Word) -> Self::Word {
        let (lo_wide, hi_wide) = (lo.into(), hi.into());
        if lo_wide == hi_wide {
            return hi;
        }
        let (min, max) = if hi_wide < lo_wide {
            (hi_wide, lo_wide)
        } else {
            (lo_wide, hi_wide)
        };
        let value = scale_into_range(min, max, self.uniform_real());
        Self::Word::try_from(value).unwrap_or(if hi_wide < lo_wide { lo } else { hi })
    }

    /// Returns an index in `[0, length)`, or `0` if `length == 0`.
    fn index(&mut self, length: usize) -> usize {
        scale_into_index(length, self.uniform_real())
    }
}

/// Maps `u ∈ [0, 1]` onto `[min, max]` as `min + floor((max − min + 1) · u)`.
fn scale_into_range(min: u64, max: u64, u: f64) -> u64 {
    let span = (max - min) as f64 + 1.0;
    // `as` saturates, and the clamp absorbs u == 1.0 and f64 round-up.
    let offset = (span * u).floor() as u64;
    min.saturating_add(offset).min(max)
}

/// Maps `u ∈ [0, 1]` onto `[0, length)`.
fn scale_into_index(length: usize, u: f64) -> usize {
    if length == 0 {
        return 0;
    }
    ((length as f64 * u) as usize).min(length - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_into_range_endpoints() {
        assert_eq!(scale_into_range(10, 20, 0.0), 10);
        assert_eq!(scale_into_range(10, 20, 0.999_999), 20);
        // u == 1.0 would land one past the top without the clamp.
        assert_eq!(scale_into_range(10, 20, 1.0), 20);
    }

    #[test]
    fn test_scale_into_range_full_width() {
        assert_eq!(scale_into_range(0, u64::MAX, 1.0), u64::MAX);
        assert_eq!(scale_into_range(0, u64::MAX, 0.0), 0);
        assert_eq!(scale_into_range(u64::MAX - 1, u64::MAX, 1.0), u64::MAX);
    }

    #[test]
    fn test_scale_into_range_buckets() {
        // Two values, each taking half of [0, 1).
        assert_eq!(scale_into_range(0, 1, 0.49), 0);
        assert_eq!(scale_into_range(0, 1, 0.5), 1);
    }

    #[test]
    fn test_scale_into_index() {
        assert_eq!(scale_into_index(0, 0.5), 0);
        assert_eq!(scale_into_index(1, 0.999), 0);
        assert_eq!(scale_into_index(10, 0.0), 0);
        assert_eq!(scale_into_index(10, 0.95), 9);
        assert_eq!(scale_into_index(10, 1.0), 9);
    }

    #[test]
    fn test_generators_are_independent() {
        let mut a = Kiss64::with_seed(1);
        let mut b = Kiss64::with_seed(1);
        let _ = a.next();
        let _ = a.next();
        // Advancing `a` leaves `b` at the start of the stream.
        let mut fresh = Kiss64::with_seed(1);
        assert_eq!(b.next(), fresh.next());
    }

    #[test]
    fn test_engines_drive_rand() {
        use rand::Rng;

        let mut xs = XorShift128Plus::new([3, 5]).unwrap();
        let mut k64 = Kiss64::with_seed(3);
        let mut k32 = Kiss32::with_seed(3);
        for _ in 0..100 {
            assert!((0..10).contains(&xs.random_range(0..10)));
            assert!((0..10).contains(&k64.random_range(0..10)));
            assert!((0..10).contains(&k32.random_range(0..10)));
        }
        let x: f64 = xs.random();
        assert!((0.0..1.0).contains(&x));
    }
}
