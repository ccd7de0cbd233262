//! # omnia
//!
//! A heterogeneous collection of small numeric tools.
//!
//! Each module stands alone; the only internal dependency is
//! [`signal`] drawing its noise from [`random::Kiss64`].
//!
//! ## Modules
//!
//! - [`random`] — xorshift128+, 64-bit KISS, and 32-bit KISS generators
//! - [`integer`] — GCD, LCM, power-of-two sizing
//! - [`rounding`] — round-half-even and significant digits
//! - [`special`] — logarithm to any base, inverse hyperbolic functions
//! - [`stats`] — mean / population variance / std-dev, moving average
//! - [`signal`] — sinusoid synthesis and noise injection
//! - [`consts`] — constants missing from `std::f64::consts`
//!
//! ## Design Philosophy
//!
//! - **Owned state**: generators are plain values; there is no global
//!   stream to share or lock.
//! - **Bit-exact streams**: each engine reproduces its published reference
//!   sequence for a given seed.
//! - **In-band domain errors**: out-of-domain math returns `NaN`; only
//!   conditions that cannot be signalled in-band use [`Error`].
//! - **Property-based testing**: invariants verified via proptest.
//!
//! ## Example
//!
//! ```
//! use omnia::random::{Generator, XorShift128Plus};
//! use omnia::stats::basic_stats;
//!
//! let mut rng = XorShift128Plus::new([2016, 1]).unwrap();
//! let mut counts = [0.0; 10];
//! for _ in 0..10_000 {
//!     counts[rng.index(10)] += 1.0;
//! }
//! let s = basic_stats(&counts).unwrap();
//! assert_eq!(s.mean, 1000.0);
//! ```

pub mod consts;
pub mod error;
pub mod integer;
pub mod random;
pub mod rounding;
pub mod signal;
pub mod special;
pub mod stats;

pub use error::{Error, Result};
pub use random::{Generator, Kiss32, Kiss64, XorShift128Plus};
