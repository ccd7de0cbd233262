//! Error type shared by the fallible operations in this crate.
//!
//! Most functions here never fail: domain errors surface as `NaN`, and an
//! unseeded [`Kiss32`](crate::random::Kiss32) yields zero. The variants below
//! cover the two cases that cannot be expressed in-band.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors produced by the omnia library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An xorshift+ seed or state of `[0, 0]`, which would emit zeros forever.
    #[error("xorshift+ state must not be all zero")]
    ZeroSeed,

    /// The output buffer for an array-producing function could not be reserved.
    #[error("failed to allocate output buffer: {0}")]
    Allocation(#[from] TryReserveError),
}

/// Result alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
