//! Synthetic signals built from sine waves, with optional noise.
//!
//! The primary use is producing test input with known spectral content for
//! signal-analysis code: sum a few [`WaveFactor`]s with [`make_sinusoid`],
//! then perturb the result with [`add_noise`].

use std::f64::consts::PI;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::random::{Generator, Kiss64};

/// One sine component of a synthetic signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveFactor {
    /// Samples per half period: the phase advances by `π / wavelength`
    /// per sample.
    pub wavelength: f64,
    /// Peak amplitude, in whatever units the caller assigns.
    pub amplitude: f64,
}

impl WaveFactor {
    /// Creates a component with the given half period and peak amplitude.
    pub fn new(wavelength: f64, amplitude: f64) -> Self {
        Self {
            wavelength,
            amplitude,
        }
    }
}

/// Sums sine waves into a signal of `samples` points.
///
/// Sample `i` is `Σₖ amplitudeₖ · sin(i · π / wavelengthₖ)`: every
/// component starts at phase zero.
///
/// # Returns
/// An empty vector if `waves` is empty or `samples == 0`.
///
/// # Errors
/// Returns [`Error::Allocation`](crate::Error::Allocation) if the output
/// buffer cannot be reserved.
///
/// # Examples
/// ```
/// use omnia::signal::{make_sinusoid, WaveFactor};
/// let signal = make_sinusoid(&[WaveFactor::new(2.0, 1.0)], 4).unwrap();
/// // Phase 0, π/2, π, 3π/2
/// assert!((signal[1] - 1.0).abs() < 1e-12);
/// assert!((signal[3] + 1.0).abs() < 1e-12);
/// ```
pub fn make_sinusoid(waves: &[WaveFactor], samples: usize) -> Result<Vec<f64>> {
    let mut out = Vec::new();
    if waves.is_empty() || samples == 0 {
        return Ok(out);
    }
    out.try_reserve_exact(samples)?;

    let steps: Vec<f64> = waves.iter().map(|w| PI / w.wavelength).collect();
    let mut phases = vec![0.0_f64; waves.len()];

    for _ in 0..samples {
        let mut value = 0.0;
        for ((wave, phase), step) in waves.iter().zip(phases.iter_mut()).zip(&steps) {
            value += phase.sin() * wave.amplitude;
            *phase += step;
        }
        out.push(value);
    }
    Ok(out)
}

/// Perturbs every sample by up to `noise` in either direction.
///
/// The amplitude is absolute: a noise of `0.1` leaves each value within
/// `±0.1` of the original, zero crossings included. The generator is seeded from the wall clock, so repeated calls
/// within the same second perturb identically; use [`add_noise_with`] for
/// reproducible output.
///
/// Does nothing if `noise <= 0` or `signal` is empty.
pub fn add_noise(signal: &mut [f64], noise: f64) {
    if signal.is_empty() || noise <= 0.0 {
        return;
    }
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    log::debug!("seeding noise generator from clock: {seed}");
    add_noise_with(signal, noise, &mut Kiss64::with_seed(seed));
}

/// Perturbs every sample by up to `noise` in either direction, drawing from
/// `rng`.
///
/// For each sample, draws `u` from [`Generator::uniform_real`] and then
/// adds `u · noise` if the next raw word is odd, or subtracts it otherwise.
///
/// Does nothing if `noise <= 0` or `signal` is empty.
///
/// # Examples
/// ```
/// use omnia::random::Kiss64;
/// use omnia::signal::add_noise_with;
///
/// let mut signal = vec![10.0; 100];
/// add_noise_with(&mut signal, 0.5, &mut Kiss64::with_seed(1));
/// assert!(signal.iter().all(|&v| (9.5..=10.5).contains(&v)));
/// ```
pub fn add_noise_with(signal: &mut [f64], noise: f64, rng: &mut Kiss64) {
    if signal.is_empty() || noise <= 0.0 {
        return;
    }
    for sample in signal.iter_mut() {
        let delta = rng.uniform_real() * noise;
        if rng.next() % 2 == 1 {
            *sample += delta;
        } else {
            *sample -= delta;
        }
    }
}
