// src/sampling/mod.rs

//! Symbol sources: the injectable randomness seam of the simulator.
//!
//! A [`SymbolSource`] is an opaque biased-coin provider. The simulator asks
//! it for one symbol at a time, passing the zero-emission bias of the current
//! hidden state; how the flip actually happens (a seeded PRNG, a modelled
//! emission circuit, a remote backend) is the source's business. Keeping the
//! seam here is what makes word generation reproducible under a fixed seed.

use crate::circuits::EmissionCircuit;
use crate::core::{ProcessError, Symbol};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A provider of single biased-coin samples.
///
/// Implementations must return [`Symbol::Zero`] with exactly the requested
/// probability (up to their own sampling noise) and [`Symbol::One`]
/// otherwise; no other outcomes exist.
pub trait SymbolSource {
    /// Draws one symbol, emitting '0' with probability `zero_probability`.
    ///
    /// # Returns
    /// * `Ok(Symbol)` on a successful draw.
    /// * `Err(ProcessError::InvalidParameter)` if the bias is not a
    ///   probability.
    /// * `Err(ProcessError::BackendFailure)` if the underlying provider
    ///   could not produce a sample.
    fn draw(&mut self, zero_probability: f64) -> Result<Symbol, ProcessError>;
}

/// Symbol source backed by the standard seedable PRNG.
///
/// This is the default source for classical simulation runs. One instance is
/// held for a whole run; re-seeding happens only through explicit
/// construction.
#[derive(Debug)]
pub struct PseudoRandomSource {
    rng: StdRng,
}

impl PseudoRandomSource {
    /// Creates a source seeded from operating-system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a deterministically seeded source.
    ///
    /// Two sources built from the same seed produce identical symbol
    /// streams for identical bias sequences.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for PseudoRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolSource for PseudoRandomSource {
    fn draw(&mut self, zero_probability: f64) -> Result<Symbol, ProcessError> {
        crate::core::params::check_probability("zero_probability", zero_probability)?;
        let sample: f64 = self.rng.random(); // Uniform in [0, 1)
        if sample < zero_probability {
            Ok(Symbol::Zero)
        } else {
            Ok(Symbol::One)
        }
    }
}

/// Symbol source that routes each draw through a modelled emission circuit.
///
/// The bias is first encoded as an Ry rotation angle, then read back as the
/// Born-rule probability of the circuit's `|0>` amplitude before sampling.
/// Observable results match [`PseudoRandomSource`] for the same seed; the
/// detour exists to exercise the same angle-encoding path a circuit backend
/// would use.
#[derive(Debug)]
pub struct CircuitSampler {
    rng: StdRng,
}

impl CircuitSampler {
    /// Creates a sampler seeded from operating-system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a deterministically seeded sampler.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for CircuitSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolSource for CircuitSampler {
    fn draw(&mut self, zero_probability: f64) -> Result<Symbol, ProcessError> {
        let circuit = EmissionCircuit::with_bias(zero_probability)?;
        let p0 = circuit.zero_probability();
        let sample: f64 = self.rng.random();
        if sample < p0 {
            Ok(Symbol::Zero)
        } else {
            Ok(Symbol::One)
        }
    }
}

/// Bounded-retry wrapper around another symbol source.
///
/// Only [`ProcessError::BackendFailure`] is treated as transient and
/// retried; parameter errors are surfaced immediately since retrying cannot
/// fix them. After `max_attempts` consecutive failures the last error is
/// returned.
#[derive(Debug)]
pub struct RetryingSource<S> {
    inner: S,
    max_attempts: u32,
}

impl<S: SymbolSource> RetryingSource<S> {
    /// Wraps a source with a retry budget.
    ///
    /// `max_attempts` counts total tries, so a value of 1 disables
    /// retrying. A value of 0 is clamped to 1.
    pub fn new(inner: S, max_attempts: u32) -> Self {
        Self {
            inner,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Consumes the wrapper, returning the wrapped source.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: SymbolSource> SymbolSource for RetryingSource<S> {
    fn draw(&mut self, zero_probability: f64) -> Result<Symbol, ProcessError> {
        let mut last_failure = None;
        for _ in 0..self.max_attempts {
            match self.inner.draw(zero_probability) {
                Ok(symbol) => return Ok(symbol),
                Err(e @ ProcessError::BackendFailure { .. }) => last_failure = Some(e),
                Err(other) => return Err(other),
            }
        }
        Err(last_failure.unwrap_or_else(|| ProcessError::BackendFailure {
            message: "Symbol source failed without reporting an error".to_string(),
        }))
    }
}
