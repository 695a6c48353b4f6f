// src/core/params.rs

use super::error::ProcessError;
use super::state::State;
use std::fmt;

/// Validated emission parameters of the upset-gambler process.
///
/// `p` is the probability of emitting '0' while in state `A`; `q` is the
/// probability of emitting '0' while in state `B`. Both are checked at
/// construction, so every `ProcessParams` in circulation carries biases a
/// sampler can trust. The values are fixed for the lifetime of a run and
/// never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessParams {
    p: f64,
    q: f64,
}

impl ProcessParams {
    /// Creates validated process parameters.
    ///
    /// # Returns
    /// * `Ok(ProcessParams)` if both `p` and `q` are finite and in `[0, 1]`.
    /// * `Err(ProcessError::InvalidParameter)` otherwise.
    pub fn new(p: f64, q: f64) -> Result<Self, ProcessError> {
        check_probability("p", p)?;
        check_probability("q", q)?;
        Ok(Self { p, q })
    }

    /// Probability of emitting '0' from state `A`.
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Probability of emitting '0' from state `B`.
    pub fn q(&self) -> f64 {
        self.q
    }

    /// The zero-emission bias governing the given state.
    pub fn zero_probability(&self, state: State) -> f64 {
        match state {
            State::A => self.p,
            State::B => self.q,
        }
    }

    /// The Ry rotation angle encoding the given state's emission bias,
    /// `theta = 2 * acos(sqrt(bias))`.
    ///
    /// Preparing `Ry(theta)|0>` yields a qubit that measures 0 with exactly
    /// the state's zero-emission probability, which is how the process maps
    /// onto a single-qubit emission circuit.
    pub fn rotation_angle(&self, state: State) -> f64 {
        2.0 * self.zero_probability(state).sqrt().acos()
    }
}

impl fmt::Display for ProcessParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProcessParams(p={}, q={})", self.p, self.q)
    }
}

/// Validates a single probability value, naming the offending parameter.
pub(crate) fn check_probability(name: &str, value: f64) -> Result<(), ProcessError> {
    if !value.is_finite() {
        return Err(ProcessError::InvalidParameter {
            message: format!("Parameter '{}' must be a finite number, got {}", name, value),
        });
    }
    if !(0.0..=1.0).contains(&value) {
        return Err(ProcessError::InvalidParameter {
            message: format!("Parameter '{}' must lie in [0, 1], got {}", name, value),
        });
    }
    Ok(())
}
