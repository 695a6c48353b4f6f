// src/circuits/mod.rs

//! Models the single-qubit emission circuit used to realize one step of the
//! upset-gambler process on a quantum backend.
//!
//! One step of the process is a biased coin flip whose bias depends on the
//! current hidden state. On a circuit backend that flip becomes: prepare
//! `|0>`, rotate by `Ry(theta)` with `theta = 2 * acos(sqrt(bias))`, and
//! measure. The Born-rule probability of reading 0 is then `cos^2(theta/2)`,
//! which equals the bias exactly. This module holds that mapping and the
//! resulting two-amplitude statevector; actual sampling lives in
//! [`crate::sampling`].

use crate::core::{ProcessError, ProcessParams, State};
use crate::core::params::check_probability;
use num_complex::Complex;
use num_traits::Zero;

/// A one-step emission circuit: a single qubit prepared in `|0>` and rotated
/// by `Ry(theta)` before measurement.
///
/// Analogy: the `ry(angle); measure` pair the reference experiments append
/// per emitted symbol, reduced to the one parameter that matters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissionCircuit {
    /// The Ry rotation angle in radians.
    theta: f64,
}

impl EmissionCircuit {
    /// Builds the emission circuit for a raw zero-emission bias.
    ///
    /// # Returns
    /// * `Ok(EmissionCircuit)` with `theta = 2 * acos(sqrt(bias))`.
    /// * `Err(ProcessError::InvalidParameter)` if the bias is not a
    ///   probability.
    pub fn with_bias(zero_probability: f64) -> Result<Self, ProcessError> {
        check_probability("zero_probability", zero_probability)?;
        Ok(Self {
            theta: 2.0 * zero_probability.sqrt().acos(),
        })
    }

    /// Builds the emission circuit for one process state, taking the bias
    /// from the validated parameters.
    pub fn for_state(params: &ProcessParams, state: State) -> Self {
        // Bias already validated by ProcessParams, so the angle is well-defined.
        Self {
            theta: params.rotation_angle(state),
        }
    }

    /// The Ry rotation angle in radians.
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// The 2x2 rotation matrix `Ry(theta)`.
    ///
    /// The entries are real for a pure Ry rotation; they are returned as
    /// complex numbers to keep the gate representation uniform with general
    /// single-qubit operations.
    pub fn matrix(&self) -> [[Complex<f64>; 2]; 2] {
        let angle_over_2 = self.theta / 2.0;
        let cos_a = angle_over_2.cos();
        let sin_a = angle_over_2.sin();
        // Ry(theta) = [[cos(a), -sin(a)], [sin(a), cos(a)]] where a=theta/2
        [
            [Complex::new(cos_a, 0.0), Complex::new(-sin_a, 0.0)],
            [Complex::new(sin_a, 0.0), Complex::new(cos_a, 0.0)],
        ]
    }

    /// The statevector `Ry(theta)|0> = [cos(theta/2), sin(theta/2)]`,
    /// obtained by applying the rotation matrix to the prepared `|0>` state.
    pub fn statevector(&self) -> [Complex<f64>; 2] {
        let matrix = self.matrix();
        let psi: [Complex<f64>; 2] = [Complex::new(1.0, 0.0), Complex::zero()]; // |0>
        [
            matrix[0][0] * psi[0] + matrix[0][1] * psi[1],
            matrix[1][0] * psi[0] + matrix[1][1] * psi[1],
        ]
    }

    /// Born-rule probability of measuring 0, `|<0|Ry(theta)|0>|^2`.
    ///
    /// Round-trips the bias passed to [`EmissionCircuit::with_bias`] up to
    /// floating-point error.
    pub fn zero_probability(&self) -> f64 {
        self.statevector()[0].norm_sqr()
    }

    /// Checks that the statevector is normalized (sum of squared
    /// amplitudes ≈ 1.0), guarding against a corrupted angle.
    pub fn check_normalization(&self, tolerance: f64) -> Result<(), ProcessError> {
        let norm_sq: f64 = self.statevector().iter().map(|c| c.norm_sqr()).sum();
        if (norm_sq - 1.0).abs() > tolerance {
            Err(ProcessError::BackendFailure {
                message: format!(
                    "Emission statevector normalization failed. Sum(|c_i|^2) = {} (Deviation > {})",
                    norm_sq, tolerance
                ),
            })
        } else {
            Ok(())
        }
    }
}
