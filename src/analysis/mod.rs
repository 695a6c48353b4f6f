// src/analysis/mod.rs

//! Classical statistics of the upset-gambler process: stationary state
//! probabilities, statistical complexity, and validation of normalized
//! word distributions.

use crate::core::{ProcessError, ProcessParams, PROBABILITY_SUM_TOLERANCE, Word};

/// Stationary distribution `(pi_A, pi_B)` of the hidden-state chain.
///
/// State `B` is entered from `A` with probability `p` and always left after
/// one step, giving `pi_A = 1 / (1 + p)` and `pi_B = p / (1 + p)`.
pub fn stationary_distribution(params: &ProcessParams) -> (f64, f64) {
    let p = params.p();
    (1.0 / (1.0 + p), p / (1.0 + p))
}

/// Classical statistical complexity `C_mu`: the Shannon entropy (in bits)
/// of the stationary state distribution.
///
/// When `p == q` the two states emit identically, the process degenerates
/// to a biased coin, and the complexity is exactly zero regardless of the
/// stationary probabilities.
pub fn classical_complexity(params: &ProcessParams) -> f64 {
    if params.p() == params.q() {
        return 0.0; // Biased coin has no statistical complexity
    }
    let (pi_a, pi_b) = stationary_distribution(params);
    -entropy_term(pi_a) - entropy_term(pi_b)
}

/// One `x * log2(x)` entropy term, with the `0 * log2(0) = 0` convention.
fn entropy_term(x: f64) -> f64 {
    if x <= 0.0 { 0.0 } else { x * x.log2() }
}

/// Checks that a normalized distribution is a valid probability vector:
/// every probability in `[0, 1]` and the total ≈ 1.0.
///
/// # Arguments
/// * `probabilities` - Normalized `(word, probability)` entries.
/// * `tolerance` - Allowed deviation of the sum from 1.0. Defaults are
///   available.
///
/// # Returns
/// * `Ok(())` if the entries form a probability distribution.
/// * `Err(ProcessError::InvalidParameter)` otherwise.
pub fn check_probabilities(
    probabilities: &[(Word, f64)],
    tolerance: Option<f64>,
) -> Result<(), ProcessError> {
    let effective_tolerance = tolerance.unwrap_or(PROBABILITY_SUM_TOLERANCE);
    let mut sum = 0.0;
    for (word, probability) in probabilities {
        if !probability.is_finite() || !(0.0..=1.0).contains(probability) {
            return Err(ProcessError::InvalidParameter {
                message: format!(
                    "Probability {} for word {} is not in [0, 1]",
                    probability, word
                ),
            });
        }
        sum += probability;
    }
    if (sum - 1.0).abs() > effective_tolerance {
        Err(ProcessError::InvalidParameter {
            message: format!(
                "Probabilities sum to {} (Deviation > {})",
                sum, effective_tolerance
            ),
        })
    } else {
        Ok(())
    }
}
