// src/lib.rs

//! `upset-gambler` - A library for simulating the two-state upset-gambler
//! hidden Markov process
//!
//! The process has two hidden states: `A` emits '0' with probability `p`
//! and may persist, while `B` emits '0' with probability `q` and always
//! returns to `A` after one emission. This library steps that generator to
//! emit fixed-length binary words and accumulates many independent trials
//! into an empirical word distribution, alongside the classical statistics
//! (stationary distribution, statistical complexity) used to characterize
//! the process.

pub mod core;
pub mod circuits;
pub mod sampling;
pub mod simulation;
pub mod analysis;

// Re-export the most common types for easier top-level use
pub use crate::core::{ProcessError, ProcessParams, State, Symbol, Word};
pub use circuits::EmissionCircuit;
pub use sampling::{CircuitSampler, PseudoRandomSource, RetryingSource, SymbolSource};
pub use simulation::{Distribution, Simulator};
pub use analysis::{check_probabilities, classical_complexity, stationary_distribution};

// Example 1: Seeded word generation
// Demonstrates stepping the generator from state A and the reproducibility
// guarantee of a fixed seed.
/// ```
/// use upset_gambler::{ProcessError, ProcessParams, Simulator};
///
/// # fn main() -> Result<(), ProcessError> {
/// let params = ProcessParams::new(0.2, 0.7)?;
///
/// // Two simulators with the same seed generate the same word.
/// let (word_a, final_a) = Simulator::with_seed(params, 42).generate_word(4)?;
/// let (word_b, final_b) = Simulator::with_seed(params, 42).generate_word(4)?;
/// assert_eq!(word_a, word_b);
/// assert_eq!(final_a, final_b);
///
/// println!("word = {}, final state = {}", word_a, final_a);
/// # Ok(())
/// # }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Accumulated word statistics
// Demonstrates building an empirical distribution over 4-symbol words and
// normalizing it for reporting.
/// ```
/// use upset_gambler::{check_probabilities, ProcessError, ProcessParams, Simulator};
///
/// # fn main() -> Result<(), ProcessError> {
/// let params = ProcessParams::new(0.2, 0.7)?;
/// let mut simulator = Simulator::with_seed(params, 7);
///
/// let distribution = simulator.accumulate_distribution(4, 1000)?;
/// assert_eq!(distribution.total(), 1000);
///
/// // Probabilities are reported in ascending binary word order and sum to 1.
/// let probabilities = distribution.normalize()?;
/// check_probabilities(&probabilities, None)?;
/// for (word, probability) in &probabilities {
///     println!("{}: {:.4}", word, probability);
/// }
/// # Ok(())
/// # }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
