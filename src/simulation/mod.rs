// src/simulation/mod.rs

//! Runs the upset-gambler process: stepping the two-state generator to emit
//! symbols, concatenating them into fixed-length words, and accumulating
//! many independent trials into an empirical [`Distribution`].
//!
//! This module contains the [`Simulator`] entry point; the randomness seam
//! it draws from lives in [`crate::sampling`].

mod results;

// Re-export the main public interface type
pub use results::Distribution;

// Import necessary types for the Simulator struct and its methods
use crate::core::{ProcessError, ProcessParams, State, Symbol, Word};
use crate::sampling::{PseudoRandomSource, SymbolSource};

/// The main simulator orchestrating upset-gambler process runs.
///
/// A simulator owns its parameters and a single reusable symbol source for
/// the whole run, so repeated trials never pay per-trial backend setup and a
/// seeded source yields a reproducible trial sequence.
pub struct Simulator<S = PseudoRandomSource> {
    params: ProcessParams,
    source: S,
}

impl Simulator<PseudoRandomSource> {
    /// Creates a simulator with an OS-entropy-seeded pseudo-random source.
    pub fn new(params: ProcessParams) -> Self {
        Self {
            params,
            source: PseudoRandomSource::new(),
        }
    }

    /// Creates a simulator with a deterministically seeded source.
    ///
    /// Fixing the seed fixes every subsequent word: two simulators built
    /// from the same parameters and seed generate identical trial sequences.
    pub fn with_seed(params: ProcessParams, seed: u64) -> Self {
        Self {
            params,
            source: PseudoRandomSource::with_seed(seed),
        }
    }
}

impl<S: SymbolSource> Simulator<S> {
    /// Creates a simulator drawing from a caller-supplied symbol source
    /// (e.g. a [`crate::sampling::CircuitSampler`] or a retry-wrapped
    /// backend).
    pub fn with_source(params: ProcessParams, source: S) -> Self {
        Self { params, source }
    }

    /// The validated process parameters this simulator runs with.
    pub fn params(&self) -> &ProcessParams {
        &self.params
    }

    /// Draws one symbol from the bias governing the given state.
    ///
    /// Emits '0' with probability `p` in state `A`, or `q` in state `B`.
    pub fn emit_symbol(&mut self, state: State) -> Result<Symbol, ProcessError> {
        self.source.draw(self.params.zero_probability(state))
    }

    /// Generates one word of `length` symbols starting from state `A`.
    ///
    /// Every independent trial of the observed experiments starts in `A`;
    /// use [`Simulator::generate_word_from`] to start elsewhere.
    pub fn generate_word(&mut self, length: u32) -> Result<(Word, State), ProcessError> {
        self.generate_word_from(State::A, length)
    }

    /// Generates one word of `length` symbols from an explicit initial state.
    ///
    /// Each step emits a symbol from the current state's bias, then applies
    /// the pure transition function. Symbols are concatenated in emission
    /// order. Returns the word together with the final hidden state.
    pub fn generate_word_from(
        &mut self,
        initial_state: State,
        length: u32,
    ) -> Result<(Word, State), ProcessError> {
        let mut state = initial_state;
        let mut symbols = Vec::with_capacity(length as usize);
        for _ in 0..length {
            let symbol = self.emit_symbol(state)?;
            symbols.push(symbol);
            state = state.transition(symbol);
        }
        Ok((Word::new(symbols), state))
    }

    /// Runs `trials` independent word generations and tallies the results.
    ///
    /// State is re-initialized to `A` at the top of every trial; the final
    /// state of one trial never leaks into the next. The returned
    /// distribution's counts sum exactly to `trials`. Zero trials yields an
    /// empty distribution, whose normalization is rejected downstream.
    pub fn accumulate_distribution(
        &mut self,
        length: u32,
        trials: u64,
    ) -> Result<Distribution, ProcessError> {
        let mut distribution = Distribution::new();
        for _ in 0..trials {
            let (word, _final_state) = self.generate_word(length)?;
            distribution.record(word);
        }
        Ok(distribution)
    }
}

#[cfg(test)]
mod tests {
    // Import items from the parent module (simulation) and the crate root
    use super::*; // Brings Simulator, Distribution etc. into scope
    use crate::core::DEFAULT_WORD_LENGTH;
    use std::str::FromStr;

    // --- Helper Functions ---
    fn params(p: f64, q: f64) -> ProcessParams {
        ProcessParams::new(p, q).expect("test parameters must be valid")
    }

    fn word(text: &str) -> Word {
        Word::from_str(text).expect("test word literal must parse")
    }

    #[test]
    fn test_transition_table() {
        // The complete transition function of the process.
        assert_eq!(State::A.transition(Symbol::Zero), State::B);
        assert_eq!(State::A.transition(Symbol::One), State::A);
        assert_eq!(State::B.transition(Symbol::Zero), State::A);
        assert_eq!(State::B.transition(Symbol::One), State::A);
    }

    #[test]
    fn test_emit_symbol_degenerate_biases() -> Result<(), ProcessError> {
        // p = 0: state A can never emit '0'.
        let mut sim = Simulator::with_seed(params(0.0, 0.5), 7);
        for _ in 0..32 {
            assert_eq!(sim.emit_symbol(State::A)?, Symbol::One);
        }
        // q = 1: state B always emits '0'.
        let mut sim = Simulator::with_seed(params(0.5, 1.0), 7);
        for _ in 0..32 {
            assert_eq!(sim.emit_symbol(State::B)?, Symbol::Zero);
        }
        Ok(())
    }

    #[test]
    fn test_generate_word_deterministic_extremes() -> Result<(), ProcessError> {
        // p = 0 pins the generator in A emitting '1' forever.
        let mut sim = Simulator::with_seed(params(0.0, 0.7), 1);
        let (w, final_state) = sim.generate_word(DEFAULT_WORD_LENGTH)?;
        assert_eq!(w, word("1111"));
        assert_eq!(final_state, State::A);

        // p = q = 1 forces the alternating A -> B -> A path with all zeros.
        let mut sim = Simulator::with_seed(params(1.0, 1.0), 1);
        let (w, final_state) = sim.generate_word(DEFAULT_WORD_LENGTH)?;
        assert_eq!(w, word("0000"));
        assert_eq!(final_state, State::A);
        Ok(())
    }

    #[test]
    fn test_generate_word_seeded_reproducibility() -> Result<(), ProcessError> {
        let (w1, s1) = Simulator::with_seed(params(0.2, 0.7), 42).generate_word(8)?;
        let (w2, s2) = Simulator::with_seed(params(0.2, 0.7), 42).generate_word(8)?;
        assert_eq!(w1, w2, "Same seed and parameters must reproduce the word");
        assert_eq!(s1, s2);
        Ok(())
    }

    #[test]
    fn test_word_length_matches_request() -> Result<(), ProcessError> {
        let mut sim = Simulator::with_seed(params(0.3, 0.6), 5);
        for length in [0u32, 1, 4, 16] {
            let (w, _) = sim.generate_word(length)?;
            assert_eq!(w.len(), length as usize);
        }
        Ok(())
    }

    #[test]
    fn test_accumulate_counts_sum_to_trials() -> Result<(), ProcessError> {
        let mut sim = Simulator::with_seed(params(0.2, 0.7), 11);
        let distribution = sim.accumulate_distribution(DEFAULT_WORD_LENGTH, 500)?;
        assert_eq!(distribution.total(), 500);
        Ok(())
    }

    #[test]
    fn test_accumulate_zero_trials_is_empty() -> Result<(), ProcessError> {
        let mut sim = Simulator::with_seed(params(0.2, 0.7), 11);
        let distribution = sim.accumulate_distribution(DEFAULT_WORD_LENGTH, 0)?;
        assert!(distribution.is_empty());
        assert!(matches!(
            distribution.normalize(),
            Err(ProcessError::EmptyDistribution { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_trials_restart_from_state_a() -> Result<(), ProcessError> {
        // With p = 1 every trial must open with a '0' from state A. A final
        // state leaking from one trial into the next would start some trial
        // in B (q = 0.5) and flip its first symbol.
        let mut sim = Simulator::with_seed(params(1.0, 0.5), 3);
        let distribution = sim.accumulate_distribution(2, 200)?;
        for (w, count) in distribution.all_counts() {
            assert!(*count > 0);
            assert_eq!(w.symbols()[0], Symbol::Zero, "Trial did not restart in A: {}", w);
        }
        Ok(())
    }
}
