// tests/simulation_tests.rs

// Import necessary types from the upset_gambler crate
use upset_gambler::{
    check_probabilities, CircuitSampler, ProcessError, ProcessParams, PseudoRandomSource,
    RetryingSource, Simulator, State, Symbol, SymbolSource, Word,
};

// Helper function to create validated parameters for tests
fn params(p: f64, q: f64) -> ProcessParams {
    ProcessParams::new(p, q).expect("test parameters must be valid")
}

#[test]
fn test_invalid_parameters_rejected() {
    for (p, q) in [(-0.1, 0.5), (1.1, 0.5), (0.5, -0.1), (0.5, 1.1), (f64::NAN, 0.5)] {
        let result = ProcessParams::new(p, q);
        assert!(
            matches!(result, Err(ProcessError::InvalidParameter { .. })),
            "Expected InvalidParameter for p={}, q={}",
            p,
            q
        );
    }
}

#[test]
fn test_boundary_parameters_accepted() -> Result<(), ProcessError> {
    // The closed interval [0, 1] is valid, including both endpoints.
    let _ = ProcessParams::new(0.0, 0.0)?;
    let _ = ProcessParams::new(1.0, 1.0)?;
    let _ = ProcessParams::new(0.0, 1.0)?;
    Ok(())
}

#[test]
fn test_emit_symbol_is_always_binary() -> Result<(), ProcessError> {
    // Trivially true by the Symbol type, but exercise several biases to
    // confirm draws succeed across the whole parameter range.
    let mut simulator = Simulator::with_seed(params(0.0, 1.0), 123);
    for _ in 0..100 {
        let symbol_a = simulator.emit_symbol(State::A)?;
        let symbol_b = simulator.emit_symbol(State::B)?;
        assert!(matches!(symbol_a, Symbol::Zero | Symbol::One));
        assert!(matches!(symbol_b, Symbol::Zero | Symbol::One));
    }
    Ok(())
}

#[test]
fn test_reference_scenario_distribution() -> Result<(), ProcessError> {
    // Reference configuration: p = 0.2, q = 0.7, 4-symbol words, 1000 trials.
    let mut simulator = Simulator::with_seed(params(0.2, 0.7), 2024);
    let distribution = simulator.accumulate_distribution(4, 1000)?;

    assert_eq!(distribution.total(), 1000, "Counts must sum to the trial count");

    let probabilities = distribution.normalize()?;
    check_probabilities(&probabilities, None)?;

    // Every observed word is one of the 16 possible 4-bit words, and the
    // reporting order is ascending binary value.
    let all_words = Word::enumerate(4);
    for window in probabilities.windows(2) {
        assert!(window[0].0 < window[1].0, "Reporting order must be ascending");
    }
    for (word, _) in &probabilities {
        assert_eq!(word.len(), 4);
        assert!(all_words.contains(word));
    }
    Ok(())
}

#[test]
fn test_identical_biases_make_states_indistinguishable() -> Result<(), ProcessError> {
    // With p == q the hidden state carries no information: the emitted
    // symbol stream is a plain Bernoulli(p) source. Check the empirical
    // zero frequency against the bias with a generous tolerance.
    let mut simulator = Simulator::with_seed(params(0.5, 0.5), 99);
    let distribution = simulator.accumulate_distribution(4, 2000)?;

    let mut zeros = 0u64;
    let mut symbols = 0u64;
    for (word, count) in distribution.all_counts() {
        for symbol in word.symbols() {
            if *symbol == Symbol::Zero {
                zeros += count;
            }
        }
        symbols += count * word.len() as u64;
    }
    let frequency = zeros as f64 / symbols as f64;
    assert!(
        (frequency - 0.5).abs() < 0.05,
        "Zero frequency {} deviates from the bias 0.5",
        frequency
    );
    Ok(())
}

#[test]
fn test_circuit_sampler_matches_classical_source() -> Result<(), ProcessError> {
    // The circuit detour encodes the bias as an Ry angle and reads it back
    // via the Born rule; with a shared seed the sampled words must agree
    // with the direct pseudo-random source.
    let p = params(0.2, 0.7);
    let (classical, _) = Simulator::with_seed(p, 31).generate_word(6)?;
    let (via_circuit, _) =
        Simulator::with_source(p, CircuitSampler::with_seed(31)).generate_word(6)?;
    assert_eq!(classical, via_circuit);
    Ok(())
}

// A symbol source that fails a fixed number of times before delegating,
// for exercising the bounded-retry wrapper.
struct FlakySource {
    failures_remaining: u32,
    inner: PseudoRandomSource,
}

impl SymbolSource for FlakySource {
    fn draw(&mut self, zero_probability: f64) -> Result<Symbol, ProcessError> {
        if self.failures_remaining > 0 {
            self.failures_remaining -= 1;
            return Err(ProcessError::BackendFailure {
                message: "transient sampling failure".to_string(),
            });
        }
        self.inner.draw(zero_probability)
    }
}

#[test]
fn test_retrying_source_recovers_from_transient_failures() -> Result<(), ProcessError> {
    let flaky = FlakySource {
        failures_remaining: 2,
        inner: PseudoRandomSource::with_seed(5),
    };
    let mut source = RetryingSource::new(flaky, 3);
    let symbol = source.draw(0.5)?;
    assert!(matches!(symbol, Symbol::Zero | Symbol::One));
    Ok(())
}

#[test]
fn test_retrying_source_gives_up_after_budget() {
    let flaky = FlakySource {
        failures_remaining: 10,
        inner: PseudoRandomSource::with_seed(5),
    };
    let mut source = RetryingSource::new(flaky, 3);
    let result = source.draw(0.5);
    assert!(matches!(result, Err(ProcessError::BackendFailure { .. })));
}

#[test]
fn test_retrying_source_does_not_retry_parameter_errors() {
    // An out-of-range bias is a caller bug; retrying cannot fix it, so the
    // error must surface immediately.
    let mut source = RetryingSource::new(PseudoRandomSource::with_seed(1), 5);
    let result = source.draw(1.5);
    assert!(matches!(result, Err(ProcessError::InvalidParameter { .. })));
}
