//! Example showing the single-qubit emission circuit behind each process
//! step: the state's bias becomes an Ry rotation angle, and the Born-rule
//! zero probability recovers the bias exactly.

use upset_gambler::{
    CircuitSampler, EmissionCircuit, ProcessError, ProcessParams, Simulator, State,
};

fn main() -> Result<(), ProcessError> {
    println!("--- upset-gambler Example: Emission Circuit ---");

    let params = ProcessParams::new(0.2, 0.7)?;
    println!("\nParameters: {}", params);

    for state in [State::A, State::B] {
        let circuit = EmissionCircuit::for_state(&params, state);
        let [amp0, amp1] = circuit.statevector();
        println!("\nState {}:", state);
        println!("  Ry angle theta       = {:.6} rad", circuit.theta());
        println!("  Statevector          = [{:.4}, {:.4}]", amp0, amp1);
        println!("  Born-rule P(measure 0) = {:.4}", circuit.zero_probability());
    }

    // Generate one word by routing every draw through the circuit model.
    let mut simulator = Simulator::with_source(params, CircuitSampler::with_seed(7));
    let (word, final_state) = simulator.generate_word(4)?;
    println!("\nGenerated 4-symbol word via circuit sampling: {}", word);
    println!("Final hidden state: {}", final_state);

    Ok(())
}
