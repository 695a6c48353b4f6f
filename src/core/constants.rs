//! Constants shared across the simulation.

/// Constants for the upset-gambler process and its reporting conventions.
pub mod process_constants {
    /// Word length used by every observed experiment configuration.
    pub const DEFAULT_WORD_LENGTH: u32 = 4;
    /// Allowed deviation when checking that probabilities sum to 1.
    pub const PROBABILITY_SUM_TOLERANCE: f64 = 1e-9;
}
