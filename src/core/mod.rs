// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod error;
pub mod params;
pub mod state;
pub mod word;

// Re-export public types for convenient access via `upset_gambler::core::TypeName`
pub use error::ProcessError;
pub use params::ProcessParams;
pub use state::{State, Symbol};
pub use word::Word;

pub mod constants;
pub use constants::process_constants::{DEFAULT_WORD_LENGTH, PROBABILITY_SUM_TOLERANCE}; // Re-export
