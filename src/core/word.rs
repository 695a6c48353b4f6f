// src/core/word.rs

use super::error::ProcessError;
use super::state::Symbol;
use std::fmt;
use std::str::FromStr;

/// A fixed-length sequence of emitted symbols, treated as one sample unit
/// for distribution statistics.
///
/// Words are the keys of the empirical `Distribution`. The derived ordering
/// is lexicographic over symbols, which (because `Zero < One`) coincides
/// with ascending binary value — the conventional reporting order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(Vec<Symbol>);

impl Word {
    /// Creates a word from an ordered sequence of symbols.
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self(symbols)
    }

    /// Read-only view of the symbols in emission order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    /// Number of symbols in the word.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the word contains no symbols.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The word's value as an unsigned integer, first symbol most
    /// significant. Matches the ascending-binary reporting order.
    pub fn value(&self) -> u64 {
        self.0
            .iter()
            .fold(0, |acc, s| (acc << 1) | u64::from(s.as_bit()))
    }

    /// Enumerates every possible word of the given length in ascending
    /// binary order. Useful for reporting zero-count buckets alongside
    /// observed ones.
    pub fn enumerate(length: u32) -> Vec<Word> {
        let count = 1u64 << length;
        (0..count)
            .map(|value| {
                let symbols = (0..length)
                    .rev()
                    .map(|bit| {
                        if (value >> bit) & 1 == 1 { Symbol::One } else { Symbol::Zero }
                    })
                    .collect();
                Word(symbols)
            })
            .collect()
    }
}

impl FromStr for Word {
    type Err = ProcessError;

    /// Parses a word from its `'0'/'1'` string form, rejecting any other
    /// character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| match c {
                '0' => Ok(Symbol::Zero),
                '1' => Ok(Symbol::One),
                other => Err(ProcessError::InvalidWord {
                    message: format!("Character '{}' is not a binary symbol", other),
                }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Word)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}
