// src/core/state.rs

use super::error::ProcessError;
use std::fmt;

/// Binary output symbol emitted by the generator on each step.
///
/// Ordering is `Zero < One`, so the derived lexicographic order on symbol
/// sequences matches ascending binary-value order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    /// The '0' symbol.
    Zero,
    /// The '1' symbol.
    One,
}

impl Symbol {
    /// Converts a raw bit value into a symbol.
    ///
    /// Anything other than 0 or 1 is rejected rather than clamped; a
    /// measurement backend handing back another value is a fault, not a
    /// symbol.
    pub fn from_bit(bit: u8) -> Result<Self, ProcessError> {
        match bit {
            0 => Ok(Symbol::Zero),
            1 => Ok(Symbol::One),
            other => Err(ProcessError::InvalidWord {
                message: format!("Bit value {} is not a valid binary symbol", other),
            }),
        }
    }

    /// The symbol as a numeric bit.
    pub fn as_bit(&self) -> u8 {
        match self {
            Symbol::Zero => 0,
            Symbol::One => 1,
        }
    }

    /// The symbol as its display character.
    pub fn as_char(&self) -> char {
        match self {
            Symbol::Zero => '0',
            Symbol::One => '1',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Hidden Markov state of the upset-gambler generator.
///
/// State `A` may persist (on symbol 1) or hand off to `B` (on symbol 0);
/// state `B` always returns to `A` after a single emission. That asymmetry
/// is the entire structure of the process. Representing the state as a
/// two-variant enum makes any "unexpected state" unrepresentable, so the
/// transition function is total and needs no runtime rejection path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum State {
    /// The persistent state; emits '0' with probability `p`.
    A,
    /// The transient state; emits '0' with probability `q`.
    B,
}

impl State {
    /// Pure transition function of the process.
    ///
    /// | state | symbol | next |
    /// |-------|--------|------|
    /// | A     | 0      | B    |
    /// | A     | 1      | A    |
    /// | B     | any    | A    |
    pub fn transition(self, symbol: Symbol) -> State {
        match (self, symbol) {
            (State::A, Symbol::Zero) => State::B,
            (State::A, Symbol::One) => State::A,
            (State::B, _) => State::A,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::A => write!(f, "A"),
            State::B => write!(f, "B"),
        }
    }
}
