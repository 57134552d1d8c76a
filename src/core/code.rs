//! Symbols, codes and guess validation
//!
//! A [`Code`] is an ordered sequence of [`CODE_LENGTH`] pairwise distinct
//! symbols drawn from a fixed alphabet of [`ALPHABET_SIZE`] digits (`'0'..='8'`).
//! The secret and every guess share this representation. Parsing a string
//! into a `Code` is the only way to validate a guess.

use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of symbols in the alphabet (`'0'..='8'`)
pub const ALPHABET_SIZE: usize = 9;

/// Number of slots in a code
pub const CODE_LENGTH: usize = 4;

/// A single alphabet symbol, stored as its index `0..ALPHABET_SIZE`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(into = "char", try_from = "char")]
pub struct Symbol(u8);

impl Symbol {
    /// Create a symbol from its alphabet index
    ///
    /// Returns `None` if the index lies outside the alphabet.
    pub fn new(index: u8) -> Option<Self> {
        ((index as usize) < ALPHABET_SIZE).then_some(Symbol(index))
    }

    /// Map a character onto the alphabet
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0'..='8' => Some(Symbol(ch as u8 - b'0')),
            _ => None,
        }
    }

    /// Alphabet index of this symbol, usable to index counting arrays
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn as_char(self) -> char {
        (b'0' + self.0) as char
    }

    /// Iterate over the whole alphabet in order
    pub fn all() -> impl Iterator<Item = Symbol> {
        (0..ALPHABET_SIZE as u8).map(Symbol)
    }
}

/// Uniform over the alphabet
impl Distribution<Symbol> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Symbol {
        Symbol(rng.gen_range(0..ALPHABET_SIZE as u8))
    }
}

impl From<Symbol> for char {
    fn from(symbol: Symbol) -> Self {
        symbol.as_char()
    }
}

impl TryFrom<char> for Symbol {
    type Error = ValidationError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Symbol::from_char(ch).ok_or(ValidationError::InvalidSymbol { ch })
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Why a candidate string is not a valid code
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("expected {} symbols, got {len}", CODE_LENGTH)]
    WrongLength { len: usize },

    #[error("'{ch}' is not a digit between 0 and 8")]
    InvalidSymbol { ch: char },

    #[error("symbol '{symbol}' appears more than once")]
    DuplicateSymbol { symbol: Symbol },
}

/// Ordered sequence of distinct symbols, used for the secret and for guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Code([Symbol; CODE_LENGTH]);

impl Code {
    /// Build a code from already-chosen symbols
    ///
    /// Fails with [`ValidationError::DuplicateSymbol`] if a symbol repeats.
    pub fn from_symbols(symbols: [Symbol; CODE_LENGTH]) -> Result<Self, ValidationError> {
        let mut seen = [false; ALPHABET_SIZE];
        for symbol in symbols {
            if seen[symbol.index()] {
                return Err(ValidationError::DuplicateSymbol { symbol });
            }
            seen[symbol.index()] = true;
        }
        Ok(Code(symbols))
    }

    /// Wrap symbols the caller has already drawn without repeats
    pub(crate) fn from_distinct(symbols: [Symbol; CODE_LENGTH]) -> Self {
        debug_assert!(Code::from_symbols(symbols).is_ok());
        Code(symbols)
    }

    /// Validate a candidate string and reinterpret it as a code
    ///
    /// Length is checked first, then every character is mapped onto the
    /// alphabet left to right, then distinctness is checked. The first
    /// failing check decides the error.
    pub fn parse(candidate: &str) -> Result<Self, ValidationError> {
        let len = candidate.chars().count();
        if len != CODE_LENGTH {
            return Err(ValidationError::WrongLength { len });
        }

        let mut symbols = [Symbol(0); CODE_LENGTH];
        for (slot, ch) in symbols.iter_mut().zip(candidate.chars()) {
            *slot = Symbol::from_char(ch).ok_or(ValidationError::InvalidSymbol { ch })?;
        }

        Code::from_symbols(symbols)
    }

    pub fn symbols(&self) -> &[Symbol; CODE_LENGTH] {
        &self.0
    }

    /// Check whether the code contains a symbol at any position
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.0.contains(&symbol)
    }
}

impl FromStr for Code {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Code::parse(s)
    }
}

impl From<Code> for String {
    fn from(code: Code) -> Self {
        code.to_string()
    }
}

impl TryFrom<String> for Code {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Code::parse(&s)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
