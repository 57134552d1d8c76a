//! Well-placed / misplaced scoring
//!
//! Misplaced credit is a multiset intersection over the positions that did
//! not match exactly, so a symbol is never credited twice even if codes were
//! ever allowed to repeat symbols.

use crate::core::code::{Code, ALPHABET_SIZE, CODE_LENGTH};
use serde::{Deserialize, Serialize};

/// Feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub well_placed: u8,
    pub misplaced: u8,
}

impl Score {
    pub fn new(well_placed: u8, misplaced: u8) -> Self {
        Score {
            well_placed,
            misplaced,
        }
    }

    /// Every slot matched
    pub fn is_win(&self) -> bool {
        self.well_placed as usize == CODE_LENGTH
    }
}

/// Score a guess against the secret
///
/// Both codes must already be valid; nothing is re-validated here.
pub fn score(secret: &Code, guess: &Code) -> Score {
    let mut well_placed = 0u8;
    let mut secret_counts = [0u8; ALPHABET_SIZE];
    let mut guess_counts = [0u8; ALPHABET_SIZE];

    for (s, g) in secret.symbols().iter().zip(guess.symbols()) {
        if s == g {
            well_placed += 1;
        } else {
            secret_counts[s.index()] += 1;
            guess_counts[g.index()] += 1;
        }
    }

    let misplaced = secret_counts
        .iter()
        .zip(guess_counts.iter())
        .map(|(s, g)| *s.min(g))
        .sum();

    Score {
        well_placed,
        misplaced,
    }
}
