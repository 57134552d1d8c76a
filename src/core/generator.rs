//! Random secret generation
//!
//! The generator owns its RNG so games are reproducible from a seed and no
//! process-wide random state is involved.

use crate::core::code::{Code, Symbol, ALPHABET_SIZE, CODE_LENGTH};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use std::time::{SystemTime, UNIX_EPOCH};

/// Draws secrets of distinct symbols from a seeded RNG
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    seed: u64,
    rng: ChaCha12Rng,
}

impl CodeGenerator {
    /// Create a generator with a fixed seed (for deterministic games and tests)
    pub fn with_seed(seed: u64) -> Self {
        CodeGenerator {
            seed,
            rng: ChaCha12Rng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from the wall clock
    pub fn from_clock() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::with_seed(seed)
    }

    /// The seed this generator started from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a new secret
    ///
    /// Indices are drawn uniformly from the alphabet and redrawn when already
    /// used, so symbols appear in draw order. At most 3 of 9 symbols are
    /// taken when drawing, so each draw succeeds with probability >= 2/3.
    pub fn generate(&mut self) -> Code {
        let mut used = [false; ALPHABET_SIZE];
        let mut symbols = [Symbol::default(); CODE_LENGTH];
        let mut placed = 0;

        while placed < CODE_LENGTH {
            let symbol: Symbol = self.rng.gen();
            if !used[symbol.index()] {
                used[symbol.index()] = true;
                symbols[placed] = symbol;
                placed += 1;
            }
        }

        Code::from_distinct(symbols)
    }
}
