//! Codes, scoring and secret generation

pub mod code;
pub mod generator;
pub mod score;

pub use code::{Code, Symbol, ValidationError, ALPHABET_SIZE, CODE_LENGTH};
pub use generator::CodeGenerator;
pub use score::{score, Score};
